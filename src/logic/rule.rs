//! Implication rules and their CNF compilation

use super::clause::{Clause, ClauseSource};
use super::literal::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an advisory rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCategory {
    StationOperation,
    SegmentOperation,
    LineOperation,
    Transfer,
    ModeSpecific,
    AdvisoryConsistency,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleCategory::StationOperation => "Station Operation",
            RuleCategory::SegmentOperation => "Segment Operation",
            RuleCategory::LineOperation => "Line Operation",
            RuleCategory::Transfer => "Transfer Rules",
            RuleCategory::ModeSpecific => "Mode-Specific Rules",
            RuleCategory::AdvisoryConsistency => "Advisory Consistency",
        };
        write!(f, "{}", name)
    }
}

/// A propositional implication rule: P1 ∧ P2 ∧ ... ∧ Pn → C.
///
/// Rules are authored externally and immutable for the lifetime of an
/// engine; premises and conclusion are concrete proposition names (no
/// variables).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub premises: Vec<String>,
    pub conclusion: String,
    pub description: String,
    pub category: RuleCategory,
}

impl Rule {
    pub fn new(
        id: impl Into<String>,
        premises: Vec<&str>,
        conclusion: impl Into<String>,
        description: impl Into<String>,
        category: RuleCategory,
    ) -> Self {
        Rule {
            id: id.into(),
            premises: premises.into_iter().map(String::from).collect(),
            conclusion: conclusion.into(),
            description: description.into(),
            category,
        }
    }

    /// Compile this implication to its CNF clause:
    /// `P1 ∧ P2 → C` becomes `¬P1 ∨ ¬P2 ∨ C`, tagged with the rule id.
    ///
    /// Pure and idempotent: repeated calls yield structurally equal clauses.
    pub fn to_cnf_clause(&self) -> Clause {
        let mut literals: Vec<Literal> = self
            .premises
            .iter()
            .map(|premise| Literal::negative(premise.clone()))
            .collect();
        literals.push(Literal::positive(self.conclusion.clone()));
        Clause::new(literals, ClauseSource::Rule(self.id.clone()))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.premises.as_slice() {
            [single] => write!(f, "{}: {} → {}", self.id, single, self.conclusion),
            premises => write!(
                f,
                "{}: ({}) → {}",
                self.id,
                premises.join(" ∧ "),
                self.conclusion
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rule() -> Rule {
        Rule::new(
            "R4",
            vec!["CannotBoard_Expo", "RouteIncludesExpo"],
            "RouteInvalid",
            "Route including Expo when boarding not allowed is invalid",
            RuleCategory::StationOperation,
        )
    }

    #[test]
    fn cnf_negates_premises_and_keeps_conclusion() {
        let clause = sample_rule().to_cnf_clause();
        let lits = clause.literals();
        assert_eq!(lits.len(), 3);
        assert!(lits.contains(&Literal::negative("CannotBoard_Expo")));
        assert!(lits.contains(&Literal::negative("RouteIncludesExpo")));
        assert!(lits.contains(&Literal::positive("RouteInvalid")));
        assert_eq!(clause.source.rule_id(), Some("R4"));
    }

    #[test]
    fn cnf_compilation_is_idempotent() {
        let rule = sample_rule();
        let first = rule.to_cnf_clause();
        let second = rule.to_cnf_clause();
        assert_eq!(first, second);
        assert_eq!(first.source, second.source);
        assert_eq!(first.derivation, second.derivation);
    }

    #[test]
    fn display_joins_premises() {
        assert_eq!(
            sample_rule().to_string(),
            "R4: (CannotBoard_Expo ∧ RouteIncludesExpo) → RouteInvalid"
        );
        let unary = Rule::new(
            "R1",
            vec!["StationClosed_Expo"],
            "CannotBoard_Expo",
            "",
            RuleCategory::StationOperation,
        );
        assert_eq!(unary.to_string(), "R1: StationClosed_Expo → CannotBoard_Expo");
    }
}
