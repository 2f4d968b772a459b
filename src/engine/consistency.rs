//! Facts-only consistency checking
//!
//! The checker scans asserted facts for direct contradictions (p and ¬p both
//! asserted). It deliberately does not consult rules: a fact set can be
//! reported consistent here even when resolution over the rule table would
//! derive a contradiction. Callers needing the stronger check run a full
//! refutation proof instead.

use crate::logic::{Clause, Literal};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Result of a consistency check over the asserted facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub consistent: bool,
    pub message: String,
    pub contradictions: Vec<String>,
}

/// Scan fact clauses for complementary literal pairs.
///
/// Runs in O(f) over f facts with a seen-set; each contradicting pair is
/// reported once, when its second member is encountered.
pub fn check_facts(facts: &IndexSet<Clause>) -> ConsistencyReport {
    let mut seen: IndexSet<Literal> = IndexSet::new();
    let mut contradictions = Vec::new();

    for fact in facts {
        for lit in fact.literals() {
            if seen.contains(&lit.negate()) {
                contradictions.push(format!("Contradiction: {} and {}", lit, lit.negate()));
            }
            seen.insert(lit.clone());
        }
    }

    if contradictions.is_empty() {
        ConsistencyReport {
            consistent: true,
            message: "Knowledge base is consistent".to_string(),
            contradictions,
        }
    } else {
        ConsistencyReport {
            consistent: false,
            message: "Knowledge base contains contradictions".to_string(),
            contradictions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::ClauseSource;

    fn fact(text: &str) -> Clause {
        let lit = crate::parser::parse_literal(text).unwrap();
        Clause::new(vec![lit], ClauseSource::Fact)
    }

    #[test]
    fn empty_fact_set_is_consistent() {
        let report = check_facts(&IndexSet::new());
        assert!(report.consistent);
        assert!(report.contradictions.is_empty());
    }

    #[test]
    fn complementary_facts_yield_one_entry() {
        let facts: IndexSet<Clause> = [fact("StationOpen_Expo"), fact("¬StationOpen_Expo")]
            .into_iter()
            .collect();
        let report = check_facts(&facts);
        assert!(!report.consistent);
        assert_eq!(report.contradictions.len(), 1);
        assert!(report.contradictions[0].contains("StationOpen_Expo"));
    }

    #[test]
    fn distinct_propositions_do_not_conflict() {
        // StationClosed_X and StationOpen_X are different propositions; only
        // the rule table relates them, and this check ignores rules.
        let facts: IndexSet<Clause> = [fact("StationClosed_TanahMerah"), fact("StationOpen_TanahMerah")]
            .into_iter()
            .collect();
        let report = check_facts(&facts);
        assert!(report.consistent);
    }
}
