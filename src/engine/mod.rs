//! Resolution refutation engine
//!
//! Proves queries against asserted facts and a static rule table using
//! propositional resolution:
//!
//! 1. Seed a working clause set with the fact clauses, the CNF compilation
//!    of every rule, and the negation of the query.
//! 2. Saturate by level: each iteration resolves every clause pair in the
//!    working set and stages the surviving resolvents.
//! 3. Deriving the empty clause refutes the negated query, proving it.
//!
//! The loop is deliberately naive (no unit propagation, no subsumption);
//! termination is guaranteed because the clause universe over a fixed
//! proposition vocabulary is finite, with `max_iterations` as the runtime
//! cap on large knowledge bases.
//!
//! Determinism: the working set is an [`IndexSet`] enumerated in insertion
//! order and clause literals are canonically sorted, so repeated `prove()`
//! calls with identical inputs produce identical step logs and
//! violated-rule sequences.

mod consistency;
mod step;

pub use consistency::ConsistencyReport;
pub use step::ResolutionStep;

use crate::logic::{Clause, ClauseSource, Literal, Rule};
use crate::parser::{parse_literal, ParseError};
use indexmap::IndexSet;
use std::fmt;

/// Default cap on saturation iterations per proof attempt
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Outcome of a refutation attempt.
///
/// Both `Saturated` and `IterationLimit` mean the query was not proven, but
/// they are distinct results: saturation is a closed-world negative answer,
/// the iteration limit is an unresolved exploration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofResult {
    /// The empty clause was derived
    Proven { steps: usize },
    /// No new clauses are derivable; the query is not provable
    Saturated,
    /// The iteration cap was reached before saturation
    IterationLimit { max_iterations: usize },
}

impl ProofResult {
    pub fn is_proven(&self) -> bool {
        matches!(self, ProofResult::Proven { .. })
    }

    /// Human-readable explanation of the outcome
    pub fn explanation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProofResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofResult::Proven { steps } => write!(
                f,
                "Proven by resolution (found contradiction in {} steps)",
                steps
            ),
            ProofResult::Saturated => {
                write!(f, "Cannot prove (resolution saturated without finding contradiction)")
            }
            ProofResult::IterationLimit { max_iterations } => {
                write!(f, "Cannot prove (reached max iterations: {})", max_iterations)
            }
        }
    }
}

/// Resolution engine owning the asserted facts and per-proof audit state.
///
/// Rules and the invalidity vocabulary are fixed at construction; facts
/// accumulate across [`add_facts`](ResolutionEngine::add_facts) calls until
/// [`reset`](ResolutionEngine::reset). Each [`prove`](ResolutionEngine::prove)
/// works on a fresh copy of the fact set and never mutates it.
pub struct ResolutionEngine {
    rules: Vec<Rule>,
    /// Closed set of proposition names denoting invalid outcomes, used for
    /// violated-rule attribution. Resolved once at construction; no text
    /// matching happens during the proof loop.
    violation_propositions: IndexSet<String>,
    facts: IndexSet<Clause>,
    resolution_steps: Vec<ResolutionStep>,
    violated_rules: IndexSet<String>,
}

impl ResolutionEngine {
    pub fn new(rules: Vec<Rule>, violation_propositions: IndexSet<String>) -> Self {
        ResolutionEngine {
            rules,
            violation_propositions,
            facts: IndexSet::new(),
            resolution_steps: Vec::new(),
            violated_rules: IndexSet::new(),
        }
    }

    /// The rule table this engine reasons over
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Parse fact strings and assert them as unit clauses.
    ///
    /// Idempotent per distinct literal; facts accumulate across calls.
    pub fn add_facts<I, S>(&mut self, facts: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for fact in facts {
            let lit = parse_literal(fact.as_ref())?;
            self.facts.insert(Clause::new(vec![lit], ClauseSource::Fact));
        }
        Ok(())
    }

    /// Clear facts and all audit state for a new scenario
    pub fn reset(&mut self) {
        self.facts.clear();
        self.resolution_steps.clear();
        self.violated_rules.clear();
    }

    /// Check the asserted facts for direct contradictions.
    ///
    /// Facts only: contradictions reachable through rule chains are not
    /// detected here. Run a full refutation proof for the stronger check.
    pub fn check_consistency(&self) -> ConsistencyReport {
        consistency::check_facts(&self.facts)
    }

    /// Prove a query with the default iteration cap
    pub fn prove(&mut self, query: &str) -> Result<ProofResult, ParseError> {
        self.prove_bounded(query, DEFAULT_MAX_ITERATIONS)
    }

    /// Prove a query by resolution refutation, bounded by `max_iterations`
    /// saturation passes.
    pub fn prove_bounded(
        &mut self,
        query: &str,
        max_iterations: usize,
    ) -> Result<ProofResult, ParseError> {
        let query_lit = parse_literal(query)?;
        self.resolution_steps.clear();
        self.violated_rules.clear();

        // Fresh working set: facts ∪ rule clauses ∪ negated query
        let mut working: IndexSet<Clause> = self.facts.clone();
        for rule in &self.rules {
            working.insert(rule.to_cnf_clause());
        }
        working.insert(Clause::new(
            vec![query_lit.negate()],
            ClauseSource::NegatedQuery,
        ));

        let mut iteration = 0;
        while iteration < max_iterations {
            iteration += 1;
            let mut staged: IndexSet<Clause> = IndexSet::new();

            for i in 0..working.len() {
                for j in (i + 1)..working.len() {
                    let c1 = &working[i];
                    let c2 = &working[j];

                    // A clause pair yields one resolvent per complementary
                    // literal pair it contains.
                    for lit1 in c1.literals() {
                        for lit2 in c2.literals() {
                            if !lit1.is_complementary(lit2) {
                                continue;
                            }
                            let resolvent = resolve_on(c1, c2, lit1, lit2);

                            if resolvent.is_empty() {
                                return Ok(ProofResult::Proven {
                                    steps: self.resolution_steps.len(),
                                });
                            }
                            if resolvent.is_tautology()
                                || working.contains(&resolvent)
                                || staged.contains(&resolvent)
                            {
                                continue;
                            }

                            self.resolution_steps.push(ResolutionStep {
                                step_num: self.resolution_steps.len() + 1,
                                clause1: c1.clone(),
                                clause2: c2.clone(),
                                resolvent: resolvent.clone(),
                                resolved_proposition: lit1.proposition.clone(),
                                description: format!("Resolved {} with {}", lit1, lit2),
                            });
                            if self.is_violation(&resolvent) {
                                for parent in [c1, c2] {
                                    if let Some(id) = parent.source.rule_id() {
                                        self.violated_rules.insert(id.to_string());
                                    }
                                }
                            }
                            staged.insert(resolvent);
                        }
                    }
                }
            }

            if staged.is_empty() {
                return Ok(ProofResult::Saturated);
            }
            working.extend(staged);
        }

        Ok(ProofResult::IterationLimit { max_iterations })
    }

    /// Ordered derivation log of the most recent proof attempt
    pub fn resolution_steps(&self) -> &[ResolutionStep] {
        &self.resolution_steps
    }

    /// Rule ids attributed as violated during the most recent proof attempt,
    /// deduplicated, in first-discovery order
    pub fn violated_rules(&self) -> impl Iterator<Item = &str> {
        self.violated_rules.iter().map(String::as_str)
    }

    /// A resolvent marks a violation when its only non-negated literal names
    /// an invalidity proposition. All advisory rules are Horn clauses, so
    /// every derivable resolvent has at most one positive literal.
    fn is_violation(&self, clause: &Clause) -> bool {
        let mut positives = clause.literals().iter().filter(|lit| !lit.negated);
        match (positives.next(), positives.next()) {
            (Some(lit), None) => self.violation_propositions.contains(&lit.proposition),
            _ => false,
        }
    }
}

/// Resolvent of two clauses on a complementary literal pair: the union of
/// both literal sets minus the resolved pair.
fn resolve_on(c1: &Clause, c2: &Clause, lit1: &Literal, lit2: &Literal) -> Clause {
    let mut literals: Vec<Literal> = c1
        .literals()
        .iter()
        .filter(|lit| *lit != lit1)
        .cloned()
        .collect();
    literals.extend(c2.literals().iter().filter(|lit| *lit != lit2).cloned());
    Clause::derived(
        literals,
        format!("Res({},{})", c1.source.label(), c2.source.label()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::RuleCategory;

    fn rule(id: &str, premises: Vec<&str>, conclusion: &str) -> Rule {
        Rule::new(id, premises, conclusion, "", RuleCategory::StationOperation)
    }

    fn engine(rules: Vec<Rule>) -> ResolutionEngine {
        ResolutionEngine::new(rules, IndexSet::new())
    }

    #[test]
    fn modus_ponens_proves_in_two_steps() {
        let mut engine = engine(vec![rule("R1", vec!["P"], "C")]);
        engine.add_facts(["P"]).unwrap();
        let result = engine.prove("C").unwrap();
        assert_eq!(result, ProofResult::Proven { steps: 2 });
        assert_eq!(engine.resolution_steps().len(), 2);
    }

    #[test]
    fn unsupported_query_saturates() {
        let mut engine = engine(vec![rule("R1", vec!["P"], "C")]);
        let result = engine.prove("C").unwrap();
        assert_eq!(result, ProofResult::Saturated);
        assert!(!result.is_proven());
        assert!(result.explanation().contains("saturated"));
    }

    #[test]
    fn unknown_proposition_is_not_an_error() {
        let mut engine = engine(vec![rule("R1", vec!["P"], "C")]);
        engine.add_facts(["P"]).unwrap();
        let result = engine.prove("NeverMentioned").unwrap();
        assert!(!result.is_proven());
    }

    #[test]
    fn iteration_cap_reports_distinct_outcome() {
        let mut engine = engine(vec![rule("R1", vec!["P"], "C")]);
        engine.add_facts(["P"]).unwrap();
        let result = engine.prove_bounded("C", 1).unwrap();
        assert_eq!(result, ProofResult::IterationLimit { max_iterations: 1 });
        assert!(result.explanation().contains("max iterations: 1"));
        assert_ne!(result.explanation(), ProofResult::Saturated.explanation());
    }

    #[test]
    fn chained_rules_prove_transitively() {
        let mut engine = engine(vec![
            rule("R1", vec!["A"], "B"),
            rule("R2", vec!["B"], "C"),
            rule("R3", vec!["C", "D"], "E"),
        ]);
        engine.add_facts(["A", "D"]).unwrap();
        assert!(engine.prove("E").unwrap().is_proven());
    }

    #[test]
    fn negated_facts_participate() {
        let mut engine = engine(vec![]);
        engine.add_facts(["¬P", "P"]).unwrap();
        // P and ¬P resolve to the empty clause regardless of the query
        assert!(engine.prove("Q").unwrap().is_proven());
    }

    #[test]
    fn add_facts_is_idempotent_per_literal() {
        let mut engine = engine(vec![]);
        engine.add_facts(["P", "P", "¬Q"]).unwrap();
        engine.add_facts(["P"]).unwrap();
        assert_eq!(engine.facts.len(), 2);
    }

    #[test]
    fn malformed_fact_is_rejected() {
        let mut engine = engine(vec![]);
        assert!(engine.add_facts(["¬"]).is_err());
        assert!(engine.add_facts(["two words"]).is_err());
        assert!(engine.prove("").is_err());
    }

    #[test]
    fn reset_clears_scenario_state() {
        let mut engine = engine(vec![rule("R1", vec!["P"], "C")]);
        engine.add_facts(["P"]).unwrap();
        assert!(engine.prove("C").unwrap().is_proven());
        engine.reset();
        assert!(engine.resolution_steps().is_empty());
        assert_eq!(engine.prove("C").unwrap(), ProofResult::Saturated);
    }

    #[test]
    fn prove_is_repeatable_and_does_not_consume_facts() {
        let mut engine = engine(vec![rule("R1", vec!["P"], "C")]);
        engine.add_facts(["P"]).unwrap();

        let first = engine.prove("C").unwrap();
        let first_steps: Vec<String> = engine
            .resolution_steps()
            .iter()
            .map(|s| s.description.clone())
            .collect();

        let second = engine.prove("C").unwrap();
        let second_steps: Vec<String> = engine
            .resolution_steps()
            .iter()
            .map(|s| s.description.clone())
            .collect();

        assert_eq!(first, second);
        assert_eq!(first_steps, second_steps);
    }

    #[test]
    fn tautological_rule_does_not_change_outcomes() {
        let base = vec![rule("R1", vec!["P"], "C")];
        let mut with_taut = base.clone();
        with_taut.push(rule("RT", vec!["C"], "C")); // compiles to ¬C ∨ C

        let mut plain = engine(base);
        plain.add_facts(["P"]).unwrap();
        let mut noisy = engine(with_taut);
        noisy.add_facts(["P"]).unwrap();

        assert_eq!(
            plain.prove("C").unwrap().is_proven(),
            noisy.prove("C").unwrap().is_proven()
        );
        assert_eq!(
            plain.prove("X").unwrap().is_proven(),
            noisy.prove("X").unwrap().is_proven()
        );
    }

    #[test]
    fn violations_attribute_rule_parents_once() {
        let rules = vec![rule("R1", vec!["P"], "Bad"), rule("R2", vec!["Bad"], "Worse")];
        let violations: IndexSet<String> =
            ["Bad".to_string(), "Worse".to_string()].into_iter().collect();
        let mut engine = ResolutionEngine::new(rules, violations);
        engine.add_facts(["P"]).unwrap();
        assert!(engine.prove("Worse").unwrap().is_proven());

        let violated: Vec<&str> = engine.violated_rules().collect();
        assert!(violated.contains(&"R1"));
        assert!(violated.contains(&"R2"));
        let mut deduped = violated.clone();
        deduped.dedup();
        assert_eq!(violated, deduped);
    }

    #[test]
    fn multiple_complementary_pairs_discard_tautologies() {
        // Q→P and P→Q resolve on two complementary pairs; both resolvents
        // are tautologies and must be discarded without staging anything.
        let mut engine = engine(vec![rule("RA", vec!["Q"], "P"), rule("RB", vec!["P"], "Q")]);
        let result = engine.prove("Z").unwrap();
        assert_eq!(result, ProofResult::Saturated);
        assert!(engine.resolution_steps().is_empty());
    }
}
