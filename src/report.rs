//! Serializable proof reports for external reporting layers

use crate::engine::{ProofResult, ResolutionEngine};
use serde::{Deserialize, Serialize};

/// Summary of one resolution step, with clauses rendered in canonical form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepReport {
    pub step_num: usize,
    pub clause1: String,
    pub clause2: String,
    pub resolvent: String,
    pub resolved_proposition: String,
    pub description: String,
}

/// Summary of one proof attempt, built from the engine's audit state after
/// [`prove`](ResolutionEngine::prove)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofReport {
    pub query: String,
    pub proven: bool,
    pub explanation: String,
    pub steps: Vec<StepReport>,
    pub violated_rules: Vec<String>,
}

impl ProofReport {
    pub fn new(engine: &ResolutionEngine, query: &str, result: &ProofResult) -> Self {
        ProofReport {
            query: query.to_string(),
            proven: result.is_proven(),
            explanation: result.explanation(),
            steps: engine
                .resolution_steps()
                .iter()
                .map(|step| StepReport {
                    step_num: step.step_num,
                    clause1: step.clause1.to_string(),
                    clause2: step.clause2.to_string(),
                    resolvent: step.resolvent.to_string(),
                    resolved_proposition: step.resolved_proposition.clone(),
                    description: step.description.clone(),
                })
                .collect(),
            violated_rules: engine.violated_rules().map(String::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Rule, RuleCategory};
    use indexmap::IndexSet;

    #[test]
    fn report_captures_steps_and_violations() {
        let rules = vec![Rule::new(
            "R1",
            vec!["P"],
            "Bad",
            "",
            RuleCategory::StationOperation,
        )];
        let violations: IndexSet<String> = ["Bad".to_string()].into_iter().collect();
        let mut engine = ResolutionEngine::new(rules, violations);
        engine.add_facts(["P"]).unwrap();
        let result = engine.prove("Bad").unwrap();

        let report = ProofReport::new(&engine, "Bad", &result);
        assert!(report.proven);
        assert_eq!(report.violated_rules, vec!["R1"]);
        assert!(!report.steps.is_empty());

        let json = serde_json::to_string(&report).unwrap();
        let back: ProofReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.explanation, report.explanation);
    }
}
