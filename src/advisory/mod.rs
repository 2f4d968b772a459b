//! Transit advisory domain layer: the standard rule table, the invalidity
//! vocabulary, and validation scenarios

mod rules;
mod scenario;

pub use rules::{standard_rules, violation_propositions};
pub use scenario::{standard_scenarios, NetworkMode, Scenario, ScenarioKind};
