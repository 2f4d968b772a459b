//! Propositional logic data model: literals, clauses, rules

mod clause;
mod literal;
mod rule;

pub use clause::{Clause, ClauseSource};
pub use literal::Literal;
pub use rule::{Rule, RuleCategory};
