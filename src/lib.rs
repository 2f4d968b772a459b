//! transitproof: propositional resolution for transit advisory validation
//!
//! This library encodes operational advisories for a transit network
//! (station/segment closures, line disruptions, mode-specific topology
//! changes) as propositional implication rules and proves or refutes
//! queries against asserted facts by resolution refutation.
//!
//! The core pieces:
//! - [`logic`]: literals, clauses with provenance, implication rules and
//!   their CNF compilation
//! - [`engine`]: the level-saturation resolution loop with recorded
//!   derivation steps, violated-rule attribution, and a facts-only
//!   consistency check
//! - [`advisory`]: the standard rule table and validation scenarios
//! - [`report`]: serializable proof summaries for reporting layers
//!
//! Engines are single-threaded and fully synchronous. Independent engines
//! may run on separate threads; rules are immutable after construction and
//! safe to share by cloning.

pub mod advisory;
pub mod engine;
pub mod logic;
pub mod parser;
pub mod report;

pub use engine::{
    ConsistencyReport, ProofResult, ResolutionEngine, ResolutionStep, DEFAULT_MAX_ITERATIONS,
};
pub use logic::{Clause, ClauseSource, Literal, Rule, RuleCategory};
pub use parser::{parse_literal, ParseError};
pub use report::{ProofReport, StepReport};
