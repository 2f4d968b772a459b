//! Resolution step audit records

use crate::logic::Clause;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Records a single resolution step.
///
/// Steps are pure audit data for reporting layers; they are never fed back
/// into the inference loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionStep {
    pub step_num: usize,
    pub clause1: Clause,
    pub clause2: Clause,
    pub resolvent: Clause,
    /// The proposition the complementary pair was resolved on
    pub resolved_proposition: String,
    pub description: String,
}

impl fmt::Display for ResolutionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} ⟹ {}",
            self.step_num, self.description, self.resolvent
        )
    }
}
