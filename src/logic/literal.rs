//! Propositional literals

use serde::{Deserialize, Serialize};
use std::fmt;

/// A propositional literal: an atomic proposition with an optional negation.
///
/// Examples: `StationClosed_Expo`, `¬RouteInvalid`.
///
/// The derived `Ord` compares `(proposition, negated)` in that order, which
/// is the canonical sort used for clause display and hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub proposition: String,
    pub negated: bool,
}

impl Literal {
    /// Create a positive literal
    pub fn positive(proposition: impl Into<String>) -> Self {
        Literal {
            proposition: proposition.into(),
            negated: false,
        }
    }

    /// Create a negative literal
    pub fn negative(proposition: impl Into<String>) -> Self {
        Literal {
            proposition: proposition.into(),
            negated: true,
        }
    }

    /// Return this literal with the negation flag flipped
    pub fn negate(&self) -> Literal {
        Literal {
            proposition: self.proposition.clone(),
            negated: !self.negated,
        }
    }

    /// Check whether this literal is the complement of another (p and ¬p)
    pub fn is_complementary(&self, other: &Literal) -> bool {
        self.proposition == other.proposition && self.negated != other.negated
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "¬{}", self.proposition)
        } else {
            write!(f, "{}", self.proposition)
        }
    }
}
