//! Clauses: disjunctions of literals with provenance

use super::literal::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Where a clause in the working set came from.
///
/// Provenance is metadata only: two clauses with the same literal set are
/// equal regardless of source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClauseSource {
    /// Asserted scenario fact
    Fact,
    /// The negated query seeding a refutation attempt
    NegatedQuery,
    /// CNF compilation of the rule with this id
    Rule(String),
    /// Resolvent produced during saturation
    Derived,
}

impl ClauseSource {
    /// The rule id, if this clause was compiled from a rule
    pub fn rule_id(&self) -> Option<&str> {
        match self {
            ClauseSource::Rule(id) => Some(id),
            _ => None,
        }
    }

    /// Short label used in derivation traces
    pub fn label(&self) -> &str {
        match self {
            ClauseSource::Fact => "FACT",
            ClauseSource::NegatedQuery => "NEGATED_QUERY",
            ClauseSource::Rule(id) => id,
            ClauseSource::Derived => "derived",
        }
    }
}

/// A clause: a disjunction of literals (L1 ∨ L2 ∨ ... ∨ Ln).
///
/// Literals are kept sorted and deduplicated (OR is idempotent), so equality
/// and hashing over the literal sequence behave like set equality and are
/// stable across construction orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clause {
    literals: Vec<Literal>,
    pub source: ClauseSource,
    /// Human-readable trace of how this clause arose; defaults to the
    /// source label.
    pub derivation: String,
}

impl Clause {
    /// Create a clause from literals, canonicalizing the literal sequence
    pub fn new(literals: Vec<Literal>, source: ClauseSource) -> Self {
        let derivation = source.label().to_string();
        Clause::with_derivation(literals, source, derivation)
    }

    /// Create a derived clause with an explicit derivation trace
    pub fn derived(literals: Vec<Literal>, derivation: String) -> Self {
        Clause::with_derivation(literals, ClauseSource::Derived, derivation)
    }

    fn with_derivation(mut literals: Vec<Literal>, source: ClauseSource, derivation: String) -> Self {
        literals.sort();
        literals.dedup();
        Clause {
            literals,
            source,
            derivation,
        }
    }

    /// The literals of this clause, in canonical order
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Check if this is the empty clause (a contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The single literal of a unit clause, if this clause is one
    pub fn unit(&self) -> Option<&Literal> {
        match self.literals.as_slice() {
            [lit] => Some(lit),
            _ => None,
        }
    }

    /// Check if the clause contains both L and ¬L (always true).
    ///
    /// Complementary literals are adjacent in the canonical order, so a
    /// single windowed scan suffices.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .windows(2)
            .any(|pair| pair[0].is_complementary(&pair[1]))
    }
}

impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        self.literals == other.literals
    }
}

impl Eq for Clause {}

impl Hash for Clause {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.literals.hash(state);
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.literals.as_slice() {
            [] => write!(f, "□"),
            [lit] => write!(f, "{}", lit),
            lits => {
                write!(f, "(")?;
                for (i, lit) in lits.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ∨ ")?;
                    }
                    write!(f, "{}", lit)?;
                }
                write!(f, ")")
            }
        }
    }
}
