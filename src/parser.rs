//! Parsing of literal strings
//!
//! Literal syntax: an optional single leading negation marker (`¬` or `~`)
//! followed by a proposition identifier taken verbatim. Identifiers are
//! case-sensitive and not normalized; at most one marker is stripped, so
//! `¬¬X` is the negation of the proposition `¬X`.

use crate::logic::Literal;
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::char,
    combinator::{all_consuming, opt},
    sequence::pair,
    IResult,
};
use std::fmt;

/// Errors from literal parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No proposition identifier after stripping the negation marker
    Empty,
    /// Input left over after the identifier (e.g. embedded whitespace)
    Malformed(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty literal: no proposition identifier"),
            ParseError::Malformed(input) => write!(f, "malformed literal: {:?}", input),
        }
    }
}

impl std::error::Error for ParseError {}

fn negation_marker(input: &str) -> IResult<&str, char> {
    alt((char('¬'), char('~')))(input)
}

fn literal(input: &str) -> IResult<&str, (Option<char>, &str)> {
    pair(
        opt(negation_marker),
        take_while1(|c: char| !c.is_whitespace()),
    )(input)
}

/// Parse a propositional literal string.
///
/// Examples: `StationClosed_Expo`, `¬RouteInvalid`.
pub fn parse_literal(input: &str) -> Result<Literal, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    match all_consuming(literal)(input) {
        Ok((_, (marker, proposition))) => Ok(Literal {
            proposition: proposition.to_string(),
            negated: marker.is_some(),
        }),
        Err(_) => {
            // Distinguish a bare marker from inputs with trailing garbage
            let stripped = input
                .strip_prefix('¬')
                .or_else(|| input.strip_prefix('~'))
                .unwrap_or(input);
            if stripped.is_empty() {
                Err(ParseError::Empty)
            } else {
                Err(ParseError::Malformed(input.to_string()))
            }
        }
    }
}
