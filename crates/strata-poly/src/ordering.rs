//! Term orders.
//!
//! Orders are selected by name at the polynomial API (`"lex"`), so the
//! enum parses from and displays as those names.

use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;

use crate::monomial::{cmp_grevlex, cmp_grlex, cmp_lex};

/// A total order on monomials.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum TermOrder {
    /// Lexicographic order.
    ///
    /// x > y > z means x^a y^b z^c > x^d y^e z^f iff
    /// the first nonzero difference (a-d, b-e, c-f) is positive.
    #[default]
    Lex,

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    Grlex,

    /// Graded reverse lexicographic order.
    Grevlex,
}

/// Error returned when parsing an unknown term order name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTermOrderError {
    /// The name is not one of `lex`, `grlex`, `grevlex`.
    #[error("unknown term order `{0}`")]
    UnknownTermOrder(String),
}

impl TermOrder {
    /// Compares two exponent vectors according to this ordering.
    #[must_use]
    pub fn compare(&self, a: &[u32], b: &[u32]) -> Ordering {
        match self {
            TermOrder::Lex => cmp_lex(a, b),
            TermOrder::Grlex => cmp_grlex(a, b),
            TermOrder::Grevlex => cmp_grevlex(a, b),
        }
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            TermOrder::Lex => "lex",
            TermOrder::Grlex => "grlex",
            TermOrder::Grevlex => "grevlex",
        }
    }
}

impl FromStr for TermOrder {
    type Err = ParseTermOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lex" => Ok(TermOrder::Lex),
            "grlex" => Ok(TermOrder::Grlex),
            "grevlex" => Ok(TermOrder::Grevlex),
            other => Err(ParseTermOrderError::UnknownTermOrder(other.to_string())),
        }
    }
}

impl std::fmt::Display for TermOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
