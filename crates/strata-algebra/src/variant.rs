//! Variant classification.

use std::fmt;

use strata_poly::{DistPoly, Symbol};

/// The three variants of a polynomial value, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PolyKind {
    /// Positive degree in some indeterminate, or a value with no
    /// indeterminates at all.
    Polynomial,
    /// Degree zero in every indeterminate, but carrying parameters.
    Constant,
    /// A plain scalar.
    Integer,
}

impl PolyKind {
    /// Returns the name used in the debug form.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PolyKind::Polynomial => "Poly",
            PolyKind::Constant => "Constant",
            PolyKind::Integer => "Integer",
        }
    }

    /// Returns true for `Constant` and `Integer`.
    #[must_use]
    pub fn is_scalar(self) -> bool {
        !matches!(self, PolyKind::Polynomial)
    }
}

impl fmt::Display for PolyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a value was built from, as far as classification cares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Source {
    Int,
    Symbol(Symbol),
    Raw,
}

/// Picks the variant of a value from its source and its *reduced*
/// representation, relative to the declared indeterminates.
pub(crate) fn classify(source: &Source, reduced: &DistPoly, declared: &[Symbol]) -> PolyKind {
    match source {
        Source::Int => PolyKind::Integer,
        Source::Symbol(s) if declared.contains(s) => PolyKind::Polynomial,
        Source::Symbol(_) => PolyKind::Constant,
        Source::Raw if declared.is_empty() => PolyKind::Polynomial,
        Source::Raw => {
            if reduced.degrees(declared).iter().any(|&d| d > 0) {
                PolyKind::Polynomial
            } else {
                PolyKind::Constant
            }
        }
    }
}
