//! Points: ordered assignments of values to variables.

use std::fmt;

use rustc_hash::FxHashMap;
use strata_poly::{DistPoly, Symbol};

/// An ordered list of `(variable, value)` coordinates.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Point {
    coords: Vec<(Symbol, DistPoly)>,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(coords: Vec<(Symbol, DistPoly)>) -> Self {
        Self { coords }
    }

    /// Returns the coordinates in order.
    #[must_use]
    pub fn coords(&self) -> &[(Symbol, DistPoly)] {
        &self.coords
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if the point has no coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the value assigned to `var`.
    #[must_use]
    pub fn get(&self, var: &Symbol) -> Option<&DistPoly> {
        self.coords.iter().find(|(v, _)| v == var).map(|(_, p)| p)
    }

    /// Returns the coordinates as a substitution map.
    #[must_use]
    pub fn as_map(&self) -> FxHashMap<Symbol, DistPoly> {
        self.coords.iter().cloned().collect()
    }
}

impl FromIterator<(Symbol, DistPoly)> for Point {
    fn from_iter<I: IntoIterator<Item = (Symbol, DistPoly)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, (v, p)) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}: {p}")?;
        }
        write!(f, ")")
    }
}
