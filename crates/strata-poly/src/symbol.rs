//! Variable tokens.
//!
//! A `Symbol` is identified by its name: two symbols created from the same
//! string are equal and hash identically, so no global table is needed.

use std::fmt;
use std::sync::Arc;

/// A polynomial variable.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the name of this symbol.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Creates several symbols from a whitespace or comma separated list.
///
/// ```
/// use strata_poly::symbols;
///
/// let vars = symbols("x, y z");
/// assert_eq!(vars.len(), 3);
/// assert_eq!(vars[1].name(), "y");
/// ```
#[must_use]
pub fn symbols(names: &str) -> Vec<Symbol> {
    names
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(Symbol::new)
        .collect()
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_identity_by_name() {
        let a = Symbol::new("x");
        let b = Symbol::from("x");
        assert_eq!(a, b);

        let set: FxHashSet<Symbol> = [a, b, Symbol::new("y")].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_symbols() {
        let vars = symbols("x y,z");
        let names: Vec<_> = vars.iter().map(Symbol::name).collect();
        assert_eq!(names, ["x", "y", "z"]);
        assert!(symbols("  ").is_empty());
    }
}
