//! Leading parts in lex order.

use crate::{Poly, PolyError, Result};

/// Returns the leading coefficient of `f` in lex order over its
/// indeterminates, as a value in `f`'s domain. The zero polynomial has
/// leading coefficient `0`.
#[must_use]
pub fn lc(f: &Poly) -> Poly {
    let lead = f
        .it_dist("lex", true)
        .ok()
        .and_then(|mut terms| terms.next());
    match lead {
        Some((_, c)) => Poly::from_raw_in(c, f.domain()),
        None => f.scalar(0),
    }
}

/// Returns the leading monomial of `f`.
///
/// # Errors
///
/// Always returns `NotImplemented`.
pub fn lm(f: &Poly) -> Result<Poly> {
    Err(PolyError::NotImplemented(format!("leading monomial of {f}")))
}

/// Returns the leading term of `f`.
///
/// # Errors
///
/// Always returns `NotImplemented`.
pub fn lt(f: &Poly) -> Result<Poly> {
    Err(PolyError::NotImplemented(format!("leading term of {f}")))
}
