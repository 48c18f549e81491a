//! Greatest common divisors.

use crate::{Poly, PolyError, Result};

/// Returns the monic greatest common divisor of two univariate
/// polynomials by the Euclidean algorithm.
///
/// # Errors
///
/// - `TypeKind` unless both operands are univariate over the same
///   indeterminates.
/// - `Domain` unless the coefficient domain is a field.
pub fn gcd(f: &Poly, g: &Poly) -> Result<Poly> {
    if !f.is_univariate() || !g.is_univariate() {
        return Err(PolyError::TypeKind(
            "operands must be univariate polynomial".into(),
        ));
    }
    let (mut a, mut b) = if f.degree() >= g.degree() {
        (f.clone(), g.clone())
    } else {
        (g.clone(), f.clone())
    };
    while !b.is_zero() {
        let r = a.rem(&b)?;
        a = b;
        b = r;
    }
    a.get_monic()
}
