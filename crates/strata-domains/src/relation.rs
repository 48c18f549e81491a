//! Defining relations.

use std::fmt;

use num_traits::{One, Zero};
use strata_integers::{mod_inverse, Integer};
use strata_poly::{DistPoly, Symbol, TermOrder};

use crate::RingError;

/// A defining polynomial, normalized to be monic in its main variable.
///
/// The main variable is the first variable of the polynomial with positive
/// degree. Reducing by a relation replaces `var^degree` with the negated
/// lower-order part until every term has degree below `degree` in `var`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Relation {
    poly: DistPoly,
    var: Symbol,
    degree: u32,
}

impl Relation {
    /// Builds a relation from `poly`, with coefficients taken modulo
    /// `modulus` (`0` for none).
    ///
    /// # Errors
    ///
    /// Returns `ConstantRelation` if `poly` has no variable of positive
    /// degree, and `NonUnitLeadingCoefficient` if the coefficient of the
    /// highest power of the main variable is not an invertible integer
    /// (`±1` when there is no modulus).
    pub fn new(poly: &DistPoly, modulus: &Integer) -> Result<Self, RingError> {
        let poly = poly.rem_coeffs(modulus);
        let Some(var) = poly.used_vars().into_iter().next() else {
            return Err(RingError::ConstantRelation(poly.to_string()));
        };
        let d = poly.degree(&var);
        let degree = u32::try_from(d).map_err(|_| RingError::ConstantRelation(poly.to_string()))?;

        let lc = poly
            .coeff_in(&var, d)
            .get_constant()
            .ok_or_else(|| RingError::NonUnitLeadingCoefficient(poly.to_string()))?;
        let inv = if modulus.is_zero() {
            lc.abs().is_one().then(|| lc.clone())
        } else {
            mod_inverse(&lc, modulus)
        }
        .ok_or_else(|| RingError::NonUnitLeadingCoefficient(poly.to_string()))?;

        let poly = poly.mul_scalar(&inv).rem_coeffs(modulus).sort_vars(&[var.clone()]);
        Ok(Self { poly, var, degree })
    }

    /// Returns the monic defining polynomial.
    #[must_use]
    pub fn poly(&self) -> &DistPoly {
        &self.poly
    }

    /// Returns the main variable.
    #[must_use]
    pub fn var(&self) -> &Symbol {
        &self.var
    }

    /// Returns the degree in the main variable.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Reduces `rep` modulo this relation, with coefficients modulo
    /// `modulus` (`0` for none).
    #[must_use]
    pub fn reduce(&self, rep: &DistPoly, modulus: &Integer) -> DistPoly {
        // `poly` is monic in `var` by construction
        rep.reduce_by(&self.poly, &self.var, modulus)
            .unwrap_or_else(|| rep.rem_coeffs(modulus))
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.poly.as_dist(TermOrder::Lex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> DistPoly {
        DistPoly::var(Symbol::new("a"))
    }

    #[test]
    fn test_normalizes_to_monic() {
        // 2a^2 + 2 == a^2 + 1 (mod 3)
        let rel = Relation::new(&(&a().pow(2) + &DistPoly::from(1)).mul_scalar(&Integer::new(2)), &Integer::new(3)).unwrap();
        assert_eq!(rel.var(), &Symbol::new("a"));
        assert_eq!(rel.degree(), 2);
        assert_eq!(rel.poly(), &(&a().pow(2) + &DistPoly::from(1)));
        assert_eq!(rel.to_string(), "a**2 + 1");
    }

    #[test]
    fn test_over_integers() {
        let rel = Relation::new(&(&DistPoly::from(1) - &a().pow(2)), &Integer::zero()).unwrap();
        assert_eq!(rel.poly(), &(&a().pow(2) - &DistPoly::from(1)));

        let err = Relation::new(&a().mul_scalar(&Integer::new(2)), &Integer::zero());
        assert!(matches!(err, Err(RingError::NonUnitLeadingCoefficient(_))));
    }

    #[test]
    fn test_rejects_constants_and_non_units() {
        assert!(matches!(
            Relation::new(&DistPoly::from(5), &Integer::new(7)),
            Err(RingError::ConstantRelation(_))
        ));
        // 3a + 1 mod 6: 3 is not a unit
        let p = &a().mul_scalar(&Integer::new(3)) + &DistPoly::from(1);
        assert!(matches!(
            Relation::new(&p, &Integer::new(6)),
            Err(RingError::NonUnitLeadingCoefficient(_))
        ));
        // a*t + 1: leading coefficient in `a` is not constant
        let t = DistPoly::var(Symbol::new("t"));
        assert!(Relation::new(&(&(&a() * &t) + &DistPoly::from(1)), &Integer::new(5)).is_err());
    }

    #[test]
    fn test_reduce() {
        let rel = Relation::new(&(&a().pow(2) + &DistPoly::from(1)), &Integer::new(3)).unwrap();
        // a^4 = 1
        assert_eq!(rel.reduce(&a().pow(4), &Integer::new(3)), DistPoly::from(1));
        // a^3 + 5 = -a + 2 = 2a + 2 (mod 3)
        let r = rel.reduce(&(&a().pow(3) + &DistPoly::from(5)), &Integer::new(3));
        assert_eq!(r, &a().mul_scalar(&Integer::new(2)) + &DistPoly::from(2));
    }
}
