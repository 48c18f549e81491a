//! Construction options.

use std::sync::Arc;

use num_traits::Zero;
use strata_domains::{PolynomialRing, Relation, Ring};
use strata_integers::Integer;

use crate::{Operand, PolyError, Result};

/// Options for [`Poly::new`](crate::Poly::new).
///
/// An explicit `domain` takes precedence over everything else. Otherwise
/// `coeff_domain` takes precedence over `modulus` and `rel`.
///
/// ```
/// use strata_algebra::PolyOptions;
/// use strata_poly::{DistPoly, Symbol};
///
/// let a = DistPoly::var(Symbol::new("a"));
/// let gf9 = PolyOptions::new().modulus(3).rel(&a.pow(2) + &DistPoly::from(1));
/// # let _ = gf9;
/// ```
#[derive(Clone, Debug, Default)]
pub struct PolyOptions {
    domain: Option<Arc<PolynomialRing>>,
    coeff_domain: Option<Arc<Ring>>,
    modulus: Option<Integer>,
    rel: Option<Operand>,
    quo: Option<Operand>,
}

impl PolyOptions {
    /// Creates empty options: integer coefficients, no relation, no quotient.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the value in an existing polynomial ring.
    #[must_use]
    pub fn domain(mut self, domain: Arc<PolynomialRing>) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Uses an existing coefficient domain.
    #[must_use]
    pub fn coeff_domain(mut self, coeff_domain: Arc<Ring>) -> Self {
        self.coeff_domain = Some(coeff_domain);
        self
    }

    /// Sets the coefficient modulus (`0` for none).
    #[must_use]
    pub fn modulus(mut self, modulus: impl Into<Integer>) -> Self {
        self.modulus = Some(modulus.into());
        self
    }

    /// Sets the defining relation of the coefficient domain (`0` for none).
    #[must_use]
    pub fn rel(mut self, rel: impl Into<Operand>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    /// Sets the quotient relation on the indeterminates (`0` for none).
    #[must_use]
    pub fn quo(mut self, quo: impl Into<Operand>) -> Self {
        self.quo = Some(quo.into());
        self
    }

    pub(crate) fn explicit_domain(&self) -> Option<&Arc<PolynomialRing>> {
        self.domain.as_ref()
    }

    pub(crate) fn explicit_coeff_domain(&self) -> Option<&Arc<Ring>> {
        self.coeff_domain.as_ref()
    }

    pub(crate) fn resolved_modulus(&self) -> Result<Integer> {
        let modulus = self.modulus.clone().unwrap_or_else(Integer::zero);
        if modulus.is_negative() {
            return Err(PolyError::Value(format!(
                "modulus must be non-negative, not {modulus}"
            )));
        }
        Ok(modulus)
    }

    pub(crate) fn resolved_rel(&self, modulus: &Integer) -> Result<Option<Relation>> {
        to_relation(self.rel.as_ref(), "rel", modulus)
    }

    pub(crate) fn resolved_quo(&self, modulus: &Integer) -> Result<Option<Relation>> {
        to_relation(self.quo.as_ref(), "quo", modulus)
    }
}

/// Interprets a relation option: absent or `0` is no relation.
fn to_relation(op: Option<&Operand>, name: &str, modulus: &Integer) -> Result<Option<Relation>> {
    let Some(op) = op else {
        return Ok(None);
    };
    match op {
        Operand::Int(c) if c.is_zero() => Ok(None),
        Operand::Int(c) => Err(PolyError::Value(format!(
            "`{name}` must be a polynomial or 0, not {c}"
        ))),
        Operand::Point(_) => Err(PolyError::TypeKind(format!(
            "`{name}` must be a polynomial, not Point"
        ))),
        other => {
            let rep = other
                .clone()
                .into_raw(&[])
                .ok_or_else(|| PolyError::TypeKind(format!("invalid `{name}`")))?;
            Ok(Some(Relation::new(&rep, modulus)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_domains::Point;
    use strata_poly::{DistPoly, Symbol};

    #[test]
    fn test_relation_options() {
        let m = Integer::new(3);
        assert_eq!(PolyOptions::new().resolved_rel(&m), Ok(None));
        assert_eq!(PolyOptions::new().rel(0).resolved_rel(&m), Ok(None));
        assert!(matches!(
            PolyOptions::new().rel(2).resolved_rel(&m),
            Err(PolyError::Value(_))
        ));
        assert!(matches!(
            PolyOptions::new().quo(Point::default()).resolved_quo(&m),
            Err(PolyError::TypeKind(_))
        ));
        // 3a + 1 has a non-unit leading coefficient mod 6
        let a = DistPoly::var(Symbol::new("a"));
        let bad = &a.mul_scalar(&Integer::new(3)) + &DistPoly::from(1);
        assert!(matches!(
            PolyOptions::new().rel(bad).resolved_rel(&Integer::new(6)),
            Err(PolyError::Domain(_))
        ));
        let rel = PolyOptions::new().rel(Symbol::new("a")).resolved_rel(&m).unwrap();
        assert_eq!(rel.map(|r| r.degree()), Some(1));
    }

    #[test]
    fn test_modulus_must_be_non_negative() {
        assert_eq!(PolyOptions::new().resolved_modulus(), Ok(Integer::zero()));
        assert!(matches!(
            PolyOptions::new().modulus(-5).resolved_modulus(),
            Err(PolyError::Value(_))
        ));
    }
}
