//! Polynomial rings over a coefficient domain.

use std::fmt;
use std::sync::Arc;

use num_traits::One;
use rand::Rng;
use strata_integers::Integer;
use strata_poly::{DistPoly, Symbol};

use crate::{Relation, Ring, RingError};

/// The ring `R[x_1, ..., x_n]`, optionally modulo a quotient relation.
///
/// The quotient relation is what turns `GF(q)[x]` into `GF(q)[x]/(f)` for
/// equal-degree factorization.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PolynomialRing {
    indet_vars: Vec<Symbol>,
    coeff_dom: Arc<Ring>,
    quo: Option<Relation>,
}

impl PolynomialRing {
    /// Creates a polynomial ring over `coeff_dom` in `indet_vars`.
    ///
    /// # Errors
    ///
    /// Returns `RelationOverIndeterminate` if a parameter of the coefficient
    /// domain is also an indeterminate.
    pub fn new(
        indet_vars: Vec<Symbol>,
        coeff_dom: Arc<Ring>,
        quo: Option<Relation>,
    ) -> Result<Self, RingError> {
        if let Some(v) = coeff_dom.vars().iter().find(|v| indet_vars.contains(v)) {
            return Err(RingError::RelationOverIndeterminate(v.clone()));
        }
        Ok(Self {
            indet_vars,
            coeff_dom,
            quo,
        })
    }

    /// Returns this ring with the coefficient domain rebuilt over the
    /// parameters `params`, keeping its modulus and relation.
    ///
    /// Parameters that are indeterminates of this ring are skipped, so the
    /// result is always a valid ring.
    #[must_use]
    pub fn with_params(&self, params: &[Symbol]) -> Self {
        let params: Vec<Symbol> = params
            .iter()
            .filter(|v| !self.indet_vars.contains(v))
            .cloned()
            .collect();
        let ring = Ring::new(
            params,
            self.coeff_dom.modulus().clone(),
            self.coeff_dom.rel().cloned(),
        );
        let coeff_dom = if ring == *self.coeff_dom {
            Arc::clone(&self.coeff_dom)
        } else {
            Arc::new(ring)
        };
        Self {
            indet_vars: self.indet_vars.clone(),
            coeff_dom,
            quo: self.quo.clone(),
        }
    }

    /// Returns the indeterminates.
    #[must_use]
    pub fn indet_vars(&self) -> &[Symbol] {
        &self.indet_vars
    }

    /// Returns the coefficient domain.
    #[must_use]
    pub fn coeff_dom(&self) -> &Arc<Ring> {
        &self.coeff_dom
    }

    /// Returns the modulus of the coefficient domain.
    #[must_use]
    pub fn modulus(&self) -> &Integer {
        self.coeff_dom.modulus()
    }

    /// Returns the relation of the coefficient domain.
    #[must_use]
    pub fn rel(&self) -> Option<&Relation> {
        self.coeff_dom.rel()
    }

    /// Returns the quotient relation on the indeterminates.
    #[must_use]
    pub fn quo(&self) -> Option<&Relation> {
        self.quo.as_ref()
    }

    /// Returns true if the coefficient domain is a field.
    #[must_use]
    pub fn is_field(&self) -> bool {
        self.coeff_dom.is_field()
    }

    /// Returns true if the coefficient domain is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.coeff_dom.is_finite()
    }

    /// Returns the number of elements of the coefficient domain.
    ///
    /// # Errors
    ///
    /// Returns `NotFinite` for infinite coefficient domains.
    pub fn number(&self) -> Result<Integer, RingError> {
        self.coeff_dom.number()
    }

    /// Reduces coefficients, then modulo the quotient, then the
    /// coefficients produced by the quotient step.
    #[must_use]
    pub fn reduce(&self, rep: &DistPoly) -> DistPoly {
        let r = self.coeff_dom.reduce(rep);
        match &self.quo {
            Some(quo) => self.coeff_dom.reduce(&quo.reduce(&r, self.modulus())),
            None => r,
        }
    }

    /// Returns this ring modulo `poly`.
    ///
    /// # Errors
    ///
    /// Fails if `poly` does not define a relation (see [`Relation::new`]).
    pub fn add_quotient(&self, poly: &DistPoly) -> Result<Self, RingError> {
        let quo = Relation::new(poly, self.modulus())?;
        Ok(Self {
            indet_vars: self.indet_vars.clone(),
            coeff_dom: Arc::clone(&self.coeff_dom),
            quo: Some(quo),
        })
    }

    /// Samples a random polynomial in `vars` of total degree at most `deg`.
    ///
    /// With `monic`, the coefficient of `vars[0]^deg` is 1, so the result
    /// has exactly degree `deg` in its first variable. The result is reduced
    /// in this ring.
    pub fn random<R: Rng>(&self, rng: &mut R, vars: &[Symbol], deg: u32, monic: bool) -> DistPoly {
        let mut exps = Vec::new();
        monomials_up_to(vars.len(), deg, &mut Vec::new(), &mut exps);

        let terms: Vec<_> = exps
            .into_iter()
            .map(|e| {
                let is_lead = monic && e.first() == Some(&deg);
                let c = if is_lead {
                    DistPoly::from(Integer::one())
                } else {
                    self.coeff_dom.random_element(rng)
                };
                (e, c)
            })
            .collect();

        let mut result = DistPoly::zero(vars.to_vec());
        for (e, c) in terms {
            let mono = DistPoly::from_terms(vars.to_vec(), [(e, Integer::one())]);
            result = &result + &(&mono * &c);
        }
        self.reduce(&result)
    }
}

/// Collects every exponent vector in `n` variables with total degree at
/// most `deg`.
fn monomials_up_to(n: usize, deg: u32, prefix: &mut Vec<u32>, out: &mut Vec<Vec<u32>>) {
    if prefix.len() == n {
        out.push(prefix.clone());
        return;
    }
    let used: u32 = prefix.iter().sum();
    for e in 0..=deg - used {
        prefix.push(e);
        monomials_up_to(n, deg, prefix, out);
        prefix.pop();
    }
}

impl fmt::Display for PolynomialRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.indet_vars.iter().map(Symbol::name).collect();
        write!(f, "{}[{}]", self.coeff_dom, names.join(", "))?;
        if let Some(quo) = &self.quo {
            write!(f, "/({quo})")?;
        }
        Ok(())
    }
}
