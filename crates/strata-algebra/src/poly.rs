//! Polynomial values.
//!
//! A [`Poly`] owns a raw representation whose variable list starts with the
//! indeterminates, followed by the parameters of the coefficient domain.
//! It is always reduced against its domain.

use std::sync::Arc;

use num_traits::One;
use rand::Rng;
use strata_domains::{PolynomialRing, Ring};
use strata_integers::Integer;
use strata_poly::{DistPoly, Symbol};

use crate::algorithms::lc;
use crate::variant::{classify, Source};
use crate::{Operand, PolyError, PolyKind, PolyOptions, Result};

/// A polynomial value: a raw representation together with its domain.
///
/// # Example
///
/// ```
/// use strata_algebra::{Poly, PolyKind, PolyOptions};
/// use strata_poly::Symbol;
///
/// let x = Symbol::new("x");
/// let opts = PolyOptions::new().modulus(5);
/// let f = Poly::new(x.clone(), &[x.clone()], &opts).unwrap();
/// let g: Poly = &f * &f - 1;
///
/// assert_eq!(g.kind(), PolyKind::Polynomial);
/// assert_eq!(g.degree(), 2);
/// assert_eq!(g.to_string(), "x**2 + 4");
/// assert_eq!(&g - &g, 0);
/// ```
#[derive(Clone)]
pub struct Poly {
    pub(crate) kind: PolyKind,
    pub(crate) rep: DistPoly,
    const_vars: Vec<Symbol>,
    pub(crate) dom: Arc<PolynomialRing>,
}

impl Poly {
    /// Builds a polynomial value from `rep`.
    ///
    /// `vars` declares the indeterminates; every other variable of `rep` is
    /// a parameter of the coefficient domain. With no declared variables and
    /// no explicit domain, every variable of `rep` is an indeterminate.
    ///
    /// # Errors
    ///
    /// - `TypeKind` if `rep` is a point, or a relation option is a point.
    /// - `Value` for a negative modulus or a nonzero integer relation.
    /// - `Domain` if a relation is not monic up to a unit, or binds an
    ///   indeterminate.
    pub fn new(rep: impl Into<Operand>, vars: &[Symbol], options: &PolyOptions) -> Result<Self> {
        let rep = rep.into();
        if let Some(dom) = options.explicit_domain() {
            return Self::new_in(rep, vars, dom);
        }

        let (raw, source) = match rep {
            Operand::Poly(p) => return Ok(p),
            Operand::Point(_) => return Err(not_a_polynomial("Point")),
            Operand::Int(c) => (DistPoly::from_int(c, vars.to_vec()), Source::Int),
            Operand::Symbol(s) => (DistPoly::var(s.clone()), Source::Symbol(s)),
            Operand::Raw(r) => (r, Source::Raw),
        };

        let (indets, consts) = if vars.is_empty() {
            (raw.vars().to_vec(), Vec::new())
        } else {
            let consts = raw
                .vars()
                .iter()
                .filter(|v| !vars.contains(v))
                .cloned()
                .collect();
            (vars.to_vec(), consts)
        };

        let coeff_dom = match options.explicit_coeff_domain() {
            Some(ring) => Arc::clone(ring),
            None => {
                let modulus = options.resolved_modulus()?;
                let rel = options.resolved_rel(&modulus)?;
                Arc::new(Ring::new(consts, modulus, rel))
            }
        };
        let quo = options.resolved_quo(coeff_dom.modulus())?;
        let dom = PolynomialRing::new(indets, coeff_dom, quo)?;
        Ok(Self::finish(raw, &source, Arc::new(dom), false))
    }

    /// Builds a value inside an explicit domain, extended by `vars`.
    fn new_in(rep: Operand, vars: &[Symbol], dom: &Arc<PolynomialRing>) -> Result<Self> {
        let mut declared = dom.indet_vars().to_vec();
        for v in vars {
            if !declared.contains(v) {
                declared.push(v.clone());
            }
        }

        let (raw, source) = match rep {
            Operand::Poly(p) => (p.reduce(), Source::Raw),
            Operand::Point(_) => return Err(not_a_polynomial("Point")),
            Operand::Int(c) => (DistPoly::from_int(c, declared.clone()), Source::Int),
            Operand::Symbol(s) => (DistPoly::var(s), Source::Raw),
            Operand::Raw(r) => (r, Source::Raw),
        };

        let consts: Vec<Symbol> = raw
            .vars()
            .iter()
            .filter(|v| !declared.contains(v))
            .cloned()
            .collect();
        let coeff = Ring::new(consts, dom.modulus().clone(), dom.rel().cloned());
        let coeff = if coeff == **dom.coeff_dom() {
            Arc::clone(dom.coeff_dom())
        } else {
            Arc::new(coeff)
        };
        let ring = PolynomialRing::new(declared, coeff, dom.quo().cloned())?;
        let ring = if ring == **dom {
            Arc::clone(dom)
        } else {
            Arc::new(ring)
        };
        Ok(Self::finish(raw, &source, ring, true))
    }

    /// Wraps a raw result of an operation in `dom`, widening its coefficient
    /// domain by any new parameters `rep` brings along.
    pub(crate) fn from_raw_in(rep: DistPoly, dom: &Arc<PolynomialRing>) -> Self {
        let mut params = dom.coeff_dom().vars().to_vec();
        for v in rep.vars() {
            if !params.contains(v) && !dom.indet_vars().contains(v) {
                params.push(v.clone());
            }
        }
        let widened = dom.with_params(&params);
        let dom = if widened == **dom {
            Arc::clone(dom)
        } else {
            Arc::new(widened)
        };
        Self::finish(rep, &Source::Raw, dom, true)
    }

    /// Sorts and reduces `rep` in `dom`, then tags it. With `collapse`, a
    /// value with no variable of positive degree becomes an `Integer`.
    fn finish(rep: DistPoly, source: &Source, dom: Arc<PolynomialRing>, collapse: bool) -> Self {
        let order: Vec<Symbol> = dom
            .indet_vars()
            .iter()
            .chain(dom.coeff_dom().vars())
            .cloned()
            .collect();
        let rep = dom.reduce(&rep.sort_vars(&order));
        let kind = if collapse && rep.is_constant() {
            PolyKind::Integer
        } else {
            classify(source, &rep, dom.indet_vars())
        };
        let const_vars = rep
            .vars()
            .get(dom.indet_vars().len()..)
            .map(<[Symbol]>::to_vec)
            .unwrap_or_default();
        Self {
            kind,
            rep,
            const_vars,
            dom,
        }
    }

    /// Returns the integer `c` in this value's domain.
    pub(crate) fn scalar(&self, c: impl Into<Integer>) -> Self {
        Self::from_raw_in(
            DistPoly::from_int(c.into(), self.indet_vars().to_vec()),
            &self.dom,
        )
    }

    /// Wraps a raw result: coefficients reduced by the modulus, then
    /// reduced and tagged in this value's domain.
    pub(crate) fn wrap(&self, rep: &DistPoly) -> Self {
        Self::from_raw_in(rep.rem_coeffs(self.modulus()), &self.dom)
    }

    /// Returns the variant.
    #[must_use]
    pub fn kind(&self) -> PolyKind {
        self.kind
    }

    /// Returns the modulus of the coefficient domain, `0` for none.
    #[must_use]
    pub fn modulus(&self) -> &Integer {
        self.dom.modulus()
    }

    /// Returns the polynomial ring this value lives in.
    #[must_use]
    pub fn domain(&self) -> &Arc<PolynomialRing> {
        &self.dom
    }

    /// Returns the coefficient domain.
    #[must_use]
    pub fn coeff_domain(&self) -> &Arc<Ring> {
        self.dom.coeff_dom()
    }

    /// Returns the indeterminates.
    #[must_use]
    pub fn indet_vars(&self) -> &[Symbol] {
        self.dom.indet_vars()
    }

    /// Returns the parameter variables, in representation order.
    #[must_use]
    pub fn const_vars(&self) -> &[Symbol] {
        &self.const_vars
    }

    /// Returns the indeterminates followed by the parameters.
    #[must_use]
    pub fn inner_vars(&self) -> Vec<Symbol> {
        self.indet_vars()
            .iter()
            .chain(&self.const_vars)
            .cloned()
            .collect()
    }

    /// Returns the raw representation.
    #[must_use]
    pub fn as_dp(&self) -> &DistPoly {
        &self.rep
    }

    /// Consumes the value, returning its raw representation.
    #[must_use]
    pub fn into_dp(self) -> DistPoly {
        self.rep
    }

    /// Returns the raw terms, greatest first.
    #[must_use]
    pub fn as_list(&self) -> Vec<(Vec<u32>, Integer)> {
        self.rep.as_list()
    }

    /// Returns the number of raw terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rep.len()
    }

    /// Returns true if there are no raw terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rep.is_empty()
    }

    /// Returns true if this is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.rep.is_zero()
    }

    /// Returns the coefficient of the indeterminates raised to `exps`, as a
    /// raw polynomial over the remaining variables.
    ///
    /// # Panics
    ///
    /// Panics if `exps` is longer than the representation's variable list.
    #[must_use]
    pub fn coefficient(&self, exps: &[u32]) -> DistPoly {
        self.rep.coefficient(exps)
    }

    /// Iterates over the raw coefficients.
    pub fn coeffs(&self) -> impl Iterator<Item = &Integer> {
        self.rep.coeffs()
    }

    /// Returns the representation reduced against the domain again.
    #[must_use]
    pub fn reduce(&self) -> DistPoly {
        self.dom.reduce(&self.rep)
    }

    /// Returns the indeterminates of positive degree.
    fn live_vars(&self) -> Vec<Symbol> {
        self.indet_vars()
            .iter()
            .filter(|v| self.rep.degree(v) > 0)
            .cloned()
            .collect()
    }

    /// Returns true if at most one indeterminate has positive degree.
    #[must_use]
    pub fn is_univariate(&self) -> bool {
        self.kind.is_scalar() || self.live_vars().len() <= 1
    }

    /// Returns the single indeterminate of positive degree.
    ///
    /// # Errors
    ///
    /// Returns `TypeKind` if the value is not univariate or has no
    /// indeterminate of positive degree.
    pub fn get_univariate(&self) -> Result<Symbol> {
        if self.kind.is_scalar() {
            return Err(PolyError::TypeKind(format!(
                "{} has no main variable",
                self.kind
            )));
        }
        let mut live = self.live_vars();
        match live.len() {
            1 => Ok(live.remove(0)),
            0 => Err(PolyError::TypeKind(format!("{self} has no main variable"))),
            _ => Err(PolyError::TypeKind(format!("{self} is not univariate"))),
        }
    }

    fn scalar_degree(&self) -> Option<i64> {
        match self.kind {
            PolyKind::Polynomial => None,
            PolyKind::Constant => Some(0),
            PolyKind::Integer => Some(if self.is_zero() { -1 } else { 0 }),
        }
    }

    /// Returns the degree: in the main variable for univariate values, the
    /// total degree in the indeterminates otherwise. Zero has degree `-1`,
    /// except that `Constant` values always have degree 0.
    #[must_use]
    pub fn degree(&self) -> i64 {
        if let Some(d) = self.scalar_degree() {
            return d;
        }
        match self.live_vars().as_slice() {
            [] if self.is_zero() => -1,
            [] => 0,
            [v] => self.rep.degree(v),
            _ => self.total_degree(),
        }
    }

    /// Returns the degree in `var`.
    #[must_use]
    pub fn degree_in(&self, var: &Symbol) -> i64 {
        self.scalar_degree().unwrap_or_else(|| self.rep.degree(var))
    }

    /// Returns the degree in each indeterminate.
    #[must_use]
    pub fn degrees(&self) -> Vec<i64> {
        self.indet_vars().iter().map(|v| self.degree_in(v)).collect()
    }

    /// Returns the total degree in the indeterminates.
    #[must_use]
    pub fn total_degree(&self) -> i64 {
        if let Some(d) = self.scalar_degree() {
            return d;
        }
        let n = self.indet_vars().len();
        self.rep
            .terms()
            .map(|(e, _)| e[..n].iter().map(|&k| i64::from(k)).sum::<i64>())
            .max()
            .unwrap_or(-1)
    }

    /// Returns this value divided by its leading coefficient.
    ///
    /// # Errors
    ///
    /// Returns `Domain` unless the coefficient domain is a field.
    pub fn get_monic(&self) -> Result<Self> {
        if !self.coeff_domain().is_field() {
            return Err(PolyError::Domain(format!(
                "cannot make monic over {}",
                self.coeff_domain()
            )));
        }
        if self.is_zero() {
            return Ok(self.clone());
        }
        let lead = lc(self);
        if lead.rep.get_constant().is_some_and(|c| c.is_one()) {
            return Ok(self.clone());
        }
        Ok(self * &lead.inverse()?)
    }

    /// Replaces this value by its monic form.
    ///
    /// # Errors
    ///
    /// As [`Poly::get_monic`]; on error the value is unchanged.
    pub fn set_monic(&mut self) -> Result<()> {
        *self = self.get_monic()?;
        Ok(())
    }

    /// Samples a random polynomial in this value's domain of total degree
    /// at most `deg` in `vars` (all indeterminates if `vars` is empty).
    pub fn random_poly<R: Rng>(&self, rng: &mut R, vars: &[Symbol], deg: u32, monic: bool) -> Self {
        let vars = if vars.is_empty() { self.indet_vars() } else { vars };
        let rep = self.dom.random(rng, vars, deg, monic);
        Self::from_raw_in(rep, &self.dom)
    }
}

fn not_a_polynomial(type_name: &str) -> PolyError {
    PolyError::TypeKind(format!("cannot build a polynomial from {type_name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use strata_domains::Point;

    fn x() -> Symbol {
        Symbol::new("x")
    }

    fn gf(p: i64) -> PolyOptions {
        PolyOptions::new().modulus(p)
    }

    #[test]
    fn test_kinds() {
        let a = Symbol::new("a");
        let opts = PolyOptions::new();
        assert_eq!(Poly::new(3, &[x()], &opts).unwrap().kind(), PolyKind::Integer);
        assert_eq!(Poly::new(x(), &[x()], &opts).unwrap().kind(), PolyKind::Polynomial);
        assert_eq!(Poly::new(a.clone(), &[x()], &opts).unwrap().kind(), PolyKind::Constant);

        let raw = &DistPoly::var(x()) * &DistPoly::var(a.clone());
        let p = Poly::new(raw.clone(), &[x()], &opts).unwrap();
        assert_eq!(p.kind(), PolyKind::Polynomial);
        assert_eq!(p.indet_vars(), &[x()]);
        assert_eq!(p.const_vars(), &[a.clone()]);
        assert_eq!(p.inner_vars(), vec![x(), a.clone()]);

        let shell = Poly::new(DistPoly::constant(Integer::new(5)), &[], &opts).unwrap();
        assert_eq!(shell.kind(), PolyKind::Polynomial);
        assert!(shell.indet_vars().is_empty());
        assert_eq!(shell.degree(), 0);

        let all = Poly::new(raw, &[], &opts).unwrap();
        assert_eq!(all.indet_vars(), &[x(), a]);
    }

    #[test]
    fn test_reduced_on_construction() {
        let raw = &DistPoly::var(x()).mul_scalar(&Integer::new(3)) + &DistPoly::from(4);
        let p = Poly::new(raw, &[x()], &gf(3)).unwrap();
        // 3x + 4 = 1 mod 3; classified after reduction
        assert_eq!(p.kind(), PolyKind::Constant);
        assert_eq!(p.as_dp(), &DistPoly::from(1));
        assert_eq!(p.reduce(), *p.as_dp());
    }

    #[test]
    fn test_poly_input_is_cloned() {
        let p = Poly::new(x(), &[x()], &gf(7)).unwrap();
        let q = Poly::new(p.clone(), &[], &PolyOptions::new()).unwrap();
        assert_eq!(q.modulus(), &Integer::new(7));
        assert_eq!(q, p);
    }

    #[test]
    fn test_rejects_points() {
        let err = Poly::new(Point::default(), &[x()], &PolyOptions::new());
        assert!(matches!(err, Err(PolyError::TypeKind(_))));
    }

    #[test]
    fn test_relation_on_indeterminate() {
        let rel = &DistPoly::var(x()).pow(2) + &DistPoly::from(1);
        let err = Poly::new(x(), &[x()], &gf(3).rel(rel));
        assert!(matches!(err, Err(PolyError::Domain(_))));
    }

    #[test]
    fn test_explicit_domain() {
        let f = Poly::new(x(), &[x()], &gf(5)).unwrap();
        let opts = PolyOptions::new().domain(Arc::clone(f.domain()));
        let g = Poly::new(DistPoly::var(x()).pow(2), &[], &opts).unwrap();
        assert!(Arc::ptr_eq(g.domain(), f.domain()));
        assert_eq!(g.degree(), 2);

        let c = Poly::new(7, &[], &opts).unwrap();
        assert_eq!(c.kind(), PolyKind::Integer);
        assert_eq!(c.as_dp(), &DistPoly::from(2));

        // a new variable joins the indeterminates
        let y = Symbol::new("y");
        let h = Poly::new(y.clone(), &[y.clone()], &opts).unwrap();
        assert_eq!(h.indet_vars(), &[x(), y]);
    }

    #[test]
    fn test_degrees() {
        let y = Symbol::new("y");
        let raw = &(&DistPoly::var(x()).pow(3) * &DistPoly::var(y.clone())) + &DistPoly::var(y.clone()).pow(2);
        let p = Poly::new(raw, &[x(), y.clone()], &PolyOptions::new()).unwrap();
        assert!(!p.is_univariate());
        assert_eq!(p.degree(), 4);
        assert_eq!(p.degrees(), vec![3, 2]);
        assert_eq!(p.degree_in(&y), 2);
        assert!(matches!(p.get_univariate(), Err(PolyError::TypeKind(_))));

        let q = Poly::new(DistPoly::var(y.clone()).pow(2), &[x(), y.clone()], &PolyOptions::new()).unwrap();
        assert!(q.is_univariate());
        assert_eq!(q.get_univariate(), Ok(y));
        assert_eq!(q.degree(), 2);

        let zero = Poly::new(0, &[x()], &PolyOptions::new()).unwrap();
        assert_eq!(zero.degree(), -1);
        assert!(zero.is_zero());
    }

    #[test]
    fn test_monic() {
        let f = Poly::new(x(), &[x()], &gf(5)).unwrap();
        let mut g: Poly = &f * 3 + 1;
        g.set_monic().unwrap();
        // 3x + 1 -> x + 2 (3^-1 = 2 mod 5)
        assert_eq!(g, &f + 2);

        let z = Poly::new(x(), &[x()], &PolyOptions::new()).unwrap();
        assert!(matches!(z.get_monic(), Err(PolyError::Domain(_))));
    }

    #[test]
    fn test_random_poly() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let f = Poly::new(x(), &[x()], &gf(7)).unwrap();
        let g = f.random_poly(&mut rng, &[], 4, true);
        assert_eq!(g.degree(), 4);
        assert!(Arc::ptr_eq(g.domain(), f.domain()));
    }
}
