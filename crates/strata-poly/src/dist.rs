//! Sparse distributed polynomials.
//!
//! A `DistPoly` is a map from exponent vectors to nonzero integer
//! coefficients, together with the ordered list of variables the exponent
//! vectors refer to. The variable list can be reordered or extended at any
//! time without changing the value, and two polynomials over different
//! variable lists are equal when they denote the same value.
//!
//! Coefficients are unreduced integers. Operations that need a modulus take
//! it explicitly (`0` meaning "no modulus").

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use strata_integers::{mod_inverse, Integer};

use crate::monomial::{self, Exponents};
use crate::{Symbol, TermOrder};

/// A sparse multivariate polynomial with integer coefficients.
///
/// Terms are keyed by exponent vector; the `BTreeMap` keeps them in
/// ascending lexicographic order with respect to `vars`.
#[derive(Clone)]
pub struct DistPoly {
    vars: Vec<Symbol>,
    terms: BTreeMap<Exponents, Integer>,
}

impl DistPoly {
    /// Creates the zero polynomial over the given variables.
    #[must_use]
    pub fn zero(vars: Vec<Symbol>) -> Self {
        Self {
            vars,
            terms: BTreeMap::new(),
        }
    }

    /// Creates a constant polynomial with no variables.
    #[must_use]
    pub fn constant(c: Integer) -> Self {
        Self::from_int(c, Vec::new())
    }

    /// Creates a constant polynomial over the given variables.
    #[must_use]
    pub fn from_int(c: Integer, vars: Vec<Symbol>) -> Self {
        let mut terms = BTreeMap::new();
        if !c.is_zero() {
            terms.insert(monomial::one(vars.len()), c);
        }
        Self { vars, terms }
    }

    /// Creates the polynomial consisting of a single variable.
    #[must_use]
    pub fn var(sym: Symbol) -> Self {
        let mut terms = BTreeMap::new();
        terms.insert(monomial::var_pow(0, 1, 1), Integer::one());
        Self {
            vars: vec![sym],
            terms,
        }
    }

    /// Creates a polynomial from `(exponents, coefficient)` pairs.
    ///
    /// Repeated exponent vectors are combined and zero coefficients dropped.
    ///
    /// # Panics
    ///
    /// Panics if an exponent vector's length differs from `vars.len()`.
    #[must_use]
    pub fn from_terms<I, E>(vars: Vec<Symbol>, terms: I) -> Self
    where
        I: IntoIterator<Item = (E, Integer)>,
        E: AsRef<[u32]>,
    {
        let mut poly = Self::zero(vars);
        for (exps, c) in terms {
            let exps = exps.as_ref();
            assert_eq!(exps.len(), poly.vars.len(), "exponent vector length mismatch");
            poly.add_term(SmallVec::from_slice(exps), c);
        }
        poly
    }

    fn add_term(&mut self, exps: Exponents, c: Integer) {
        if c.is_zero() {
            return;
        }
        match self.terms.entry(exps) {
            std::collections::btree_map::Entry::Vacant(e) => {
                e.insert(c);
            }
            std::collections::btree_map::Entry::Occupied(mut e) => {
                let sum = &*e.get() + &c;
                if sum.is_zero() {
                    e.remove();
                } else {
                    *e.get_mut() = sum;
                }
            }
        }
    }

    /// Returns the variable list.
    #[must_use]
    pub fn vars(&self) -> &[Symbol] {
        &self.vars
    }

    /// Returns the variables that occur with positive degree, in list order.
    #[must_use]
    pub fn used_vars(&self) -> Vec<Symbol> {
        self.vars
            .iter()
            .enumerate()
            .filter(|(i, _)| self.terms.keys().any(|e| e[*i] > 0))
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Returns the number of nonzero terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if no variable occurs with positive degree.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.keys().all(|e| monomial::is_one(e))
    }

    /// Returns the constant value if this polynomial is constant.
    #[must_use]
    pub fn get_constant(&self) -> Option<Integer> {
        if !self.is_constant() {
            return None;
        }
        Some(self.terms.values().next().cloned().unwrap_or_else(Integer::zero))
    }

    /// Returns true if this polynomial has at most one term.
    #[must_use]
    pub fn is_monomial(&self) -> bool {
        self.terms.len() <= 1
    }

    fn index_of(&self, var: &Symbol) -> Option<usize> {
        self.vars.iter().position(|v| v == var)
    }

    /// Returns the degree in `var`: `-1` for the zero polynomial, `0` when
    /// `var` does not occur.
    #[must_use]
    pub fn degree(&self, var: &Symbol) -> i64 {
        if self.is_zero() {
            return -1;
        }
        self.index_of(var).map_or(0, |i| {
            self.terms.keys().map(|e| i64::from(e[i])).max().unwrap_or(0)
        })
    }

    /// Returns the degree in each of the given variables.
    #[must_use]
    pub fn degrees(&self, vars: &[Symbol]) -> Vec<i64> {
        vars.iter().map(|v| self.degree(v)).collect()
    }

    /// Returns the total degree, `-1` for the zero polynomial.
    #[must_use]
    pub fn total_degree(&self) -> i64 {
        self.terms
            .keys()
            .map(|e| i64::from(monomial::total_degree(e)))
            .max()
            .unwrap_or(-1)
    }

    /// Re-keys the polynomial so that `order` comes first.
    ///
    /// The new variable list is `order` (deduplicated) followed by the
    /// remaining variables of `self` in their current order. Variables of
    /// `order` that do not occur get exponent 0. The value is unchanged.
    #[must_use]
    pub fn sort_vars(&self, order: &[Symbol]) -> Self {
        let mut vars: Vec<Symbol> = Vec::with_capacity(order.len() + self.vars.len());
        for v in order.iter().chain(&self.vars) {
            if !vars.contains(v) {
                vars.push(v.clone());
            }
        }
        if vars == self.vars {
            return self.clone();
        }

        let positions: Vec<usize> = self
            .vars
            .iter()
            .map(|v| vars.iter().position(|w| w == v).unwrap_or_default())
            .collect();
        let n = vars.len();
        let terms = self
            .terms
            .iter()
            .map(|(e, c)| {
                let mut exps = monomial::one(n);
                for (k, &p) in positions.iter().enumerate() {
                    exps[p] = e[k];
                }
                (exps, c.clone())
            })
            .collect();
        Self { vars, terms }
    }

    /// Brings two polynomials onto a common variable list.
    fn unify(&self, other: &Self) -> (Self, Self) {
        if self.vars == other.vars {
            return (self.clone(), other.clone());
        }
        let a = self.sort_vars(&other.vars).sort_vars(&self.vars);
        let b = other.sort_vars(a.vars());
        (a, b)
    }

    /// Multiplies by an integer scalar.
    #[must_use]
    pub fn mul_scalar(&self, c: &Integer) -> Self {
        if c.is_zero() {
            return Self::zero(self.vars.clone());
        }
        Self {
            vars: self.vars.clone(),
            terms: self.terms.iter().map(|(e, a)| (e.clone(), a * c)).collect(),
        }
    }

    /// Computes `self^exp` by repeated squaring.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        let mut result = Self::from_int(Integer::one(), self.vars.clone());
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Reduces every coefficient into `[0, m)`; a zero modulus is a no-op.
    #[must_use]
    pub fn rem_coeffs(&self, m: &Integer) -> Self {
        if m.is_zero() {
            return self.clone();
        }
        let terms = self
            .terms
            .iter()
            .filter_map(|(e, c)| {
                let r = c.rem_euclid(m);
                (!r.is_zero()).then(|| (e.clone(), r))
            })
            .collect();
        Self {
            vars: self.vars.clone(),
            terms,
        }
    }

    /// Divides by the scalar `d` modulo `m`.
    ///
    /// Returns `None` when `d` is not invertible modulo `m` (in particular
    /// when `m` is zero).
    #[must_use]
    pub fn div_scalar(&self, d: &Integer, m: &Integer) -> Option<Self> {
        let inv = mod_inverse(d, m)?;
        Some(self.mul_scalar(&inv).rem_coeffs(m))
    }

    /// Returns the remainder of `self` modulo `divisor`, treating both as
    /// polynomials in `var`.
    ///
    /// `divisor` must be monic in `var` of degree `d > 0`, that is its
    /// coefficient of `var^d` is the constant 1. Coefficients are reduced
    /// modulo `m` along the way when `m` is nonzero.
    ///
    /// Returns `None` if `divisor` is not monic in `var`.
    #[must_use]
    pub fn reduce_by(&self, divisor: &Self, var: &Symbol, m: &Integer) -> Option<Self> {
        let d = divisor.degree(var);
        if d <= 0 || !divisor.coeff_in(var, d).get_constant().is_some_and(|c| c.is_one()) {
            return None;
        }
        let (mut rem, divisor) = self.rem_coeffs(m).unify(divisor);
        let idx = rem.index_of(var).unwrap_or_default();
        let lead = monomial::var_pow(idx, u32::try_from(d).ok()?, rem.vars.len());

        loop {
            // The term of highest degree in `var` that is still reducible.
            let Some((exps, c)) = rem
                .terms
                .iter()
                .filter(|(e, _)| i64::from(e[idx]) >= d)
                .max_by_key(|(e, _)| e[idx])
                .map(|(e, c)| (e.clone(), c.clone()))
            else {
                break;
            };
            let shift = monomial::div(&exps, &lead)?;
            for (e, a) in &divisor.terms {
                rem.add_term(monomial::mul(e, &shift), -(a * &c));
            }
            if !m.is_zero() {
                rem = rem.rem_coeffs(m);
            }
        }
        Some(rem)
    }

    /// Differentiates with respect to `var`.
    #[must_use]
    pub fn diff(&self, var: &Symbol) -> Self {
        let Some(idx) = self.index_of(var) else {
            return Self::zero(self.vars.clone());
        };
        let mut result = Self::zero(self.vars.clone());
        for (e, c) in &self.terms {
            if e[idx] == 0 {
                continue;
            }
            let mut exps = e.clone();
            exps[idx] -= 1;
            result.add_term(exps, c * &Integer::from(e[idx]));
        }
        result
    }

    /// Substitutes polynomials for variables.
    ///
    /// Variables absent from `values` are kept. The result is over this
    /// polynomial's variables followed by any new variables the values
    /// introduce.
    #[must_use]
    pub fn subs(&self, values: &FxHashMap<Symbol, DistPoly>) -> Self {
        let mut vars = self.vars.clone();
        for v in values.values().flat_map(DistPoly::vars) {
            if !vars.contains(v) {
                vars.push(v.clone());
            }
        }
        let n = vars.len();

        let mut result = Self::zero(vars.clone());
        for (e, c) in &self.terms {
            let mut kept = monomial::one(n);
            let mut term = Self::from_int(Integer::one(), vars.clone());
            for (i, v) in self.vars.iter().enumerate() {
                match values.get(v) {
                    Some(value) if e[i] > 0 => term = &term * &value.pow(e[i]),
                    Some(_) => {}
                    None => kept[i] = e[i],
                }
            }
            let mut mono = Self::zero(vars.clone());
            mono.add_term(kept, c.clone());
            result = &result + &(&mono * &term);
        }
        result
    }

    /// Returns the coefficient of `vars[..k]^prefix` as a polynomial over
    /// the remaining variables `vars[k..]`, where `k = prefix.len()`.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` is longer than the variable list.
    #[must_use]
    pub fn coefficient(&self, prefix: &[u32]) -> Self {
        let k = prefix.len();
        assert!(k <= self.vars.len(), "exponent prefix longer than variable list");
        let terms = self
            .terms
            .iter()
            .filter(|(e, _)| &e[..k] == prefix)
            .map(|(e, c)| (SmallVec::from_slice(&e[k..]), c.clone()))
            .collect();
        Self {
            vars: self.vars[k..].to_vec(),
            terms,
        }
    }

    /// Returns the coefficient of `var^d`, as a polynomial over the same
    /// variables in which `var` no longer occurs.
    #[must_use]
    pub fn coeff_in(&self, var: &Symbol, d: i64) -> Self {
        let Some(idx) = self.index_of(var) else {
            return if d == 0 {
                self.clone()
            } else {
                Self::zero(self.vars.clone())
            };
        };
        let terms = self
            .terms
            .iter()
            .filter(|(e, _)| i64::from(e[idx]) == d)
            .map(|(e, c)| {
                let mut exps = e.clone();
                exps[idx] = 0;
                (exps, c.clone())
            })
            .collect();
        Self {
            vars: self.vars.clone(),
            terms,
        }
    }

    /// Returns the greatest term under `order`.
    #[must_use]
    pub fn leading_term(&self, order: TermOrder) -> Option<(&Exponents, &Integer)> {
        self.terms.iter().max_by(|a, b| order.compare(a.0, b.0))
    }

    /// Iterates over `(exponents, coefficient)` in ascending lex order.
    pub fn terms(&self) -> impl Iterator<Item = (&Exponents, &Integer)> {
        self.terms.iter()
    }

    /// Iterates over the coefficients in ascending lex order.
    pub fn coeffs(&self) -> impl Iterator<Item = &Integer> {
        self.terms.values()
    }

    /// Returns the terms as `(exponents, coefficient)` pairs, greatest first.
    #[must_use]
    pub fn as_list(&self) -> Vec<(Vec<u32>, Integer)> {
        self.terms
            .iter()
            .rev()
            .map(|(e, c)| (e.to_vec(), c.clone()))
            .collect()
    }

    /// Renders the polynomial with its terms sorted by `order`, greatest
    /// first, e.g. `x**2 - 2*x*y + 3`.
    #[must_use]
    pub fn as_dist(&self, order: TermOrder) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut terms: Vec<_> = self.terms.iter().collect();
        terms.sort_by(|a, b| order.compare(b.0, a.0));

        let mut out = String::new();
        for (i, (e, c)) in terms.into_iter().enumerate() {
            let mono = monomial::render(e, &self.vars);
            let abs = c.abs();
            let body = if mono.is_empty() {
                abs.to_string()
            } else if abs.is_one() {
                mono
            } else {
                format!("{abs}*{mono}")
            };
            match (i, c.is_negative()) {
                (0, true) => out.push('-'),
                (0, false) => {}
                (_, true) => out.push_str(" - "),
                (_, false) => out.push_str(" + "),
            }
            out.push_str(&body);
        }
        out
    }
}

impl PartialEq for DistPoly {
    fn eq(&self, other: &Self) -> bool {
        if self.vars == other.vars {
            return self.terms == other.terms;
        }
        let (a, b) = self.unify(other);
        a.terms == b.terms
    }
}

impl Eq for DistPoly {}

impl fmt::Debug for DistPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DistPoly({}, {:?})", self.as_dist(TermOrder::Lex), self.vars)
    }
}

impl fmt::Display for DistPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_dist(TermOrder::Lex))
    }
}

impl From<Symbol> for DistPoly {
    fn from(sym: Symbol) -> Self {
        Self::var(sym)
    }
}

impl From<&Symbol> for DistPoly {
    fn from(sym: &Symbol) -> Self {
        Self::var(sym.clone())
    }
}

impl From<Integer> for DistPoly {
    fn from(c: Integer) -> Self {
        Self::constant(c)
    }
}

impl From<i64> for DistPoly {
    fn from(c: i64) -> Self {
        Self::constant(Integer::new(c))
    }
}

impl Add for &DistPoly {
    type Output = DistPoly;

    fn add(self, rhs: Self) -> DistPoly {
        let (mut a, b) = self.unify(rhs);
        for (e, c) in b.terms {
            a.add_term(e, c);
        }
        a
    }
}

impl Sub for &DistPoly {
    type Output = DistPoly;

    fn sub(self, rhs: Self) -> DistPoly {
        let (mut a, b) = self.unify(rhs);
        for (e, c) in b.terms {
            a.add_term(e, -c);
        }
        a
    }
}

impl Mul for &DistPoly {
    type Output = DistPoly;

    fn mul(self, rhs: Self) -> DistPoly {
        let (a, b) = self.unify(rhs);
        let mut result = DistPoly::zero(a.vars.clone());
        for (ea, ca) in &a.terms {
            for (eb, cb) in &b.terms {
                result.add_term(monomial::mul(ea, eb), ca * cb);
            }
        }
        result
    }
}

impl Mul<&Integer> for &DistPoly {
    type Output = DistPoly;

    fn mul(self, rhs: &Integer) -> DistPoly {
        self.mul_scalar(rhs)
    }
}

impl Neg for &DistPoly {
    type Output = DistPoly;

    fn neg(self) -> DistPoly {
        DistPoly {
            vars: self.vars.clone(),
            terms: self.terms.iter().map(|(e, c)| (e.clone(), -c)).collect(),
        }
    }
}

macro_rules! forward_owned_binop {
    ($($imp:ident, $method:ident);*) => {$(
        impl $imp for DistPoly {
            type Output = DistPoly;

            fn $method(self, rhs: DistPoly) -> DistPoly {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&DistPoly> for DistPoly {
            type Output = DistPoly;

            fn $method(self, rhs: &DistPoly) -> DistPoly {
                $imp::$method(&self, rhs)
            }
        }
    )*};
}

forward_owned_binop!(Add, add; Sub, sub; Mul, mul);

impl Neg for DistPoly {
    type Output = DistPoly;

    fn neg(self) -> DistPoly {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols;

    fn xy() -> (DistPoly, DistPoly) {
        let v = symbols("x y");
        (DistPoly::var(v[0].clone()), DistPoly::var(v[1].clone()))
    }

    fn int(n: i64) -> DistPoly {
        DistPoly::from(n)
    }

    #[test]
    fn test_arithmetic_across_var_lists() {
        let (x, y) = xy();
        let p = &(&x + &y) * &(&x - &y);
        let q = &x.pow(2) - &y.pow(2);
        assert_eq!(p, q);
        assert_eq!(p.len(), 2);
        assert!((&p - &q).is_zero());
    }

    #[test]
    fn test_degrees() {
        let (x, y) = xy();
        let p = &(&x.pow(3) * &y) + &int(5);
        let [sx, sy] = [Symbol::new("x"), Symbol::new("y")];
        assert_eq!(p.degree(&sx), 3);
        assert_eq!(p.degree(&sy), 1);
        assert_eq!(p.degree(&Symbol::new("z")), 0);
        assert_eq!(p.total_degree(), 4);
        assert_eq!(DistPoly::zero(vec![sx.clone()]).degree(&sx), -1);
        assert_eq!(int(5).get_constant(), Some(Integer::new(5)));
        assert_eq!(DistPoly::zero(vec![sx]).get_constant(), Some(Integer::zero()));
    }

    #[test]
    fn test_sort_vars_keeps_value() {
        let (x, y) = xy();
        let p = &(&x * &y.pow(2)) + &x;
        let v = symbols("z y");
        let q = p.sort_vars(&v);
        assert_eq!(q.vars(), &symbols("z y x")[..]);
        assert_eq!(p, q);
        assert_eq!(q.as_dist(TermOrder::Lex), "y**2*x + x");
    }

    #[test]
    fn test_rem_coeffs_and_div_scalar() {
        let (x, _) = xy();
        let three = Integer::new(3);
        let p = &x.mul_scalar(&Integer::new(4)) - &int(1);
        assert_eq!(p.rem_coeffs(&three), &x + &int(2));

        // 2x / 2 == x (mod 3)
        let two_x = x.mul_scalar(&Integer::new(2));
        assert_eq!(two_x.div_scalar(&Integer::new(2), &three), Some(x.clone()));
        assert_eq!(two_x.div_scalar(&Integer::new(3), &three), None);
        assert_eq!(two_x.div_scalar(&Integer::new(2), &Integer::zero()), None);
    }

    #[test]
    fn test_reduce_by() {
        let a = Symbol::new("a");
        let pa = DistPoly::var(a.clone());
        let rel = &pa.pow(2) + &int(1);
        let three = Integer::new(3);

        // a^3 = a * a^2 = -a = 2a (mod 3)
        let r = pa.pow(3).reduce_by(&rel, &a, &three).unwrap();
        assert_eq!(r, pa.mul_scalar(&Integer::new(2)));

        // a^2 + a over Z reduces to a - 1
        let r = (&pa.pow(2) + &pa).reduce_by(&rel, &a, &Integer::zero()).unwrap();
        assert_eq!(r, &pa - &int(1));

        // not monic
        let bad = pa.mul_scalar(&Integer::new(2));
        assert_eq!(pa.reduce_by(&bad, &a, &three), None);
    }

    #[test]
    fn test_reduce_by_with_parameter_coefficients() {
        let v = symbols("x a");
        let x = DistPoly::var(v[0].clone());
        let a = DistPoly::var(v[1].clone());
        // x^2 - a  ==>  x^3 = a*x
        let m = &x.pow(2) - &a;
        let r = x.pow(3).reduce_by(&m, &v[0], &Integer::zero()).unwrap();
        assert_eq!(r, &a * &x);
    }

    #[test]
    fn test_diff() {
        let (x, y) = xy();
        let p = &(&x.pow(3) * &y) + &x.mul_scalar(&Integer::new(2));
        let dx = p.diff(&Symbol::new("x"));
        assert_eq!(dx, &(&x.pow(2) * &y).mul_scalar(&Integer::new(3)) + &int(2));
        assert!(p.diff(&Symbol::new("z")).is_zero());
    }

    #[test]
    fn test_subs() {
        let (x, y) = xy();
        let p = &(&x.pow(2) * &y) + &y;
        let mut values = FxHashMap::default();
        values.insert(Symbol::new("x"), int(2));
        assert_eq!(p.subs(&values), y.mul_scalar(&Integer::new(5)));

        values.insert(Symbol::new("y"), &x + &int(1));
        // x := 2, y := x + 1 (simultaneous)
        assert_eq!(p.subs(&values), (&x + &int(1)).mul_scalar(&Integer::new(5)));
    }

    #[test]
    fn test_coefficients() {
        let v = symbols("x a");
        let x = DistPoly::var(v[0].clone());
        let a = DistPoly::var(v[1].clone());
        let p = &(&x.pow(2) * &(&a + &int(1))) + &(&x * &a);

        let c2 = p.coefficient(&[2]);
        assert_eq!(c2.vars(), &v[1..]);
        assert_eq!(c2, &a + &int(1));
        assert_eq!(p.coefficient(&[1]), a);
        assert!(p.coefficient(&[0]).is_zero());
        assert_eq!(p.coeff_in(&v[0], 2), &a + &int(1));
    }

    #[test]
    fn test_leading_term() {
        let (x, y) = xy();
        let p = &(&x * &y.pow(2)) + &x.pow(2);
        let (lex, _) = p.leading_term(TermOrder::Lex).unwrap();
        assert_eq!(lex.as_slice(), &[2, 0]);
        let (grlex, _) = p.leading_term(TermOrder::Grlex).unwrap();
        assert_eq!(grlex.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_display() {
        let (x, y) = xy();
        let p = &(&(&x.pow(2) - &(&x * &y).mul_scalar(&Integer::new(2))) - &x) + &int(3);
        assert_eq!(p.to_string(), "x**2 - 2*x*y - x + 3");
        assert_eq!((-&x).to_string(), "-x");
        assert_eq!(DistPoly::zero(Vec::new()).to_string(), "0");
        assert_eq!(
            p.as_list()[0],
            (vec![2, 0], Integer::one())
        );
    }
}
