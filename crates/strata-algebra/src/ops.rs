//! Arithmetic on polynomial values.
//!
//! The fallible forms accept any [`Operand`]; the `std::ops` forms only
//! accept operand types that always coerce.

use std::ops::{Add, Mul, Neg, Sub};

use log::trace;
use num_traits::{One, Zero};
use strata_integers::Integer;
use strata_poly::{DistPoly, Symbol};

use crate::algorithms::lc;
use crate::{Operand, Poly, PolyError, Result};

impl Poly {
    /// Coerces `rhs` to a raw polynomial over this value's indeterminates.
    fn coerce(&self, rhs: Operand, op: &str) -> Result<DistPoly> {
        let name = rhs.type_name();
        rhs.into_raw(self.indet_vars()).ok_or_else(|| {
            PolyError::UnsupportedOperand(format!("{op}: '{}' and '{name}'", self.kind))
        })
    }

    /// Lifts `rhs` to a value in this value's domain.
    fn lift(&self, rhs: Operand, op: &str) -> Result<Poly> {
        match rhs {
            Operand::Poly(p) => Ok(p),
            other => Ok(Self::from_raw_in(self.coerce(other, op)?, &self.dom)),
        }
    }

    /// Returns `self + rhs`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperand` if `rhs` is a point.
    pub fn try_add(&self, rhs: impl Into<Operand>) -> Result<Poly> {
        let g = self.coerce(rhs.into(), "+")?;
        Ok(self.wrap(&(&self.rep + &g)))
    }

    /// Returns `self - rhs`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperand` if `rhs` is a point.
    pub fn try_sub(&self, rhs: impl Into<Operand>) -> Result<Poly> {
        let g = self.coerce(rhs.into(), "-")?;
        Ok(self.wrap(&(&self.rep - &g)))
    }

    /// Returns `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperand` if `rhs` is a point.
    pub fn try_mul(&self, rhs: impl Into<Operand>) -> Result<Poly> {
        let g = self.coerce(rhs.into(), "*")?;
        Ok(self.wrap(&(&self.rep * &g)))
    }

    /// Returns true if `rhs` coerces to this value's representation.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperand` if `rhs` is a point.
    pub fn equals(&self, rhs: impl Into<Operand>) -> Result<bool> {
        let g = self.coerce(rhs.into(), "==")?;
        Ok(self.rep == g)
    }

    /// Exact division.
    ///
    /// Dividing by an integer or a `Constant`/`Integer` value multiplies by
    /// its inverse in the coefficient field.
    ///
    /// # Errors
    ///
    /// - `Domain` unless the coefficient domain is a field.
    /// - `Value` when dividing by zero.
    /// - `UnsupportedOperand` for a point or a non-constant divisor.
    pub fn true_div(&self, rhs: impl Into<Operand>) -> Result<Poly> {
        match rhs.into() {
            Operand::Int(c) => self.div_scalar(&c),
            other => {
                let g = self.lift(other, "/")?;
                self.div_by(&g)
            }
        }
    }

    fn div_scalar(&self, c: &Integer) -> Result<Poly> {
        if !self.coeff_domain().is_field() {
            return Err(PolyError::Domain("can divide only on fields".into()));
        }
        let m = self.modulus();
        if c.rem_euclid(m).is_zero() {
            return Err(PolyError::Value("division by zero".into()));
        }
        let rep = self
            .rep
            .div_scalar(c, m)
            .ok_or_else(|| PolyError::Domain(format!("{c} is not invertible modulo {m}")))?;
        Ok(self.wrap(&rep))
    }

    fn div_by(&self, g: &Poly) -> Result<Poly> {
        if g.degrees().iter().any(|&d| d > 0) {
            return Err(PolyError::UnsupportedOperand(format!(
                "/: '{}' and '{}'",
                self.kind, g.kind
            )));
        }
        if !self.coeff_domain().is_field() {
            return Err(PolyError::Domain("can divide only on fields".into()));
        }
        if g.is_zero() {
            return Err(PolyError::Value("division by zero".into()));
        }
        Ok(self * &g.inverse()?)
    }

    /// Returns the multiplicative inverse.
    ///
    /// Scalars are inverted as `c^(q - 2)` in the coefficient field of
    /// order `q`; polynomials inside `GF(q)[x]/(m)` as `f^(q^deg(m) - 2)`.
    ///
    /// # Errors
    ///
    /// - `Domain` unless the coefficient domain is a finite field, and for a
    ///   polynomial outside a quotient ring.
    /// - `Value` for zero.
    pub fn inverse(&self) -> Result<Poly> {
        if !self.coeff_domain().is_field() {
            return Err(PolyError::Domain(format!(
                "cannot invert over {}",
                self.coeff_domain()
            )));
        }
        if self.is_zero() {
            return Err(PolyError::Value("zero has no inverse".into()));
        }
        let q = self.dom.number()?;
        let constant = self.degrees().iter().all(|&d| d <= 0);
        let exp = match self.dom.quo() {
            Some(quo) if !constant => q.pow(quo.degree()),
            _ if constant => q,
            _ => {
                return Err(PolyError::Domain(format!(
                    "{self} is invertible only in a quotient ring"
                )))
            }
        };
        self.pow(exp - Integer::new(2))
    }

    /// Polynomial long division, returning the quotient.
    ///
    /// An integer divisor divides every coefficient.
    ///
    /// # Errors
    ///
    /// - `TypeKind` unless both operands are univariate in the same
    ///   variable over the same indeterminates.
    /// - `Value` when dividing by zero.
    /// - `Domain` unless the coefficient domain is a field.
    pub fn floor_div(&self, rhs: impl Into<Operand>) -> Result<Poly> {
        let g = match rhs.into() {
            Operand::Int(c) => return self.div_scalar(&c),
            other => self.lift(other, "//")?,
        };
        if !self.is_univariate() || !g.is_univariate() {
            return Err(PolyError::TypeKind(
                "operands must be univariate polynomial".into(),
            ));
        }
        if self.indet_vars() != g.indet_vars() {
            return Err(PolyError::TypeKind(format!(
                "operands have different indeterminates: {:?} and {:?}",
                self.indet_vars(),
                g.indet_vars()
            )));
        }
        if g.is_zero() {
            return Err(PolyError::Value("division by zero".into()));
        }

        let dg = g.degree();
        if self.degree() < dg {
            return Ok(self.scalar(0));
        }
        let var = match (self.get_univariate(), g.get_univariate()) {
            (Ok(v), _) | (Err(_), Ok(v)) => v,
            (Err(_), Err(_)) => return self.true_div(g),
        };
        if dg > 0 && g.get_univariate()? != var {
            return Err(PolyError::TypeKind(format!(
                "operands are polynomials in different variables: {self} and {g}"
            )));
        }

        let lc_g = lc(&g);
        let v = Self::from_raw_in(DistPoly::var(var.clone()), &self.dom);
        let mut q = self.scalar(0);
        let mut r = self.clone();
        while !r.is_zero() && r.degree_in(&var) >= dg {
            let shift = r.degree_in(&var) - dg;
            let t = lc(&r).true_div(&lc_g)? * v.pow(shift)?;
            trace!("long division step: {t} (remainder degree {})", r.degree_in(&var));
            r = &r - &(&t * &g);
            q = &q + &t;
        }
        Ok(q)
    }

    /// Returns `self - (self // rhs) * rhs`.
    ///
    /// # Errors
    ///
    /// As [`Poly::floor_div`].
    pub fn rem(&self, rhs: impl Into<Operand>) -> Result<Poly> {
        let g = self.lift(rhs.into(), "%")?;
        let q = self.floor_div(&g)?;
        Ok(self - &(&q * &g))
    }

    /// Raises to a non-negative power by square-and-multiply over the bits
    /// of `exp`, most significant first.
    ///
    /// # Errors
    ///
    /// Returns `Value` for a negative exponent.
    pub fn pow(&self, exp: impl Into<Integer>) -> Result<Poly> {
        let exp = exp.into();
        if exp.is_negative() {
            return Err(PolyError::Value(format!(
                "exponent must be non-negative, not {exp}"
            )));
        }
        let mut acc = self.scalar(Integer::one());
        for i in (0..exp.bit_len()).rev() {
            acc = &acc * &acc;
            if exp.bit(i) {
                acc = self * &acc;
            }
        }
        Ok(acc)
    }
}

/// Operand types that always coerce to a raw polynomial.
trait Lift {
    fn lift_raw(self, vars: &[Symbol]) -> DistPoly;
}

impl Lift for Poly {
    fn lift_raw(self, _: &[Symbol]) -> DistPoly {
        self.rep
    }
}

impl Lift for &Poly {
    fn lift_raw(self, _: &[Symbol]) -> DistPoly {
        self.rep.clone()
    }
}

impl Lift for Integer {
    fn lift_raw(self, vars: &[Symbol]) -> DistPoly {
        DistPoly::from_int(self, vars.to_vec())
    }
}

impl Lift for &Integer {
    fn lift_raw(self, vars: &[Symbol]) -> DistPoly {
        DistPoly::from_int(self.clone(), vars.to_vec())
    }
}

impl Lift for i64 {
    fn lift_raw(self, vars: &[Symbol]) -> DistPoly {
        DistPoly::from_int(Integer::new(self), vars.to_vec())
    }
}

impl Lift for i32 {
    fn lift_raw(self, vars: &[Symbol]) -> DistPoly {
        DistPoly::from_int(Integer::from(self), vars.to_vec())
    }
}

impl Lift for Symbol {
    fn lift_raw(self, _: &[Symbol]) -> DistPoly {
        DistPoly::var(self)
    }
}

impl Lift for &Symbol {
    fn lift_raw(self, _: &[Symbol]) -> DistPoly {
        DistPoly::var(self.clone())
    }
}

impl Lift for DistPoly {
    fn lift_raw(self, _: &[Symbol]) -> DistPoly {
        self
    }
}

impl Lift for &DistPoly {
    fn lift_raw(self, _: &[Symbol]) -> DistPoly {
        self.clone()
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $op:tt; $($rhs:ty),*) => {$(
        impl $trait<$rhs> for &Poly {
            type Output = Poly;

            fn $method(self, rhs: $rhs) -> Poly {
                let g = rhs.lift_raw(self.indet_vars());
                self.wrap(&(&self.rep $op &g))
            }
        }

        impl $trait<$rhs> for Poly {
            type Output = Poly;

            fn $method(self, rhs: $rhs) -> Poly {
                (&self).$method(rhs)
            }
        }
    )*};
}

impl_binop!(Add, add, +; Poly, &Poly, i64, i32, Integer, &Integer, Symbol, &Symbol, DistPoly, &DistPoly);
impl_binop!(Sub, sub, -; Poly, &Poly, i64, i32, Integer, &Integer, Symbol, &Symbol, DistPoly, &DistPoly);
impl_binop!(Mul, mul, *; Poly, &Poly, i64, i32, Integer, &Integer, Symbol, &Symbol, DistPoly, &DistPoly);

// Integer on the left.
macro_rules! impl_scalar_lhs {
    ($($lhs:ty),*) => {$(
        impl Add<&Poly> for $lhs {
            type Output = Poly;

            fn add(self, rhs: &Poly) -> Poly {
                rhs + self
            }
        }

        impl Add<Poly> for $lhs {
            type Output = Poly;

            fn add(self, rhs: Poly) -> Poly {
                &rhs + self
            }
        }

        impl Sub<&Poly> for $lhs {
            type Output = Poly;

            fn sub(self, rhs: &Poly) -> Poly {
                let f = self.lift_raw(rhs.indet_vars());
                rhs.wrap(&(&f - &rhs.rep))
            }
        }

        impl Sub<Poly> for $lhs {
            type Output = Poly;

            fn sub(self, rhs: Poly) -> Poly {
                self - &rhs
            }
        }

        impl Mul<&Poly> for $lhs {
            type Output = Poly;

            fn mul(self, rhs: &Poly) -> Poly {
                rhs * self
            }
        }

        impl Mul<Poly> for $lhs {
            type Output = Poly;

            fn mul(self, rhs: Poly) -> Poly {
                &rhs * self
            }
        }
    )*};
}

impl_scalar_lhs!(i64, i32);

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        self.wrap(&self.rep.mul_scalar(&Integer::new(-1)))
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        -&self
    }
}

impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        self.rep == other.rep
    }
}

impl Eq for Poly {}

macro_rules! impl_eq {
    ($($rhs:ty),*) => {$(
        impl PartialEq<$rhs> for Poly {
            fn eq(&self, other: &$rhs) -> bool {
                self.rep == other.clone().lift_raw(self.indet_vars())
            }
        }
    )*};
}

impl_eq!(i64, i32, Integer, Symbol, DistPoly);
