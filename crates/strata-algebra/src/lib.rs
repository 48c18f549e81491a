//! # strata-algebra
//!
//! Typed polynomial values for the Strata polynomial kernel.
//!
//! A [`Poly`] wraps a raw [`DistPoly`](strata_poly::DistPoly) together with
//! its domain: which variables are indeterminates, which are parameters of
//! the coefficient ring, and the modulus, relation and quotient in force.
//! Every value is reduced against its domain on construction and tagged as
//! one of three variants ([`PolyKind`]).
//!
//! This crate provides:
//! - Construction and variant dispatch (`Polynomial`, `Constant`, `Integer`)
//! - Domain-respecting arithmetic, exact and floor division, powers
//! - Lexicographic term iteration and canonical string rendering
//! - Differentiation, substitution, leading coefficients and GCD
//! - Root search over finite domains
//! - Equal-degree (Cantor-Zassenhaus) factorization over finite fields
//!
//! ## Example
//!
//! ```
//! use strata_algebra::{factor, Poly, PolyOptions};
//! use strata_poly::Symbol;
//!
//! let x = Symbol::new("x");
//! let f = Poly::new(x.clone(), &[x.clone()], &PolyOptions::new().modulus(3)).unwrap();
//! let f: Poly = f.pow(2).unwrap() + 2;
//! assert_eq!(f.to_string(), "x**2 + 2");
//!
//! let factors = factor(&f, 1).unwrap();
//! assert_eq!(factors.len(), 2);
//! ```
//!
//! ## Logging
//!
//! Factorization attempts are logged at `debug` and long-division steps at
//! `trace` through the `log` facade.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod display;
pub mod error;
pub mod operand;
pub mod ops;
pub mod options;
pub mod poly;
pub mod variant;

#[cfg(test)]
mod proptests;

pub use algorithms::{
    diff, factor, factor_batch, factor_with, factor_with_config, gcd, lc, lm, lt, solve,
    uni_solve, FactorConfig, Factorization,
};
pub use display::DistIter;
pub use error::{PolyError, Result};
pub use operand::{Operand, Substitution};
pub use options::PolyOptions;
pub use poly::Poly;
pub use variant::PolyKind;
