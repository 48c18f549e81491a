//! # strata-poly
//!
//! Raw polynomial arithmetic for the Strata polynomial kernel.
//!
//! This crate provides:
//! - Variable tokens (`Symbol`) with value identity
//! - Exponent vectors backed by `SmallVec` and their monomial helpers
//! - Term orders (`lex`, `grlex`, `grevlex`)
//! - `DistPoly`, a sparse distributed polynomial over `Integer` with an
//!   explicit, reorderable variable list
//!
//! Everything here is domain-agnostic: coefficients are plain integers and
//! reductions take the modulus as an argument. Domain policy lives in
//! `strata-domains`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dist;
pub mod monomial;
pub mod ordering;
pub mod symbol;

#[cfg(test)]
mod proptests;

pub use dist::DistPoly;
pub use monomial::Exponents;
pub use ordering::{ParseTermOrderError, TermOrder};
pub use symbol::{symbols, Symbol};
