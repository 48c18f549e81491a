//! # strata-domains
//!
//! Domain descriptors for the Strata polynomial kernel.
//!
//! This crate provides:
//! - `Relation`: a monic defining polynomial, used both for algebraic
//!   extensions of a coefficient ring and for quotient ideals
//! - `Ring`: coefficient domains such as `Z`, `Z/6`, `GF(3)` and
//!   `GF(3)[a]/(a**2 + 1)`
//! - `PolynomialRing`: a polynomial ring over a `Ring`, optionally
//!   modulo a quotient ideal
//! - `Point`: coordinate assignments used for substitution and root search
//!
//! Domains are immutable values. They reduce raw polynomials, enumerate
//! their elements when finite, and sample random elements.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod point;
pub mod poly_ring;
pub mod relation;
pub mod ring;

pub use error::RingError;
pub use point::Point;
pub use poly_ring::PolynomialRing;
pub use relation::Relation;
pub use ring::{Elements, Points, Ring, RANDOM_BOUND};
