//! # strata-integers
//!
//! Arbitrary precision integer arithmetic for the Strata polynomial kernel.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Modular arithmetic with a runtime modulus (`ModIntDyn`)
//! - Modular inverses, modular powers and primality testing
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Exponents used by finite-field algorithms (`(q^d - 1) / 2`) are
//!   `Integer`s too, so they never overflow

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use modular::{is_prime, mod_inverse, pow_mod, ModIntDyn};
