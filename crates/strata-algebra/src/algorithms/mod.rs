//! Algorithms built on the public contract of [`Poly`](crate::Poly).
//!
//! - [`diff`]: differentiation
//! - [`Poly::subs`](crate::Poly::subs): point substitution
//! - [`solve`], [`uni_solve`]: root search over enumerable domains
//! - [`lc`], [`lm`], [`lt`]: leading parts in lex order
//! - [`gcd`]: monic Euclidean GCD of univariate polynomials
//! - [`factor`]: equal-degree factorization over finite fields

mod diff;
mod factor;
mod gcd;
mod lc;
mod solve;
mod subs;

pub use diff::diff;
pub use factor::{factor, factor_batch, factor_with, factor_with_config, FactorConfig, Factorization};
pub use gcd::gcd;
pub use lc::{lc, lm, lt};
pub use solve::{solve, uni_solve};
