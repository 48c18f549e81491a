//! # Strata
//!
//! Polynomial values over a tower of coefficient domains: the integers,
//! prime fields, and their algebraic extensions.
//!
//! ## Features
//!
//! - **Domains**: `Z`, `Z/m`, `GF(p)`, `GF(p^k)` via a defining relation
//! - **Typed values**: polynomials, parameter constants and integers share one type
//! - **Division**: scalar and long division, remainders, monic gcd
//! - **Root search**: exhaustive over finite domains, bounded over `Z`
//! - **Factorization**: Cantor-Zassenhaus equal-degree splitting
//!
//! ## Quick Start
//!
//! ```
//! use strata::prelude::*;
//!
//! let x = Symbol::new("x");
//! let f = Poly::new(x.clone(), &[x], &PolyOptions::new().modulus(3)).unwrap();
//! let g = f.pow(2).unwrap() + 2;
//! assert_eq!(factor(&g, 1).unwrap().len(), 2);
//! assert_eq!(solve(&g, &[], false).unwrap().len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use strata_algebra as algebra;
pub use strata_domains as domains;
pub use strata_integers as integers;
pub use strata_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use strata_algebra::{
        diff, factor, factor_batch, factor_with_config, gcd, lc, solve, uni_solve, FactorConfig,
        Poly, PolyError, PolyKind, PolyOptions,
    };
    pub use strata_domains::{Point, PolynomialRing, Ring};
    pub use strata_integers::Integer;
    pub use strata_poly::{symbols, DistPoly, Symbol};
}
