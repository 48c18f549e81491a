//! Exponent vectors.
//!
//! A monomial is stored as its exponent vector, positionally aligned with
//! the variable list of the polynomial that owns it. Most polynomials in
//! practice have a handful of variables, so the vector lives inline.

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt::Write;

use crate::Symbol;

/// An exponent vector, one entry per variable.
pub type Exponents = SmallVec<[u32; 4]>;

/// Returns the exponent vector of the monomial 1 in `n` variables.
#[must_use]
pub fn one(n: usize) -> Exponents {
    SmallVec::from_elem(0, n)
}

/// Returns the exponent vector of `x_i^e` in `n` variables.
#[must_use]
pub fn var_pow(i: usize, e: u32, n: usize) -> Exponents {
    let mut exps = one(n);
    exps[i] = e;
    exps
}

/// Multiplies two monomials (adds exponents).
#[must_use]
pub fn mul(a: &[u32], b: &[u32]) -> Exponents {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

/// Divides `a` by `b` if possible.
///
/// Returns `Some(quotient)` if `a` is divisible by `b`.
#[must_use]
pub fn div(a: &[u32], b: &[u32]) -> Option<Exponents> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x.checked_sub(*y)).collect()
}

/// Computes the total degree.
#[must_use]
pub fn total_degree(exps: &[u32]) -> u32 {
    exps.iter().sum()
}

/// Returns true if every exponent is zero.
#[must_use]
pub fn is_one(exps: &[u32]) -> bool {
    exps.iter().all(|&e| e == 0)
}

/// Renders a monomial as `x**2*y`, skipping zero exponents.
///
/// The monomial 1 renders as the empty string.
#[must_use]
pub fn render(exps: &[u32], vars: &[Symbol]) -> String {
    let mut out = String::new();
    for (e, v) in exps.iter().zip(vars) {
        if *e == 0 {
            continue;
        }
        if !out.is_empty() {
            out.push('*');
        }
        if *e == 1 {
            let _ = write!(out, "{v}");
        } else {
            let _ = write!(out, "{v}**{e}");
        }
    }
    out
}

/// Compares two monomials lexicographically.
#[must_use]
pub fn cmp_lex(a: &[u32], b: &[u32]) -> Ordering {
    a.cmp(b)
}

/// Compares two monomials by graded lexicographic order.
#[must_use]
pub fn cmp_grlex(a: &[u32], b: &[u32]) -> Ordering {
    total_degree(a)
        .cmp(&total_degree(b))
        .then_with(|| cmp_lex(a, b))
}

/// Compares two monomials by graded reverse lexicographic order.
#[must_use]
pub fn cmp_grevlex(a: &[u32], b: &[u32]) -> Ordering {
    match total_degree(a).cmp(&total_degree(b)) {
        Ordering::Equal => {}
        ord => return ord,
    }

    // Then compare in reverse order, reversed
    for (x, y) in a.iter().zip(b).rev() {
        match y.cmp(x) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}
