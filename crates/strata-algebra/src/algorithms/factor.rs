//! Equal-degree factorization over finite fields (Cantor-Zassenhaus).
//!
//! A squarefree `f` whose irreducible factors all have degree `d` is split
//! by taking gcds with `g^((q^d - 1)/2) - 1` for random `g` in
//! `GF(q)[x]/(f)`, or with the trace `g + g^2 + ... + g^(2^(kd - 1))` when
//! `q = 2^k`.

use std::sync::Arc;

use log::debug;
use num_traits::One;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use strata_integers::Integer;

use super::gcd;
use crate::{Poly, PolyError, Result};

/// Configuration for randomized factorization.
#[derive(Clone, Debug)]
pub struct FactorConfig {
    /// Seed of the random source.
    pub seed: u64,
    /// Number of random samples to try before giving up.
    pub max_attempts: usize,
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_attempts: 10_000,
        }
    }
}

/// Result of equal-degree factorization.
#[derive(Clone, Debug)]
pub struct Factorization {
    /// Monic factors, each of the requested degree when `f` meets the
    /// preconditions.
    pub factors: Vec<Poly>,
    /// Number of random samples drawn.
    pub attempts: usize,
}

/// Splits `f` into its irreducible factors of degree `deg`, using the
/// default configuration.
///
/// `f` must be squarefree with all irreducible factors of degree `deg`.
///
/// # Errors
///
/// See [`factor_with`].
pub fn factor(f: &Poly, deg: u32) -> Result<Vec<Poly>> {
    factor_with_config(f, deg, &FactorConfig::default()).map(|r| r.factors)
}

/// Splits `f` with a seeded random source.
///
/// # Errors
///
/// See [`factor_with`].
pub fn factor_with_config(f: &Poly, deg: u32, config: &FactorConfig) -> Result<Factorization> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    factor_with(f, deg, &mut rng, config.max_attempts)
}

/// Splits `f` into factors of degree `deg` with the given random source.
///
/// When `deg f / deg <= 1` there is nothing to split and `[f]` is returned.
///
/// # Errors
///
/// - `NotImplemented` for `deg == 0` (general factorization).
/// - `Value` if `f` is not univariate.
/// - `Domain` unless the coefficient domain is a finite field.
/// - `Exhausted` after `max_attempts` samples without a complete split.
pub fn factor_with<R: Rng>(
    f: &Poly,
    deg: u32,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Factorization> {
    if deg == 0 {
        return Err(PolyError::NotImplemented(
            "factorization without a target degree".into(),
        ));
    }
    if !f.is_univariate() {
        return Err(PolyError::Value(format!(
            "can factor only univariate polynomials, not {f}"
        )));
    }

    let n = f.degree();
    let r = n / i64::from(deg);
    if r <= 1 {
        return Ok(Factorization {
            factors: vec![f.clone()],
            attempts: 0,
        });
    }
    let too_large = |_| PolyError::Value(format!("degree {n} too large"));
    let sample_deg = u32::try_from(r * i64::from(deg) - 1).map_err(too_large)?;
    let r = usize::try_from(r).map_err(too_large)?;

    let var = f.get_univariate()?;
    let q = f.domain().number()?;
    let monic = f.get_monic()?;
    let ext = Arc::new(f.domain().add_quotient(monic.as_dp())?);

    // the trace map is linear over GF(2), so a fixed leading coefficient
    // cannot separate conjugate factors
    let sample_monic = !q.is_even();

    let mut factors = vec![monic];
    let mut attempts = 0;
    while factors.len() < r {
        if attempts == max_attempts {
            return Err(PolyError::Exhausted(max_attempts));
        }
        attempts += 1;

        let g = Poly::from_raw_in(
            ext.random(rng, std::slice::from_ref(&var), sample_deg, sample_monic),
            &ext,
        );
        let split = splitting_element(&g, &q, deg)?;
        let split = Poly::from_raw_in(split.into_dp(), f.domain());
        if split.is_zero() {
            continue;
        }
        debug!("attempt {attempts}: splitting element {split}");

        let mut next = Vec::with_capacity(r);
        for h in factors {
            let dh = h.degree();
            if dh <= i64::from(deg) {
                next.push(h);
                continue;
            }
            let z = gcd(&h, &split)?;
            let dz = z.degree();
            if dz == 0 || dz == dh {
                next.push(h);
            } else {
                let cofactor = h.floor_div(&z)?.get_monic()?;
                debug!("split {h} into {z} and {cofactor}");
                next.push(z);
                next.push(cofactor);
            }
        }
        factors = next;
    }

    Ok(Factorization { factors, attempts })
}

/// Returns the element whose gcd with `f` splits it with probability about
/// one half.
fn splitting_element(g: &Poly, q: &Integer, deg: u32) -> Result<Poly> {
    if q.is_even() {
        // q = 2^k
        let k = q.bit_len() - 1;
        let mut term = g.clone();
        let mut trace = g.clone();
        for _ in 1..k * deg as usize {
            term = &term * &term;
            trace = &trace + &term;
        }
        Ok(trace)
    } else {
        let exp = (q.pow(deg) - Integer::one()) / Integer::new(2);
        Ok(g.pow(exp)? - 1_i64)
    }
}

/// Factors each polynomial in parallel; input `i` uses seed
/// `config.seed + i`.
#[must_use]
pub fn factor_batch(fs: &[Poly], deg: u32, config: &FactorConfig) -> Vec<Result<Factorization>> {
    fs.par_iter()
        .enumerate()
        .map(|(i, f)| {
            let mut rng = ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(i as u64));
            factor_with(f, deg, &mut rng, config.max_attempts)
        })
        .collect()
}
