//! Modular arithmetic.
//!
//! This module provides integers modulo a runtime modulus, the
//! primitive behind coefficient reduction in `Z/n` and `GF(p)`.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::Integer;

/// A modular integer with a runtime-determined modulus.
///
/// The value is always kept in `[0, modulus)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ModIntDyn {
    value: Integer,
    modulus: Integer,
}

impl ModIntDyn {
    /// Creates a new modular integer.
    ///
    /// # Panics
    ///
    /// Panics if modulus is zero.
    #[must_use]
    pub fn new(value: Integer, modulus: Integer) -> Self {
        assert!(!modulus.is_zero(), "modulus cannot be zero");
        let modulus = modulus.abs();
        let value = value.rem_euclid(&modulus);
        Self { value, modulus }
    }

    /// Returns the value.
    #[must_use]
    pub fn value(&self) -> &Integer {
        &self.value
    }

    /// Returns the modulus.
    #[must_use]
    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    /// Consumes the element, returning its representative in `[0, modulus)`.
    #[must_use]
    pub fn into_value(self) -> Integer {
        self.value
    }

    /// Computes the modular inverse using the extended Euclidean algorithm.
    ///
    /// Returns `None` if the inverse doesn't exist (when gcd(self, m) != 1).
    #[must_use]
    pub fn inv(&self) -> Option<Self> {
        if self.value.is_zero() {
            return None;
        }

        let mut t = Integer::zero();
        let mut new_t = Integer::one();
        let mut r = self.modulus.clone();
        let mut new_r = self.value.clone();

        while !new_r.is_zero() {
            let quotient = &r / &new_r;
            let next_t = &t - &(&quotient * &new_t);
            t = std::mem::replace(&mut new_t, next_t);
            let next_r = &r - &(&quotient * &new_r);
            r = std::mem::replace(&mut new_r, next_r);
        }

        if !r.is_one() {
            return None; // Not coprime
        }

        Some(Self::new(t, self.modulus.clone()))
    }

    /// Computes self^exp using binary exponentiation.
    #[must_use]
    pub fn pow(&self, exp: &Integer) -> Self {
        let mut result = Self::new(Integer::one(), self.modulus.clone());
        let mut base = self.clone();

        for i in 0..exp.bit_len() {
            if exp.bit(i) {
                result = result * base.clone();
            }
            base = base.clone() * base;
        }

        result
    }
}

impl fmt::Debug for ModIntDyn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

impl fmt::Display for ModIntDyn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Add for ModIntDyn {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.modulus, rhs.modulus);
        Self::new(self.value + rhs.value, self.modulus)
    }
}

impl Sub for ModIntDyn {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.modulus, rhs.modulus);
        Self::new(self.value - rhs.value, self.modulus)
    }
}

impl Mul for ModIntDyn {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.modulus, rhs.modulus);
        Self::new(self.value * rhs.value, self.modulus)
    }
}

impl Neg for ModIntDyn {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.value, self.modulus)
    }
}

/// Returns `a⁻¹ mod m`, or `None` when `a` is not a unit modulo `m`.
#[must_use]
pub fn mod_inverse(a: &Integer, m: &Integer) -> Option<Integer> {
    if m.is_zero() {
        return None;
    }
    ModIntDyn::new(a.clone(), m.clone()).inv().map(ModIntDyn::into_value)
}

/// Returns `base^exp mod m` for `m > 0`.
#[must_use]
pub fn pow_mod(base: &Integer, exp: &Integer, m: &Integer) -> Integer {
    ModIntDyn::new(base.clone(), m.clone()).pow(exp).into_value()
}

/// Small primes used for trial division and as Miller-Rabin witnesses.
const SMALL_PRIMES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Primality test.
///
/// Uses trial division by small primes, then Miller-Rabin with the first
/// twelve primes as bases. This is deterministic for `n < 3.3 * 10^24` and
/// probabilistic beyond.
#[must_use]
pub fn is_prime(n: &Integer) -> bool {
    let two = Integer::new(2);
    if *n < two {
        return false;
    }

    for &p in &SMALL_PRIMES {
        let p = Integer::from(p);
        if *n == p {
            return true;
        }
        if n.rem_euclid(&p).is_zero() {
            return false;
        }
    }

    // n - 1 = d * 2^s with d odd
    let n_minus_one = n - &Integer::one();
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d = d / &two;
        s += 1;
    }

    'witness: for &a in &SMALL_PRIMES {
        let mut x = pow_mod(&Integer::from(a), &d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = (&x * &x).rem_euclid(n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }

    true
}
