//! Property-based tests for integer and modular arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{is_prime, mod_inverse, pow_mod, Integer};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating small primes used as moduli
    fn small_prime() -> impl Strategy<Value = i64> {
        prop::sample::select(vec![2i64, 3, 5, 7, 11, 13, 101, 997])
    }

    proptest! {
        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn rem_euclid_in_range(a in small_int(), m in 1i64..500) {
            let m = Integer::new(m);
            let r = Integer::new(a).rem_euclid(&m);
            prop_assert!(!r.is_negative());
            prop_assert!(r < m);
            prop_assert!((Integer::new(a) - r).rem_euclid(&m).is_zero());
        }

        #[test]
        fn gcd_divides_both(a in small_int(), b in small_int()) {
            prop_assume!(a != 0 || b != 0);
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        #[test]
        fn inverse_times_self_is_one(a in small_int(), p in small_prime()) {
            let p = Integer::new(p);
            let a = Integer::new(a);
            prop_assume!(!a.rem_euclid(&p).is_zero());
            let inv = mod_inverse(&a, &p).unwrap();
            prop_assert!((&a * &inv).rem_euclid(&p).is_one());
        }

        #[test]
        fn fermat_little_theorem(a in 1i64..1000, p in small_prime()) {
            let p = Integer::new(p);
            let a = Integer::new(a);
            prop_assume!(!a.rem_euclid(&p).is_zero());
            prop_assert!(pow_mod(&a, &(&p - &Integer::one()), &p).is_one());
            prop_assert!(is_prime(&p));
        }

        #[test]
        fn pow_matches_repeated_mul(a in -20i64..20, e in 0u32..8) {
            let a = Integer::new(a);
            let mut expected = Integer::one();
            for _ in 0..e {
                expected = expected * &a;
            }
            prop_assert_eq!(a.pow(e), expected);
        }
    }
}
