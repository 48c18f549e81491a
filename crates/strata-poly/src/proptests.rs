//! Property-based tests for raw polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rustc_hash::FxHashMap;
    use strata_integers::Integer;

    use crate::{symbols, DistPoly, Symbol, TermOrder};

    // Strategy for generating small polynomials in x, y (up to 4 terms)
    fn small_poly() -> impl Strategy<Value = DistPoly> {
        proptest::collection::vec(((0u32..4, 0u32..4), -20i64..20), 0..=4).prop_map(|terms| {
            DistPoly::from_terms(
                symbols("x y"),
                terms
                    .into_iter()
                    .map(|((i, j), c)| ([i, j], Integer::new(c))),
            )
        })
    }

    // Strategy for generating small polynomials in y, z (shares y with small_poly)
    fn other_poly() -> impl Strategy<Value = DistPoly> {
        small_poly().prop_map(|p| {
            let mut values = FxHashMap::default();
            values.insert(Symbol::new("x"), DistPoly::var(Symbol::new("z")));
            p.subs(&values)
        })
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in other_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in other_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in other_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in other_poly()) {
            // a * (b + c) = a * b + a * c
            let left = &a * &(&b + &c);
            let right = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!((&a - &a).is_zero());
            prop_assert!((&a + &(-&a)).is_zero());
        }

        #[test]
        fn sort_vars_preserves_value(a in small_poly()) {
            let order = symbols("z y");
            let sorted = a.sort_vars(&order);
            prop_assert_eq!(sorted.vars()[0].name(), "z");
            prop_assert_eq!(&sorted, &a);
            prop_assert_eq!(sorted.len(), a.len());
        }

        #[test]
        fn diff_is_linear(a in small_poly(), b in small_poly()) {
            let x = Symbol::new("x");
            prop_assert_eq!((&a + &b).diff(&x), &a.diff(&x) + &b.diff(&x));
        }

        #[test]
        fn diff_product_rule(a in small_poly(), b in small_poly()) {
            let x = Symbol::new("x");
            let left = (&a * &b).diff(&x);
            let right = &(&a.diff(&x) * &b) + &(&a * &b.diff(&x));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn rem_coeffs_is_idempotent(a in small_poly(), m in 2i64..12) {
            let m = Integer::new(m);
            let once = a.rem_coeffs(&m);
            prop_assert_eq!(once.rem_coeffs(&m), once.clone());
            prop_assert!(once.coeffs().all(|c| !c.is_negative() && *c < m));
        }

        #[test]
        fn reduce_by_is_idempotent(a in small_poly()) {
            let x = Symbol::new("x");
            let rel = &DistPoly::var(x.clone()).pow(2) + &DistPoly::from(1);
            let five = Integer::new(5);
            let once = a.reduce_by(&rel, &x, &five).unwrap();
            prop_assert!(once.degree(&x) < 2);
            prop_assert_eq!(once.reduce_by(&rel, &x, &five).unwrap(), once.clone());
        }

        #[test]
        fn as_list_matches_terms(a in small_poly()) {
            let list = a.as_list();
            prop_assert_eq!(list.len(), a.len());
            let rebuilt = DistPoly::from_terms(symbols("x y"), list);
            prop_assert_eq!(rebuilt, a.clone());
            let rendered = a.as_dist(TermOrder::Lex);
            prop_assert!(!rendered.is_empty());
        }
    }
}
