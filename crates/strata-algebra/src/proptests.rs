//! Property-based tests for polynomial values over prime fields.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use strata_integers::Integer;
    use strata_poly::{DistPoly, Symbol};

    use crate::{diff, gcd, Poly, PolyOptions};

    const P: i64 = 7;

    // Strategy for univariate polynomials in x over GF(7), degree < 5
    fn gf7_poly() -> impl Strategy<Value = Poly> {
        proptest::collection::vec(0i64..P, 0..=5).prop_map(|coeffs| {
            let x = Symbol::new("x");
            let rep = DistPoly::from_terms(
                vec![x.clone()],
                coeffs
                    .into_iter()
                    .enumerate()
                    .map(|(i, c)| ([u32::try_from(i).unwrap()], Integer::new(c))),
            );
            Poly::new(rep, &[x], &PolyOptions::new().modulus(P)).unwrap()
        })
    }

    // Reads back `c*x**e` style terms joined by ` + `
    fn parse_terms(rendered: &str) -> Vec<(u32, Integer)> {
        if rendered == "0" {
            return Vec::new();
        }
        rendered
            .split(" + ")
            .map(|term| {
                let (coeff, mono) = match term.split_once('*') {
                    Some((c, m)) if !c.starts_with('x') => (c.parse().unwrap(), m),
                    _ if term.starts_with('x') => (1, term),
                    _ => (term.parse().unwrap(), ""),
                };
                let exp = match mono {
                    "" => 0,
                    "x" => 1,
                    m => m.trim_start_matches("x**").parse().unwrap(),
                };
                (exp, Integer::new(coeff))
            })
            .collect()
    }

    fn nonzero_gf7_poly() -> impl Strategy<Value = Poly> {
        gf7_poly().prop_filter("nonzero", |p| !p.is_zero())
    }

    proptest! {
        #[test]
        fn ring_axioms(a in gf7_poly(), b in gf7_poly(), c in gf7_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
            prop_assert_eq!(&a * &b, &b * &a);
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn reduction_is_idempotent(a in gf7_poly(), b in gf7_poly()) {
            let p = &a * &b;
            prop_assert_eq!(p.reduce(), p.as_dp().clone());
            prop_assert!(p.coeffs().all(|c| !c.is_negative() && *c < Integer::new(P)));
        }

        #[test]
        fn division_identity(f in gf7_poly(), g in nonzero_gf7_poly()) {
            // f = (f // g) * g + f % g with deg(f % g) < deg g
            let q = f.floor_div(&g).unwrap();
            let r = f.rem(&g).unwrap();
            prop_assert_eq!(&(&q * &g) + &r, f);
            prop_assert!(r.degree() < g.degree());
        }

        #[test]
        fn gcd_divides_both(f in nonzero_gf7_poly(), g in nonzero_gf7_poly()) {
            let d = gcd(&f, &g).unwrap();
            prop_assert!(f.rem(&d).unwrap().is_zero());
            prop_assert!(g.rem(&d).unwrap().is_zero());
            prop_assert!(crate::lc(&d) == 1);
        }

        #[test]
        fn pow_matches_repeated_product(a in gf7_poly(), e in 0u32..6) {
            let expected = (0..e).fold(a.scalar(1), |acc, _| &acc * &a);
            prop_assert_eq!(a.pow(e).unwrap(), expected);
        }

        #[test]
        fn scalar_inverse(c in 1i64..P, a in gf7_poly()) {
            let inv = a.scalar(c).inverse().unwrap();
            prop_assert_eq!(&inv * c, 1);
            prop_assert_eq!(a.true_div(c).unwrap() * c, a);
        }

        #[test]
        fn diff_product_rule(a in gf7_poly(), b in gf7_poly()) {
            let left = diff(&(&a * &b), &[]).unwrap();
            let right = &(&diff(&a, &[]).unwrap() * &b) + &(&a * &diff(&b, &[]).unwrap());
            prop_assert_eq!(left, right);
        }

        #[test]
        fn rendered_terms_match_iteration(a in gf7_poly()) {
            let mut rendered = parse_terms(&a.as_dist("lex").unwrap());
            let mut iterated: Vec<(u32, Integer)> = a
                .it_dist("lex", true)
                .unwrap()
                .map(|(exps, c)| (exps[0], c.get_constant().unwrap()))
                .collect();
            rendered.sort();
            iterated.sort();
            prop_assert_eq!(rendered, iterated);

            let all = a.it_dist("lex", false).unwrap().count();
            prop_assert_eq!(all, usize::try_from(a.degree().max(0)).unwrap() + 1);
        }

        #[test]
        fn display_is_stable(a in gf7_poly()) {
            let rendered = a.to_string();
            prop_assert_eq!(a.as_dist("lex").unwrap(), rendered.clone());
            prop_assert_eq!((&a + 0_i32).to_string(), rendered);
        }
    }
}
