//! Root search over enumerable coefficient domains.

use log::warn;
use strata_domains::Point;
use strata_poly::{DistPoly, Symbol};

use crate::{Poly, PolyError, Result};

/// Finds every point over `vars` (all indeterminates if empty) with
/// coordinates in the coefficient domain at which `f` vanishes.
///
/// `extend` asks for roots in extension fields, which is not supported:
/// no points are returned.
///
/// # Errors
///
/// - `Domain` if the coefficient domain is not finite.
/// - `TypeKind` if `f` is a `Constant` or `Integer`.
pub fn solve(f: &Poly, vars: &[Symbol], extend: bool) -> Result<Vec<Point>> {
    if extend {
        warn!("root search in extension fields is not supported; no points returned");
        return Ok(Vec::new());
    }
    let vars = if vars.is_empty() { f.indet_vars() } else { vars };
    let mut roots = Vec::new();
    for point in f.coeff_domain().it_points(vars)? {
        if f.subs(&point)?.is_zero() {
            roots.push(point);
        }
    }
    Ok(roots)
}

/// Finds the roots of a univariate polynomial.
///
/// Over a finite field of characteristic `p` the first root `r` found
/// yields the others as its Frobenius conjugates `r^(p^i)`, `i < deg f`,
/// which is the full root set when `f` is irreducible over the prime field.
/// Over the integers (`infinite = true`) every integer root is returned;
/// candidates are bounded by the lowest nonzero coefficient, which every
/// nonzero root divides.
///
/// # Errors
///
/// - `TypeKind` if `f` is not univariate.
/// - `Domain` for an infinite coefficient domain unless `infinite` is set,
///   and for domains that cannot be enumerated.
pub fn uni_solve(f: &Poly, infinite: bool) -> Result<Vec<Point>> {
    let var = match f.indet_vars() {
        [v] => v.clone(),
        _ => f.get_univariate()?,
    };
    let dom = f.coeff_domain();
    if !dom.is_finite() {
        if !infinite {
            return Err(PolyError::Domain(format!(
                "root search over the infinite domain {dom} must be requested explicitly"
            )));
        }
        return integer_roots(f, &var);
    }

    let deg = u32::try_from(f.degree()).unwrap_or(0);
    for elem in dom.it_elements()? {
        let point = Point::new(vec![(var.clone(), elem.clone())]);
        if !f.subs(&point)?.is_zero() {
            continue;
        }
        let root = Poly::from_raw_in(elem, f.domain());
        let mut roots: Vec<Point> = Vec::new();
        for i in 0..deg {
            let conjugate = root.pow(f.modulus().pow(i))?;
            let point = Point::new(vec![(var.clone(), coordinate(&conjugate, &var))]);
            if !roots.contains(&point) {
                roots.push(point);
            }
        }
        return Ok(roots);
    }
    Ok(Vec::new())
}

/// Projects a value of degree 0 in `var` onto the parameter variables, the
/// same shape the coefficient domain enumerates elements in.
fn coordinate(value: &Poly, var: &Symbol) -> DistPoly {
    value
        .as_dp()
        .sort_vars(std::slice::from_ref(var))
        .coefficient(&[0])
}

fn integer_roots(f: &Poly, var: &Symbol) -> Result<Vec<Point>> {
    let rep = f.as_dp();
    let lowest = (0..=rep.degree(var).max(0))
        .map(|k| rep.coeff_in(var, k))
        .find(|c| !c.is_zero());
    let Some(lowest) = lowest else {
        return Ok(Vec::new());
    };
    let bound = lowest
        .get_constant()
        .ok_or_else(|| PolyError::Domain(format!("{f} has non-integer coefficients")))?
        .abs();

    let mut roots = Vec::new();
    for elem in f.coeff_domain().it_elements()? {
        let Some(c) = elem.get_constant() else {
            break;
        };
        if c.abs() > bound {
            break;
        }
        let point = Point::new(vec![(var.clone(), elem)]);
        if f.subs(&point)?.is_zero() {
            roots.push(point);
        }
    }
    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PolyOptions;

    fn x() -> Symbol {
        Symbol::new("x")
    }

    fn coords(points: &[Point]) -> Vec<DistPoly> {
        points.iter().map(|p| p.coords()[0].1.clone()).collect()
    }

    #[test]
    fn test_solve_gf3() {
        let f = Poly::new(DistPoly::var(x()).pow(2), &[x()], &PolyOptions::new().modulus(3)).unwrap() - 1;
        let roots = solve(&f, &[], false).unwrap();
        assert_eq!(coords(&roots), vec![DistPoly::from(1), DistPoly::from(2)]);
        assert!(solve(&f, &[], true).unwrap().is_empty());
    }

    #[test]
    fn test_solve_two_variables() {
        let [x, y]: [Symbol; 2] = strata_poly::symbols("x y").try_into().unwrap();
        // x + y over GF(2): (0, 0) and (1, 1)
        let rep = &DistPoly::var(x.clone()) + &DistPoly::var(y.clone());
        let f = Poly::new(rep, &[x, y], &PolyOptions::new().modulus(2)).unwrap();
        let roots = solve(&f, &[], false).unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[1].to_string(), "(x: 1, y: 1)");
    }

    #[test]
    fn test_solve_needs_finite_domain() {
        let f = Poly::new(x(), &[x()], &PolyOptions::new()).unwrap();
        assert!(matches!(solve(&f, &[], false), Err(PolyError::Domain(_))));
    }

    #[test]
    fn test_uni_solve_extension() {
        let a = DistPoly::var(Symbol::new("a"));
        let opts = PolyOptions::new().modulus(3).rel(&a.pow(2) + &DistPoly::from(1));
        let f = Poly::new(&DistPoly::var(x()).pow(2) + &DistPoly::from(1), &[x()], &opts).unwrap();
        let roots = uni_solve(&f, false).unwrap();
        assert_eq!(coords(&roots), vec![a.clone(), a.mul_scalar(&2.into())]);
    }

    #[test]
    fn test_uni_solve_matches_solve() {
        let a = DistPoly::var(Symbol::new("a"));
        let opts = PolyOptions::new().modulus(3).rel(&a.pow(2) + &DistPoly::from(1));
        let f = Poly::new(&DistPoly::var(x()).pow(2) + &DistPoly::from(1), &[x()], &opts).unwrap();
        let conjugates = uni_solve(&f, false).unwrap();
        let searched = solve(&f, &[], false).unwrap();
        assert_eq!(format!("{conjugates:?}"), format!("{searched:?}"));
        assert!(conjugates.iter().all(|p| p.coords()[0].1.vars() == [Symbol::new("a")]));

        let g = Poly::new(DistPoly::var(x()).pow(3), &[x()], &PolyOptions::new().modulus(5)).unwrap() - 2;
        // 3^3 = 27 = 2 mod 5, and cubing is a bijection mod 5
        let conjugates = uni_solve(&g, false).unwrap();
        let searched = solve(&g, &[], false).unwrap();
        assert_eq!(format!("{conjugates:?}"), format!("{searched:?}"));
        assert!(conjugates[0].coords()[0].1.vars().is_empty());
    }

    #[test]
    fn test_uni_solve_integers() {
        // (x - 2)(x + 3) x = x^3 + x^2 - 6x
        let xr = DistPoly::var(x());
        let rep = &(&xr.pow(3) + &xr.pow(2)) - &xr.mul_scalar(&6.into());
        let f = Poly::new(rep, &[x()], &PolyOptions::new()).unwrap();
        assert!(matches!(uni_solve(&f, false), Err(PolyError::Domain(_))));

        let roots = uni_solve(&f, true).unwrap();
        assert_eq!(
            coords(&roots),
            vec![DistPoly::from(0), DistPoly::from(2), DistPoly::from(-3)]
        );
    }

    #[test]
    fn test_uni_solve_needs_univariate() {
        let [x, y]: [Symbol; 2] = strata_poly::symbols("x y").try_into().unwrap();
        let rep = &DistPoly::var(x.clone()) * &DistPoly::var(y.clone());
        let f = Poly::new(rep, &[x, y], &PolyOptions::new().modulus(3)).unwrap();
        assert!(matches!(uni_solve(&f, false), Err(PolyError::TypeKind(_))));
    }
}
