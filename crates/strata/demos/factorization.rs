//! Equal-Degree Factorization Examples
//!
//! Splits polynomials over prime fields and a degree-2 extension into
//! irreducible factors of a fixed degree, then checks them by root search.
//!
//! Run with: cargo run --example factorization

use std::sync::Arc;
use std::time::Instant;

use strata::prelude::*;

fn var_mod(p: i64) -> Poly {
    let x = Symbol::new("x");
    Poly::new(x.clone(), &[x], &PolyOptions::new().modulus(p)).expect("prime modulus")
}

fn show(label: &str, f: &Poly, deg: u32) {
    println!("  Factoring: {f} over {}", f.domain());
    let start = Instant::now();
    let result = factor_with_config(f, deg, &FactorConfig::default());
    let elapsed = start.elapsed();

    match result {
        Ok(result) => {
            println!("  Time: {elapsed:?} ({} attempts)", result.attempts);
            println!("  {label}: {} factors of degree {deg}", result.factors.len());
            for (i, h) in result.factors.iter().enumerate() {
                println!("    Factor {}: {h}", i + 1);
            }
        }
        Err(e) => println!("  Failed: {e}"),
    }
    println!();
}

fn main() {
    env_logger::init();

    println!("╔════════════════════════════════════════════════════════════════════╗");
    println!("║          Strata: Equal-Degree Factorization Examples               ║");
    println!("╚════════════════════════════════════════════════════════════════════╝\n");

    example_1_prime_fields();
    example_2_quadratic_factors();
    example_3_extension_field();
    example_4_batch();
}

/// Example 1: linear factors over GF(3), GF(2) and GF(101)
fn example_1_prime_fields() {
    println!("Example 1: Linear factors over prime fields\n");

    let x = var_mod(3);
    show("GF(3)", &(x.pow(2).unwrap() + 2), 1);

    let x = var_mod(2);
    show("GF(2)", &(x.pow(2).unwrap() + &x), 1);

    let x = var_mod(101);
    let f = (1..=6).fold(x.pow(0).unwrap(), |acc, k| acc * (&x - k * 7));
    show("GF(101)", &f, 1);
}

/// Example 2: (x^2 + 1)(x^2 + 2) over GF(7)
fn example_2_quadratic_factors() {
    println!("Example 2: Quadratic factors over GF(7)\n");

    let x = var_mod(7);
    let f = (x.pow(2).unwrap() + 1) * (x.pow(2).unwrap() + 2);
    show("GF(7)", &f, 2);
}

/// Example 3: GF(9) = GF(3)[a]/(a^2 + 1)
fn example_3_extension_field() {
    println!("Example 3: Roots in GF(9)\n");

    let a = DistPoly::var(Symbol::new("a"));
    let opts = PolyOptions::new()
        .modulus(3)
        .rel(&a.pow(2) + &DistPoly::from(1));
    let x = Symbol::new("x");
    let xv = Poly::new(x.clone(), &[x], &opts).expect("valid relation");
    let f = xv.pow(2).unwrap() + 1;

    println!("  Domain: {}", xv.domain());
    match uni_solve(&f, false) {
        Ok(roots) => {
            for root in roots {
                println!("    Root: {root}");
            }
        }
        Err(e) => println!("  Failed: {e}"),
    }

    let ring: Arc<PolynomialRing> = Arc::clone(xv.domain());
    let g = Poly::new(
        &DistPoly::var(Symbol::new("x")).pow(2) + &DistPoly::from(1),
        &[],
        &PolyOptions::new().domain(ring),
    )
    .expect("same domain");
    println!();
    show("GF(9)", &g, 1);
}

/// Example 4: parallel batch with per-input seeds
fn example_4_batch() {
    println!("Example 4: Batch factorization\n");

    let x = var_mod(13);
    let inputs: Vec<Poly> = (1..=4)
        .map(|k| (&x - k) * (&x + k))
        .collect();

    let start = Instant::now();
    let results = factor_batch(&inputs, 1, &FactorConfig::default());
    println!("  Time: {:?}", start.elapsed());
    for (f, result) in inputs.iter().zip(results) {
        match result {
            Ok(r) => {
                let names: Vec<String> = r.factors.iter().map(ToString::to_string).collect();
                println!("    {f} = {}", names.join(" * "));
            }
            Err(e) => println!("    {f}: {e}"),
        }
    }
}
