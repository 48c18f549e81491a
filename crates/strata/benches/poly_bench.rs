//! Benchmarks for polynomial arithmetic and factorization over finite fields.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use strata::prelude::*;

/// Generates a deterministic monic polynomial of the given degree mod `p`.
fn random_poly(p: i64, degree: u32, seed: u64) -> Poly {
    let x = Symbol::new("x");
    let base = Poly::new(x.clone(), &[x.clone()], &PolyOptions::new().modulus(p)).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    base.random_poly(&mut rng, &[x], degree, true)
}

/// Product of `(x - k)` for `k` in `1..=n` mod `p`.
fn split_poly(p: i64, n: i64) -> Poly {
    let x = Symbol::new("x");
    let base = Poly::new(x.clone(), &[x], &PolyOptions::new().modulus(p)).unwrap();
    (1..=n).fold(base.pow(0).unwrap(), |acc, k| acc * (&base - k))
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_mul");

    for size in [8, 32, 128] {
        let f = random_poly(101, size, 1);
        let g = random_poly(101, size, 2);

        group.bench_with_input(BenchmarkId::new("GF(101)", size), &size, |b, _| {
            b.iter(|| black_box(&f * &g))
        });
    }

    group.finish();
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_div");

    for size in [8, 32, 128] {
        let f = random_poly(101, 2 * size, 3);
        let g = random_poly(101, size, 4);

        group.bench_with_input(BenchmarkId::new("floor_div", size), &size, |b, _| {
            b.iter(|| black_box(f.floor_div(&g)))
        });
        group.bench_with_input(BenchmarkId::new("gcd", size), &size, |b, _| {
            b.iter(|| black_box(gcd(&f, &g)))
        });
    }

    group.finish();
}

fn bench_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("equal_degree_factor");
    group.sample_size(20);

    for n in [2, 4, 8] {
        let f = split_poly(101, n);
        let config = FactorConfig::default();

        group.bench_with_input(BenchmarkId::new("linear", n), &n, |b, _| {
            b.iter(|| black_box(factor_with_config(&f, 1, &config)))
        });
    }

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let f = split_poly(31, 6);
    c.bench_function("solve_gf31_degree_6", |b| {
        b.iter(|| black_box(solve(&f, &[], false)))
    });
}

criterion_group!(
    benches,
    bench_multiplication,
    bench_division,
    bench_factor,
    bench_solve
);

criterion_main!(benches);
