//! Benchmarks comparing Rational against num-rational's Rational64.
//!
//! Run with: cargo bench --bench rational_benchmarks
//!
//! Key metrics:
//! - Construction (with normalization)
//! - Arithmetic operators (add, mul, div)
//! - Exact comparison
//! - Square roots (exact detection vs plain floating)
//! - Text parsing

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use exact_ratio::Rational;
use num_rational::Rational64;

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("Rational", |b| {
        b.iter(|| {
            let r = Rational::new(black_box(12_345), black_box(67_890)).unwrap();
            black_box(r);
        })
    });

    group.bench_function("num-rational", |b| {
        b.iter(|| {
            let r = Rational64::new(black_box(12_345), black_box(67_890));
            black_box(r);
        })
    });

    group.finish();
}

fn bench_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("addition");

    let a = Rational::new(355, 113).unwrap();
    let b = Rational::new(-113, 355).unwrap();
    group.bench_function("Rational", |bench| {
        bench.iter(|| black_box(black_box(a) + black_box(b)))
    });

    let na = Rational64::new(355, 113);
    let nb = Rational64::new(-113, 355);
    group.bench_function("num-rational", |bench| {
        bench.iter(|| black_box(black_box(na) + black_box(nb)))
    });

    group.finish();
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiplication");

    let a = Rational::new(355, 113).unwrap();
    let b = Rational::new(-113, 355).unwrap();
    group.bench_function("Rational", |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(b)))
    });

    let na = Rational64::new(355, 113);
    let nb = Rational64::new(-113, 355);
    group.bench_function("num-rational", |bench| {
        bench.iter(|| black_box(black_box(na) * black_box(nb)))
    });

    group.finish();
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("division");

    let a = Rational::new(355, 113).unwrap();
    let b = Rational::new(-113, 355).unwrap();
    group.bench_function("Rational", |bench| {
        bench.iter(|| black_box(black_box(a) / black_box(b)))
    });

    let na = Rational64::new(355, 113);
    let nb = Rational64::new(-113, 355);
    group.bench_function("num-rational", |bench| {
        bench.iter(|| black_box(black_box(na) / black_box(nb)))
    });

    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    // Neighbors a floating comparison cannot separate.
    let a = Rational::new(1_000_000_000_000_000_000, 999_999_999_999_999_999).unwrap();
    let b = Rational::new(999_999_999_999_999_999, 999_999_999_999_999_998).unwrap();
    group.bench_function("Rational", |bench| {
        bench.iter(|| black_box(black_box(a) < black_box(b)))
    });

    let na = Rational64::new(1_000_000_000_000_000_000, 999_999_999_999_999_999);
    let nb = Rational64::new(999_999_999_999_999_999, 999_999_999_999_999_998);
    group.bench_function("num-rational", |bench| {
        bench.iter(|| black_box(black_box(na) < black_box(nb)))
    });

    group.finish();
}

fn bench_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt");

    let perfect = Rational::new(144, 169).unwrap();
    let irrational = Rational::new(2, 3).unwrap();

    group.bench_function("sqrt_exact/perfect", |bench| {
        bench.iter(|| black_box(black_box(perfect).sqrt_exact().unwrap()))
    });
    group.bench_function("sqrt_exact/fallback", |bench| {
        bench.iter(|| black_box(black_box(irrational).sqrt_exact().unwrap()))
    });
    group.bench_function("sqrt/floating", |bench| {
        bench.iter(|| black_box(black_box(irrational).sqrt().unwrap()))
    });

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    group.bench_function("Rational", |bench| {
        bench.iter(|| black_box(black_box("-355/113").parse::<Rational>().unwrap()))
    });

    group.bench_function("num-rational", |bench| {
        bench.iter(|| black_box(black_box("-355/113").parse::<Rational64>().unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_addition,
    bench_multiplication,
    bench_division,
    bench_comparison,
    bench_sqrt,
    bench_parsing,
);
criterion_main!(benches);
