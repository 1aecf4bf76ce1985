//! # Norm Benchmarks
//!
//! Measures vector and matrix norms and distances, typed and dispatched by name.
//!
//! Run: `cargo bench --bench norm_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nemoa_math::core::axioms::Sampler;
use nemoa_math::prelude::*;

/// Benchmark typed vector norms over the first axis
fn bench_vector_norms(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_norm");

    for size in [8usize, 64, 256] {
        let x = Sampler::seeded(1).sample(&[size, size]);

        group.bench_with_input(BenchmarkId::new("euclid", size), &x, |b, x| {
            b.iter(|| black_box(vector::norm_euclid(x, 0).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("p_3", size), &x, |b, x| {
            b.iter(|| black_box(vector::norm_p(x, 3.0, 0).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("max", size), &x, |b, x| {
            b.iter(|| black_box(vector::norm_max(x, 0).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark name dispatch against direct calls
fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("norm_dispatch");
    let x = Sampler::seeded(2).sample(&[64, 64]);

    group.bench_function("direct_euclid", |b| {
        b.iter(|| black_box(vector::norm_euclid(&x, 0).unwrap()))
    });

    group.bench_function("named_euclid", |b| {
        b.iter(|| black_box(norm(&x, "euclid", 0, &Params::new()).unwrap()))
    });

    let params = Params::new().with("p", 3.0);
    group.bench_function("named_p_3", |b| {
        b.iter(|| black_box(norm(&x, "p", 0, &params).unwrap()))
    });

    group.finish();
}

/// Benchmark matrix norms and distances over stacked matrices
fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");
    let x = Sampler::seeded(3).sample(&[32, 32, 16]);
    let y = Sampler::seeded(4).sample(&[32, 32, 16]);

    group.bench_function("frobenius", |b| {
        b.iter(|| black_box(matrix::norm_frobenius(&x, (0, 1)).unwrap()))
    });

    group.bench_function("pq_1_2", |b| {
        b.iter(|| black_box(matrix::norm_pq(&x, 1.0, 2.0, (0, 1)).unwrap()))
    });

    group.bench_function("dist_frobenius", |b| {
        b.iter(|| black_box(matrix::dist_frobenius(&x, &y, (0, 1)).unwrap()))
    });

    group.bench_function("rmse", |b| {
        b.iter(|| black_box(regress::rmse(&x, &y, 0).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_vector_norms, bench_dispatch, bench_matrix);
criterion_main!(benches);
