//! # Registry Benchmarks
//!
//! Measures name resolution and enumeration in the function catalog.
//!
//! Run: `cargo bench --bench registry_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nemoa_math::prelude::*;

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    group.bench_function("build_catalog", |b| {
        b.iter(|| black_box(Registry::with_builtins().unwrap()))
    });

    group.bench_function("resolve_lowercase", |b| {
        b.iter(|| black_box(resolve(Category::Sigmoid, "logistic").unwrap()))
    });

    group.bench_function("resolve_mixed_case", |b| {
        b.iter(|| black_box(resolve(Category::Bell, "D_Tanh_LeCun").unwrap()))
    });

    group.bench_function("list_names", |b| {
        b.iter(|| black_box(list_names(Category::VectorNorm).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
