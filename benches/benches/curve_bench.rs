//! # Curve Benchmarks
//!
//! Measures elementwise sigmoids, bells and composite curves.
//!
//! Run: `cargo bench --bench curve_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nemoa_math::core::axioms::Sampler;
use nemoa_math::prelude::*;

fn bench_sigmoids(c: &mut Criterion) {
    let mut group = c.benchmark_group("sigmoid");
    let x = Sampler::seeded(5).sample(&[128, 128]);

    group.bench_function("logistic", |b| b.iter(|| black_box(curve::logistic(&x))));
    group.bench_function("tanh_lecun", |b| b.iter(|| black_box(curve::tanh_lecun(&x))));
    group.bench_function("elliot", |b| b.iter(|| black_box(curve::elliot(&x))));
    group.bench_function("hill_2", |b| b.iter(|| black_box(curve::hill(&x, 2).unwrap())));
    group.bench_function("hill_4", |b| b.iter(|| black_box(curve::hill(&x, 4).unwrap())));

    group.finish();
}

fn bench_bells(c: &mut Criterion) {
    let mut group = c.benchmark_group("bell");
    let x = Sampler::seeded(6).sample(&[128, 128]);

    group.bench_function("gauss", |b| b.iter(|| black_box(curve::gauss(&x, 0.0, 1.0).unwrap())));
    group.bench_function("d_logistic", |b| b.iter(|| black_box(curve::d_logistic(&x))));
    group.bench_function("d_tanh_lecun", |b| b.iter(|| black_box(curve::d_tanh_lecun(&x))));

    group.finish();
}

fn bench_composites(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite");
    let x = Sampler::seeded(7).sample(&[128, 128]);
    let (scale, sigma) = (curve::DEFAULT_SCALE, curve::DEFAULT_SHARPNESS);

    group.bench_function("dialogistic", |b| b.iter(|| black_box(dialogistic(&x, scale, sigma).unwrap())));
    group.bench_function("softstep", |b| b.iter(|| black_box(softstep(&x, scale, sigma).unwrap())));
    group.bench_function("multi_logistic", |b| b.iter(|| black_box(multi_logistic(&x, scale, sigma))));

    group.finish();
}

criterion_group!(benches, bench_sigmoids, bench_bells, bench_composites);
criterion_main!(benches);
