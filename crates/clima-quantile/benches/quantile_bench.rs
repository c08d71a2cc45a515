//! Benchmarks for linear quantile estimation at climatology sample sizes

use clima_quantile::{quantile, quantiles};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate seeded daily temperatures
fn generate_samples(size: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    (0..size).map(|_| rng.gen_range(-10.0..40.0)).collect()
}

fn bench_single_vs_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("p10_p50_p90");

    // 3 years × 3 days up to 40 years × 15 days
    for &size in &[9usize, 45, 150, 600] {
        let data = generate_samples(size);

        group.bench_with_input(BenchmarkId::new("three_calls", size), &data, |b, data| {
            b.iter(|| {
                let lo = quantile(black_box(data), 0.1).unwrap();
                let mid = quantile(black_box(data), 0.5).unwrap();
                let hi = quantile(black_box(data), 0.9).unwrap();
                (lo, mid, hi)
            })
        });

        group.bench_with_input(BenchmarkId::new("one_sort", size), &data, |b, data| {
            b.iter(|| quantiles(black_box(data), &[0.1, 0.5, 0.9]).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_vs_batch);
criterion_main!(benches);
