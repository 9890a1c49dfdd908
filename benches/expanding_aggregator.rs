//! Benchmark the online expanding aggregation against recomputing every window from scratch.

#![allow(missing_docs, reason = "Benchmarks don't need docs")]

use criterion::{
    BenchmarkId,
    Criterion,
    criterion_group,
    criterion_main,
};
use percolation_stats::prelude::*;
use rand::{
    Rng,
    SeedableRng,
    rngs::StdRng,
};

const SIZES: [u32; 6] = [10, 50, 100, 250, 500, 1000];

fn observations(per_size: usize) -> Vec<Observation> {
    let mut rng = StdRng::seed_from_u64(0);
    let mut out = Vec::with_capacity(per_size * SIZES.len());
    for _ in 0..per_size {
        for size in SIZES {
            out.push(Observation::new(size, rng.random_range(0.5..0.7)));
        }
    }
    out
}

/// Recompute mean and sample std of every prefix, the way a windowed dataframe would.
fn naive_expanding(vals: &[f64]) -> Vec<(f64, Option<f64>)> {
    Vec::from_iter((1..=vals.len()).map(|k| {
        let prefix = &vals[..k];
        let mean = prefix.iter().sum::<f64>() / k as f64;
        let std = (k > 1).then(|| {
            (prefix.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (k - 1) as f64).sqrt()
        });
        (mean, std)
    }))
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("expanding");
    for per_size in [100, 1_000] {
        let observations = observations(per_size);
        let config = Config::default();

        group.bench_with_input(
            BenchmarkId::new("online", per_size),
            &observations,
            |b, observations| {
                b.iter(|| convergence_table(std::hint::black_box(observations), &config))
            },
        );
        group.bench_with_input(
            BenchmarkId::new("naive", per_size),
            &observations,
            |b, observations| {
                b.iter(|| {
                    let index = GroupingIndex::new(std::hint::black_box(observations));
                    Vec::from_iter(index.groups().iter().map(|g| naive_expanding(g.thresholds())))
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("snapshot", per_size),
            &observations,
            |b, observations| {
                b.iter(|| snapshot_table(std::hint::black_box(observations), &config))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
