#![allow(missing_docs, reason = "Unnecessary for benchmarks")]
#![allow(unused_results, reason = "Unnecessary for benchmarks")]
#![allow(clippy::missing_assert_message, reason = "Unnecessary for benchmarks")]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pprof::criterion::{Output, PProfProfiler};
use series_core::prelude::{SampleSize, Strategy, SweepConfig, analyze, analyze_par};
use std::hint::black_box;

fn sum_bench(strategy: Strategy, n: SampleSize) {
    let value: f64 = strategy.partial_sum(n);
    assert!(value > 0.0);
}

#[allow(clippy::missing_panics_doc, reason = "Benchmarking only")]
pub fn accumulator_benchmark(c: &mut Criterion) {
    let mut sum_group = c.benchmark_group("Accumulators");

    for n in [100, 10_000] {
        let size = SampleSize::try_new(n).unwrap();
        for strategy in Strategy::ALL {
            sum_group.bench_function(BenchmarkId::new(strategy.label(), n), |b| {
                b.iter(|| sum_bench(black_box(strategy), black_box(size)));
            });
        }
    }
}

#[allow(clippy::missing_panics_doc, reason = "Benchmarking only")]
pub fn sweep_benchmark(c: &mut Criterion) {
    let mut sweep_group = c.benchmark_group("Sweep");

    let sizes = SweepConfig::default().sample_sizes().unwrap();

    sweep_group.bench_function(BenchmarkId::new("analyze", "Single Thread"), |b| {
        b.iter(|| analyze(black_box(&sizes)).unwrap());
    });
    sweep_group.bench_function(BenchmarkId::new("analyze", "Parallel"), |b| {
        b.iter(|| analyze_par(black_box(&sizes)).unwrap());
    });
}

criterion_group!(name=accumulators;
                config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
                targets=accumulator_benchmark, sweep_benchmark);
criterion_main!(accumulators);
