//! # Branch-Bench Workload Benchmarks
//!
//! Complexity claims to validate:
//! - Matrix trace: O(n³), with generation O(n²)
//! - Proof-of-work: ~16^difficulty hashes
//! - Prime enumeration: O(n^1.5)
//!
//! ## Usage
//!
//! ```bash
//! cargo bench --package bb-benchmarks --bench workload_benchmarks
//! cargo bench --package bb-benchmarks --bench workload_benchmarks -- matrix
//! ```

use std::time::Duration;

use bb_benchmarks::utils::{seeded_pair, BENCH_SEED};
use bb_workloads::{
    compute_trace, find_primes, simulate_proof_of_work, trace_of_product, CpuWorkloads,
    SearchLimits, SequenceParams, Sequencer, TracingNotifier,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_matrix_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix/trace");

    for n in [10usize, 50, 100, 200] {
        // Multiply-only: operands generated once
        let (a, b) = seeded_pair(n).expect("benchmark dimensions fit in memory");
        group.throughput(Throughput::Elements((n * n * n) as u64));
        group.bench_with_input(BenchmarkId::new("trace_of_product", n), &n, |bench, _| {
            bench.iter(|| black_box(trace_of_product(black_box(&a), black_box(&b))))
        });

        // Generation + multiply, as the sequencer runs it
        group.bench_with_input(BenchmarkId::new("compute_trace", n), &n, |bench, &n| {
            let mut rng = StdRng::seed_from_u64(BENCH_SEED);
            bench.iter(|| black_box(compute_trace(black_box(n), &mut rng)))
        });
    }

    group.finish();
}

fn bench_proof_of_work(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow/search");
    group.measurement_time(Duration::from_secs(10));

    let limits = SearchLimits::unbounded();
    for difficulty in [1usize, 2, 3] {
        group.bench_with_input(
            BenchmarkId::new("difficulty", difficulty),
            &difficulty,
            |bench, &difficulty| {
                bench.iter(|| {
                    black_box(simulate_proof_of_work(
                        black_box("bench-block"),
                        difficulty,
                        &limits,
                    ))
                })
            },
        );
    }

    group.finish();
}

fn bench_primes(c: &mut Criterion) {
    let mut group = c.benchmark_group("primes/trial_division");

    for max in [1_000u64, 10_000, 100_000] {
        group.throughput(Throughput::Elements(max));
        group.bench_with_input(BenchmarkId::new("find_primes", max), &max, |bench, &max| {
            bench.iter(|| black_box(find_primes(black_box(max))))
        });
    }

    group.finish();
}

fn bench_sequencer(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequencer/run");

    let branch_a = SequenceParams {
        dimension: 50,
        threshold: -1,
        difficulty: 2,
        ..SequenceParams::default()
    };
    let branch_b = SequenceParams {
        dimension: 50,
        threshold: i64::MAX,
        max_primes: 10_000,
        ..SequenceParams::default()
    };

    for (name, params) in [("branch_a", branch_a), ("branch_b", branch_b)] {
        group.bench_function(name, |bench| {
            let mut sequencer = Sequencer::new(CpuWorkloads::seeded(BENCH_SEED), TracingNotifier);
            bench.iter(|| black_box(sequencer.run(&params)))
        });
    }

    group.finish();
}

criterion_group!(
    name = workload_benches;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5));
    targets =
        bench_matrix_trace,
        bench_proof_of_work,
        bench_primes,
        bench_sequencer,
);

criterion_main!(workload_benches);
