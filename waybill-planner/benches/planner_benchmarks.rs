//! Criterion benchmarks for the greedy planner.
//!
//! Measures planning time (graph build, assignment and routing) across
//! request sizes to track performance and detect regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package waybill-planner
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use waybill_core::Planner;
use waybill_planner::GreedyPlanner;

mod bench_support;

use bench_support::{BENCHMARK_SEED, generate_request};

/// Request sizes to benchmark: 50, 100, 200 deliveries.
const PROBLEM_SIZES: &[usize] = &[50, 100, 200];

/// Benchmark end-to-end planning for various request sizes.
///
/// Inputs are generated outside the measured loop; each iteration clones
/// nothing and plans from the same borrowed request.
fn bench_plan_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_time");
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(10));

    let planner = GreedyPlanner::new();
    for &size in PROBLEM_SIZES {
        let request = generate_request(size, BENCHMARK_SEED);

        #[expect(
            clippy::as_conversions,
            reason = "Safe conversion for small problem sizes"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("deliveries", size), &request, |b, request| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking plan performance, result is intentionally discarded"
                )]
                let _ = planner.plan(request);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_plan_times);
criterion_main!(benches);
