//! Benchmark for grouping.
//!
//! Compares hashed bucketing against the linear key scan the matching
//! predicate falls back to.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sequery::grouping::{group_by, group_by_matching};
use std::hint::black_box;

fn benchmark_hashed_grouping(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("group_by");

    for size in [64, 512, 4_096] {
        let elements: Vec<u32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &elements, |bencher, input| {
            bencher.iter(|| group_by(black_box(input), |element| element % 16));
        });
    }

    group.finish();
}

fn benchmark_predicate_grouping(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("group_by_matching");

    for size in [64, 512, 4_096] {
        let elements: Vec<u32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &elements, |bencher, input| {
            bencher.iter(|| {
                group_by_matching(
                    black_box(input),
                    |element| element % 16,
                    &|derived, existing| derived == existing,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_hashed_grouping, benchmark_predicate_grouping);
criterion_main!(benches);
