//! Benchmark for the list backings against the standard collections.
//!
//! Compares `ArrayList` and `LinkedList` with `Vec` and
//! `std::collections::LinkedList` for appends, indexed access, middle
//! insertion through a cursor and split traversal.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqlist::prelude::*;
use std::hint::black_box;

// =============================================================================
// push Benchmark (append)
// =============================================================================

fn benchmark_push(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("push");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("ArrayList", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut list = ArrayList::new();
                for index in 0..size {
                    list.push(black_box(index));
                }
                black_box(list)
            });
        });

        group.bench_with_input(BenchmarkId::new("LinkedList", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut list = LinkedList::new();
                for index in 0..size {
                    list.push_back(black_box(index));
                }
                black_box(list)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut vector = Vec::new();
                for index in 0..size {
                    vector.push(black_box(index));
                }
                black_box(vector)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("std::LinkedList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = std::collections::LinkedList::new();
                    for index in 0..size {
                        list.push_back(black_box(index));
                    }
                    black_box(list)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// get Benchmark (indexed access)
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        let array: ArrayList<i32> = (0..size).collect();
        let linked: LinkedList<i32> = (0..size).collect();
        let length = usize::try_from(size).unwrap_or(0);

        group.bench_with_input(BenchmarkId::new("ArrayList", size), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut sum = 0;
                for index in (0..length).step_by(7) {
                    sum += array.get(black_box(index)).copied().unwrap_or(0);
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("LinkedList", size), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut sum = 0;
                for index in (0..length).step_by(7) {
                    sum += linked.get(black_box(index)).copied().unwrap_or(0);
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// cursor Benchmark (insert after every element)
// =============================================================================

fn benchmark_cursor_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cursor_insert");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("ArrayList", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut list: ArrayList<i32> = (0..size).collect();
                {
                    let mut cursor = list.cursor();
                    while cursor.next().is_some() {
                        let _ = cursor.add(black_box(-1));
                    }
                }
                black_box(list)
            });
        });

        group.bench_with_input(BenchmarkId::new("LinkedList", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut list: LinkedList<i32> = (0..size).collect();
                {
                    let mut cursor = list.cursor();
                    while cursor.next().is_some() {
                        let _ = cursor.add(black_box(-1));
                    }
                }
                black_box(list)
            });
        });
    }

    group.finish();
}

// =============================================================================
// split Benchmark (recursive split then drain)
// =============================================================================

fn drain<S>(mut split: S) -> i64
where
    S: SplitIterator,
    S::Item: std::ops::Deref<Target = i32>,
{
    match split.try_split() {
        Some(prefix) => drain(prefix) + drain(split),
        None => split.map(|element| i64::from(*element)).sum(),
    }
}

fn benchmark_split(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("split");

    for size in [1000, 100_000] {
        let array: ArrayList<i32> = (0..size).collect();
        let linked: LinkedList<i32> = (0..size).collect();

        group.bench_function(BenchmarkId::new("ArrayList", size), |bencher| {
            bencher.iter(|| black_box(drain(array.split_iter())));
        });

        group.bench_function(BenchmarkId::new("LinkedList", size), |bencher| {
            bencher.iter(|| black_box(drain(linked.split_iter())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_push,
    benchmark_get,
    benchmark_cursor_insert,
    benchmark_split
);

criterion_main!(benches);
