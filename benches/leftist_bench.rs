//! Leftist heap benchmarks
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench leftist_bench
//!
//! # Only the merge group
//! cargo bench --bench leftist_bench -- merge
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use incident_heaps::leftist::LeftistHeap;
use incident_heaps::{Heap, IncidentQueue};

const SIZES: [usize; 4] = [1 << 8, 1 << 12, 1 << 16, 1 << 18];

/// Deterministic pseudo-random priorities (xorshift)
fn priorities(n: usize, seed: u32) -> Vec<i32> {
    let mut state = seed.max(1);
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state % 100) as i32 + 1
        })
        .collect()
}

fn build(values: &[i32]) -> LeftistHeap<usize, i32> {
    let mut heap = LeftistHeap::new();
    for (i, &p) in values.iter().enumerate() {
        heap.push(p, i);
    }
    heap
}

fn benchmark_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for &n in &SIZES {
        let values = priorities(n, 0x9e37_79b9);
        group.bench_with_input(BenchmarkId::new("leftist", n), &values, |b, vs| {
            b.iter(|| black_box(build(vs)))
        });
    }
    group.finish();
}

fn benchmark_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    for &n in &SIZES {
        let values = priorities(n, 0x85eb_ca6b);
        group.bench_with_input(BenchmarkId::new("leftist", n), &values, |b, vs| {
            b.iter(|| {
                let mut heap = build(vs);
                while let Some(entry) = heap.pop() {
                    black_box(entry);
                }
            })
        });
    }
    group.finish();
}

fn benchmark_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    for &n in &SIZES {
        let left = priorities(n, 0xc2b2_ae35);
        let right = priorities(n, 0x27d4_eb2f);
        group.bench_with_input(
            BenchmarkId::new("leftist", n),
            &(left, right),
            |b, (l, r)| {
                b.iter_batched(
                    || (build(l), build(r)),
                    |(h1, h2)| black_box(LeftistHeap::merge_heaps(h1, h2)),
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }
    group.finish();
}

fn benchmark_incident_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("incident_queue");
    let values = priorities(1 << 12, 0x1656_67b1);
    group.bench_function("insert_drain", |b| {
        b.iter(|| {
            let mut queue = IncidentQueue::new();
            for &p in &values {
                queue.insert(p, "bench", "zone");
            }
            black_box(queue.drain_by_priority())
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_push,
    benchmark_push_pop,
    benchmark_merge,
    benchmark_incident_queue
);
criterion_main!(benches);
