//! Criterion micro-benchmarks for view construction, re-slicing, copy, and append.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use sliver::{GrowthPolicy, View};
use sliver_bench::{grow_by_chunks, grow_by_single_appends};
use sliver_test_utils::counting;

/// Benchmark: make a 10K-element view (zero-filled buffer).
fn bench_make_10k(c: &mut Criterion) {
    c.bench_function("make_10k", |b| {
        b.iter(|| {
            let v: View<u32> = View::make(10_000, 10_000);
            black_box(v);
        });
    });
}

/// Benchmark: re-slice a 10K-element view and read the first element.
fn bench_subview(c: &mut Criterion) {
    let v = counting(10_000);
    c.bench_function("subview_at", |b| {
        b.iter(|| {
            let s = v.subview(black_box(100), black_box(9_000));
            black_box(s.at(0));
        });
    });
}

/// Benchmark: copy 10K elements between distinct buffers.
fn bench_copy_10k(c: &mut Criterion) {
    let src = counting(10_000);
    let dst: View<u32> = View::make(10_000, 10_000);
    c.bench_function("copy_10k", |b| {
        b.iter(|| black_box(src.copy_into(&dst)));
    });
}

/// Benchmark: overlapping self-copy that shifts 10K elements by one.
fn bench_copy_overlapping_10k(c: &mut Criterion) {
    let v = counting(10_001);
    let src = v.subview(0, 10_000);
    let dst = v.subview(1, 10_001);
    c.bench_function("copy_overlapping_10k", |b| {
        b.iter(|| black_box(src.copy_into(&dst)));
    });
}

/// Benchmark: 10K single-element appends, doubling vs exact-fit growth.
fn bench_append_single(c: &mut Criterion) {
    let doubling = GrowthPolicy::default();
    c.bench_function("append_single_10k_doubling", |b| {
        b.iter(|| black_box(grow_by_single_appends(10_000, &doubling)));
    });

    let exact = GrowthPolicy::with_factor(1).unwrap();
    c.bench_function("append_single_1k_exact", |b| {
        b.iter(|| black_box(grow_by_single_appends(1_000, &exact)));
    });
}

/// Benchmark: 1K appends of 16-element chunks.
fn bench_append_chunks(c: &mut Criterion) {
    let chunk: Vec<u64> = (0..16).collect();
    let policy = GrowthPolicy::default();
    c.bench_function("append_chunks_1k_x16", |b| {
        b.iter(|| black_box(grow_by_chunks(1_000, &chunk, &policy)));
    });
}

criterion_group!(
    benches,
    bench_make_10k,
    bench_subview,
    bench_copy_10k,
    bench_copy_overlapping_10k,
    bench_append_single,
    bench_append_chunks
);
criterion_main!(benches);
