//! Criterion micro-benchmarks for arena creation and bump allocation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strand_arena::{AllocOptions, AllocOutcome, Arena};
use strand_test_utils::{padded_upper_bound, seeded_requests};

/// Benchmark: create and destroy a 1 MiB arena.
fn bench_arena_create_1mib(c: &mut Criterion) {
    c.bench_function("arena_create_1mib", |b| {
        b.iter(|| {
            let arena = Arena::new(black_box(1 << 20));
            black_box(arena.capacity());
            arena.destroy();
        });
    });
}

/// Benchmark: 1024 zero-filled 16-byte allocations.
fn bench_alloc_small_zeroed(c: &mut Criterion) {
    c.bench_function("alloc_small_zeroed_1024", |b| {
        b.iter(|| {
            let arena = Arena::new(16 * 1024);
            for _ in 0..1024 {
                let block = arena.alloc::<u8>(16, AllocOptions::new()).unwrap();
                black_box(block);
            }
        });
    });
}

/// Benchmark: the same allocations without zero-fill.
fn bench_alloc_small_nozero(c: &mut Criterion) {
    let options = AllocOptions::new().skipping_zero_fill();
    c.bench_function("alloc_small_nozero_1024", |b| {
        b.iter(|| {
            let arena = Arena::new(16 * 1024);
            for _ in 0..1024 {
                let block = arena.alloc::<u8>(16, options).unwrap();
                black_box(block);
            }
        });
    });
}

/// Benchmark: a seeded mix of sizes and alignments through the raw entry point.
fn bench_alloc_mixed_seeded(c: &mut Criterion) {
    let requests = seeded_requests(42, 512, AllocOptions::new());
    let capacity = padded_upper_bound(&requests);
    c.bench_function("alloc_mixed_seeded_512", |b| {
        b.iter(|| {
            let arena = Arena::new(capacity);
            for req in &requests {
                black_box(arena.allocate(*req).or_abort());
            }
        });
    });
}

/// Benchmark: soft exhaustion on a full arena (the reject path).
fn bench_soft_exhaustion(c: &mut Criterion) {
    let arena = Arena::new(64);
    let _ = arena.alloc::<u8>(64, AllocOptions::new());
    let options = AllocOptions::new().allowing_failure();
    c.bench_function("alloc_soft_exhaustion", |b| {
        b.iter(|| {
            let outcome = arena.try_alloc::<u64>(black_box(1), options);
            black_box(matches!(outcome, AllocOutcome::Exhausted(_)));
        });
    });
}

criterion_group!(
    benches,
    bench_arena_create_1mib,
    bench_alloc_small_zeroed,
    bench_alloc_small_nozero,
    bench_alloc_mixed_seeded,
    bench_soft_exhaustion
);
criterion_main!(benches);
