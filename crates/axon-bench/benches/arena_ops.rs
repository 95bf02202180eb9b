//! Criterion micro-benchmarks for arena construction, allocation, and reset.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use axon_arena::{Arena, DEFAULT_ALIGN};

/// One 1MB arena, the size class a small inference pass works in.
fn make_arena_1mb() -> Arena {
    Arena::new(1 << 20).expect("1MB reservation")
}

/// Benchmark: reserve and release a 1MB arena.
fn bench_arena_new_1mb(c: &mut Criterion) {
    c.bench_function("arena_new_1mb", |b| {
        b.iter(|| {
            let arena = make_arena_1mb();
            black_box(arena.size());
        });
    });
}

/// Benchmark: fill a 1MB arena with 256-byte allocations, then reset.
///
/// This is the hot path the arena exists for: the whole cycle is cursor
/// arithmetic, no system calls.
fn bench_arena_fill_and_reset(c: &mut Criterion) {
    let mut arena = make_arena_1mb();
    c.bench_function("arena_fill_and_reset", |b| {
        b.iter(|| {
            while let Ok(ptr) = arena.alloc(256, DEFAULT_ALIGN) {
                black_box(ptr);
            }
            arena.reset();
        });
    });
}

/// Benchmark: worst-case alignment padding (1-byte allocs at 64-byte
/// alignment burn 64 bytes of cursor each).
fn bench_arena_padded_alloc(c: &mut Criterion) {
    let mut arena = make_arena_1mb();
    c.bench_function("arena_padded_alloc", |b| {
        b.iter(|| {
            for _ in 0..1024 {
                black_box(arena.alloc(1, DEFAULT_ALIGN).unwrap());
            }
            arena.reset();
        });
    });
}

/// Benchmark: typed zero-filled slice allocation (the safe path pays
/// for its zeroing here).
fn bench_arena_alloc_f32_4k(c: &mut Criterion) {
    let mut arena = make_arena_1mb();
    c.bench_function("arena_alloc_f32_4k", |b| {
        b.iter(|| {
            let slab = arena.alloc_f32(4096).unwrap();
            black_box(slab[0]);
            arena.reset();
        });
    });
}

criterion_group!(
    benches,
    bench_arena_new_1mb,
    bench_arena_fill_and_reset,
    bench_arena_padded_alloc,
    bench_arena_alloc_f32_4k
);
criterion_main!(benches);
