//! GF(2) Matrix Benchmark
//!
//! Measures the primitives behind a derivation. Compare runs with and without
//! `--no-default-features` to see the effect of row-parallel products.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use xoshiro_jump::{encode, krylov_matrix, transition_matrix};

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF(2) Matrix");

    let t = transition_matrix();
    let k = krylov_matrix(&t);
    let v = encode(&[u64::MAX; 4]);

    // 1. Matrix-vector product (one per set bit of N, plus K^-1 at the end)
    group.bench_function("mul_vec", |b| {
        b.iter(|| black_box(&t).mul_vec(black_box(&v)));
    });

    // 2. Squaring (one per bit of N)
    group.bench_function("square", |b| {
        b.iter(|| black_box(&t).mul(black_box(&t)));
    });

    // 3. Gauss-Jordan inversion of the Krylov basis
    group.bench_function("inverse", |b| {
        b.iter(|| black_box(&k).inverse().unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_matrix);
criterion_main!(benches);
