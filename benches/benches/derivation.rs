//! Jump Derivation Benchmark
//!
//! Cost of the one-time setup (`T`, `K^{-1}`) and of deriving jumps of
//! increasing length. Derivation is dominated by `log2(N)` matrix squarings.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigUint;
use std::hint::black_box;
use xoshiro_jump::{JumpConstantGenerator, JUMP};

// =============================================================================
// BENCHMARK 1: SETUP
// =============================================================================

/// Transition matrix + Krylov basis + inversion.
fn bench_setup(c: &mut Criterion) {
    c.bench_function("1-Setup/generator", |b| {
        b.iter(|| black_box(JumpConstantGenerator::new().unwrap()));
    });
}

// =============================================================================
// BENCHMARK 2: DERIVATION
// =============================================================================

/// Jumps of 2^k steps for growing k.
fn bench_derive(c: &mut Criterion) {
    let generator = JumpConstantGenerator::new().unwrap();
    let mut group = c.benchmark_group("2-Derive");

    for exponent in [16u32, 64, 128, 160, 192] {
        let steps = BigUint::from(1u32) << exponent;
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("2^{exponent}")),
            &steps,
            |b, steps| b.iter(|| generator.derive(black_box(steps))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: APPLICATION
// =============================================================================

/// Applying a constant: 256 steps of the linear core plus conditional XORs.
fn bench_apply(c: &mut Criterion) {
    let state: [u64; 4] = rand::random();
    c.bench_function("3-Apply/jump", |b| {
        b.iter(|| JUMP.apply(black_box(&state)));
    });
}

criterion_group!(benches, bench_setup, bench_derive, bench_apply);
criterion_main!(benches);
