//! xoshiro256 linear core.
//!
//! The state transition of xoshiro256 without its output scrambler. Only this
//! part is linear over GF(2), which is what lets a step be written as a matrix.

use crate::kernels::constants::{ROTATION, SHIFT};
use crate::types::State;

// =============================================================================
// STEP
// =============================================================================

/// Apply one step of the linear core.
///
/// Identical to the update performed by `xoshiro256**` and `xoshiro256++`
/// after their output has been computed.
#[must_use]
#[inline]
pub const fn step(state: &State) -> State {
    let [mut s0, mut s1, mut s2, mut s3] = *state;

    let t = s1 << SHIFT;

    s2 ^= s0;
    s3 ^= s1;
    s1 ^= s2;
    s0 ^= s3;

    s2 ^= t;
    s3 = s3.rotate_left(ROTATION);

    [s0, s1, s2, s3]
}

/// Apply `steps` sequential steps.
///
/// Brute-force reference for jump constants; linear in `steps`.
#[must_use]
pub fn advance(state: &State, steps: u64) -> State {
    let mut current = *state;
    for _ in 0..steps {
        current = step(&current);
    }
    current
}

// =============================================================================
// TESTS
// =============================================================================
