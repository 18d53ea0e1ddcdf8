//! # xoshiro-jump
//!
//! Jump-polynomial constants for the xoshiro256 generator family, derived with
//! linear algebra over GF(2).
//!
//! A jump constant advances a xoshiro256 state by a fixed, astronomically large
//! number of steps (for example `2^128`) at the cost of 256 ordinary steps.
//! It is the standard way to hand non-overlapping substreams to parallel
//! workers.
//!
//! The derivation models one step of the generator's linear core as a
//! 256x256 matrix `T`, builds the Krylov basis `K = [e0, T e0, ..., T^255 e0]`,
//! inverts it and re-expresses `T^N e0` in that basis. The coordinates are the
//! coefficients of the jump polynomial.

//! # Usage
//! ```rust
//! use num_bigint::BigUint;
//! use xoshiro_jump::{JumpConstantGenerator, JUMP};
//!
//! // 1. Build (or borrow) a generator
//! let generator = JumpConstantGenerator::shared()?;
//!
//! // 2. Check it against the published constants
//! generator.verify_reference()?;
//!
//! // 3. Derive a jump of 2^128 steps
//! let jump = generator.derive(&(BigUint::from(1u32) << 128u32));
//! assert_eq!(jump, JUMP);
//!
//! // 4. Apply it to a state
//! let state = jump.apply(&[1, 2, 3, 4]);
//! assert_ne!(state, [1, 2, 3, 4]);
//! # Ok::<(), xoshiro_jump::JumpError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod engine;
mod generator;
// Public for test/bench use: codec, matrices and the linear core
pub mod kernels;
#[cfg(feature = "logging")]
pub mod logging;
mod oneshot;
mod steps;
mod substream;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use generator::{JumpConstantGenerator, REFERENCE_JUMPS};
pub use kernels::codec::{decode, encode, BitVector};
pub use kernels::matrix::Matrix;
pub use kernels::step::{advance, step};
pub use oneshot::{jump_constant, jump_constant_pow2, jump_constant_str, verify_reference};
pub use steps::{parse_steps, MAX_STEP_BITS};
pub use substream::{substream_state, Substreams};
pub use types::{JumpConstant, JumpError, State, JUMP, LONG_JUMP};

/// Build `T`, the GF(2) matrix of one linear-core step.
#[must_use]
pub fn transition_matrix() -> Matrix {
    engine::transition::transition_matrix()
}

/// Build `K`, the Krylov matrix of `t` seeded at `e0`.
#[must_use]
pub fn krylov_matrix(t: &Matrix) -> Matrix {
    engine::krylov::krylov_matrix(t, &BitVector::basis(0))
}
