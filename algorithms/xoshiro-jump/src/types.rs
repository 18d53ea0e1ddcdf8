//! Shared types used across the xoshiro-jump library.

use core::fmt;

use crate::kernels::constants::{
    JUMP_2P128, LONG_JUMP_2P192, STATE_WORDS, WORD_BITS,
};
use crate::kernels::step::step;

// =============================================================================
// STATE
// =============================================================================

/// xoshiro256 state `(s0, s1, s2, s3)`.
pub type State = [u64; STATE_WORDS];

// =============================================================================
// JUMP CONSTANT
// =============================================================================

/// Packed jump polynomial.
///
/// Bit `i` (word `i / 64`, bit `i % 64`) is the coefficient of `T^i`, where `T`
/// is one step of the linear core.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct JumpConstant(pub [u64; STATE_WORDS]);

/// Jump of `2^128` steps.
pub const JUMP: JumpConstant = JumpConstant(JUMP_2P128);

/// Jump of `2^192` steps.
pub const LONG_JUMP: JumpConstant = JumpConstant(LONG_JUMP_2P192);

impl JumpConstant {
    /// The identity jump (zero steps).
    pub const IDENTITY: Self = Self([1, 0, 0, 0]);

    /// Packed coefficient words.
    #[must_use]
    pub const fn words(&self) -> [u64; STATE_WORDS] {
        self.0
    }

    /// Advance `state` by the number of steps this constant encodes.
    ///
    /// Evaluates the polynomial at the step function: for each coefficient,
    /// in order, XOR the current state into the result if it is set, then
    /// step. Costs 256 steps regardless of the jump length.
    #[must_use]
    pub fn apply(&self, state: &State) -> State {
        let mut acc = [0u64; STATE_WORDS];
        let mut current = *state;

        for word in self.0 {
            for b in 0..WORD_BITS {
                if word & (1u64 << b) != 0 {
                    for (a, s) in acc.iter_mut().zip(current) {
                        *a ^= s;
                    }
                }
                current = step(&current);
            }
        }
        acc
    }
}

impl fmt::Display for JumpConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [w0, w1, w2, w3] = self.0;
        write!(f, "{{ {w0:#018x}, {w1:#018x}, {w2:#018x}, {w3:#018x} }}")
    }
}

impl fmt::Debug for JumpConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JumpConstant{self}")
    }
}

impl From<[u64; STATE_WORDS]> for JumpConstant {
    fn from(words: [u64; STATE_WORDS]) -> Self {
        Self(words)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised while building or verifying jump constants.
///
/// None of them are transient: the computation is deterministic, so retrying
/// with the same input reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JumpError {
    /// Gauss-Jordan elimination found no pivot.
    #[error("matrix is not invertible over GF(2): no pivot in column {column}")]
    Singular {
        /// First column without a pivot.
        column: usize,
    },

    /// A derived constant disagrees with a published one.
    #[error("jump constant for 2^{exponent} steps does not match the reference: expected {expected}, derived {actual}")]
    ReferenceMismatch {
        /// Log2 of the step count.
        exponent: u32,
        /// Published constant.
        expected: JumpConstant,
        /// Constant produced by this implementation.
        actual: JumpConstant,
    },

    /// Step counts must be non-negative.
    #[error("step count must be non-negative, got '{0}'")]
    NegativeSteps(String),

    /// Step count text could not be parsed.
    #[error("invalid step count '{0}'")]
    InvalidSteps(String),
}
