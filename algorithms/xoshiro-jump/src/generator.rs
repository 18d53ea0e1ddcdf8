//! Jump Constant Generator
//!
//! Owns the transition matrix `T` and the inverted Krylov basis `K^{-1}`.
//! Both depend only on the fixed linear core, so they are built once per
//! generator and are read-only afterwards.

use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::One;
use tracing::{debug, error, info};

use crate::engine::krylov::krylov_inverse;
use crate::engine::power::{pow, pow_vec};
use crate::engine::transition::transition_matrix;
use crate::kernels::codec::{decode, BitVector};
use crate::kernels::constants::{
    JUMP_2P128, JUMP_EXPONENT, LONG_JUMP_2P192, LONG_JUMP_EXPONENT,
};
use crate::kernels::matrix::Matrix;
use crate::types::{JumpConstant, JumpError};

/// Published constants checked by [`JumpConstantGenerator::verify_reference`]:
/// `(exponent, constant)` for jumps of `2^exponent` steps.
pub const REFERENCE_JUMPS: [(u32, JumpConstant); 2] = [
    (JUMP_EXPONENT, JumpConstant(JUMP_2P128)),
    (LONG_JUMP_EXPONENT, JumpConstant(LONG_JUMP_2P192)),
];

// =============================================================================
// GENERATOR
// =============================================================================

/// Derives jump polynomials for arbitrary step counts.
#[derive(Clone, Debug)]
pub struct JumpConstantGenerator {
    transition: Matrix,
    krylov_inverse: Matrix,
}

impl JumpConstantGenerator {
    /// Build `T` and `K^{-1}`.
    ///
    /// # Errors
    /// [`JumpError::Singular`] if `e0` is not a cyclic vector of the
    /// transition. This never happens for the xoshiro256 core; it signals a
    /// broken step function or matrix routine.
    pub fn new() -> Result<Self, JumpError> {
        let transition = transition_matrix();
        debug!("transition matrix built");
        Self::with_transition(transition)
    }

    /// Build the generator around an arbitrary one-step transition.
    pub(crate) fn with_transition(transition: Matrix) -> Result<Self, JumpError> {
        let krylov_inverse = krylov_inverse(&transition).inspect_err(|e| {
            error!(error = %e, "krylov basis is singular");
        })?;

        Ok(Self {
            transition,
            krylov_inverse,
        })
    }

    /// Process-wide generator, built on first use.
    ///
    /// # Errors
    /// The construction error of [`JumpConstantGenerator::new`], on every call.
    pub fn shared() -> Result<&'static Self, JumpError> {
        static SHARED: OnceLock<Result<JumpConstantGenerator, JumpError>> = OnceLock::new();
        SHARED.get_or_init(Self::new).as_ref().map_err(Clone::clone)
    }

    /// The one-step transition matrix `T`.
    #[must_use]
    pub const fn transition(&self) -> &Matrix {
        &self.transition
    }

    /// The inverted Krylov basis `K^{-1}`.
    #[must_use]
    pub const fn krylov_inverse(&self) -> &Matrix {
        &self.krylov_inverse
    }

    /// Jump polynomial for exactly `steps` applications of the linear core.
    ///
    /// `steps == 0` yields [`JumpConstant::IDENTITY`].
    #[must_use]
    pub fn derive(&self, steps: &BigUint) -> JumpConstant {
        debug!(bits = steps.bits(), "deriving jump constant");

        let e0 = BitVector::basis(0);
        let target = pow_vec(&self.transition, steps, &e0);
        let coeffs = self.krylov_inverse.mul_vec(&target);
        JumpConstant(decode(&coeffs))
    }

    /// Jump polynomial for `2^exponent` steps.
    #[must_use]
    pub fn derive_pow2(&self, exponent: u32) -> JumpConstant {
        self.derive(&(BigUint::one() << exponent))
    }

    /// `T^steps` as a matrix; applies the jump directly to encoded states.
    #[must_use]
    pub fn jump_matrix(&self, steps: &BigUint) -> Matrix {
        pow(&self.transition, steps)
    }

    /// Re-derive the published `2^128` and `2^192` jumps and compare them
    /// word for word.
    ///
    /// # Errors
    /// [`JumpError::ReferenceMismatch`] for the first constant that differs.
    pub fn verify_reference(&self) -> Result<(), JumpError> {
        for (exponent, expected) in REFERENCE_JUMPS {
            let actual = self.derive_pow2(exponent);
            if actual != expected {
                error!(exponent, %expected, %actual, "reference jump mismatch");
                return Err(JumpError::ReferenceMismatch {
                    exponent,
                    expected,
                    actual,
                });
            }
            debug!(exponent, "reference jump matches");
        }
        info!("reference jump constants verified");
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
