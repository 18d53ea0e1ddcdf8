//! Public API Layer
//!
//! Free functions over the process-wide [`JumpConstantGenerator`].

use num_bigint::BigUint;

use crate::generator::JumpConstantGenerator;
use crate::steps::parse_steps;
use crate::types::{JumpConstant, JumpError};

// =============================================================================
// DERIVATION
// =============================================================================

/// Jump constant for exactly `steps` steps.
///
/// # Errors
/// Only if the shared generator cannot be built (see
/// [`JumpConstantGenerator::new`]).
///
/// # Example
/// ```rust
/// use num_bigint::BigUint;
///
/// let identity = xoshiro_jump::jump_constant(&BigUint::from(0u32))?;
/// assert_eq!(identity, xoshiro_jump::JumpConstant::IDENTITY);
/// # Ok::<(), xoshiro_jump::JumpError>(())
/// ```
pub fn jump_constant(steps: &BigUint) -> Result<JumpConstant, JumpError> {
    Ok(JumpConstantGenerator::shared()?.derive(steps))
}

/// Jump constant for `2^exponent` steps.
///
/// # Errors
/// Only if the shared generator cannot be built.
///
/// # Example
/// ```rust
/// let jump = xoshiro_jump::jump_constant_pow2(128)?;
/// assert_eq!(jump, xoshiro_jump::JUMP);
/// # Ok::<(), xoshiro_jump::JumpError>(())
/// ```
pub fn jump_constant_pow2(exponent: u32) -> Result<JumpConstant, JumpError> {
    Ok(JumpConstantGenerator::shared()?.derive_pow2(exponent))
}

/// Parse a textual step count and derive its jump constant.
///
/// The input is validated before any matrix work starts.
///
/// # Errors
/// Parse errors from [`parse_steps`], or a generator construction failure.
pub fn jump_constant_str(steps: &str) -> Result<JumpConstant, JumpError> {
    let steps = parse_steps(steps)?;
    jump_constant(&steps)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Check the shared generator against the published `2^128` and `2^192` jumps.
///
/// # Errors
/// [`JumpError::ReferenceMismatch`] or a generator construction failure.
pub fn verify_reference() -> Result<(), JumpError> {
    JumpConstantGenerator::shared()?.verify_reference()
}
