//! Jump Kernel Constants
//!
//! Dimensions of the state space, the shift/rotation amounts of the xoshiro256
//! linear core, and the published jump constants used as the correctness
//! oracle.
//!
//! The reference constants are the ones shipped with the xoshiro256 family by
//! Blackman & Vigna:
//!
//! ```text
//! JUMP      = 2^128 steps  (2^128 non-overlapping substreams)
//! LONG_JUMP = 2^192 steps  (2^64 starting points for JUMP)
//! ```

// =============================================================================
// DIMENSIONS
// =============================================================================

/// Number of 64-bit words in a xoshiro256 state.
pub const STATE_WORDS: usize = 4;

/// Bits per state word.
pub const WORD_BITS: usize = 64;

/// Dimension of the state space over GF(2).
pub const DIM: usize = STATE_WORDS * WORD_BITS;

// =============================================================================
// LINEAR CORE
// =============================================================================

/// Left shift applied to `s1` before it is folded into `s2`.
pub const SHIFT: u32 = 17;

/// Final left rotation of `s3`.
pub const ROTATION: u32 = 45;

// =============================================================================
// REFERENCE JUMPS
// =============================================================================

/// Exponent of the standard jump (`2^128` steps).
pub const JUMP_EXPONENT: u32 = 128;

/// Exponent of the long jump (`2^192` steps).
pub const LONG_JUMP_EXPONENT: u32 = 192;

/// Published jump polynomial for `2^128` steps.
pub const JUMP_2P128: [u64; STATE_WORDS] = [
    0x180e_c6d3_3cfd_0aba,
    0xd5a6_1266_f0c9_392c,
    0xa958_2618_e03f_c9aa,
    0x39ab_dc45_29b1_661c,
];

/// Published jump polynomial for `2^192` steps.
pub const LONG_JUMP_2P192: [u64; STATE_WORDS] = [
    0x76e1_5d3e_fefd_cbbf,
    0xc500_4e44_1c52_2fb3,
    0x7771_0069_854e_e241,
    0x3910_9bb0_2acb_e635,
];
