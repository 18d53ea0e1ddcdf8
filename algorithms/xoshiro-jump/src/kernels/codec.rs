//! Bit-vector codec.
//!
//! Maps a xoshiro256 state to a vector over GF(2)^256 and back. This is the
//! only place the bit order is fixed:
//!
//! ```text
//! bit i  <->  word i / 64, bit position i % 64 (least significant bit first)
//! ```
//!
//! The published jump constants use the same order, so the packed words of a
//! coefficient vector can be emitted as-is.

use core::fmt;
use core::ops::{BitXor, BitXorAssign};

use crate::kernels::constants::{DIM, STATE_WORDS, WORD_BITS};
use crate::types::State;

// =============================================================================
// BIT VECTOR
// =============================================================================

/// Element of GF(2)^256, packed into four 64-bit words.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitVector([u64; STATE_WORDS]);

impl BitVector {
    /// The zero vector.
    pub const ZERO: Self = Self([0; STATE_WORDS]);

    /// Standard basis vector `e_i` (a single 1 at global bit `i`).
    ///
    /// # Panics
    /// Panics if `i >= 256`.
    #[must_use]
    pub const fn basis(i: usize) -> Self {
        let mut words = [0; STATE_WORDS];
        words[i / WORD_BITS] = 1 << (i % WORD_BITS);
        Self(words)
    }

    /// Build from packed words (same layout as [`decode`] produces).
    #[must_use]
    pub const fn from_words(words: [u64; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// Packed words.
    #[must_use]
    pub const fn words(&self) -> [u64; STATE_WORDS] {
        self.0
    }

    /// Read bit `i`.
    #[must_use]
    #[inline]
    pub const fn bit(&self, i: usize) -> bool {
        (self.0[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1
    }

    /// Write bit `i`.
    #[inline]
    pub fn set(&mut self, i: usize, value: bool) {
        let mask = 1u64 << (i % WORD_BITS);
        if value {
            self.0[i / WORD_BITS] |= mask;
        } else {
            self.0[i / WORD_BITS] &= !mask;
        }
    }

    /// Inner product over GF(2): parity of `self AND other`.
    #[must_use]
    #[inline]
    pub fn dot(&self, other: &Self) -> bool {
        let ones: u32 = self
            .0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a & b).count_ones())
            .sum();
        ones & 1 == 1
    }

    /// True if every bit is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> u32 {
        self.0.iter().map(|w| w.count_ones()).sum()
    }

    /// Indices of the set bits, in increasing order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().enumerate().flat_map(|(w, &word)| {
            let mut bits = word;
            core::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let b = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(w * WORD_BITS + b)
            })
        })
    }

    /// Unpacked view: element `i` is bit `i`.
    #[must_use]
    pub fn to_bits(&self) -> [bool; DIM] {
        let mut bits = [false; DIM];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = self.bit(i);
        }
        bits
    }

    /// Pack an unpacked view (inverse of [`BitVector::to_bits`]).
    #[must_use]
    pub fn from_bits(bits: &[bool; DIM]) -> Self {
        let mut v = Self::ZERO;
        for (i, &bit) in bits.iter().enumerate() {
            v.set(i, bit);
        }
        v
    }
}

impl BitXor for BitVector {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self {
        self ^= rhs;
        self
    }
}

impl BitXorAssign for BitVector {
    fn bitxor_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a ^= b;
        }
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BitVector([{:#018x}, {:#018x}, {:#018x}, {:#018x}])",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

// =============================================================================
// CODEC
// =============================================================================

/// Encode a state as a GF(2) vector.
#[must_use]
#[inline]
pub const fn encode(state: &State) -> BitVector {
    BitVector(*state)
}

/// Decode a GF(2) vector into four words (inverse of [`encode`]).
///
/// Also used to pack jump coefficients into the constant format.
#[must_use]
#[inline]
pub const fn decode(v: &BitVector) -> [u64; STATE_WORDS] {
    v.0
}

// =============================================================================
// TESTS
// =============================================================================
