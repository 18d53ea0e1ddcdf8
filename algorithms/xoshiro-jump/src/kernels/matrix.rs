//! GF(2) matrices of dimension 256x256.
//!
//! Stored row-major, one packed [`BitVector`] per row, so that row operations
//! during elimination are four word XORs.

use core::fmt;

use crate::engine::parallel::RowProcessor;
use crate::kernels::codec::BitVector;
use crate::kernels::constants::DIM;
use crate::types::JumpError;

// =============================================================================
// MATRIX
// =============================================================================

/// Square matrix over GF(2) acting on [`BitVector`]s.
#[derive(Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: [BitVector; DIM],
}

impl Matrix {
    /// The zero matrix.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            rows: [BitVector::ZERO; DIM],
        }
    }

    /// The identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        let mut m = Self::zero();
        for (i, row) in m.rows.iter_mut().enumerate() {
            *row = BitVector::basis(i);
        }
        m
    }

    /// Build a matrix from its columns.
    #[must_use]
    pub fn from_columns(columns: &[BitVector; DIM]) -> Self {
        let mut m = Self::zero();
        for (c, column) in columns.iter().enumerate() {
            m.set_column(c, column);
        }
        m
    }

    /// Read entry `(row, col)`.
    #[must_use]
    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row].bit(col)
    }

    /// Write entry `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        self.rows[row].set(col, value);
    }

    /// Row `r` as a packed vector.
    #[must_use]
    pub const fn row(&self, r: usize) -> &BitVector {
        &self.rows[r]
    }

    /// Column `c` gathered into a packed vector.
    #[must_use]
    pub fn column(&self, c: usize) -> BitVector {
        let mut v = BitVector::ZERO;
        for (r, row) in self.rows.iter().enumerate() {
            v.set(r, row.bit(c));
        }
        v
    }

    /// Overwrite column `c`.
    pub fn set_column(&mut self, c: usize, column: &BitVector) {
        for (r, row) in self.rows.iter_mut().enumerate() {
            row.set(c, column.bit(r));
        }
    }

    /// Matrix-vector product `self * v`.
    #[must_use]
    pub fn mul_vec(&self, v: &BitVector) -> BitVector {
        let mut out = BitVector::ZERO;
        for (r, row) in self.rows.iter().enumerate() {
            out.set(r, row.dot(v));
        }
        out
    }

    /// Matrix product `self * rhs`.
    ///
    /// Row `r` of the result is the XOR of the rows of `rhs` selected by the
    /// set bits of row `r` of `self`. Rows are independent and are computed in
    /// parallel when the `multithread` feature is enabled.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut out = Self::zero();
        out.rows.fill_rows(|r| {
            self.rows[r]
                .iter_ones()
                .fold(BitVector::ZERO, |acc, k| acc ^ rhs.rows[k])
        });
        out
    }

    /// Inverse by Gauss-Jordan elimination over GF(2).
    ///
    /// The pivot for column `c` is the lowest row at or below `c` with a 1 in
    /// that column. Over GF(2) a single XOR of the pivot row clears the column
    /// in every other row, so there is no separate back-substitution pass.
    ///
    /// # Errors
    /// [`JumpError::Singular`] with the first column that has no pivot.
    pub fn inverse(&self) -> Result<Self, JumpError> {
        let mut left = self.rows;
        let mut right = Self::identity().rows;

        for col in 0..DIM {
            let pivot = (col..DIM)
                .find(|&r| left[r].bit(col))
                .ok_or(JumpError::Singular { column: col })?;

            if pivot != col {
                left.swap(pivot, col);
                right.swap(pivot, col);
            }

            let (pivot_left, pivot_right) = (left[col], right[col]);
            for row in 0..DIM {
                if row != col && left[row].bit(col) {
                    left[row] ^= pivot_left;
                    right[row] ^= pivot_right;
                }
            }
        }

        Ok(Self { rows: right })
    }

    /// Transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut t = Self::zero();
        for (r, row) in self.rows.iter().enumerate() {
            for c in row.iter_ones() {
                t.rows[c].set(r, true);
            }
        }
        t
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ones: u32 = self.rows.iter().map(BitVector::count_ones).sum();
        write!(f, "Matrix({DIM}x{DIM}, {ones} ones)")
    }
}

// =============================================================================
// TESTS
// =============================================================================
