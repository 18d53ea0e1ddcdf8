//! Krylov Basis
//!
//! `K = [e0, T e0, T^2 e0, ..., T^255 e0]`. Because `e0` is a cyclic vector of
//! `T`, these columns span the whole state space and `K` is invertible.
//! `K^{-1}` rewrites any vector `T^N e0` as coefficients of a polynomial in
//! `T`, which is exactly the jump polynomial.

use tracing::debug;

use crate::kernels::codec::BitVector;
use crate::kernels::constants::DIM;
use crate::kernels::matrix::Matrix;
use crate::types::JumpError;

/// Build `K` with column `c` equal to `T^c * seed`.
#[must_use]
pub fn krylov_matrix(t: &Matrix, seed: &BitVector) -> Matrix {
    let mut columns = [BitVector::ZERO; DIM];
    let mut v = *seed;
    for column in &mut columns {
        *column = v;
        v = t.mul_vec(&v);
    }
    Matrix::from_columns(&columns)
}

/// Build and invert the Krylov matrix of `t` seeded at `e0`.
///
/// # Errors
/// [`JumpError::Singular`] if `e0` is not a cyclic vector of `t`.
pub fn krylov_inverse(t: &Matrix) -> Result<Matrix, JumpError> {
    let k = krylov_matrix(t, &BitVector::basis(0));
    let inverse = k.inverse()?;
    debug!("krylov basis inverted");
    Ok(inverse)
}
