//! Transition Matrix
//!
//! Builds `T`, the 256x256 GF(2) matrix of one linear-core step, by observing
//! the step on every standard basis vector.

use crate::kernels::codec::{decode, encode, BitVector};
use crate::kernels::constants::DIM;
use crate::kernels::matrix::Matrix;
use crate::kernels::step::step;

/// Build `T` such that `encode(step(s)) == T * encode(s)` for every state.
///
/// Column `i` is the image of `e_i` under one step.
#[must_use]
pub fn transition_matrix() -> Matrix {
    let mut columns = [BitVector::ZERO; DIM];
    for (i, column) in columns.iter_mut().enumerate() {
        let state = decode(&BitVector::basis(i));
        *column = encode(&step(&state));
    }
    Matrix::from_columns(&columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_step_on_dense_state() {
        let t = transition_matrix();
        let state = [
            0x9e37_79b9_7f4a_7c15,
            0xbf58_476d_1ce4_e5b9,
            0x94d0_49bb_1331_11eb,
            0x0123_4567_89ab_cdef,
        ];
        assert_eq!(t.mul_vec(&encode(&state)), encode(&step(&state)));
    }

    #[test]
    fn test_is_invertible() {
        // The step is a bijection, so its matrix must be too.
        assert!(transition_matrix().inverse().is_ok());
    }
}
