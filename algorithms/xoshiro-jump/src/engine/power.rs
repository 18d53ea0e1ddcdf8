//! Matrix Powers
//!
//! Square-and-multiply over GF(2). The exponent is an arbitrary-precision
//! integer and is consumed from the least significant bit up.

use num_bigint::BigUint;

use crate::kernels::codec::BitVector;
use crate::kernels::matrix::Matrix;

/// Compute `m^n * v`, keeping only a vector accumulator.
///
/// `n == 0` returns `v` without any multiplication. The running square is not
/// computed past the highest set bit of `n`.
#[must_use]
pub fn pow_vec(m: &Matrix, n: &BigUint, v: &BitVector) -> BitVector {
    let bits = n.bits();
    let mut acc = *v;
    let mut square = m.clone();

    for i in 0..bits {
        if n.bit(i) {
            acc = square.mul_vec(&acc);
        }
        if i + 1 < bits {
            square = square.mul(&square);
        }
    }
    acc
}

/// Compute `m^n` as a matrix.
#[must_use]
pub fn pow(m: &Matrix, n: &BigUint) -> Matrix {
    let bits = n.bits();
    let mut acc = Matrix::identity();
    let mut square = m.clone();

    for i in 0..bits {
        if n.bit(i) {
            acc = square.mul(&acc);
        }
        if i + 1 < bits {
            square = square.mul(&square);
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::transition::transition_matrix;
    use crate::kernels::codec::{decode, encode};
    use crate::kernels::step::advance;
    use num_traits::Zero;

    #[test]
    fn test_zero_exponent_is_identity() {
        let t = transition_matrix();
        let v = BitVector::from_words([5, 6, 7, 8]);
        assert_eq!(pow_vec(&t, &BigUint::zero(), &v), v);
        assert_eq!(pow(&t, &BigUint::zero()), Matrix::identity());
    }

    #[test]
    fn test_pow_vec_matches_brute_force() {
        let t = transition_matrix();
        let state = [1, 2, 3, 4];
        for n in [1u64, 2, 3, 17, 255, 256, 1000, 4097] {
            let v = pow_vec(&t, &BigUint::from(n), &encode(&state));
            assert_eq!(decode(&v), advance(&state, n), "n = {n}");
        }
    }

    #[test]
    fn test_pow_matches_pow_vec() {
        let t = transition_matrix();
        let n = BigUint::from(0b1011_0110_1u64);
        let v = BitVector::basis(0);
        assert_eq!(pow(&t, &n).mul_vec(&v), pow_vec(&t, &n, &v));
    }
}
