//! Kernels
//!
//! Building blocks of the derivation: the linear core, the bit-vector codec
//! and GF(2) matrices.

pub mod codec;
pub mod constants;
pub mod matrix;
pub mod step;
