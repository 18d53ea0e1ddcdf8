//! Derivation Engine
//!
//! Transition matrix, Krylov basis, matrix powers and row-parallel execution.

pub mod krylov;
pub mod parallel;
pub mod power;
pub mod transition;
