//! Row-Parallel Execution
//!
//! Matrix products dominate the cost of a jump derivation: a jump of `2^k`
//! steps squares the transition matrix `k` times. Each output row of a product
//! depends only on one input row, so rows are filled independently
//! (parallel via Rayon if the `multithread` feature is enabled, otherwise
//! serial). Both paths produce identical matrices.

use crate::kernels::codec::BitVector;

/// Helper for feature-agnostic row processing.
pub trait RowProcessor {
    /// Overwrite every row `r` with `f(r)`.
    fn fill_rows<F>(&mut self, f: F)
    where
        F: Fn(usize) -> BitVector + Sync + Send;
}

impl RowProcessor for [BitVector] {
    fn fill_rows<F>(&mut self, f: F)
    where
        F: Fn(usize) -> BitVector + Sync + Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.par_iter_mut()
                .enumerate()
                .for_each(|(r, row)| *row = f(r));
        }
        #[cfg(not(feature = "multithread"))]
        {
            for (r, row) in self.iter_mut().enumerate() {
                *row = f(r);
            }
        }
    }
}
