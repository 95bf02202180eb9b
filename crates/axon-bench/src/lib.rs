//! Benchmark profiles and utilities for the Axon arena and GEMM kernels.
//!
//! Provides deterministic workload builders shared by the bench targets:
//!
//! - [`random_matrix`]: seeded random f32 buffers
//! - [`SQUARE_SIZES`] / [`BLOCK_SIZES`]: the standard sweep points

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Square matrix edge lengths benchmarked by `gemm_ops`.
///
/// 256 is the point where the naive kernel's working set falls well out
/// of L2 on common parts and tiling starts paying for itself.
pub const SQUARE_SIZES: [usize; 3] = [64, 128, 256];

/// Tile edges benchmarked by the block-size sweep.
pub const BLOCK_SIZES: [usize; 4] = [8, 16, 32, 64];

/// Build a deterministic random matrix buffer of `len` f32 elements.
///
/// Same seed, same buffer — runs are comparable across machines and
/// checkouts.
pub fn random_matrix(seed: u64, len: usize) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random::<f32>()).collect()
}
