//! Single-precision GEMM: naive reference and cache-blocked kernels.
//!
//! Both compute `C = A * B` for row-major views. The naive kernel is the
//! correctness reference; the tiled kernel restructures the same loop
//! nest into blocks small enough to stay resident in L1/L2 cache, so
//! each loaded sub-matrix is reused across the block instead of being
//! re-fetched from memory on every iteration.

use crate::error::GemmError;
use crate::view::{MatrixView, MatrixViewMut};

/// Default tile edge for [`gemm_tiled`], in elements.
///
/// 32x32 f32 tiles (4KB per operand) leave all three active tiles
/// comfortably inside a typical 32KB L1 data cache.
pub const DEFAULT_BLOCK_SIZE: usize = 32;

/// Validate the `A: M×K`, `B: K×N`, `C: M×N` contract.
///
/// Silently skipping the multiply on mismatch would mask caller bugs,
/// so mismatches surface as an explicit error. On `Err` the output
/// holds exactly what the caller put there.
fn check_dims(
    a: &MatrixView<'_>,
    b: &MatrixView<'_>,
    c: &MatrixViewMut<'_>,
) -> Result<(), GemmError> {
    if a.cols() != b.rows() || c.rows() != a.rows() || c.cols() != b.cols() {
        return Err(GemmError::DimensionMismatch {
            lhs: (a.rows(), a.cols()),
            rhs: (b.rows(), b.cols()),
            out: (c.rows(), c.cols()),
        });
    }
    Ok(())
}

/// Naive triple-loop matrix multiply: `C = A * B`.
///
/// O(M*N*K) with no locality optimisation — for large matrices each
/// element of A and B may be re-fetched from beyond-cache memory on
/// every iteration. C is overwritten entirely on success (it need not be
/// pre-zeroed) and untouched on error. A and B are never mutated.
pub fn gemm_naive(
    a: &MatrixView<'_>,
    b: &MatrixView<'_>,
    c: &mut MatrixViewMut<'_>,
) -> Result<(), GemmError> {
    check_dims(a, b, c)?;

    let m = a.rows();
    let n = b.cols();
    let k_dim = a.cols();

    for i in 0..m {
        let a_row = a.row(i);
        for j in 0..n {
            let mut sum = 0.0f32;
            for k in 0..k_dim {
                sum += a_row[k] * b.at(k, j);
            }
            *c.at_mut(i, j) = sum;
        }
    }
    Ok(())
}

/// Cache-blocked matrix multiply: `C = A * B`, tiled by `block_size`.
///
/// Partitions the i/j/k iteration space into `block_size`-strided 3D
/// blocks, clamping each block's upper bound to the matrix edge so
/// dimensions that are not multiples of the block size need no special
/// casing. k-blocks act as successive accumulation passes over the same
/// output cell: C is zeroed up front, and each pass adds its partial
/// inner product to the value already stored there.
///
/// The result equals [`gemm_naive`] up to floating-point associativity
/// (summation order differs across k-block boundaries). With
/// `block_size >= max(M, N, K)` the loop degenerates to a single block
/// and the two kernels agree bit for bit. Same overwrite/no-touch
/// contract as the naive kernel.
///
/// # Panics
///
/// Panics if `block_size` is zero.
pub fn gemm_tiled(
    a: &MatrixView<'_>,
    b: &MatrixView<'_>,
    c: &mut MatrixViewMut<'_>,
    block_size: usize,
) -> Result<(), GemmError> {
    assert!(block_size > 0, "block_size must be non-zero");
    check_dims(a, b, c)?;

    let m = a.rows();
    let n = b.cols();
    let k_dim = a.cols();
    let bs = block_size;

    c.fill(0.0);

    for ii in (0..m).step_by(bs) {
        let i_max = (ii + bs).min(m);
        for jj in (0..n).step_by(bs) {
            let j_max = (jj + bs).min(n);
            for kk in (0..k_dim).step_by(bs) {
                let k_max = (kk + bs).min(k_dim);

                // All three active tiles fit in cache; this nest reuses
                // them before moving on.
                for i in ii..i_max {
                    let a_row = a.row(i);
                    for j in jj..j_max {
                        let mut sum = c.at(i, j);
                        for k in kk..k_max {
                            sum += a_row[k] * b.at(k, j);
                        }
                        *c.at_mut(i, j) = sum;
                    }
                }
            }
        }
    }
    Ok(())
}
