//! Error types for matrix views and kernels.

use std::error::Error;
use std::fmt;

/// Errors from view construction and kernel invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GemmError {
    /// A view constructor was given a buffer whose length does not match
    /// `rows * cols`.
    ShapeMismatch {
        /// Length of the supplied buffer in elements.
        len: usize,
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// Kernel operands do not satisfy `A: M×K`, `B: K×N`, `C: M×N`.
    ///
    /// The kernel writes nothing when this is returned — the output is
    /// exactly as the caller left it.
    DimensionMismatch {
        /// Shape of A as `(rows, cols)`.
        lhs: (usize, usize),
        /// Shape of B as `(rows, cols)`.
        rhs: (usize, usize),
        /// Shape of C as `(rows, cols)`.
        out: (usize, usize),
    },
}

impl fmt::Display for GemmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { len, rows, cols } => {
                write!(
                    f,
                    "buffer of {len} elements cannot view a {rows}x{cols} matrix"
                )
            }
            Self::DimensionMismatch { lhs, rhs, out } => {
                write!(
                    f,
                    "incompatible gemm operands: A is {}x{}, B is {}x{}, C is {}x{}",
                    lhs.0, lhs.1, rhs.0, rhs.1, out.0, out.1
                )
            }
        }
    }
}

impl Error for GemmError {}
