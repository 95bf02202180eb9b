//! Axon: a bump arena and dense GEMM kernels for embedded inference
//! pipelines.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Axon sub-crates. For most users, adding `axon` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use axon::prelude::*;
//!
//! // One reservation up front; sub-allocations are pointer arithmetic.
//! let arena = Arena::new(1 << 20).unwrap();
//!
//! let a_buf = arena.alloc_f32(2 * 3).unwrap();
//! a_buf.fill(1.0);
//! let b_buf = arena.alloc_f32(3 * 2).unwrap();
//! b_buf.fill(1.0);
//! let c_buf = arena.alloc_f32(2 * 2).unwrap();
//!
//! let a = MatrixView::new(a_buf, 2, 3).unwrap();
//! let b = MatrixView::new(b_buf, 3, 2).unwrap();
//! let mut c = MatrixViewMut::new(c_buf, 2, 2).unwrap();
//!
//! gemm_tiled(&a, &b, &mut c, DEFAULT_BLOCK_SIZE).unwrap();
//! assert_eq!(c.as_slice(), &[3.0, 3.0, 3.0, 3.0]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `axon-arena` | `Arena`, `BufferDescriptor`, `ArenaError` |
//! | [`ops`] | `axon-ops` | Matrix views, `gemm_naive`, `gemm_tiled` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Arena storage: bump allocation, reset, zero-copy export.
pub mod arena {
    pub use axon_arena::{Arena, ArenaError, BufferDescriptor, DEFAULT_ALIGN, PAGE_SIZE};
}

/// Matrix views and GEMM kernels.
pub mod ops {
    pub use axon_ops::{
        gemm_naive, gemm_tiled, GemmError, MatrixView, MatrixViewMut, DEFAULT_BLOCK_SIZE,
    };
}

/// Everything most callers need, in one import.
pub mod prelude {
    pub use crate::arena::{Arena, ArenaError, BufferDescriptor};
    pub use crate::ops::{
        gemm_naive, gemm_tiled, GemmError, MatrixView, MatrixViewMut, DEFAULT_BLOCK_SIZE,
    };
}

pub use arena::{Arena, ArenaError, BufferDescriptor};
pub use ops::{gemm_naive, gemm_tiled, GemmError, MatrixView, MatrixViewMut};
