//! Dense matrix views and GEMM kernels for Axon.
//!
//! Two interchangeable single-precision matrix-multiply implementations
//! over non-owning row-major views:
//!
//! - [`gemm_naive`] — the i/j/k triple loop, correctness reference.
//! - [`gemm_tiled`] — the same result restructured into cache-resident
//!   blocks for data reuse.
//!
//! Both kernels are pure with respect to their inputs, overwrite the
//! output completely on success, and leave it untouched on error. They
//! hold no shared state: invocations over disjoint buffers may run on
//! different threads with no coordination, but a single invocation never
//! splits work across cores itself.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod error;
pub mod gemm;
pub mod view;

// Public re-exports for the primary API surface.
pub use error::GemmError;
pub use gemm::{gemm_naive, gemm_tiled, DEFAULT_BLOCK_SIZE};
pub use view::{MatrixView, MatrixViewMut};
