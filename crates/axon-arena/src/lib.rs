//! Fixed-capacity bump arena for Axon inference workloads.
//!
//! Provides a single-block linear allocator that turns allocation into
//! pointer arithmetic and bulk deallocation into one cursor write. This
//! is the only crate in the workspace permitted to contain `unsafe` code.
//!
//! # Architecture
//!
//! ```text
//! Arena (exclusive owner of one page-aligned block)
//! ├── base: NonNull<u8>      (reserved once, released once in Drop)
//! ├── cursor: Cell<usize>    (bump pointer, bytes consumed)
//! └── BufferDescriptor       (zero-copy export for host bindings)
//! ```
//!
//! # Ownership and threading
//!
//! The arena is move-only: there is no `Clone`, so the backing block is
//! released exactly once. Allocation takes `&self` (the cursor lives in a
//! `Cell`), so multiple live allocations can coexist; `reset` takes
//! `&mut self`, which statically ends every outstanding borrow handed out
//! by [`Arena::alloc_f32`]. The arena is `Send` but not `Sync` — concurrent
//! allocation from several threads requires external mutual exclusion,
//! supplied by the caller.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod arena;
pub mod descriptor;
pub mod error;

// Public re-exports for the primary API surface.
pub use arena::{Arena, DEFAULT_ALIGN, PAGE_SIZE};
pub use descriptor::BufferDescriptor;
pub use error::ArenaError;
