//! Zero-copy export of the arena's backing block.

/// A flat, contiguous, mutable byte range over an arena's backing block.
///
/// Returned by value from [`Arena::descriptor`](crate::Arena::descriptor)
/// so a host binding (Python buffer protocol, C FFI, ...) can build its
/// own typed view over the arena without copying or re-allocating. The
/// shape matches the usual one-dimensional buffer convention: a pointer,
/// a length in elements, and the size of one element (one byte here).
///
/// # Validity
///
/// The pointer is borrowed from the arena, not owned: it is valid for
/// `len` bytes only while the arena it came from is alive, and writes
/// through it race with concurrent arena allocation the same way any
/// aliasing write would. The descriptor itself is plain data — copying
/// it never duplicates or frees memory.
#[derive(Clone, Copy, Debug)]
pub struct BufferDescriptor {
    /// Start of the block.
    pub ptr: *mut u8,
    /// Length of the block in elements (equals the arena capacity).
    pub len: usize,
    /// Size of one element in bytes. Always 1 for a byte range.
    pub element_size: usize,
}

impl BufferDescriptor {
    /// Total extent of the described buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.len * self.element_size
    }
}
