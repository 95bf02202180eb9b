//! The bump allocator: one page-aligned block, one monotonic cursor.

use std::alloc::{alloc, dealloc, Layout};
use std::cell::Cell;
use std::ptr::NonNull;

use crate::descriptor::BufferDescriptor;
use crate::error::ArenaError;

/// Granularity of the backing reservation, in bytes.
///
/// Requested capacities are rounded up to a multiple of this so the block
/// cooperates with operating-system paging.
pub const PAGE_SIZE: usize = 4096;

/// Default allocation alignment in bytes.
///
/// 64 bytes covers a cache line and AVX-512 vector loads.
pub const DEFAULT_ALIGN: usize = 64;

/// A fixed-capacity linear allocator over one contiguous block.
///
/// Sub-allocations are served by advancing a cursor; there is no
/// per-allocation free. [`Arena::reset`] reclaims everything at once in
/// O(1). Object lifetimes scoped to a unit of work (one inference pass)
/// map onto this directly: allocate through the pass, reset between
/// passes.
///
/// Allocation takes `&self`, so any number of allocations can be live at
/// the same time. `reset` takes `&mut self`, which ends every slice
/// borrow handed out by [`Arena::alloc_f32`] before the cursor rewinds.
///
/// The arena is move-only and releases its block exactly once on drop.
/// It is `Send` but not `Sync`: concurrent allocation from multiple
/// threads is a data race unless the caller wraps the arena in its own
/// mutual exclusion.
pub struct Arena {
    /// Start of the owned block. Page-aligned, valid for `capacity` bytes.
    base: NonNull<u8>,
    /// Total capacity in bytes. Multiple of [`PAGE_SIZE`], immutable.
    capacity: usize,
    /// Bytes consumed so far, including alignment padding.
    cursor: Cell<usize>,
}

// SAFETY: the arena exclusively owns its block; moving it to another
// thread moves the block with it. Interior mutability via `Cell` keeps
// the type !Sync, which is the intended contract.
unsafe impl Send for Arena {}

impl Arena {
    /// Reserve an arena of at least `requested_bytes` bytes.
    ///
    /// The capacity is rounded up to the next multiple of [`PAGE_SIZE`]
    /// (a zero-byte request still reserves one page) and the block is
    /// aligned to [`PAGE_SIZE`]. Returns
    /// [`ArenaError::AllocationFailed`] if the system cannot satisfy the
    /// reservation.
    pub fn new(requested_bytes: usize) -> Result<Self, ArenaError> {
        let pages = requested_bytes
            .checked_add(PAGE_SIZE - 1)
            .ok_or(ArenaError::AllocationFailed {
                requested: requested_bytes,
            })?
            / PAGE_SIZE;
        let capacity = pages.max(1) * PAGE_SIZE;

        let layout = Layout::from_size_align(capacity, PAGE_SIZE)
            .map_err(|_| ArenaError::AllocationFailed {
                requested: capacity,
            })?;

        // SAFETY: `layout` has non-zero size (capacity >= PAGE_SIZE).
        let raw = unsafe { alloc(layout) };
        let base = NonNull::new(raw).ok_or(ArenaError::AllocationFailed {
            requested: capacity,
        })?;

        Ok(Self {
            base,
            capacity,
            cursor: Cell::new(0),
        })
    }

    /// Carve `size` bytes out of the arena at the given alignment.
    ///
    /// The smallest forward padding is inserted so the returned address
    /// is a multiple of `align`. On success the cursor advances by
    /// `padding + size`; on [`ArenaError::CapacityExceeded`] the cursor
    /// is left exactly where it was.
    ///
    /// The returned region's contents are whatever was there before —
    /// stale bytes after a [`Arena::reset`], uninitialised memory on a
    /// fresh arena. Callers write before they read; skipping the zeroing
    /// is the point of the raw path. Use [`Arena::alloc_f32`] for a
    /// zero-filled, safely borrowed slice instead.
    ///
    /// # Panics
    ///
    /// Panics if `align` is not a power of two.
    pub fn alloc(&self, size: usize, align: usize) -> Result<NonNull<u8>, ArenaError> {
        assert!(
            align.is_power_of_two(),
            "alignment must be a power of two, got {align}"
        );

        let used = self.cursor.get();
        let addr = self.base.as_ptr() as usize + used;
        let misalign = addr & (align - 1);
        let padding = if misalign == 0 { 0 } else { align - misalign };

        // Full check before any mutation: a failing request must not move
        // the cursor.
        let needed = padding.checked_add(size);
        let fits = matches!(needed, Some(n) if n <= self.capacity - used);
        if !fits {
            return Err(ArenaError::CapacityExceeded {
                requested: size,
                align,
                used,
                capacity: self.capacity,
            });
        }

        let offset = used + padding;
        self.cursor.set(offset + size);

        // SAFETY: offset + size <= capacity, so the result is inside (or
        // one-past-the-end of) the owned block.
        Ok(unsafe { NonNull::new_unchecked(self.base.as_ptr().add(offset)) })
    }

    /// [`Arena::alloc`] at the [`DEFAULT_ALIGN`] of 64 bytes.
    pub fn alloc_default(&self, size: usize) -> Result<NonNull<u8>, ArenaError> {
        self.alloc(size, DEFAULT_ALIGN)
    }

    /// Allocate `len` f32 elements and return them as a zero-filled slice.
    ///
    /// The slice borrows from the arena: it stays valid until `reset` or
    /// drop, both of which require `&mut self` and therefore cannot
    /// happen while the slice is live. Unlike the raw path this writes
    /// zeroes over the region first — a `&mut [f32]` over stale bytes
    /// would let safe code read uninitialised memory.
    pub fn alloc_f32(&self, len: usize) -> Result<&mut [f32], ArenaError> {
        let bytes = len.saturating_mul(std::mem::size_of::<f32>());
        let ptr = self.alloc(bytes, DEFAULT_ALIGN)?.cast::<f32>();
        // SAFETY: the region is `len` f32s long, 64-byte aligned, and
        // disjoint from every other allocation (the cursor only moves
        // forward). The borrow is tied to `&self`, and rewinding the
        // cursor requires `&mut self`.
        unsafe {
            std::ptr::write_bytes(ptr.as_ptr(), 0, len);
            Ok(std::slice::from_raw_parts_mut(ptr.as_ptr(), len))
        }
    }

    /// Rewind the cursor to zero, reclaiming every allocation at once.
    ///
    /// O(1): the backing memory is NOT zeroed. A region handed out after
    /// a reset still holds whatever the previous pass wrote there; raw
    /// callers that read before writing observe stale content by design.
    pub fn reset(&mut self) {
        self.cursor.set(0);
    }

    /// Total capacity in bytes. Always a multiple of [`PAGE_SIZE`] and at
    /// least the requested size.
    pub fn size(&self) -> usize {
        self.capacity
    }

    /// Bytes consumed so far, alignment padding included.
    pub fn used(&self) -> usize {
        self.cursor.get()
    }

    /// Bytes still available (ignoring alignment padding a future request
    /// may need).
    pub fn remaining(&self) -> usize {
        self.capacity - self.cursor.get()
    }

    /// Export the whole backing block as a flat byte-range descriptor.
    ///
    /// Zero-copy: the descriptor points straight at the arena's memory so
    /// a host binding can construct its own typed view over it. See
    /// [`BufferDescriptor`] for the validity contract.
    pub fn descriptor(&self) -> BufferDescriptor {
        BufferDescriptor {
            ptr: self.base.as_ptr(),
            len: self.capacity,
            element_size: 1,
        }
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        // SAFETY: `base` came from `alloc` with this exact layout, and
        // the arena is move-only, so this runs exactly once per block.
        unsafe {
            dealloc(
                self.base.as_ptr(),
                Layout::from_size_align_unchecked(self.capacity, PAGE_SIZE),
            );
        }
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity)
            .field("used", &self.cursor.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn capacity_is_page_rounded_and_at_least_request() {
        let arena = Arena::new(100).unwrap();
        assert!(arena.size() >= 100);
        assert_eq!(arena.size() % PAGE_SIZE, 0);
        assert_eq!(arena.size(), PAGE_SIZE);
    }

    #[test]
    fn exact_page_multiple_is_not_rounded_further() {
        let arena = Arena::new(2 * PAGE_SIZE).unwrap();
        assert_eq!(arena.size(), 2 * PAGE_SIZE);
    }

    #[test]
    fn zero_request_reserves_one_page() {
        let arena = Arena::new(0).unwrap();
        assert_eq!(arena.size(), PAGE_SIZE);
    }

    #[test]
    fn fresh_arena_has_nothing_used() {
        let arena = Arena::new(1024).unwrap();
        assert_eq!(arena.used(), 0);
        assert_eq!(arena.remaining(), arena.size());
    }

    #[test]
    fn sequential_allocations_are_disjoint() {
        let arena = Arena::new(1024).unwrap();
        let p1 = arena.alloc(128, DEFAULT_ALIGN).unwrap();
        let p2 = arena.alloc(128, DEFAULT_ALIGN).unwrap();
        let a1 = p1.as_ptr() as usize;
        let a2 = p2.as_ptr() as usize;
        assert!(a1 + 128 <= a2);
        // Base is page-aligned, so no padding was needed anywhere.
        assert_eq!(arena.used(), 256);
    }

    #[test]
    fn used_accounts_for_alignment_padding() {
        let arena = Arena::new(PAGE_SIZE).unwrap();
        arena.alloc(1, 1).unwrap();
        let p = arena.alloc(128, 64).unwrap();
        assert_eq!(p.as_ptr() as usize % 64, 0);
        // 1 byte + 63 bytes padding + 128 bytes.
        assert_eq!(arena.used(), 192);
    }

    #[test]
    fn capacity_exceeded_leaves_cursor_unchanged() {
        let arena = Arena::new(PAGE_SIZE).unwrap();
        arena.alloc(4000, DEFAULT_ALIGN).unwrap();
        let before = arena.used();
        let err = arena.alloc(200, DEFAULT_ALIGN).unwrap_err();
        assert!(matches!(err, ArenaError::CapacityExceeded { .. }));
        assert_eq!(arena.used(), before);
    }

    #[test]
    fn exact_fit_succeeds() {
        let arena = Arena::new(PAGE_SIZE).unwrap();
        assert!(arena.alloc(PAGE_SIZE, DEFAULT_ALIGN).is_ok());
        assert_eq!(arena.remaining(), 0);
        assert!(arena.alloc(1, 1).is_err());
    }

    #[test]
    fn reset_rewinds_to_the_first_address() {
        let mut arena = Arena::new(PAGE_SIZE).unwrap();
        let first = arena.alloc(256, DEFAULT_ALIGN).unwrap();
        arena.alloc(256, DEFAULT_ALIGN).unwrap();
        arena.reset();
        assert_eq!(arena.used(), 0);
        let again = arena.alloc(256, DEFAULT_ALIGN).unwrap();
        assert_eq!(first.as_ptr(), again.as_ptr());
    }

    #[test]
    #[should_panic(expected = "power of two")]
    fn non_power_of_two_alignment_panics() {
        let arena = Arena::new(PAGE_SIZE).unwrap();
        let _ = arena.alloc(16, 48);
    }

    #[test]
    fn alloc_f32_is_zero_filled_and_writable() {
        let arena = Arena::new(PAGE_SIZE).unwrap();
        let a = arena.alloc_f32(16).unwrap();
        assert!(a.iter().all(|&v| v == 0.0));
        a[0] = 1.5;
        let b = arena.alloc_f32(16).unwrap();
        // Disjoint regions: writing b never touches a.
        b[0] = 2.5;
        assert_eq!(a[0], 1.5);
    }

    #[test]
    fn alloc_f32_oversized_request_is_an_error() {
        let arena = Arena::new(PAGE_SIZE).unwrap();
        assert!(arena.alloc_f32(PAGE_SIZE).is_err());
        assert_eq!(arena.used(), 0);
    }

    #[test]
    fn descriptor_covers_the_whole_block() {
        let arena = Arena::new(100).unwrap();
        let desc = arena.descriptor();
        assert_eq!(desc.len, arena.size());
        assert_eq!(desc.element_size, 1);
        assert!(!desc.ptr.is_null());
    }

    proptest! {
        #[test]
        fn every_address_satisfies_its_alignment(
            sizes in proptest::collection::vec(1usize..200, 1..20),
            align_exp in 0u32..10,
        ) {
            let align = 1usize << align_exp;
            let arena = Arena::new(64 * 1024).unwrap();
            for &size in &sizes {
                let ptr = arena.alloc(size, align).unwrap();
                prop_assert_eq!(ptr.as_ptr() as usize % align, 0);
            }
        }

        #[test]
        fn used_equals_sizes_plus_padding(
            sizes in proptest::collection::vec(1usize..200, 1..20),
        ) {
            let arena = Arena::new(64 * 1024).unwrap();
            let mut expected = 0usize;
            for &size in &sizes {
                let before = arena.used();
                arena.alloc(size, DEFAULT_ALIGN).unwrap();
                let padding = arena.used() - before - size;
                prop_assert!(padding < DEFAULT_ALIGN);
                expected += padding + size;
            }
            prop_assert_eq!(arena.used(), expected);
        }

        #[test]
        fn size_is_monotone_in_request(request in 0usize..1_000_000) {
            let arena = Arena::new(request).unwrap();
            prop_assert!(arena.size() >= request);
            prop_assert_eq!(arena.size() % PAGE_SIZE, 0);
        }
    }
}
