//! Low-level primitives for arena memory operations.
//!
//! This module owns the backing block and is the only place in the crate
//! that dereferences raw pointers. Each `unsafe` block carries a mandatory
//! `// SAFETY:` comment. The block is acquired zeroed, so any byte that has
//! never been handed out is an initialised zero.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::{self, NonNull};

use bytemuck::Zeroable;

/// One zero-initialised heap block, released exactly once on drop.
pub(crate) struct RawBlock {
    ptr: NonNull<u8>,
    layout: Layout,
}

// SAFETY: `RawBlock` uniquely owns its allocation; nothing about the block is
// tied to the thread that acquired it. `Arena` keeps its cursor in a `Cell`,
// so the arena as a whole stays `!Sync`.
unsafe impl Send for RawBlock {}

impl RawBlock {
    /// Acquire a zeroed block for `layout`.
    ///
    /// A zero-sized layout acquires nothing and yields a dangling pointer
    /// aligned to `layout.align()`. If the global allocator cannot supply
    /// the block this diverges through [`alloc::handle_alloc_error`].
    pub(crate) fn acquire(layout: Layout) -> Self {
        if layout.size() == 0 {
            let dangling = ptr::without_provenance_mut::<u8>(layout.align());
            return Self {
                ptr: NonNull::new(dangling).unwrap_or(NonNull::dangling()),
                layout,
            };
        }
        // SAFETY: `layout` has a non-zero size (checked above).
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(raw).unwrap_or_else(|| alloc::handle_alloc_error(layout));
        Self { ptr, layout }
    }

    /// Address of the first byte of the block.
    pub(crate) fn addr(&self) -> usize {
        self.ptr.as_ptr().addr()
    }

    /// Size of the block in bytes.
    pub(crate) fn len(&self) -> usize {
        self.layout.size()
    }

    /// Alignment the block was acquired with.
    pub(crate) fn align(&self) -> usize {
        self.layout.align()
    }

    /// Pointer to the byte at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is past the end of the block.
    pub(crate) fn ptr_at(&self, offset: usize) -> NonNull<u8> {
        assert!(offset <= self.len(), "offset {offset} outside block");
        // SAFETY: `offset <= len`, so the result is within the allocation or
        // one past its end.
        unsafe { self.ptr.add(offset) }
    }

    /// Zero `len` bytes starting at `offset`.
    ///
    /// Only called on a range that has just been carved off by the bump
    /// cursor, so no reference into it exists yet.
    pub(crate) fn zero(&self, offset: usize, len: usize) {
        assert!(
            offset.checked_add(len).is_some_and(|end| end <= self.len()),
            "zero-fill range {offset}+{len} outside block",
        );
        // SAFETY: the range is in bounds (asserted above) and not yet
        // borrowed by any handed-out view.
        unsafe { self.ptr.as_ptr().add(offset).write_bytes(0, len) }
    }

    /// View `count` elements of `T` starting at byte `offset`.
    ///
    /// # Safety
    ///
    /// - `offset` must be aligned for `T` relative to the real address.
    /// - `[offset, offset + count * size_of::<T>())` must lie inside the
    ///   block and must never have been handed out before.
    /// - Every byte in the range must be zero, either because it was just
    ///   zero-filled or because it was never handed out.
    #[allow(clippy::mut_from_ref)]
    pub(crate) unsafe fn view_mut<T: Zeroable>(&self, offset: usize, count: usize) -> &mut [T] {
        let start = self.ptr_at(offset).cast::<T>();
        debug_assert!(start.is_aligned(), "misaligned view at offset {offset}");
        debug_assert!(offset + count * size_of::<T>() <= self.len());
        // SAFETY: guaranteed by the caller: aligned, in bounds, disjoint from
        // every other live view, and all-zero bytes are a valid `T`.
        unsafe { std::slice::from_raw_parts_mut(start.as_ptr(), count) }
    }
}

impl Drop for RawBlock {
    fn drop(&mut self) {
        if self.layout.size() != 0 {
            // SAFETY: `ptr` came from `alloc_zeroed` with this exact layout
            // and is released only here.
            unsafe { alloc::dealloc(self.ptr.as_ptr(), self.layout) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquired_block_is_zeroed() {
        let block = RawBlock::acquire(Layout::from_size_align(64, 16).unwrap());
        // SAFETY: fresh block, nothing handed out, u8 is Zeroable.
        let bytes: &mut [u8] = unsafe { block.view_mut(0, 64) };
        assert!(bytes.iter().all(|&b| b == 0));
    }

    #[test]
    fn block_respects_layout_alignment() {
        let block = RawBlock::acquire(Layout::from_size_align(8, 64).unwrap());
        assert_eq!(block.addr() % 64, 0);
        assert_eq!(block.align(), 64);
    }

    #[test]
    fn empty_block_is_aligned_and_sizeless() {
        let block = RawBlock::acquire(Layout::from_size_align(0, 32).unwrap());
        assert_eq!(block.len(), 0);
        assert_eq!(block.addr() % 32, 0);
    }

    #[test]
    fn zero_clears_written_bytes() {
        let block = RawBlock::acquire(Layout::from_size_align(16, 8).unwrap());
        {
            // SAFETY: fresh block, single view dropped before the next one.
            let bytes: &mut [u8] = unsafe { block.view_mut(0, 16) };
            bytes.fill(0xAB);
        }
        block.zero(4, 8);
        // SAFETY: previous view is gone.
        let bytes: &mut [u8] = unsafe { block.view_mut(0, 16) };
        assert_eq!(&bytes[..4], &[0xABu8; 4]);
        assert_eq!(&bytes[4..12], &[0u8; 8]);
        assert_eq!(&bytes[12..], &[0xABu8; 4]);
    }

    #[test]
    #[should_panic(expected = "outside block")]
    fn ptr_at_past_end_panics() {
        let block = RawBlock::acquire(Layout::from_size_align(4, 1).unwrap());
        block.ptr_at(5);
    }
}
