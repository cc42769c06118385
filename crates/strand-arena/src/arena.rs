//! The bump-pointer arena.
//!
//! An [`Arena`] is one contiguous block plus a cursor that only moves
//! forward. Each allocation pays alignment padding, then advances the cursor
//! by `count * size`. Nothing is freed individually; the block is released
//! when the arena is destroyed or dropped.

use std::cell::Cell;
use std::fmt;
use std::ptr::NonNull;

use bytemuck::Zeroable;

use crate::align;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::outcome::{AllocOutcome, Exhaustion};
use crate::raw::RawBlock;
use crate::request::{AllocOptions, AllocRequest};

/// A fixed-capacity bump allocator.
///
/// Allocation takes `&self`, so any number of blocks can be live at once;
/// each one borrows the arena, which makes using a block after
/// [`destroy`](Arena::destroy) a compile error. The cursor is a `Cell`, so
/// the arena is `Send` but not `Sync`: give each thread its own arena.
///
/// Allocations are strictly ordered. Block N starts at or after the end of
/// block N-1 plus its padding, so the layout is fully determined by the
/// sequence of requests.
pub struct Arena {
    block: RawBlock,
    /// Bytes consumed from the start of the block, padding included.
    cursor: Cell<usize>,
}

impl Arena {
    /// Create an arena of `capacity` bytes with the default block alignment.
    ///
    /// Aborts through the global allocator's error handler if the system
    /// cannot supply the block.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds `isize::MAX` once rounded to the block
    /// alignment.
    pub fn new(capacity: usize) -> Self {
        match Self::with_config(&ArenaConfig::new(capacity)) {
            Ok(arena) => arena,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create an arena from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidConfig`] if the configuration cannot
    /// describe a block. Failure of the system allocator itself is not an
    /// error; it aborts.
    pub fn with_config(config: &ArenaConfig) -> Result<Self, ArenaError> {
        let layout = config.layout()?;
        let block = RawBlock::acquire(layout);
        log::debug!(
            "arena created: {} bytes at {:#x} (align {})",
            block.len(),
            block.addr(),
            block.align()
        );
        Ok(Self {
            block,
            cursor: Cell::new(0),
        })
    }

    /// Release the backing block.
    ///
    /// Equivalent to dropping the arena; spelled out for call sites that
    /// want the end of the arena's lifetime to be visible.
    pub fn destroy(self) {
        drop(self);
    }

    /// Service a raw request, returning the block's start address.
    ///
    /// This is the primitive every other entry point is built on. The
    /// returned pointer is valid for `request.byte_len()` bytes for as long
    /// as the arena is alive.
    pub fn allocate(&self, request: AllocRequest) -> AllocOutcome<NonNull<u8>> {
        match self.bump(&request) {
            Ok(offset) => AllocOutcome::Block(self.block.ptr_at(offset)),
            Err(e) => AllocOutcome::Exhausted(e),
        }
    }

    /// Allocate `count` values of `T`, reporting exhaustion explicitly.
    ///
    /// Unless `options.skip_zero_fill` is set, every returned byte is zero.
    /// With it set the bytes are left untouched; since no region is handed
    /// out twice and the block starts zeroed, they still read as zero.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    #[allow(unsafe_code, clippy::mut_from_ref)]
    pub fn try_alloc<T: Zeroable>(
        &self,
        count: usize,
        options: AllocOptions,
    ) -> AllocOutcome<&mut [T]> {
        let request = AllocRequest::of::<T>(count, options);
        match self.bump(&request) {
            // SAFETY: `bump` returns an offset aligned for `T` whose
            // `count * size_of::<T>()` bytes lie inside the block and were
            // never handed out before (the cursor only moves forward and is
            // never reset). Those bytes are zero: either just filled, or
            // untouched since `alloc_zeroed`. The view borrows `self`, so it
            // cannot outlive the block.
            Ok(offset) => AllocOutcome::Block(unsafe { self.block.view_mut::<T>(offset, count) }),
            Err(e) => AllocOutcome::Exhausted(e),
        }
    }

    /// Allocate `count` values of `T` and apply the exhaustion policy.
    ///
    /// Returns `None` only if `options.allow_failure` is set and the arena is
    /// exhausted. Exhaustion without `allow_failure` aborts the process.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc<T: Zeroable>(&self, count: usize, options: AllocOptions) -> Option<&mut [T]> {
        self.try_alloc(count, options).resolve()
    }

    /// Allocate a single zeroed `T`, aborting on exhaustion.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_one<T: Zeroable>(&self) -> &mut T {
        let slice = self.try_alloc::<T>(1, AllocOptions::new()).or_abort();
        &mut slice[0]
    }

    /// Allocate `len` bytes at a caller-chosen alignment.
    ///
    /// Useful for over-aligned buffers (cache lines, SIMD lanes) that the
    /// element type alone would not request.
    ///
    /// # Panics
    ///
    /// Panics if `align` is not a power of two.
    #[allow(clippy::mut_from_ref)]
    pub fn alloc_bytes(&self, len: usize, align: usize, options: AllocOptions) -> Option<&mut [u8]> {
        self.try_alloc_bytes(len, align, options).resolve()
    }

    /// [`alloc_bytes`](Self::alloc_bytes) with the outcome left explicit.
    #[allow(unsafe_code, clippy::mut_from_ref)]
    pub fn try_alloc_bytes(
        &self,
        len: usize,
        align: usize,
        options: AllocOptions,
    ) -> AllocOutcome<&mut [u8]> {
        let request = AllocRequest::new(1, align, len, options);
        match self.bump(&request) {
            // SAFETY: same argument as `try_alloc`; `u8` has alignment 1.
            Ok(offset) => AllocOutcome::Block(unsafe { self.block.view_mut::<u8>(offset, len) }),
            Err(e) => AllocOutcome::Exhausted(e),
        }
    }

    /// Total size of the backing block in bytes.
    pub fn capacity(&self) -> usize {
        self.block.len()
    }

    /// Cursor position: bytes consumed from the start, padding included.
    pub fn offset(&self) -> usize {
        self.cursor.get()
    }

    /// Alias of [`offset`](Self::offset), matching the other size accessors.
    pub fn used(&self) -> usize {
        self.cursor.get()
    }

    /// Bytes between the cursor and the end of the block.
    pub fn remaining(&self) -> usize {
        self.block.len() - self.cursor.get()
    }

    /// Memory held by the backing block in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.block.len()
    }

    /// Start of the backing block.
    pub fn base_ptr(&self) -> *const u8 {
        self.block.ptr_at(0).as_ptr()
    }

    /// Whether `ptr` points into the backing block.
    pub fn contains<T>(&self, ptr: *const T) -> bool {
        self.offset_of(ptr).is_some()
    }

    /// Byte offset of `ptr` from the start of the block, if it points inside.
    pub fn offset_of<T>(&self, ptr: *const T) -> Option<usize> {
        let offset = ptr.addr().checked_sub(self.block.addr())?;
        (offset < self.block.len()).then_some(offset)
    }

    /// Advance the cursor for `request`, returning the block's offset.
    ///
    /// On exhaustion the cursor is left unchanged.
    fn bump(&self, request: &AllocRequest) -> Result<usize, Exhaustion> {
        let cursor = self.cursor.get();
        let remaining = self.block.len() - cursor;
        let padding = align::padding_for(self.block.addr() + cursor, request.align());

        let fitted = request
            .byte_len()
            .filter(|&bytes| padding <= remaining && bytes <= remaining - padding);
        let Some(bytes) = fitted else {
            let e = Exhaustion {
                requested: request.byte_len().unwrap_or(usize::MAX),
                padding,
                remaining,
                options: request.options(),
            };
            if request.options().allow_failure {
                log::debug!("{e}; reporting to caller");
            }
            return Err(e);
        };

        let offset = cursor + padding;
        self.cursor.set(offset + bytes);
        if !request.options().skip_zero_fill {
            self.block.zero(offset, bytes);
        }
        Ok(offset)
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        log::debug!(
            "arena released: {} of {} bytes used",
            self.cursor.get(),
            self.block.len()
        );
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity())
            .field("used", &self.used())
            .field("base_align", &self.block.align())
            .finish()
    }
}
