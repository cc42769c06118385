//! The four arena constructors and their fallible twins.
//!
//! Every constructor writes the terminator itself, including the ones that
//! skip zero-fill; nothing relies on the arena happening to hand out zeroes.

use std::ffi::CStr;

use strand_arena::{AllocOptions, AllocOutcome, Arena, ArenaError};

use crate::view::{S8Mut, S8};

/// Options for the fallible twins.
const SOFT: AllocOptions = AllocOptions::new().allowing_failure();

impl<'a> S8<'a> {
    /// Allocate a zero-filled string of `len` content bytes.
    ///
    /// The caller fills the content through the returned [`S8Mut`]. Aborts
    /// the process if the arena is exhausted.
    pub fn new(arena: &'a Arena, len: usize) -> S8Mut<'a> {
        Self::new_in(arena, len, AllocOptions::new()).or_abort()
    }

    /// [`new`](Self::new), reporting exhaustion instead of aborting.
    pub fn try_new(arena: &'a Arena, len: usize) -> Result<S8Mut<'a>, ArenaError> {
        Self::new_in(arena, len, SOFT).into_result()
    }

    /// Copy a C string, content and terminator, into the arena.
    ///
    /// The length is the position of the first zero byte. Aborts the
    /// process if the arena is exhausted.
    pub fn from_cstr(arena: &'a Arena, cstr: &CStr) -> S8<'a> {
        Self::from_cstr_in(arena, cstr, AllocOptions::new()).or_abort()
    }

    /// [`from_cstr`](Self::from_cstr), reporting exhaustion instead of aborting.
    pub fn try_from_cstr(arena: &'a Arena, cstr: &CStr) -> Result<S8<'a>, ArenaError> {
        Self::from_cstr_in(arena, cstr, SOFT).into_result()
    }

    /// Copy `src` into `arena`.
    ///
    /// Exactly `src.len()` content bytes are copied, embedded zeros
    /// included. The result does not share storage with `src`, so it stays
    /// valid after `src`'s arena is gone. Aborts the process if the arena is
    /// exhausted.
    pub fn copy(arena: &'a Arena, src: S8<'_>) -> S8<'a> {
        Self::copy_in(arena, src, AllocOptions::new()).or_abort()
    }

    /// [`copy`](Self::copy), reporting exhaustion instead of aborting.
    pub fn try_copy(arena: &'a Arena, src: S8<'_>) -> Result<S8<'a>, ArenaError> {
        Self::copy_in(arena, src, SOFT).into_result()
    }

    /// Build a new string holding `a`'s content followed by `b`'s.
    ///
    /// Neither input is modified. Aborts the process if the arena is
    /// exhausted.
    pub fn concat(arena: &'a Arena, a: S8<'_>, b: S8<'_>) -> S8<'a> {
        Self::concat_in(arena, a, b, AllocOptions::new()).or_abort()
    }

    /// [`concat`](Self::concat), reporting exhaustion instead of aborting.
    pub fn try_concat(arena: &'a Arena, a: S8<'_>, b: S8<'_>) -> Result<S8<'a>, ArenaError> {
        Self::concat_in(arena, a, b, SOFT).into_result()
    }

    fn new_in(arena: &'a Arena, len: usize, options: AllocOptions) -> AllocOutcome<S8Mut<'a>> {
        arena
            .try_alloc::<u8>(len.saturating_add(1), options)
            .map(|bytes| {
                bytes[len] = 0;
                S8Mut { bytes }
            })
    }

    fn from_cstr_in(arena: &'a Arena, cstr: &CStr, options: AllocOptions) -> AllocOutcome<S8<'a>> {
        let src = cstr.to_bytes_with_nul();
        arena
            .try_alloc::<u8>(src.len(), options.skipping_zero_fill())
            .map(|bytes| {
                bytes.copy_from_slice(src);
                S8 { bytes }
            })
    }

    fn copy_in(arena: &'a Arena, src: S8<'_>, options: AllocOptions) -> AllocOutcome<S8<'a>> {
        let len = src.len();
        arena
            .try_alloc::<u8>(len.saturating_add(1), options.skipping_zero_fill())
            .map(|bytes| {
                bytes[len] = 0;
                bytes[..len].copy_from_slice(src.as_bytes());
                S8 { bytes }
            })
    }

    fn concat_in(
        arena: &'a Arena,
        a: S8<'_>,
        b: S8<'_>,
        options: AllocOptions,
    ) -> AllocOutcome<S8<'a>> {
        let split = a.len();
        let len = split.saturating_add(b.len());
        arena
            .try_alloc::<u8>(len.saturating_add(1), options.skipping_zero_fill())
            .map(|bytes| {
                bytes[len] = 0;
                bytes[..split].copy_from_slice(a.as_bytes());
                bytes[split..len].copy_from_slice(b.as_bytes());
                S8 { bytes }
            })
    }
}
