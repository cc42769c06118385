//! Power-of-two alignment arithmetic.
//!
//! All helpers operate on plain addresses (`usize`) and use the
//! two's-complement "negate and mask" form, so they are branch-free and work
//! for any power-of-two alignment.

/// Whether `align` is usable as an allocation alignment (a power of two).
pub const fn is_valid_align(align: usize) -> bool {
    align.is_power_of_two()
}

/// Bytes needed to advance `addr` to the next multiple of `align`.
///
/// Returns 0 when `addr` is already aligned. `align` must be a power of two.
pub const fn padding_for(addr: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    addr.wrapping_neg() & (align - 1)
}

/// Round `addr` up to the next multiple of `align`.
///
/// Wraps on overflow; callers bound `addr` by a live allocation first.
pub const fn align_up(addr: usize, align: usize) -> usize {
    addr.wrapping_add(padding_for(addr, align))
}
