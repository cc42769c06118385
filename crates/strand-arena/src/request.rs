//! Allocation requests and their options.

use std::mem::{align_of, size_of};

/// Per-request allocation options.
///
/// Both options default to `false`: returned bytes are zero-filled and
/// exhaustion aborts the process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AllocOptions {
    /// Leave the returned bytes as they are instead of zero-filling them.
    ///
    /// Only for callers that overwrite the whole block before reading it.
    /// The bytes are never garbage: a region is handed out at most once and
    /// the backing block starts zeroed.
    pub skip_zero_fill: bool,
    /// Report exhaustion to the caller instead of aborting the process.
    pub allow_failure: bool,
}

impl AllocOptions {
    /// Bit for [`skip_zero_fill`](Self::skip_zero_fill) in the flag-word encoding.
    pub const NOZERO: u32 = 1 << 0;

    /// Bit for [`allow_failure`](Self::allow_failure) in the flag-word encoding.
    pub const SOFTFAIL: u32 = 1 << 1;

    /// Default options: zero-fill, abort on exhaustion.
    pub const fn new() -> Self {
        Self {
            skip_zero_fill: false,
            allow_failure: false,
        }
    }

    /// Return a copy with `skip_zero_fill` set.
    pub const fn skipping_zero_fill(mut self) -> Self {
        self.skip_zero_fill = true;
        self
    }

    /// Return a copy with `allow_failure` set.
    pub const fn allowing_failure(mut self) -> Self {
        self.allow_failure = true;
        self
    }

    /// Decode a flag word. Unknown bits are ignored.
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            skip_zero_fill: bits & Self::NOZERO != 0,
            allow_failure: bits & Self::SOFTFAIL != 0,
        }
    }

    /// Encode as a flag word.
    pub const fn bits(self) -> u32 {
        let mut bits = 0;
        if self.skip_zero_fill {
            bits |= Self::NOZERO;
        }
        if self.allow_failure {
            bits |= Self::SOFTFAIL;
        }
        bits
    }
}

/// A request for `count` elements of `size` bytes at `align`.
///
/// Built once per call and consumed by [`Arena::allocate`](crate::Arena::allocate).
/// Malformed requests (zero element size, non-power-of-two alignment) are
/// caller bugs and panic at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocRequest {
    size: usize,
    align: usize,
    count: usize,
    options: AllocOptions,
}

impl AllocRequest {
    /// Describe a raw request.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0` or `align` is not a power of two.
    pub fn new(size: usize, align: usize, count: usize, options: AllocOptions) -> Self {
        assert!(size > 0, "element size must be non-zero");
        assert!(
            align.is_power_of_two(),
            "alignment {align} is not a power of two"
        );
        Self {
            size,
            align,
            count,
            options,
        }
    }

    /// Describe a request for `count` values of `T` at `T`'s natural alignment.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    pub fn of<T>(count: usize, options: AllocOptions) -> Self {
        Self::new(size_of::<T>(), align_of::<T>(), count, options)
    }

    /// Raise the alignment above the element's natural one.
    ///
    /// # Panics
    ///
    /// Panics if `align` is not a power of two or is below the current
    /// alignment.
    pub fn aligned_to(mut self, align: usize) -> Self {
        assert!(
            align.is_power_of_two(),
            "alignment {align} is not a power of two"
        );
        assert!(
            align >= self.align,
            "alignment {align} is below the element alignment {}",
            self.align
        );
        self.align = align;
        self
    }

    /// Element size in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Required alignment in bytes.
    pub fn align(&self) -> usize {
        self.align
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Options carried by the request.
    pub fn options(&self) -> AllocOptions {
        self.options
    }

    /// Total bytes requested, or `None` if `count * size` overflows.
    pub fn byte_len(&self) -> Option<usize> {
        self.count.checked_mul(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_zero_fill_and_abort() {
        let opts = AllocOptions::default();
        assert!(!opts.skip_zero_fill);
        assert!(!opts.allow_failure);
        assert_eq!(opts, AllocOptions::new());
        assert_eq!(opts.bits(), 0);
    }

    #[test]
    fn option_bits_are_independent() {
        assert_eq!(AllocOptions::from_bits(AllocOptions::NOZERO).bits(), 1);
        assert_eq!(AllocOptions::from_bits(AllocOptions::SOFTFAIL).bits(), 2);
        let both = AllocOptions::new().skipping_zero_fill().allowing_failure();
        assert_eq!(both.bits(), AllocOptions::NOZERO | AllocOptions::SOFTFAIL);
        assert_eq!(AllocOptions::from_bits(both.bits()), both);
    }

    #[test]
    fn unknown_bits_ignored() {
        assert_eq!(AllocOptions::from_bits(0xF0), AllocOptions::new());
    }

    #[test]
    fn typed_request_uses_natural_layout() {
        let req = AllocRequest::of::<u64>(3, AllocOptions::new());
        assert_eq!(req.size(), 8);
        assert_eq!(req.align(), align_of::<u64>());
        assert_eq!(req.count(), 3);
        assert_eq!(req.byte_len(), Some(24));
    }

    #[test]
    fn byte_len_overflow_is_none() {
        let req = AllocRequest::of::<u32>(usize::MAX, AllocOptions::new());
        assert_eq!(req.byte_len(), None);
    }

    #[test]
    fn aligned_to_raises_alignment() {
        let req = AllocRequest::of::<u8>(64, AllocOptions::new()).aligned_to(64);
        assert_eq!(req.align(), 64);
    }

    #[test]
    #[should_panic(expected = "not a power of two")]
    fn non_power_of_two_alignment_panics() {
        AllocRequest::new(1, 3, 1, AllocOptions::new());
    }

    #[test]
    #[should_panic(expected = "element size must be non-zero")]
    fn zero_sized_element_panics() {
        AllocRequest::of::<()>(1, AllocOptions::new());
    }

    #[test]
    #[should_panic(expected = "below the element alignment")]
    fn lowering_alignment_panics() {
        AllocRequest::of::<u64>(1, AllocOptions::new()).aligned_to(2);
    }
}
