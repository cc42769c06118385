//! Allocation outcomes and the fatal exhaustion path.

use std::fmt;

use crate::error::ArenaError;
use crate::request::AllocOptions;

/// Details of a request the arena could not satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exhaustion {
    /// Bytes requested, excluding padding. `usize::MAX` if `count * size`
    /// overflowed.
    pub requested: usize,
    /// Padding that would have been needed to reach the requested alignment.
    pub padding: usize,
    /// Bytes between the cursor and the end of the block.
    pub remaining: usize,
    /// Options the request was issued with.
    pub options: AllocOptions,
}

impl Exhaustion {
    /// Bytes usable by the request once padding is paid (zero if the
    /// padding alone does not fit).
    pub fn available(&self) -> usize {
        self.remaining.saturating_sub(self.padding)
    }
}

impl fmt::Display for Exhaustion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arena exhausted: requested {} bytes with {} bytes padding, {} bytes remaining",
            self.requested, self.padding, self.remaining
        )
    }
}

/// Result of a single allocation attempt.
///
/// The arena never decides what exhaustion means; the caller does, either
/// by matching on this value or by calling [`resolve`](Self::resolve).
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an exhausted allocation must be handled or resolved"]
pub enum AllocOutcome<B> {
    /// The request was satisfied.
    Block(B),
    /// The arena did not have room; the cursor is unchanged.
    Exhausted(Exhaustion),
}

impl<B> AllocOutcome<B> {
    /// Apply the exhaustion policy carried in the request's options.
    ///
    /// Returns `None` only if the request allowed failure. Exhaustion of a
    /// request without `allow_failure` aborts the process.
    pub fn resolve(self) -> Option<B> {
        match self {
            Self::Block(block) => Some(block),
            Self::Exhausted(e) if e.options.allow_failure => None,
            Self::Exhausted(e) => fatal_exhaustion(&e),
        }
    }

    /// Return the block or abort the process, regardless of options.
    ///
    /// For call sites that never request `allow_failure`.
    pub fn or_abort(self) -> B {
        match self {
            Self::Block(block) => block,
            Self::Exhausted(e) => fatal_exhaustion(&e),
        }
    }

    /// Convert to a `Result` for `?`-style propagation.
    pub fn into_result(self) -> Result<B, ArenaError> {
        match self {
            Self::Block(block) => Ok(block),
            Self::Exhausted(e) => Err(e.into()),
        }
    }

    /// Transform the block, keeping an exhaustion as-is.
    pub fn map<C>(self, f: impl FnOnce(B) -> C) -> AllocOutcome<C> {
        match self {
            Self::Block(block) => AllocOutcome::Block(f(block)),
            Self::Exhausted(e) => AllocOutcome::Exhausted(e),
        }
    }

    /// Whether the request was satisfied.
    pub fn is_block(&self) -> bool {
        matches!(self, Self::Block(_))
    }

    /// Whether the arena was exhausted.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }

    /// The exhaustion details, if any.
    pub fn exhaustion(&self) -> Option<&Exhaustion> {
        match self {
            Self::Block(_) => None,
            Self::Exhausted(e) => Some(e),
        }
    }
}

#[cold]
#[inline(never)]
fn fatal_exhaustion(e: &Exhaustion) -> ! {
    log::error!("{e}; aborting (allocation did not allow failure)");
    std::process::abort()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exhausted(options: AllocOptions) -> AllocOutcome<u32> {
        AllocOutcome::Exhausted(Exhaustion {
            requested: 20,
            padding: 0,
            remaining: 16,
            options,
        })
    }

    #[test]
    fn block_resolves_to_some() {
        assert_eq!(AllocOutcome::Block(7u32).resolve(), Some(7));
    }

    #[test]
    fn soft_exhaustion_resolves_to_none() {
        assert_eq!(
            exhausted(AllocOptions::new().allowing_failure()).resolve(),
            None
        );
    }

    #[test]
    fn into_result_reports_available_bytes() {
        let err = AllocOutcome::<u32>::Exhausted(Exhaustion {
            requested: 8,
            padding: 6,
            remaining: 4,
            options: AllocOptions::new(),
        })
        .into_result()
        .unwrap_err();
        assert_eq!(
            err,
            ArenaError::CapacityExceeded {
                requested: 8,
                available: 0,
            }
        );
    }

    #[test]
    fn map_preserves_variant() {
        assert_eq!(AllocOutcome::Block(2u32).map(|v| v * 3), AllocOutcome::Block(6));
        let mapped = exhausted(AllocOptions::new()).map(|v| v + 1);
        assert!(mapped.is_exhausted());
        assert_eq!(mapped.exhaustion().unwrap().requested, 20);
    }

    #[test]
    fn exhaustion_display() {
        let e = Exhaustion {
            requested: 20,
            padding: 3,
            remaining: 16,
            options: AllocOptions::new(),
        };
        assert_eq!(
            e.to_string(),
            "arena exhausted: requested 20 bytes with 3 bytes padding, 16 bytes remaining"
        );
    }
}
