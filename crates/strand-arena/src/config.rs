//! Arena configuration parameters.

use std::alloc::Layout;

use crate::error::ArenaError;

/// Configuration for a fixed-capacity arena.
///
/// Validated at construction; the arena never grows, so these values hold
/// for its whole lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of the backing block in bytes.
    ///
    /// Default: 1_048_576 (1 MiB). Zero is allowed and yields an arena that
    /// can only satisfy empty requests.
    pub capacity: usize,

    /// Alignment of the backing block in bytes.
    ///
    /// Default: 16, matching what the system `malloc` guarantees on common
    /// 64-bit targets. Must be a power of two. Requests with a larger
    /// alignment still succeed; they just pay padding at the front.
    pub base_align: usize,
}

impl ArenaConfig {
    /// Default capacity: 1 MiB.
    pub const DEFAULT_CAPACITY: usize = 1 << 20;

    /// Default block alignment.
    pub const DEFAULT_BASE_ALIGN: usize = 16;

    /// Create a config for the given capacity with the default alignment.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            base_align: Self::DEFAULT_BASE_ALIGN,
        }
    }

    /// Override the block alignment.
    pub fn with_base_align(mut self, base_align: usize) -> Self {
        self.base_align = base_align;
        self
    }

    /// Check that the config describes a block the allocator can supply.
    pub fn validate(&self) -> Result<(), ArenaError> {
        self.layout().map(|_| ())
    }

    /// The layout of the backing block.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidConfig`] if `base_align` is not a power of
    /// two, or if `capacity` rounded up to `base_align` exceeds `isize::MAX`.
    pub fn layout(&self) -> Result<Layout, ArenaError> {
        if !self.base_align.is_power_of_two() {
            return Err(ArenaError::InvalidConfig {
                reason: format!("base_align {} is not a power of two", self.base_align),
            });
        }
        Layout::from_size_align(self.capacity, self.base_align).map_err(|_| {
            ArenaError::InvalidConfig {
                reason: format!(
                    "capacity {} with alignment {} exceeds isize::MAX",
                    self.capacity, self.base_align
                ),
            }
        })
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_one_mib() {
        let config = ArenaConfig::default();
        assert_eq!(config.capacity, 1024 * 1024);
        assert_eq!(config.base_align, 16);
    }

    #[test]
    fn capacity_preserved() {
        let config = ArenaConfig::new(10_000);
        assert_eq!(config.layout().unwrap().size(), 10_000);
    }

    #[test]
    fn zero_capacity_is_valid() {
        assert!(ArenaConfig::new(0).validate().is_ok());
    }

    #[test]
    fn non_power_of_two_alignment_rejected() {
        let config = ArenaConfig::new(64).with_base_align(24);
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn oversized_capacity_rejected() {
        let config = ArenaConfig::new(usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));
    }
}
