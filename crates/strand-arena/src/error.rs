//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use crate::outcome::Exhaustion;

/// Errors that can occur during arena operations.
///
/// Only recoverable conditions appear here. Exhaustion without
/// `allow_failure` never becomes an `ArenaError`; it aborts the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena has too little room left for the request.
    CapacityExceeded {
        /// Number of bytes requested, excluding alignment padding.
        /// `usize::MAX` if `count * size` overflowed.
        requested: usize,
        /// Bytes still usable after alignment padding.
        available: usize,
    },
    /// The arena configuration cannot describe a valid backing block.
    InvalidConfig {
        /// Why the configuration was rejected.
        reason: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                available,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes, available {available} bytes"
                )
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid arena config: {reason}")
            }
        }
    }
}

impl Error for ArenaError {}

impl From<Exhaustion> for ArenaError {
    fn from(e: Exhaustion) -> Self {
        Self::CapacityExceeded {
            requested: e.requested,
            available: e.available(),
        }
    }
}
