//! Fixed-capacity bump-pointer arena.
//!
//! An [`Arena`] acquires one contiguous block from the global allocator at
//! creation and hands out sub-blocks by advancing a single cursor. There is
//! no per-object free: the whole block is released at once when the arena
//! is destroyed (or dropped). This crate is the only one in the workspace
//! that contains `unsafe` code, and all of it lives in `raw.rs`.
//!
//! # Architecture
//!
//! ```text
//! Arena
//! ├── RawBlock (one zeroed heap block, released on drop)
//! ├── cursor: Cell<usize> (bytes consumed, including padding)
//! └── bump(AllocRequest) → AllocOutcome
//!     ├── Block(&mut [T] | NonNull<u8>)
//!     └── Exhausted(Exhaustion)
//! ```
//!
//! # Exhaustion policy
//!
//! Every allocation first produces an explicit [`AllocOutcome`]. The
//! convenience entry points resolve it with [`AllocOutcome::resolve`]:
//!
//! - **allow_failure:** exhaustion yields `None` and leaves the cursor
//!   unchanged.
//! - **default:** exhaustion is an undersized-arena configuration error and
//!   aborts the process. No unwinding, no partial mutation.
//!
//! # Example
//!
//! ```rust
//! use strand_arena::{AllocOptions, Arena};
//!
//! let arena = Arena::new(1024);
//! let block = arena.alloc::<u8>(10, AllocOptions::new()).unwrap();
//! assert!(block.iter().all(|&b| b == 0));
//! assert_eq!(arena.offset(), 10);
//!
//! let too_big = arena.alloc::<u8>(4096, AllocOptions::new().allowing_failure());
//! assert!(too_big.is_none());
//! assert_eq!(arena.offset(), 10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod align;
pub mod arena;
pub mod config;
pub mod error;
pub mod outcome;
mod raw;
pub mod request;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use outcome::{AllocOutcome, Exhaustion};
pub use request::{AllocOptions, AllocRequest};

/// Element types the arena can hand out.
///
/// Re-exported so callers can bound their own generic code without a direct
/// `bytemuck` dependency.
pub use bytemuck::Zeroable;
