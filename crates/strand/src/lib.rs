//! Strand: a fixed-capacity bump arena and the byte strings built on it.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Strand sub-crates. For most users, adding `strand` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strand::prelude::*;
//!
//! // One arena per frame, request or job.
//! let arena = Arena::new(1024);
//!
//! // Typed, zero-filled blocks.
//! let scores = arena.alloc::<u32>(4, AllocOptions::new()).unwrap();
//! scores[0] = 7;
//!
//! // Degrade gracefully instead of aborting when the arena is too small.
//! let huge = arena.alloc::<u8>(1 << 20, AllocOptions::new().allowing_failure());
//! assert!(huge.is_none());
//!
//! // Byte strings: explicit length, always zero-terminated.
//! let name = S8::from_cstr(&arena, c"player");
//! let label = S8::concat(&arena, name, s8!("_one"));
//! assert_eq!(label, "player_one");
//! assert_eq!(label.to_c_str(), c"player_one");
//!
//! // Everything is released at once.
//! arena.destroy();
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `strand-arena` | `Arena`, requests, options, outcomes, errors |
//! | [`string`] | `strand-s8` | `S8`, `S8Mut`, the `s8!` literal macro |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Bump-pointer arena (`strand-arena`).
///
/// [`arena::Arena`] owns one fixed block; [`arena::AllocOutcome`] makes
/// exhaustion explicit at every call site.
pub use strand_arena as arena;

/// Arena-backed byte strings (`strand-s8`).
///
/// [`string::S8`] is an explicit-length, zero-terminated byte view tied to
/// the lifetime of its arena.
pub use strand_s8 as string;

/// Common imports for typical Strand usage.
///
/// ```rust
/// use strand::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use strand_arena::{
        AllocOptions, AllocOutcome, AllocRequest, Arena, ArenaConfig, ArenaError, Zeroable,
    };

    // Byte strings
    pub use strand_s8::{s8, S8Mut, S8};
}
