//! Arena-backed byte strings.
//!
//! [`S8`] is an explicit-length byte sequence that is always followed by one
//! zero byte, so it can be handed to APIs that expect zero-terminated
//! strings. The length is authoritative: content may contain zero bytes of
//! its own. `S8` is a byte sequence, not text; nothing here interprets
//! encodings.
//!
//! Strings never own memory. Every constructor takes the owning
//! [`Arena`](strand_arena::Arena) explicitly and the returned string borrows
//! it, so a string cannot outlive the arena it was built in.
//!
//! # Constructors
//!
//! | Constructor | Zero-fills | Content |
//! |-------------|-----------|---------|
//! | [`S8::new`] | yes | all zero, caller fills via [`S8Mut`] |
//! | [`S8::from_cstr`] | no | bytes of a C string |
//! | [`S8::copy`] | no | exactly `src.len()` bytes of another `S8` |
//! | [`S8::concat`] | no | `a` followed by `b` |
//!
//! Each has a `try_` twin that reports exhaustion as
//! [`ArenaError::CapacityExceeded`](strand_arena::ArenaError::CapacityExceeded)
//! instead of aborting.
//!
//! ```rust
//! use strand_arena::Arena;
//! use strand_s8::{s8, S8};
//!
//! let arena = Arena::new(64);
//! let a = S8::from_cstr(&arena, c"foo");
//! let c = S8::concat(&arena, a, s8!("bar"));
//! assert_eq!(c, "foobar");
//! assert_eq!(c.as_bytes_with_nul(), b"foobar\0");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod construct;
mod ffi;
mod view;

pub use view::{S8Mut, S8};

/// Build an `S8<'static>` over a string literal, without an arena.
///
/// The terminator is appended at compile time. Zero bytes inside the
/// literal are content, so `s8!("a\0b").len()` is 3.
///
/// ```rust
/// use strand_s8::s8;
///
/// let greeting = s8!("hello");
/// assert_eq!(greeting.len(), 5);
/// assert_eq!(greeting.as_bytes_with_nul(), b"hello\0");
/// ```
#[macro_export]
macro_rules! s8 {
    ($lit:literal) => {{
        const S: $crate::S8<'static> =
            match $crate::S8::from_bytes_with_nul(::core::concat!($lit, "\0").as_bytes()) {
                ::core::option::Option::Some(s) => s,
                ::core::option::Option::None => ::core::panic!("literal lost its terminator"),
            };
        S
    }};
}
