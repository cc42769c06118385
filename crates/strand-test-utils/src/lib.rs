//! Test utilities and fixtures for Strand development.
//!
//! - [`workload`]: deterministic, seeded sequences of [`AllocRequest`]s.
//! - [`layout`]: helpers that check returned blocks stay inside the arena
//!   and never overlap.
//! - [`fixtures`]: byte-string corpora, including C strings and content
//!   with embedded zero bytes.
//!
//! [`AllocRequest`]: strand_arena::AllocRequest

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod layout;
pub mod workload;

pub use layout::{BlockSpan, SpanLog};
pub use workload::{padded_upper_bound, seeded_requests};
