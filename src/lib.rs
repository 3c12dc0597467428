//! Small, generic helpers for manipulating ordered sequences, plus a classifier for recovered
//! panic payloads.
//!
//! # Purpose
//! Most of what lives here is a thin layer over [`Vec`] and slices. What it adds is a precise
//! contract about the *shape* of the result: a sequence can be [`Absent`](sequence::Sequence::Absent)
//! (nothing was ever provided) or [`Present`](sequence::Sequence::Present) with zero or more
//! elements, and every helper documents which of the two it hands back. Code that cares about the
//! difference between "no list" and "an empty list" can rely on it, code that doesn't can treat
//! both as an empty slice through [`Deref`](std::ops::Deref).
//!
//! # Ownership
//! The helpers take their input sequences by value. Where the result can be built over the input's
//! buffer (filtering, exclusion, deduplication, and merging into spare capacity), it is, so the
//! caller should consider the argument consumed. Clone first if the original is still needed.
//!
//! # Error Handling
//! None of the sequence helpers can fail: their requirements are expressed as trait bounds
//! ([`PartialEq`] for equality based helpers, [`Ord`] for [`contains`](sequence::contains)) and
//! are checked by the compiler. The only fallible conversion is
//! [`Sequence::try_into_vec`](sequence::Sequence::try_into_vec), which uses a zero-sized error
//! type implementing [`Error`](std::error::Error).
//!
//! # Features
//! - `sequence` (default): the [`Sequence`](sequence::Sequence) type and its helpers.
//! - `panic` (default): classification of payloads returned by [`std::panic::catch_unwind`].
//! - `tracing`: emits `trace` level events through the `tracing` crate when a panic payload is
//!   discarded.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "panic")]
pub mod panic;
#[cfg(feature = "sequence")]
pub mod sequence;

pub(crate) mod util;
