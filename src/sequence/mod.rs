//! A module containing [`Sequence`] and the helpers that operate on it.
//!
//! The helpers are free functions ([`merge`], [`exclude`], [`contains`], [`map`], [`filter`] and
//! [`unique`]), each of which also has a method form on [`Sequence`] for chaining. They never
//! hold state and never share it, so they can be called from any number of threads on disjoint
//! inputs.
//!
//! # Result Shapes
//! | Helper | Absent input | No output elements |
//! |-|-|-|
//! | [`merge`] | Counts as empty | Present |
//! | [`exclude`] | Absent | Present |
//! | [`map`] | Present | Present |
//! | [`filter`] | Absent | Absent |
//! | [`unique`] | Absent | Absent |
//!
//! [`contains`] borrows its input and returns a plain `bool`.

mod iter;
mod ops;
mod sequence;

pub use iter::*;
pub use ops::*;
pub use sequence::*;

#[doc(inline)]
pub use crate::util::error::AbsentSequence;
