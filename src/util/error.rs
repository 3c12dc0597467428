use derive_more::{Display, Error};

/// The error returned when a [`Sequence`](crate::sequence::Sequence) that was expected to be
/// present turns out to be absent.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("sequence is absent")]
pub struct AbsentSequence;
