//! Classification of payloads recovered from a panic.
//!
//! [`std::panic::catch_unwind`] hands back whatever value the panic was raised with as a
//! [`Payload`]. The functions here answer one question about it: was it an error? If so, the
//! error is returned unchanged, otherwise (including when nothing panicked at all) the answer is
//! [`None`]. They never re-raise or otherwise affect control flow.

mod recover;

pub use recover::*;
