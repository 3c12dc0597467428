#[cfg(test)]
pub mod alloc;
#[cfg(feature = "sequence")]
pub mod error;
#[cfg(test)]
pub mod generate;
