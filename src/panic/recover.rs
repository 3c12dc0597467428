use std::any::Any;
use std::error::Error;

/// The value a panic was raised with, as returned by [`std::panic::catch_unwind`].
pub type Payload = Box<dyn Any + Send + 'static>;

/// A type-erased, thread-safe error.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Extracts an error from a recovered panic payload.
///
/// A payload raised with [`panic_any`](std::panic::panic_any) from a [`BoxError`] is returned
/// unchanged. Any other payload, such as the `&str` or [`String`] produced by [`panic!`], yields
/// [`None`], as does a missing payload (meaning nothing panicked). Payloads of a concrete error
/// type can be recovered with [`recover_error_as`].
///
/// Errors that are boxed without [`Sync`] (`Box<dyn Error + Send>`) and unboxed errors of a type
/// not named through [`recover_error_as`] can't be told apart from other values, so they also
/// yield [`None`].
///
/// # Examples
/// ```
/// # use std::panic;
/// # use sequence_utils::panic::{recover_error, BoxError};
/// let result: std::thread::Result<()> = panic::catch_unwind(|| {
///     panic::panic_any(BoxError::from("disk full"))
/// });
/// let error = recover_error(result.err()).expect("payload is an error");
/// assert_eq!(error.to_string(), "disk full");
///
/// let result: std::thread::Result<()> = panic::catch_unwind(|| panic!("not an error"));
/// assert!(recover_error(result.err()).is_none());
/// assert!(recover_error(None).is_none());
/// ```
pub fn recover_error(payload: Option<Payload>) -> Option<BoxError> {
    match payload?.downcast::<BoxError>() {
        Ok(error) => Some(*error),
        Err(other) => {
            discard(&other);
            None
        }
    }
}

/// Extracts an error of type `E` from a recovered panic payload.
///
/// The payload may either be an `E` itself or a [`BoxError`] wrapping one. Anything else,
/// including an error of a different type, yields [`None`].
///
/// # Examples
/// ```
/// # use std::{fmt, panic};
/// # use sequence_utils::panic::recover_error_as;
/// #[derive(Debug, PartialEq)]
/// struct Timeout;
///
/// impl fmt::Display for Timeout {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "timed out")
///     }
/// }
///
/// impl std::error::Error for Timeout {}
///
/// let result: std::thread::Result<()> = panic::catch_unwind(|| panic::panic_any(Timeout));
/// assert_eq!(recover_error_as::<Timeout>(result.err()), Some(Timeout));
/// ```
pub fn recover_error_as<E>(payload: Option<Payload>) -> Option<E>
where
    E: Error + Send + Sync + 'static,
{
    let payload = match payload?.downcast::<E>() {
        Ok(error) => return Some(*error),
        Err(other) => other,
    };

    match payload.downcast::<BoxError>() {
        Ok(error) => (*error).downcast::<E>().ok().map(|error| *error),
        Err(other) => {
            discard(&other);
            None
        }
    }
}

/// Returns the message of a payload raised by [`panic!`], which is either a `&'static str` or a
/// [`String`].
///
/// # Examples
/// ```
/// # use std::panic;
/// # use sequence_utils::panic::payload_message;
/// let result: std::thread::Result<()> = panic::catch_unwind(|| panic!("index {} out of range", 3));
/// let payload = result.unwrap_err();
/// assert_eq!(payload_message(&payload), Some("index 3 out of range"));
/// ```
pub fn payload_message(payload: &Payload) -> Option<&str> {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn discard(payload: &Payload) {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        payload = ?payload_message(payload),
        "discarding panic payload that is not an error"
    );
}
