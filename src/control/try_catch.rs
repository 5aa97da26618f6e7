//! Adapters from fallible operations to [`Either`].
//!
//! [`try_catch`] wraps an operation that reports failure through `Result`;
//! [`try_catch_unwind`] wraps one that fails by panicking. Either way the
//! adapted operation returns `Right` on a normal return and `Left` with the
//! failure value otherwise, so the failure never reaches the caller through
//! the host's own propagation.
//!
//! Side effects the operation performed before failing are kept. The
//! adapters only redirect control flow.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Either, try_catch};
//!
//! let parse = try_catch(|text: &str| text.parse::<u16>());
//!
//! assert_eq!(parse("80"), Either::Right(80));
//! assert!(parse("eighty").is_left());
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::either::Either;

/// The opaque value a panicking operation unwound with.
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// Adapts an operation returning `Result` into one returning [`Either`].
///
/// `Ok(value)` becomes `Right(value)` and `Err(error)` becomes
/// `Left(error)`. The error type is not constrained.
///
/// # Examples
///
/// ```rust
/// use railway::control::{Either, try_catch};
///
/// let checked_half = try_catch(|n: i32| {
///     if n % 2 == 0 { Ok(n / 2) } else { Err(n) }
/// });
///
/// assert_eq!(checked_half(10), Either::Right(5));
/// assert_eq!(checked_half(7), Either::Left(7));
/// ```
pub fn try_catch<A, B, E, F>(operation: F) -> impl Fn(A) -> Either<E, B>
where
    F: Fn(A) -> Result<B, E>,
{
    move |argument| Either::from(operation(argument))
}

/// Adapts an operation that may panic into one returning [`Either`].
///
/// The operation runs under [`std::panic::catch_unwind`]. A normal return
/// becomes `Right(value)`; a panic becomes `Left(payload)` carrying whatever
/// the panic was raised with. Panics are only intercepted when the crate is
/// built with `panic = "unwind"`.
///
/// The panic hook still runs, so the usual panic message is printed.
///
/// # Examples
///
/// ```rust
/// use railway::control::{panic_message, try_catch_unwind};
///
/// let divide = try_catch_unwind(|(a, b): (i32, i32)| {
///     if b == 0 {
///         panic!("division by zero");
///     }
///     a / b
/// });
///
/// assert_eq!(divide((6, 3)).right(), Some(2));
///
/// let failure = divide((1, 0)).left();
/// assert_eq!(failure.as_ref().and_then(panic_message), Some("division by zero"));
/// ```
pub fn try_catch_unwind<A, B, F>(operation: F) -> impl Fn(A) -> Either<PanicPayload, B>
where
    F: Fn(A) -> B,
{
    move |argument| match panic::catch_unwind(AssertUnwindSafe(|| operation(argument))) {
        Ok(value) => Either::Right(value),
        Err(payload) => Either::Left(payload),
    }
}

/// Reads the message of a panic payload raised with a string.
///
/// Returns `None` when the payload is neither `&str` nor `String`.
pub fn panic_message(payload: &PanicPayload) -> Option<&str> {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
}
