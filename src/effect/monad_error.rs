//! `MonadError` type class - raising and recovering from failures.
//!
//! `MonadError<E>` abstracts over containers that carry a failure of type `E`
//! on a separate track. [`Either`] is the instance in this crate: `Left` is
//! the failure track and `Right` the success track.
//!
//! # Laws
//!
//! ## Throw Catch Law
//!
//! ```text
//! catch_error(throw_error(e), handler) == handler(e)
//! ```
//!
//! ## Catch Pure Law
//!
//! ```text
//! catch_error(pure(a), handler) == pure(a)
//! ```
//!
//! ## Throw Short-Circuit Law
//!
//! ```text
//! throw_error(e).flat_map(f) == throw_error(e)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Either;
//! use railway::effect::MonadError;
//!
//! let failed: Either<String, i32> = <Either<String, i32>>::throw_error("oops".to_string());
//! let recovered = <Either<String, i32>>::catch_error(failed, |e| Either::Right(e.len() as i32));
//! assert_eq!(recovered, Either::Right(4));
//! ```

use crate::control::Either;
use crate::typeclass::Monad;

/// A type class for monads that can throw and catch errors of type `E`.
///
/// # Laws
///
/// ```text
/// catch_error(throw_error(e), handler) == handler(e)
/// catch_error(pure(a), handler) == pure(a)
/// throw_error(e).flat_map(f) == throw_error(e)
/// ```
///
/// # Examples
///
/// ```rust
/// use railway::control::Either;
/// use railway::effect::MonadError;
///
/// fn safe_divide<M: MonadError<String>>(a: i32, b: i32) -> M::WithType<i32> {
///     if b == 0 {
///         M::throw_error("division by zero".to_string())
///     } else {
///         M::from_result(Ok(a / b))
///     }
/// }
///
/// assert_eq!(safe_divide::<Either<String, ()>>(6, 3), Either::Right(2));
/// assert_eq!(
///     safe_divide::<Either<String, ()>>(1, 0),
///     Either::Left("division by zero".to_string())
/// );
/// ```
pub trait MonadError<E>: Monad {
    /// Creates a failed computation holding `error`.
    ///
    /// Subsequent `flat_map` steps are skipped.
    fn throw_error<A>(error: E) -> Self::WithType<A>;

    /// Recovers from a failure with a handler producing a new computation.
    ///
    /// The handler is only called on failure; a success is returned as is.
    fn catch_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> Self::WithType<A>;

    /// Lifts a `Result`: `Ok` becomes a success, `Err` a thrown error.
    fn from_result<A>(result: Result<A, E>) -> Self::WithType<A>;

    /// Replaces a failed computation with `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    /// use railway::effect::MonadError;
    ///
    /// let failing: Either<String, i32> = Either::Left("error".to_string());
    /// let with_default = <Either<String, i32>>::recover_with(failing, Either::Right(0));
    /// assert_eq!(with_default, Either::Right(0));
    /// ```
    fn recover_with<A>(
        computation: Self::WithType<A>,
        default: Self::WithType<A>,
    ) -> Self::WithType<A>;

    /// Converts a failure into a success value.
    ///
    /// Unlike `catch_error`, the handler returns a plain value, so the result
    /// is always on the success track. This is what [`Either::catch`] does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    /// use railway::effect::MonadError;
    ///
    /// let failing: Either<String, usize> = Either::Left("error".to_string());
    /// let handled = <Either<String, usize>>::handle_error(failing, |e| e.len());
    /// assert_eq!(handled, Either::Right(5));
    /// ```
    fn handle_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> A;

    /// Fails with `error()` when the success value does not satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    /// use railway::effect::MonadError;
    ///
    /// let small: Either<&str, i32> = Either::Right(3);
    /// let checked = <Either<&str, i32>>::ensure(small, || "too small", |n| *n > 10);
    /// assert_eq!(checked, Either::Left("too small"));
    /// ```
    fn ensure<A, F, P>(computation: Self::WithType<A>, error: F, predicate: P) -> Self::WithType<A>
    where
        F: FnOnce() -> E,
        P: FnOnce(&A) -> bool;
}

impl<L: Clone, R> MonadError<L> for Either<L, R> {
    #[inline]
    fn throw_error<A>(error: L) -> Either<L, A> {
        Either::Left(error)
    }

    #[inline]
    fn catch_error<A, F>(computation: Either<L, A>, handler: F) -> Either<L, A>
    where
        F: FnOnce(L) -> Either<L, A>,
    {
        match computation {
            Either::Left(error) => handler(error),
            right @ Either::Right(_) => right,
        }
    }

    #[inline]
    fn from_result<A>(result: Result<A, L>) -> Either<L, A> {
        Either::from(result)
    }

    #[inline]
    fn recover_with<A>(computation: Either<L, A>, default: Either<L, A>) -> Either<L, A> {
        match computation {
            Either::Left(_) => default,
            right @ Either::Right(_) => right,
        }
    }

    #[inline]
    fn handle_error<A, F>(computation: Either<L, A>, handler: F) -> Either<L, A>
    where
        F: FnOnce(L) -> A,
    {
        computation.catch(handler)
    }

    #[inline]
    fn ensure<A, F, P>(computation: Either<L, A>, error: F, predicate: P) -> Either<L, A>
    where
        F: FnOnce() -> L,
        P: FnOnce(&A) -> bool,
    {
        computation.chain(|value| {
            if predicate(&value) {
                Either::Right(value)
            } else {
                Either::Left(error())
            }
        })
    }
}
