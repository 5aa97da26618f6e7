//! Either type - a success or a failure.
//!
//! This module provides [`Either<L, R>`], a value that is either a
//! `Right(R)` (success) or a `Left(L)` (failure). The failure payload is
//! unconstrained: any type can travel on the left track.
//!
//! `Either` is right-biased. [`Either::map`], [`Either::chain`] and
//! [`Either::flatten`] work on `Right` and pass `Left` through untouched,
//! so the first failure silently skips every later step. [`Either::catch`]
//! is the only way back from `Left` to `Right`. `map` and `catch` never
//! turn a `Right` into a `Left`; `chain` and `flatten` do exactly when the
//! step (or the inner value) is itself a `Left`.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Either;
//!
//! let parsed: Either<String, i32> = Either::Right(20);
//! let total = parsed.map(|n| n + 1).chain(|n| {
//!     if n > 0 {
//!         Either::Right(n * 2)
//!     } else {
//!         Either::Left(format!("{n} is not positive"))
//!     }
//! });
//! assert_eq!(total, Either::Right(42));
//!
//! let failed: Either<String, i32> = Either::Left("boom".to_string());
//! let recovered = failed.map(|n| n + 1).catch(|error| error.len() as i32);
//! assert_eq!(recovered, Either::Right(4));
//! ```

use std::fmt;

use super::maybe::Maybe;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either a success (`Right`) or a failure (`Left`).
///
/// # Type Parameters
///
/// * `L` - The failure payload, any type
/// * `R` - The success payload
///
/// # Examples
///
/// ```rust
/// use railway::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Access
    // =========================================================================

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the held value, keeping the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let length = right.as_ref().map(|s| s.len());
    /// assert_eq!(length, Either::Right(5));
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Applies a function to the success value.
    ///
    /// `Right(r)` becomes `Right(function(r))`. `Left(l)` is returned
    /// unchanged and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the failure value.
    ///
    /// `Left(l)` becomes `Left(function(l))`; `Right(r)` is unchanged. The
    /// variant never changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function returning an `Either` and flattens the result.
    ///
    /// Equivalent to `self.map(function).flatten()`. On `Left` the function
    /// is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// fn half(n: i32) -> Either<String, i32> {
    ///     if n % 2 == 0 {
    ///         Either::Right(n / 2)
    ///     } else {
    ///         Either::Left(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Either::Right(8).chain(half).chain(half), Either::Right(2));
    /// assert_eq!(
    ///     Either::Right(6).chain(half).chain(half),
    ///     Either::Left("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn chain<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Recovers from a failure.
    ///
    /// `Left(l)` becomes `Right(function(l))`. `Right(r)` is returned
    /// unchanged and `function` is never called. This is the only
    /// transition from `Left` to `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let left: Either<String, usize> = Either::Left("oops".to_string());
    /// assert_eq!(left.catch(|error| error.len()), Either::Right(4));
    ///
    /// let right: Either<String, usize> = Either::Right(1);
    /// assert_eq!(right.catch(|error| error.len()), Either::Right(1));
    /// ```
    #[inline]
    pub fn catch<F>(self, function: F) -> Self
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => Self::Right(function(value)),
            right @ Self::Right(_) => right,
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Returns the success value, or `default` on failure.
    #[inline]
    pub fn right_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Moves the success value into a [`Maybe`], dropping any failure.
    ///
    /// This is the explicit boundary for running an `Either`-producing step
    /// inside a `Maybe` chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{Either, Maybe};
    ///
    /// let right: Either<String, i32> = Either::Right(1);
    /// assert_eq!(right.into_maybe(), Maybe::present(1));
    ///
    /// let left: Either<String, i32> = Either::Left("gone".to_string());
    /// assert_eq!(left.into_maybe(), Maybe::empty());
    /// ```
    #[inline]
    pub fn into_maybe(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Empty,
            Self::Right(value) => Maybe::Present(value),
        }
    }

    /// Converts into a standard `Result`, `Right` becoming `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(error) => Err(error),
            Self::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Nested Either Operations
// =============================================================================

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting.
    ///
    /// `Right(inner)` becomes `inner`, so a nested `Left` surfaces as
    /// `Left`. `Left(l)` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let nested: Either<String, Either<String, i32>> = Either::Right(Either::Right(1));
    /// assert_eq!(nested.flatten(), Either::Right(1));
    ///
    /// let inner_failure: Either<String, Either<String, i32>> =
    ///     Either::Right(Either::Left("inner".to_string()));
    /// assert_eq!(inner_failure.flatten(), Either::Left("inner".to_string()));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(inner) => inner,
        }
    }
}

impl<L, V> Either<L, Either<V, V>> {
    /// Removes one level of nesting by taking the inner payload as a success.
    ///
    /// `Right(inner)` becomes `Right` of whatever `inner` holds, even when
    /// `inner` is a `Left`. Use [`Either::flatten`] to keep an inner failure
    /// on the failure track.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let nested: Either<(), Either<String, String>> =
    ///     Either::Right(Either::Left("inner".to_string()));
    /// assert_eq!(nested.flatten_payload(), Either::Right("inner".to_string()));
    /// ```
    #[inline]
    pub fn flatten_payload(self) -> Either<L, V> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(inner) => Either::Right(inner.into_inner()),
        }
    }
}

impl<T> Either<T, T> {
    /// Returns the held value regardless of the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    ///
    /// let recovered: Either<String, String> = Either::Left("Invalid mail".to_string());
    /// assert_eq!(recovered.into_inner(), "Invalid mail");
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(error.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.chain(function)
    }
}

static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Either<std::rc::Rc<()>, i32>: Send, Sync);
