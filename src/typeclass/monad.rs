//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with [`Monad::flat_map`], where the next
//! step depends on the value produced by the previous one. For `Maybe` and
//! `Either` this is the `chain` operation: an `Empty` or a `Left` stops the
//! sequence and every later step is skipped.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Maybe;
//! use railway::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     Maybe::new(s.parse::<i32>().ok().filter(|&n| n > 0))
//! }
//!
//! let result = Maybe::present("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::present(n * 2));
//! assert_eq!(result, Maybe::present(84));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// # Laws
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// m.flat_map(Self::pure) == m
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    /// use railway::typeclass::Monad;
    ///
    /// let x: Either<String, i32> = Either::Right(5);
    /// assert_eq!(x.flat_map(|n| Either::Right(n * 2)), Either::Right(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` matching the naming of `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// If `self` is absent or failed, that propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    /// use railway::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::present(5).then(Maybe::present("hello")), Maybe::present("hello"));
    /// assert_eq!(Maybe::<i32>::empty().then(Maybe::present("hello")), Maybe::empty());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
