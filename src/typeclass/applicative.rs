//! Applicative type class - lifting values and combining independent contexts.
//!
//! `Applicative` extends `Functor` with [`Applicative::pure`], which lifts a
//! plain value into the success/presence case, and [`Applicative::map2`],
//! which combines two containers that do not depend on each other. The
//! first absent or failed input decides the result.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Either, Maybe};
//! use railway::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::present(42));
//!
//! let first: Either<&str, i32> = Either::Right(1);
//! let second: Either<&str, i32> = Either::Left("missing");
//! assert_eq!(first.map2(second, |a, b| a + b), Either::Left("missing"));
//! ```

use super::functor::Functor;

/// A type class for functors that can lift values and combine contexts.
pub trait Applicative: Functor {
    /// Lifts a value into the context.
    ///
    /// For `Maybe` this is `Present`; for `Either` it is `Right`.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// The function is only called when both inputs hold a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    /// use railway::typeclass::Applicative;
    ///
    /// let sum = Maybe::present(1).map2(Maybe::present(2), |x, y| x + y);
    /// assert_eq!(sum, Maybe::present(3));
    ///
    /// let missing = Maybe::present(1).map2(Maybe::<i32>::empty(), |x, y| x + y);
    /// assert_eq!(missing, Maybe::empty());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Applies a function held in the context to a value held in the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    /// use railway::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::present(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::present(5)), Maybe::present(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;

    /// Pairs the values of two contexts.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}
