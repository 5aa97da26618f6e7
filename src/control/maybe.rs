//! Maybe type - a value that may be absent.
//!
//! [`Maybe<T>`] is either `Present(T)` or `Empty`. Every transformation on
//! `Empty` is skipped without calling the supplied function, so a chain of
//! lookups needs no null check between steps. [`Maybe::get_or_else`] is the
//! way out of the container.
//!
//! Raw nullable values are classified through [`IntoMaybe`]: `Option::None`
//! and `Maybe::Empty` both become `Empty`, so there is a single notion of
//! absence.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use railway::control::Maybe;
//!
//! let mut user = HashMap::new();
//! user.insert("mail", "bar@example.com");
//!
//! let domain = Maybe::new(Some(&user))
//!     .map_nullable(|record| record.get("mail").copied())
//!     .map_nullable(|mail| mail.split_once('@'))
//!     .map(|(_, domain)| domain)
//!     .get_or_else("unknown");
//! assert_eq!(domain, "example.com");
//!
//! let missing: Maybe<&HashMap<&str, &str>> = Maybe::new(None);
//! assert_eq!(
//!     missing.map_nullable(|record| record.get("mail").copied()).get_or_else("no mail"),
//!     "no mail"
//! );
//! ```

use super::either::Either;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either present or absent.
///
/// # Examples
///
/// ```rust
/// use railway::control::Maybe;
///
/// let present = Maybe::present(5);
/// assert_eq!(present.map(|n| n * 2).get_or_else(0), 10);
///
/// let empty: Maybe<i32> = Maybe::empty();
/// assert_eq!(empty.map(|n| n * 2).get_or_else(0), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// No value.
    Empty,
    /// A held value.
    Present(T),
}

/// Classification of raw values into [`Maybe`].
///
/// Implementors decide which of their values count as absent. Every
/// absent-shaped value maps to `Maybe::Empty`.
pub trait IntoMaybe {
    /// The type of the value when present.
    type Value;

    /// Classifies `self` as present or empty.
    fn into_maybe(self) -> Maybe<Self::Value>;
}

impl<T> IntoMaybe for Option<T> {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        match self {
            Some(value) => Maybe::Present(value),
            None => Maybe::Empty,
        }
    }
}

impl<T> IntoMaybe for Maybe<T> {
    type Value = T;

    #[inline]
    fn into_maybe(self) -> Self {
        self
    }
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Classifies a raw nullable value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// assert_eq!(Maybe::new(Some(1)), Maybe::present(1));
    /// assert_eq!(Maybe::<i32>::new(None), Maybe::empty());
    /// ```
    #[inline]
    pub fn new<N>(raw: N) -> Self
    where
        N: IntoMaybe<Value = T>,
    {
        raw.into_maybe()
    }

    /// Creates a `Maybe` holding `value`.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an empty `Maybe`.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if no value is held.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if a value is held.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns a reference to the held value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Borrows the held value without consuming the container.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Empty => Maybe::Empty,
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Applies a function to the held value.
    ///
    /// On `Empty` the function is never called and `Empty` is returned. The
    /// result is kept as is; use [`Maybe::map_nullable`] when an absent
    /// result such as `None` should become `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// assert_eq!(Maybe::present("abc").map(str::len), Maybe::present(3));
    /// assert_eq!(Maybe::<&str>::empty().map(str::len), Maybe::empty());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Applies a function whose result is classified like [`Maybe::new`].
    ///
    /// An absent-shaped result (such as `None`) yields `Empty` rather than a
    /// present container holding the absence. On `Empty` the function is
    /// never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// let digits = Maybe::present("7").map_nullable(|s| s.parse::<u8>().ok());
    /// assert_eq!(digits, Maybe::present(7));
    ///
    /// let letters = Maybe::present("x").map_nullable(|s| s.parse::<u8>().ok());
    /// assert!(letters.is_absent());
    /// ```
    #[inline]
    pub fn map_nullable<N, F>(self, function: F) -> Maybe<N::Value>
    where
        N: IntoMaybe,
        F: FnOnce(T) -> N,
    {
        match self {
            Self::Present(value) => function(value).into_maybe(),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Applies a function returning a `Maybe` and flattens the result.
    ///
    /// Equivalent to `self.map(function).flatten()`. On `Empty` the function
    /// is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// fn first_char(s: &str) -> Maybe<char> {
    ///     Maybe::new(s.chars().next())
    /// }
    ///
    /// assert_eq!(Maybe::present("hi").chain(first_char), Maybe::present('h'));
    /// assert_eq!(Maybe::present("").chain(first_char), Maybe::empty());
    /// ```
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => Maybe::Empty,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the held value, or `default` when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// assert_eq!(Maybe::present("mail").get_or_else("no mail"), "mail");
    /// assert_eq!(Maybe::empty().get_or_else("no mail"), "no mail");
    /// ```
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => default,
        }
    }

    /// Returns the held value, or computes one when empty.
    #[inline]
    pub fn get_or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Empty => default(),
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Moves into an [`Either`], using `error` as the failure when empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::present(1).ok_or("missing"), Either::Right(1));
    /// assert_eq!(Maybe::<i32>::empty().ok_or("missing"), Either::Left("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Either<E, T> {
        match self {
            Self::Present(value) => Either::Right(value),
            Self::Empty => Either::Left(error),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes exactly one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    ///
    /// assert_eq!(Maybe::present(Maybe::present(1)).flatten(), Maybe::present(1));
    /// assert_eq!(Maybe::present(Maybe::<i32>::empty()).flatten(), Maybe::empty());
    /// assert_eq!(Maybe::<Maybe<i32>>::empty().flatten(), Maybe::empty());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Empty => Maybe::Empty,
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.into_maybe()
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Maybe::Present(b)) => Maybe::Present(function(a, b)),
            _ => Maybe::Empty,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.chain(function)
    }
}

static_assertions::assert_impl_all!(Maybe<std::cell::Cell<u8>>: Send, Default);
