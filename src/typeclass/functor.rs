//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to its inner value while keeping
//! its shape: a present `Maybe` stays present, a `Left` stays `Left`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Maybe;
//! use railway::typeclass::Functor;
//!
//! let transformed: Maybe<String> = Maybe::present(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::present("5".to_string()));
//!
//! let empty: Maybe<i32> = Maybe::empty();
//! assert_eq!(empty.fmap(|n| n.to_string()), Maybe::empty());
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ```text
/// fa.fmap(|x| x) == fa
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Either;
    /// use railway::typeclass::Functor;
    ///
    /// let x: Either<String, i32> = Either::Right(5);
    /// assert_eq!(x.fmap(|n| n * 2), Either::Right(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// The functor is left intact, which is useful when the inner type does
    /// not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    /// use railway::typeclass::Functor;
    ///
    /// let x = Maybe::present("hello".to_string());
    /// let y: Maybe<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Maybe::present(5));
    /// assert!(x.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Maybe;
    /// use railway::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::present(5).replace("replaced"), Maybe::present("replaced"));
    /// assert_eq!(Maybe::<i32>::empty().replace("replaced"), Maybe::empty());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
