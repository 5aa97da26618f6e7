//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Either<L, _>` as type
//! constructors directly. [`TypeConstructor`] works around this with a GAT,
//! which is what lets [`Functor`](super::Functor) and
//! [`Monad`](super::Monad) change the payload type of a container.
//!
//! # Example
//!
//! ```rust
//! use railway::control::Maybe;
//! use railway::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Maybe<i32> = Maybe::present(42);
//! let empty: Maybe<String> = transform_type(present);
//! assert!(empty.is_absent());
//! ```

/// A trait representing a type constructor.
///
/// The implementing type is a type constructor applied to some type `A`,
/// for example `Maybe<A>` or `Either<L, A>`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`; for `Either<String, i32>` it is the
    /// right (success) type `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Either, Maybe};

    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn either_inner_type_is_the_right_type() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Either<String, i32>>();
    }

    #[test]
    fn either_with_type_preserves_left_type() {
        fn assert_either_with_type<L, R, B>()
        where
            Either<L, R>: TypeConstructor<Inner = R, WithType<B> = Either<L, B>>,
        {
        }

        assert_either_with_type::<String, i32, bool>();
        assert_either_with_type::<(), String, i32>();
        assert_either_with_type::<std::io::Error, Vec<u8>, String>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Maybe<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_maybe_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_maybe_bool::<Step2>();
    }
}
