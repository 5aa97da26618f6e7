//! Type class traits shared by the containers.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! so the traits above can change a container's payload type.
//!
//! # Examples
//!
//! ```rust
//! use railway::control::{Either, Maybe};
//! use railway::typeclass::{Functor, Monad};
//!
//! fn double_all<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     container.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::present(2)), Maybe::present(4));
//! assert_eq!(double_all(Either::<&str, i32>::Left("no")), Either::Left("no"));
//!
//! let chained = Either::<&str, i32>::Right(3).flat_map(|n| Either::Right(n + 1));
//! assert_eq!(chained, Either::Right(4));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
