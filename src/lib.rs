//! # railway
//!
//! Two small containers for values that may be absent or may have failed,
//! plus an adapter that turns fallible operations into container-producing
//! ones.
//!
//! ## Overview
//!
//! - **`Maybe`**: an optional value. `Empty` short-circuits every
//!   transformation and only `get_or_else` leaves the container.
//! - **`Either`**: a success (`Right`) or failure (`Left`). `Left`
//!   short-circuits `map`, `chain` and `flatten`; `catch` recovers it.
//! - **`try_catch`**: wraps an operation so a failure becomes `Left` and a
//!   normal return becomes `Right`.
//! - **Type classes**: `Functor`, `Applicative`, `Monad` and `MonadError`,
//!   implemented by both containers.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Maybe`, `Either` and `try_catch`
//! - `effect`: `MonadError`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use railway::prelude::*;
//!
//! let parse = try_catch(|text: &str| text.parse::<i32>());
//!
//! let doubled = Maybe::new(Some("21"))
//!     .chain(|text| parse(text).map(|n| n * 2).into_maybe())
//!     .get_or_else(0);
//! assert_eq!(doubled, 42);
//!
//! let fallback = Maybe::new(Some("x"))
//!     .chain(|text| parse(text).map(|n| n * 2).catch(|_| -1).into_maybe())
//!     .get_or_else(0);
//! assert_eq!(fallback, -1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use railway::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
