//! Containers for absent and failing values.
//!
//! - [`Maybe`]: A value that may be absent
//! - [`Either`]: A success (`Right`) or a failure (`Left`)
//! - [`try_catch`] / [`try_catch_unwind`]: Adapt fallible operations so
//!   they return `Either`
//!
//! The two containers are independent. Crossing from one to the other is
//! always explicit: [`Either::into_maybe`] drops a failure, and
//! [`Maybe::ok_or`] supplies one.
//!
//! # Examples
//!
//! ## Absence short-circuits
//!
//! ```rust
//! use railway::control::Maybe;
//!
//! let length = Maybe::<&str>::new(None)
//!     .map(|text| text.len())
//!     .get_or_else(0);
//! assert_eq!(length, 0);
//! ```
//!
//! ## Failure short-circuits until caught
//!
//! ```rust
//! use railway::control::{Either, try_catch};
//!
//! let parse = try_catch(|text: &str| text.parse::<i32>().map_err(|e| e.to_string()));
//!
//! let message = parse("oops")
//!     .map(|n| n * 2)
//!     .map(|n| n.to_string())
//!     .catch(|error| format!("failed: {error}"));
//! assert_eq!(message, Either::Right("failed: invalid digit found in string".to_string()));
//! ```

mod either;
mod maybe;
mod try_catch;

pub use either::Either;
pub use maybe::{IntoMaybe, Maybe};
pub use try_catch::{PanicPayload, panic_message, try_catch, try_catch_unwind};
