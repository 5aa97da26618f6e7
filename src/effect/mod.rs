//! Error handling as a type class.
//!
//! - [`MonadError`]: Raising failures and recovering from them
//!
//! # Examples
//!
//! ```rust
//! use railway::control::Either;
//! use railway::effect::MonadError;
//!
//! let computation: Either<String, i32> = Either::Right(42);
//! let with_recovery = <Either<String, i32>>::catch_error(computation, |e| {
//!     Either::Right(e.len() as i32)
//! });
//! assert_eq!(with_recovery, Either::Right(42));
//! ```

mod monad_error;

pub use monad_error::MonadError;
