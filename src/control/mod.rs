//! Sum types with short-circuiting combinators.
//!
//! - [`Either`]: A value that is authoritatively one of two types
//! - [`Left`] / [`Right`]: Tags that pick a side when converting into an `Either`
//! - [`Maybe`]: Zero or one value, with checked constructors
//!
//! # Examples
//!
//! ## Short-circuiting chains
//!
//! ```rust
//! use functorial::control::Either;
//!
//! let mut reached = false;
//! let result = Either::<&str, i32>::Left("stop")
//!     .bind(|n| Either::Right(n + 1))
//!     .map(|n| {
//!         reached = true;
//!         n * 2
//!     });
//! assert_eq!(result, Either::Left("stop"));
//! assert!(!reached);
//! ```
//!
//! ## Optional values
//!
//! ```rust
//! use functorial::control::Maybe;
//!
//! let length = Maybe::new("antidisestablishmentarianism")
//!     .select(str::len)
//!     .select(|n| n % 2 == 0);
//! assert_eq!(length, Maybe::new(true));
//! ```

mod either;
mod maybe;

pub use either::{left, right, Either, Left, Right};
pub use maybe::Maybe;
