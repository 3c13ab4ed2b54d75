//! # functorial
//!
//! Small algebraic data types for Rust, each with a structure-preserving
//! `map` and the functor laws to go with it.
//!
//! ## Overview
//!
//! - **Either**: a value that is one of two types, with `fold`, `map`,
//!   `bimap`, `bind` and `flatten`
//! - **Maybe**: zero or one value, with checked constructors that reject
//!   absent arguments
//! - **Tree**: an ordered rose tree with stack-safe mapping and structural
//!   equality
//! - **Type classes**: `Functor`, `FunctorMut`, `Bifunctor`, `Monad` and the
//!   `Identity` functor
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Either` and `Maybe`
//! - `tree`: `Tree`
//! - `serde`: Serialize/Deserialize for every container
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use functorial::prelude::*;
//!
//! let value: Either<i32, String> = right("test".to_string()).into();
//! let length = value.map(|s| s.len()).fold(|_| 0, |r| r);
//! assert_eq!(length, 4);
//!
//! assert_eq!(Maybe::new(42).fmap(|x| x.to_string()), Maybe::new("42".to_string()));
//! assert_eq!(Tree::leaf(42).select(|x| *x), Tree::leaf(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every public type and trait.
///
/// # Usage
///
/// ```rust
/// use functorial::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "tree")]
    pub use crate::tree::*;
}

mod error;

pub use error::ArgumentNullError;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "tree")]
pub mod tree;
