//! Type class traits for mappable containers.
//!
//! - [`Functor`]: Mapping over a single-slot container
//! - [`FunctorMut`]: Mapping with mutable functions for multi-element containers
//! - `Bifunctor`: Mapping over either side of a two-parameter type (with `control`)
//! - [`Monad`]: Sequencing computations with short-circuiting
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to name "the same
//! container over another type", which is all `Functor` and `Monad` need.
//!
//! ## Foundation Types
//!
//! - [`Identity`]: the identity functor, the smallest mappable container
//!
//! # Examples
//!
//! ```rust
//! use functorial::typeclass::{Functor, Identity};
//!
//! let reversed = Identity::new(1337)
//!     .fmap(|n| n.to_string())
//!     .fmap(|s| s.chars().rev().collect::<String>());
//! assert_eq!(reversed, Identity::new("7331".to_string()));
//! ```

#[cfg(feature = "control")]
mod bifunctor;
mod functor;
mod higher;
mod identity;
mod monad;

#[cfg(feature = "control")]
pub use bifunctor::Bifunctor;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
