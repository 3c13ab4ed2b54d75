//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] works around this with a generic associated type, which
//! is what lets [`Functor`](super::Functor) and [`Monad`](super::Monad) name
//! "the same container holding a different type".
//!
//! # Example
//!
//! ```rust
//! use functorial::typeclass::{Identity, TypeConstructor};
//!
//! fn relabel<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let relabelled: Identity<String> = relabel(Identity::new(42));
//! assert_eq!(relabelled, Identity(String::new()));
//! ```

/// A trait representing a type constructor.
///
/// The implementing type is a constructor applied to some type, for example
/// `Maybe<i32>` or `Tree<String>`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// should be `F` itself.
///
/// # Example
///
/// ```rust
/// use functorial::control::Maybe;
/// use functorial::typeclass::TypeConstructor;
///
/// fn example<T: TypeConstructor<Inner = i32>>() {}
///
/// example::<Maybe<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`; for a right-biased `Either<L, R>` it is `R`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// The bound keeps the result a type constructor, so transformations chain.
    type WithType<B>: TypeConstructor<Inner = B>;
}
