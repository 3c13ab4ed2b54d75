//! Identity wrapper type - the identity functor.
//!
//! `Identity` is the smallest container that can be mapped over: one value,
//! no extra behaviour. It is the plain reference point against which the
//! functor laws are stated before they are checked on `Maybe`, `Either` and
//! `Tree`.

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use functorial::typeclass::{Functor, Identity};
///
/// let wrapped = Identity::new(42);
/// let rendered = wrapped.fmap(|n| n.to_string());
/// assert_eq!(rendered, Identity::new("42".to_string()));
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// assert_eq!(x.as_inner(), "hello");
    /// ```
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
