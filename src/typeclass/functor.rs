//! Functor type class - mapping over container values.
//!
//! A functor is a container whose contents can be transformed without
//! changing its shape: a present `Maybe` stays present, a `Left` stays a
//! `Left`, and a `Tree` keeps every node in place.
//!
//! # Laws
//!
//! All implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function over a functor should return an equivalent functor:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence should be equivalent to mapping their composition:
//!
//! ```text
//! fa.fmap(g).fmap(f) == fa.fmap(|x| f(g(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functorial::control::Maybe;
//! use functorial::typeclass::Functor;
//!
//! let present = Maybe::new(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Maybe::new("5".to_string()));
//!
//! // Emptiness is preserved
//! let empty: Maybe<i32> = Maybe::empty();
//! assert_eq!(empty.fmap(|n| n.to_string()), Maybe::empty());
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for containers holding at most one value that can be mapped.
///
/// See the module documentation for the laws every implementation obeys.
///
/// # Examples
///
/// ```rust
/// use functorial::typeclass::{Functor, Identity};
///
/// let x = Identity::new(5);
/// let y: Identity<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Identity::new("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    /// use functorial::typeclass::Functor;
    ///
    /// let x: Either<String, i32> = Either::Right(5);
    /// assert_eq!(x.fmap(|n| n * 2), Either::Right(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor must stay available, or its contents are not `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Maybe;
    /// use functorial::typeclass::Functor;
    ///
    /// let x = Maybe::new("hello".to_string());
    /// let y: Maybe<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Maybe::new(5));
    /// // x is still available here
    /// assert!(x.has_item());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Maybe;
    /// use functorial::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::new(5).replace("replaced"), Maybe::new("replaced"));
    /// assert_eq!(Maybe::<i32>::empty().replace("replaced"), Maybe::empty());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// A type class for containers that may hold many values.
///
/// `Functor::fmap` takes a `FnOnce`, which is enough for a single slot.
/// Containers such as [`Tree`](crate::tree::Tree) call the function once per
/// element, so they map through `fmap_mut` with a `FnMut` instead.
///
/// The same two laws apply with `fmap_mut` in place of `fmap`.
///
/// # Examples
///
/// ```rust
/// use functorial::tree::Tree;
/// use functorial::typeclass::FunctorMut;
///
/// let tree = Tree::create(1, [Tree::leaf(2), Tree::leaf(3)]);
/// let doubled = tree.fmap_mut(|n| n * 2);
/// assert_eq!(doubled, Tree::create(2, [Tree::leaf(4), Tree::leaf(6)]));
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies a mutable function to each element, consuming the container.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a mutable function to references of each element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::tree::Tree;
    /// use functorial::typeclass::FunctorMut;
    ///
    /// let tree = Tree::create("ab", [Tree::leaf("cde")]);
    /// let lengths = tree.fmap_ref_mut(|s| s.len());
    /// assert_eq!(lengths, Tree::create(2, [Tree::leaf(3)]));
    /// ```
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}

impl<A> FunctorMut for Identity<A> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Identity<B>
    where
        F: FnMut(A) -> B,
    {
        self.fmap(function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnMut(&A) -> B,
    {
        self.fmap_ref(function)
    }
}
