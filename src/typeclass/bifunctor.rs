//! Bifunctor type class - mapping over two type parameters.
//!
//! While `Functor` transforms `F<A>` to `F<B>`, `Bifunctor` transforms
//! `F<A, B>` to `F<C, D>`. For [`Either`], `bimap` is the two-function map:
//! whichever side is present gets its function applied.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functorial::control::Either;
//! use functorial::typeclass::Bifunctor;
//!
//! let left: Either<i32, String> = Either::Left(42);
//! assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::Left(84));
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::Right(5));
//! ```
//!
//! # Relationship with Functor
//!
//! `Either` is right-biased, so `Bifunctor::second` agrees with `Functor::fmap`:
//!
//! ```rust
//! use functorial::control::Either;
//! use functorial::typeclass::{Bifunctor, Functor};
//!
//! let value: Either<String, i32> = Either::Right(42);
//! assert_eq!(value.clone().fmap(|x| x * 2), value.second(|x| x * 2));
//! ```

use crate::control::Either;

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// See module-level documentation for laws and detailed examples.
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    ///
    /// For `Either<L, R>`, `Target<C, D> = Either<C, D>`.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    /// use functorial::typeclass::Bifunctor;
    ///
    /// let either: Either<i32, String> = Either::Left(42);
    /// assert_eq!(either.first(|x| x.to_string()), Either::Left("42".to_string()));
    /// ```
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies two functions to references of both type parameters without consuming self.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Either<C, R>
    where
        F: FnOnce(L) -> C,
    {
        self.map_left(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Either<L, D>
    where
        G: FnOnce(R) -> D,
    {
        self.map(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(&L) -> C,
        G: FnOnce(&R) -> D,
    {
        self.as_ref().bimap(first_function, second_function)
    }
}
