//! Monad type class - sequencing computations within a context.
//!
//! `flat_map` lets the result of one step decide the next step. For `Maybe`
//! and `Either` this is the short-circuiting chain: once a step produces an
//! empty `Maybe` or a `Left`, every later step is skipped.
//!
//! Only `pure` and `flat_map` are provided; there is no applicative layer.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functorial::control::Either;
//! use functorial::typeclass::Monad;
//!
//! fn parse_positive(input: &str) -> Either<String, i32> {
//!     match input.parse::<i32>() {
//!         Ok(n) if n > 0 => Either::Right(n),
//!         _ => Either::Left(format!("not positive: {input}")),
//!     }
//! }
//!
//! let result = Either::<String, &str>::Right("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Either::Right(n * 2));
//! assert_eq!(result, Either::Right(84));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for types that support sequencing of computations.
///
/// See the module documentation for the laws.
pub trait Monad: Functor {
    /// Lifts a value into the monad.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Maybe;
    /// use functorial::typeclass::Monad;
    ///
    /// assert_eq!(<Maybe<()>>::pure(42), Maybe::new(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Maybe;
    /// use functorial::typeclass::Monad;
    ///
    /// let halved = Maybe::new(10).flat_map(|n| {
    ///     if n % 2 == 0 { Maybe::new(n / 2) } else { Maybe::empty() }
    /// });
    /// assert_eq!(halved, Maybe::new(5));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is a failure (an empty `Maybe`, a `Left`), the failure
    /// propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    /// use functorial::typeclass::Monad;
    ///
    /// let ok: Either<&str, i32> = Either::Right(5);
    /// assert_eq!(ok.then(Either::Right("hello")), Either::Right("hello"));
    ///
    /// let failed: Either<&str, i32> = Either::Left("boom");
    /// assert_eq!(failed.then(Either::Right("hello")), Either::Left("boom"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}
