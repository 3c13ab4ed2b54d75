//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. By convention `Right` carries
//! the primary (successful) value and `Left` the alternative (error) value,
//! and every single-sided combinator is right-biased.
//!
//! The [`Left`] and [`Right`] wrapper structs tag a bare value with its side.
//! Converting a wrapper into an `Either` is the only implicit construction
//! path; a bare value never converts, so `Either<i32, i32>` is never
//! ambiguous:
//!
//! ```compile_fail
//! use functorial::control::Either;
//!
//! let ambiguous: Either<i32, i32> = 5.into();
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functorial::control::{right, Either};
//!
//! // Constructing through the tagged wrapper
//! let value: Either<i32, String> = right("test".to_string()).into();
//!
//! // Eliminating with fold
//! let rendered = value.fold(|l| format!("L{l}"), |r| format!("R{r}"));
//! assert_eq!(rendered, "Rtest");
//!
//! // Chaining short-circuits on the first Left
//! let length = Either::<String, &str>::Right("test")
//!     .bind(|s| Either::Right(s.len()))
//!     .fold(|_| 0, |n| n);
//! assert_eq!(length, 4);
//! ```

use std::fmt;

use crate::typeclass::{Functor, FunctorMut, Monad, TypeConstructor};

/// A value that can be one of two types.
///
/// Exactly one payload is ever present. There is no inactive field to read:
/// the only way to reach a payload is through the variant that holds it.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use functorial::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure or the alternative.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

/// A value tagged as belonging to the left side of an [`Either`].
///
/// # Examples
///
/// ```rust
/// use functorial::control::{Either, Left};
///
/// let value: Either<i32, i32> = Left(1).into();
/// assert_eq!(value, Either::Left(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Left<L>(pub L);

/// A value tagged as belonging to the right side of an [`Either`].
///
/// # Examples
///
/// ```rust
/// use functorial::control::{Either, Right};
///
/// let value: Either<i32, i32> = Right(1).into();
/// assert_eq!(value, Either::Right(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Right<R>(pub R);

/// Tags a value as a left value.
///
/// # Examples
///
/// ```rust
/// use functorial::control::{left, Either};
///
/// let value: Either<i32, String> = left(0).into();
/// assert!(value.is_left());
/// ```
#[inline]
pub const fn left<L>(value: L) -> Left<L> {
    Left(value)
}

/// Tags a value as a right value.
#[inline]
pub const fn right<R>(value: R) -> Right<R> {
    Right(value)
}

impl<L> Left<L> {
    /// Returns a reference to the tagged value.
    #[inline]
    pub const fn value(&self) -> &L {
        &self.0
    }

    /// Consumes the wrapper and returns the tagged value.
    #[inline]
    pub fn into_inner(self) -> L {
        self.0
    }
}

impl<R> Right<R> {
    /// Returns a reference to the tagged value.
    #[inline]
    pub const fn value(&self) -> &R {
        &self.0
    }

    /// Consumes the wrapper and returns the tagged value.
    #[inline]
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Left` value.
    ///
    /// Equivalent to `Either::Left(value)`; useful as a function value.
    #[inline]
    pub const fn from_left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right` value.
    #[inline]
    pub const fn from_right(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// Exactly one of the functions is invoked, chosen by the variant, and
    /// its result is returned. Every other combinator on `Either` is built
    /// on top of this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(1);
    /// assert_eq!(left.fold(|l| format!("Value is {l}"), |r| format!("Value is {r}")), "Value is 1");
    ///
    /// let right: Either<i32, String> = Either::Right("test".to_string());
    /// assert_eq!(right.fold(|l| l.to_string(), |r| r), "test");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        self.fold(Some, |_| None)
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    #[inline]
    pub fn right(self) -> Option<R> {
        self.fold(|_| None, Some)
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub fn left_ref(&self) -> Option<&L> {
        self.as_ref().left()
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub fn right_ref(&self) -> Option<&R> {
        self.as_ref().right()
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value if present.
    ///
    /// A `Left` is passed through unchanged and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("test".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(4));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map(|s| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.fold(Either::Left, |value| Either::Right(function(value)))
    }

    /// Alias for [`map`](Self::map), spelled like `Maybe::select` and `Tree::select`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("test");
    /// assert_eq!(right.select(str::len), Either::Right(4));
    /// ```
    #[inline]
    pub fn select<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.map(function)
    }

    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.fold(|value| Either::Left(function(value)), Either::Right)
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        self.fold(
            |value| Either::Left(left_function(value)),
            |value| Either::Right(right_function(value)),
        )
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Chains a computation that may itself produce a `Left`.
    ///
    /// On a `Right`, returns `function(value)` as is, without wrapping it
    /// again. On a `Left`, returns the left value re-typed and never calls
    /// `function`, so every later step of a chain is skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    ///
    /// fn non_empty(s: &str) -> Either<String, &str> {
    ///     if s.is_empty() { Either::Left("empty".to_string()) } else { Either::Right(s) }
    /// }
    ///
    /// let ok = Either::<String, &str>::Right("test").bind(non_empty).map(str::len);
    /// assert_eq!(ok, Either::Right(4));
    ///
    /// let failed = Either::<String, &str>::Right("").bind(non_empty).map(str::len);
    /// assert_eq!(failed, Either::Left("empty".to_string()));
    /// ```
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.fold(Either::Left, function)
    }

    /// Alias for [`bind`](Self::bind), matching `Option::and_then` and `Result::and_then`.
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.bind(function)
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the Left and Right variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        self.fold(Either::Right, Either::Left)
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        self.fold(
            |value| value,
            |_| panic!("called `Either::unwrap_left()` on a `Right` value"),
        )
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        self.fold(
            |_| panic!("called `Either::unwrap_right()` on a `Left` value"),
            |value| value,
        )
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting from the right side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    ///
    /// let nested: Either<&str, Either<&str, i32>> = Either::Right(Either::Right(1));
    /// assert_eq!(nested.flatten(), Either::Right(1));
    ///
    /// let inner_left: Either<&str, Either<&str, i32>> = Either::Right(Either::Left("inner"));
    /// assert_eq!(inner_left.flatten(), Either::Left("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a Right.
    #[inline]
    pub fn left_or_default(self) -> L {
        self.fold(|value| value, |_| L::default())
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or default if this is a Left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.right_or_default(), String::new());
    /// ```
    #[inline]
    pub fn right_or_default(self) -> R {
        self.fold(|_| R::default(), |value| value)
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

/// Renders `Left(<value>)` or `Right(<value>)`.
///
/// # Examples
///
/// ```rust
/// use functorial::control::Either;
///
/// let right: Either<i32, String> = Either::Right("hello".to_string());
/// assert_eq!(right.to_string(), "Right(hello)");
/// ```
impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

impl<L: fmt::Display> fmt::Display for Left<L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Left({})", self.0)
    }
}

impl<R: fmt::Display> fmt::Display for Right<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Right({})", self.0)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Left<L>> for Either<L, R> {
    #[inline]
    fn from(value: Left<L>) -> Self {
        Self::Left(value.0)
    }
}

impl<L, R> From<Right<R>> for Either<L, R> {
    #[inline]
    fn from(value: Right<R>) -> Self {
        Self::Right(value.0)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    ///
    /// let err: Result<i32, String> = Err("error".to_string());
    /// let either: Either<String, i32> = err.into();
    /// assert_eq!(either, Either::Left("error".to_string()));
    /// ```
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.fold(Err, Ok)
    }
}

// =============================================================================
// Iteration (right-biased)
// =============================================================================

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    /// Yields the right value once, or nothing for a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(1);
    /// assert_eq!(right.into_iter().collect::<Vec<_>>(), vec![1]);
    ///
    /// let left: Either<&str, i32> = Either::Left("no");
    /// assert_eq!(left.into_iter().count(), 0);
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.right().into_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = std::option::IntoIter<&'a R>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.right_ref().into_iter()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        self.as_ref().bimap(L::clone, function)
    }
}

impl<L: Clone, R> FunctorMut for Either<L, R> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnMut(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnMut(&R) -> B,
    {
        self.fmap_ref(function)
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.bind(function)
    }
}

static_assertions::assert_impl_all!(Either<i32, String>: Send, Sync);
static_assertions::assert_impl_all!(Left<String>: Send, Sync);
static_assertions::assert_impl_all!(Right<String>: Send, Sync);
