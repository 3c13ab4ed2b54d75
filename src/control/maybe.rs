//! Maybe type - an optional value with eager argument checks.
//!
//! `Maybe<T>` holds zero or one `T`. It behaves like `Option<T>` for mapping
//! and chaining, and adds checked entry points (`try_new`, `try_select`,
//! `try_value_or_fallback`) that take their argument as an `Option` and
//! reject an absent one with [`ArgumentNullError`] before doing any work.
//!
//! # Examples
//!
//! ```rust
//! use functorial::control::Maybe;
//!
//! let source = Maybe::new(42);
//! let rendered = source.select(|x| x.to_string());
//! assert_eq!(rendered, Maybe::new("42".to_string()));
//!
//! let empty: Maybe<i32> = Maybe::empty();
//! assert_eq!(empty.value_or_fallback(7), 7);
//! ```

use std::fmt;

use crate::error::ArgumentNullError;
use crate::typeclass::{Functor, FunctorMut, Monad, TypeConstructor};

/// A container holding zero or one value.
///
/// Equality and hashing are structural: two present values compare by their
/// item, and any two empty values are equal.
///
/// # Examples
///
/// ```rust
/// use functorial::control::Maybe;
///
/// assert_eq!(Maybe::<i32>::empty(), Maybe::default());
/// assert_ne!(Maybe::new(1), Maybe::empty());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Maybe<T> {
    item: Option<T>,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty `Maybe`.
    #[inline]
    pub const fn empty() -> Self {
        Self { item: None }
    }

    /// Creates a `Maybe` holding `item`.
    #[inline]
    pub const fn new(item: T) -> Self {
        Self { item: Some(item) }
    }

    /// Creates a `Maybe` holding `item`, rejecting an absent argument.
    ///
    /// Use `Maybe::from(option)` instead when `None` should simply mean "empty".
    ///
    /// # Errors
    ///
    /// Returns `ArgumentNullError` for parameter `item` when `item` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Maybe;
    ///
    /// assert_eq!(Maybe::try_new(Some(42)), Ok(Maybe::new(42)));
    ///
    /// let error = Maybe::<i32>::try_new(None).unwrap_err();
    /// assert_eq!(error.parameter_name, "item");
    /// ```
    #[inline]
    pub fn try_new(item: Option<T>) -> Result<Self, ArgumentNullError> {
        ArgumentNullError::require(item, "item").map(Self::new)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn has_item(&self) -> bool {
        self.item.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    /// Returns a reference to the value, if present.
    #[inline]
    pub const fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    /// Converts into the equivalent `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.item
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Transforms the value, if present.
    ///
    /// An empty `Maybe` stays empty and `selector` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Maybe;
    ///
    /// assert_eq!(Maybe::new("corge").select(str::len), Maybe::new(5));
    /// assert_eq!(Maybe::<&str>::empty().select(str::len), Maybe::empty());
    /// ```
    #[inline]
    pub fn select<U, F>(self, selector: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe {
            item: self.item.map(selector),
        }
    }

    /// Transforms a reference to the value, leaving `self` untouched.
    #[inline]
    pub fn select_ref<U, F>(&self, selector: F) -> Maybe<U>
    where
        F: FnOnce(&T) -> U,
    {
        Maybe {
            item: self.item.as_ref().map(selector),
        }
    }

    /// Transforms the value with a selector that must be present.
    ///
    /// The selector is checked first, so an absent selector fails even
    /// when `self` is empty.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentNullError` for parameter `selector` when `selector` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Maybe;
    ///
    /// let doubled = Maybe::new(21).try_select(Some(|n: i32| n * 2));
    /// assert_eq!(doubled, Ok(Maybe::new(42)));
    ///
    /// let missing = Maybe::new(21).try_select::<i32, fn(i32) -> i32>(None);
    /// assert!(missing.is_err());
    /// ```
    #[inline]
    pub fn try_select<U, F>(self, selector: Option<F>) -> Result<Maybe<U>, ArgumentNullError>
    where
        F: FnOnce(T) -> U,
    {
        let selector = ArgumentNullError::require(selector, "selector")?;
        Ok(self.select(selector))
    }

    /// Chains a computation that may itself produce an empty `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Maybe;
    ///
    /// let parsed = Maybe::new("42").bind(|s| Maybe::from(s.parse::<i32>().ok()));
    /// assert_eq!(parsed, Maybe::new(42));
    ///
    /// let rejected = Maybe::new("x").bind(|s| Maybe::from(s.parse::<i32>().ok()));
    /// assert_eq!(rejected, Maybe::empty());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.item {
            Some(item) => function(item),
            None => Maybe::empty(),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value if present, otherwise `fallback`.
    #[inline]
    pub fn value_or_fallback(self, fallback: T) -> T {
        self.item.unwrap_or(fallback)
    }

    /// Returns the value if present, otherwise `fallback`, which must be present.
    ///
    /// The fallback is checked eagerly, even when the value is present and the
    /// fallback would not be used.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentNullError` for parameter `fallback` when `fallback` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::control::Maybe;
    ///
    /// assert_eq!(Maybe::empty().try_value_or_fallback(Some("bar")), Ok("bar"));
    /// assert!(Maybe::new("foo").try_value_or_fallback(None).is_err());
    /// ```
    #[inline]
    pub fn try_value_or_fallback(self, fallback: Option<T>) -> Result<T, ArgumentNullError> {
        let fallback = ArgumentNullError::require(fallback, "fallback")?;
        Ok(self.value_or_fallback(fallback))
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.item {
            Some(item) => formatter.debug_tuple("Maybe").field(item).finish(),
            None => write!(formatter, "Maybe(<empty>)"),
        }
    }
}

/// Renders `Maybe(<value>)`, or `Maybe(<empty>)` when empty.
impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.item {
            Some(item) => write!(formatter, "Maybe({item})"),
            None => write!(formatter, "Maybe(<empty>)"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option`, mapping `None` to an empty `Maybe`.
    #[inline]
    fn from(item: Option<T>) -> Self {
        Self { item }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.item
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.select(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.select_ref(function)
    }
}

impl<T> FunctorMut for Maybe<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnMut(T) -> B,
    {
        self.select(function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnMut(&T) -> B,
    {
        self.select_ref(function)
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::new(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.bind(function)
    }
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
