//! Error types for precondition failures.
//!
//! The checked constructors and operations of [`Maybe`](crate::control::Maybe)
//! and [`Tree`](crate::tree::Tree) accept their arguments as `Option`s and
//! reject an absent argument before doing any work. `Either` never fails and
//! has no error type.

/// Represents a required argument that was absent.
///
/// Returned by the `try_*` entry points of `Maybe` and `Tree`. The check
/// happens before any transformation runs, so an error never leaves a
/// partially built value behind.
///
/// # Examples
///
/// ```rust
/// use functorial::ArgumentNullError;
///
/// let error = ArgumentNullError {
///     parameter_name: "selector",
/// };
/// assert_eq!(format!("{}", error), "`selector` is null.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgumentNullError {
    /// The name of the parameter that was absent.
    pub parameter_name: &'static str,
}

impl ArgumentNullError {
    /// Creates an error for the named parameter.
    #[inline]
    pub const fn new(parameter_name: &'static str) -> Self {
        Self { parameter_name }
    }

    /// Returns `Ok(value)` when present, or an error naming the parameter.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentNullError` when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functorial::ArgumentNullError;
    ///
    /// assert_eq!(ArgumentNullError::require(Some(1), "item"), Ok(1));
    /// assert_eq!(
    ///     ArgumentNullError::require(None::<i32>, "item"),
    ///     Err(ArgumentNullError::new("item"))
    /// );
    /// ```
    #[inline]
    pub fn require<T>(value: Option<T>, parameter_name: &'static str) -> Result<T, Self> {
        value.ok_or(Self { parameter_name })
    }
}

impl std::fmt::Display for ArgumentNullError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}` is null.", self.parameter_name)
    }
}

impl std::error::Error for ArgumentNullError {}
