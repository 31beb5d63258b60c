//! Optional type - a value that may or may not be present.
//!
//! This module provides the `Optional<T>` type, the per-step result of the
//! [`LazyIterator`](crate::iter::LazyIterator) protocol. Every call to `next`
//! answers with either `Present(value)` (one element was produced) or
//! `Absent` (nothing is available).
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::optional::Optional;
//!
//! let present = Optional::present(42);
//! let absent: Optional<i32> = Optional::absent();
//!
//! assert!(present.is_present());
//! assert!(absent.is_absent());
//!
//! assert_eq!(present.map(|x| x * 2), Optional::Present(84));
//! assert_eq!(absent.unwrap_or(0), 0);
//! ```

use std::fmt;

use super::error::AbsentValueError;

/// A value of type `T`, or nothing.
///
/// `Optional<T>` is a two-variant sum type. An `Absent` value never exposes
/// a `T`, and a `Present` value yields the same `T` on every inspection.
///
/// # Type Parameters
///
/// * `T` - The type of the held value
///
/// # Examples
///
/// ```rust
/// use lazyseq::optional::Optional;
///
/// let value = Optional::present("hello");
/// match value {
///     Optional::Present(text) => assert_eq!(text, "hello"),
///     Optional::Absent => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// Exactly one value.
    Present(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a present optional holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::optional::Optional;
    ///
    /// assert_eq!(Optional::present(1), Optional::Present(1));
    /// ```
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absent optional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::optional::Optional;
    ///
    /// let absent: Optional<i32> = Optional::absent();
    /// assert!(absent.is_absent());
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is held.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::optional::Optional;
    ///
    /// assert!(Optional::present(3).is_present());
    /// assert!(!Optional::<i32>::absent().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is held.
    ///
    /// Always the complement of [`is_present`](Self::is_present).
    #[inline]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrows the held value, producing an `Optional<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::optional::Optional;
    ///
    /// let text = Optional::present(String::from("lazy"));
    /// assert_eq!(text.as_ref().map(|s| s.len()), Optional::Present(4));
    /// assert!(text.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the held value, consuming the optional.
    ///
    /// # Panics
    ///
    /// Panics if the optional is `Absent`. Extracting from an absent optional
    /// is a logic error in the caller, not a recoverable condition; use
    /// [`try_unwrap`](Self::try_unwrap) or [`unwrap_or`](Self::unwrap_or)
    /// when absence is expected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::optional::Optional;
    ///
    /// assert_eq!(Optional::present(7).unwrap(), 7);
    /// ```
    ///
    /// ```rust,should_panic
    /// use lazyseq::optional::Optional;
    ///
    /// let absent: Optional<i32> = Optional::absent();
    /// absent.unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("called `Optional::unwrap()` on an `Absent` value"),
        }
    }

    /// Returns the held value, panicking with `message` if absent.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the optional is `Absent`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{message}"),
        }
    }

    /// Returns the held value, or an [`AbsentValueError`] if absent.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValueError`] when the optional is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::optional::{AbsentValueError, Optional};
    ///
    /// assert_eq!(Optional::present(5).try_unwrap(), Ok(5));
    /// assert_eq!(Optional::<i32>::absent().try_unwrap(), Err(AbsentValueError));
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, AbsentValueError> {
        self.ok_or(AbsentValueError)
    }

    /// Converts into a `Result`, mapping `Absent` to `Err(error)`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` when the optional is `Absent`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error),
        }
    }

    /// Returns the held value, or `default` if absent.
    ///
    /// `default` is evaluated eagerly; use
    /// [`unwrap_or_else`](Self::unwrap_or_else) for a lazy fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::optional::Optional;
    ///
    /// assert_eq!(Optional::present(1).unwrap_or(9), 1);
    /// assert_eq!(Optional::absent().unwrap_or(9), 9);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the held value, or the result of `fallback` if absent.
    ///
    /// `fallback` is not invoked when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::optional::Optional;
    /// use std::cell::Cell;
    ///
    /// let calls = Cell::new(0);
    /// let fallback = || {
    ///     calls.set(calls.get() + 1);
    ///     0
    /// };
    ///
    /// assert_eq!(Optional::present(3).unwrap_or_else(fallback), 3);
    /// assert_eq!(calls.get(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Moves the value out, leaving `Absent` in its place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::optional::Optional;
    ///
    /// let mut slot = Optional::present(1);
    /// assert_eq!(slot.take(), Optional::Present(1));
    /// assert_eq!(slot, Optional::Absent);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Absent)
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the held value if present.
    ///
    /// Returns `Present(function(value))`, or `Absent` of the new type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::optional::Optional;
    ///
    /// assert_eq!(Optional::present(2).map(|x| x + 1), Optional::Present(3));
    /// assert_eq!(Optional::<i32>::absent().map(|x| x + 1), Optional::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Chains a computation that may itself produce nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::optional::Optional;
    ///
    /// let halve = |x: i32| if x % 2 == 0 { Optional::present(x / 2) } else { Optional::absent() };
    /// assert_eq!(Optional::present(8).and_then(halve), Optional::Present(4));
    /// assert_eq!(Optional::present(3).and_then(halve), Optional::Absent);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default> Optional<T> {
    /// Returns the held value, or `T::default()` if absent.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => T::default(),
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// Converts a standard `Option`: `Some(v)` becomes `Present(v)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::optional::Optional;
    ///
    /// assert_eq!(Optional::from(Some(1)), Optional::Present(1));
    /// assert_eq!(Optional::<i32>::from(None), Optional::Absent);
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

// =============================================================================
// IntoIterator Implementation
// =============================================================================

/// A standard iterator over the value held by an [`Optional`].
///
/// Yields one item for `Present` and none for `Absent`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Optional<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take().into()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.inner.is_present());
        (length, Some(length))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Optional<String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_present_construction() {
        let value = Optional::present(42);
        assert!(value.is_present());
        assert!(!value.is_absent());
    }

    #[rstest]
    fn test_absent_construction() {
        let value: Optional<i32> = Optional::absent();
        assert!(value.is_absent());
        assert!(!value.is_present());
    }

    #[rstest]
    fn test_repeated_extraction_from_copy_is_stable() {
        let value = Optional::present(7);
        assert_eq!(value.unwrap(), 7);
        assert_eq!(value.unwrap(), 7);
    }

    #[rstest]
    #[should_panic(expected = "called `Optional::unwrap()` on an `Absent` value")]
    fn test_unwrap_absent_panics() {
        let value: Optional<i32> = Optional::absent();
        let _ = value.unwrap();
    }

    #[rstest]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Optional::present(1)), "Present(1)");
        assert_eq!(format!("{:?}", Optional::<i32>::absent()), "Absent");
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let option: Option<i32> = Optional::from(Some(3)).into();
        assert_eq!(option, Some(3));

        let option: Option<i32> = Optional::from(None).into();
        assert_eq!(option, None);
    }

    #[rstest]
    fn test_into_iter_size_hint() {
        assert_eq!(Optional::present(1).into_iter().len(), 1);
        assert_eq!(Optional::<i32>::absent().into_iter().len(), 0);
    }
}
