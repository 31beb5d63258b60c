//! Source iterators: iterators with no upstream.
//!
//! - [`from_slice`] / [`from_vec`] / [`from_std`]: finite ordered sequences
//! - [`from_fn`]: a callback that owns all state and exhaustion logic
//! - [`empty`]: always absent
//! - [`once`]: one value, then absent
//! - [`repeat`]: the same value forever
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::iter::LazyIterator;
//! use lazyseq::optional::Optional;
//! use lazyseq::sources::{from_fn, once, repeat};
//!
//! let mut counter = 0;
//! let naturals = from_fn(move || {
//!     counter += 1;
//!     Optional::Present(counter)
//! });
//!
//! assert_eq!(naturals.take(3).collect_vec(), vec![1, 2, 3]);
//! assert_eq!(once(0).chain(repeat(7).take(2)).collect_vec(), vec![0, 7, 7]);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::iter::{FromStd, LazyIterator};
use crate::optional::Optional;

// =============================================================================
// Slice
// =============================================================================

/// Yields clones of a slice's elements in order.
///
/// Created by [`from_slice`]. Exhaustion is permanent.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SliceIter<'a, T> {
    remaining: &'a [T],
}

/// Creates an iterator over clones of the elements of `slice`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::iter::LazyIterator;
/// use lazyseq::optional::Optional;
/// use lazyseq::sources::from_slice;
///
/// let mut numbers = from_slice(&[1, 2]);
/// assert_eq!(numbers.next(), Optional::Present(1));
/// assert_eq!(numbers.next(), Optional::Present(2));
/// assert_eq!(numbers.next(), Optional::Absent);
/// ```
pub const fn from_slice<T: Clone>(slice: &[T]) -> SliceIter<'_, T> {
    SliceIter { remaining: slice }
}

impl<T> SliceIter<'_, T> {
    /// Returns the elements not yet produced.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        self.remaining
    }
}

impl<T: Clone> LazyIterator for SliceIter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Optional<T> {
        match self.remaining.split_first() {
            Some((first, rest)) => {
                self.remaining = rest;
                Optional::Present(first.clone())
            }
            None => Optional::Absent,
        }
    }
}

/// Creates an iterator that moves the elements out of `values` in order.
pub fn from_vec<T>(values: Vec<T>) -> FromStd<std::vec::IntoIter<T>> {
    from_std(values)
}

/// Adapts any standard iterable into the protocol.
///
/// # Examples
///
/// ```rust
/// use lazyseq::iter::LazyIterator;
/// use lazyseq::sources::from_std;
///
/// assert_eq!(from_std("a-b".split('-')).collect_vec(), vec!["a", "b"]);
/// ```
pub fn from_std<I: IntoIterator>(iterable: I) -> FromStd<I::IntoIter> {
    FromStd::new(iterable.into_iter())
}

// =============================================================================
// Function
// =============================================================================

/// Yields whatever a callback returns.
///
/// Created by [`from_fn`]. The callback alone decides when (and whether)
/// the iterator is exhausted.
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FromFn<F> {
    callback: F,
}

/// Creates an iterator backed by `callback`.
pub const fn from_fn<T, F>(callback: F) -> FromFn<F>
where
    F: FnMut() -> Optional<T>,
{
    FromFn { callback }
}

impl<T, F> LazyIterator for FromFn<F>
where
    F: FnMut() -> Optional<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Optional<T> {
        (self.callback)()
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FromFn").finish_non_exhaustive()
    }
}

// =============================================================================
// Empty
// =============================================================================

/// An iterator that never yields anything.
///
/// Created by [`empty`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Empty<T> {
    marker: PhantomData<fn() -> T>,
}

/// Creates an iterator that is always absent.
pub const fn empty<T>() -> Empty<T> {
    Empty {
        marker: PhantomData,
    }
}

impl<T> LazyIterator for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Optional<T> {
        Optional::Absent
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Empty")
    }
}

// =============================================================================
// Once
// =============================================================================

/// Yields one value, then nothing.
///
/// Created by [`once`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Once<T> {
    value: Optional<T>,
}

/// Creates an iterator that yields `value` exactly once.
pub const fn once<T>(value: T) -> Once<T> {
    Once {
        value: Optional::Present(value),
    }
}

impl<T> LazyIterator for Once<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Optional<T> {
        self.value.take()
    }
}

// =============================================================================
// Repeat
// =============================================================================

/// Yields clones of one value forever.
///
/// Created by [`repeat`]. Never exhausts; bound it with
/// [`take`](LazyIterator::take) or [`take_while`](LazyIterator::take_while)
/// before consuming it fully.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Repeat<T> {
    value: T,
}

/// Creates an infinite iterator of clones of `value`.
pub const fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

impl<T: Clone> LazyIterator for Repeat<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Optional<T> {
        Optional::Present(self.value.clone())
    }
}
