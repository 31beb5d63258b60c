//! Conversions between [`LazyIterator`] and [`std::iter::Iterator`].

use crate::optional::Optional;

use super::protocol::LazyIterator;

/// A [`LazyIterator`] adapted into a standard iterator.
///
/// Created by [`LazyIterator::into_std`]. Lets protocol iterators drive `for`
/// loops and standard collectors.
///
/// # Examples
///
/// ```rust
/// use lazyseq::iter::LazyIterator;
/// use lazyseq::sources::from_slice;
///
/// let mut seen = Vec::new();
/// for value in from_slice(&[1, 2, 3]).into_std() {
///     seen.push(value);
/// }
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct StdIter<I> {
    inner: I,
}

impl<I> StdIter<I> {
    pub(crate) const fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Returns the wrapped protocol iterator.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: LazyIterator> Iterator for StdIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.inner.next().into()
    }
}

/// A standard iterator adapted into the [`LazyIterator`] protocol.
///
/// Created by [`from_std`](crate::sources::from_std).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FromStd<I> {
    inner: I,
}

impl<I> FromStd<I> {
    pub(crate) const fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I: Iterator> LazyIterator for FromStd<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Optional<I::Item> {
        self.inner.next().into()
    }
}
