//! Adapters that combine several iterators into one.

use std::fmt;

use crate::optional::Optional;

use super::fuse::Fuse;
use super::protocol::LazyIterator;
use super::transform::Map;

// =============================================================================
// Chain
// =============================================================================

/// Concatenates two iterators.
///
/// Created by [`LazyIterator::chain`]. The first iterator is fused, so once
/// it has reported exhaustion only the second one is pulled. Exhaustion of
/// the second iterator is passed through unmodified.
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct Chain<A, B> {
    first: Fuse<A>,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self {
            first: Fuse::new(first),
            second,
        }
    }
}

impl<A, B> LazyIterator for Chain<A, B>
where
    A: LazyIterator,
    B: LazyIterator<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Optional<A::Item> {
        match self.first.next() {
            present @ Optional::Present(_) => present,
            Optional::Absent => self.second.next(),
        }
    }
}

// =============================================================================
// Flatten
// =============================================================================

/// Yields the elements of each inner iterator in turn.
///
/// Created by [`LazyIterator::flatten`]. Any number of consecutive empty
/// inner iterators are skipped within one pull. Once the outer iterator is
/// exhausted, the adapter stays exhausted.
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct Flatten<I>
where
    I: LazyIterator,
    I::Item: LazyIterator,
{
    outer: I,
    current: Optional<I::Item>,
    done: bool,
}

impl<I> Flatten<I>
where
    I: LazyIterator,
    I::Item: LazyIterator,
{
    pub(crate) const fn new(outer: I) -> Self {
        Self {
            outer,
            current: Optional::Absent,
            done: false,
        }
    }
}

impl<I> LazyIterator for Flatten<I>
where
    I: LazyIterator,
    I::Item: LazyIterator,
{
    type Item = <I::Item as LazyIterator>::Item;

    fn next(&mut self) -> Optional<Self::Item> {
        loop {
            if self.done {
                return Optional::Absent;
            }
            if let Optional::Present(inner) = &mut self.current {
                if let value @ Optional::Present(_) = inner.next() {
                    return value;
                }
            }
            match self.outer.next() {
                Optional::Present(inner) => self.current = Optional::Present(inner),
                Optional::Absent => {
                    self.current = Optional::Absent;
                    self.done = true;
                }
            }
        }
    }
}

impl<I> Clone for Flatten<I>
where
    I: LazyIterator + Clone,
    I::Item: LazyIterator + Clone,
{
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            current: self.current.clone(),
            done: self.done,
        }
    }
}

impl<I> fmt::Debug for Flatten<I>
where
    I: LazyIterator + fmt::Debug,
    I::Item: LazyIterator + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Flatten")
            .field("outer", &self.outer)
            .field("current", &self.current)
            .field("done", &self.done)
            .finish()
    }
}

// =============================================================================
// FlatMap
// =============================================================================

/// Maps each element to an iterator and yields their elements in turn.
///
/// Created by [`LazyIterator::flat_map`].
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct FlatMap<I, U, F>
where
    I: LazyIterator,
    U: LazyIterator,
    F: FnMut(I::Item) -> U,
{
    inner: Flatten<Map<I, F>>,
}

impl<I, U, F> FlatMap<I, U, F>
where
    I: LazyIterator,
    U: LazyIterator,
    F: FnMut(I::Item) -> U,
{
    pub(crate) const fn new(upstream: I, function: F) -> Self {
        Self {
            inner: Flatten::new(Map::new(upstream, function)),
        }
    }
}

impl<I, U, F> LazyIterator for FlatMap<I, U, F>
where
    I: LazyIterator,
    U: LazyIterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U::Item;

    #[inline]
    fn next(&mut self) -> Optional<U::Item> {
        self.inner.next()
    }
}
