//! Single-upstream adapters that transform or filter elements.
//!
//! Each adapter owns exactly one upstream iterator plus its own state. None
//! of them pull more from upstream than the current call to `next` needs.

use std::fmt;

use crate::optional::Optional;

use super::protocol::LazyIterator;

// =============================================================================
// Map
// =============================================================================

/// Transforms each element with a function.
///
/// Created by [`LazyIterator::map`].
#[derive(Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct Map<I, F> {
    upstream: I,
    function: F,
}

impl<I, F> Map<I, F> {
    pub(crate) const fn new(upstream: I, function: F) -> Self {
        Self { upstream, function }
    }
}

impl<B, I, F> LazyIterator for Map<I, F>
where
    I: LazyIterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Optional<B> {
        self.upstream.next().map(&mut self.function)
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Yields only the elements satisfying a predicate.
///
/// Created by [`LazyIterator::filter`].
#[derive(Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct Filter<I, P> {
    upstream: I,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    pub(crate) const fn new(upstream: I, predicate: P) -> Self {
        Self { upstream, predicate }
    }
}

impl<I, P> LazyIterator for Filter<I, P>
where
    I: LazyIterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Optional<I::Item> {
        while let Optional::Present(value) = self.upstream.next() {
            if (self.predicate)(&value) {
                return Optional::Present(value);
            }
        }
        Optional::Absent
    }
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Take
// =============================================================================

/// Yields at most a fixed number of elements.
///
/// Created by [`LazyIterator::take`]. When the remaining count reaches zero
/// the upstream is not pulled again.
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct Take<I> {
    upstream: I,
    remaining: usize,
}

impl<I> Take<I> {
    pub(crate) const fn new(upstream: I, remaining: usize) -> Self {
        Self { upstream, remaining }
    }
}

impl<I: LazyIterator> LazyIterator for Take<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Optional<I::Item> {
        if self.remaining == 0 {
            return Optional::Absent;
        }
        let value = self.upstream.next();
        if value.is_present() {
            self.remaining -= 1;
        }
        value
    }
}

// =============================================================================
// TakeWhile
// =============================================================================

/// Yields elements while a predicate holds.
///
/// Created by [`LazyIterator::take_while`]. The first element failing the
/// predicate is consumed and dropped, and the adapter stays exhausted.
#[derive(Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct TakeWhile<I, P> {
    upstream: I,
    predicate: P,
    done: bool,
}

impl<I, P> TakeWhile<I, P> {
    pub(crate) const fn new(upstream: I, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            done: false,
        }
    }
}

impl<I, P> LazyIterator for TakeWhile<I, P>
where
    I: LazyIterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Optional<I::Item> {
        if self.done {
            return Optional::Absent;
        }
        match self.upstream.next() {
            Optional::Present(value) if (self.predicate)(&value) => Optional::Present(value),
            _ => {
                self.done = true;
                Optional::Absent
            }
        }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for TakeWhile<I, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TakeWhile")
            .field("upstream", &self.upstream)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// DropFirst
// =============================================================================

/// Discards a fixed number of leading elements.
///
/// Created by [`LazyIterator::drop`]. If the upstream runs out while
/// elements are still being skipped, the remaining count is reset to zero
/// and `Absent` is returned; later calls pass the upstream through as is.
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct DropFirst<I> {
    upstream: I,
    remaining: usize,
}

impl<I> DropFirst<I> {
    pub(crate) const fn new(upstream: I, remaining: usize) -> Self {
        Self { upstream, remaining }
    }
}

impl<I: LazyIterator> LazyIterator for DropFirst<I> {
    type Item = I::Item;

    fn next(&mut self) -> Optional<I::Item> {
        while self.remaining > 0 {
            if self.upstream.next().is_absent() {
                self.remaining = 0;
                return Optional::Absent;
            }
            self.remaining -= 1;
        }
        self.upstream.next()
    }
}

// =============================================================================
// DropWhile
// =============================================================================

/// Discards leading elements while a predicate holds.
///
/// Created by [`LazyIterator::drop_while`]. The first element failing the
/// predicate is returned, and from then on the upstream passes through.
#[derive(Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct DropWhile<I, P> {
    upstream: I,
    predicate: P,
    done: bool,
}

impl<I, P> DropWhile<I, P> {
    pub(crate) const fn new(upstream: I, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            done: false,
        }
    }
}

impl<I, P> LazyIterator for DropWhile<I, P>
where
    I: LazyIterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Optional<I::Item> {
        if self.done {
            return self.upstream.next();
        }
        loop {
            match self.upstream.next() {
                Optional::Present(value) if (self.predicate)(&value) => {}
                other => {
                    self.done = true;
                    return other;
                }
            }
        }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for DropWhile<I, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DropWhile")
            .field("upstream", &self.upstream)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
