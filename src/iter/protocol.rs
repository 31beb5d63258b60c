//! The lazy iterator protocol.
//!
//! A [`LazyIterator`] has exactly one required method, [`next`], which pulls
//! one [`Optional`] from the iterator. Every adapter and terminal operation is
//! a provided method built on top of it.
//!
//! # Exhaustion
//!
//! An iterator signals "no more elements right now" by returning
//! [`Optional::Absent`]. Well-behaved consumers stop pulling at that point.
//! Plain sources and adapters are not required to stay exhausted if pulled
//! again; wrap them in [`fuse`] when sticky exhaustion is needed.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::iter::LazyIterator;
//! use lazyseq::sources::from_slice;
//!
//! let evens = from_slice(&[1, 2, 3, 4, 5, 6])
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10)
//!     .collect_vec();
//!
//! assert_eq!(evens, vec![20, 40, 60]);
//! ```
//!
//! [`next`]: LazyIterator::next
//! [`fuse`]: LazyIterator::fuse

use crate::optional::Optional;

use super::fuse::Fuse;
use super::interop::StdIter;
use super::structural::{Chain, FlatMap, Flatten};
use super::transform::{DropFirst, DropWhile, Filter, Map, Take, TakeWhile};

/// A boxed, dynamically dispatched iterator.
///
/// Useful when iterators of different concrete types must share one type,
/// for example as the inner iterators of [`LazyIterator::flatten`].
pub type BoxedIterator<'a, T> = Box<dyn LazyIterator<Item = T> + 'a>;

/// A pull-based, stateful producer of values.
///
/// Implementors provide [`next`](Self::next); each call either produces one
/// element (`Present`) and advances internal state, or reports exhaustion
/// (`Absent`).
///
/// Adapters take `self` by value and own their upstream exclusively. To lend
/// an iterator to an adapter and keep using it afterwards, use
/// [`by_ref`](Self::by_ref).
///
/// # Examples
///
/// ```rust
/// use lazyseq::iter::LazyIterator;
/// use lazyseq::optional::Optional;
///
/// struct Countdown(u32);
///
/// impl LazyIterator for Countdown {
///     type Item = u32;
///
///     fn next(&mut self) -> Optional<u32> {
///         if self.0 == 0 {
///             return Optional::Absent;
///         }
///         self.0 -= 1;
///         Optional::Present(self.0 + 1)
///     }
/// }
///
/// assert_eq!(Countdown(3).collect_vec(), vec![3, 2, 1]);
/// ```
pub trait LazyIterator {
    /// The type of the elements being produced.
    type Item;

    /// Pulls the next element.
    fn next(&mut self) -> Optional<Self::Item>;

    // =========================================================================
    // Transform Adapters
    // =========================================================================

    /// Transforms each element with `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::iter::LazyIterator;
    /// use lazyseq::sources::from_slice;
    ///
    /// let lengths = from_slice(&["a", "bb", "ccc"]).map(str::len).collect_vec();
    /// assert_eq!(lengths, vec![1, 2, 3]);
    /// ```
    #[inline]
    fn map<B, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, function)
    }

    /// Yields only the elements for which `predicate` returns `true`.
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Yields at most the first `count` elements.
    ///
    /// Once `count` elements have been produced the upstream is never pulled
    /// again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::iter::LazyIterator;
    /// use lazyseq::sources::repeat;
    ///
    /// assert_eq!(repeat(5).take(3).collect_vec(), vec![5, 5, 5]);
    /// ```
    #[inline]
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Yields elements while `predicate` holds.
    ///
    /// The first element failing `predicate` is discarded and the adapter is
    /// exhausted from then on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::iter::LazyIterator;
    /// use lazyseq::sources::from_slice;
    ///
    /// let small = from_slice(&[1, 2, 3, 4, 1]).take_while(|x| *x < 4).collect_vec();
    /// assert_eq!(small, vec![1, 2, 3]);
    /// ```
    #[inline]
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Discards the first `count` elements, then passes the rest through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::iter::LazyIterator;
    /// use lazyseq::sources::from_slice;
    ///
    /// assert_eq!(from_slice(&[1, 2, 3, 4, 5]).drop(3).collect_vec(), vec![4, 5]);
    /// ```
    #[inline]
    fn drop(self, count: usize) -> DropFirst<Self>
    where
        Self: Sized,
    {
        DropFirst::new(self, count)
    }

    /// Discards elements while `predicate` holds, then passes the rest through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::iter::LazyIterator;
    /// use lazyseq::sources::from_slice;
    ///
    /// let rest = from_slice(&[1, 2, 3, 1]).drop_while(|x| *x < 3).collect_vec();
    /// assert_eq!(rest, vec![3, 1]);
    /// ```
    #[inline]
    fn drop_while<P>(self, predicate: P) -> DropWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        DropWhile::new(self, predicate)
    }

    /// Makes exhaustion sticky: after the first `Absent`, every later pull
    /// returns `Absent` without touching the upstream.
    #[inline]
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    // =========================================================================
    // Structural Adapters
    // =========================================================================

    /// Yields every element of `self`, then every element of `second`.
    ///
    /// `self` is fused internally, so it is never resumed after it first
    /// reports exhaustion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::iter::LazyIterator;
    /// use lazyseq::sources::from_slice;
    ///
    /// let joined = from_slice(&[1, 2]).chain(from_slice(&[3, 4])).collect_vec();
    /// assert_eq!(joined, vec![1, 2, 3, 4]);
    /// ```
    #[inline]
    fn chain<U>(self, second: U) -> Chain<Self, U>
    where
        Self: Sized,
        U: LazyIterator<Item = Self::Item>,
    {
        Chain::new(self, second)
    }

    /// Flattens an iterator of iterators into one iterator.
    ///
    /// Empty inner iterators are skipped; the result is exhausted only once
    /// the outer iterator is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::iter::LazyIterator;
    /// use lazyseq::sources::{from_vec, from_slice};
    ///
    /// let nested = from_vec(vec![from_slice(&[1, 2]), from_slice(&[]), from_slice(&[3])]);
    /// assert_eq!(nested.flatten().collect_vec(), vec![1, 2, 3]);
    /// ```
    #[inline]
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: LazyIterator,
    {
        Flatten::new(self)
    }

    /// Maps each element to an iterator and flattens the results.
    #[inline]
    fn flat_map<U, F>(self, function: F) -> FlatMap<Self, U, F>
    where
        Self: Sized,
        U: LazyIterator,
        F: FnMut(Self::Item) -> U,
    {
        FlatMap::new(self, function)
    }

    // =========================================================================
    // Ownership Helpers
    // =========================================================================

    /// Borrows the iterator so an adapter can consume part of it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::iter::LazyIterator;
    /// use lazyseq::sources::from_slice;
    ///
    /// let mut numbers = from_slice(&[1, 2, 3, 4]);
    /// let head = numbers.by_ref().take(2).collect_vec();
    /// assert_eq!(head, vec![1, 2]);
    /// assert_eq!(numbers.collect_vec(), vec![3, 4]);
    /// ```
    #[inline]
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Erases the concrete type behind a [`BoxedIterator`].
    #[inline]
    fn boxed<'a>(self) -> BoxedIterator<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Adapts the iterator into a [`std::iter::Iterator`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::iter::LazyIterator;
    /// use lazyseq::sources::repeat;
    ///
    /// let total: i32 = repeat(2).take(4).into_std().sum();
    /// assert_eq!(total, 8);
    /// ```
    #[inline]
    fn into_std(self) -> StdIter<Self>
    where
        Self: Sized,
    {
        StdIter::new(self)
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Pulls until exhaustion, calling `function` on every element.
    #[inline]
    fn for_each<F>(mut self, mut function: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        while let Optional::Present(value) = self.next() {
            function(value);
        }
    }

    /// Accumulates every element left to right, starting from `init`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::iter::LazyIterator;
    /// use lazyseq::sources::from_slice;
    ///
    /// let sum = from_slice(&[1, 2, 3]).fold(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    fn fold<B, F>(mut self, init: B, mut function: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut accumulator = init;
        while let Optional::Present(value) = self.next() {
            accumulator = function(accumulator, value);
        }
        accumulator
    }

    /// Collects every element, in order, into a `Vec`.
    #[inline]
    fn collect_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.fold(Vec::new(), |mut elements, element| {
            elements.push(element);
            elements
        })
    }

    /// Counts the elements produced before exhaustion.
    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |count, _| count + 1)
    }

    /// Returns the last element produced before exhaustion.
    #[inline]
    fn last(self) -> Optional<Self::Item>
    where
        Self: Sized,
    {
        self.fold(Optional::Absent, |_, element| Optional::Present(element))
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// Elements up to and including the match are consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::iter::LazyIterator;
    /// use lazyseq::optional::Optional;
    /// use lazyseq::sources::from_slice;
    ///
    /// let found = from_slice(&[1, 2, 3, 4, 5]).find(|x| *x > 3);
    /// assert_eq!(found, Optional::Present(4));
    /// ```
    #[inline]
    fn find<P>(&mut self, predicate: P) -> Optional<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.by_ref().filter(predicate).next()
    }

    /// Returns the index of the first element satisfying `predicate`.
    fn position<P>(&mut self, mut predicate: P) -> Optional<usize>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        let mut index = 0;
        while let Optional::Present(value) = self.next() {
            if predicate(value) {
                return Optional::Present(index);
            }
            index += 1;
        }
        Optional::Absent
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Stops at the first counterexample. An empty iterator yields `true`.
    #[inline]
    fn all<P>(&mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        while let Optional::Present(value) = self.next() {
            if !predicate(value) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if some element satisfies `predicate`.
    ///
    /// Stops at the first match. An empty iterator yields `false`.
    #[inline]
    fn any<P>(&mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        while let Optional::Present(value) = self.next() {
            if predicate(value) {
                return true;
            }
        }
        false
    }

    /// Returns the element at zero-based `index`, discarding those before it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::iter::LazyIterator;
    /// use lazyseq::optional::Optional;
    /// use lazyseq::sources::from_slice;
    ///
    /// assert_eq!(from_slice(&[1, 2, 3]).nth(0), Optional::Present(1));
    /// assert_eq!(from_slice(&[1, 2, 3]).nth(10), Optional::Absent);
    /// ```
    #[inline]
    fn nth(&mut self, index: usize) -> Optional<Self::Item>
    where
        Self: Sized,
    {
        self.by_ref().drop(index).next()
    }

    /// Returns `true` if both iterators produce equal elements in the same
    /// order and run out at the same time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::iter::LazyIterator;
    /// use lazyseq::sources::from_slice;
    ///
    /// assert!(from_slice(&[1, 2, 3]).equal(from_slice(&[1, 2, 3])));
    /// assert!(!from_slice(&[1, 2, 3]).equal(from_slice(&[1, 2])));
    /// ```
    #[inline]
    fn equal<U>(self, other: U) -> bool
    where
        Self: Sized,
        U: LazyIterator,
        Self::Item: PartialEq<U::Item>,
    {
        self.equal_by(other, |left, right| left == right)
    }

    /// Like [`equal`](Self::equal), comparing elements with `comparator`.
    fn equal_by<U, F>(mut self, mut other: U, mut comparator: F) -> bool
    where
        Self: Sized,
        U: LazyIterator,
        F: FnMut(&Self::Item, &U::Item) -> bool,
    {
        loop {
            match (self.next(), other.next()) {
                (Optional::Absent, Optional::Absent) => return true,
                (Optional::Present(left), Optional::Present(right)) => {
                    if !comparator(&left, &right) {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

// =============================================================================
// Forwarding Implementations
// =============================================================================

impl<I: LazyIterator + ?Sized> LazyIterator for &mut I {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Optional<I::Item> {
        (**self).next()
    }
}

impl<I: LazyIterator + ?Sized> LazyIterator for Box<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Optional<I::Item> {
        (**self).next()
    }
}
