//! Terminal operations as free functions.
//!
//! Each function drives an iterator (fully or until it can answer) and
//! returns a concrete, non-iterator result. They are equivalent to the
//! provided methods of [`LazyIterator`] and exist for call sites that prefer
//! the `operation(iterator, ...)` form.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::iter::consumers::{count, fold};
//! use lazyseq::sources::{from_slice, repeat};
//! use lazyseq::iter::LazyIterator;
//!
//! assert_eq!(count(repeat('x').take(4)), 4);
//! assert_eq!(fold(from_slice(&[1, 2, 3]), 10, |accumulator, element| accumulator + element), 16);
//! ```

use crate::optional::Optional;

use super::protocol::LazyIterator;

/// Calls `function` on every element until exhaustion.
pub fn for_each<I, F>(iterator: I, function: F)
where
    I: LazyIterator,
    F: FnMut(I::Item),
{
    iterator.for_each(function);
}

/// Accumulates `accumulator = function(accumulator, element)` left to right.
pub fn fold<I, B, F>(iterator: I, init: B, function: F) -> B
where
    I: LazyIterator,
    F: FnMut(B, I::Item) -> B,
{
    iterator.fold(init, function)
}

/// Collects every element into a `Vec`, preserving order.
pub fn collect_vec<I: LazyIterator>(iterator: I) -> Vec<I::Item> {
    iterator.collect_vec()
}

/// Counts the elements produced before exhaustion.
pub fn count<I: LazyIterator>(iterator: I) -> usize {
    iterator.count()
}

/// Returns the first element satisfying `predicate`.
pub fn find<I, P>(mut iterator: I, predicate: P) -> Optional<I::Item>
where
    I: LazyIterator,
    P: FnMut(&I::Item) -> bool,
{
    iterator.find(predicate)
}

/// Returns `true` if every element satisfies `predicate` (vacuously `true`).
pub fn all<I, P>(mut iterator: I, predicate: P) -> bool
where
    I: LazyIterator,
    P: FnMut(I::Item) -> bool,
{
    iterator.all(predicate)
}

/// Returns `true` if some element satisfies `predicate`.
pub fn any<I, P>(mut iterator: I, predicate: P) -> bool
where
    I: LazyIterator,
    P: FnMut(I::Item) -> bool,
{
    iterator.any(predicate)
}

/// Returns the element at zero-based `index`.
pub fn nth<I: LazyIterator>(mut iterator: I, index: usize) -> Optional<I::Item> {
    iterator.nth(index)
}

/// Compares two iterators element by element with `==`.
pub fn equal<A, B>(left: A, right: B) -> bool
where
    A: LazyIterator,
    B: LazyIterator,
    A::Item: PartialEq<B::Item>,
{
    left.equal(right)
}

/// Compares two iterators element by element with `comparator`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::iter::consumers::equal_by;
/// use lazyseq::sources::from_slice;
///
/// let left = from_slice(&[("a", 1), ("c", 2)]);
/// let right = from_slice(&[("a", 9), ("c", 8)]);
/// assert!(equal_by(left, right, |l, r| l.0 == r.0));
/// ```
pub fn equal_by<A, B, F>(left: A, right: B, comparator: F) -> bool
where
    A: LazyIterator,
    B: LazyIterator,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    left.equal_by(right, comparator)
}
