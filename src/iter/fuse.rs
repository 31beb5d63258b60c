//! Sticky exhaustion.

use crate::optional::Optional;

use super::protocol::LazyIterator;

/// Returns `Absent` forever once the upstream has returned `Absent` once.
///
/// Created by [`LazyIterator::fuse`]. After exhaustion the upstream is never
/// pulled again, which masks sources whose exhaustion is not permanent.
///
/// # Examples
///
/// ```rust
/// use lazyseq::iter::LazyIterator;
/// use lazyseq::optional::Optional;
/// use lazyseq::sources::from_fn;
///
/// let mut toggle = false;
/// let mut fused = from_fn(move || {
///     toggle = !toggle;
///     if toggle { Optional::Absent } else { Optional::Present(1) }
/// })
/// .fuse();
///
/// assert_eq!(fused.next(), Optional::Absent);
/// assert_eq!(fused.next(), Optional::Absent);
/// ```
#[derive(Debug, Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct Fuse<I> {
    upstream: I,
    done: bool,
}

impl<I> Fuse<I> {
    pub(crate) const fn new(upstream: I) -> Self {
        Self {
            upstream,
            done: false,
        }
    }

    /// Returns `true` once the upstream has reported exhaustion.
    #[inline]
    pub const fn is_done(&self) -> bool {
        self.done
    }
}

impl<I: LazyIterator> LazyIterator for Fuse<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Optional<I::Item> {
        if self.done {
            return Optional::Absent;
        }
        let value = self.upstream.next();
        if value.is_absent() {
            self.done = true;
        }
        value
    }
}
