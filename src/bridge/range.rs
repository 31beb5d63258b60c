//! Arithmetic progressions over integer types.

use crate::iter::LazyIterator;
use crate::optional::Optional;

/// Integer types that can drive a [`Range`].
///
/// Implemented for every primitive integer type. For unsigned types the step
/// can only be non-negative, so their ranges only ascend.
pub trait Step: Copy + PartialOrd {
    /// The additive identity.
    const ZERO: Self;

    /// Returns `self + step`, or `None` on overflow.
    fn checked_step(self, step: Self) -> Option<Self>;
}

macro_rules! impl_step {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Step for $integer {
                const ZERO: Self = 0;

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

impl_step!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Yields `start, start + step, start + 2 * step, ...` up to, not including,
/// `stop`.
///
/// Created by [`range`]. A positive step ascends while the value is below
/// `stop`; a negative step descends while it is above `stop`. A zero step,
/// or a step pointing away from `stop`, yields nothing. Exhaustion is
/// permanent, and a progression that would overflow ends instead.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<T> {
    current: Option<T>,
    stop: T,
    step: T,
}

/// Creates the half-open progression from `start` towards `stop`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::bridge::range;
/// use lazyseq::iter::LazyIterator;
///
/// assert_eq!(range(0, 5, 1).collect_vec(), vec![0, 1, 2, 3, 4]);
/// assert_eq!(range(0, -5, -2).collect_vec(), vec![0, -2, -4]);
/// assert!(range(5, 10, -1).collect_vec().is_empty());
/// ```
pub const fn range<T: Step>(start: T, stop: T, step: T) -> Range<T> {
    Range {
        current: Some(start),
        stop,
        step,
    }
}

impl<T: Step> LazyIterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Optional<T> {
        let Some(current) = self.current else {
            return Optional::Absent;
        };
        let in_bounds = if self.step > T::ZERO {
            current < self.stop
        } else if self.step < T::ZERO {
            current > self.stop
        } else {
            false
        };
        if !in_bounds {
            self.current = None;
            return Optional::Absent;
        }
        self.current = current.checked_step(self.step);
        Optional::Present(current)
    }
}
