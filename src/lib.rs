//! # lazyseq
//!
//! A lazy, pull-based iteration library with an accompanying optional-value
//! type.
//!
//! ## Overview
//!
//! Sequences are built, transformed and consumed without materializing
//! intermediate collections. The library includes:
//!
//! - **Optional values**: [`Optional`](optional::Optional), the per-step result of every pull
//! - **Iterator protocol**: [`LazyIterator`](iter::LazyIterator), a single `next` method
//! - **Adapters**: map, filter, take, take-while, drop, drop-while, fuse, chain, flatten
//! - **Terminal operations**: fold, for-each, collect, count, find, all, any, nth, equal
//! - **Sources**: slices, callbacks, empty, once, repeat
//! - **Bridges**: channels, text and integer progressions
//!
//! Control flow is always driven by the consumer: nothing is computed until a
//! terminal operation pulls for it.
//!
//! ## Feature Flags
//!
//! - `bridge`: channel, text and range adapters
//! - `tracing`: debug events from the channel producer thread
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let squares_of_odds = from_slice(&[1, 2, 3, 4, 5])
//!     .filter(|x| x % 2 == 1)
//!     .map(|x| x * x)
//!     .collect_vec();
//!
//! assert_eq!(squares_of_odds, vec![1, 9, 25]);
//! assert_eq!(repeat(0).take(3).count(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and constructors.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::iter::{BoxedIterator, LazyIterator};
    pub use crate::optional::Optional;
    pub use crate::sources::{empty, from_fn, from_slice, from_std, from_vec, once, repeat};

    #[cfg(feature = "bridge")]
    pub use crate::bridge::{chars, collect_string, from_receiver, range, to_receiver};
}

pub mod iter;
pub mod optional;
pub mod sources;

#[cfg(feature = "bridge")]
pub mod bridge;
