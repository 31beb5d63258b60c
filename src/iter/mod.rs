//! The lazy iterator protocol and its adapters.
//!
//! - [`LazyIterator`]: the single-method pull protocol
//! - Transform adapters: [`Map`], [`Filter`], [`Take`], [`TakeWhile`],
//!   [`DropFirst`], [`DropWhile`], [`Fuse`]
//! - Structural adapters: [`Chain`], [`Flatten`], [`FlatMap`]
//! - Interop with the standard library: [`StdIter`], [`FromStd`]
//! - [`consumers`]: terminal operations as free functions
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::iter::LazyIterator;
//! use lazyseq::sources::{from_slice, repeat};
//!
//! let words = from_slice(&["lazy", "", "seq"])
//!     .filter(|word| !word.is_empty())
//!     .chain(repeat("!").take(2))
//!     .collect_vec();
//!
//! assert_eq!(words, vec!["lazy", "seq", "!", "!"]);
//! ```

pub mod consumers;
mod fuse;
mod interop;
mod protocol;
mod structural;
mod transform;

pub use fuse::Fuse;
pub use interop::{FromStd, StdIter};
pub use protocol::{BoxedIterator, LazyIterator};
pub use structural::{Chain, FlatMap, Flatten};
pub use transform::{DropFirst, DropWhile, Filter, Map, Take, TakeWhile};
