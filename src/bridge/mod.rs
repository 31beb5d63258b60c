//! Bridges between the protocol and external sequence types.
//!
//! These adapters only produce or consume values through
//! [`LazyIterator`](crate::iter::LazyIterator); they never change how the
//! core adapters behave.
//!
//! - Channels: [`from_receiver`], [`to_receiver`]
//! - Text: [`chars`], [`collect_string`]
//! - Numeric progressions: [`range`]
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::bridge::{chars, collect_string, range};
//! use lazyseq::iter::LazyIterator;
//!
//! let letters = range(0_u8, 3, 1).map(|offset| char::from(b'a' + offset));
//! assert_eq!(collect_string(letters.chain(chars("!"))), "abc!");
//! ```

mod channel;
mod range;
mod text;

pub use channel::{ReceiverIter, from_receiver, to_receiver, to_receiver_with_capacity};
pub use range::{Range, Step, range};
pub use text::{Chars, chars, collect_string};
