//! The optional value returned by every pull of the iterator protocol.
//!
//! - [`Optional`]: a value of type `T`, or nothing
//! - [`AbsentValueError`]: the recoverable form of extracting from `Absent`
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::optional::Optional;
//!
//! let doubled = Optional::present(21).map(|x| x * 2);
//! assert_eq!(doubled.unwrap_or_else(|| 0), 42);
//! ```

mod error;
mod value;

pub use error::AbsentValueError;
pub use value::{IntoIter, Optional};
