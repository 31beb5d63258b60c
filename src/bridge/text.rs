//! Adapters between the protocol and text.

use crate::iter::LazyIterator;
use crate::optional::Optional;

/// Yields the `char`s of a string slice.
///
/// Created by [`chars`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chars<'a> {
    inner: std::str::Chars<'a>,
}

/// Creates an iterator over the Unicode scalar values of `text`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::bridge::chars;
/// use lazyseq::iter::LazyIterator;
/// use lazyseq::sources::from_slice;
///
/// assert!(chars("Hello").equal(from_slice(&['H', 'e', 'l', 'l', 'o'])));
/// ```
pub fn chars(text: &str) -> Chars<'_> {
    Chars {
        inner: text.chars(),
    }
}

impl Chars<'_> {
    /// Returns the part of the string not yet produced.
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }
}

impl LazyIterator for Chars<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Optional<char> {
        self.inner.next().into()
    }
}

/// Concatenates every `char` produced by `iterator` into a `String`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::bridge::{chars, collect_string};
/// use lazyseq::iter::LazyIterator;
///
/// let shouted = collect_string(chars("lazy").map(|c| c.to_ascii_uppercase()));
/// assert_eq!(shouted, "LAZY");
/// ```
pub fn collect_string<I>(iterator: I) -> String
where
    I: LazyIterator<Item = char>,
{
    iterator.fold(String::new(), |mut text, character| {
        text.push(character);
        text
    })
}
