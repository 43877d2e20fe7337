//! Parser input
//!
//! [`Input`] is the text that remains to be parsed. It is a borrowed, `Copy`
//! view into the original source: every parser derives new inputs by slicing,
//! never by copying or mutating.

use super::error::ParseError;
use serde::Serialize;
use std::fmt;

/// Maximum number of characters of unmatched input shown in error messages
pub const MAX_SNIPPET_CHARS: usize = 16;

/// Marker appended to a snippet that was truncated
pub const ELLIPSIS: &str = "...";

/// The remaining, unconsumed text of a parse
///
/// Two inputs compare equal when their remaining text is equal, regardless of
/// where in the original source they start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Input<'a> {
    text: &'a str,
}

impl<'a> Input<'a> {
    /// Create an input over the given source text
    #[inline]
    pub const fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// The remaining text
    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    /// Remaining length in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether all input has been consumed
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Split into the first `len` bytes and the rest
    ///
    /// Returns `None` when `len` is past the end or not on a character
    /// boundary.
    #[inline]
    pub fn split_at(&self, len: usize) -> Option<(Input<'a>, Input<'a>)> {
        if !self.text.is_char_boundary(len) {
            return None;
        }
        let (head, tail) = self.text.split_at(len);
        Some((Input::new(head), Input::new(tail)))
    }

    /// The input with the first `len` bytes removed
    #[inline]
    pub fn advance(&self, len: usize) -> Option<Input<'a>> {
        self.text.get(len..).map(Input::new)
    }

    /// The first `count` characters of the input (or all of it, if shorter)
    pub fn prefix_chars(&self, count: usize) -> Input<'a> {
        match self.text.char_indices().nth(count) {
            Some((end, _)) => Input::new(&self.text[..end]),
            None => *self,
        }
    }

    /// Text shown after "got" in error messages
    ///
    /// At most [`MAX_SNIPPET_CHARS`] characters, followed by [`ELLIPSIS`] when
    /// the input was longer than that.
    pub fn snippet(&self) -> String {
        let head = self.prefix_chars(MAX_SNIPPET_CHARS);
        if head.len() < self.len() {
            format!("{}{}", head.as_str(), ELLIPSIS)
        } else {
            head.as_str().to_string()
        }
    }

    /// Build an expectation error that quotes this input
    pub fn expected(&self, expectation: impl Into<String>) -> ParseError {
        ParseError::Expected {
            expectation: expectation.into(),
            got: self.snippet(),
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::new(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::new(text.as_str())
    }
}

impl AsRef<str> for Input<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

impl PartialEq<str> for Input<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Input<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}
