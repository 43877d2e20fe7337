//! Parse errors
//!
//! A failed parse is ordinary data: a [`ParseError`] describing what was
//! expected, carried by a [`Failure`](crate::Failure) together with the input
//! it applies to.
//!
//! # Example Output
//!
//! ```text
//! expected string hello, got hell no
//! expected end of file, got way too long so ...
//! ```

use std::fmt;

/// Message prefix for literal string expectations
pub const EXPECTED_STRING: &str = "expected string";

/// Message prefix for regular expression expectations
pub const EXPECTED_PATTERN: &str = "expected pattern:";

/// Message for end of input expectations
pub const EXPECTED_END_OF_FILE: &str = "expected end of file";

/// Why a parser did not match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A leaf did not recognize the start of the input
    Expected {
        /// What the parser was looking for
        expectation: String,
        /// The (possibly truncated) input that was found instead
        got: String,
    },

    /// An explicit failure raised by the grammar author
    Message(String),

    /// A regular expression leaf was built from an invalid pattern
    InvalidPattern {
        /// The pattern as given by the caller
        pattern: String,
        /// Why the regex engine rejected it
        reason: String,
    },

    /// A predicate reported a match length that does not fit the input
    InvalidMatchLength {
        /// The reported length in bytes
        length: usize,
        /// Remaining input length in bytes
        available: usize,
    },

    /// Input exceeds the configured maximum size
    InputTooLarge {
        /// Size of the input in bytes
        input_size: usize,
        /// Maximum allowed size in bytes
        max_size: usize,
    },
}

impl ParseError {
    /// Create an explicit failure message
    pub fn message(msg: impl Into<String>) -> Self {
        ParseError::Message(msg.into())
    }

    /// The expectation part of the message, without the quoted input
    pub fn expectation(&self) -> Option<&str> {
        match self {
            ParseError::Expected { expectation, .. } => Some(expectation),
            _ => None,
        }
    }

    /// Whether this error was raised explicitly by the grammar
    pub fn is_explicit(&self) -> bool {
        matches!(self, ParseError::Message(_))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Expected { expectation, got } => {
                write!(f, "{}, got {}", expectation, got)
            }
            ParseError::Message(msg) => f.write_str(msg),
            ParseError::InvalidPattern { pattern, reason } => {
                write!(f, "invalid pattern {}: {}", pattern, reason)
            }
            ParseError::InvalidMatchLength { length, available } => {
                write!(
                    f,
                    "predicate matched {} bytes but only {} are available",
                    length, available
                )
            }
            ParseError::InputTooLarge {
                input_size,
                max_size,
            } => {
                write!(
                    f,
                    "Input too large: {} bytes exceeds limit of {} bytes",
                    input_size, max_size
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<String> for ParseError {
    fn from(msg: String) -> Self {
        ParseError::Message(msg)
    }
}

impl From<&str> for ParseError {
    fn from(msg: &str) -> Self {
        ParseError::Message(msg.to_string())
    }
}
