//! Kombi - Parser Combinators for Rust
//!
//! Small parsers are combined into larger ones. A parser reads a prefix of
//! its [`Input`] and either succeeds with a [`Value`] and the remaining input,
//! or fails with a [`ParseError`] attributed to the input it was given.
//! It provides:
//! - Text leaves: literal strings, case-insensitive strings, regular
//!   expressions, end of input and custom predicates
//! - Sequencing, alternation, repetition, delimited lists and optionality
//! - Result transformation: map, capture, ignore and combine
//! - Automatic flattening of nested sequence results
//! - Recursive grammars through [`lazy`] and boxed parsers
//!
//! ## Quick Start
//!
//! ```rust
//! use kombi::prelude::*;
//!
//! let greeting = str("hello").then(str(" ").ignore()).then(re("[a-z]+")).then(eof());
//!
//! let s = greeting.parse_str("hello world").unwrap();
//! assert_eq!(
//!     s.result,
//!     Value::list(vec![Value::text("hello"), Value::text("world"), Value::EndOfFile])
//! );
//!
//! let f = greeting.parse_str("hello World").unwrap_err();
//! assert_eq!(f.to_string(), "expected pattern: [a-z]+, got World");
//! ```
//!
//! ## Feature Flags
//!
//! - `logging` - Enable debug logging using the `log` crate

// Lint configuration for production quality
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(clippy::module_inception)]
#![allow(clippy::redundant_closure)]

/// Logging macros - no-op when logging feature is disabled
#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

/// Logging macros - use log crate when logging feature is enabled
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*)
    }};
}

#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*)
    }};
}

// Prelude module for convenient imports
pub mod prelude;

pub mod combinator;
pub mod error;
pub mod flatten;
pub mod input;
pub mod parser;
pub mod regex_cache;
pub mod satisfy;
pub mod text;
pub mod value;

/// Re-export commonly used types for convenience
pub use combinator::{
    any_of, bind, capture, concat, default_to, delimited, ignore, map, n_or_more, one_or_more,
    optional, or, seq, then, zero_or_more, AnyOf, Bind, Capture, DefaultTo, Delimited, Ignore,
    Map, Optional, Or, ParserExt, Repeat, Seq, Then,
};
pub use error::ParseError;
pub use flatten::{combine, Combine};
pub use input::Input;
pub use parser::{
    boxed, fail, from_fn, lazy, ret, BoxedParser, Fail, Failure, FromFn, Lazy, Outcome, Parser,
    ParserConfig, Return, Success, DEFAULT_MAX_INPUT_SIZE,
};
pub use satisfy::{satisfy, Predicate, Satisfy};
pub use text::{eof, re, str, str_case_cmp, try_re, EndOfFile, Literal, Pattern, Text};
pub use value::Value;
