//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types, traits and
//! constructors from kombi. Importing it with a wildcard brings everything
//! needed to write a grammar into scope:
//!
//! ```
//! use kombi::prelude::*;
//!
//! let word = re("[a-z]+").one_or_more();
//! assert!(word.parse_str("abc").is_ok());
//! ```
//!
//! # Re-exported Items
//!
//! ## Core Types
//! - [`Parser`] - Trait implemented by every parser
//! - [`ParserExt`] - Fluent combinator methods
//! - [`Input`] - The text still to be parsed
//! - [`Value`] - Parse results
//! - [`Success`], [`Failure`], [`Outcome`] - What a parse produces
//! - [`ParseError`] - Why a parse failed
//! - [`ParserConfig`] - Limits for top-level parses
//!
//! ## Leaves
//! - [`str()`], [`str_case_cmp()`], [`re()`], [`eof()`]
//! - [`satisfy()`] with a [`Predicate`]
//! - [`ret()`], [`fail()`]
//!
//! ## Combinators
//! - [`seq()`], [`any_of()`], [`one_or_more()`], [`zero_or_more()`],
//!   [`delimited()`], [`optional()`], [`combine()`]
//! - [`lazy()`], [`boxed()`], [`from_fn()`]

pub use crate::{
    any_of, boxed, combine, delimited, eof, fail, from_fn, lazy, one_or_more, optional, re, ret,
    satisfy, seq, str, str_case_cmp, zero_or_more, BoxedParser, Failure, Input, Outcome,
    ParseError, Parser, ParserConfig, ParserExt, Predicate, Success, Value,
};
