//! Combinators - building parsers from parsers
//!
//! Each combinator is a small struct holding its child parsers, with a free
//! constructor function and a method on [`ParserExt`].
//!
//! # Example
//!
//! ```rust
//! use kombi::prelude::*;
//!
//! let numbers = re("[0-9]+")
//!     .map(|v| Value::int(v.as_str().and_then(|s| s.parse().ok()).unwrap_or(0)))
//!     .delimited(str(","))
//!     .then(eof());
//!
//! let s = numbers.parse_str("1,2,42").unwrap();
//! assert_eq!(
//!     s.result,
//!     Value::list(vec![Value::int(1), Value::int(2), Value::int(42), Value::EndOfFile])
//! );
//! ```

pub mod choice;
pub mod optional;
pub mod repeat;
pub mod sequence;
pub mod transform;

pub use choice::{any_of, or, AnyOf, Or, NO_ALTERNATIVES};
pub use optional::{default_to, optional, DefaultTo, Optional};
pub use repeat::{delimited, n_or_more, one_or_more, zero_or_more, Delimited, Repeat};
pub use sequence::{bind, concat, seq, then, Bind, Seq, Then};
pub use transform::{capture, ignore, map, Capture, Ignore, Map};

use crate::{
    flatten::Combine,
    parser::{fail, ret, BoxedParser, Fail, Parser, Return},
    satisfy::{Predicate, Satisfy},
    text::EndOfFile,
    value::Value,
};

/// Extension trait with the fluent combinator methods
pub trait ParserExt<'a>: Parser<'a> + Sized {
    /// Run this parser, then the parser `binder` picks from its result
    fn bind<F, Q>(self, binder: F) -> Bind<Self, F, Q>
    where
        F: Fn(&Value<'a>) -> Q,
        Q: Parser<'a>,
    {
        Bind::new(self, binder)
    }

    /// Sequence: match this, then `other`
    fn then<R: Parser<'a>>(self, other: R) -> Then<Self, R> {
        Then::new(self, other)
    }

    /// Sequence: concatenate this result with the result of `other`
    fn concat<R: Parser<'a>>(self, other: R) -> Then<Self, R> {
        Then::new(self, other)
    }

    /// Alternative: this, or else `other`
    fn or<R: Parser<'a>>(self, other: R) -> Or<Self, R> {
        Or::new(self, other)
    }

    /// Transform the result
    fn map<F>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Value<'a>) -> Value<'a>,
    {
        Map::new(self, mapper)
    }

    /// Observe the result of each success
    fn capture<F>(self, accept: F) -> Capture<Self, F>
    where
        F: Fn(&Value<'a>),
    {
        Capture::new(self, accept)
    }

    /// Drop the result from flattened lists
    fn ignore(self) -> Ignore<Self> {
        Ignore::new(self)
    }

    /// Collapse the flattened results into one value
    fn combine<F>(self, combiner: F) -> Combine<Self, F>
    where
        F: Fn(Vec<Value<'a>>) -> Value<'a>,
    {
        Combine::new(self, combiner)
    }

    /// Match one or more times
    fn one_or_more(self) -> Repeat<Self> {
        Repeat::new(self, 1)
    }

    /// Match zero or more times
    fn zero_or_more(self) -> Repeat<Self> {
        Repeat::new(self, 0)
    }

    /// Match one or more times, separated by `delimiter`
    fn delimited<D: Parser<'a>>(self, delimiter: D) -> Delimited<Self, D> {
        Delimited::new(self, delimiter)
    }

    /// Match optionally, yielding nil when absent
    fn optional(self) -> Optional<'a, Self> {
        optional(self)
    }

    /// Match optionally, yielding `emit()` when absent
    fn default_to<F>(self, emit: F) -> DefaultTo<Self, F>
    where
        F: Fn() -> Value<'a>,
    {
        DefaultTo::new(self, emit)
    }

    /// Match this, then add `value` to the results
    fn returning(self, value: impl Into<Value<'a>>) -> Then<Self, Return<'a>> {
        Then::new(self, ret(value))
    }

    /// Match this, then fail with `message`
    fn fail(self, message: impl Into<String>) -> Then<Self, Fail> {
        Then::new(self, fail(message))
    }

    /// Match this, then whatever `predicate` recognizes
    fn satisfy<P: Predicate<'a>>(self, predicate: P) -> Then<Self, Satisfy<P>> {
        Then::new(self, Satisfy::new(predicate))
    }

    /// Match this, then the end of input
    fn eof(self) -> Then<Self, EndOfFile> {
        Then::new(self, EndOfFile)
    }

    /// Erase the parser's type
    fn boxed(self) -> BoxedParser<'a>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<'a, P: Parser<'a>> ParserExt<'a> for P {}
