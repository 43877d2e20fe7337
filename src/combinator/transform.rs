//! Result transformation: `map`, `capture`, `ignore`

use crate::{
    input::Input,
    parser::{Outcome, Parser, Success},
    value::Value,
};

/// Replaces a parser's result with a mapped value
#[derive(Debug, Clone, Copy)]
pub struct Map<P, F> {
    inner: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    /// Create a map combinator
    pub fn new(inner: P, mapper: F) -> Self {
        Self { inner, mapper }
    }
}

impl<'a, P, F> Parser<'a> for Map<P, F>
where
    P: Parser<'a>,
    F: Fn(Value<'a>) -> Value<'a>,
{
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        let Success { result, remaining } = self.inner.parse(input)?;
        Ok(Success::new((self.mapper)(result), remaining))
    }
}

/// Transform the result of `parser` with `mapper`
pub fn map<'a, P, F>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'a>,
    F: Fn(Value<'a>) -> Value<'a>,
{
    Map::new(parser, mapper)
}

/// Shows a parser's result to a callback, leaving it unchanged
#[derive(Debug, Clone, Copy)]
pub struct Capture<P, F> {
    inner: P,
    accept: F,
}

impl<P, F> Capture<P, F> {
    /// Create a capture combinator
    pub fn new(inner: P, accept: F) -> Self {
        Self { inner, accept }
    }
}

impl<'a, P, F> Parser<'a> for Capture<P, F>
where
    P: Parser<'a>,
    F: Fn(&Value<'a>),
{
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        let success = self.inner.parse(input)?;
        (self.accept)(&success.result);
        Ok(success)
    }
}

/// Call `accept` with the result of every successful match of `parser`
///
/// The callback runs once per success and never on failure. It is the one
/// place where a grammar may have side effects; if the grammar is used from
/// several threads, the callback must be thread-safe.
pub fn capture<'a, P, F>(parser: P, accept: F) -> Capture<P, F>
where
    P: Parser<'a>,
    F: Fn(&Value<'a>),
{
    Capture::new(parser, accept)
}

/// Matches but contributes nothing to flattened results
#[derive(Debug, Clone, Copy)]
pub struct Ignore<P> {
    inner: P,
}

impl<P> Ignore<P> {
    /// Create an ignore combinator
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<'a, P: Parser<'a>> Parser<'a> for Ignore<P> {
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        let success = self.inner.parse(input)?;
        Ok(Success::new(Value::Ignore, success.remaining))
    }
}

/// Consume what `parser` matches but replace its result with the ignore
/// marker, which flattening drops
pub fn ignore<'a, P: Parser<'a>>(parser: P) -> Ignore<P> {
    Ignore::new(parser)
}
