//! Quantifiers: `one_or_more`, `zero_or_more`, `delimited`
//!
//! Repetition runs in a loop, so stack depth does not grow with the number of
//! matches. A repeated parser that succeeds without consuming input never
//! stops; guarding against that is up to the grammar.

use crate::{
    flatten::append_results,
    input::Input,
    parser::{Outcome, Parser, Success},
    value::Value,
};

/// Repetition with a minimum count
#[derive(Debug, Clone, Copy)]
pub struct Repeat<P> {
    inner: P,
    min: usize,
}

impl<P> Repeat<P> {
    /// Match `inner` at least `min` times
    pub fn new(inner: P, min: usize) -> Self {
        Self { inner, min }
    }
}

impl<'a, P: Parser<'a>> Parser<'a> for Repeat<P> {
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        let mut items = Vec::new();
        let mut next = input;
        let mut count = 0;
        loop {
            match self.inner.parse(next) {
                Ok(success) => {
                    append_results(&mut items, success.result);
                    next = success.remaining;
                    count += 1;
                }
                Err(failure) if count < self.min => return Err(failure),
                Err(_) => {
                    log_trace!("repetition stopped after {} matches", count);
                    return Ok(Success::new(Value::List(items), next));
                }
            }
        }
    }
}

/// Match `parser` as many times as possible, at least `min` times
pub fn n_or_more<'a, P: Parser<'a>>(min: usize, parser: P) -> Repeat<P> {
    Repeat::new(parser, min)
}

/// Match `parser` one or more times, flattening the results into a list
pub fn one_or_more<'a, P: Parser<'a>>(parser: P) -> Repeat<P> {
    Repeat::new(parser, 1)
}

/// Match `parser` zero or more times; never fails
pub fn zero_or_more<'a, P: Parser<'a>>(parser: P) -> Repeat<P> {
    Repeat::new(parser, 0)
}

/// One or more items separated by a delimiter
///
/// Delimiter results are never part of the result list.
#[derive(Debug, Clone, Copy)]
pub struct Delimited<P, D> {
    item: P,
    delimiter: D,
}

impl<P, D> Delimited<P, D> {
    /// Create a delimited list combinator
    pub fn new(item: P, delimiter: D) -> Self {
        Self { item, delimiter }
    }
}

impl<'a, P, D> Parser<'a> for Delimited<P, D>
where
    P: Parser<'a>,
    D: Parser<'a>,
{
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        let first = self.item.parse(input)?;
        let mut items = Vec::new();
        append_results(&mut items, first.result);
        let mut next = first.remaining;
        loop {
            let Ok(delimiter) = self.delimiter.parse(next) else {
                break;
            };
            let Ok(item) = self.item.parse(delimiter.remaining) else {
                break;
            };
            append_results(&mut items, item.result);
            next = item.remaining;
        }
        Ok(Success::new(Value::List(items), next))
    }
}

/// Match `item`, then any number of `delimiter item` pairs
///
/// A trailing delimiter without an item after it is left unconsumed.
pub fn delimited<'a, P, D>(item: P, delimiter: D) -> Delimited<P, D>
where
    P: Parser<'a>,
    D: Parser<'a>,
{
    Delimited::new(item, delimiter)
}
