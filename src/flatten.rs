//! Result flattening
//!
//! Sequencing combinators merge their children's results into one flat
//! [`Value::List`]: nested lists are spliced in place and [`Value::Ignore`]
//! markers are dropped. However deeply a chain of sequences is nested, its
//! result is a single ordered list. [`Combine`] then collapses such a list
//! into one value at a rule boundary.

use super::{
    input::Input,
    parser::{Outcome, Parser, Success},
    value::Value,
};

/// Merge two results into one flat list
pub fn combine_results<'a>(left: Value<'a>, right: Value<'a>) -> Value<'a> {
    let mut items = Vec::new();
    append_results(&mut items, left);
    append_results(&mut items, right);
    Value::List(items)
}

/// Append a result to a flat list, splicing lists and dropping ignore markers
pub fn append_results<'a>(items: &mut Vec<Value<'a>>, value: Value<'a>) {
    match value {
        Value::List(children) => {
            items.reserve(children.len());
            for child in children {
                append_results(items, child);
            }
        }
        Value::Ignore => {}
        other => items.push(other),
    }
}

/// Passes a parser's flattened results to a combiner function
#[derive(Clone, Copy)]
pub struct Combine<P, F> {
    inner: P,
    combiner: F,
}

impl<P, F> Combine<P, F> {
    /// Wrap a parser with a combiner
    pub fn new(inner: P, combiner: F) -> Self {
        Self { inner, combiner }
    }
}

impl<'a, P, F> Parser<'a> for Combine<P, F>
where
    P: Parser<'a>,
    F: Fn(Vec<Value<'a>>) -> Value<'a>,
{
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        let Success { result, remaining } = self.inner.parse(input)?;
        let args = match result {
            Value::List(items) => items,
            single => vec![single],
        };
        Ok(Success::new((self.combiner)(args), remaining))
    }
}

/// Collapse a parser's results into one value with `combiner`
///
/// The combiner receives the elements of a result list, or a single-element
/// vector when the parser produced a single value.
pub fn combine<'a, P, F>(parser: P, combiner: F) -> Combine<P, F>
where
    P: Parser<'a>,
    F: Fn(Vec<Value<'a>>) -> Value<'a>,
{
    Combine::new(parser, combiner)
}
