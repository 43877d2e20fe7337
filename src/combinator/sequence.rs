//! Sequencing: `bind`, `then`, `seq`
//!
//! Every sequencing combinator flattens its children's results into one list
//! (see [`crate::flatten`]). When a parser after the first one fails, the
//! failure is re-attributed to the input at the start of the sequence, so each
//! level of a grammar reports the text it was trying to match.

use crate::{
    flatten::{append_results, combine_results},
    input::Input,
    parser::{Outcome, Parser, Success},
    value::Value,
};
use std::marker::PhantomData;

/// Runs a parser, then a parser chosen from its result
pub struct Bind<P, F, Q> {
    inner: P,
    binder: F,
    _next: PhantomData<fn() -> Q>,
}

impl<P, F, Q> Bind<P, F, Q> {
    /// Create a bind combinator
    pub fn new(inner: P, binder: F) -> Self {
        Self {
            inner,
            binder,
            _next: PhantomData,
        }
    }
}

impl<'a, P, F, Q> Parser<'a> for Bind<P, F, Q>
where
    P: Parser<'a>,
    F: Fn(&Value<'a>) -> Q,
    Q: Parser<'a>,
{
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        let first = self.inner.parse(input)?;
        let next = (self.binder)(&first.result);
        match next.parse(first.remaining) {
            Ok(second) => Ok(Success::new(
                combine_results(first.result, second.result),
                second.remaining,
            )),
            Err(failure) => Err(failure.at(input)),
        }
    }
}

/// Run `parser`, pick the next parser from its result with `binder`, and
/// flatten both results together
pub fn bind<'a, P, F, Q>(parser: P, binder: F) -> Bind<P, F, Q>
where
    P: Parser<'a>,
    F: Fn(&Value<'a>) -> Q,
    Q: Parser<'a>,
{
    Bind::new(parser, binder)
}

/// Sequence of two parsers
#[derive(Debug, Clone, Copy)]
pub struct Then<L, R> {
    left: L,
    right: R,
}

impl<L, R> Then<L, R> {
    /// Create a sequence
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<'a, L, R> Parser<'a> for Then<L, R>
where
    L: Parser<'a>,
    R: Parser<'a>,
{
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        let first = self.left.parse(input)?;
        match self.right.parse(first.remaining) {
            Ok(second) => Ok(Success::new(
                combine_results(first.result, second.result),
                second.remaining,
            )),
            Err(failure) => Err(failure.at(input)),
        }
    }
}

/// Match `left` then `right`, flattening both results into one list
pub fn then<'a, L, R>(left: L, right: R) -> Then<L, R>
where
    L: Parser<'a>,
    R: Parser<'a>,
{
    Then::new(left, right)
}

/// Same as [`then`]; reads better when building up result lists
pub fn concat<'a, L, R>(left: L, right: R) -> Then<L, R>
where
    L: Parser<'a>,
    R: Parser<'a>,
{
    Then::new(left, right)
}

/// A sequence of any number of parsers
pub struct Seq<P>(pub Vec<P>);

impl<'a, P: Parser<'a>> Parser<'a> for Seq<P> {
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        let mut items = Vec::new();
        let mut remaining = input;
        for (i, parser) in self.0.iter().enumerate() {
            match parser.parse(remaining) {
                Ok(success) => {
                    append_results(&mut items, success.result);
                    remaining = success.remaining;
                }
                Err(failure) if i == 0 => return Err(failure),
                Err(failure) => return Err(failure.at(input)),
            }
        }
        Ok(Success::new(Value::List(items), remaining))
    }
}

/// Match all parsers in order, flattening their results into one list
///
/// Use [`boxed`](crate::boxed) to mix parsers of different types.
pub fn seq<'a, P: Parser<'a>>(parsers: Vec<P>) -> Seq<P> {
    Seq(parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{boxed, fail, ret, text::str, BoxedParser, ParserExt};

    #[test]
    fn test_bind_chooses_next_parser() {
        let bound = str("hello").or(str("explode")).bind(|r| {
            if r.as_str() == Some("hello") {
                boxed(str(" there!"))
            } else {
                boxed(fail("exploded"))
            }
        });

        let s = bound.parse_str("hello there!").unwrap();
        assert_eq!(
            s.result,
            Value::list(vec![Value::text("hello"), Value::text(" there!")])
        );
        assert!(s.remaining.is_empty());

        let f = bound.parse_str("explode").unwrap_err();
        assert_eq!(f.to_string(), "exploded");
    }

    #[test]
    fn test_bind_first_failure_is_unchanged() {
        let bound = bind(str("a"), |_| str("b"));
        let f = bound.parse_str("xb").unwrap_err();
        assert_eq!(f.to_string(), "expected string a, got xb");
        assert_eq!(f.input, "xb");
    }

    #[test]
    fn test_bind_second_failure_is_rewrapped() {
        let bound = bind(str("a"), |_| str("b"));
        let f = bound.parse_str("ax").unwrap_err();
        assert_eq!(f.to_string(), "expected string b, got x");
        assert_eq!(f.input, "ax");
    }

    #[test]
    fn test_then_flattens() {
        let p = then(str("a"), then(str("b"), str("c")));
        let s = p.parse_str("abcd").unwrap();
        assert_eq!(
            s.result,
            Value::list(vec![Value::text("a"), Value::text("b"), Value::text("c")])
        );
        assert_eq!(s.remaining, "d");
    }

    #[test]
    fn test_then_rewraps_nested_failure_per_level() {
        let inner = then(str("b"), str("c"));
        let p = then(str("a"), inner);
        let f = p.parse_str("abx").unwrap_err();
        assert_eq!(f.to_string(), "expected string c, got x");
        assert_eq!(f.input, "abx");
    }

    #[test]
    fn test_concat_matches_then() {
        let a = concat(str("x"), str("y")).parse_str("xyz").unwrap();
        let b = then(str("x"), str("y")).parse_str("xyz").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seq_mixed_parsers() {
        let p = seq(vec![boxed(str("a")), boxed(ret(1i64)), boxed(str("b"))]);
        let s = p.parse_str("ab").unwrap();
        assert_eq!(
            s.result,
            Value::list(vec![Value::text("a"), Value::int(1), Value::text("b")])
        );
    }

    #[test]
    fn test_seq_failure_attribution() {
        let p = seq(vec![str("a"), str("b")]);
        assert_eq!(p.parse_str("xb").unwrap_err().input, "xb");
        assert_eq!(p.parse_str("ax").unwrap_err().input, "ax");
    }

    #[test]
    fn test_seq_empty() {
        let p: Seq<BoxedParser<'_>> = seq(Vec::new());
        let s = p.parse_str("rest").unwrap();
        assert_eq!(s.result, Value::list(Vec::new()));
        assert_eq!(s.remaining, "rest");
    }
}
