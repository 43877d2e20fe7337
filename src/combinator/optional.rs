//! Optionality: `default_to`, `optional`
//!
//! Both combinators turn a failure into a success that consumes nothing, so
//! they can never fail themselves.

use crate::{
    input::Input,
    parser::{Outcome, Parser, Success},
    value::Value,
};

/// Falls back to an emitted value when its parser fails
#[derive(Debug, Clone, Copy)]
pub struct DefaultTo<P, F> {
    inner: P,
    emit: F,
}

impl<P, F> DefaultTo<P, F> {
    /// Create a default-to combinator
    pub fn new(inner: P, emit: F) -> Self {
        Self { inner, emit }
    }
}

impl<'a, P, F> Parser<'a> for DefaultTo<P, F>
where
    P: Parser<'a>,
    F: Fn() -> Value<'a>,
{
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        match self.inner.parse(input) {
            Ok(success) => Ok(success),
            Err(_) => Ok(Success::new((self.emit)(), input)),
        }
    }
}

/// Match `parser`, or succeed with `emit()` without consuming input
pub fn default_to<'a, P, F>(parser: P, emit: F) -> DefaultTo<P, F>
where
    P: Parser<'a>,
    F: Fn() -> Value<'a>,
{
    DefaultTo::new(parser, emit)
}

/// Parser returned by [`optional`]
pub type Optional<'a, P> = DefaultTo<P, fn() -> Value<'a>>;

/// Match `parser`, or succeed with [`Value::Nil`] without consuming input
pub fn optional<'a, P: Parser<'a>>(parser: P) -> Optional<'a, P> {
    let emit: fn() -> Value<'a> = Value::nil;
    DefaultTo::new(parser, emit)
}
