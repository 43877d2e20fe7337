//! The parser abstraction
//!
//! A [`Parser`] maps an [`Input`] to exactly one of a [`Success`] (a result
//! value plus the remaining input) or a [`Failure`] (an error plus the input it
//! applies to). Parsers hold no mutable state, so a composed grammar can be
//! shared freely and invoked on many inputs, including from several threads
//! when its parts are `Send + Sync`.

use super::{
    error::{ParseError, EXPECTED_END_OF_FILE},
    input::Input,
    value::Value,
};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Default maximum input size: 100 MB
pub const DEFAULT_MAX_INPUT_SIZE: usize = 100 * 1024 * 1024;

/// The outcome of a parse attempt
pub type Outcome<'a> = Result<Success<'a>, Failure<'a>>;

/// A type-erased parser
pub type BoxedParser<'a> = Box<dyn Parser<'a> + 'a>;

/// A successful match
#[derive(Debug, Clone, PartialEq)]
pub struct Success<'a> {
    /// The value produced by the parser
    pub result: Value<'a>,
    /// What remains of the input after the match
    pub remaining: Input<'a>,
}

impl<'a> Success<'a> {
    /// Create a success
    #[inline]
    pub fn new(result: Value<'a>, remaining: Input<'a>) -> Self {
        Self { result, remaining }
    }
}

/// A failed match
#[derive(Debug, Clone, PartialEq)]
pub struct Failure<'a> {
    /// Why the parser did not match
    pub error: ParseError,
    /// The input the failure is attributed to
    pub input: Input<'a>,
}

impl<'a> Failure<'a> {
    /// Create a failure
    #[inline]
    pub fn new(error: ParseError, input: Input<'a>) -> Self {
        Self { error, input }
    }

    /// Keep the error but attribute it to a different input
    #[inline]
    pub fn at(self, input: Input<'a>) -> Self {
        Self {
            error: self.error,
            input,
        }
    }
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for Failure<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Entry point limits and checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum allowed input size in bytes
    pub max_input_size: usize,

    /// Fail unless the parser consumes the whole input
    pub require_eof: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            require_eof: false,
        }
    }
}

impl ParserConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum input size
    pub fn with_max_input_size(mut self, size: usize) -> Self {
        self.max_input_size = size;
        self
    }

    /// Require the parser to consume all input
    pub fn with_require_eof(mut self, require: bool) -> Self {
        self.require_eof = require;
        self
    }
}

/// A parser: a pure function from input to outcome
///
/// Invoking the same parser on the same input always yields the same outcome.
pub trait Parser<'a> {
    /// Attempt to match the start of `input`
    fn parse(&self, input: Input<'a>) -> Outcome<'a>;

    /// Parse a source string
    fn parse_str(&self, source: &'a str) -> Outcome<'a> {
        let outcome = self.parse(Input::new(source));
        match &outcome {
            Ok(s) => log_debug!("parse succeeded with {} bytes remaining", s.remaining.len()),
            Err(f) => log_debug!("parse failed: {}", f.error),
        }
        outcome
    }

    /// Parse a source string under the given config
    fn parse_with(&self, source: &'a str, config: &ParserConfig) -> Outcome<'a> {
        let input = Input::new(source);
        if source.len() > config.max_input_size {
            return Err(Failure::new(
                ParseError::InputTooLarge {
                    input_size: source.len(),
                    max_size: config.max_input_size,
                },
                input,
            ));
        }
        let success = self.parse_str(source)?;
        if config.require_eof && !success.remaining.is_empty() {
            return Err(Failure::new(
                success.remaining.expected(EXPECTED_END_OF_FILE),
                input,
            ));
        }
        Ok(success)
    }
}

impl<'a, P: Parser<'a> + ?Sized> Parser<'a> for &P {
    #[inline]
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        (**self).parse(input)
    }
}

impl<'a, P: Parser<'a> + ?Sized> Parser<'a> for Box<P> {
    #[inline]
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        (**self).parse(input)
    }
}

impl<'a, P: Parser<'a> + ?Sized> Parser<'a> for Rc<P> {
    #[inline]
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        (**self).parse(input)
    }
}

impl<'a, P: Parser<'a> + ?Sized> Parser<'a> for Arc<P> {
    #[inline]
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        (**self).parse(input)
    }
}

/// Erase the type of a parser
pub fn boxed<'a, P: Parser<'a> + 'a>(parser: P) -> BoxedParser<'a> {
    Box::new(parser)
}

/// A parser built from a closure
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<'a, F> Parser<'a> for FromFn<F>
where
    F: Fn(Input<'a>) -> Outcome<'a>,
{
    #[inline]
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        (self.0)(input)
    }
}

/// Turn a closure into a parser
pub fn from_fn<'a, F>(f: F) -> FromFn<F>
where
    F: Fn(Input<'a>) -> Outcome<'a>,
{
    FromFn(f)
}

/// Consumes nothing and succeeds with a fixed value
#[derive(Debug, Clone)]
pub struct Return<'a> {
    value: Value<'a>,
}

impl<'a> Parser<'a> for Return<'a> {
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        Ok(Success::new(self.value.clone(), input))
    }
}

/// A parser that consumes nothing and succeeds with `value`
pub fn ret<'a>(value: impl Into<Value<'a>>) -> Return<'a> {
    Return {
        value: value.into(),
    }
}

/// Consumes nothing and always fails with a fixed message
#[derive(Debug, Clone)]
pub struct Fail {
    message: String,
}

impl<'a> Parser<'a> for Fail {
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        Err(Failure::new(ParseError::message(self.message.clone()), input))
    }
}

/// A parser that always fails with `message`
///
/// Use `format!` for messages with arguments.
pub fn fail(message: impl Into<String>) -> Fail {
    Fail {
        message: message.into(),
    }
}

/// Builds its parser at parse time
///
/// Breaks the cycle in recursive grammars: a rule can refer to itself
/// through `lazy(rule)`.
#[derive(Clone, Copy)]
pub struct Lazy<F> {
    factory: F,
}

impl<'a, F, P> Parser<'a> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'a>,
{
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        (self.factory)().parse(input)
    }
}

/// Defer construction of a parser until it runs
pub fn lazy<'a, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'a>,
{
    Lazy { factory }
}
