//! Predicates and the `satisfy` bridge
//!
//! A [`Predicate`] looks at the start of the input and reports how many bytes
//! it recognizes. [`satisfy`] turns a predicate into a [`Parser`] whose result
//! is the matched slice. All text leaves are built this way.

use super::{
    error::ParseError,
    input::Input,
    parser::{Failure, Outcome, Parser, Success},
    value::Value,
};

/// Recognizes a prefix of the input
pub trait Predicate<'a> {
    /// Length in bytes of the recognized prefix, or why there is none
    fn check(&self, input: Input<'a>) -> Result<usize, ParseError>;
}

impl<'a, F> Predicate<'a> for F
where
    F: Fn(Input<'a>) -> Result<usize, ParseError>,
{
    #[inline]
    fn check(&self, input: Input<'a>) -> Result<usize, ParseError> {
        self(input)
    }
}

/// Parser that consumes whatever its predicate recognizes
#[derive(Debug, Clone, Copy)]
pub struct Satisfy<P> {
    predicate: P,
}

impl<P> Satisfy<P> {
    /// Wrap a predicate
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<'a, P: Predicate<'a>> Parser<'a> for Satisfy<P> {
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        let len = self
            .predicate
            .check(input)
            .map_err(|error| Failure::new(error, input))?;
        match input.split_at(len) {
            Some((matched, remaining)) => Ok(Success::new(Value::Match(matched), remaining)),
            None => Err(Failure::new(
                ParseError::InvalidMatchLength {
                    length: len,
                    available: input.len(),
                },
                input,
            )),
        }
    }
}

/// Build a parser from a predicate
pub fn satisfy<'a, P: Predicate<'a>>(predicate: P) -> Satisfy<P> {
    Satisfy::new(predicate)
}
