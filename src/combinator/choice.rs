//! Alternation: `or`, `any_of`
//!
//! Each alternative starts from the same, untouched input. Since inputs are
//! immutable there is no backtracking state to restore.

use crate::{
    error::ParseError,
    input::Input,
    parser::{Failure, Outcome, Parser},
};

/// Message of the failure produced by an empty [`any_of`]
pub const NO_ALTERNATIVES: &str = "no alternatives to try";

/// Alternative of two parsers
#[derive(Debug, Clone, Copy)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Create an alternative
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<'a, L, R> Parser<'a> for Or<L, R>
where
    L: Parser<'a>,
    R: Parser<'a>,
{
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        match self.left.parse(input) {
            Ok(success) => Ok(success),
            Err(_) => self.right.parse(input),
        }
    }
}

/// Try `left`; if it fails, try `right` on the same input
pub fn or<'a, L, R>(left: L, right: R) -> Or<L, R>
where
    L: Parser<'a>,
    R: Parser<'a>,
{
    Or::new(left, right)
}

/// A choice of multiple parsers
pub struct AnyOf<P>(pub Vec<P>);

impl<'a, P: Parser<'a>> Parser<'a> for AnyOf<P> {
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        let mut last = None;
        for parser in &self.0 {
            match parser.parse(input) {
                Ok(success) => return Ok(success),
                Err(failure) => last = Some(failure),
            }
        }
        log_trace!("all {} alternatives failed", self.0.len());
        Err(last.unwrap_or_else(|| Failure::new(ParseError::message(NO_ALTERNATIVES), input)))
    }
}

/// Try each parser in order; the first success wins
///
/// When every alternative fails, the failure of the *last* one is returned.
pub fn any_of<'a, P: Parser<'a>>(parsers: Vec<P>) -> AnyOf<P> {
    AnyOf(parsers)
}
