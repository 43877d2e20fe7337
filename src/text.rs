//! Text leaves: literal strings, case-insensitive strings, regular
//! expressions and end of input
//!
//! Literal and pattern leaves are predicates run through
//! [`Satisfy`](crate::satisfy::Satisfy), with the raw matched slice mapped to
//! a [`Value::Text`].

use super::{
    combinator::Map,
    error::{ParseError, EXPECTED_END_OF_FILE, EXPECTED_PATTERN, EXPECTED_STRING},
    input::Input,
    parser::{Failure, Outcome, Parser, Success},
    regex_cache,
    satisfy::{Predicate, Satisfy},
    value::Value,
};
use regex::Regex;
use std::borrow::Cow;

/// Mapper turning a raw match into text
pub type TextMapper = for<'x> fn(Value<'x>) -> Value<'x>;

/// A leaf parser: a predicate whose match is returned as text
pub type Text<P> = Map<Satisfy<P>, TextMapper>;

fn to_text(value: Value<'_>) -> Value<'_> {
    match value {
        Value::Match(input) => Value::Text(Cow::Borrowed(input.as_str())),
        other => other,
    }
}

fn text_leaf<P>(predicate: P) -> Text<P> {
    Map::new(Satisfy::new(predicate), to_text as TextMapper)
}

/// Recognizes a fixed string at the start of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    expected: String,
    /// Uppercased form, set for case-insensitive matching
    folded: Option<String>,
    char_count: usize,
}

impl Literal {
    /// Match `expected` exactly
    pub fn exact(expected: impl Into<String>) -> Self {
        let expected = expected.into();
        Self {
            char_count: expected.chars().count(),
            folded: None,
            expected,
        }
    }

    /// Match `expected` ignoring case
    pub fn ignore_case(expected: impl Into<String>) -> Self {
        let expected = expected.into();
        Self {
            char_count: expected.chars().count(),
            folded: Some(expected.to_uppercase()),
            expected,
        }
    }

    /// The string as given by the caller
    pub fn expected(&self) -> &str {
        &self.expected
    }

    fn mismatch(&self, input: Input<'_>) -> ParseError {
        input.expected(format!("{} {}", EXPECTED_STRING, self.expected))
    }
}

impl<'a> Predicate<'a> for Literal {
    fn check(&self, input: Input<'a>) -> Result<usize, ParseError> {
        match &self.folded {
            None if input.as_str().starts_with(self.expected.as_str()) => Ok(self.expected.len()),
            None => Err(self.mismatch(input)),
            Some(folded) => {
                let candidate = input.prefix_chars(self.char_count);
                if candidate.as_str().to_uppercase() == *folded {
                    Ok(candidate.len())
                } else {
                    Err(self.mismatch(input))
                }
            }
        }
    }
}

/// Match the string `s` exactly
pub fn str(s: impl Into<String>) -> Text<Literal> {
    text_leaf(Literal::exact(s))
}

/// Match the string `s` ignoring case; the result is the text as it appears
/// in the input
pub fn str_case_cmp(s: impl Into<String>) -> Text<Literal> {
    text_leaf(Literal::ignore_case(s))
}

/// Recognizes a regular expression at the start of the input
#[derive(Debug, Clone)]
pub struct Pattern {
    pattern: String,
    compiled: Result<Regex, String>,
}

impl Pattern {
    /// Compile `pattern`, reporting invalid patterns immediately
    pub fn new(pattern: impl Into<String>) -> Result<Self, regex::Error> {
        let pattern = pattern.into();
        let regex = regex_cache::get_or_compile(&regex_cache::anchored(&pattern))?;
        Ok(Self {
            pattern,
            compiled: Ok(regex),
        })
    }

    /// Compile `pattern`; if it is invalid, every parse fails with
    /// [`ParseError::InvalidPattern`]
    pub fn lenient(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let compiled = regex_cache::get_or_compile(&regex_cache::anchored(&pattern))
            .map_err(|e| e.to_string());
        Self { pattern, compiled }
    }

    /// The pattern as given by the caller
    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl<'a> Predicate<'a> for Pattern {
    fn check(&self, input: Input<'a>) -> Result<usize, ParseError> {
        let regex = self
            .compiled
            .as_ref()
            .map_err(|reason| ParseError::InvalidPattern {
                pattern: self.pattern.clone(),
                reason: reason.clone(),
            })?;
        match regex.find(input.as_str()) {
            Some(m) => Ok(m.end()),
            None => Err(input.expected(format!("{} {}", EXPECTED_PATTERN, self.pattern))),
        }
    }
}

/// Match the regular expression `pattern` at the start of the input
///
/// An invalid pattern makes every parse fail with
/// [`ParseError::InvalidPattern`]; use [`try_re`] to catch it up front.
pub fn re(pattern: impl Into<String>) -> Text<Pattern> {
    text_leaf(Pattern::lenient(pattern))
}

/// Like [`re`], but rejects an invalid pattern immediately
pub fn try_re(pattern: impl Into<String>) -> Result<Text<Pattern>, regex::Error> {
    Pattern::new(pattern).map(text_leaf)
}

/// Matches the end of the input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndOfFile;

impl<'a> Parser<'a> for EndOfFile {
    fn parse(&self, input: Input<'a>) -> Outcome<'a> {
        if input.is_empty() {
            Ok(Success::new(Value::EndOfFile, input))
        } else {
            Err(Failure::new(input.expected(EXPECTED_END_OF_FILE), input))
        }
    }
}

/// Match the end of the input, yielding [`Value::EndOfFile`]
pub fn eof() -> EndOfFile {
    EndOfFile
}
