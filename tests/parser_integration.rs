//! Integration tests for core parser functionality
//!
//! These tests cover the fundamental parsing operations including:
//! - String and regular expression matching
//! - Sequence and choice combinators
//! - Repetition and delimited lists
//! - Optional values and result transformation

use kombi::{
    any_of, bind, capture, default_to, delimited, eof, fail, ignore, map, one_or_more, optional,
    re, ret, satisfy, seq, str, str_case_cmp, zero_or_more, Input, ParseError, Parser, ParserExt,
    Value,
};
use std::cell::RefCell;

fn parse_int(v: Value<'_>) -> Value<'_> {
    match v.as_str().and_then(|s| s.parse::<i64>().ok()) {
        Some(n) => Value::int(n),
        None => v,
    }
}

// ============================================================================
// Leaf Tests
// ============================================================================

#[test]
fn test_str_then_eof() {
    let hello = str("hello").then(eof());

    let s = hello.parse_str("hello").expect("Should parse 'hello'");
    assert!(s.remaining.is_empty());
    assert_eq!(
        s.result,
        Value::list(vec![Value::text("hello"), Value::EndOfFile])
    );
}

#[test]
fn test_str_then_eof_trailing_input() {
    let hello = str("hello").then(eof());

    let f = hello.parse_str("hello you").unwrap_err();
    assert_eq!(f.to_string(), "expected end of file, got  you");
    assert_eq!(f.input, "hello you");
}

#[test]
fn test_str_empty_literal() {
    let s = str("").parse_str("abc").unwrap();
    assert_eq!(s.result, Value::text(""));
    assert_eq!(s.remaining, "abc");
}

#[test]
fn test_str_case_cmp_keeps_input_case() {
    let s = str_case_cmp("select").parse_str("SeLeCt *").unwrap();
    assert_eq!(s.result.as_str(), Some("SeLeCt"));
    assert_eq!(s.remaining, " *");
}

#[test]
fn test_re_map_to_integer() {
    let number = re("[0-9]+").map(parse_int);

    let s = number.parse_str("1001").unwrap();
    assert_eq!(s.result, Value::int(1001));
    assert_eq!(s.result.as_int(), Some(1001));
    assert!(s.remaining.is_empty());
}

#[test]
fn test_satisfy_custom_predicate() {
    let spaces = satisfy(|input: Input<'_>| -> Result<usize, ParseError> {
        match input.as_str().find(|c: char| !c.is_whitespace()) {
            Some(0) => Err(input.expected("expected whitespace")),
            Some(n) => Ok(n),
            None => Ok(input.len()),
        }
    });

    let s = spaces.parse_str("   x").unwrap();
    assert_eq!(s.result.as_str(), Some("   "));
    assert_eq!(s.remaining, "x");

    let f = spaces.parse_str("x").unwrap_err();
    assert_eq!(f.to_string(), "expected whitespace, got x");
}

#[test]
fn test_satisfy_length_past_end() {
    let greedy = satisfy(|input: Input<'_>| -> Result<usize, ParseError> {
        Ok(input.len() + 1)
    });
    let f = greedy.parse_str("abc").unwrap_err();
    assert!(matches!(
        f.error,
        ParseError::InvalidMatchLength {
            length: 4,
            available: 3
        }
    ));
    assert_eq!(f.input, "abc");
}

#[test]
fn test_ret_and_fail() {
    let s = ret(42i64).parse_str("abc").unwrap();
    assert_eq!(s.result, Value::int(42));
    assert_eq!(s.remaining, "abc");

    let f = fail("nothing here").parse_str("abc").unwrap_err();
    assert_eq!(f.to_string(), "nothing here");
    assert!(f.error.is_explicit());
    assert_eq!(f.input, "abc");
}

// ============================================================================
// Sequence Tests
// ============================================================================

#[test]
fn test_then_chain_flattens() {
    let p = str("a").then(str("b")).then(str("c").then(str("d")));
    let s = p.parse_str("abcd").unwrap();
    assert_eq!(
        s.result,
        Value::list(vec![
            Value::text("a"),
            Value::text("b"),
            Value::text("c"),
            Value::text("d")
        ])
    );
}

#[test]
fn test_then_failure_attributed_to_start() {
    let p = str("key").then(str("=")).then(re("[0-9]+"));
    let f = p.parse_str("key=abc").unwrap_err();
    assert_eq!(f.to_string(), "expected pattern: [0-9]+, got abc");
    assert_eq!(f.input, "key=abc");
}

#[test]
fn test_seq_of_boxed_parsers() {
    let p = seq(vec![str("(").boxed(), re("[a-z]+").boxed(), str(")").boxed()]);
    let s = p.parse_str("(abc)").unwrap();
    assert_eq!(s.result.len(), 3);
    assert_eq!(s.result.get_index(1).and_then(Value::as_str), Some("abc"));
}

#[test]
fn test_bind_length_prefixed() {
    let field = re("[0-9]").bind(|count| {
        let n = count.as_str().and_then(|s| s.parse::<usize>().ok()).unwrap_or(0);
        re(format!("[a-z]{{{}}}", n))
    });

    let s = field.parse_str("3abcd").unwrap();
    assert_eq!(
        s.result,
        Value::list(vec![Value::text("3"), Value::text("abc")])
    );
    assert_eq!(s.remaining, "d");

    let f = field.parse_str("5abc").unwrap_err();
    assert_eq!(f.input, "5abc");
}

#[test]
fn test_bind_free_function() {
    let p = bind(str("x"), |_| str("y"));
    assert!(p.parse_str("xy").is_ok());
    assert!(p.parse_str("xz").is_err());
}

// ============================================================================
// Choice Tests
// ============================================================================

#[test]
fn test_or_backtracks() {
    let p = str("ab").then(str("c")).or(str("abd"));
    let s = p.parse_str("abd").unwrap();
    assert_eq!(s.result, Value::text("abd"));
    assert!(s.remaining.is_empty());
}

#[test]
fn test_any_of_reports_last_failure() {
    let p = any_of(vec![str("hi").then(eof()).boxed(), eof().boxed()]);
    let f = p.parse_str("nope").unwrap_err();
    assert_eq!(f.to_string(), "expected end of file, got nope");
}

#[test]
fn test_any_of_keywords() {
    let keyword = any_of(vec![str("let"), str("if"), str("else")]);
    assert_eq!(
        keyword.parse_str("if x").unwrap().result,
        Value::text("if")
    );
    let f = keyword.parse_str("while").unwrap_err();
    assert_eq!(f.to_string(), "expected string else, got while");
}

#[test]
fn test_any_of_empty() {
    let none: Vec<kombi::BoxedParser<'_>> = Vec::new();
    let f = any_of(none).parse_str("x").unwrap_err();
    assert_eq!(f.to_string(), kombi::combinator::NO_ALTERNATIVES);
}

// ============================================================================
// Repetition Tests
// ============================================================================

#[test]
fn test_one_or_more_hello() {
    let s = str("hello").one_or_more().parse_str("hellohellohello").unwrap();
    assert_eq!(
        s.result,
        Value::list(vec![
            Value::text("hello"),
            Value::text("hello"),
            Value::text("hello")
        ])
    );
    assert!(s.remaining.is_empty());
}

#[test]
fn test_zero_or_more_no_match() {
    let s = zero_or_more(str("x")).parse_str("yyy").unwrap();
    assert!(s.result.is_empty());
    assert_eq!(s.remaining, "yyy");
}

#[test]
fn test_one_or_more_no_match() {
    assert!(one_or_more(str("x")).parse_str("yyy").is_err());
}

#[test]
fn test_delimited_numbers() {
    let s = re("[0-9]+").delimited(str(",")).parse_str("1,2,42").unwrap();
    assert_eq!(
        s.result,
        Value::list(vec![
            Value::text("1"),
            Value::text("2"),
            Value::text("42")
        ])
    );
}

#[test]
fn test_delimited_with_spacing() {
    let comma = re(r"\s*,\s*");
    let list = delimited(re("[a-z]+"), comma);
    let s = list.parse_str("a , b,c ;").unwrap();
    assert_eq!(s.result.len(), 3);
    assert_eq!(s.remaining, " ;");
}

// ============================================================================
// Optional and Transform Tests
// ============================================================================

#[test]
fn test_optional_sign() {
    let signed = optional(str("-")).then(re("[0-9]+"));

    let s = signed.parse_str("-5").unwrap();
    assert_eq!(
        s.result,
        Value::list(vec![Value::text("-"), Value::text("5")])
    );

    let s = signed.parse_str("5").unwrap();
    assert_eq!(s.result, Value::list(vec![Value::Nil, Value::text("5")]));
}

#[test]
fn test_default_to_free_function() {
    let p = default_to(str("y"), || Value::bool(false));
    assert_eq!(p.parse_str("n").unwrap().result, Value::bool(false));
}

#[test]
fn test_ignore_drops_punctuation() {
    let call = re("[a-z]+")
        .then(ignore(str("(")))
        .then(re("[0-9]+").map(parse_int))
        .then(str(")").ignore());
    let s = call.parse_str("f(10)").unwrap();
    assert_eq!(
        s.result,
        Value::list(vec![Value::text("f"), Value::int(10)])
    );
}

#[test]
fn test_map_free_function() {
    let p = map(str("yes"), |_| Value::bool(true));
    assert_eq!(p.parse_str("yes").unwrap().result, Value::bool(true));
}

#[test]
fn test_capture_sees_each_item() {
    let seen = RefCell::new(Vec::new());
    let word = capture(re("[a-z]+"), |v| {
        seen.borrow_mut()
            .push(v.as_str().unwrap_or_default().to_string())
    });
    let words = word.delimited(str(" "));
    assert!(words.parse_str("one two three").is_ok());
    assert_eq!(*seen.borrow(), vec!["one", "two", "three"]);
}

#[test]
fn test_capture_not_called_on_failure() {
    let calls = RefCell::new(0);
    let p = str("a").capture(|_| *calls.borrow_mut() += 1);
    assert!(p.parse_str("b").is_err());
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn test_combine_into_array_keeps_nesting() {
    let pair = re("[0-9]+")
        .map(parse_int)
        .then(str(":").ignore())
        .then(re("[0-9]+").map(parse_int))
        .combine(Value::array);
    let pairs = pair.delimited(str(","));
    let s = pairs.parse_str("1:2,3:4").unwrap();
    assert_eq!(
        s.result,
        Value::list(vec![
            Value::array(vec![Value::int(1), Value::int(2)]),
            Value::array(vec![Value::int(3), Value::int(4)]),
        ])
    );
}

#[test]
fn test_fail_after_match() {
    let reserved = str("goto").fail("goto is reserved");
    let f = reserved.parse_str("goto x").unwrap_err();
    assert_eq!(f.to_string(), "goto is reserved");
    assert_eq!(f.input, "goto x");

    let word = reserved.or(re("[a-z]+"));
    assert_eq!(word.parse_str("gone").unwrap().result, Value::text("gone"));
}
