//! Parse result values
//!
//! Every successful parse carries a [`Value`]. Leaves produce text, mappers
//! and combiners produce whatever the grammar needs, and sequencing
//! combinators gather their children into a flat [`Value::List`].
//!
//! # Example
//!
//! ```rust
//! use kombi::Value;
//!
//! let v = Value::list(vec![Value::text("a"), Value::int(1)]);
//! assert_eq!(v.len(), 2);
//! assert_eq!(v.to_json().unwrap(), r#"["a",1]"#);
//! ```

use super::input::Input;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// A value produced by a successful parse
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value<'a> {
    /// No value (what `optional` yields when its parser did not match)
    #[default]
    Nil,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Float value
    Float(f64),
    /// Raw slice of input matched by a predicate
    Match(Input<'a>),
    /// Text value
    Text(Cow<'a, str>),
    /// A caller-built collection; never spliced by flattening
    Array(Vec<Value<'a>>),
    /// A caller-built record
    Hash(HashMap<String, Value<'a>>),
    /// Flattened results of sequencing combinators
    List(Vec<Value<'a>>),
    /// Marker returned by the end of input parser
    EndOfFile,
    /// Marker for results that flattening drops
    Ignore,
}

impl<'a> Value<'a> {
    /// Create a nil value
    pub fn nil() -> Self {
        Value::Nil
    }

    /// Create a boolean value
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create an integer value
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a text value
    pub fn text(s: impl Into<Cow<'a, str>>) -> Self {
        Value::Text(s.into())
    }

    /// Create an array value
    pub fn array(items: Vec<Value<'a>>) -> Self {
        Value::Array(items)
    }

    /// Create a result list
    pub fn list(items: Vec<Value<'a>>) -> Self {
        Value::List(items)
    }

    /// Create a hash value
    pub fn hash(pairs: Vec<(impl Into<String>, Value<'a>)>) -> Self {
        Value::Hash(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Check if this is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Check if this is the end of file marker
    pub fn is_eof(&self) -> bool {
        matches!(self, Value::EndOfFile)
    }

    /// Check if this is the ignore marker
    pub fn is_ignore(&self) -> bool {
        matches!(self, Value::Ignore)
    }

    /// Get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get as string slice, for both text and raw matches
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Match(input) => Some(input.as_str()),
            _ => None,
        }
    }

    /// Get the elements of a result list
    pub fn as_list(&self) -> Option<&[Value<'a>]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Take the elements of a result list
    pub fn into_list(self) -> Option<Vec<Value<'a>>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get as array
    pub fn as_array(&self) -> Option<&[Value<'a>]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get as hash
    pub fn as_hash(&self) -> Option<&HashMap<String, Value<'a>>> {
        match self {
            Value::Hash(h) => Some(h),
            _ => None,
        }
    }

    /// Get a hash value by key
    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        match self {
            Value::Hash(h) => h.get(key),
            _ => None,
        }
    }

    /// Get a list or array element by index
    pub fn get_index(&self, index: usize) -> Option<&Value<'a>> {
        match self {
            Value::List(items) | Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Number of elements in a list or array; 0 for anything else
    pub fn len(&self) -> usize {
        match self {
            Value::List(items) | Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    /// Whether [`len`](Self::len) is 0
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert borrowed text into owned text, detaching from the source
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Nil => Value::Nil,
            Value::Bool(b) => Value::Bool(b),
            Value::Int(n) => Value::Int(n),
            Value::Float(f) => Value::Float(f),
            Value::Match(input) => Value::Text(Cow::Owned(input.as_str().to_string())),
            Value::Text(s) => Value::Text(Cow::Owned(s.into_owned())),
            Value::Array(items) => Value::Array(items.into_iter().map(Value::into_owned).collect()),
            Value::Hash(h) => Value::Hash(h.into_iter().map(|(k, v)| (k, v.into_owned())).collect()),
            Value::List(items) => Value::List(items.into_iter().map(Value::into_owned).collect()),
            Value::EndOfFile => Value::EndOfFile,
            Value::Ignore => Value::Ignore,
        }
    }

    /// Render as JSON
    ///
    /// Markers and nil become `null`; lists and arrays become JSON arrays.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value<'_> {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(Cow::Borrowed(s))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Text(Cow::Owned(s))
    }
}

impl<'a> From<Input<'a>> for Value<'a> {
    fn from(input: Input<'a>) -> Self {
        Value::Match(input)
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value<'_>]) -> fmt::Result {
    write!(f, "[")?;
    for (i, v) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", v)?;
    }
    write!(f, "]")
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Match(input) => write!(f, "{:?}", input.as_str()),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Array(items) | Value::List(items) => write_items(f, items),
            Value::Hash(h) => {
                write!(f, "{{")?;
                for (i, (k, v)) in h.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::EndOfFile => write!(f, "<eof>"),
            Value::Ignore => write!(f, "<ignore>"),
        }
    }
}
