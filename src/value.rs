//! The dynamically-typed value tree produced by parsing
//!
//! A [`Value`] is a tagged union over the six JSON shapes this crate
//! supports. Objects are unordered mappings with unique keys; arrays keep
//! source order. The whole tree is built in one parse call and owned by the
//! caller, with no sharing between nodes and no state kept across calls.

use std::collections::HashMap;

/// A parsed JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string, with escape sequences carried verbatim from the source
    String(String),

    /// A signed 64-bit integer
    Integer(i64),

    /// The literal `true` or `false`
    Boolean(bool),

    /// The literal `null`
    Null,

    /// An object: unordered key/value mapping with unique keys
    Object(HashMap<String, Value>),

    /// An array: values in source order
    Array(Vec<Value>),
}

impl Value {
    /// Check whether this value is the `null` literal
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The string content, if this value is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// The integer value, if this value is a number
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean value, if this value is `true` or `false`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The underlying mapping, if this value is an object
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// The underlying sequence, if this value is an array
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a key in an object value. Returns `None` for non-objects
    /// and for absent keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|entries| entries.get(key))
    }
}
