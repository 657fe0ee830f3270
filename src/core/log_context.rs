//! Structured logging attributes
//!
//! This module provides:
//! - `FieldValue`: a single attribute value
//! - `Attr`: one key/value pair
//! - `LogContext`: the ordered attribute bag attached to a record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// A single key/value attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attr {
    pub key: String,
    pub value: FieldValue,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// String attribute rendered from format arguments
    ///
    /// ```
    /// use logshim::Attr;
    ///
    /// let attr = Attr::formatted("elapsed", format_args!("{:.2}s", 1.5));
    /// assert_eq!(attr.value.to_string(), "1.50s");
    /// ```
    pub fn formatted(key: impl Into<String>, args: fmt::Arguments<'_>) -> Self {
        Self::new(key, args.to_string())
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Ordered attribute bag for a single record
///
/// Keys keep insertion order. Duplicate keys are allowed and are emitted
/// in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogContext {
    attrs: Vec<Attr>,
}

impl LogContext {
    /// Create a new empty log context
    pub fn new() -> Self {
        Self { attrs: Vec::new() }
    }

    /// Add a field to the context
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.attrs.push(Attr::new(key, value));
        self
    }

    pub fn push(&mut self, attr: Attr) {
        self.attrs.push(attr);
    }

    /// Last value recorded for `key`
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.attrs
            .iter()
            .rev()
            .find(|attr| attr.key == key)
            .map(|attr| &attr.value)
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// Check if context has any fields
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Format fields as key=value pairs
    pub fn format_fields(&self) -> String {
        self.attrs
            .iter()
            .map(Attr::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}
