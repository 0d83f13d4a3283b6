//! The `Record` type: an opaque text record.
//!
//! Records carry no internal structure of their own. Individual filters
//! inspect whatever they need (length, character content, delimiter-split
//! segments) through `as_str`.

use std::fmt;

/// A single text record flowing through the filter pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record(String);

impl Record {
    /// Create a record from any string-like value.
    pub fn new(text: impl Into<String>) -> Self {
        Record(text.into())
    }

    /// The record's text content.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the record (not bytes).
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<&str> for Record {
    fn from(text: &str) -> Self {
        Record::new(text)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
