//! Per-record predicate filters.
//!
//! Each filter implements `RecordFilter`, deciding keep/discard for a single
//! record. All filters are total, deterministic, and side-effect free; a
//! failed integer parse is a valid negative probe result, never an error.
//!
//! Supported filters:
//! - `MagicalCreatureFilter` - reject well-known mythical creature names
//! - `LengthFilter` - reject records longer than a character limit
//! - `IntegerFilter` - reject records that fully parse as base-10 integers
//! - `WordFilter` - reject records containing spaces
//! - `IdFilter` - keep only two-segment hyphenated records with no numeric segment

use crate::Record;

/// A keep/discard decision applied independently to one record.
///
/// Contract: total function, deterministic, no side effects, never mutates
/// the record.
pub trait RecordFilter {
    /// Returns `true` if the record should be kept.
    fn keep(&self, record: &Record) -> bool;

    /// The display name of this filter.
    fn name(&self) -> &'static str;
}

// ---------------------------------------------------------------------------
// Filter implementations
// ---------------------------------------------------------------------------

/// Names rejected by `MagicalCreatureFilter`, matched case-sensitively.
const MAGICAL_CREATURES: [&str; 4] = ["Unicorn", "Dragon", "Griffin", "Minotaur"];

/// Rejects records that exactly equal a known mythical creature name.
pub struct MagicalCreatureFilter;

impl RecordFilter for MagicalCreatureFilter {
    fn keep(&self, record: &Record) -> bool {
        !MAGICAL_CREATURES.contains(&record.as_str())
    }

    fn name(&self) -> &'static str {
        "MAGICAL-CREATURE"
    }
}

/// Rejects records longer than `max` characters.
pub struct LengthFilter {
    max: usize,
}

impl LengthFilter {
    pub fn new(max: usize) -> Self {
        LengthFilter { max }
    }
}

impl RecordFilter for LengthFilter {
    fn keep(&self, record: &Record) -> bool {
        record.char_len() <= self.max
    }

    fn name(&self) -> &'static str {
        "LENGTH"
    }
}

/// Rejects records that fully parse as a base-10 integer.
///
/// Uses `str::parse::<i64>` semantics: an optional leading sign, digits
/// only, no surrounding whitespace. "3412-3241" is kept because the
/// embedded hyphen makes the parse fail.
pub struct IntegerFilter;

impl RecordFilter for IntegerFilter {
    fn keep(&self, record: &Record) -> bool {
        record.as_str().parse::<i64>().is_err()
    }

    fn name(&self) -> &'static str {
        "INTEGER"
    }
}

/// Rejects records containing spaces.
///
/// Splitting on a single space must yield exactly one segment.
pub struct WordFilter;

impl RecordFilter for WordFilter {
    fn keep(&self, record: &Record) -> bool {
        record.as_str().split(' ').nth(1).is_none()
    }

    fn name(&self) -> &'static str {
        "WORD"
    }
}

/// Keeps only records that split on `-` into exactly two segments where
/// neither segment parses as a base-10 integer.
///
/// Deliberately contrived: numeric-looking segments are rejected, so
/// "3412-3241" fails while "abc-def" passes. This is narrower than any
/// UUID-style check and is preserved as-is.
pub struct IdFilter;

impl RecordFilter for IdFilter {
    fn keep(&self, record: &Record) -> bool {
        let segments: Vec<&str> = record.as_str().split('-').collect();
        if segments.len() != 2 {
            return false;
        }
        segments.iter().all(|s| s.parse::<i64>().is_err())
    }

    fn name(&self) -> &'static str {
        "ID"
    }
}
