//! Bulk filters: whole-collection transformations.
//!
//! Used when a decision about one record requires knowledge of the others,
//! e.g. de-duplication.

use std::collections::HashSet;

use crate::Record;

/// A transformation applied to an entire record collection at once.
///
/// Consumes its input and returns a freshly owned collection; never mutates
/// shared state.
pub trait BulkFilter {
    /// Transform the collection, typically reducing its cardinality.
    fn apply(&self, records: Vec<Record>) -> Vec<Record>;

    /// The display name of this filter.
    fn name(&self) -> &'static str;
}

/// Removes duplicate records, keeping the first occurrence of each distinct
/// value in its original relative order.
///
/// Runs in O(n) via a membership set keyed on exact record value.
pub struct Dedup;

impl BulkFilter for Dedup {
    fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        let mut seen: HashSet<Record> = HashSet::with_capacity(records.len());
        records.into_iter().filter(|r| seen.insert(r.clone())).collect()
    }

    fn name(&self) -> &'static str {
        "DEDUP"
    }
}
