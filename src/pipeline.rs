//! Filter composition: per-record chains, bulk chains, and named pipelines.

use crate::bulk::BulkFilter;
use crate::filter::RecordFilter;
use crate::registry::PipelineKind;
use crate::Record;

/// Apply an ordered chain of predicate filters to each record.
///
/// A record is kept iff every filter keeps it; evaluation stops at the
/// first filter that rejects. Output preserves input order and is a new
/// collection. An empty filter chain is the identity.
pub fn apply_filters(records: &[Record], filters: &[Box<dyn RecordFilter>]) -> Vec<Record> {
    if filters.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|r| filters.iter().all(|f| f.keep(r)))
        .cloned()
        .collect()
}

/// Thread a collection through an ordered chain of bulk filters, the output
/// of each becoming the input of the next. An empty chain is the identity.
pub fn apply_bulk_filters(records: Vec<Record>, filters: &[Box<dyn BulkFilter>]) -> Vec<Record> {
    let mut current = records;
    for f in filters {
        current = f.apply(current);
    }
    current
}

/// A named classification pipeline: an ordered chain of predicate filters
/// followed by an ordered chain of bulk filters.
pub struct Pipeline {
    kind: PipelineKind,
    filters: Vec<Box<dyn RecordFilter>>,
    bulk: Vec<Box<dyn BulkFilter>>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("kind", &self.kind)
            .field("filters", &self.filters.len())
            .field("bulk", &self.bulk.len())
            .finish()
    }
}

impl Pipeline {
    pub fn new(
        kind: PipelineKind,
        filters: Vec<Box<dyn RecordFilter>>,
        bulk: Vec<Box<dyn BulkFilter>>,
    ) -> Self {
        Pipeline {
            kind,
            filters,
            bulk,
        }
    }

    /// The identifier this pipeline is registered under.
    pub fn kind(&self) -> PipelineKind {
        self.kind
    }

    /// Run the pipeline against a read-only view of the input, producing a
    /// freshly owned output collection. Deterministic given the input.
    pub fn run(&self, records: &[Record]) -> Vec<Record> {
        apply_bulk_filters(apply_filters(records, &self.filters), &self.bulk)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::bulk::Dedup;
    use crate::filter::{IntegerFilter, WordFilter};

    fn records(texts: &[&str]) -> Vec<Record> {
        texts.iter().map(|t| Record::new(*t)).collect()
    }

    /// Probe filter that counts how often it is evaluated.
    struct Probe {
        keep: bool,
        calls: Rc<Cell<usize>>,
    }

    impl RecordFilter for Probe {
        fn keep(&self, _record: &Record) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.keep
        }

        fn name(&self) -> &'static str {
            "PROBE"
        }
    }

    #[test]
    fn test_apply_filters_empty_chain_is_identity() {
        let input = records(&["A", "B", "A"]);
        assert_eq!(apply_filters(&input, &[]), input);
    }

    #[test]
    fn test_apply_filters_preserves_order() {
        let input = records(&["one", "2", "three", "4", "five"]);
        let filters: Vec<Box<dyn RecordFilter>> = vec![Box::new(IntegerFilter)];
        assert_eq!(apply_filters(&input, &filters), records(&["one", "three", "five"]));
    }

    #[test]
    fn test_apply_filters_is_logical_and() {
        let input = records(&["Cat", "two words", "42"]);
        let filters: Vec<Box<dyn RecordFilter>> =
            vec![Box::new(IntegerFilter), Box::new(WordFilter)];
        assert_eq!(apply_filters(&input, &filters), records(&["Cat"]));
    }

    #[test]
    fn test_apply_filters_short_circuits_on_first_rejection() {
        let calls = Rc::new(Cell::new(0));
        let input = records(&["A", "B"]);
        let filters: Vec<Box<dyn RecordFilter>> = vec![
            Box::new(Probe {
                keep: false,
                calls: Rc::clone(&calls),
            }),
            Box::new(Probe {
                keep: true,
                calls: Rc::clone(&calls),
            }),
        ];
        let out = apply_filters(&input, &filters);
        assert!(out.is_empty());
        // The second probe must never run: one call per record.
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_apply_filters_does_not_mutate_input() {
        let input = records(&["42", "Cat"]);
        let filters: Vec<Box<dyn RecordFilter>> = vec![Box::new(IntegerFilter)];
        let _ = apply_filters(&input, &filters);
        assert_eq!(input, records(&["42", "Cat"]));
    }

    #[test]
    fn test_apply_bulk_filters_empty_chain_is_identity() {
        let input = records(&["A", "A", "B"]);
        assert_eq!(apply_bulk_filters(input.clone(), &[]), input);
    }

    #[test]
    fn test_apply_bulk_filters_threads_in_order() {
        let input = records(&["A", "A", "B", "B"]);
        let bulk: Vec<Box<dyn BulkFilter>> = vec![Box::new(Dedup)];
        assert_eq!(apply_bulk_filters(input, &bulk), records(&["A", "B"]));
    }

    #[test]
    fn test_pipeline_run_chains_predicates_then_bulk() {
        let pipeline = Pipeline::new(
            PipelineKind::Animals,
            vec![Box::new(WordFilter)],
            vec![Box::new(Dedup)],
        );
        let input = records(&["Cat", "Cat", "two words", "Dog"]);
        assert_eq!(pipeline.run(&input), records(&["Cat", "Dog"]));
    }
}
