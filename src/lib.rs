//! # record-sieve
//!
//! Record classification pipelines built from composable filters.
//!
//! Given an ordered collection of text records, a pipeline applies an
//! ordered chain of per-record predicate filters (logical AND with
//! short-circuit) followed by an ordered chain of bulk filters that
//! transform the whole collection (de-duplication). Two pipelines are
//! registered: "Animals" keeps single-word, non-numeric, non-mythical
//! records; "IDs" keeps two-segment hyphenated records with no numeric
//! segment.
//!
//! Everything is a pure, deterministic, in-memory transformation: filters
//! never mutate their input, pipelines produce freshly owned collections,
//! and relative record order is preserved throughout (first occurrence wins
//! on de-duplication).
//!
//! ## Example
//!
//! ```
//! use record_sieve::{PipelineKind, Record, Registry};
//!
//! let records = vec![
//!     Record::new("Cat"),
//!     Record::new("Dragon"),
//!     Record::new("Cat"),
//! ];
//!
//! let registry = Registry::new();
//! let animals = registry.get(PipelineKind::Animals).run(&records);
//!
//! assert_eq!(animals, vec![Record::new("Cat")]);
//! ```

pub mod bulk;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod record;
pub mod registry;

pub use bulk::{BulkFilter, Dedup};
pub use error::SieveError;
pub use filter::{
    IdFilter, IntegerFilter, LengthFilter, MagicalCreatureFilter, RecordFilter, WordFilter,
};
pub use pipeline::{Pipeline, apply_bulk_filters, apply_filters};
pub use record::Record;
pub use registry::{PipelineKind, Registry};
