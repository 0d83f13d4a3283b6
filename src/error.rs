//! Error types.
//!
//! Filters and composers are total functions, so the only fallible surface
//! is registry lookup by name.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SieveError {
    /// No pipeline is registered under the given name.
    #[error("unknown pipeline: {0}")]
    UnknownPipeline(String),
}
