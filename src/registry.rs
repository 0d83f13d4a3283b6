//! The pipeline registry: a closed set of named pipelines built once at
//! startup.

use crate::bulk::{BulkFilter, Dedup};
use crate::error::SieveError;
use crate::filter::{
    IdFilter, IntegerFilter, LengthFilter, MagicalCreatureFilter, RecordFilter, WordFilter,
};
use crate::pipeline::Pipeline;

/// Maximum record length accepted by the animal pipeline, in characters.
const MAX_RECORD_LEN: usize = 75;

/// Identifier for one of the registered classification pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    /// Single-word, non-numeric, non-mythical records.
    Animals,
    /// Two-segment hyphenated records with no numeric segment.
    Ids,
}

impl PipelineKind {
    /// All registered kinds, in registry (and output) order.
    pub const ALL: [PipelineKind; 2] = [PipelineKind::Animals, PipelineKind::Ids];

    /// The heading printed above this pipeline's results.
    pub fn label(&self) -> &'static str {
        match self {
            PipelineKind::Animals => "Animals",
            PipelineKind::Ids => "IDs",
        }
    }
}

/// Lookup table of all classification pipelines, constructed once at
/// startup and never mutated afterwards.
pub struct Registry {
    animals: Pipeline,
    ids: Pipeline,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            animals: build_pipeline(PipelineKind::Animals),
            ids: build_pipeline(PipelineKind::Ids),
        }
    }

    /// The pipeline registered under `kind`.
    pub fn get(&self, kind: PipelineKind) -> &Pipeline {
        match kind {
            PipelineKind::Animals => &self.animals,
            PipelineKind::Ids => &self.ids,
        }
    }

    /// Look up a pipeline by its label, case-insensitively.
    pub fn resolve(&self, name: &str) -> Result<&Pipeline, SieveError> {
        self.iter()
            .find(|p| p.kind().label().eq_ignore_ascii_case(name))
            .ok_or_else(|| SieveError::UnknownPipeline(name.to_string()))
    }

    /// All pipelines in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Pipeline> {
        PipelineKind::ALL.iter().map(|k| self.get(*k))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the filter chains for a pipeline kind.
fn build_pipeline(kind: PipelineKind) -> Pipeline {
    let filters: Vec<Box<dyn RecordFilter>> = match kind {
        PipelineKind::Animals => vec![
            Box::new(MagicalCreatureFilter),
            Box::new(LengthFilter::new(MAX_RECORD_LEN)),
            Box::new(IntegerFilter),
            Box::new(WordFilter),
        ],
        PipelineKind::Ids => vec![Box::new(IdFilter)],
    };
    let bulk: Vec<Box<dyn BulkFilter>> = vec![Box::new(Dedup)];
    Pipeline::new(kind, filters, bulk)
}
