//! Error types for the assessment service.

use rmf_scoring::{InvalidAnswer, ScoringError};
use rmf_taxonomy::TaxonomyError;

/// Error types for assessor operations.
#[derive(Debug, thiserror::Error)]
pub enum AssessorError {
    /// A submitted answer was rejected; nothing was stored
    #[error("Invalid answer: {0}")]
    InvalidAnswer(#[from] InvalidAnswer),

    /// Unknown assessment, industry or function
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The registry could not be aggregated
    #[error("Internal aggregation error: {0}")]
    InternalAggregation(String),

    /// The record store has reached its configured capacity
    #[error("Record store full ({capacity} records)")]
    StoreFull { capacity: usize },

    /// A record with this id is already stored
    #[error("Assessment {0} already exists")]
    DuplicateRecord(String),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Taxonomy content failed to load
    #[error("Taxonomy error: {0}")]
    Taxonomy(TaxonomyError),
}

impl AssessorError {
    pub(crate) fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<ScoringError> for AssessorError {
    fn from(err: ScoringError) -> Self {
        match err {
            ScoringError::InvalidAnswer(reason) => Self::InvalidAnswer(reason),
            ScoringError::InternalAggregation(msg) => Self::InternalAggregation(msg),
        }
    }
}

impl From<TaxonomyError> for AssessorError {
    fn from(err: TaxonomyError) -> Self {
        match err {
            TaxonomyError::NotFound { kind, id } => Self::NotFound { kind, id },
            other => Self::Taxonomy(other),
        }
    }
}

impl From<serde_yaml::Error> for AssessorError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AssessorError>;
