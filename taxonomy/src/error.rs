//! Error types for taxonomy lookups and registry construction.

/// Error types for taxonomy operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TaxonomyError {
    /// Lookup of an id the registry does not know
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The same id was declared twice
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// A child references a parent that is not in the registry
    #[error("{kind} {id} references unknown parent {parent}")]
    DanglingParent {
        kind: &'static str,
        id: String,
        parent: String,
    },

    /// A category with no questions cannot be averaged
    #[error("Category {0} has no questions")]
    EmptyCategory(String),

    /// A function with no categories cannot be averaged
    #[error("Function {0} has no categories")]
    EmptyFunction(String),
}

impl TaxonomyError {
    pub(crate) fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Whether this error is a failed lookup rather than an integrity violation.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, TaxonomyError>;
