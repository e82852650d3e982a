//! Error types for the scoring engine.

/// Why a submitted answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAnswer {
    /// The question id is not in the registry
    #[error("unknown question id: {0}")]
    UnknownQuestion(String),

    /// The score is outside the 1-5 scale
    #[error("score {score} for question {question_id} is outside the 1-5 scale")]
    ScoreOutOfRange { question_id: String, score: i64 },

    /// The same question appears twice in one submission
    #[error("question {0} answered more than once")]
    DuplicateQuestion(String),
}

/// Error types for scoring operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    /// The answer set was rejected before any aggregation ran
    #[error("Invalid answer: {0}")]
    InvalidAnswer(#[from] InvalidAnswer),

    /// The registry cannot be aggregated (e.g. a category without questions)
    #[error("Internal aggregation error: {0}")]
    InternalAggregation(String),
}

pub type Result<T> = std::result::Result<T, ScoringError>;
