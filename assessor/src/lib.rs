//! RMF Assessor - NIST AI RMF maturity self-assessment service
//!
//! Wraps the scoring engine with everything a deployment needs:
//! - Submission validation and scoring
//! - Immutable assessment records with read-after-write storage
//! - Industry recommendation lookup
//! - YAML configuration
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           AssessmentService             │
//! └───────┬──────────────┬──────────────┬───┘
//!         ▼              ▼              ▼
//! ┌─────────────┐ ┌─────────────┐ ┌──────────────┐
//! │ rmf-scoring │ │ RecordStore │ │Recommendation│
//! │ (evaluate)  │ │ (DashMap)   │ │  Selector    │
//! └──────┬──────┘ └─────────────┘ └──────┬───────┘
//!        ▼                               ▼
//! ┌─────────────────────────────────────────┐
//! │   rmf-taxonomy (registry, playbook,     │
//! │   industry catalog)                     │
//! └─────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod recommendations;
pub mod record;
pub mod service;
pub mod store;

// Re-export main types for convenience
pub use config::{AssessorConfig, GeneralConfig, ServiceConfig, StoreConfig};
pub use error::{AssessorError, Result};
pub use recommendations::{IndustryRecommendations, RecommendationSelector};
pub use record::{AssessmentRecord, RadarPoint, RecordHeader, RecordedAnswer};
pub use service::{AssessmentService, QuestionCatalog, Submission};
pub use store::{InMemoryRecordStore, RecordStore};

pub use rmf_scoring::AnswerInput;
