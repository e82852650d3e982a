//! AssessmentService - main entry point for assessments.
//!
//! Validates submissions, runs the scoring engine, stores the resulting
//! record and answers read requests. The taxonomy and industry content are
//! shared read-only across every concurrent call.

use std::sync::Arc;

use chrono::Utc;
use rmf_scoring::{evaluate, maturity_levels, AnswerInput, AnswerSet, MaturityBand};
use rmf_taxonomy::{
    Function, IndustryCatalog, IndustrySummary, Playbook, Question, RmfFunction, TaxonomyRegistry,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::AssessorConfig;
use crate::error::{AssessorError, Result};
use crate::recommendations::{IndustryRecommendations, RecommendationSelector};
use crate::record::{AssessmentRecord, RecordHeader};
use crate::store::{InMemoryRecordStore, RecordStore};

/// A completed questionnaire as sent by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub industry: String,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub answers: Vec<AnswerInput>,
}

impl Submission {
    pub fn new(industry: impl Into<String>, answers: Vec<AnswerInput>) -> Self {
        Self {
            industry: industry.into(),
            organization_name: None,
            answers,
        }
    }

    /// Builder: set the organization name.
    pub fn with_organization(mut self, name: impl Into<String>) -> Self {
        self.organization_name = Some(name.into());
        self
    }
}

/// Everything a client needs to render the questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    pub functions: Vec<Function>,
    pub questions: Vec<Question>,
    pub maturity_levels: Vec<MaturityBand>,
    pub total_questions: usize,
}

/// Main entry point for the assessment engine.
pub struct AssessmentService {
    config: AssessorConfig,
    registry: Arc<TaxonomyRegistry>,
    playbook: Arc<Playbook>,
    recommendations: RecommendationSelector,
    store: Arc<dyn RecordStore>,
}

impl AssessmentService {
    /// Create a service over the standard content with an in-memory store.
    pub fn new(config: AssessorConfig) -> Result<Self> {
        let store: Arc<dyn RecordStore> = match config.store.max_records {
            Some(max) => Arc::new(InMemoryRecordStore::with_capacity(max)),
            None => Arc::new(InMemoryRecordStore::new()),
        };

        let registry = TaxonomyRegistry::nist_ai_rmf()?;
        info!(
            questions = registry.total_question_count(),
            fingerprint = %registry.fingerprint(),
            "AssessmentService ready"
        );

        Ok(Self {
            config,
            registry: Arc::new(registry),
            playbook: Arc::new(Playbook::nist_ai_rmf()),
            recommendations: RecommendationSelector::new(Arc::new(IndustryCatalog::standard())),
            store,
        })
    }

    /// Replace the record store.
    pub fn with_store(mut self, store: Arc<dyn RecordStore>) -> Self {
        self.store = store;
        self
    }

    /// Replace the taxonomy and playbook. Existing records are unaffected.
    pub fn with_content(mut self, registry: Arc<TaxonomyRegistry>, playbook: Arc<Playbook>) -> Self {
        self.registry = registry;
        self.playbook = playbook;
        self
    }

    /// Replace the industry catalog.
    pub fn with_industries(mut self, industries: Arc<IndustryCatalog>) -> Self {
        self.recommendations = RecommendationSelector::new(industries);
        self
    }

    pub fn config(&self) -> &AssessorConfig {
        &self.config
    }

    pub fn registry(&self) -> &TaxonomyRegistry {
        &self.registry
    }

    /// The questionnaire: functions, questions and the maturity table.
    pub fn list_questions(&self) -> QuestionCatalog {
        QuestionCatalog {
            functions: self.registry.all_functions().to_vec(),
            questions: self.registry.all_questions().to_vec(),
            maturity_levels: maturity_levels(),
            total_questions: self.registry.total_question_count(),
        }
    }

    pub fn list_industries(&self) -> Vec<IndustrySummary> {
        self.recommendations.list_industries()
    }

    pub fn get_maturity_levels(&self) -> Vec<MaturityBand> {
        maturity_levels()
    }

    /// Score a submission and store the record. Returns the new record id.
    ///
    /// Nothing is stored unless every answer is valid and the whole record
    /// has been built.
    pub async fn submit(&self, submission: Submission) -> Result<String> {
        let answers = AnswerSet::validate(&submission.answers, &self.registry).map_err(|e| {
            warn!(industry = %submission.industry, error = %e, "Rejected submission");
            AssessorError::from(e)
        })?;

        if !self.recommendations.has_industry(&submission.industry) {
            warn!(industry = %submission.industry, "Submission for unknown industry");
        }

        let evaluation = evaluate(&self.registry, &self.playbook, &answers)?;

        let organization_name = submission
            .organization_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.config.service.default_organization_name.clone());

        let header = RecordHeader {
            id: uuid::Uuid::new_v4().to_string(),
            organization_name,
            industry: submission.industry,
            created_at: Utc::now(),
        };
        let record = AssessmentRecord::assemble(header, &self.registry, &answers, evaluation);
        let record = self.store.insert(record).await?;

        if self.config.service.audit_enabled {
            info!(
                assessment_id = %record.id,
                organization = %record.organization_name,
                industry = %record.industry,
                answered = answers.len(),
                overall_score = record.overall_score,
                maturity = %record.overall_maturity,
                actions = record.priority_actions.len(),
                "Assessment submitted"
            );
        } else {
            debug!(assessment_id = %record.id, "Assessment submitted");
        }

        Ok(record.id.clone())
    }

    /// Fetch a stored record.
    pub async fn get_assessment(&self, id: &str) -> Result<Arc<AssessmentRecord>> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| AssessorError::not_found("assessment", id))
    }

    /// Recommendations for an industry, optionally limited to one function.
    pub fn get_recommendations(
        &self,
        industry_id: &str,
        function: Option<RmfFunction>,
    ) -> Result<IndustryRecommendations> {
        match function {
            Some(function) => self
                .recommendations
                .recommendations_for_function(industry_id, function),
            None => self.recommendations.recommendations_for(industry_id),
        }
    }

    /// Recommendations for a stored assessment, weakest function first.
    pub async fn get_assessment_recommendations(&self, id: &str) -> Result<IndustryRecommendations> {
        let record = self.get_assessment(id).await?;
        self.recommendations.for_assessment(&record)
    }

    pub async fn assessment_count(&self) -> usize {
        self.store.len().await
    }
}
