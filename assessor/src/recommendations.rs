//! Industry recommendation selection.
//!
//! A pure content lookup keyed by industry. Ordering is the only logic here.

use std::cmp::Ordering;
use std::sync::Arc;

use rmf_taxonomy::{IndustryCatalog, IndustrySummary, Recommendation, RmfFunction};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::AssessmentRecord;

/// Recommendations for one industry, ready to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryRecommendations {
    pub industry: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub regulations: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

/// Selects and orders industry recommendations.
#[derive(Clone)]
pub struct RecommendationSelector {
    industries: Arc<IndustryCatalog>,
}

impl RecommendationSelector {
    pub fn new(industries: Arc<IndustryCatalog>) -> Self {
        Self { industries }
    }

    pub fn has_industry(&self, industry_id: &str) -> bool {
        self.industries.contains(industry_id)
    }

    pub fn list_industries(&self) -> Vec<IndustrySummary> {
        self.industries.summaries()
    }

    /// Every recommendation for an industry, most urgent first, then by function.
    pub fn recommendations_for(&self, industry_id: &str) -> Result<IndustryRecommendations> {
        self.select(industry_id, None, |a, b| by_priority(a, b))
    }

    /// Recommendations for an industry restricted to one function.
    pub fn recommendations_for_function(
        &self,
        industry_id: &str,
        function: RmfFunction,
    ) -> Result<IndustryRecommendations> {
        self.select(industry_id, Some(function), |a, b| by_priority(a, b))
    }

    /// Recommendations for the record's industry, weakest function first.
    pub fn for_assessment(&self, record: &AssessmentRecord) -> Result<IndustryRecommendations> {
        let strength = |function: RmfFunction| {
            record
                .function_score(function)
                .map(|f| f.score.avg_score)
                .unwrap_or(f64::MAX)
        };

        self.select(&record.industry, None, |a, b| {
            strength(a.function)
                .total_cmp(&strength(b.function))
                .then_with(|| by_priority(a, b))
        })
    }

    fn select(
        &self,
        industry_id: &str,
        function: Option<RmfFunction>,
        order: impl Fn(&Recommendation, &Recommendation) -> Ordering,
    ) -> Result<IndustryRecommendations> {
        let profile = self.industries.get(industry_id)?;

        let mut recommendations: Vec<Recommendation> = profile
            .recommendations
            .iter()
            .filter(|r| function.map_or(true, |f| r.function == f))
            .cloned()
            .collect();
        recommendations.sort_by(|a, b| order(a, b));

        Ok(IndustryRecommendations {
            industry: profile.id.clone(),
            code: profile.code.clone(),
            name: profile.name.clone(),
            description: profile.description.clone(),
            regulations: profile.regulations.clone(),
            recommendations,
        })
    }
}

fn by_priority(a: &Recommendation, b: &Recommendation) -> Ordering {
    a.priority
        .rank()
        .cmp(&b.priority.rank())
        .then_with(|| a.function.cmp(&b.function))
}
