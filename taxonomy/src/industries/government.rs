//! Government & Public Sector industry profile.

use crate::industries::IndustryProvider;
use crate::types::{
    Effort, IndustryProfile, Recommendation, RecommendationPriority, RmfFunction,
};

/// Provider for the government industry.
pub struct GovernmentIndustry;

impl IndustryProvider for GovernmentIndustry {
    fn id(&self) -> &'static str {
        "government"
    }

    fn profile(&self) -> IndustryProfile {
        IndustryProfile {
            id: self.id().to_string(),
            code: "GOV".to_string(),
            name: "Government & Public Sector".to_string(),
            description: "Benefits eligibility, public safety, citizen services and administrative automation subject to public accountability and civil-rights obligations.".to_string(),
            regulations: vec![
                "OMB M-24-10".to_string(),
                "Executive Order 14110".to_string(),
                "Privacy Act of 1974".to_string(),
                "Section 508 Accessibility".to_string(),
                "State AI Transparency Laws".to_string(),
            ],
            recommendations: vec![
                Recommendation::new(
                    RmfFunction::Govern,
                    RecommendationPriority::Critical,
                    Effort::Medium,
                    "Designate a Chief AI Officer",
                    "Appoint a Chief AI Officer and publish an agency AI strategy and compliance plan consistent with OMB guidance.",
                ),
                Recommendation::new(
                    RmfFunction::Map,
                    RecommendationPriority::Critical,
                    Effort::Medium,
                    "Publish an AI Use Case Inventory",
                    "Maintain a public inventory of AI use cases and flag those that are rights-impacting or safety-impacting.",
                ),
                Recommendation::new(
                    RmfFunction::Measure,
                    RecommendationPriority::High,
                    Effort::High,
                    "Conduct Rights-Impact Assessments",
                    "Assess rights-impacting AI for discriminatory outcomes and accessibility barriers before use, with real-world testing.",
                ),
                Recommendation::new(
                    RmfFunction::Manage,
                    RecommendationPriority::High,
                    Effort::Medium,
                    "Provide Notice and Human Appeal",
                    "Notify individuals when AI informs a decision about them and offer timely human review and remedy.",
                ),
            ],
        }
    }
}
