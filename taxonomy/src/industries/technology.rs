//! Technology & Software industry profile.

use crate::industries::IndustryProvider;
use crate::types::{
    Effort, IndustryProfile, Recommendation, RecommendationPriority, RmfFunction,
};

/// Provider for the technology industry.
pub struct TechnologyIndustry;

impl IndustryProvider for TechnologyIndustry {
    fn id(&self) -> &'static str {
        "technology"
    }

    fn profile(&self) -> IndustryProfile {
        IndustryProfile {
            id: self.id().to_string(),
            code: "TECH".to_string(),
            name: "Technology & Software".to_string(),
            description: "Foundation models, AI-powered products and developer platforms shipping at high velocity to broad user bases.".to_string(),
            regulations: vec![
                "EU AI Act".to_string(),
                "NIST AI 600-1 Generative AI Profile".to_string(),
                "ISO/IEC 42001".to_string(),
                "California CCPA/CPRA".to_string(),
                "Colorado AI Act".to_string(),
            ],
            recommendations: vec![
                Recommendation::new(
                    RmfFunction::Govern,
                    RecommendationPriority::High,
                    Effort::Medium,
                    "Adopt an AI Management System",
                    "Implement an ISO/IEC 42001-aligned management system covering policy, roles, risk assessment and continual improvement.",
                ),
                Recommendation::new(
                    RmfFunction::Map,
                    RecommendationPriority::High,
                    Effort::Low,
                    "Classify Products Under the EU AI Act",
                    "Determine whether each product or feature is prohibited, high-risk, limited-risk or minimal-risk and record obligations.",
                ),
                Recommendation::new(
                    RmfFunction::Measure,
                    RecommendationPriority::Critical,
                    Effort::High,
                    "Evaluate Generative AI Risks",
                    "Test for hallucination, harmful content, prompt injection and data leakage using the generative AI profile's risk list.",
                ),
                Recommendation::new(
                    RmfFunction::Manage,
                    RecommendationPriority::High,
                    Effort::Medium,
                    "Ship Behind Safety Gates",
                    "Gate releases on evaluation results, staged rollout and kill switches, and monitor abuse reports after launch.",
                ),
                Recommendation::new(
                    RmfFunction::Govern,
                    RecommendationPriority::Medium,
                    Effort::Low,
                    "Publish Model and System Cards",
                    "Release transparency documentation describing capabilities, limitations and evaluation results for public models.",
                ),
            ],
        }
    }
}
