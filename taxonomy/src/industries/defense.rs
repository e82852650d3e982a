//! Defense & National Security industry profile.

use crate::industries::IndustryProvider;
use crate::types::{
    Effort, IndustryProfile, Recommendation, RecommendationPriority, RmfFunction,
};

/// Provider for the defense industry.
pub struct DefenseIndustry;

impl IndustryProvider for DefenseIndustry {
    fn id(&self) -> &'static str {
        "defense"
    }

    fn profile(&self) -> IndustryProfile {
        IndustryProfile {
            id: self.id().to_string(),
            code: "DEF".to_string(),
            name: "Defense & National Security".to_string(),
            description: "Intelligence analysis, autonomy, logistics and cyber operations where AI must be reliable, governable and secure against adversaries.".to_string(),
            regulations: vec![
                "DoD Directive 3000.09".to_string(),
                "DoD Responsible AI Principles".to_string(),
                "CMMC 2.0".to_string(),
                "ITAR".to_string(),
                "NIST SP 800-171".to_string(),
            ],
            recommendations: vec![
                Recommendation::new(
                    RmfFunction::Govern,
                    RecommendationPriority::Critical,
                    Effort::High,
                    "Implement Responsible AI Toolkit Practices",
                    "Adopt DoD Responsible AI principles with documented accountability for every AI capability through its lifecycle.",
                ),
                Recommendation::new(
                    RmfFunction::Map,
                    RecommendationPriority::Critical,
                    Effort::Medium,
                    "Define Operational Boundaries for Autonomy",
                    "Specify the conditions, environments and levels of human judgment required for each autonomous or semi-autonomous function.",
                ),
                Recommendation::new(
                    RmfFunction::Measure,
                    RecommendationPriority::Critical,
                    Effort::High,
                    "Red-Team Against Adversarial Threats",
                    "Test models against deception, data poisoning and evasion techniques representative of capable adversaries.",
                ),
                Recommendation::new(
                    RmfFunction::Manage,
                    RecommendationPriority::High,
                    Effort::High,
                    "Maintain Human Judgment Over Use of Force",
                    "Ensure appropriate levels of human judgment with tested disengagement and deactivation mechanisms.",
                ),
                Recommendation::new(
                    RmfFunction::Measure,
                    RecommendationPriority::Medium,
                    Effort::Medium,
                    "Secure the AI Supply Chain",
                    "Track provenance of models, datasets and components and apply controlled-unclassified-information safeguards.",
                ),
            ],
        }
    }
}
