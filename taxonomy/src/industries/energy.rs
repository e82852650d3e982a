//! Energy & Utilities industry profile.

use crate::industries::IndustryProvider;
use crate::types::{
    Effort, IndustryProfile, Recommendation, RecommendationPriority, RmfFunction,
};

/// Provider for the energy industry.
pub struct EnergyIndustry;

impl IndustryProvider for EnergyIndustry {
    fn id(&self) -> &'static str {
        "energy"
    }

    fn profile(&self) -> IndustryProfile {
        IndustryProfile {
            id: self.id().to_string(),
            code: "EN".to_string(),
            name: "Energy & Utilities".to_string(),
            description: "Grid optimization, predictive maintenance, demand forecasting and operational technology where failures can cascade into physical systems.".to_string(),
            regulations: vec![
                "NERC CIP Standards".to_string(),
                "FERC Order 881".to_string(),
                "IEC 62443".to_string(),
                "DOE AI Risk Guidance".to_string(),
                "TSA Pipeline Security Directives".to_string(),
            ],
            recommendations: vec![
                Recommendation::new(
                    RmfFunction::Govern,
                    RecommendationPriority::High,
                    Effort::Medium,
                    "Integrate AI Into Operational Risk Governance",
                    "Bring AI used in grid and plant operations under existing safety and reliability governance with clear operational ownership.",
                ),
                Recommendation::new(
                    RmfFunction::Map,
                    RecommendationPriority::Critical,
                    Effort::Medium,
                    "Identify Safety-Critical AI Dependencies",
                    "Map where AI outputs feed control systems or dispatch decisions and define safe fallback modes.",
                ),
                Recommendation::new(
                    RmfFunction::Measure,
                    RecommendationPriority::High,
                    Effort::High,
                    "Stress-Test Forecasting Models",
                    "Validate load and generation forecasts against extreme weather and rare-event scenarios, not only average conditions.",
                ),
                Recommendation::new(
                    RmfFunction::Manage,
                    RecommendationPriority::Critical,
                    Effort::High,
                    "Segment and Secure OT-Connected AI",
                    "Apply IEC 62443 zoning and NERC CIP controls to AI systems with any path to operational technology.",
                ),
            ],
        }
    }
}
