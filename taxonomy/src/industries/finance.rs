//! Financial Services industry profile.

use crate::industries::IndustryProvider;
use crate::types::{
    Effort, IndustryProfile, Recommendation, RecommendationPriority, RmfFunction,
};

/// Provider for the finance industry.
pub struct FinanceIndustry;

impl IndustryProvider for FinanceIndustry {
    fn id(&self) -> &'static str {
        "finance"
    }

    fn profile(&self) -> IndustryProfile {
        IndustryProfile {
            id: self.id().to_string(),
            code: "FS".to_string(),
            name: "Financial Services".to_string(),
            description: "Credit decisioning, fraud detection, trading and customer service automation under intensive model-risk and fair-lending supervision.".to_string(),
            regulations: vec![
                "SR 11-7 Model Risk Management".to_string(),
                "Equal Credit Opportunity Act".to_string(),
                "Fair Credit Reporting Act".to_string(),
                "SEC Regulation Best Interest".to_string(),
                "EU AI Act (High-Risk: Creditworthiness)".to_string(),
            ],
            recommendations: vec![
                Recommendation::new(
                    RmfFunction::Govern,
                    RecommendationPriority::Critical,
                    Effort::Medium,
                    "Extend Model Risk Management to AI",
                    "Bring all AI and machine learning models into the SR 11-7 inventory with independent validation, ownership and annual review.",
                ),
                Recommendation::new(
                    RmfFunction::Measure,
                    RecommendationPriority::Critical,
                    Effort::High,
                    "Test Credit Models for Disparate Impact",
                    "Run fair-lending analysis on every credit model, document less-discriminatory alternatives and keep adverse-action reasons explainable.",
                ),
                Recommendation::new(
                    RmfFunction::Map,
                    RecommendationPriority::High,
                    Effort::Medium,
                    "Document Model Purpose and Limits",
                    "Record intended use, data lineage and known limitations for each model so validators and examiners can trace every decision.",
                ),
                Recommendation::new(
                    RmfFunction::Manage,
                    RecommendationPriority::High,
                    Effort::Medium,
                    "Set Drift Triggers for Fraud and Credit Models",
                    "Define performance thresholds that trigger revalidation, challenger models or rollback when economic conditions shift.",
                ),
                Recommendation::new(
                    RmfFunction::Manage,
                    RecommendationPriority::Medium,
                    Effort::Low,
                    "Review Third-Party Model Vendors",
                    "Apply vendor due diligence and ongoing monitoring to purchased scoring, AML and chatbot models.",
                ),
            ],
        }
    }
}
