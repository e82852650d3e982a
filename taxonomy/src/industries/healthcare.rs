//! Healthcare & Life Sciences industry profile.

use crate::industries::IndustryProvider;
use crate::types::{
    Effort, IndustryProfile, Recommendation, RecommendationPriority, RmfFunction,
};

/// Provider for the healthcare industry.
pub struct HealthcareIndustry;

impl IndustryProvider for HealthcareIndustry {
    fn id(&self) -> &'static str {
        "healthcare"
    }

    fn profile(&self) -> IndustryProfile {
        IndustryProfile {
            id: self.id().to_string(),
            code: "HC".to_string(),
            name: "Healthcare & Life Sciences".to_string(),
            description: "Clinical decision support, diagnostic imaging, patient triage and drug discovery, where AI errors can directly affect patient safety.".to_string(),
            regulations: vec![
                "HIPAA".to_string(),
                "FDA AI/ML SaMD Guidance".to_string(),
                "21st Century Cures Act".to_string(),
                "HHS Section 1557 Nondiscrimination Rule".to_string(),
                "EU AI Act (High-Risk: Medical Devices)".to_string(),
            ],
            recommendations: vec![
                Recommendation::new(
                    RmfFunction::Govern,
                    RecommendationPriority::Critical,
                    Effort::High,
                    "Establish a Clinical AI Governance Board",
                    "Form a board of clinicians, informaticists, ethicists and patient advocates with authority to approve, pause or retire clinical AI tools.",
                ),
                Recommendation::new(
                    RmfFunction::Map,
                    RecommendationPriority::Critical,
                    Effort::Medium,
                    "Classify Clinical AI by Patient Impact",
                    "Map every AI tool to the clinical decisions it influences and tier it by potential patient harm, aligning with FDA software-as-a-medical-device categories.",
                ),
                Recommendation::new(
                    RmfFunction::Measure,
                    RecommendationPriority::High,
                    Effort::High,
                    "Validate Models Across Patient Populations",
                    "Evaluate sensitivity, specificity and calibration separately for age, sex, race and comorbidity groups before and after deployment.",
                ),
                Recommendation::new(
                    RmfFunction::Manage,
                    RecommendationPriority::High,
                    Effort::Medium,
                    "Keep Clinicians in the Loop",
                    "Require clinician review of AI recommendations for high-impact decisions and provide a one-step path to override and report errors.",
                ),
                Recommendation::new(
                    RmfFunction::Measure,
                    RecommendationPriority::Medium,
                    Effort::Medium,
                    "Protect PHI in Training and Inference",
                    "Apply de-identification, access logging and minimum-necessary controls to every dataset and prompt that touches protected health information.",
                ),
            ],
        }
    }
}
