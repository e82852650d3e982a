//! Education industry profile.

use crate::industries::IndustryProvider;
use crate::types::{
    Effort, IndustryProfile, Recommendation, RecommendationPriority, RmfFunction,
};

/// Provider for the education industry.
pub struct EducationIndustry;

impl IndustryProvider for EducationIndustry {
    fn id(&self) -> &'static str {
        "education"
    }

    fn profile(&self) -> IndustryProfile {
        IndustryProfile {
            id: self.id().to_string(),
            code: "EDU".to_string(),
            name: "Education".to_string(),
            description: "Adaptive learning, proctoring, admissions and student-support tools used with minors and other protected learners.".to_string(),
            regulations: vec![
                "FERPA".to_string(),
                "COPPA".to_string(),
                "Title VI and Title IX".to_string(),
                "ADA / Section 504".to_string(),
                "State Student Privacy Laws".to_string(),
            ],
            recommendations: vec![
                Recommendation::new(
                    RmfFunction::Govern,
                    RecommendationPriority::High,
                    Effort::Low,
                    "Set an Institutional AI Use Policy",
                    "Define acceptable AI use for staff and students, including academic integrity expectations and approval for new tools.",
                ),
                Recommendation::new(
                    RmfFunction::Map,
                    RecommendationPriority::High,
                    Effort::Medium,
                    "Assess Impacts on Students",
                    "Identify how AI tools affect grading, admissions, discipline and access, with attention to students with disabilities and English learners.",
                ),
                Recommendation::new(
                    RmfFunction::Measure,
                    RecommendationPriority::High,
                    Effort::Medium,
                    "Audit Proctoring and Admissions Tools for Bias",
                    "Test for differential error rates across student groups before adoption and at each renewal.",
                ),
                Recommendation::new(
                    RmfFunction::Manage,
                    RecommendationPriority::Critical,
                    Effort::Medium,
                    "Protect Student Data With Vendors",
                    "Require FERPA- and COPPA-compliant data agreements, prohibit secondary use of student data and verify deletion.",
                ),
                Recommendation::new(
                    RmfFunction::Manage,
                    RecommendationPriority::Medium,
                    Effort::Low,
                    "Offer Human Alternatives",
                    "Give students and families a non-AI path and a way to contest AI-informed decisions.",
                ),
            ],
        }
    }
}
