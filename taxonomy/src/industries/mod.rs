//! Industry profiles: regulations and statically authored recommendations.
//!
//! Content is keyed by industry only. It does not depend on any assessment.

pub mod defense;
pub mod education;
pub mod energy;
pub mod finance;
pub mod government;
pub mod healthcare;
pub mod technology;

pub use defense::DefenseIndustry;
pub use education::EducationIndustry;
pub use energy::EnergyIndustry;
pub use finance::FinanceIndustry;
pub use government::GovernmentIndustry;
pub use healthcare::HealthcareIndustry;
pub use technology::TechnologyIndustry;

use std::collections::HashMap;

use crate::error::{Result, TaxonomyError};
use crate::types::{IndustryProfile, IndustrySummary};

/// Trait for industry-specific content.
pub trait IndustryProvider: Send + Sync {
    /// Stable industry id
    fn id(&self) -> &'static str;

    /// Full authored profile
    fn profile(&self) -> IndustryProfile;
}

/// Indexed set of industry profiles, in listing order.
#[derive(Debug, Clone, Default)]
pub struct IndustryCatalog {
    profiles: Vec<IndustryProfile>,
    index: HashMap<String, usize>,
}

impl IndustryCatalog {
    /// The seven standard industries.
    pub fn standard() -> Self {
        let providers: Vec<Box<dyn IndustryProvider>> = vec![
            Box::new(HealthcareIndustry),
            Box::new(FinanceIndustry),
            Box::new(GovernmentIndustry),
            Box::new(DefenseIndustry),
            Box::new(TechnologyIndustry),
            Box::new(EnergyIndustry),
            Box::new(EducationIndustry),
        ];
        Self::from_providers(&providers)
    }

    /// Build from providers; a later provider with the same id replaces the earlier one.
    pub fn from_providers(providers: &[Box<dyn IndustryProvider>]) -> Self {
        providers
            .iter()
            .fold(Self::default(), |catalog, p| catalog.with_profile(p.profile()))
    }

    /// Builder: add or replace a profile.
    pub fn with_profile(mut self, profile: IndustryProfile) -> Self {
        match self.index.get(&profile.id) {
            Some(&pos) => self.profiles[pos] = profile,
            None => {
                self.index.insert(profile.id.clone(), self.profiles.len());
                self.profiles.push(profile);
            }
        }
        self
    }

    pub fn get(&self, industry_id: &str) -> Result<&IndustryProfile> {
        self.index
            .get(industry_id)
            .map(|&pos| &self.profiles[pos])
            .ok_or_else(|| TaxonomyError::not_found("industry", industry_id))
    }

    pub fn contains(&self, industry_id: &str) -> bool {
        self.index.contains_key(industry_id)
    }

    pub fn profiles(&self) -> &[IndustryProfile] {
        &self.profiles
    }

    /// Listing entries without recommendation bodies.
    pub fn summaries(&self) -> Vec<IndustrySummary> {
        self.profiles.iter().map(IndustrySummary::from).collect()
    }
}
