//! Core types for the AI RMF taxonomy.
//!
//! These types model the function → category → question hierarchy plus the
//! static content (remediation playbook, industry profiles) keyed by it.
//!
//! With the `typescript` feature enabled, these types can be exported to TypeScript
//! using ts-rs so the assessment client shares the same shapes.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Top-level AI RMF pillar.
///
/// Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum RmfFunction {
    /// Culture, policies and accountability for AI risk
    Govern,
    /// Context and risk identification
    Map,
    /// Analysis, assessment and tracking of AI risk
    Measure,
    /// Prioritization and treatment of AI risk
    Manage,
}

impl RmfFunction {
    /// Stable identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Govern => "govern",
            Self::Map => "map",
            Self::Measure => "measure",
            Self::Manage => "manage",
        }
    }

    /// Two-letter code used as the category prefix.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Govern => "GV",
            Self::Map => "MP",
            Self::Measure => "MS",
            Self::Manage => "MG",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Govern => "Govern",
            Self::Map => "Map",
            Self::Measure => "Measure",
            Self::Manage => "Manage",
        }
    }

    /// Display color for charts.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Govern => "#002FA7",
            Self::Map => "#0F172A",
            Self::Measure => "#16A34A",
            Self::Manage => "#DC2626",
        }
    }

    /// Parse a wire identifier.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "govern" => Some(Self::Govern),
            "map" => Some(Self::Map),
            "measure" => Some(Self::Measure),
            "manage" => Some(Self::Manage),
            _ => None,
        }
    }

    /// All functions in display order.
    pub fn all() -> [Self; 4] {
        [Self::Govern, Self::Map, Self::Measure, Self::Manage]
    }
}

impl std::fmt::Display for RmfFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A function as exposed in the taxonomy dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Function {
    /// Stable id (govern/map/measure/manage)
    pub id: RmfFunction,
    /// Short code (GV/MP/MS/MG)
    pub code: String,
    /// Display name
    pub name: String,
    /// Display color
    pub color: String,
    /// One-line summary of the pillar
    pub description: String,
}

impl Function {
    /// Build the descriptor for a function with its standard code, name and color.
    pub fn new(id: RmfFunction, description: impl Into<String>) -> Self {
        Self {
            id,
            code: id.code().to_string(),
            name: id.display_name().to_string(),
            color: id.color().to_string(),
            description: description.into(),
        }
    }
}

/// A subdivision of a function; the unit of action generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Category {
    /// Category code, e.g. `GV.1`
    pub id: String,
    /// Display name
    pub name: String,
    /// Parent function
    pub function: RmfFunction,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, function: RmfFunction) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            function,
        }
    }
}

/// A single self-assessment question, answered on a 1-5 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Question {
    /// Globally unique question id, e.g. `GV.1.2`
    pub id: String,
    /// Parent function (denormalized from the category)
    pub function: RmfFunction,
    /// Parent category code
    pub category: String,
    /// Parent category name (denormalized for display)
    pub category_name: String,
    /// The question text
    pub question: String,
    /// What a strong answer looks like
    pub guidance: String,
}

impl Question {
    /// Create a question under a category.
    ///
    /// The parent links are filled from `category` so they cannot disagree.
    pub fn new(
        id: impl Into<String>,
        category: &Category,
        question: impl Into<String>,
        guidance: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            function: category.function,
            category: category.id.clone(),
            category_name: category.name.clone(),
            question: question.into(),
            guidance: guidance.into(),
        }
    }
}

/// A remediation step authored for a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ActionTemplate {
    /// The template applies while the category average is below this value
    pub threshold: f64,
    /// Short imperative title
    pub title: String,
    /// What to do
    pub description: String,
    /// Expected duration, e.g. `0-3 months`
    pub timeline: String,
    /// Teams or roles needed
    pub resources: String,
}

impl ActionTemplate {
    pub fn new(
        threshold: f64,
        title: impl Into<String>,
        description: impl Into<String>,
        timeline: impl Into<String>,
        resources: impl Into<String>,
    ) -> Self {
        Self {
            threshold,
            title: title.into(),
            description: description.into(),
            timeline: timeline.into(),
            resources: resources.into(),
        }
    }
}

/// Authoring priority of an industry recommendation.
///
/// Independent from the severity of generated priority actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl RecommendationPriority {
    /// Sort rank, most urgent first.
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

/// Estimated implementation effort of an industry recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Effort {
    Low,
    Medium,
    High,
}

/// Static guidance authored per (industry, function).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Recommendation {
    /// Function this recommendation strengthens
    pub function: RmfFunction,
    /// Authoring priority
    pub priority: RecommendationPriority,
    /// Implementation effort
    pub effort: Effort,
    pub title: String,
    pub description: String,
}

impl Recommendation {
    pub fn new(
        function: RmfFunction,
        priority: RecommendationPriority,
        effort: Effort,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            function,
            priority,
            effort,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Everything known about one industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct IndustryProfile {
    /// Stable id, e.g. `healthcare`
    pub id: String,
    /// Short code, e.g. `HC`
    pub code: String,
    pub name: String,
    pub description: String,
    /// Regulations and frameworks that apply to AI in this sector
    pub regulations: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

/// Listing entry for an industry (profile without recommendations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct IndustrySummary {
    pub id: String,
    pub name: String,
    pub code: String,
    pub regulations: Vec<String>,
    pub description: String,
}

impl From<&IndustryProfile> for IndustrySummary {
    fn from(profile: &IndustryProfile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            code: profile.code.clone(),
            regulations: profile.regulations.clone(),
            description: profile.description.clone(),
        }
    }
}
