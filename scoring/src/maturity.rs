//! Maturity classification.
//!
//! The same five-bucket table classifies category, function and overall
//! averages. Buckets are applied to the 1–5 average, never to the rounded
//! percentage. Each integer score 1–5 lands in its own bucket.
//!
//! Aggregates are means of means, so the engine classifies exact fractions
//! with [`MaturityLevel::from_fraction`]; `f64` averages are for display.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Maturity label, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum MaturityLevel {
    Initial = 1,
    Developing = 2,
    Defined = 3,
    Managed = 4,
    Optimizing = 5,
}

/// Upper bounds (exclusive) of the first four buckets.
const BUCKET_EDGES: [(f64, MaturityLevel); 4] = [
    (1.8, MaturityLevel::Initial),
    (2.6, MaturityLevel::Developing),
    (3.4, MaturityLevel::Defined),
    (4.2, MaturityLevel::Managed),
];

/// The same edges in fifths: `9/5 = 1.8` and so on.
const BUCKET_EDGES_FIFTHS: [(u128, MaturityLevel); 4] = [
    (9, MaturityLevel::Initial),
    (13, MaturityLevel::Developing),
    (17, MaturityLevel::Defined),
    (21, MaturityLevel::Managed),
];

impl MaturityLevel {
    /// Classify the exact average `num / den`.
    pub fn from_fraction(num: u128, den: u128) -> Self {
        BUCKET_EDGES_FIFTHS
            .iter()
            .find(|(fifths, _)| num * 5 < fifths * den)
            .map(|(_, level)| *level)
            .unwrap_or(Self::Optimizing)
    }

    /// Classify a 1–5 average.
    pub fn from_score(avg_score: f64) -> Self {
        BUCKET_EDGES
            .iter()
            .find(|(edge, _)| avg_score < *edge)
            .map(|(_, level)| *level)
            .unwrap_or(Self::Optimizing)
    }

    /// Numeric level 1–5.
    pub fn level(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Developing => "Developing",
            Self::Defined => "Defined",
            Self::Managed => "Managed",
            Self::Optimizing => "Optimizing",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Initial => "Ad hoc practices; AI risk is managed reactively, if at all.",
            Self::Developing => "Some practices exist but are inconsistent and largely undocumented.",
            Self::Defined => "Practices are documented and applied across most AI systems.",
            Self::Managed => "Practices are measured, monitored and enforced organization-wide.",
            Self::Optimizing => "Practices are continuously improved using metrics and feedback.",
        }
    }

    /// Inclusive lower bound of this bucket.
    pub fn min_score(&self) -> f64 {
        match self {
            Self::Initial => 1.0,
            Self::Developing => 1.8,
            Self::Defined => 2.6,
            Self::Managed => 3.4,
            Self::Optimizing => 4.2,
        }
    }

    /// Exclusive upper bound, `None` for the top bucket.
    pub fn max_score(&self) -> Option<f64> {
        BUCKET_EDGES
            .iter()
            .find(|(_, level)| level == self)
            .map(|(edge, _)| *edge)
    }

    /// All levels, lowest first.
    pub fn all() -> [Self; 5] {
        [
            Self::Initial,
            Self::Developing,
            Self::Defined,
            Self::Managed,
            Self::Optimizing,
        ]
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the maturity table, exposed for client display parity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct MaturityBand {
    pub level: u8,
    pub label: MaturityLevel,
    /// Inclusive lower bound on the 1–5 average
    pub threshold: f64,
    /// Exclusive upper bound, absent for the top band
    pub max_score: Option<f64>,
    pub description: String,
}

/// The bucket table, lowest band first.
pub fn maturity_levels() -> Vec<MaturityBand> {
    MaturityLevel::all()
        .into_iter()
        .map(|level| MaturityBand {
            level: level.level(),
            label: level,
            threshold: level.min_score(),
            max_score: level.max_score(),
            description: level.description().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_edges() {
        assert_eq!(MaturityLevel::from_score(1.0), MaturityLevel::Initial);
        assert_eq!(MaturityLevel::from_score(1.79), MaturityLevel::Initial);
        assert_eq!(MaturityLevel::from_score(1.8), MaturityLevel::Developing);
        assert_eq!(MaturityLevel::from_score(2.6), MaturityLevel::Defined);
        assert_eq!(MaturityLevel::from_score(3.4), MaturityLevel::Managed);
        assert_eq!(MaturityLevel::from_score(4.0), MaturityLevel::Managed);
        assert_eq!(MaturityLevel::from_score(4.2), MaturityLevel::Optimizing);
        assert_eq!(MaturityLevel::from_score(5.0), MaturityLevel::Optimizing);
    }

    #[test]
    fn test_fraction_edges() {
        // 9/5 exactly is Developing, a hair below is not
        assert_eq!(MaturityLevel::from_fraction(9, 5), MaturityLevel::Developing);
        assert_eq!(MaturityLevel::from_fraction(899, 500), MaturityLevel::Initial);
        assert_eq!(MaturityLevel::from_fraction(27, 15), MaturityLevel::Developing);
        assert_eq!(MaturityLevel::from_fraction(13, 5), MaturityLevel::Defined);
        assert_eq!(MaturityLevel::from_fraction(17, 5), MaturityLevel::Managed);
        assert_eq!(MaturityLevel::from_fraction(21, 5), MaturityLevel::Optimizing);
        assert_eq!(MaturityLevel::from_fraction(1, 1), MaturityLevel::Initial);
        assert_eq!(MaturityLevel::from_fraction(5, 1), MaturityLevel::Optimizing);
    }

    #[test]
    fn test_edge_tables_agree() {
        for ((edge, a), (fifths, b)) in BUCKET_EDGES.iter().zip(BUCKET_EDGES_FIFTHS.iter()) {
            assert_eq!(a, b);
            assert_eq!(*edge, *fifths as f64 / 5.0);
        }
    }

    #[test]
    fn test_integer_scores_map_to_their_level() {
        for level in MaturityLevel::all() {
            assert_eq!(MaturityLevel::from_score(level.level() as f64), level);
        }
    }

    #[test]
    fn test_monotonic() {
        let mut previous = MaturityLevel::Initial;
        for step in 0..=400 {
            let score = 1.0 + step as f64 * 0.01;
            let level = MaturityLevel::from_score(score);
            assert!(level >= previous, "dropped at {score}");
            previous = level;
        }
    }

    #[test]
    fn test_table_is_contiguous() {
        let bands = maturity_levels();
        assert_eq!(bands.len(), 5);
        assert_eq!(bands[0].threshold, 1.0);
        for pair in bands.windows(2) {
            assert_eq!(pair[0].max_score, Some(pair[1].threshold));
        }
        assert_eq!(bands[4].max_score, None);
        assert_eq!(bands[4].label, MaturityLevel::Optimizing);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&MaturityLevel::Developing).unwrap();
        assert_eq!(json, "\"Developing\"");
    }
}
