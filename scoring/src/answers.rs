//! Answer sets: the sparse question → score mapping of one submission.

use std::collections::{BTreeMap, HashSet};

use rmf_taxonomy::{Question, TaxonomyRegistry};
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::error::{InvalidAnswer, Result};

/// Lowest score on the answer scale.
pub const MIN_SCORE: u8 = 1;
/// Highest score on the answer scale.
pub const MAX_SCORE: u8 = 5;
/// Score assumed for any question left unanswered ("Initial").
pub const DEFAULT_SCORE: u8 = MIN_SCORE;

/// One answer as submitted.
///
/// `score` is wide on purpose so out-of-range values reach validation
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct AnswerInput {
    pub question_id: String,
    pub score: i64,
}

impl AnswerInput {
    pub fn new(question_id: impl Into<String>, score: i64) -> Self {
        Self {
            question_id: question_id.into(),
            score,
        }
    }
}

/// A validated, possibly partial set of answers.
///
/// Every key is a known question id and every value is within 1–5.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    scores: BTreeMap<String, u8>,
}

impl AnswerSet {
    /// An empty answer set; every question takes the default score.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate submitted answers against the registry.
    ///
    /// All-or-nothing: the first invalid answer rejects the whole set.
    pub fn validate(inputs: &[AnswerInput], registry: &TaxonomyRegistry) -> Result<Self> {
        let mut seen = HashSet::with_capacity(inputs.len());
        let mut scores = BTreeMap::new();

        for input in inputs {
            if !registry.contains_question(&input.question_id) {
                return Err(InvalidAnswer::UnknownQuestion(input.question_id.clone()).into());
            }
            let score = u8::try_from(input.score)
                .ok()
                .filter(|s| (MIN_SCORE..=MAX_SCORE).contains(s))
                .ok_or_else(|| InvalidAnswer::ScoreOutOfRange {
                    question_id: input.question_id.clone(),
                    score: input.score,
                })?;
            if !seen.insert(input.question_id.as_str()) {
                return Err(InvalidAnswer::DuplicateQuestion(input.question_id.clone()).into());
            }
            scores.insert(input.question_id.clone(), score);
        }

        Ok(Self { scores })
    }

    /// The explicit answer for a question, if any.
    pub fn get(&self, question_id: &str) -> Option<u8> {
        self.scores.get(question_id).copied()
    }

    /// The score used for aggregation, applying the default for unanswered questions.
    pub fn effective_score(&self, question_id: &str) -> u8 {
        self.get(question_id).unwrap_or(DEFAULT_SCORE)
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.scores.contains_key(question_id)
    }

    /// Number of explicitly answered questions.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Explicit answers in question-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.scores.iter().map(|(id, score)| (id.as_str(), *score))
    }

    /// Every question in the registry with its effective score, in registry order.
    pub fn defaulted<'r>(
        &'r self,
        registry: &'r TaxonomyRegistry,
    ) -> impl Iterator<Item = (&'r Question, u8)> + 'r {
        registry
            .all_questions()
            .iter()
            .map(move |q| (q, self.effective_score(&q.id)))
    }

    /// Share of registry questions explicitly answered, 0.0–1.0.
    pub fn completeness(&self, registry: &TaxonomyRegistry) -> f64 {
        match registry.total_question_count() {
            0 => 1.0,
            total => self.len() as f64 / total as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoringError;

    fn registry() -> TaxonomyRegistry {
        TaxonomyRegistry::nist_ai_rmf().unwrap()
    }

    #[test]
    fn test_validate_accepts_partial() {
        let set = AnswerSet::validate(
            &[AnswerInput::new("GV.1.1", 4), AnswerInput::new("MG.4.4", 2)],
            &registry(),
        )
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("GV.1.1"), Some(4));
        assert_eq!(set.effective_score("GV.1.2"), DEFAULT_SCORE);
        assert!(!set.is_answered("GV.1.2"));
    }

    #[test]
    fn test_validate_rejects_unknown_question() {
        let err = AnswerSet::validate(&[AnswerInput::new("GV.7.1", 3)], &registry()).unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidAnswer(InvalidAnswer::UnknownQuestion("GV.7.1".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        for score in [0, 6, -1, 300] {
            let err =
                AnswerSet::validate(&[AnswerInput::new("GV.1.1", score)], &registry()).unwrap_err();
            assert!(
                matches!(
                    err,
                    ScoringError::InvalidAnswer(InvalidAnswer::ScoreOutOfRange { score: s, .. }) if s == score
                ),
                "score {score} accepted"
            );
        }
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let err = AnswerSet::validate(
            &[AnswerInput::new("GV.1.1", 3), AnswerInput::new("GV.1.1", 5)],
            &registry(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ScoringError::InvalidAnswer(InvalidAnswer::DuplicateQuestion(_))
        ));
    }

    #[test]
    fn test_defaulted_covers_registry() {
        let registry = registry();
        let set = AnswerSet::validate(&[AnswerInput::new("MS.2.3", 5)], &registry).unwrap();
        let full: Vec<(&Question, u8)> = set.defaulted(&registry).collect();

        assert_eq!(full.len(), 62);
        assert_eq!(full[0].0.id, "GV.1.1");
        assert!(full
            .iter()
            .all(|(q, s)| if q.id == "MS.2.3" { *s == 5 } else { *s == 1 }));
    }

    #[test]
    fn test_completeness() {
        let registry = registry();
        assert_eq!(AnswerSet::empty().completeness(&registry), 0.0);

        let inputs: Vec<AnswerInput> = registry
            .all_questions()
            .iter()
            .map(|q| AnswerInput::new(q.id.clone(), 3))
            .collect();
        let set = AnswerSet::validate(&inputs, &registry).unwrap();
        assert_eq!(set.completeness(&registry), 1.0);
    }
}
