//! Scoring engine for the NIST AI RMF maturity self-assessment.
//!
//! Turns a sparse set of 1–5 answers into hierarchical scores, maturity
//! labels and a ranked list of remediation actions. Everything here is a pure
//! function of the registry, the playbook and the answers.
//!
//! # Example
//!
//! ```
//! use rmf_scoring::{evaluate, AnswerInput, AnswerSet};
//! use rmf_taxonomy::{Playbook, TaxonomyRegistry};
//!
//! let registry = TaxonomyRegistry::nist_ai_rmf().unwrap();
//! let playbook = Playbook::nist_ai_rmf();
//!
//! let answers = AnswerSet::validate(&[AnswerInput::new("GV.1.1", 5)], &registry).unwrap();
//! let evaluation = evaluate(&registry, &playbook, &answers).unwrap();
//!
//! assert_eq!(evaluation.scores.categories.len(), 19);
//! assert!(!evaluation.actions.is_empty());
//! ```

pub mod actions;
pub mod aggregate;
pub mod answers;
pub mod error;
pub mod maturity;

pub use actions::{ActionGenerator, PriorityAction, Severity, TARGET_SCORE};
pub use aggregate::{AggregationEngine, CategoryScore, FunctionScore, Score, ScoreCard};
pub use answers::{AnswerInput, AnswerSet, DEFAULT_SCORE, MAX_SCORE, MIN_SCORE};
pub use error::{InvalidAnswer, Result, ScoringError};
pub use maturity::{maturity_levels, MaturityBand, MaturityLevel};

use rmf_taxonomy::{Playbook, TaxonomyRegistry};

/// Scores and actions computed together for one answer set.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub scores: ScoreCard,
    pub actions: Vec<PriorityAction>,
}

/// Aggregate `answers` and derive the matching priority actions.
///
/// Either both parts are produced or neither is.
pub fn evaluate(
    registry: &TaxonomyRegistry,
    playbook: &Playbook,
    answers: &AnswerSet,
) -> Result<Evaluation> {
    let scores = AggregationEngine::new(registry).aggregate(answers)?;
    let actions = ActionGenerator::new(playbook).generate(&scores.categories);
    Ok(Evaluation { scores, actions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmf_taxonomy::{Category, Function, Question, RmfFunction};

    fn govern_only() -> TaxonomyRegistry {
        let gv = Category::new("GV-1", "Policies", RmfFunction::Govern);
        TaxonomyRegistry::from_parts(
            vec![Function::new(RmfFunction::Govern, "")],
            vec![gv.clone()],
            vec![
                Question::new("q1", &gv, "", ""),
                Question::new("q2", &gv, "", ""),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_evaluate_managed_has_no_actions() {
        let registry = govern_only();
        let answers = AnswerSet::validate(
            &[AnswerInput::new("q1", 5), AnswerInput::new("q2", 3)],
            &registry,
        )
        .unwrap();

        let evaluation = evaluate(&registry, &Playbook::default(), &answers).unwrap();
        assert_eq!(evaluation.scores.overall.score_pct, 75);
        assert!(evaluation.actions.is_empty());
    }

    #[test]
    fn test_evaluate_initial_has_critical_action() {
        let registry = govern_only();
        let answers = AnswerSet::validate(&[AnswerInput::new("q1", 1)], &registry).unwrap();

        let evaluation = evaluate(&registry, &Playbook::default(), &answers).unwrap();
        assert_eq!(evaluation.actions.len(), 1);
        assert_eq!(evaluation.actions[0].severity, Severity::Critical);
        assert_eq!(evaluation.actions[0].category_id, "GV-1");
    }

    #[test]
    fn test_actions_track_categories_below_target() {
        let registry = TaxonomyRegistry::nist_ai_rmf().unwrap();
        let playbook = Playbook::nist_ai_rmf();
        let inputs: Vec<AnswerInput> = registry
            .all_questions()
            .iter()
            .enumerate()
            .map(|(i, q)| AnswerInput::new(q.id.clone(), (i % 5) as i64 + 1))
            .collect();
        let answers = AnswerSet::validate(&inputs, &registry).unwrap();

        let evaluation = evaluate(&registry, &playbook, &answers).unwrap();
        for category in &evaluation.scores.categories {
            let has_action = evaluation
                .actions
                .iter()
                .any(|a| a.category_id == category.category_id);
            assert_eq!(has_action, category.score.avg_score < TARGET_SCORE);
        }
    }

    #[test]
    fn test_all_fives_is_optimizing_without_actions() {
        let registry = TaxonomyRegistry::nist_ai_rmf().unwrap();
        let inputs: Vec<AnswerInput> = registry
            .all_questions()
            .iter()
            .map(|q| AnswerInput::new(q.id.clone(), 5))
            .collect();
        let answers = AnswerSet::validate(&inputs, &registry).unwrap();

        let evaluation = evaluate(&registry, &Playbook::nist_ai_rmf(), &answers).unwrap();
        assert_eq!(evaluation.scores.overall.score_pct, 100);
        assert_eq!(evaluation.scores.overall.maturity, MaturityLevel::Optimizing);
        assert!(evaluation.actions.is_empty());
    }

    #[test]
    fn test_full_playbook_covers_every_action() {
        let registry = TaxonomyRegistry::nist_ai_rmf().unwrap();
        let playbook = Playbook::nist_ai_rmf();
        let evaluation = evaluate(&registry, &playbook, &AnswerSet::empty()).unwrap();

        assert_eq!(evaluation.actions.len(), 19);
        for action in &evaluation.actions {
            assert!(playbook.select(&action.category_id, action.current_score).is_some());
            assert_eq!(action.severity, Severity::Critical);
        }
    }
}
