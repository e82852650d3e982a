//! Immutable assessment records.

use chrono::{DateTime, Utc};
use rmf_scoring::{
    AnswerSet, CategoryScore, Evaluation, FunctionScore, MaturityLevel, PriorityAction, Score,
};
use rmf_taxonomy::{RmfFunction, TaxonomyRegistry};
use serde::{Deserialize, Serialize};

/// One spoke of the function radar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    /// Function display name
    pub function: String,
    /// Function `score_pct`
    pub score: u8,
    pub full_mark: u8,
}

/// An answer as stored, after the default has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedAnswer {
    pub question_id: String,
    pub score: u8,
}

/// A submitted assessment with every derived result embedded.
///
/// Built once, never mutated. Scores and actions are never recomputed from
/// the registry, so a later registry change leaves historical records intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: String,
    pub organization_name: String,
    pub industry: String,
    pub created_at: DateTime<Utc>,
    /// Overall `score_pct`
    pub overall_score: u8,
    pub overall_maturity: MaturityLevel,
    pub overall: Score,
    pub function_scores: Vec<FunctionScore>,
    pub category_scores: Vec<CategoryScore>,
    pub radar_data: Vec<RadarPoint>,
    pub priority_actions: Vec<PriorityAction>,
    /// Every registry question with its effective score
    pub answers: Vec<RecordedAnswer>,
    /// Fingerprint of the registry this record was scored against
    pub taxonomy_fingerprint: String,
}

/// Who submitted and when, supplied by the service.
#[derive(Debug, Clone)]
pub struct RecordHeader {
    pub id: String,
    pub organization_name: String,
    pub industry: String,
    pub created_at: DateTime<Utc>,
}

impl AssessmentRecord {
    /// Assemble a record from a finished evaluation.
    pub fn assemble(
        header: RecordHeader,
        registry: &TaxonomyRegistry,
        answers: &AnswerSet,
        evaluation: Evaluation,
    ) -> Self {
        let Evaluation { scores, actions } = evaluation;

        let radar_data = scores
            .functions
            .iter()
            .map(|f| RadarPoint {
                function: f.name.clone(),
                score: f.score.score_pct,
                full_mark: 100,
            })
            .collect();

        let answers = answers
            .defaulted(registry)
            .map(|(question, score)| RecordedAnswer {
                question_id: question.id.clone(),
                score,
            })
            .collect();

        Self {
            id: header.id,
            organization_name: header.organization_name,
            industry: header.industry,
            created_at: header.created_at,
            overall_score: scores.overall.score_pct,
            overall_maturity: scores.overall.maturity,
            overall: scores.overall,
            function_scores: scores.functions,
            category_scores: scores.categories,
            radar_data,
            priority_actions: actions,
            answers,
            taxonomy_fingerprint: registry.fingerprint().to_string(),
        }
    }

    pub fn function_score(&self, function: RmfFunction) -> Option<&FunctionScore> {
        self.function_scores.iter().find(|f| f.function == function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmf_scoring::{evaluate, AnswerInput};
    use rmf_taxonomy::Playbook;

    fn header() -> RecordHeader {
        RecordHeader {
            id: "rec-1".to_string(),
            organization_name: "Acme".to_string(),
            industry: "finance".to_string(),
            created_at: Utc::now(),
        }
    }

    fn record(inputs: &[AnswerInput]) -> AssessmentRecord {
        let registry = TaxonomyRegistry::nist_ai_rmf().unwrap();
        let answers = AnswerSet::validate(inputs, &registry).unwrap();
        let evaluation = evaluate(&registry, &Playbook::nist_ai_rmf(), &answers).unwrap();
        AssessmentRecord::assemble(header(), &registry, &answers, evaluation)
    }

    #[test]
    fn test_record_embeds_full_defaulted_answers() {
        let record = record(&[AnswerInput::new("GV.1.1", 4)]);
        assert_eq!(record.answers.len(), 62);

        let first = &record.answers[0];
        assert_eq!(first.question_id, "GV.1.1");
        assert_eq!(first.score, 4);
        assert!(record.answers[1..].iter().all(|a| a.score == 1));
    }

    #[test]
    fn test_radar_data_follows_functions() {
        let record = record(&[]);
        let names: Vec<&str> = record.radar_data.iter().map(|p| p.function.as_str()).collect();
        assert_eq!(names, vec!["Govern", "Map", "Measure", "Manage"]);
        assert!(record.radar_data.iter().all(|p| p.full_mark == 100 && p.score == 0));
    }

    #[test]
    fn test_overall_fields_agree() {
        let record = record(&[AnswerInput::new("MP.1.1", 5)]);
        assert_eq!(record.overall_score, record.overall.score_pct);
        assert_eq!(record.overall_maturity, record.overall.maturity);
        assert_eq!(record.taxonomy_fingerprint.len(), 64);
        assert!(record.function_score(RmfFunction::Map).is_some());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(record(&[])).unwrap();
        assert_eq!(json["overall_maturity"], "Initial");
        assert_eq!(json["category_scores"][0]["category_id"], "GV.1");
        assert_eq!(json["category_scores"][0]["score_pct"], 0);
        assert_eq!(json["priority_actions"][0]["severity"], "critical");
    }
}
