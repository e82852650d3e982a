//! Priority action generation.
//!
//! One action per category whose average sits below [`TARGET_SCORE`]. The
//! playbook supplies the wording; severity comes from the gap alone.

use rmf_taxonomy::{Playbook, RmfFunction};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::aggregate::CategoryScore;

/// Average at which a category needs no further action ("Managed").
pub const TARGET_SCORE: f64 = 4.0;

/// Urgency of a priority action. Declaration order is rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Classify a gap `TARGET_SCORE - avg_score`.
    pub fn from_gap(gap: f64) -> Self {
        if gap >= 2.5 {
            Self::Critical
        } else if gap >= 1.5 {
            Self::High
        } else if gap >= 0.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// 0 for critical through 3 for low.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Timeline used when the playbook has nothing for a category.
    fn default_timeline(&self) -> &'static str {
        match self {
            Self::Critical => "0-3 months",
            Self::High => "3-6 months",
            Self::Medium => "6-9 months",
            Self::Low => "9-12 months",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remediation item for one under-target category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PriorityAction {
    /// Stable per category, e.g. `gv-1-remediation`
    pub id: String,
    pub category_id: String,
    pub category_name: String,
    pub function_id: RmfFunction,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub timeline: String,
    pub resources: String,
    /// Unrounded category average
    pub current_score: f64,
    pub target_score: f64,
}

impl PriorityAction {
    pub fn gap(&self) -> f64 {
        self.target_score - self.current_score
    }
}

/// Derives priority actions from category aggregates.
pub struct ActionGenerator<'p> {
    playbook: &'p Playbook,
}

impl<'p> ActionGenerator<'p> {
    pub fn new(playbook: &'p Playbook) -> Self {
        Self { playbook }
    }

    /// Actions for every category below target, ordered by severity then gap.
    ///
    /// Ties keep the input order, so equal inputs always yield equal output.
    pub fn generate(&self, categories: &[CategoryScore]) -> Vec<PriorityAction> {
        let mut actions: Vec<PriorityAction> = categories
            .iter()
            .filter(|c| c.score.avg_score < TARGET_SCORE)
            .map(|c| self.action_for(c))
            .collect();

        // stable
        actions.sort_by(|a, b| {
            a.severity
                .cmp(&b.severity)
                .then_with(|| b.gap().total_cmp(&a.gap()))
        });

        debug!(
            categories = categories.len(),
            actions = actions.len(),
            "Generated priority actions"
        );

        actions
    }

    fn action_for(&self, category: &CategoryScore) -> PriorityAction {
        let avg = category.score.avg_score;
        let severity = Severity::from_gap(TARGET_SCORE - avg);

        let (title, description, timeline, resources) =
            match self.playbook.select(&category.category_id, avg) {
                Some(template) => (
                    template.title.clone(),
                    template.description.clone(),
                    template.timeline.clone(),
                    template.resources.clone(),
                ),
                None => (
                    format!("Raise {} to Managed maturity", category.name),
                    format!(
                        "Close the gap in {} ({}) by documenting, resourcing and monitoring the practices it covers.",
                        category.name, category.category_id
                    ),
                    severity.default_timeline().to_string(),
                    "AI Risk Management Team".to_string(),
                ),
            };

        PriorityAction {
            id: action_id(&category.category_id),
            category_id: category.category_id.clone(),
            category_name: category.name.clone(),
            function_id: category.function,
            severity,
            title,
            description,
            timeline,
            resources,
            current_score: avg,
            target_score: TARGET_SCORE,
        }
    }
}

fn action_id(category_id: &str) -> String {
    let slug: String = category_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("{slug}-remediation")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Score;
    use rmf_taxonomy::ActionTemplate;

    fn category(id: &str, function: RmfFunction, avg: f64) -> CategoryScore {
        CategoryScore {
            category_id: id.to_string(),
            name: format!("Category {id}"),
            function,
            score: Score::from_average(avg),
            question_count: 3,
        }
    }

    #[test]
    fn test_severity_from_gap() {
        assert_eq!(Severity::from_gap(3.0), Severity::Critical);
        assert_eq!(Severity::from_gap(2.5), Severity::Critical);
        assert_eq!(Severity::from_gap(2.49), Severity::High);
        assert_eq!(Severity::from_gap(1.5), Severity::High);
        assert_eq!(Severity::from_gap(0.5), Severity::Medium);
        assert_eq!(Severity::from_gap(0.1), Severity::Low);
    }

    #[test]
    fn test_severity_rank_order() {
        assert!(Severity::Critical < Severity::High);
        assert!(Severity::High < Severity::Medium);
        assert!(Severity::Medium < Severity::Low);
        assert_eq!(Severity::Critical.rank(), 0);
        assert_eq!(Severity::Low.rank(), 3);
    }

    #[test]
    fn test_one_action_per_category_below_target() {
        let playbook = Playbook::default();
        let categories = vec![
            category("GV-1", RmfFunction::Govern, 1.0),
            category("GV-2", RmfFunction::Govern, 4.0),
            category("MP-1", RmfFunction::Map, 3.99),
            category("MS-1", RmfFunction::Measure, 5.0),
        ];

        let actions = ActionGenerator::new(&playbook).generate(&categories);
        let ids: Vec<&str> = actions.iter().map(|a| a.category_id.as_str()).collect();
        assert_eq!(ids, vec!["GV-1", "MP-1"]);
    }

    #[test]
    fn test_no_actions_at_or_above_target() {
        let playbook = Playbook::default();
        let categories = vec![
            category("GV-1", RmfFunction::Govern, 4.0),
            category("MG-1", RmfFunction::Manage, 4.5),
        ];
        assert!(ActionGenerator::new(&playbook).generate(&categories).is_empty());
    }

    #[test]
    fn test_ordering_by_severity_then_gap() {
        let playbook = Playbook::default();
        let categories = vec![
            category("A", RmfFunction::Govern, 3.8),  // low
            category("B", RmfFunction::Govern, 2.3),  // high, gap 1.7
            category("C", RmfFunction::Map, 1.0),     // critical
            category("D", RmfFunction::Map, 2.0),     // high, gap 2.0
            category("E", RmfFunction::Measure, 3.0), // medium
        ];

        let actions = ActionGenerator::new(&playbook).generate(&categories);
        let ids: Vec<&str> = actions.iter().map(|a| a.category_id.as_str()).collect();
        assert_eq!(ids, vec!["C", "D", "B", "E", "A"]);

        for pair in actions.windows(2) {
            assert!(pair[0].severity <= pair[1].severity);
            if pair[0].severity == pair[1].severity {
                assert!(pair[0].gap() >= pair[1].gap());
            }
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let playbook = Playbook::default();
        let categories = vec![
            category("MG-2", RmfFunction::Manage, 2.0),
            category("GV-1", RmfFunction::Govern, 2.0),
        ];
        let actions = ActionGenerator::new(&playbook).generate(&categories);
        assert_eq!(actions[0].category_id, "MG-2");
        assert_eq!(actions[1].category_id, "GV-1");
    }

    #[test]
    fn test_critical_action_for_initial_category() {
        let playbook = Playbook::default();
        let actions =
            ActionGenerator::new(&playbook).generate(&[category("GV-1", RmfFunction::Govern, 1.0)]);

        assert_eq!(actions.len(), 1);
        let action = &actions[0];
        assert_eq!(action.severity, Severity::Critical);
        assert_eq!(action.gap(), 3.0);
        assert_eq!(action.current_score, 1.0);
        assert_eq!(action.target_score, TARGET_SCORE);
        assert_eq!(action.id, "gv-1-remediation");
        assert_eq!(action.timeline, "0-3 months");
    }

    #[test]
    fn test_uses_playbook_template() {
        let playbook = Playbook::default().with_templates(
            "GV.1",
            vec![
                ActionTemplate::new(3.0, "Formalize policies", "Write them", "3-6 months", "Legal"),
                ActionTemplate::new(2.0, "Start policies", "Draft them", "0-3 months", "Leadership"),
            ],
        );
        let generator = ActionGenerator::new(&playbook);

        let low = generator.generate(&[category("GV.1", RmfFunction::Govern, 1.5)]);
        assert_eq!(low[0].title, "Start policies");
        assert_eq!(low[0].id, "gv-1-remediation");

        let mid = generator.generate(&[category("GV.1", RmfFunction::Govern, 2.5)]);
        assert_eq!(mid[0].title, "Formalize policies");

        // above every threshold, still below target
        let high = generator.generate(&[category("GV.1", RmfFunction::Govern, 3.5)]);
        assert_eq!(high[0].title, "Formalize policies");
    }

    #[test]
    fn test_serializes_severity_lowercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}
