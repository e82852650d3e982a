//! Remediation playbook: authored action templates per category.

use std::collections::HashMap;

use crate::catalog::{standard_catalogs, FunctionCatalog};
use crate::types::ActionTemplate;

/// Action templates keyed by category id, each list ordered by threshold.
#[derive(Debug, Clone, Default)]
pub struct Playbook {
    templates: HashMap<String, Vec<ActionTemplate>>,
}

impl Playbook {
    /// The playbook authored alongside the NIST AI RMF catalog.
    pub fn nist_ai_rmf() -> Self {
        Self::from_catalogs(&standard_catalogs())
    }

    pub fn from_catalogs(catalogs: &[Box<dyn FunctionCatalog>]) -> Self {
        let mut playbook = Self::default();
        for catalog in catalogs {
            for content in catalog.categories() {
                playbook = playbook.with_templates(content.category.id, content.playbook);
            }
        }
        playbook
    }

    /// Builder: set the templates for a category.
    pub fn with_templates(
        mut self,
        category_id: impl Into<String>,
        mut templates: Vec<ActionTemplate>,
    ) -> Self {
        templates.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));
        self.templates.insert(category_id.into(), templates);
        self
    }

    /// All templates for a category, lowest threshold first.
    pub fn templates_for(&self, category_id: &str) -> &[ActionTemplate] {
        self.templates
            .get(category_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The template to act on for a category at `avg_score`.
    ///
    /// Picks the most foundational template whose threshold is still unmet;
    /// once every threshold is met the last template keeps applying.
    pub fn select(&self, category_id: &str, avg_score: f64) -> Option<&ActionTemplate> {
        let templates = self.templates_for(category_id);
        templates
            .iter()
            .find(|t| avg_score < t.threshold)
            .or_else(|| templates.last())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_every_category() {
        let playbook = Playbook::nist_ai_rmf();
        assert_eq!(playbook.len(), 19);
        assert_eq!(playbook.templates_for("GV.1").len(), 2);
        assert!(playbook.templates_for("ZZ.9").is_empty());
    }

    #[test]
    fn test_select_most_foundational_unmet() {
        let playbook = Playbook::nist_ai_rmf();

        let low = playbook.select("GV.1", 1.4).unwrap();
        assert_eq!(low.title, "Develop AI Risk Management Policy Framework");

        let mid = playbook.select("GV.1", 2.5).unwrap();
        assert_eq!(mid.title, "Establish Policy Review Cycle");

        let high = playbook.select("GV.1", 3.7).unwrap();
        assert_eq!(high.title, "Establish Policy Review Cycle");
    }

    #[test]
    fn test_single_template_always_selected() {
        let playbook = Playbook::nist_ai_rmf();
        let early = playbook.select("GV.4", 1.0).unwrap();
        let late = playbook.select("GV.4", 3.9).unwrap();
        assert_eq!(early, late);
    }

    #[test]
    fn test_templates_sorted_by_threshold() {
        let playbook = Playbook::default().with_templates(
            "X.1",
            vec![
                ActionTemplate::new(3.0, "later", "", "", ""),
                ActionTemplate::new(2.0, "first", "", "", ""),
            ],
        );
        assert_eq!(playbook.templates_for("X.1")[0].title, "first");
        assert!(Playbook::default().select("X.1", 1.0).is_none());
    }
}
