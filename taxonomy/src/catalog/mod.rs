//! Authored AI RMF content.
//!
//! Each function provides its categories, their questions and the remediation
//! playbook for each category. The registry and playbook are assembled from
//! these providers once at startup.

pub mod govern;
pub mod manage;
pub mod map;
pub mod measure;

pub use govern::GovernCatalog;
pub use manage::ManageCatalog;
pub use map::MapCatalog;
pub use measure::MeasureCatalog;

use crate::types::{ActionTemplate, Category, Function, Question, RmfFunction};

/// Trait for function-specific taxonomy content.
pub trait FunctionCatalog: Send + Sync {
    /// Descriptor for the function this catalog covers
    fn function(&self) -> Function;

    /// Categories in display order, with their questions and playbook
    fn categories(&self) -> Vec<CategoryContent>;
}

/// The standard catalogs in display order.
pub fn standard_catalogs() -> Vec<Box<dyn FunctionCatalog>> {
    vec![
        Box::new(GovernCatalog),
        Box::new(MapCatalog),
        Box::new(MeasureCatalog),
        Box::new(ManageCatalog),
    ]
}

/// A category with everything authored under it.
#[derive(Debug, Clone)]
pub struct CategoryContent {
    pub category: Category,
    pub questions: Vec<Question>,
    pub playbook: Vec<ActionTemplate>,
}

impl CategoryContent {
    pub fn new(id: &str, name: &str, function: RmfFunction) -> Self {
        Self {
            category: Category::new(id, name, function),
            questions: Vec::new(),
            playbook: Vec::new(),
        }
    }

    /// Builder: append a question; ids are numbered `<category>.<n>`.
    pub fn question(mut self, text: &str, guidance: &str) -> Self {
        let id = format!("{}.{}", self.category.id, self.questions.len() + 1);
        self.questions
            .push(Question::new(id, &self.category, text, guidance));
        self
    }

    /// Builder: append a remediation template.
    pub fn action(
        mut self,
        threshold: f64,
        title: &str,
        description: &str,
        timeline: &str,
        resources: &str,
    ) -> Self {
        self.playbook.push(ActionTemplate::new(
            threshold,
            title,
            description,
            timeline,
            resources,
        ));
        self
    }
}
