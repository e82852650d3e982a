//! The taxonomy registry: an immutable, precomputed index over functions,
//! categories and questions.
//!
//! Built once at process start and shared read-only (typically behind an
//! `Arc`) by every evaluation. Parent/child groupings are resolved at build
//! time so lookups never rescan the full question list.

use std::collections::HashMap;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::catalog::{standard_catalogs, FunctionCatalog};
use crate::error::{Result, TaxonomyError};
use crate::types::{Category, Function, Question, RmfFunction};

/// Immutable index over the function → category → question hierarchy.
#[derive(Debug, Clone)]
pub struct TaxonomyRegistry {
    functions: Vec<Function>,
    categories: Vec<Category>,
    questions: Vec<Question>,
    function_index: HashMap<RmfFunction, usize>,
    category_index: HashMap<String, usize>,
    question_index: HashMap<String, usize>,
    /// Function → positions in `categories`, in registry order
    categories_by_function: HashMap<RmfFunction, Vec<usize>>,
    /// Category id → positions in `questions`, in registry order
    questions_by_category: HashMap<String, Vec<usize>>,
    fingerprint: String,
}

impl TaxonomyRegistry {
    /// The full NIST AI RMF registry (4 functions, 19 categories, 62 questions).
    ///
    /// Fails if the authored catalog breaks any structural or integrity check.
    pub fn nist_ai_rmf() -> Result<Self> {
        let registry = Self::from_catalogs(&standard_catalogs())?;
        registry.check_integrity()?;
        Ok(registry)
    }

    /// Assemble a registry from function catalogs.
    pub fn from_catalogs(catalogs: &[Box<dyn FunctionCatalog>]) -> Result<Self> {
        let mut functions = Vec::with_capacity(catalogs.len());
        let mut categories = Vec::new();
        let mut questions = Vec::new();

        for catalog in catalogs {
            functions.push(catalog.function());
            for content in catalog.categories() {
                categories.push(content.category);
                questions.extend(content.questions);
            }
        }

        Self::from_parts(functions, categories, questions)
    }

    /// Build a registry from flat lists.
    ///
    /// Order of each list is preserved for display. Each question's function and
    /// category name are overwritten from its parent category. Empty categories
    /// and functions are accepted here and reported by [`check_integrity`].
    ///
    /// [`check_integrity`]: Self::check_integrity
    pub fn from_parts(
        functions: Vec<Function>,
        categories: Vec<Category>,
        mut questions: Vec<Question>,
    ) -> Result<Self> {
        let mut function_index = HashMap::new();
        for (pos, function) in functions.iter().enumerate() {
            if function_index.insert(function.id, pos).is_some() {
                return Err(TaxonomyError::DuplicateId {
                    kind: "function",
                    id: function.id.to_string(),
                });
            }
        }

        let mut category_index = HashMap::new();
        let mut categories_by_function: HashMap<RmfFunction, Vec<usize>> = HashMap::new();
        for (pos, category) in categories.iter().enumerate() {
            if !function_index.contains_key(&category.function) {
                return Err(TaxonomyError::DanglingParent {
                    kind: "category",
                    id: category.id.clone(),
                    parent: category.function.to_string(),
                });
            }
            if category_index.insert(category.id.clone(), pos).is_some() {
                return Err(TaxonomyError::DuplicateId {
                    kind: "category",
                    id: category.id.clone(),
                });
            }
            categories_by_function
                .entry(category.function)
                .or_default()
                .push(pos);
        }

        let mut question_index = HashMap::new();
        let mut questions_by_category: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, question) in questions.iter_mut().enumerate() {
            let parent = category_index.get(&question.category).ok_or_else(|| {
                TaxonomyError::DanglingParent {
                    kind: "question",
                    id: question.id.clone(),
                    parent: question.category.clone(),
                }
            })?;
            let category = &categories[*parent];
            question.function = category.function;
            question.category_name = category.name.clone();

            if question_index.insert(question.id.clone(), pos).is_some() {
                return Err(TaxonomyError::DuplicateId {
                    kind: "question",
                    id: question.id.clone(),
                });
            }
            questions_by_category
                .entry(question.category.clone())
                .or_default()
                .push(pos);
        }

        let fingerprint = compute_fingerprint(&functions, &categories, &questions);

        debug!(
            functions = functions.len(),
            categories = categories.len(),
            questions = questions.len(),
            fingerprint = %fingerprint,
            "Built taxonomy registry"
        );

        Ok(Self {
            functions,
            categories,
            questions,
            function_index,
            category_index,
            question_index,
            categories_by_function,
            questions_by_category,
            fingerprint,
        })
    }

    /// Report the first structural hole that would make aggregation undefined.
    pub fn check_integrity(&self) -> Result<()> {
        for function in &self.functions {
            if self
                .categories_by_function
                .get(&function.id)
                .map_or(true, Vec::is_empty)
            {
                return Err(TaxonomyError::EmptyFunction(function.id.to_string()));
            }
        }
        for category in &self.categories {
            if self
                .questions_by_category
                .get(&category.id)
                .map_or(true, Vec::is_empty)
            {
                return Err(TaxonomyError::EmptyCategory(category.id.clone()));
            }
        }
        Ok(())
    }

    /// All functions in registry order.
    pub fn all_functions(&self) -> &[Function] {
        &self.functions
    }

    /// All categories in registry order.
    pub fn all_categories(&self) -> &[Category] {
        &self.categories
    }

    /// All questions in registry order.
    pub fn all_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn function(&self, id: RmfFunction) -> Result<&Function> {
        self.function_index
            .get(&id)
            .map(|&pos| &self.functions[pos])
            .ok_or_else(|| TaxonomyError::not_found("function", id.as_str()))
    }

    pub fn category(&self, id: &str) -> Result<&Category> {
        self.category_index
            .get(id)
            .map(|&pos| &self.categories[pos])
            .ok_or_else(|| TaxonomyError::not_found("category", id))
    }

    pub fn question(&self, id: &str) -> Result<&Question> {
        self.question_index
            .get(id)
            .map(|&pos| &self.questions[pos])
            .ok_or_else(|| TaxonomyError::not_found("question", id))
    }

    pub fn contains_question(&self, id: &str) -> bool {
        self.question_index.contains_key(id)
    }

    /// Categories of a function in registry order.
    pub fn categories_of(&self, function: RmfFunction) -> Result<Vec<&Category>> {
        self.function(function)?;
        Ok(self
            .categories_by_function
            .get(&function)
            .map(|positions| positions.iter().map(|&p| &self.categories[p]).collect())
            .unwrap_or_default())
    }

    /// Questions of a category in registry order.
    pub fn questions_of(&self, category_id: &str) -> Result<Vec<&Question>> {
        self.category(category_id)?;
        Ok(self
            .questions_by_category
            .get(category_id)
            .map(|positions| positions.iter().map(|&p| &self.questions[p]).collect())
            .unwrap_or_default())
    }

    pub fn total_question_count(&self) -> usize {
        self.questions.len()
    }

    /// SHA-256 over the registry structure and question wording.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn compute_fingerprint(
    functions: &[Function],
    categories: &[Category],
    questions: &[Question],
) -> String {
    let mut hasher = Sha256::new();

    for function in functions {
        hasher.update(b"F\0");
        hasher.update(function.id.as_str().as_bytes());
        hasher.update(b"\n");
    }
    for category in categories {
        hasher.update(b"C\0");
        hasher.update(category.id.as_bytes());
        hasher.update(b"\0");
        hasher.update(category.function.as_str().as_bytes());
        hasher.update(b"\n");
    }
    for question in questions {
        hasher.update(b"Q\0");
        hasher.update(question.id.as_bytes());
        hasher.update(b"\0");
        hasher.update(question.category.as_bytes());
        hasher.update(b"\0");
        hasher.update(question.question.as_bytes());
        hasher.update(b"\n");
    }

    hex::encode(hasher.finalize())
}
