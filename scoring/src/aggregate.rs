//! Aggregation engine: answers → category → function → overall scores.
//!
//! Categories are the unit of aggregation. A category averages the effective
//! scores of its own questions; a function averages its categories' averages;
//! the overall score averages the function averages. Every level is carried
//! as an exact fraction, and `score_pct` and maturity are derived from it
//! before it is ever rounded to `f64`.

use rmf_taxonomy::{RmfFunction, TaxonomyRegistry};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::answers::AnswerSet;
use crate::error::{InvalidAnswer, Result, ScoringError};
use crate::maturity::MaturityLevel;

/// An average on the 1–5 scale with its derived percentage and label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Score {
    /// Unrounded 1–5 average
    pub avg_score: f64,
    /// `(avg - 1) / 4` mapped onto 0–100 and rounded
    pub score_pct: u8,
    pub maturity: MaturityLevel,
}

impl Score {
    /// Score for the exact average `num / den`.
    pub fn from_fraction(num: u128, den: u128) -> Self {
        let den = den.max(1);
        // round(25 * (num - den) / den), halves away from zero
        let excess = num.saturating_sub(den);
        let pct = ((50 * excess + den) / (2 * den)).min(100);
        Self {
            avg_score: num as f64 / den as f64,
            score_pct: pct as u8,
            maturity: MaturityLevel::from_fraction(num, den),
        }
    }

    /// Score for an average already in floating point.
    pub fn from_average(avg_score: f64) -> Self {
        let pct = ((avg_score - 1.0) / 4.0 * 100.0).round().clamp(0.0, 100.0);
        Self {
            avg_score,
            score_pct: pct as u8,
            maturity: MaturityLevel::from_score(avg_score),
        }
    }
}

/// Aggregate for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct CategoryScore {
    pub category_id: String,
    pub name: String,
    pub function: RmfFunction,
    #[serde(flatten)]
    pub score: Score,
    pub question_count: usize,
}

/// Aggregate for one function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct FunctionScore {
    pub function: RmfFunction,
    pub code: String,
    pub name: String,
    pub color: String,
    #[serde(flatten)]
    pub score: Score,
    pub category_count: usize,
}

/// Complete aggregation result, in registry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct ScoreCard {
    pub overall: Score,
    pub functions: Vec<FunctionScore>,
    pub categories: Vec<CategoryScore>,
}

impl ScoreCard {
    pub fn function(&self, function: RmfFunction) -> Option<&FunctionScore> {
        self.functions.iter().find(|f| f.function == function)
    }

    pub fn category(&self, category_id: &str) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.category_id == category_id)
    }
}

/// A reduced non-negative fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fraction {
    num: u128,
    den: u128,
}

impl Fraction {
    fn new(num: u128, den: u128) -> Self {
        let g = gcd(num, den).max(1);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    fn checked_add(self, other: Self) -> Option<Self> {
        let num = self
            .num
            .checked_mul(other.den)?
            .checked_add(other.num.checked_mul(self.den)?)?;
        Some(Self::new(num, self.den.checked_mul(other.den)?))
    }

    /// Exact mean of `values`; `what` names the aggregate in errors.
    fn mean(values: impl IntoIterator<Item = Fraction>, what: impl Fn() -> String) -> Result<Self> {
        let mut total = Fraction::new(0, 1);
        let mut count: u128 = 0;
        for value in values {
            total = total
                .checked_add(value)
                .ok_or_else(|| ScoringError::InternalAggregation(format!("overflow in {}", what())))?;
            count += 1;
        }
        if count == 0 {
            return Err(ScoringError::InternalAggregation(format!("{} is empty", what())));
        }
        let den = total
            .den
            .checked_mul(count)
            .ok_or_else(|| ScoringError::InternalAggregation(format!("overflow in {}", what())))?;
        Ok(Self::new(total.num, den))
    }

    fn score(&self) -> Score {
        Score::from_fraction(self.num, self.den)
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Folds an answer set through the registry.
///
/// Stateless; the registry is only read.
pub struct AggregationEngine<'r> {
    registry: &'r TaxonomyRegistry,
}

impl<'r> AggregationEngine<'r> {
    pub fn new(registry: &'r TaxonomyRegistry) -> Self {
        Self { registry }
    }

    /// Compute every aggregate for `answers`.
    ///
    /// Fails with `InvalidAnswer` if `answers` names a question this registry
    /// lacks, and with `InternalAggregation` if a category or function is empty.
    pub fn aggregate(&self, answers: &AnswerSet) -> Result<ScoreCard> {
        if let Some((unknown, _)) = answers
            .iter()
            .find(|(id, _)| !self.registry.contains_question(id))
        {
            return Err(InvalidAnswer::UnknownQuestion(unknown.to_string()).into());
        }

        let mut categories = Vec::with_capacity(self.registry.all_categories().len());
        let mut functions = Vec::with_capacity(self.registry.all_functions().len());
        let mut function_means = Vec::with_capacity(functions.capacity());

        for function in self.registry.all_functions() {
            let function_categories = self.registry.categories_of(function.id).map_err(internal)?;
            let mut category_means = Vec::with_capacity(function_categories.len());

            for category in function_categories {
                let questions = self.registry.questions_of(&category.id).map_err(internal)?;
                let mean = Fraction::mean(
                    questions
                        .iter()
                        .map(|q| Fraction::new(u128::from(answers.effective_score(&q.id)), 1)),
                    || format!("category {}", category.id),
                )?;
                let score = mean.score();

                trace!(category = %category.id, avg = score.avg_score, "Aggregated category");

                category_means.push(mean);
                categories.push(CategoryScore {
                    category_id: category.id.clone(),
                    name: category.name.clone(),
                    function: category.function,
                    score,
                    question_count: questions.len(),
                });
            }

            let mean = Fraction::mean(category_means.iter().copied(), || {
                format!("function {}", function.id)
            })?;
            function_means.push(mean);

            functions.push(FunctionScore {
                function: function.id,
                code: function.code.clone(),
                name: function.name.clone(),
                color: function.color.clone(),
                score: mean.score(),
                category_count: category_means.len(),
            });
        }

        let overall = Fraction::mean(function_means, || "registry".to_string())?.score();

        debug!(
            answered = answers.len(),
            overall_pct = overall.score_pct,
            maturity = %overall.maturity,
            "Aggregated answer set"
        );

        Ok(ScoreCard {
            overall,
            functions,
            categories,
        })
    }
}

fn internal(err: rmf_taxonomy::TaxonomyError) -> ScoringError {
    ScoringError::InternalAggregation(err.to_string())
}
