use chrono::{Datelike, NaiveDate};

use crate::client::{error::Error, view::parse_positive_amount};
use crate::model::{
    budget::{Budget, BudgetRequest},
    transaction::{Category, Transaction},
};

/// Progress above which a budget bar turns to a warning colour
pub const WARNING_THRESHOLD: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetTone {
    OnTrack,
    Warning,
    Over,
}

impl BudgetTone {
    pub fn bar_class(&self) -> &'static str {
        match self {
            BudgetTone::OnTrack => "bg-blue-500",
            BudgetTone::Warning => "bg-orange-400",
            BudgetTone::Over => "bg-red-500",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BudgetProgress {
    pub budget: Budget,
    pub spent: f64,
    /// Percentage of the limit used, capped at 100
    pub progress: f64,
    pub remaining: f64,
    pub over_budget: bool,
}

impl BudgetProgress {
    /// Measures `budget` against the expenses of its category dated in the month of `today`
    pub fn measure(budget: &Budget, transactions: &[Transaction], today: NaiveDate) -> Self {
        let spent: f64 = transactions
            .iter()
            .filter(|t| t.is_expense() && t.category == budget.category)
            .filter(|t| t.date.year() == today.year() && t.date.month() == today.month())
            .map(|t| t.amount)
            .sum();

        let limit = budget.monthly_limit;
        let progress = if limit > 0.0 {
            (spent / limit * 100.0).min(100.0)
        } else if spent > 0.0 {
            100.0
        } else {
            0.0
        };

        Self {
            budget: budget.clone(),
            spent,
            progress,
            remaining: (limit - spent).max(0.0),
            over_budget: spent > limit,
        }
    }

    pub fn tone(&self) -> BudgetTone {
        if self.over_budget {
            BudgetTone::Over
        } else if self.progress > WARNING_THRESHOLD {
            BudgetTone::Warning
        } else {
            BudgetTone::OnTrack
        }
    }
}

pub fn measure_all(
    budgets: &[Budget],
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<BudgetProgress> {
    budgets
        .iter()
        .map(|budget| BudgetProgress::measure(budget, transactions, today))
        .collect()
}

/// Raw input of the "set budget" form
#[derive(Clone, Debug, PartialEq)]
pub struct BudgetDraft {
    pub category: Category,
    pub limit: String,
}

impl Default for BudgetDraft {
    fn default() -> Self {
        Self {
            category: Category::Food,
            limit: String::new(),
        }
    }
}

impl BudgetDraft {
    pub fn to_request(&self) -> Result<BudgetRequest, Error> {
        if !Category::BUDGETABLE.contains(&self.category) {
            return Err(Error::Validation(format!(
                "{} cannot have a budget",
                self.category.label()
            )));
        }

        let limit = parse_positive_amount(&self.limit)
            .ok_or_else(|| Error::Validation("Limit must be a positive amount".to_string()))?;

        Ok(BudgetRequest {
            category: self.category,
            limit,
        })
    }
}
