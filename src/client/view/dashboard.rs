use std::str::FromStr;

use chrono::Month;
use dioxus_logger::tracing;

use crate::client::error::Error;
use crate::model::{
    analytics::{CategorySpending, MonthlyAnalytics},
    transaction::Category,
};

/// Shown when the advice service is unavailable or has nothing to say
pub const FALLBACK_ADVICE: [&str; 3] = [
    "💡 Tip: Start by setting a budget for 'Food' to save up to 15% this month.",
    "📉 Insight: Track your daily coffee expenses; small adjustments lead to big savings.",
    "🎯 Goal: Try to save at least 20% of your income for an emergency fund.",
];

/// Both analytics payloads, fetched together
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Analytics {
    pub categories: CategorySpending,
    pub monthly: MonthlyAnalytics,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategorySlice {
    pub category: Category,
    pub amount: f64,
    /// Percentage of total spending
    pub share: f64,
}

pub fn category_slices(spending: &CategorySpending) -> Vec<CategorySlice> {
    let total: f64 = spending.values().copied().filter(|v| *v > 0.0).sum();

    let mut slices: Vec<_> = spending
        .iter()
        .filter(|(_, amount)| **amount > 0.0)
        .map(|(category, amount)| CategorySlice {
            category: *category,
            amount: *amount,
            share: amount / total * 100.0,
        })
        .collect();

    slices.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    slices
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthBar {
    pub month: String,
    pub income: f64,
    pub expense: f64,
    /// Bar heights relative to the largest value in the series
    pub income_height: f64,
    pub expense_height: f64,
}

/// Per-month bars in calendar order, January first.
///
/// Keys that are not month names sort after the named months, in key order.
pub fn monthly_bars(monthly: &MonthlyAnalytics) -> Vec<MonthBar> {
    let peak = monthly
        .values()
        .flat_map(|totals| [totals.income, totals.expense])
        .fold(0.0_f64, f64::max);

    let height = |value: f64| {
        if peak > 0.0 {
            value / peak * 100.0
        } else {
            0.0
        }
    };

    let mut months: Vec<_> = monthly.iter().collect();
    months.sort_by_key(|(month, _)| calendar_position(month));

    months
        .into_iter()
        .map(|(month, totals)| MonthBar {
            month: month.clone(),
            income: totals.income,
            expense: totals.expense,
            income_height: height(totals.income),
            expense_height: height(totals.expense),
        })
        .collect()
}

fn calendar_position(month: &str) -> u32 {
    Month::from_str(month)
        .map(|month| month.number_from_month())
        .unwrap_or(u32::MAX)
}

/// The advice to show for an advice fetch result
pub fn advice_or_fallback(result: Result<Vec<String>, Error>) -> Vec<String> {
    match result {
        Ok(advice) if !advice.is_empty() => advice,
        Ok(_) => {
            tracing::warn!("Advice service returned nothing, using fallback tips");
            fallback_advice()
        }
        Err(e) => {
            tracing::warn!("Advice service failed, using fallback tips: {}", e);
            fallback_advice()
        }
    }
}

fn fallback_advice() -> Vec<String> {
    FALLBACK_ADVICE.iter().map(|tip| tip.to_string()).collect()
}
