use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::transaction::Category;

/// Body of `GET /api/analytics/category`: total expense per category
pub type CategorySpending = BTreeMap<Category, f64>;

/// Body of `GET /api/analytics/monthly`, keyed by upper-case month name (`JANUARY`)
pub type MonthlyAnalytics = BTreeMap<String, MonthTotals>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthTotals {
    #[serde(rename = "INCOME", default)]
    pub income: f64,
    #[serde(rename = "EXPENSE", default)]
    pub expense: f64,
}
