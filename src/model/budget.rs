use serde::{Deserialize, Serialize};

use crate::model::transaction::Category;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i64,
    pub category: Category,
    pub monthly_limit: f64,
}

/// Body of `POST /api/budgets`; setting a limit for an existing category replaces it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetRequest {
    pub category: Category,
    pub limit: f64,
}
