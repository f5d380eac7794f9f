use serde::{Deserialize, Serialize};

/// Financial profile of the signed-in user; every field is optional until first saved
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub monthly_income: Option<f64>,
    #[serde(default)]
    pub current_savings: Option<f64>,
    #[serde(default)]
    pub target_expense: Option<f64>,
}
