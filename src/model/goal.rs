use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i64,
    pub goal_name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_saved: f64,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

/// Body of `POST /api/goals` and `PUT /api/goals/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRequest {
    pub goal_name: String,
    pub target_amount: f64,
    pub current_saved: f64,
    pub deadline: Option<NaiveDate>,
}

impl From<&Goal> for GoalRequest {
    fn from(goal: &Goal) -> Self {
        Self {
            goal_name: goal.goal_name.clone(),
            target_amount: goal.target_amount,
            current_saved: goal.current_saved,
            deadline: goal.deadline,
        }
    }
}
