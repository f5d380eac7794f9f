use chrono::NaiveDate;

use crate::client::{error::Error, view::parse_positive_amount};
use crate::model::goal::{Goal, GoalRequest};

/// Share of the target already saved, capped at 100
pub fn progress(goal: &Goal) -> f64 {
    if goal.target_amount <= 0.0 {
        return if goal.current_saved > 0.0 { 100.0 } else { 0.0 };
    }

    (goal.current_saved / goal.target_amount * 100.0).min(100.0)
}

pub fn progress_label(goal: &Goal) -> String {
    format!("{:.1}%", progress(goal))
}

/// Builds the update that moves `amount` into `goal`. Only positive amounts are accepted.
pub fn add_funds(goal: &Goal, amount: &str) -> Result<GoalRequest, Error> {
    let amount = parse_positive_amount(amount)
        .ok_or_else(|| Error::Validation("Amount must be a positive number".to_string()))?;

    Ok(GoalRequest {
        current_saved: goal.current_saved + amount,
        ..GoalRequest::from(goal)
    })
}

/// Raw input of the "new goal" form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoalDraft {
    pub goal_name: String,
    pub target_amount: String,
    /// Amount already put aside; blank starts the goal at zero
    pub current_saved: String,
    pub deadline: String,
}

impl GoalDraft {
    pub fn to_request(&self) -> Result<GoalRequest, Error> {
        let goal_name = self.goal_name.trim();
        if goal_name.is_empty() {
            return Err(Error::Validation("Goal name is required".to_string()));
        }

        let target_amount = parse_positive_amount(&self.target_amount).ok_or_else(|| {
            Error::Validation("Target amount must be a positive number".to_string())
        })?;

        let current_saved = match self.current_saved.trim() {
            "" => 0.0,
            raw => raw
                .parse::<f64>()
                .ok()
                .filter(|saved| saved.is_finite() && *saved >= 0.0)
                .ok_or_else(|| {
                    Error::Validation("Current saved must be zero or more".to_string())
                })?,
        };

        let deadline = match self.deadline.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| Error::Validation("Deadline must be a date".to_string()))?,
            ),
        };

        Ok(GoalRequest {
            goal_name: goal_name.to_string(),
            target_amount,
            current_saved,
            deadline,
        })
    }
}
