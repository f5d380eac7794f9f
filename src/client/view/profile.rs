use crate::client::error::Error;
use crate::model::profile::Profile;

/// How long the "saved" notice stays up
pub const SAVED_NOTICE_MS: u64 = 3_000;

/// Editable text of the profile form; empty fields mean "not set"
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub monthly_income: String,
    pub current_savings: String,
    pub target_expense: String,
}

impl ProfileForm {
    pub fn from_profile(profile: Option<&Profile>) -> Self {
        let text = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();

        match profile {
            Some(profile) => Self {
                monthly_income: text(profile.monthly_income),
                current_savings: text(profile.current_savings),
                target_expense: text(profile.target_expense),
            },
            None => Self::default(),
        }
    }

    pub fn to_profile(&self) -> Result<Profile, Error> {
        Ok(Profile {
            monthly_income: parse_field("Monthly income", &self.monthly_income)?,
            current_savings: parse_field("Current savings", &self.current_savings)?,
            target_expense: parse_field("Target expense", &self.target_expense)?,
        })
    }
}

fn parse_field(label: &str, raw: &str) -> Result<Option<f64>, Error> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(Error::Validation(format!(
            "{} must be zero or a positive number",
            label
        ))),
    }
}
