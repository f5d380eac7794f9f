//! Framework-free projections behind each view, so the numbers the pages render can be
//! tested without a renderer.

pub mod admin;
pub mod budget;
pub mod dashboard;
pub mod forum;
pub mod goal;
pub mod mutation;
pub mod profile;
pub mod resource;
pub mod transaction;

pub use mutation::{write_then_reload, ResourceSlot};
pub use resource::{LoadPhase, RequestTicket, Settlement, ViewResource};

/// Renders an amount in rupees with two decimals
pub fn rupees(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

/// Parses a user-entered amount, rejecting anything that is not a finite positive number
pub fn parse_positive_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}
