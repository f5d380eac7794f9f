pub mod analytics;
pub mod api;
pub mod auth;
pub mod budget;
pub mod forum;
pub mod goal;
pub mod profile;
pub mod transaction;
