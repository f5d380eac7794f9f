pub mod admin_setup;
pub mod auth;
pub mod login;
pub mod not_found;
pub mod register;

pub use admin_setup::AdminSetup;
pub use login::Login;
pub use not_found::NotFound;
pub use register::{AccountForm, Register};
