//! Identity of the account every test signs in as.
//!
//! None of these are real credentials.

/// Bearer token issued by the mock sign-in endpoint and required by every authorized mock.
pub static TEST_TOKEN: &str = "test-jwt-token";

pub static TEST_USER_ID: i64 = 1;

pub static TEST_USERNAME: &str = "alice";

pub static TEST_EMAIL: &str = "alice@example.com";
