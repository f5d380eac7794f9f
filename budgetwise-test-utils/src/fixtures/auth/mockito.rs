//! Mock endpoints for `/api/auth`.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{error::TestError, fixtures::auth::AuthFixtures, fixtures::factory};

impl<'a> AuthFixtures<'a> {
    /// Create a sign-in endpoint answering with a JWT response granting `roles`.
    ///
    /// Only requests carrying a JSON body with `username` and `password` are matched.
    ///
    /// # Returns
    /// - `Ok(Mock)` - The created endpoint
    /// - `Err(TestError::Json)` - Response body failed to serialize
    pub fn create_signin_endpoint(&mut self, roles: &[&str]) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&factory::jwt_response(roles))?;

        Ok(self
            .setup
            .server
            .mock("POST", "/api/auth/signin")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Regex(r#""username".*"password""#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create())
    }

    /// Create a sign-in endpoint rejecting every attempt.
    pub fn create_signin_rejection(
        &mut self,
        status: usize,
        message: &str,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&json!({ "message": message }))?;

        Ok(self
            .setup
            .server
            .mock("POST", "/api/auth/signin")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create())
    }

    /// Create a sign-up endpoint answering `status` with a `{ message }` body.
    ///
    /// # Arguments
    /// - `status` - HTTP status to respond with
    /// - `message` - Message placed in the response body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_signup_endpoint(
        &mut self,
        status: usize,
        message: &str,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&json!({ "message": message }))?;

        Ok(self
            .setup
            .server
            .mock("POST", "/api/auth/signup")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }
}
