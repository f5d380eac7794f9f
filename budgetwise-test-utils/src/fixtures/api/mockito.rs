//! Mock endpoints for the authorized resource API.
//!
//! Every endpoint created here only matches requests sending the test bearer token, so a
//! client that forgets the `Authorization` header gets mockito's 501 instead of data.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;

use crate::{constant::TEST_TOKEN, error::TestError, fixtures::api::ApiFixtures};

/// Starts a mock for `method` `path` that requires the test bearer token.
pub fn authorized(server: &mut ServerGuard, method: &str, path: &str) -> Mock {
    server
        .mock(method, path)
        .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
}

impl<'a> ApiFixtures<'a> {
    /// Create an authorized endpoint answering with a JSON body.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match
    /// - `path` - Request path
    /// - `status` - HTTP status to respond with
    /// - `body` - JSON response body
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Ok(Mock)` - The created endpoint
    /// - `Err(TestError::Json)` - Response body failed to serialize
    pub fn create_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: &Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(body)?;

        Ok(authorized(&mut self.setup.server, method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create())
    }

    /// Create an authorized endpoint that only matches when the request body contains
    /// `expected_body`.
    pub fn create_body_matching_endpoint(
        &mut self,
        method: &str,
        path: &str,
        expected_body: Value,
        status: usize,
        body: &Value,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(body)?;

        Ok(authorized(&mut self.setup.server, method, path)
            .match_body(Matcher::PartialJson(expected_body))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create())
    }

    /// Create an authorized endpoint answering with raw bytes, used for file exports.
    pub fn create_download_endpoint(
        &mut self,
        path: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Mock {
        authorized(&mut self.setup.server, "GET", path)
            .with_status(200)
            .with_header("content-type", content_type)
            .with_body(bytes)
            .expect(1)
            .create()
    }
}
