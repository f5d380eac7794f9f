//! Declarative test builder.
//!
//! Endpoints are queued on the builder and only registered with the mock server during the
//! final `build()` call, so a test reads as a description of the backend it expects.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestContext};

type MockSetup = Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>;

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Custom endpoints, registered first
    mock_builders: Vec<MockSetup>,

    signin_endpoints: Vec<Vec<String>>, // roles granted on sign in
    signin_rejections: Vec<(usize, String)>, // (status, message)
    signup_endpoints: Vec<(usize, String, usize)>, // (status, message, expected_requests)
    api_endpoints: Vec<(&'static str, String, usize, Value, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints configured.
    ///
    /// # Returns
    /// - `Self` - An empty builder; `build()` on it starts a bare mock server
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            signin_endpoints: Vec::new(),
            signin_rejections: Vec::new(),
            signup_endpoints: Vec::new(),
            api_endpoints: Vec::new(),
        }
    }

    /// Add a sign-in endpoint that accepts any credentials and grants `roles`.
    ///
    /// # Arguments
    /// - `roles` - Backend role names, e.g. `ROLE_USER`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_signin_endpoint(mut self, roles: &[&str]) -> Self {
        self.signin_endpoints
            .push(roles.iter().map(|role| role.to_string()).collect());
        self
    }

    /// Add a sign-in endpoint that rejects every attempt with `status` and `message`.
    ///
    /// # Arguments
    /// - `status` - HTTP status to respond with, e.g. 401
    /// - `message` - Message placed in the `{ message }` response body
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_signin_rejection(mut self, status: usize, message: impl Into<String>) -> Self {
        self.signin_rejections.push((status, message.into()));
        self
    }

    /// Add a sign-up endpoint answering `status` with a `{ message }` body.
    ///
    /// # Arguments
    /// - `status` - HTTP status to respond with
    /// - `message` - Message placed in the response body
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_signup_endpoint(
        mut self,
        status: usize,
        message: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.signup_endpoints
            .push((status, message.into(), expected_requests));
        self
    }

    /// Add an endpoint that only answers requests carrying the test bearer token.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match
    /// - `path` - Request path, including any query string
    /// - `status` - HTTP status to respond with
    /// - `body` - JSON response body
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_api_endpoint(
        mut self,
        method: &'static str,
        path: impl Into<String>,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.api_endpoints
            .push((method, path.into(), status, body, expected_requests));
        self
    }

    /// Add a fully custom mock endpoint.
    ///
    /// # Arguments
    /// - `setup` - Closure that registers the mock on the server and returns it
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock server and register every queued endpoint.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the server and its mocks
    /// - `Err(TestError::Json)` - A fixture body could not be serialized
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await;
        let mut mocks = Vec::new();

        // Custom endpoints first so tests can layer sequential responses on one path
        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for roles in self.signin_endpoints {
            let roles: Vec<&str> = roles.iter().map(String::as_str).collect();
            mocks.push(setup.auth().create_signin_endpoint(&roles)?);
        }

        for (status, message) in self.signin_rejections {
            mocks.push(setup.auth().create_signin_rejection(status, &message)?);
        }

        for (status, message, expected) in self.signup_endpoints {
            mocks.push(
                setup
                    .auth()
                    .create_signup_endpoint(status, &message, expected)?,
            );
        }

        for (method, path, status, body, expected) in self.api_endpoints {
            mocks.push(
                setup
                    .api()
                    .create_endpoint(method, &path, status, &body, expected)?,
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks.extend(mocks);

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
