//! Test context returned by `TestBuilder`.
//!
//! The context owns a mock BudgetWise backend. Tests point a client at [`TestContext::url`],
//! exercise it, then call [`TestContext::assert_mocks`] to verify every endpoint was hit the
//! expected number of times.

use mockito::{Mock, Server, ServerGuard};

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_signin_endpoint(&["ROLE_USER"])
///     .build()
///     .await?;
///
/// let api = ApiClient::new(ReqwestTransport::default(), test.url());
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Mock HTTP server standing in for the backend
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock backend, without a trailing slash
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Registers another endpoint after `build()`, kept alive for the rest of the test.
    ///
    /// Later mocks take precedence over earlier ones for the same method and path, which lets
    /// a test change what the backend answers between two calls.
    pub fn add_endpoint<F>(&mut self, setup: F)
    where
        F: FnOnce(&mut ServerGuard) -> Mock,
    {
        let mock = setup(&mut self.server);
        self.mocks.push(mock);
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
