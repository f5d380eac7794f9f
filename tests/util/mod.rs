//! Glue between the mock backend and the client under test.

use budgetwise::client::api::{native::ReqwestTransport, ApiClient};
use budgetwise::model::auth::{Role, Session};
use budgetwise_test_utils::prelude::*;

/// Session for the test account, carrying the token every authorized mock expects
pub fn test_session() -> Session {
    Session::new(
        Some(TEST_USER_ID),
        TEST_USERNAME,
        TEST_EMAIL,
        [Role::User],
        TEST_TOKEN,
    )
    .expect("test session is complete")
}

/// Extension trait for TestContext to build clients pointed at the mock backend
pub trait TestContextExt {
    /// Client without a bearer token, as used before login
    fn public_api(&self) -> ApiClient<ReqwestTransport>;

    /// Client sending the test account's bearer token
    fn authorized_api(&self) -> ApiClient<ReqwestTransport>;
}

impl TestContextExt for TestContext {
    fn public_api(&self) -> ApiClient<ReqwestTransport> {
        ApiClient::new(ReqwestTransport::default(), self.url())
    }

    fn authorized_api(&self) -> ApiClient<ReqwestTransport> {
        self.public_api().authorized(&test_session())
    }
}
