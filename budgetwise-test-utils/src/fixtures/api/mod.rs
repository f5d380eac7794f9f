pub mod mockito;

use crate::TestContext;

impl TestContext {
    pub fn api<'a>(&'a mut self) -> ApiFixtures<'a> {
        ApiFixtures { setup: self }
    }
}

pub struct ApiFixtures<'a> {
    setup: &'a mut TestContext,
}
