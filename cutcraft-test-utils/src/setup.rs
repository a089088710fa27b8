use mockito::{Mock, Server, ServerGuard};

/// Mock backend for a single test.
///
/// Point the client at [`TestSetup::url`] and register endpoints with the
/// `with_*_endpoint` helpers from [`fixtures`](crate::fixtures).
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Self {
        let server = Server::new_async().await;

        TestSetup {
            server,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock backend, without a trailing slash.
    pub fn url(&self) -> String {
        self.server.url()
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
