//! Mock backend endpoints and JSON payload factories.

pub mod auth;
pub mod contact;
pub mod pricing;
pub mod testimonial;

use mockito::Mock;
use serde_json::Value;

use crate::TestSetup;

impl TestSetup {
    /// Create a mock endpoint answering `method path` with `status` and a JSON body.
    ///
    /// # Arguments
    /// - `method` - HTTP method to match
    /// - `path` - Request path to match
    /// - `status` - Status code to respond with
    /// - `body` - JSON body to respond with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_json_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering with a body that is not JSON.
    pub fn with_garbled_endpoint(&mut self, method: &str, path: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html>Bad gateway</html>")
            .expect(1)
            .create()
    }
}
