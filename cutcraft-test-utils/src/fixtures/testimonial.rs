use mockito::Mock;
use serde_json::{json, Value};

use crate::TestSetup;

/// Testimonial payload as the backend sends it.
pub fn mock_testimonial(name: &str, role: &str, quote: &str) -> Value {
    json!({
        "name": name,
        "role": role,
        "quote": quote,
    })
}

impl TestSetup {
    /// Create a mock `GET /testimonials` endpoint returning `testimonials` in order.
    pub fn with_testimonials_endpoint(
        &mut self,
        testimonials: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.with_json_endpoint(
            "GET",
            "/testimonials",
            200,
            &Value::Array(testimonials),
            expected_requests,
        )
    }
}
