use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::TestSetup;

impl TestSetup {
    /// Create a mock `POST /contact` endpoint that only matches `message` as
    /// the JSON body and acknowledges with `{"ok": ok}`.
    pub fn with_contact_endpoint(
        &mut self,
        message: &Value,
        ok: bool,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("POST", "/contact")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(message.clone()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "ok": ok }).to_string())
            .expect(expected_requests)
            .create()
    }
}
