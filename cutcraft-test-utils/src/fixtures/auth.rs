use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::TestSetup;

impl TestSetup {
    /// Create a mock auth endpoint (`/auth/login` or `/auth/register`) that
    /// matches the form-encoded credentials and answers 200 with `body`.
    ///
    /// # Arguments
    /// - `path` - Auth endpoint path
    /// - `email` - Expected `username` form field
    /// - `password` - Expected `password` form field
    /// - `body` - JSON body to respond with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_auth_endpoint(
        &mut self,
        path: &str,
        email: &str,
        password: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("POST", path)
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("username".into(), email.into()),
                Matcher::UrlEncoded("password".into(), password.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock auth endpoint issuing `token` as a bearer access token.
    pub fn with_token_endpoint(
        &mut self,
        path: &str,
        email: &str,
        password: &str,
        token: &str,
    ) -> Mock {
        self.with_auth_endpoint(
            path,
            email,
            password,
            json!({ "access_token": token, "token_type": "bearer" }),
            1,
        )
    }

    /// Create a mock auth endpoint refusing any credentials with `status` and
    /// a `{"detail": ...}` body.
    pub fn with_auth_rejection(&mut self, path: &str, status: usize, detail: &str) -> Mock {
        self.with_json_endpoint("POST", path, status, &json!({ "detail": detail }), 1)
    }
}
