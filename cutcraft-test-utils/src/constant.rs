//! Placeholder values shared by tests that exercise the auth and contact flows.

/// Email submitted by test logins and contact messages.
pub static TEST_EMAIL: &str = "ana@example.com";

/// Password submitted by test logins. Not a real credential.
pub static TEST_PASSWORD: &str = "correct-horse-battery";

/// Token issued by mocked auth endpoints.
pub static TEST_TOKEN: &str = "abc";
