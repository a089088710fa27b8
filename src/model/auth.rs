use serde::{Deserialize, Serialize};

/// Which auth endpoint the modal submits to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Login => "/auth/login",
            Self::Register => "/auth/register",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

/// Email and password entered in the auth modal.
///
/// Sent form-urlencoded, with the email under the `username` key the backend's
/// password flow expects.
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    #[serde(rename = "username")]
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

impl TokenResponse {
    /// The token if the backend issued a usable one.
    pub fn into_token(self) -> Option<String> {
        self.access_token.filter(|token| !token.is_empty())
    }
}
