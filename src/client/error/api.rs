use thiserror::Error;

/// Failure of a request against the CutCraft backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (connection refused, CORS, DNS).
    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("Request failed with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },
    /// The response body was not the JSON shape we expected.
    #[error("Failed to parse response body: {0}")]
    Decode(String),
    /// An auth endpoint answered successfully but issued no token.
    #[error("Authentication response did not contain an access token")]
    MissingToken,
    /// The contact endpoint acknowledged the message with `ok: false`.
    #[error("Backend rejected the contact message")]
    Rejected,
}

impl ApiError {
    /// Text shown to visitors for this failure.
    ///
    /// A backend `detail` is shown verbatim since it is written for users,
    /// everything else collapses to a neutral message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            Self::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Status { status, .. } => format!("The server returned an error ({}).", status),
            Self::Decode(_) => "The server sent an unexpected response.".to_string(),
            Self::MissingToken => "Sign in failed. Check your email and password.".to_string(),
            Self::Rejected => "Something went wrong. Try again.".to_string(),
        }
    }
}
