use serde::{Deserialize, Serialize};

/// Error body returned by the backend alongside a non-success status
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// Human readable reason for the failure
    pub detail: String,
}
