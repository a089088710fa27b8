//! HTTP client for the CutCraft backend.
//!
//! Every call returns `Result<_, ApiError>`; transport failures, non-success
//! statuses, unexpected bodies and application-level rejections are all
//! reported and logged here so the sections only have to decide what to show.

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::{
    client::{config::Config, error::ApiError},
    model::{
        api::ErrorDto,
        auth::{AuthMode, Credentials, TokenResponse},
        contact::{ContactMessage, ContactReply},
        pricing::PricingTier,
        testimonial::Testimonial,
    },
};

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_base(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Retrieve the pricing tiers in display order.
    pub async fn pricing(&self) -> Result<Vec<PricingTier>, ApiError> {
        self.get_json("/pricing").await
    }

    /// Retrieve client testimonials in display order.
    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, ApiError> {
        self.get_json("/testimonials").await
    }

    /// Send a contact message.
    ///
    /// # Returns
    /// - `Ok(())` - Backend acknowledged with `{"ok": true}`
    /// - `Err(ApiError::Rejected)` - Backend answered `{"ok": false}` or omitted `ok`
    /// - `Err(ApiError)` - Transport, status or decode failure
    pub async fn send_contact(&self, message: &ContactMessage) -> Result<(), ApiError> {
        tracing::debug!("Sending contact message");

        let response = self
            .http
            .post(self.url("/contact"))
            .json(message)
            .send()
            .await
            .map_err(log_request_error)?;

        let reply: ContactReply = read_json(response).await?;

        if reply.ok {
            Ok(())
        } else {
            tracing::warn!("Backend rejected contact message");
            Err(ApiError::Rejected)
        }
    }

    /// Log in or register, depending on `mode`, and return the issued token.
    ///
    /// # Returns
    /// - `Ok(String)` - Non-empty access token
    /// - `Err(ApiError::MissingToken)` - Successful response without a token
    /// - `Err(ApiError::Status)` - Backend refused the credentials
    /// - `Err(ApiError)` - Transport or decode failure
    pub async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<String, ApiError> {
        tracing::debug!(endpoint = mode.endpoint(), "Submitting credentials");

        let response = self
            .http
            .post(self.url(mode.endpoint()))
            .form(credentials)
            .send()
            .await
            .map_err(log_request_error)?;

        let body: TokenResponse = read_json(response).await?;

        match body.into_token() {
            Some(token) => Ok(token),
            None => {
                tracing::warn!(endpoint = mode.endpoint(), "{}", ApiError::MissingToken);
                Err(ApiError::MissingToken)
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "Fetching");

        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(log_request_error)?;

        read_json(response).await
    }
}

fn log_request_error(err: reqwest::Error) -> ApiError {
    tracing::error!("Failed to send request: {}", err);

    ApiError::Request(err)
}

/// Decode a JSON response, turning non-success statuses into `ApiError::Status`
/// with the backend's `detail` when it sent one.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(log_request_error)?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorDto>(&text)
            .ok()
            .map(|error_dto| error_dto.detail);

        let err = ApiError::Status {
            status: status.as_u16(),
            detail,
        };
        tracing::warn!("{}", err);

        return Err(err);
    }

    serde_json::from_str(&text).map_err(|e| {
        tracing::error!("Failed to parse response body: {}", e);

        ApiError::Decode(e.to_string())
    })
}
