use crate::client::error::ConfigError;

/// Environment variable selecting the backend base URL.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Client configuration.
///
/// An empty `backend_url` means requests go to the same origin that served the
/// page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub backend_url: String,
}

impl Config {
    /// Reads `BACKEND_URL` from the process environment, falling back to the
    /// value baked in at compile time, then to same-origin.
    ///
    /// Browsers have no process environment, so web bundles rely on the
    /// compile-time value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(BACKEND_URL_VAR)
            .ok()
            .or_else(|| option_env!("BACKEND_URL").map(str::to_string))
            .unwrap_or_default();

        Self::from_backend_url(&raw)
    }

    /// Validates and normalizes a backend base URL.
    ///
    /// Same-origin and root-relative values only mean something when the app is
    /// served from a page, so native builds require an absolute URL.
    ///
    /// # Returns
    /// - `Ok(Config)` - An `http://` or `https://` URL, or in the browser also
    ///   empty input (same origin) or a root-relative path, with trailing
    ///   slashes removed
    /// - `Err(ConfigError::InvalidEnvValue)` - Anything else
    pub fn from_backend_url(raw: &str) -> Result<Self, ConfigError> {
        Self::parse(raw, SERVED_FROM_PAGE)
    }

    fn parse(raw: &str, allow_relative: bool) -> Result<Self, ConfigError> {
        let url = raw.trim();
        let absolute = url.starts_with("http://") || url.starts_with("https://");

        if absolute {
            return Ok(Self {
                backend_url: url.trim_end_matches('/').to_string(),
            });
        }

        if !allow_relative {
            return Err(invalid_backend_url(format!(
                "expected an absolute http(s) URL outside the browser, got {:?}",
                url
            )));
        }

        if url.is_empty() {
            return Ok(Self::default());
        }

        if !url.starts_with('/') {
            return Err(invalid_backend_url(format!(
                "expected an http(s) URL or a path starting with '/', got {:?}",
                url
            )));
        }

        Ok(Self {
            backend_url: url.trim_end_matches('/').to_string(),
        })
    }

    /// Base that request paths are appended to.
    ///
    /// The HTTP client needs absolute URLs, so same-origin and root-relative
    /// settings are resolved against the page origin in the browser.
    pub fn api_base(&self) -> String {
        if self.backend_url.starts_with("http") {
            return self.backend_url.clone();
        }

        format!("{}{}", page_origin(), self.backend_url)
    }
}

const SERVED_FROM_PAGE: bool = cfg!(all(feature = "web", target_arch = "wasm32"));

fn invalid_backend_url(reason: String) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: BACKEND_URL_VAR.to_string(),
        reason,
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
fn page_origin() -> String {
    String::new()
}
