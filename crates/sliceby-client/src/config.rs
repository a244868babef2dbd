//! Where the slicing service lives and how to talk to it.
//!
//! Values are stored as given. The base URL is parsed only when a client is
//! built, which is where a malformed address surfaces as a
//! `Configuration` error.

use std::time::Duration;

/// Default address of a locally running slicing service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Connection settings for a slicing service.
///
/// A base URL may carry a path prefix; slice-by routes are appended below it.
///
/// ```
/// use sliceby_client::{DefaultSliceByClient, SliceByClientConfig};
/// use std::time::Duration;
///
/// let config = SliceByClientConfig::new()
///     .with_base_url("http://10.0.0.5:5000/meerkat")
///     .with_timeout(Duration::from_secs(60));
/// let client = DefaultSliceByClient::new(&config).unwrap();
/// assert_eq!(client.base_url(), "http://10.0.0.5:5000/meerkat");
///
/// let broken = SliceByClientConfig::new().with_base_url("localhost:5000");
/// assert!(DefaultSliceByClient::new(&broken).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SliceByClientConfig {
    /// Base URL of the slicing service
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Optional bearer token
    pub(crate) token: Option<String>,
}

impl Default for SliceByClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("sliceby-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            token: None,
        }
    }
}

impl SliceByClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another slicing service. Defaults to [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the `User-Agent` header (`sliceby-client/<version>` by default).
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Upper bound on one request, connect through body. Defaults to 30 seconds.
    ///
    /// A request that runs past it fails with `SliceByError::Network`.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send `Authorization: Bearer <token>` with every slice-by request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Like [`Self::with_token`], clearing the token on `None`.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Base URL as given, before validation.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ClientSettings;

    #[test]
    fn test_defaults_target_local_service() {
        let config = SliceByClientConfig::new();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(config.user_agent.starts_with("sliceby-client/"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_base_url_kept_verbatim_until_validated() {
        let config = SliceByClientConfig::new().with_base_url("not a url");
        assert_eq!(config.base_url(), "not a url");
        assert!(ClientSettings::from_config(&config).is_err());
    }

    #[test]
    fn test_path_prefix_survives_validation() {
        let config = SliceByClientConfig::new()
            .with_base_url("https://slices.internal/api/")
            .with_timeout(Duration::from_secs(5))
            .with_token("secret");

        let settings = ClientSettings::from_config(&config).unwrap();
        assert_eq!(settings.base_url.path(), "/api/");
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_optional_token_clears_earlier_token() {
        let config = SliceByClientConfig::new()
            .with_token("stale")
            .with_optional_token(None);
        assert!(config.token.is_none());

        let config = SliceByClientConfig::new().with_optional_token(Some("fresh".to_string()));
        assert_eq!(config.token.as_deref(), Some("fresh"));
    }
}
