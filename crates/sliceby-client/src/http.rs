//! HTTP backend abstraction for the slicing service.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and sends each request exactly once.

use crate::settings::ClientSettings;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sliceby_core::{SliceByError, SliceByResult};
use url::Url;

/// Maximum number of response body bytes kept in a `Status` error.
const MAX_ERROR_BODY_BYTES: usize = 512;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can POST JSON and decode a JSON reply.
///
/// Exported so callers can name `SliceByClient`'s type parameter. Clients
/// are only built over this crate's own backends, so calls go through the
/// `SliceByPort` trait rather than through this one.
///
/// ```
/// use sliceby_client::{DefaultSliceByClient, ReqwestBackend, SliceByClient};
///
/// fn endpoint_root(client: &SliceByClient<ReqwestBackend>) -> &str {
///     client.base_url()
/// }
///
/// let client = DefaultSliceByClient::default_client().unwrap();
/// assert_eq!(endpoint_root(&client), "http://localhost:5000/");
/// ```
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST `body` as JSON to `url` and deserialize the response.
    async fn post_json<B, T>(&self, url: &Url, body: &B) -> SliceByResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Transport failures, non-success statuses and undecodable bodies are each
/// reported as their own `SliceByError` variant. Nothing is retried.
pub struct ReqwestBackend {
    client: reqwest::Client,
    auth_token: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given settings.
    pub(crate) fn new(settings: &ClientSettings) -> SliceByResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| SliceByError::Configuration {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            auth_token: settings.token.clone(),
        })
    }

    /// Build a POST request with optional authentication.
    fn build_request(&self, url: &Url) -> reqwest::RequestBuilder {
        let mut request = self.client.post(url.as_str());
        if let Some(ref token) = self.auth_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }
        request
    }
}

fn network_error(err: &reqwest::Error) -> SliceByError {
    SliceByError::Network {
        message: err.to_string(),
    }
}

/// Cut a response body down for inclusion in an error message.
fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_BYTES {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_BYTES;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json<B, T>(&self, url: &Url, body: &B) -> SliceByResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        tracing::debug!(%url, "POST");

        let response = self
            .build_request(url)
            .json(body)
            .send()
            .await
            .map_err(|e| network_error(&e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| network_error(&e))?;

        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "slice-by request failed");
            return Err(SliceByError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                body: truncate_body(&text),
            });
        }

        let data: T = serde_json::from_str(&text)?;
        tracing::debug!(%url, bytes = text.len(), "slice-by response decoded");
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
