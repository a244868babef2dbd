//! Slice-by client for the slicing service.
//!
//! This module provides the main client type. Its operations are exposed
//! through the `SliceByPort` implementation in `port.rs`.

mod sliceby;

use crate::config::SliceByClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::settings::ClientSettings;
use sliceby_core::SliceByResult;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default slice-by client using the reqwest HTTP backend.
pub type DefaultSliceByClient = SliceByClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the slice-by endpoints of the slicing service.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultSliceByClient` for production code.
pub struct SliceByClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) settings: ClientSettings,
}

impl DefaultSliceByClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails with `SliceByError::Configuration` when the base URL is invalid.
    pub fn new(config: &SliceByClientConfig) -> SliceByResult<Self> {
        let settings = ClientSettings::from_config(config)?;
        let backend = ReqwestBackend::new(&settings)?;
        tracing::debug!(base_url = %settings.base_url, "slice-by client ready");
        Ok(Self { backend, settings })
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> SliceByResult<Self> {
        Self::new(&SliceByClientConfig::default())
    }
}

impl<B: HttpBackend> SliceByClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(settings: ClientSettings, backend: B) -> Self {
        Self { backend, settings }
    }

    /// Base URL all requests are sent under.
    pub fn base_url(&self) -> &str {
        self.settings.base_url.as_str()
    }
}
