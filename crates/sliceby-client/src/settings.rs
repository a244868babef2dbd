//! Validated client settings (see config.rs for the public builder).

use std::time::Duration;

use sliceby_core::{SliceByError, SliceByResult};
use url::Url;

use crate::config::SliceByClientConfig;

/// Internal configuration for the slice-by client.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base URL of the slicing service
    pub base_url: Url,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
    /// Optional bearer token
    pub token: Option<String>,
}

impl ClientSettings {
    /// Validate a public config into internal settings.
    ///
    /// The base URL must parse and must be able to carry path segments.
    pub fn from_config(config: &SliceByClientConfig) -> SliceByResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| SliceByError::Configuration {
            message: format!("invalid base URL '{}': {e}", config.base_url),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(SliceByError::Configuration {
                message: format!("base URL '{}' cannot carry a path", config.base_url),
            });
        }

        Ok(Self {
            base_url,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            token: config.token.clone(),
        })
    }
}

#[cfg(test)]
impl Default for ClientSettings {
    fn default() -> Self {
        Self::from_config(&SliceByClientConfig::default()).expect("default base URL is valid")
    }
}
