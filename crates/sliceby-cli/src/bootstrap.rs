//! CLI bootstrap - the composition root.
//!
//! This is the only place the concrete HTTP client is constructed.
//! Command handlers receive a `CliContext` and talk to the `SliceByPort`.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sliceby_client::{DefaultSliceByClient, SliceByClientConfig};
use sliceby_core::SliceByPort;

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL of the slicing service.
    pub api_url: String,
    /// Optional bearer token.
    pub token: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl CliConfig {
    /// Build the config from parsed global arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api_url: cli.api_url.clone(),
            token: cli.token.clone().filter(|t| !t.is_empty()),
            timeout: Duration::from_secs(cli.timeout),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    port: Arc<dyn SliceByPort>,
}

impl CliContext {
    /// Wrap an already-built port.
    pub fn with_port(port: Arc<dyn SliceByPort>) -> Self {
        Self { port }
    }

    /// Access the slice-by port.
    pub fn slicebys(&self) -> &dyn SliceByPort {
        self.port.as_ref()
    }
}

/// Bootstrap the CLI application.
///
/// Builds the HTTP client from `config`; fails if the base URL is invalid.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let client_config = SliceByClientConfig::new()
        .with_base_url(config.api_url.clone())
        .with_optional_token(config.token.clone())
        .with_timeout(config.timeout)
        .with_user_agent(concat!("sliceby-cli/", env!("CARGO_PKG_VERSION")));

    let client = DefaultSliceByClient::new(&client_config)?;
    tracing::debug!(api_url = %config.api_url, "CLI context ready");

    Ok(CliContext::with_port(Arc::new(client)))
}
