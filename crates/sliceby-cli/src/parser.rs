//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use sliceby_client::DEFAULT_BASE_URL;

use crate::commands::Commands;

/// Command-line interface for inspecting slice-by results.
///
/// Global options configure the connection to the slicing service and
/// apply to every subcommand.
#[derive(Parser)]
#[command(name = "sliceby")]
#[command(about = "Inspect slice-by results served by a slicing service")]
#[command(version)]
pub struct Cli {
    /// Base URL of the slicing service
    #[arg(long = "api-url", env = "SLICEBY_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: String,

    /// Bearer token sent with every request
    #[arg(long, env = "SLICEBY_API_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
