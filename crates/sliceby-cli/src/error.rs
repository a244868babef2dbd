//! CLI-specific error types and mappings.
//!
//! Maps slice-by errors to exit codes and user-facing messages.

use sliceby_core::SliceByError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The slicing service rejected the request.
    #[error("{0}")]
    Service(String),

    /// Argument error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The slicing service could not be reached.
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// The service answered with something unreadable.
    #[error("Bad response: {0}")]
    Response(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions (see sysexits.h).
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Service(_) => 1,
            CliError::Arguments(_) => 2,    // EX_USAGE
            CliError::Response(_) => 65,    // EX_DATAERR
            CliError::Unavailable(_) => 69, // EX_UNAVAILABLE
            CliError::Config(_) => 78,      // EX_CONFIG
        }
    }
}

impl From<SliceByError> for CliError {
    fn from(err: SliceByError) -> Self {
        let message = err.to_string();
        match err {
            SliceByError::Network { .. } => CliError::Unavailable(message),
            SliceByError::Status { .. } => CliError::Service(message),
            SliceByError::Decode { .. } => CliError::Response(message),
            SliceByError::InvalidRequest { .. } => CliError::Arguments(message),
            SliceByError::Configuration { .. } => CliError::Config(message),
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<SliceByError>() {
            Ok(slice_err) => slice_err.into(),
            Err(other) => CliError::Service(format!("{other:#}")),
        }
    }
}
