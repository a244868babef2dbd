//! Error types for slice-by port operations.

use thiserror::Error;

/// Errors from slice-by port operations.
///
/// Adapters classify their failures into these variants once, at the point
/// the request is made. Nothing above the adapter re-wraps them.
#[derive(Debug, Error)]
pub enum SliceByError {
    /// The request never produced an HTTP response (connect, timeout, TLS).
    #[error("Network error: {message}")]
    Network {
        /// Description of the transport failure
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("Request to {url} failed with status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Response body, possibly truncated
        body: String,
    },

    /// The response body was not valid JSON or did not match the expected shape.
    #[error("Invalid response body: {message}")]
    Decode {
        /// What failed to decode
        message: String,
    },

    /// The caller supplied arguments that cannot form a valid request.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What's wrong with the request
        message: String,
    },

    /// Client configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl SliceByError {
    /// HTTP status code, for `Status` errors.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server reported the resource as missing.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// Shorthand for an `InvalidRequest` error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SliceByError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}

/// Result type alias for slice-by port operations.
pub type SliceByResult<T> = Result<T, SliceByError>;
