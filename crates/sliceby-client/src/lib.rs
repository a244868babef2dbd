#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod http;
mod port;
mod settings;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultSliceByClient, SliceByClient};

// Configuration
pub use config::{DEFAULT_BASE_URL, SliceByClientConfig};

// Backend seam, so callers can name the client's generic parameter
pub use http::{HttpBackend, ReqwestBackend};

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
