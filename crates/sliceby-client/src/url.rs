//! URL construction helpers for the slice-by endpoints.
//!
//! Pure functions, so every call builds its URL the same way.

use sliceby_core::{SliceByError, SliceByResult};
use url::Url;

/// Endpoints exposed under `/sliceby/{id}/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceByEndpoint {
    Info,
    Rows,
    Aggregate,
}

impl SliceByEndpoint {
    /// Path segment for this endpoint.
    pub const fn as_segment(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Rows => "rows",
            Self::Aggregate => "aggregate",
        }
    }
}

/// Build `{base}/sliceby/{id}/{endpoint}/`.
///
/// The id is pushed as a single path segment, so characters such as `/`
/// or `?` are percent-encoded instead of changing the route.
pub fn build_sliceby_url(
    base_url: &Url,
    sliceby_id: &str,
    endpoint: SliceByEndpoint,
) -> SliceByResult<Url> {
    if sliceby_id.trim().is_empty() {
        return Err(SliceByError::invalid_request("slice-by id must not be empty"));
    }

    let mut url = base_url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| SliceByError::Configuration {
            message: format!("base URL '{base_url}' cannot carry a path"),
        })?
        .pop_if_empty()
        .push("sliceby")
        .push(sliceby_id)
        .push(endpoint.as_segment())
        .push("");

    Ok(url)
}
