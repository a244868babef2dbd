//! Slice-by requests: info, rows and aggregation.

use serde::Serialize;
use sliceby_core::{
    AggregateRequest, DataPanelRows, SliceByAggregation, SliceByInfo, SliceByResult,
    SliceRowsRequest,
};

use crate::http::HttpBackend;
use crate::url::{SliceByEndpoint, build_sliceby_url};

use super::SliceByClient;

/// The info endpoint takes no parameters; it is sent an empty JSON object.
#[derive(Serialize)]
struct EmptyBody {}

impl<B: HttpBackend> SliceByClient<B> {
    /// Fetch the grouping summary of a slice-by.
    pub(crate) async fn fetch_info(&self, sliceby_id: &str) -> SliceByResult<SliceByInfo> {
        let url = build_sliceby_url(&self.settings.base_url, sliceby_id, SliceByEndpoint::Info)?;
        let info: SliceByInfo = self.backend.post_json(&url, &EmptyBody {}).await?;

        if !info.is_consistent() {
            tracing::debug!(
                sliceby_id,
                n_slices = info.n_slices,
                keys = info.slice_keys.len(),
                "slice count disagrees with slice keys"
            );
        }

        Ok(info)
    }

    /// Fetch a window of rows from one slice.
    pub(crate) async fn fetch_rows(
        &self,
        sliceby_id: &str,
        request: &SliceRowsRequest,
    ) -> SliceByResult<DataPanelRows> {
        request.validate()?;
        let url = build_sliceby_url(&self.settings.base_url, sliceby_id, SliceByEndpoint::Rows)?;
        self.backend.post_json(&url, request).await
    }

    /// Aggregate every slice of a slice-by.
    pub(crate) async fn fetch_aggregate(
        &self,
        sliceby_id: &str,
        request: &AggregateRequest,
    ) -> SliceByResult<SliceByAggregation> {
        request.validate()?;
        let url = build_sliceby_url(
            &self.settings.base_url,
            sliceby_id,
            SliceByEndpoint::Aggregate,
        )?;
        self.backend.post_json(&url, request).await
    }
}
