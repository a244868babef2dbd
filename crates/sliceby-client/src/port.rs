//! Port trait implementation for `SliceByClient`.
//!
//! Errors from the backend pass through untouched.

use async_trait::async_trait;
use sliceby_core::{
    AggregateRequest, DataPanelRows, SliceByAggregation, SliceByInfo, SliceByPort, SliceByResult,
    SliceRowsRequest,
};

use crate::client::SliceByClient;
use crate::http::HttpBackend;

#[async_trait]
impl<B: HttpBackend + Send + Sync> SliceByPort for SliceByClient<B> {
    async fn get_info(&self, sliceby_id: &str) -> SliceByResult<SliceByInfo> {
        self.fetch_info(sliceby_id).await
    }

    async fn get_rows(
        &self,
        sliceby_id: &str,
        request: &SliceRowsRequest,
    ) -> SliceByResult<DataPanelRows> {
        self.fetch_rows(sliceby_id, request).await
    }

    async fn aggregate(
        &self,
        sliceby_id: &str,
        request: &AggregateRequest,
    ) -> SliceByResult<SliceByAggregation> {
        self.fetch_aggregate(sliceby_id, request).await
    }
}
