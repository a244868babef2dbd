//! Slice-by client port trait.

use super::error::SliceByResult;
use super::types::{AggregateRequest, SliceByAggregation, SliceRowsRequest};
use crate::domain::{DataPanelRows, SliceByInfo};
use async_trait::async_trait;

/// Port trait for slice-by operations against the slicing service.
///
/// The implementation lives in `sliceby-client`.
///
/// # Design
///
/// - One network request per call; no retry, caching or ordering between calls
/// - Failures surface as `SliceByError` exactly as the adapter classified them
/// - `&self` methods so one client can serve concurrent callers
#[async_trait]
pub trait SliceByPort: Send + Sync {
    /// Fetch the grouping summary of a slice-by.
    ///
    /// # Arguments
    ///
    /// * `sliceby_id` - Server-side id of the slice-by resource
    async fn get_info(&self, sliceby_id: &str) -> SliceByResult<SliceByInfo>;

    /// Fetch a window of rows belonging to one slice.
    async fn get_rows(
        &self,
        sliceby_id: &str,
        request: &SliceRowsRequest,
    ) -> SliceByResult<DataPanelRows>;

    /// Run an aggregation over every slice of a slice-by.
    async fn aggregate(
        &self,
        sliceby_id: &str,
        request: &AggregateRequest,
    ) -> SliceByResult<SliceByAggregation>;
}
