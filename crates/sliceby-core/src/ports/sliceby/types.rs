//! Request bodies for slice-by operations.
//!
//! These types are serialized as-is into the JSON body of each request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{SliceByError, SliceByResult};
use crate::domain::SliceKey;

/// Request for a window of rows belonging to one slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceRowsRequest {
    /// The slice to read from
    pub slice_key: SliceKey,
    /// First row (inclusive); server default when `None`
    pub start: Option<usize>,
    /// Last row (exclusive); server default when `None`
    pub end: Option<usize>,
}

impl SliceRowsRequest {
    /// Request every row of a slice.
    pub fn new(slice_key: impl Into<SliceKey>) -> Self {
        Self {
            slice_key: slice_key.into(),
            start: None,
            end: None,
        }
    }

    /// Restrict the window to `start..end`.
    #[must_use]
    pub const fn with_range(mut self, start: Option<usize>, end: Option<usize>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Reject windows whose start lies past their end.
    pub fn validate(&self) -> SliceByResult<()> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(SliceByError::invalid_request(format!(
                    "row window start ({start}) is after end ({end})"
                )));
            }
        }
        Ok(())
    }
}

/// Request to aggregate every slice of a slice-by.
///
/// Exactly one of `aggregation_id` (a server-registered aggregation) or
/// `aggregation` (a named built-in such as `mean`) must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRequest {
    /// Id of a server-registered aggregation
    pub aggregation_id: Option<String>,
    /// Name of a built-in aggregation
    pub aggregation: Option<String>,
    /// Whether the aggregation receives whole data frames
    pub accepts_df: bool,
    /// Columns to aggregate; all columns when `None`
    pub columns: Option<Vec<String>>,
}

impl AggregateRequest {
    /// Aggregate with a server-registered aggregation.
    pub fn by_id(aggregation_id: impl Into<String>) -> Self {
        Self {
            aggregation_id: Some(aggregation_id.into()),
            ..Self::default()
        }
    }

    /// Aggregate with a named built-in aggregation.
    pub fn by_name(aggregation: impl Into<String>) -> Self {
        Self {
            aggregation: Some(aggregation.into()),
            ..Self::default()
        }
    }

    /// Set whether the aggregation accepts whole data frames.
    #[must_use]
    pub const fn with_accepts_df(mut self, accepts_df: bool) -> Self {
        self.accepts_df = accepts_df;
        self
    }

    /// Restrict the aggregation to the given columns.
    #[must_use]
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Require exactly one aggregation selector.
    pub fn validate(&self) -> SliceByResult<()> {
        match (&self.aggregation_id, &self.aggregation) {
            (Some(_), None) | (None, Some(_)) => Ok(()),
            (Some(_), Some(_)) => Err(SliceByError::invalid_request(
                "set either aggregation_id or aggregation, not both",
            )),
            (None, None) => Err(SliceByError::invalid_request(
                "one of aggregation_id or aggregation is required",
            )),
        }
    }
}

/// Aggregation output keyed by result name.
pub type SliceByAggregation = BTreeMap<String, serde_json::Value>;
