//! Slice-by client port definitions.
//!
//! This module defines the port trait, request DTOs and errors for talking
//! to the slicing service. The actual implementation lives in `sliceby-client`.

mod client;
mod error;
mod types;

pub use client::SliceByPort;
pub use error::{SliceByError, SliceByResult};
pub use types::{AggregateRequest, SliceByAggregation, SliceRowsRequest};
