#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{ColumnInfo, DataPanelRows, SliceByInfo, SliceKey};
pub use ports::{
    AggregateRequest, SliceByAggregation, SliceByError, SliceByPort, SliceByResult,
    SliceRowsRequest,
};
