//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that consumers expect from infrastructure.
//! They contain no transport details and use only domain types.

pub mod sliceby;

pub use sliceby::{
    AggregateRequest, SliceByAggregation, SliceByError, SliceByPort, SliceByResult,
    SliceRowsRequest,
};
