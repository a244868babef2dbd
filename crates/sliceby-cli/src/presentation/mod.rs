//! Shared CLI presentation utilities.
//!
//! Format-only: handlers fetch, this module turns results into text.

pub mod tables;

pub use tables::{format_cell, render_aggregation, render_info, render_rows, truncate_string};
