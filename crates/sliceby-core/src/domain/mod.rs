//! Core domain types.
//!
//! These types represent the values exchanged with the slicing service,
//! independent of how they are transported.
//!
//! # Structure
//!
//! - `slice` - Slice-by results (`SliceKey`, `SliceByInfo`)
//! - `rows` - Row windows for a slice (`DataPanelRows`, `ColumnInfo`)

mod rows;
mod slice;

pub use rows::{ColumnInfo, DataPanelRows};
pub use slice::{SliceByInfo, SliceKey};
