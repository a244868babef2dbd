//! Command handlers that delegate to the slice-by port.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Turn CLI arguments into request types
//!   2. Call the `SliceByPort`
//!   3. Format output for the terminal

pub mod aggregate;
pub mod info;
pub mod rows;
