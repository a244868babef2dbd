//! Info command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::render_info;

/// Execute the info command.
///
/// Fetches the slice-by summary and prints either a table of slice keys
/// or, with `json`, the response exactly as decoded.
pub async fn execute(ctx: &CliContext, id: &str, json: bool) -> Result<()> {
    let info = ctx.slicebys().get_info(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", render_info(&info));
    }

    Ok(())
}
