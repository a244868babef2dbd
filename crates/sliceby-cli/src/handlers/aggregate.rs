//! Aggregate command handler.

use anyhow::Result;
use sliceby_core::AggregateRequest;

use crate::bootstrap::CliContext;
use crate::presentation::render_aggregation;

/// Arguments for the aggregate command.
pub struct AggregateArgs {
    pub id: String,
    pub aggregation_id: Option<String>,
    pub aggregation: Option<String>,
    pub accepts_df: bool,
    pub columns: Vec<String>,
}

impl AggregateArgs {
    fn to_request(&self) -> AggregateRequest {
        AggregateRequest {
            aggregation_id: self.aggregation_id.clone(),
            aggregation: self.aggregation.clone(),
            accepts_df: self.accepts_df,
            columns: (!self.columns.is_empty()).then(|| self.columns.clone()),
        }
    }
}

/// Execute the aggregate command.
pub async fn execute(ctx: &CliContext, args: AggregateArgs) -> Result<()> {
    let request = args.to_request();
    let result = ctx.slicebys().aggregate(&args.id, &request).await?;
    print!("{}", render_aggregation(&result));
    Ok(())
}
