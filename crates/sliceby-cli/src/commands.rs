//! Subcommands of the `sliceby` CLI.

use clap::Subcommand;

/// Available commands, one per slice-by endpoint.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the slices of a slice-by
    Info {
        /// Slice-by id
        id: String,
        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show rows belonging to one slice
    Rows {
        /// Slice-by id
        id: String,
        /// Slice key (numbers are sent as numeric keys unless --label is given)
        key: String,
        /// Send the key as a text label even if it looks like a number
        #[arg(long)]
        label: bool,
        /// First row to fetch
        #[arg(long)]
        start: Option<usize>,
        /// Row to stop before
        #[arg(long)]
        end: Option<usize>,
        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Aggregate every slice of a slice-by
    Aggregate {
        /// Slice-by id
        id: String,
        /// Id of a server-registered aggregation
        #[arg(long, conflicts_with = "aggregation", required_unless_present = "aggregation")]
        aggregation_id: Option<String>,
        /// Name of a built-in aggregation (e.g. "mean")
        #[arg(long)]
        aggregation: Option<String>,
        /// Pass whole data frames to the aggregation
        #[arg(long)]
        accepts_df: bool,
        /// Column to aggregate (repeatable; default is all columns)
        #[arg(long = "column")]
        columns: Vec<String>,
    },
}
