//! CLI entry point - the composition root.
//!
//! Parses arguments, installs logging, builds the client via bootstrap and
//! dispatches to a handler. Errors are mapped to sysexits-style exit codes.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use sliceby_cli::handlers::aggregate::AggregateArgs;
use sliceby_cli::handlers::rows::RowsArgs;
use sliceby_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Log to stderr, honouring `RUST_LOG` and falling back to `warn` (`debug` with -v).
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(&CliConfig::from_cli(&cli))?;

    match command {
        Commands::Info { id, json } => {
            handlers::info::execute(&ctx, id, *json).await?;
        }
        Commands::Rows {
            id,
            key,
            label,
            start,
            end,
            json,
        } => {
            let args = RowsArgs {
                id,
                key,
                label: *label,
                start: *start,
                end: *end,
                json: *json,
            };
            handlers::rows::execute(&ctx, args).await?;
        }
        Commands::Aggregate {
            id,
            aggregation_id,
            aggregation,
            accepts_df,
            columns,
        } => {
            let args = AggregateArgs {
                id: id.clone(),
                aggregation_id: aggregation_id.clone(),
                aggregation: aggregation.clone(),
                accepts_df: *accepts_df,
                columns: columns.clone(),
            };
            handlers::aggregate::execute(&ctx, args).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads env-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli).await {
        let cli_err = CliError::from(err);
        tracing::debug!(error = ?cli_err, "command failed");
        eprintln!("error: {cli_err}");
        std::process::exit(cli_err.exit_code());
    }
}
