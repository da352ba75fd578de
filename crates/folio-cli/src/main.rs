//! Folio CLI - Portfolio performance metrics from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Metrics for the built-in sample portfolio
//! folio metrics --sample
//!
//! # Metrics for a portfolio file (JSON or CSV)
//! folio metrics --input holdings.csv --risk-free-rate 4.5 --breakdown
//!
//! # Write the sample portfolio as an editable starting point
//! folio sample --format csv > holdings.csv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod input;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps stdout machine-readable
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("folio=debug,folio_metrics=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("folio=info,folio_metrics=warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;

    match cli.command {
        Commands::Metrics(args) => commands::metrics::execute(args, format, cli.quiet)?,
        Commands::Sample(args) => commands::sample::execute(args, format)?,
    }

    Ok(())
}
