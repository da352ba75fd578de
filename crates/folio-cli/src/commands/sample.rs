//! Sample command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use folio_metrics::{sample_portfolio, Asset, Portfolio};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_info, print_output};

/// Arguments for the sample command.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Write the sample to a .json or .csv file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// One holding, laid out like the CSV input columns.
#[derive(Debug, Clone, Serialize, Tabled)]
struct AssetRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Shares")]
    shares: String,
    #[tabled(rename = "Purchase Price")]
    purchase_price: String,
    #[tabled(rename = "Current Price")]
    current_price: String,
    #[tabled(rename = "Dividend Yield")]
    dividend_yield: String,
}

impl From<&Asset> for AssetRow {
    fn from(asset: &Asset) -> Self {
        Self {
            symbol: asset.symbol.clone(),
            shares: asset.shares.to_string(),
            purchase_price: asset.purchase_price.to_string(),
            current_price: asset.current_price.to_string(),
            dividend_yield: asset
                .dividend_yield
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Execute the sample command.
pub fn execute(args: SampleArgs, format: OutputFormat) -> Result<()> {
    let portfolio = sample_portfolio();

    if let Some(path) = args.output {
        fs::write(&path, encode_for(&portfolio, &path)?)?;
        info!(path = %path.display(), "wrote sample portfolio");
        if format == OutputFormat::Table {
            print_info(&format!("Sample portfolio written to {}", path.display()));
        }
        return Ok(());
    }

    let rows: Vec<AssetRow> = portfolio.assets.iter().map(AssetRow::from).collect();
    match format {
        OutputFormat::Table => {
            print_header(&portfolio.name);
            print_output(&rows, format)?;
        }
        OutputFormat::Csv => print_output(&rows, format)?,
        OutputFormat::Json => println!("{}", to_json(&portfolio)?),
        OutputFormat::Minimal => {
            let symbols: Vec<&str> = portfolio.assets.iter().map(|a| a.symbol.as_str()).collect();
            println!("{}", symbols.join(","));
        }
    }

    Ok(())
}

/// Encodes the portfolio in the format named by the file extension.
fn encode_for(portfolio: &Portfolio, path: &Path) -> CliResult<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => to_json(portfolio),
        "csv" => to_csv(portfolio),
        other => Err(CliError::UnsupportedFormat(other.to_string())),
    }
}

fn to_json(portfolio: &Portfolio) -> CliResult<String> {
    serde_json::to_string_pretty(portfolio).map_err(|e| CliError::Serialization(e.to_string()))
}

fn to_csv(portfolio: &Portfolio) -> CliResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for asset in &portfolio.assets {
        wtr.serialize(AssetRow::from(asset))
            .map_err(|e| CliError::Serialization(e.to_string()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| CliError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CliError::Serialization(e.to_string()))
}
