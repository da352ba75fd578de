//! Metrics command implementation.
//!
//! Loads a portfolio, runs the calculator and renders the report. Metrics
//! that do not apply to the portfolio are shown as a placeholder rather
//! than a number.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;
use tracing::{debug, warn};

use folio_metrics::{
    sample_portfolio, validate_assets, InputPolicy, MetricsConfig, MetricsReport, MoneyRounding,
    Portfolio, PortfolioMetrics,
};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::input::{load_config, load_portfolio};
use crate::output::{
    color_gain_loss, format_money, format_percent, format_ratio, format_symbol, print_header,
    print_info, print_output, print_warning, KeyValue,
};

/// Arguments for the metrics command.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Portfolio file (.json or .csv)
    #[arg(short, long, conflicts_with = "sample")]
    pub input: Option<PathBuf>,

    /// Use the built-in sample portfolio
    #[arg(long)]
    pub sample: bool,

    /// Metrics configuration file (TOML)
    #[arg(short, long, env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Risk-free rate in percent for the Sharpe ratio (default: 2.0)
    #[arg(long, allow_negative_numbers = true)]
    pub risk_free_rate: Option<f64>,

    /// Decimal places for money fields (default: 2)
    #[arg(long)]
    pub decimals: Option<u32>,

    /// Midpoint rounding for money fields
    #[arg(long, value_enum)]
    pub rounding: Option<RoundingArg>,

    /// Reject negative shares or prices
    #[arg(long)]
    pub long_only: bool,

    /// Show the per-asset breakdown
    #[arg(short, long)]
    pub breakdown: bool,
}

/// Rounding options exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoundingArg {
    /// Round half away from zero
    HalfUp,
    /// Round half to even
    HalfEven,
}

impl From<RoundingArg> for MoneyRounding {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::HalfUp => MoneyRounding::HalfUp,
            RoundingArg::HalfEven => MoneyRounding::HalfEven,
        }
    }
}

/// One row of the per-asset breakdown.
#[derive(Debug, Clone, Serialize, Tabled)]
struct PerformanceRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Cost Basis")]
    cost_basis: String,
    #[tabled(rename = "Market Value")]
    market_value: String,
    #[tabled(rename = "Gain/Loss")]
    gain_loss: String,
    #[tabled(rename = "Return")]
    return_pct: String,
}

/// Execute the metrics command.
pub fn execute(args: MetricsArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let portfolio = resolve_portfolio(&args)?;
    let config = resolve_config(&args)?;

    let policy = if args.long_only {
        InputPolicy::LongOnly
    } else {
        InputPolicy::Signed
    };
    validate_assets(&portfolio.assets, policy)?;

    debug!(?config, assets = portfolio.asset_count(), "calculating metrics");

    match portfolio.metrics(&config) {
        MetricsReport::NoData => render_no_data(&portfolio, format),
        MetricsReport::Computed(metrics) => {
            render_metrics(&portfolio, &metrics, args.breakdown, format, quiet)
        }
        MetricsReport::Overflow { detail } => {
            Err(CliError::Calculation(format!("amount out of range in {detail}")).into())
        }
    }
}

fn resolve_portfolio(args: &MetricsArgs) -> CliResult<Portfolio> {
    match (&args.input, args.sample) {
        (Some(path), _) => load_portfolio(path),
        (None, true) => Ok(sample_portfolio()),
        (None, false) => Err(CliError::MissingArgument(
            "--input <FILE> or --sample".to_string(),
        )),
    }
}

fn resolve_config(args: &MetricsArgs) -> CliResult<MetricsConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => MetricsConfig::default(),
    };

    if let Some(rate) = args.risk_free_rate {
        config.risk_free_rate = rate;
    }
    if let Some(decimals) = args.decimals {
        config.money_decimals = decimals;
    }
    if let Some(rounding) = args.rounding {
        config.rounding = rounding.into();
    }

    config.validate()?;
    Ok(config)
}

/// Builds the summary rows, with the placeholder for absent metrics.
fn summary_rows(portfolio: &Portfolio, metrics: &PortfolioMetrics) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Portfolio", portfolio.name.clone()),
        KeyValue::new("Assets", metrics.asset_count().to_string()),
        KeyValue::new("Total Value", format_money(metrics.total_value)),
        KeyValue::new("Total Cost", format_money(metrics.total_cost)),
        KeyValue::new("Gain/Loss", format_money(metrics.total_gain_loss)),
        KeyValue::new("Return", format_percent(metrics.percentage_return)),
        KeyValue::new("Average Return", format_percent(metrics.average_return)),
        KeyValue::new(
            format!("Sharpe Ratio (rf {}%)", metrics.risk_free_rate),
            format_ratio(metrics.sharpe_ratio),
        ),
        KeyValue::new("Best Performer", format_symbol(metrics.best_performer.as_deref())),
        KeyValue::new("Worst Performer", format_symbol(metrics.worst_performer.as_deref())),
    ]
}

fn breakdown_rows(metrics: &PortfolioMetrics) -> Vec<PerformanceRow> {
    metrics
        .assets
        .iter()
        .map(|a| PerformanceRow {
            symbol: a.symbol.clone(),
            cost_basis: format_money(a.cost_basis),
            market_value: format_money(a.market_value),
            gain_loss: format_money(a.gain_loss),
            return_pct: format_percent(a.return_pct),
        })
        .collect()
}

fn minimal_line(metrics: &PortfolioMetrics) -> String {
    format!(
        "value={} gain={} return={} sharpe={} best={} worst={}",
        format_money(metrics.total_value),
        format_money(metrics.total_gain_loss),
        format_percent(metrics.percentage_return),
        format_ratio(metrics.sharpe_ratio),
        format_symbol(metrics.best_performer.as_deref()),
        format_symbol(metrics.worst_performer.as_deref()),
    )
}

fn render_metrics(
    portfolio: &Portfolio,
    metrics: &PortfolioMetrics,
    breakdown: bool,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let excluded = metrics.asset_count() - metrics.returns_count();
    if excluded > 0 {
        warn!(excluded, "assets with zero cost basis have no return");
    }

    match format {
        OutputFormat::Table => {
            let mut rows = summary_rows(portfolio, metrics);
            for row in rows.iter_mut().filter(|r| r.key == "Gain/Loss") {
                row.value = color_gain_loss(row.value.clone(), metrics.total_gain_loss);
            }

            if !quiet {
                print_header("Portfolio Metrics");
            }
            print_output(&rows, format)?;

            if breakdown {
                if !quiet {
                    print_header("Assets");
                }
                print_output(&breakdown_rows(metrics), format)?;
            }

            if excluded > 0 && !quiet {
                print_warning(&format!(
                    "{excluded} asset(s) with zero cost basis excluded from return statistics"
                ));
            }
        }
        OutputFormat::Json => {
            let report = MetricsReport::Computed(metrics.clone());
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => {
            if breakdown {
                print_output(&breakdown_rows(metrics), format)?;
            } else {
                print_output(&summary_rows(portfolio, metrics), format)?;
            }
        }
        OutputFormat::Minimal => println!("{}", minimal_line(metrics)),
    }

    Ok(())
}

fn render_no_data(portfolio: &Portfolio, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_info(&format!(
            "Portfolio '{}' has no assets; no metrics to report.",
            portfolio.name
        )),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&MetricsReport::NoData)?);
        }
        OutputFormat::Csv => print_output::<KeyValue>(&[], format)?,
        OutputFormat::Minimal => println!("no data"),
    }
    Ok(())
}
