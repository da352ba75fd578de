//! Portfolio and configuration file loading.

use std::fs;
use std::io::Read;
use std::path::Path;

use folio_metrics::{Asset, MetricsConfig, Portfolio};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Accepted JSON layouts: a bare asset array or a named portfolio object.
#[derive(Deserialize)]
#[serde(untagged)]
enum PortfolioFile {
    Assets(Vec<Asset>),
    Named(Portfolio),
}

/// Loads a portfolio from a `.json` or `.csv` file.
///
/// Unnamed portfolios take the file stem as their name.
pub fn load_portfolio(path: &Path) -> CliResult<Portfolio> {
    let display = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let mut portfolio = match extension.as_str() {
        "json" => parse_json(&fs::read_to_string(path)?, &display)?,
        "csv" => parse_csv(fs::File::open(path)?, &display)?,
        other => return Err(CliError::UnsupportedFormat(other.to_string())),
    };

    if portfolio.name.is_empty() {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            portfolio.name = stem.to_string();
        }
    }

    info!(path = %path.display(), assets = portfolio.asset_count(), "loaded portfolio");
    Ok(portfolio)
}

/// Parses a JSON portfolio.
pub fn parse_json(content: &str, source: &str) -> CliResult<Portfolio> {
    let file: PortfolioFile =
        serde_json::from_str(content).map_err(|e| CliError::parse(source, e))?;

    Ok(match file {
        PortfolioFile::Assets(assets) => Portfolio::from(assets),
        PortfolioFile::Named(portfolio) => portfolio,
    })
}

/// Parses a CSV portfolio with a header row.
///
/// Columns: `symbol,shares,purchase_price,current_price[,dividend_yield]`
/// (camelCase headers are accepted too).
pub fn parse_csv<R: Read>(reader: R, source: &str) -> CliResult<Portfolio> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let assets = rdr
        .deserialize::<Asset>()
        .enumerate()
        .map(|(row, record)| {
            record.map_err(|e| CliError::parse(source, format!("row {}: {e}", row + 1)))
        })
        .collect::<CliResult<Vec<_>>>()?;

    debug!(rows = assets.len(), "parsed csv portfolio");
    Ok(Portfolio::from(assets))
}

/// Loads a TOML metrics configuration. Missing keys keep their defaults.
pub fn load_config(path: &Path) -> CliResult<MetricsConfig> {
    let content = fs::read_to_string(path)?;
    let config: MetricsConfig =
        toml::from_str(&content).map_err(|e| CliError::parse(path.display().to_string(), e))?;

    debug!(?config, "loaded metrics config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_json_array() {
        let json = r#"[
            {"symbol": "AAPL", "shares": 10, "purchasePrice": 150.0, "currentPrice": 175.5},
            {"symbol": "MSFT", "shares": 15, "purchase_price": 300, "current_price": 380}
        ]"#;
        let portfolio = parse_json(json, "test").unwrap();

        assert!(portfolio.name.is_empty());
        assert_eq!(portfolio.asset_count(), 2);
        assert_eq!(portfolio.assets[1].current_price, Decimal::from(380));
    }

    #[test]
    fn test_parse_json_named() {
        let json = r#"{"name": "Retirement", "assets": [
            {"symbol": "VTI", "shares": 3, "purchasePrice": 200, "currentPrice": 250}
        ]}"#;
        let portfolio = parse_json(json, "test").unwrap();

        assert_eq!(portfolio.name, "Retirement");
        assert_eq!(portfolio.assets[0].symbol, "VTI");
    }

    #[test]
    fn test_parse_json_empty_array() {
        let portfolio = parse_json("[]", "test").unwrap();
        assert!(portfolio.is_empty());
    }

    #[test]
    fn test_parse_json_invalid() {
        let err = parse_json(r#"[{"symbol": "X"}]"#, "bad.json").unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_parse_csv() {
        let csv = "symbol, shares, purchase_price, current_price, dividend_yield\n\
                   AAPL, 10, 150, 175.5, 0.5\n\
                   GIFT, 4, 0, 12,\n";
        let portfolio = parse_csv(csv.as_bytes(), "test").unwrap();

        assert_eq!(portfolio.asset_count(), 2);
        assert_eq!(portfolio.assets[0].symbol, "AAPL");
        assert!(portfolio.assets[0].dividend_yield.is_some());
        assert!(portfolio.assets[1].dividend_yield.is_none());
        assert_eq!(portfolio.assets[1].purchase_price, Decimal::ZERO);
    }

    #[test]
    fn test_parse_csv_camel_case_headers() {
        let csv = "symbol,shares,purchasePrice,currentPrice\nX,1,2,3\n";
        let portfolio = parse_csv(csv.as_bytes(), "test").unwrap();
        assert_eq!(portfolio.assets[0].current_price, Decimal::from(3));
    }

    #[test]
    fn test_parse_csv_bad_row() {
        let csv = "symbol,shares,purchase_price,current_price\nX,abc,2,3\n";
        let err = parse_csv(csv.as_bytes(), "holdings.csv").unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }
}
