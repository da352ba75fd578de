//! Caller-side input validation.
//!
//! The calculator accepts any input shape. Callers whose domain forbids
//! short positions or negative prices validate first.

use crate::types::Asset;
use crate::{MetricsError, MetricsResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Which numeric domains are acceptable for asset inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Signed quantities and prices are valid (short positions).
    #[default]
    Signed,
    /// Shares and prices must be non-negative.
    LongOnly,
}

/// Validates assets against the given policy.
///
/// Blank symbols are always rejected. Duplicate symbols are accepted but
/// logged, since reports name assets by symbol.
///
/// # Errors
///
/// Returns the first offending asset as [`MetricsError::InvalidAsset`].
pub fn validate_assets(assets: &[Asset], policy: InputPolicy) -> MetricsResult<()> {
    let mut seen = HashSet::with_capacity(assets.len());

    for (index, asset) in assets.iter().enumerate() {
        if asset.symbol.trim().is_empty() {
            return Err(MetricsError::invalid_asset(
                &asset.symbol,
                format!("symbol at position {index} cannot be empty"),
            ));
        }

        if policy == InputPolicy::LongOnly {
            check_non_negative(asset, "shares", asset.shares)?;
            check_non_negative(asset, "purchase_price", asset.purchase_price)?;
            check_non_negative(asset, "current_price", asset.current_price)?;
        }

        if !seen.insert(asset.symbol.as_str()) {
            warn!(symbol = %asset.symbol, "duplicate symbol in portfolio");
        }
    }

    Ok(())
}

fn check_non_negative(asset: &Asset, field: &str, value: Decimal) -> MetricsResult<()> {
    if value < Decimal::ZERO {
        return Err(MetricsError::invalid_asset(
            &asset.symbol,
            format!("{field} cannot be negative ({value})"),
        ));
    }
    Ok(())
}
