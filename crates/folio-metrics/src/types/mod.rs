//! Domain types for portfolio metrics.
//!
//! - [`Asset`]: A single holding (symbol, quantity, cost basis, current price)
//! - [`Portfolio`]: An ordered, possibly empty, sequence of assets
//! - [`MetricsConfig`]: Calculator parameters (risk-free rate, money precision)
//! - [`MoneyRounding`]: Midpoint strategy for currency rounding

mod asset;
mod config;
mod portfolio;

pub use asset::{Asset, AssetBuilder};
pub use config::{MetricsConfig, MoneyRounding, DEFAULT_RISK_FREE_RATE, MAX_MONEY_DECIMALS};
pub use portfolio::Portfolio;
