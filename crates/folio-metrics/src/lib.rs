//! # Folio Metrics
//!
//! Portfolio performance metrics with explicit handling of undefined values.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **No sentinels**: A metric that cannot be computed is `None`, never
//!   `NaN`, `Infinity` or a magic number
//! - **Decimal money**: Amounts use `rust_decimal` and are rounded only at the
//!   reporting boundary
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Metrics
//!
//! - **Totals**: Market value, cost basis, gain/loss
//! - **Returns**: Portfolio return, per-asset return, average return
//! - **Risk-adjusted**: Sharpe ratio against a configurable risk-free rate
//! - **Ranking**: Best and worst performers
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_metrics::prelude::*;
//!
//! let portfolio = Portfolio::new("Tech")
//!     .with_asset(Asset::new("AAPL", dec!(10), dec!(150), dec!(175.50)))
//!     .with_asset(Asset::new("MSFT", dec!(15), dec!(300), dec!(380)));
//!
//! match portfolio.metrics(&MetricsConfig::default()) {
//!     MetricsReport::Computed(metrics) => {
//!         assert_eq!(metrics.total_value, dec!(7455));
//!         assert_eq!(metrics.best_performer.as_deref(), Some("MSFT"));
//!     }
//!     MetricsReport::NoData => unreachable!("portfolio is not empty"),
//!     MetricsReport::Overflow { detail } => panic!("overflow: {detail}"),
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Valuation, return statistics, ranking and the metrics report
//! - [`money`] - Currency rounding
//! - [`types`] - Core types (Asset, Portfolio, Config)
//! - [`validation`] - Optional caller-side input checks
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel per-asset evaluation for large portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod analytics;
pub mod error;
pub mod money;
pub mod sample;
pub mod types;
pub mod validation;

// Re-export error types at crate root
pub use error::{MetricsError, MetricsResult};

// Re-export main types
pub use types::{
    Asset, AssetBuilder, MetricsConfig, MoneyRounding, Portfolio, DEFAULT_RISK_FREE_RATE,
    MAX_MONEY_DECIMALS,
};

// Re-export analytics types and functions
pub use analytics::{
    average_return, calculate_portfolio_metrics, maybe_parallel_map, percent_change,
    rank_performers, return_volatility, sharpe_ratio, value_asset, AssetPerformance,
    AssetValuation, MetricsReport, PercentReturn, Performers, PortfolioMetrics,
};

pub use money::{round_money, MoneySum};
pub use sample::sample_portfolio;
pub use validation::{validate_assets, InputPolicy};

/// Prelude module for convenient imports.
///
/// ```rust
/// use folio_metrics::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{MetricsError, MetricsResult};

    // Domain types
    pub use crate::types::{Asset, AssetBuilder, MetricsConfig, MoneyRounding, Portfolio};

    // Analytics
    pub use crate::analytics::{
        calculate_portfolio_metrics, AssetPerformance, MetricsReport, PortfolioMetrics,
    };

    // Validation
    pub use crate::validation::{validate_assets, InputPolicy};

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}
