//! Portfolio metrics report.
//!
//! Combines valuation, return statistics and ranking into a single result.
//! Every figure that cannot be meaningfully computed for the given input is
//! an absent field; the calculation itself never fails or panics.

use super::{
    average_return, maybe_parallel_map, percent_change, rank_performers, return_volatility,
    sharpe_ratio, value_asset, AssetValuation, PercentReturn,
};
use crate::money::{round_money, MoneySum};
use crate::types::{Asset, MetricsConfig};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Reported performance of a single asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPerformance {
    /// Asset symbol.
    pub symbol: String,

    /// Cost basis (rounded money).
    pub cost_basis: Decimal,

    /// Market value (rounded money).
    pub market_value: Decimal,

    /// Gain or loss (rounded money).
    pub gain_loss: Decimal,

    /// Return on cost basis in percent; `None` when the cost basis is zero.
    pub return_pct: Option<f64>,
}

/// Aggregate and per-asset metrics for a non-empty portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    /// Σ shares × current price (rounded money).
    pub total_value: Decimal,

    /// Σ shares × purchase price (rounded money).
    pub total_cost: Decimal,

    /// Total value − total cost, from unrounded totals (rounded money).
    pub total_gain_loss: Decimal,

    /// Portfolio return in percent; `None` when total cost is zero.
    pub percentage_return: Option<f64>,

    /// Mean of the defined per-asset returns.
    pub average_return: Option<f64>,

    /// (average return − risk-free rate) / population σ of returns.
    pub sharpe_ratio: Option<f64>,

    /// Symbol with the highest defined return.
    pub best_performer: Option<String>,

    /// Symbol with the lowest defined return.
    pub worst_performer: Option<String>,

    /// Risk-free rate used for the Sharpe ratio.
    pub risk_free_rate: f64,

    /// Per-asset breakdown, in input order.
    pub assets: Vec<AssetPerformance>,
}

impl PortfolioMetrics {
    /// Number of assets in the portfolio.
    #[must_use]
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Number of assets with a defined return.
    #[must_use]
    pub fn returns_count(&self) -> usize {
        self.assets.iter().filter(|a| a.return_pct.is_some()).count()
    }

    /// Share of assets with a defined return, in percent.
    #[must_use]
    pub fn return_coverage_pct(&self) -> f64 {
        if self.assets.is_empty() {
            return 0.0;
        }
        self.returns_count() as f64 / self.asset_count() as f64 * 100.0
    }

    /// Returns true if every metric is defined.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.percentage_return.is_some()
            && self.average_return.is_some()
            && self.sharpe_ratio.is_some()
            && self.best_performer.is_some()
            && self.worst_performer.is_some()
            && self.assets.iter().all(|a| a.return_pct.is_some())
    }

    /// Looks up the first asset with the given symbol.
    #[must_use]
    pub fn performance(&self, symbol: &str) -> Option<&AssetPerformance> {
        self.assets.iter().find(|a| a.symbol == symbol)
    }
}

/// Outcome of a metrics calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetricsReport {
    /// The portfolio has no assets; no metric applies.
    NoData,

    /// Metrics were computed. Individual fields may still be absent.
    Computed(PortfolioMetrics),

    /// A money amount exceeded the representable decimal range.
    Overflow {
        /// What overflowed.
        detail: String,
    },
}

impl MetricsReport {
    /// Calculates metrics for the assets.
    ///
    /// Totals are order-independent: `Overflow` is returned only when a
    /// single valuation or a reported total is outside the decimal range.
    /// Money precision above [`MAX_MONEY_DECIMALS`](crate::MAX_MONEY_DECIMALS)
    /// is capped even if the config was never validated.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use folio_metrics::prelude::*;
    ///
    /// let report = MetricsReport::calculate(&portfolio.assets, &MetricsConfig::default());
    /// if let Some(metrics) = report.metrics() {
    ///     println!("Total value: {}", metrics.total_value);
    /// }
    /// ```
    #[must_use]
    pub fn calculate(assets: &[Asset], config: &MetricsConfig) -> Self {
        if assets.is_empty() {
            debug!("empty portfolio, no metrics reported");
            return Self::NoData;
        }

        let valuations = maybe_parallel_map(assets, config, value_asset);

        let mut value_sum = MoneySum::new();
        let mut cost_sum = MoneySum::new();
        let mut valued: Vec<(&Asset, AssetValuation)> = Vec::with_capacity(assets.len());

        for (asset, valuation) in assets.iter().zip(valuations) {
            let Some(valuation) = valuation else {
                return Self::overflow(format!("valuation of {}", asset.symbol));
            };

            value_sum.add(valuation.market_value);
            cost_sum.add(valuation.cost_basis);

            if valuation.return_pct.is_none() {
                debug!(
                    symbol = %asset.symbol,
                    "no return for asset, excluded from return statistics"
                );
            }
            valued.push((asset, valuation));
        }

        let (Some(total_value), Some(total_cost)) = (value_sum.total(), cost_sum.total()) else {
            return Self::overflow("portfolio totals");
        };
        let Some(total_gain_loss) = total_value.checked_sub(total_cost) else {
            return Self::overflow("portfolio gain/loss");
        };

        let percentage_return = percent_change(total_gain_loss, total_cost)
            .and_then(|r| r.to_f64())
            .filter(|r| r.is_finite());
        if percentage_return.is_none() {
            debug!(%total_cost, "portfolio return undefined");
        }

        let returns: Vec<PercentReturn> = valued.iter().filter_map(|(_, v)| v.return_pct).collect();

        let average = average_return(&returns);
        let sharpe = average
            .zip(return_volatility(&returns))
            .and_then(|(avg, vol)| sharpe_ratio(avg, vol, config.risk_free_rate));

        let performers = rank_performers(
            valued
                .iter()
                .filter_map(|(a, v)| v.return_pct.map(|r| (a.symbol.as_str(), r.exact))),
        );

        let money = |amount: Decimal| round_money(amount, config.money_decimals, config.rounding);

        let breakdown = valued
            .iter()
            .map(|(asset, v)| AssetPerformance {
                symbol: asset.symbol.clone(),
                cost_basis: money(v.cost_basis),
                market_value: money(v.market_value),
                gain_loss: money(v.gain_loss),
                return_pct: v.return_pct.map(|r| r.value),
            })
            .collect();

        debug!(
            assets = assets.len(),
            returns = returns.len(),
            "portfolio metrics calculated"
        );

        let (best_performer, worst_performer) = match performers {
            Some(p) => (Some(p.best), Some(p.worst)),
            None => (None, None),
        };

        Self::Computed(PortfolioMetrics {
            total_value: money(total_value),
            total_cost: money(total_cost),
            total_gain_loss: money(total_gain_loss),
            percentage_return,
            average_return: average,
            sharpe_ratio: sharpe,
            best_performer,
            worst_performer,
            risk_free_rate: config.risk_free_rate,
            assets: breakdown,
        })
    }

    fn overflow(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        debug!(%detail, "money amount out of range");
        Self::Overflow { detail }
    }

    /// Returns the computed metrics, if any.
    #[must_use]
    pub fn metrics(&self) -> Option<&PortfolioMetrics> {
        match self {
            Self::Computed(metrics) => Some(metrics),
            _ => None,
        }
    }

    /// Consumes the report, returning the computed metrics, if any.
    #[must_use]
    pub fn into_metrics(self) -> Option<PortfolioMetrics> {
        match self {
            Self::Computed(metrics) => Some(metrics),
            _ => None,
        }
    }

    /// Returns true for an empty portfolio.
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

/// Convenience function to calculate portfolio metrics.
///
/// # Example
///
/// ```ignore
/// let report = calculate_portfolio_metrics(&assets, &MetricsConfig::default());
/// ```
#[must_use]
pub fn calculate_portfolio_metrics(assets: &[Asset], config: &MetricsConfig) -> MetricsReport {
    MetricsReport::calculate(assets, config)
}
