//! Per-asset valuation and percentage returns.

use crate::types::Asset;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// A percentage return held both exactly and as a float.
///
/// The exact value drives ranking and dispersion checks; the float feeds
/// statistics and reporting. Constructed only from finite values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentReturn {
    /// Exact decimal percentage.
    pub exact: Decimal,
    /// The same percentage as `f64`.
    pub value: f64,
}

impl PercentReturn {
    /// Wraps an exact percentage, rejecting values with no finite `f64` form.
    #[must_use]
    pub fn from_exact(exact: Decimal) -> Option<Self> {
        let value = exact.to_f64().filter(|v| v.is_finite())?;
        Some(Self { exact, value })
    }
}

/// Full-precision valuation of a single asset.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetValuation {
    /// shares × purchase price.
    pub cost_basis: Decimal,
    /// shares × current price.
    pub market_value: Decimal,
    /// market value − cost basis.
    pub gain_loss: Decimal,
    /// Return on cost basis; `None` when the cost basis is zero.
    pub return_pct: Option<PercentReturn>,
}

/// Percentage change of `gain` relative to `base`.
///
/// Returns `None` when `base` is zero, or when the quotient cannot be
/// represented (a vanishingly small base against a large gain).
#[must_use]
pub fn percent_change(gain: Decimal, base: Decimal) -> Option<Decimal> {
    if base.is_zero() {
        return None;
    }
    gain.checked_div(base)?.checked_mul(Decimal::ONE_HUNDRED)
}

/// Values a single asset at full precision.
///
/// Returns `None` only if a money amount overflows the decimal range.
#[must_use]
pub fn value_asset(asset: &Asset) -> Option<AssetValuation> {
    let cost_basis = asset.checked_cost_basis()?;
    let market_value = asset.checked_market_value()?;
    let gain_loss = market_value.checked_sub(cost_basis)?;

    let return_pct = percent_change(gain_loss, cost_basis).and_then(PercentReturn::from_exact);

    Some(AssetValuation {
        cost_basis,
        market_value,
        gain_loss,
        return_pct,
    })
}
