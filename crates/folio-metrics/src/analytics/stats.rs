//! Return statistics: mean, dispersion and Sharpe ratio.

use super::PercentReturn;
use statrs::statistics::Statistics;

/// Arithmetic mean of the returns, `None` for an empty set.
#[must_use]
pub fn average_return(returns: &[PercentReturn]) -> Option<f64> {
    if returns.is_empty() {
        return None;
    }
    finite(returns.iter().map(|r| r.value).mean())
}

/// Population standard deviation of the returns.
///
/// Returns `Some(0.0)` when every return is exactly equal (compared on the
/// exact decimal values), and `None` for an empty set.
#[must_use]
pub fn return_volatility(returns: &[PercentReturn]) -> Option<f64> {
    let first = returns.first()?;
    if returns.iter().all(|r| r.exact == first.exact) {
        return Some(0.0);
    }
    finite(returns.iter().map(|r| r.value).population_std_dev())
}

/// Sharpe ratio: excess return over the risk-free rate per unit of volatility.
///
/// `None` when volatility is zero or any input is not finite.
#[must_use]
pub fn sharpe_ratio(average: f64, volatility: f64, risk_free_rate: f64) -> Option<f64> {
    if volatility <= 0.0 || !volatility.is_finite() {
        return None;
    }
    finite((average - risk_free_rate) / volatility)
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
