//! Configuration for metrics computation.

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// Risk-free rate (in percent) used for the Sharpe ratio unless overridden.
pub const DEFAULT_RISK_FREE_RATE: f64 = 2.0;

/// Largest supported number of decimal places for reported money.
pub const MAX_MONEY_DECIMALS: u32 = 10;

/// Midpoint handling when rounding money to the reporting precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoneyRounding {
    /// Round half away from zero (0.125 -> 0.13, -0.125 -> -0.13).
    #[default]
    HalfUp,
    /// Round half to even, a.k.a. banker's rounding (0.125 -> 0.12).
    HalfEven,
}

impl MoneyRounding {
    /// Returns the matching `rust_decimal` strategy.
    #[must_use]
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Configuration for portfolio metrics computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Risk-free rate in percent, subtracted from the average return
    /// in the Sharpe ratio.
    pub risk_free_rate: f64,

    /// Decimal places for reported money fields.
    pub money_decimals: u32,

    /// Midpoint rounding for money fields.
    pub rounding: MoneyRounding,

    /// Enable parallel per-asset evaluation (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum asset count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            money_decimals: 2,
            rounding: MoneyRounding::HalfUp,
            parallel: true,
            parallel_threshold: 100,
        }
    }
}

impl MetricsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the risk-free rate (percent).
    #[must_use]
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Sets the number of decimal places for money fields.
    #[must_use]
    pub fn with_money_decimals(mut self, decimals: u32) -> Self {
        self.money_decimals = decimals;
        self
    }

    /// Sets the money rounding strategy.
    #[must_use]
    pub fn with_rounding(mut self, rounding: MoneyRounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }

    /// Checks that the configuration can produce well-defined metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if the risk-free rate is not finite or the money
    /// precision exceeds [`MAX_MONEY_DECIMALS`].
    pub fn validate(&self) -> crate::MetricsResult<()> {
        if !self.risk_free_rate.is_finite() {
            return Err(crate::MetricsError::invalid_config(format!(
                "risk_free_rate must be finite, got {}",
                self.risk_free_rate
            )));
        }

        if self.money_decimals > MAX_MONEY_DECIMALS {
            return Err(crate::MetricsError::invalid_config(format!(
                "money_decimals must be at most {MAX_MONEY_DECIMALS}, got {}",
                self.money_decimals
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = MetricsConfig::default();
        assert!((config.risk_free_rate - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.money_decimals, 2);
        assert_eq!(config.rounding, MoneyRounding::HalfUp);
        assert!(config.parallel);
        assert_eq!(config.parallel_threshold, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sequential() {
        let config = MetricsConfig::sequential();
        assert!(!config.parallel);
        assert!(!config.should_parallelize(10_000));
    }

    #[test]
    fn test_builder_pattern() {
        let config = MetricsConfig::new()
            .with_risk_free_rate(4.25)
            .with_money_decimals(4)
            .with_rounding(MoneyRounding::HalfEven)
            .with_parallel(false)
            .with_threshold(50);

        assert!((config.risk_free_rate - 4.25).abs() < f64::EPSILON);
        assert_eq!(config.money_decimals, 4);
        assert_eq!(config.rounding, MoneyRounding::HalfEven);
        assert!(!config.parallel);
        assert_eq!(config.parallel_threshold, 50);
    }

    #[test]
    fn test_should_parallelize() {
        let config = MetricsConfig::new().with_threshold(100);

        #[cfg(feature = "parallel")]
        {
            assert!(!config.should_parallelize(50));
            assert!(config.should_parallelize(100));
        }

        #[cfg(not(feature = "parallel"))]
        {
            assert!(!config.should_parallelize(50));
            assert!(!config.should_parallelize(100));
        }
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = MetricsConfig::new().with_risk_free_rate(f64::NAN);
        assert!(config.validate().is_err());

        let config = MetricsConfig::new().with_risk_free_rate(f64::INFINITY);
        assert!(config.validate().is_err());

        let config = MetricsConfig::new().with_money_decimals(MAX_MONEY_DECIMALS + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_partial() {
        // Missing fields fall back to defaults
        let parsed: MetricsConfig =
            serde_json::from_str(r#"{"risk_free_rate": 3.5, "rounding": "half_even"}"#).unwrap();

        assert!((parsed.risk_free_rate - 3.5).abs() < f64::EPSILON);
        assert_eq!(parsed.rounding, MoneyRounding::HalfEven);
        assert_eq!(parsed.money_decimals, 2);
    }
}
