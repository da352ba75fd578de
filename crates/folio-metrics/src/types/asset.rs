//! Asset (holding) representation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single holding in a portfolio.
///
/// Quantities and prices are signed: a negative share count models a short
/// position. Callers that disallow this should run
/// [`validate_assets`](crate::validate_assets) with
/// [`InputPolicy::LongOnly`](crate::InputPolicy::LongOnly) first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Instrument symbol (e.g. "AAPL").
    pub symbol: String,

    /// Quantity held.
    pub shares: Decimal,

    /// Cost basis per share.
    #[serde(alias = "purchasePrice")]
    pub purchase_price: Decimal,

    /// Current market price per share.
    #[serde(alias = "currentPrice")]
    pub current_price: Decimal,

    /// Fractional dividend yield. Not used by the metrics calculation.
    #[serde(default, alias = "dividendYield", skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<Decimal>,
}

impl Asset {
    /// Creates an asset without validation.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        shares: Decimal,
        purchase_price: Decimal,
        current_price: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            shares,
            purchase_price,
            current_price,
            dividend_yield: None,
        }
    }

    /// Creates a new asset builder.
    #[must_use]
    pub fn builder() -> AssetBuilder {
        AssetBuilder::new()
    }

    /// Sets the dividend yield.
    #[must_use]
    pub fn with_dividend_yield(mut self, dividend_yield: Decimal) -> Self {
        self.dividend_yield = Some(dividend_yield);
        self
    }

    /// Returns the cost basis (shares × purchase price) at full precision.
    ///
    /// `None` if the product exceeds the decimal range.
    #[must_use]
    pub fn checked_cost_basis(&self) -> Option<Decimal> {
        self.shares.checked_mul(self.purchase_price)
    }

    /// Returns the market value (shares × current price) at full precision.
    ///
    /// `None` if the product exceeds the decimal range.
    #[must_use]
    pub fn checked_market_value(&self) -> Option<Decimal> {
        self.shares.checked_mul(self.current_price)
    }

    /// Returns true if any quantity or price is negative.
    #[must_use]
    pub fn has_negative_inputs(&self) -> bool {
        [self.shares, self.purchase_price, self.current_price]
            .iter()
            .any(|v| *v < Decimal::ZERO)
    }
}

/// Builder for constructing an [`Asset`].
#[derive(Debug, Clone, Default)]
pub struct AssetBuilder {
    symbol: Option<String>,
    shares: Option<Decimal>,
    purchase_price: Option<Decimal>,
    current_price: Option<Decimal>,
    dividend_yield: Option<Decimal>,
}

impl AssetBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Sets the share count.
    #[must_use]
    pub fn shares(mut self, shares: Decimal) -> Self {
        self.shares = Some(shares);
        self
    }

    /// Sets the purchase price per share.
    #[must_use]
    pub fn purchase_price(mut self, price: Decimal) -> Self {
        self.purchase_price = Some(price);
        self
    }

    /// Sets the current price per share.
    #[must_use]
    pub fn current_price(mut self, price: Decimal) -> Self {
        self.current_price = Some(price);
        self
    }

    /// Sets the dividend yield.
    #[must_use]
    pub fn dividend_yield(mut self, dividend_yield: Decimal) -> Self {
        self.dividend_yield = Some(dividend_yield);
        self
    }

    /// Builds the asset.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or the symbol is blank.
    pub fn build(self) -> crate::MetricsResult<Asset> {
        let symbol = self
            .symbol
            .ok_or_else(|| crate::MetricsError::missing_field("symbol"))?;

        if symbol.trim().is_empty() {
            return Err(crate::MetricsError::invalid_asset(
                &symbol,
                "symbol cannot be empty",
            ));
        }

        let shares = self
            .shares
            .ok_or_else(|| crate::MetricsError::missing_field("shares"))?;

        let purchase_price = self
            .purchase_price
            .ok_or_else(|| crate::MetricsError::missing_field("purchase_price"))?;

        let current_price = self
            .current_price
            .ok_or_else(|| crate::MetricsError::missing_field("current_price"))?;

        Ok(Asset {
            symbol,
            shares,
            purchase_price,
            current_price,
            dividend_yield: self.dividend_yield,
        })
    }
}
