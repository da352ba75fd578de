//! Built-in sample portfolio.

use crate::types::{Asset, Portfolio};
use rust_decimal_macros::dec;

/// Returns a small three-stock portfolio with mixed gains and losses.
#[must_use]
pub fn sample_portfolio() -> Portfolio {
    Portfolio::new("Sample Portfolio").with_assets([
        Asset::new("AAPL", dec!(10), dec!(150.00), dec!(175.50)).with_dividend_yield(dec!(0.5)),
        Asset::new("GOOGL", dec!(5), dec!(2800.00), dec!(2650.00)).with_dividend_yield(dec!(0.0)),
        Asset::new("MSFT", dec!(15), dec!(300.00), dec!(380.00)).with_dividend_yield(dec!(0.8)),
    ])
}
