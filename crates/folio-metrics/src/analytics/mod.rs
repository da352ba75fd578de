//! Portfolio performance analytics.
//!
//! This module derives performance figures from a list of assets:
//! - Per-asset cost basis, market value, gain/loss and return
//! - Return statistics (average, volatility, Sharpe ratio)
//! - Best and worst performer ranking
//! - The combined [`MetricsReport`]
//!
//! All functions are pure - they take assets and configuration as input
//! and return computed results. No caching, no I/O, no side effects.

mod metrics;
mod parallel;
mod ranking;
mod returns;
mod stats;

pub use metrics::*;
pub use parallel::*;
pub use ranking::*;
pub use returns::*;
pub use stats::*;
