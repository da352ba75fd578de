//! Portfolio container.

use super::{Asset, MetricsConfig};
use crate::analytics::MetricsReport;
use serde::{Deserialize, Serialize};

/// An ordered sequence of assets.
///
/// May be empty. Order matters only for tie-breaking between equally
/// performing assets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Holdings in input order.
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl Portfolio {
    /// Creates an empty portfolio with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assets: Vec::new(),
        }
    }

    /// Adds an asset.
    #[must_use]
    pub fn with_asset(mut self, asset: Asset) -> Self {
        self.assets.push(asset);
        self
    }

    /// Adds multiple assets.
    #[must_use]
    pub fn with_assets(mut self, assets: impl IntoIterator<Item = Asset>) -> Self {
        self.assets.extend(assets);
        self
    }

    /// Returns the number of assets.
    #[must_use]
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Returns true if the portfolio has no assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Calculates the metrics report for this portfolio.
    #[must_use]
    pub fn metrics(&self, config: &MetricsConfig) -> MetricsReport {
        MetricsReport::calculate(&self.assets, config)
    }
}

impl From<Vec<Asset>> for Portfolio {
    fn from(assets: Vec<Asset>) -> Self {
        Self {
            name: String::new(),
            assets,
        }
    }
}
