//! Error types for portfolio input handling.
//!
//! The metrics calculator itself never fails: undefined metrics are reported
//! as absent fields. These errors come from builders, configuration checks
//! and caller-requested input validation.

use thiserror::Error;

/// Result type for folio operations.
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Errors raised while constructing or validating inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Invalid asset data.
    #[error("Invalid asset '{symbol}': {reason}")]
    InvalidAsset {
        /// The asset symbol (may be empty when the symbol itself is invalid).
        symbol: String,
        /// The reason the asset is invalid.
        reason: String,
    },

    /// Invalid calculator configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// The reason the configuration is invalid.
        reason: String,
    },
}

impl MetricsError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid asset error.
    #[must_use]
    pub fn invalid_asset(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAsset {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
