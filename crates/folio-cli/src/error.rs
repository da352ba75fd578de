//! CLI error types.

use folio_metrics::MetricsError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither a portfolio file nor the sample was requested.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Input file extension not recognised.
    #[error("Unsupported input format '{0}'. Use a .json or .csv file.")]
    UnsupportedFormat(String),

    /// Portfolio or config file could not be parsed.
    #[error("Failed to parse {path}: {reason}")]
    Parse {
        /// File being parsed.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// Input or configuration rejected by validation.
    #[error(transparent)]
    Validation(#[from] MetricsError),

    /// Metrics could not be produced.
    #[error("Calculation error: {0}")]
    Calculation(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CliError {
    /// Create a parse error for a file.
    pub fn parse(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
