//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unsupported scenario file extension.
    #[error("Unsupported scenario file format: {0}. Use .toml or .json.")]
    UnsupportedFormat(String),

    /// Scenario file could not be parsed.
    #[error("Failed to parse scenario file {path}: {reason}")]
    ParseFailed {
        /// Path of the offending file.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// The scenario failed validation or evaluation.
    #[error("Calculation error: {0}")]
    Calculation(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

impl From<propex_core::PropexError> for CliError {
    fn from(err: propex_core::PropexError) -> Self {
        CliError::Calculation(err.to_string())
    }
}

impl From<propex_analytics::AnalyticsError> for CliError {
    fn from(err: propex_analytics::AnalyticsError) -> Self {
        CliError::Calculation(err.to_string())
    }
}
