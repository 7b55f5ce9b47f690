//! Error types for the calculation engine.

use thiserror::Error;

/// Unified error type for all engine operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// A quantity used as a divisor is zero, leaving the metric undefined.
    #[error("division by zero: {quantity} is zero, the requested metric is undefined")]
    DivisionByZero {
        /// Name of the zero-valued quantity.
        quantity: &'static str,
    },

    /// The scenario failed validation.
    #[error("invalid scenario: {0}")]
    Scenario(String),
}

impl AnalyticsError {
    /// Creates a division-by-zero error for the named quantity.
    #[must_use]
    pub fn division_by_zero(quantity: &'static str) -> Self {
        Self::DivisionByZero { quantity }
    }
}

/// Result type alias for engine operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl From<propex_core::PropexError> for AnalyticsError {
    fn from(err: propex_core::PropexError) -> Self {
        AnalyticsError::Scenario(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propex_core::PropexError;

    #[test]
    fn test_error_display() {
        let err = AnalyticsError::division_by_zero("year_of_sale");
        assert!(err.to_string().contains("year_of_sale"));
    }

    #[test]
    fn test_from_core_error() {
        let err: AnalyticsError =
            PropexError::out_of_bounds("num_units", 0.0, 1.0, f64::INFINITY).into();
        assert!(matches!(err, AnalyticsError::Scenario(_)));
        assert!(err.to_string().contains("num_units"));
    }
}
