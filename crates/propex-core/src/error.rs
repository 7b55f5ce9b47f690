//! Error types for the Propex library.
//!
//! This module defines the error types used throughout Propex,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Propex operations.
pub type PropexResult<T> = Result<T, PropexError>;

/// The main error type for Propex operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropexError {
    /// An input field violates its declared range constraint.
    #[error("{name} value {value} is out of bounds [{min}, {max}]")]
    OutOfBounds {
        /// Name of the field that is out of bounds.
        name: &'static str,
        /// The value that was provided.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// An input is malformed in a way a simple range cannot express
    /// (non-finite values, cross-field constraints).
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl PropexError {
    /// Creates an out-of-bounds error.
    #[must_use]
    pub fn out_of_bounds(name: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfBounds {
            name,
            value,
            min,
            max,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = PropexError::out_of_bounds("down_payment_pct", 120.0, 0.0, 100.0);
        assert!(err.to_string().contains("down_payment_pct"));
        assert!(err.to_string().contains("120"));
    }

    #[test]
    fn test_invalid_input_display() {
        let err = PropexError::invalid_input("year_of_sale 25 exceeds loan_term_years 20");
        assert!(err.to_string().contains("exceeds"));
    }
}
