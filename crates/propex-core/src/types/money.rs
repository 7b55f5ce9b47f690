//! Money type for currency amounts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A currency amount.
///
/// Amounts carry IEEE double-precision semantics end to end: the engine never
/// rounds internally, formatting to two decimals is a presentation concern.
///
/// # Example
///
/// ```rust
/// use propex_core::types::Money;
///
/// let price = Money::new(300_000.0);
/// assert_eq!(price.as_f64(), 300_000.0);
/// assert_eq!(price.to_string(), "300000.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[repr(transparent)]
pub struct Money(f64);

impl Money {
    /// Creates a new amount.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw amount.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Scales the amount by a dimensionless factor.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Money::new(300_000.0);
        let b = Money::new(60_000.0);
        assert_eq!((a - b).as_f64(), 240_000.0);
        assert_eq!((a + b).as_f64(), 360_000.0);
        assert_eq!(b.scale(0.5).as_f64(), 30_000.0);
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Money::new(1234.5).to_string(), "1234.50");
    }

    #[test]
    fn test_negative() {
        assert!(Money::new(-1.0).is_negative());
        assert!(!Money::new(0.0).is_negative());
    }
}
