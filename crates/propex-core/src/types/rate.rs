//! Rate type for percentage inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A percentage value.
///
/// Scenario inputs are quoted as percentages (e.g., 4.0 for 4%); formulas
/// consume them as fractions. The two accessors keep the conversion explicit
/// so a percent is never fed where a fraction is expected.
///
/// # Example
///
/// ```rust
/// use propex_core::types::Rate;
///
/// let rate = Rate::from_percent(4.0);
/// assert_eq!(rate.as_percent(), 4.0);
/// assert_eq!(rate.as_fraction(), 0.04);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[repr(transparent)]
pub struct Rate(f64);

impl Rate {
    /// Creates a rate from a percentage value (4.0 = 4%).
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        Self(percent)
    }

    /// Creates a rate from a fractional value (0.04 = 4%).
    #[must_use]
    pub fn from_fraction(fraction: f64) -> Self {
        Self(fraction * 100.0)
    }

    /// Returns the rate as a percentage (4.0 for 4%).
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        self.0
    }

    /// Returns the rate as a fraction (percentage / 100).
    #[must_use]
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }

    /// Returns the growth factor `1 + rate` for compounding.
    #[must_use]
    pub fn growth_factor(&self) -> f64 {
        1.0 + self.as_fraction()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<f64> for Rate {
    fn from(percent: f64) -> Self {
        Self(percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percent_fraction_pair() {
        let r = Rate::from_percent(5.0);
        assert_relative_eq!(r.as_fraction(), 0.05);
        assert_relative_eq!(Rate::from_fraction(0.05).as_percent(), 5.0);
    }

    #[test]
    fn test_growth_factor() {
        assert_relative_eq!(Rate::from_percent(3.0).growth_factor(), 1.03);
        assert_relative_eq!(Rate::from_percent(-5.0).growth_factor(), 0.95);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rate::from_percent(4.5).to_string(), "4.5%");
    }
}
