//! Property value appreciation and capital gains.
//!
//! ## Formulas
//!
//! ```text
//! resale_price(y)  = price × (1 + growth/100)^y
//! capital_gains(y) = resale_price(y) − price
//! ```
//!
//! Negative growth is legal down to (but excluding) −100%; gains then come
//! out negative and shrink the ROI, which is the intended behavior.

use propex_core::ScenarioInput;

/// Projects the property value at the end of the given year.
///
/// Year 0 is the purchase itself and returns the purchase price unchanged.
#[must_use]
pub fn resale_price(scenario: &ScenarioInput, year: u32) -> f64 {
    scenario.property_price.as_f64()
        * scenario
            .resale_growth_pct
            .growth_factor()
            .powf(f64::from(year))
}

/// Calculates the appreciation between purchase and the given year.
#[must_use]
pub fn capital_gains(scenario: &ScenarioInput, year: u32) -> f64 {
    resale_price(scenario, year) - scenario.property_price.as_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_projection() {
        let scenario = ScenarioInput::builder()
            .property_price(300_000.0)
            .resale_growth_pct(3.0)
            .build()
            .unwrap();
        // 300000 × 1.03^10
        assert_relative_eq!(resale_price(&scenario, 10), 403_174.9138, epsilon = 0.01);
        assert_relative_eq!(capital_gains(&scenario, 10), 103_174.9138, epsilon = 0.01);
    }

    #[test]
    fn test_zero_growth_is_flat() {
        let scenario = ScenarioInput::builder()
            .property_price(300_000.0)
            .resale_growth_pct(0.0)
            .build()
            .unwrap();
        for year in [1, 5, 10, 20] {
            assert_relative_eq!(resale_price(&scenario, year), 300_000.0);
        }
        assert_relative_eq!(capital_gains(&scenario, 10), 0.0);
    }

    #[test]
    fn test_negative_growth_depreciates() {
        let scenario = ScenarioInput::builder()
            .property_price(200_000.0)
            .resale_growth_pct(-5.0)
            .build()
            .unwrap();
        assert_relative_eq!(resale_price(&scenario, 1), 190_000.0);
        assert!(capital_gains(&scenario, 5) < 0.0);
    }

    #[test]
    fn test_year_zero_is_purchase_price() {
        let scenario = ScenarioInput::builder().property_price(150_000.0).build().unwrap();
        assert_relative_eq!(resale_price(&scenario, 0), 150_000.0);
    }
}
