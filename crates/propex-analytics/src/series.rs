//! Per-year projection series for charting.
//!
//! The series pairs the projected resale value with the cumulative net
//! rental income for every holding year. Net rental income is constant
//! across years (no rent growth, no reinvestment), so the cumulative track
//! is linear in the year index; the resale track compounds.

use serde::{Deserialize, Serialize};

use propex_core::ScenarioInput;

use crate::appreciation::resale_price;
use crate::error::AnalyticsResult;
use crate::income::net_annual_rental_income;

/// One year of the projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    /// 1-based year index.
    pub year: u32,
    /// Projected property value at the end of this year.
    pub resale_value: f64,
    /// Net rental income accumulated through this year.
    pub cumulative_net_rental: f64,
}

/// Ordered projection from year 1 through the year of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct YearSeries(Vec<YearPoint>);

impl YearSeries {
    /// Returns the projected years in order.
    #[must_use]
    pub fn points(&self) -> &[YearPoint] {
        &self.0
    }

    /// Returns the number of projected years.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the final year of the projection, if any.
    #[must_use]
    pub fn last(&self) -> Option<&YearPoint> {
        self.0.last()
    }

    /// Iterates over the projected years.
    pub fn iter(&self) -> std::slice::Iter<'_, YearPoint> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a YearSeries {
    type Item = &'a YearPoint;
    type IntoIter = std::slice::Iter<'a, YearPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Projects the resale value and cumulative net rental income for each year
/// from 1 through the year of sale.
///
/// The result always has exactly `year_of_sale` points with strictly
/// increasing years. Monotonicity of the value tracks is not guaranteed in
/// general: negative growth or negative net income produce decreasing
/// series, which is correct behavior.
///
/// # Errors
///
/// Returns [`crate::AnalyticsError::Scenario`] if the input violates its
/// range constraints.
pub fn project_year_series(scenario: &ScenarioInput) -> AnalyticsResult<YearSeries> {
    scenario.validate()?;

    let net_rental = net_annual_rental_income(scenario);
    let points = (1..=scenario.year_of_sale)
        .map(|year| YearPoint {
            year,
            resale_value: resale_price(scenario, year),
            cumulative_net_rental: net_rental * f64::from(year),
        })
        .collect();

    Ok(YearSeries(points))
}
