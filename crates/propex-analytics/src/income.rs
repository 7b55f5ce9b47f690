//! Rental income calculations.
//!
//! ## Formulas
//!
//! ```text
//! gross     = units × rent_per_unit
//! effective = gross × (1 − vacancy/100)
//! annual    = effective × 12
//! net       = annual × (1 − (tax + management + repair)/100)
//! ```
//!
//! The three expense percentages are summed, not compounded. A sum above 100
//! yields a negative net income; that is a legal outcome, not an error, and
//! it propagates unclamped into the ROI.

use propex_core::ScenarioInput;

/// Calculates the total monthly rent across all units at full occupancy.
#[must_use]
pub fn gross_monthly_rent(scenario: &ScenarioInput) -> f64 {
    f64::from(scenario.num_units) * scenario.rent_per_unit.as_f64()
}

/// Calculates the monthly rent after the vacancy haircut.
#[must_use]
pub fn effective_monthly_rent(scenario: &ScenarioInput) -> f64 {
    gross_monthly_rent(scenario) * (1.0 - scenario.vacancy_rate_pct.as_fraction())
}

/// Calculates the annual rental income before operating expenses.
#[must_use]
pub fn annual_rental_income(scenario: &ScenarioInput) -> f64 {
    effective_monthly_rent(scenario) * 12.0
}

/// Calculates the annual rental income net of taxes, management fee, and
/// repair costs.
#[must_use]
pub fn net_annual_rental_income(scenario: &ScenarioInput) -> f64 {
    let expense_fraction = (scenario.tax_rate_pct.as_percent()
        + scenario.management_fee_pct.as_percent()
        + scenario.repair_cost_pct.as_percent())
        / 100.0;
    annual_rental_income(scenario) * (1.0 - expense_fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_scenario() -> ScenarioInput {
        ScenarioInput::builder()
            .num_units(1)
            .rent_per_unit(1_200.0)
            .vacancy_rate_pct(5.0)
            .tax_rate_pct(10.0)
            .management_fee_pct(8.0)
            .repair_cost_pct(3.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_income_chain() {
        let scenario = reference_scenario();
        assert_relative_eq!(gross_monthly_rent(&scenario), 1_200.0);
        assert_relative_eq!(effective_monthly_rent(&scenario), 1_140.0);
        assert_relative_eq!(annual_rental_income(&scenario), 13_680.0);
        assert_relative_eq!(net_annual_rental_income(&scenario), 13_680.0 * 0.79);
    }

    #[test]
    fn test_multi_unit_scaling() {
        let scenario = ScenarioInput::builder()
            .num_units(4)
            .rent_per_unit(900.0)
            .build()
            .unwrap();
        assert_relative_eq!(gross_monthly_rent(&scenario), 3_600.0);
    }

    #[test]
    fn test_expenses_are_summed_not_compounded() {
        // 10 + 8 + 3 = 21% off, not 1 - 0.9*0.92*0.97.
        let scenario = reference_scenario();
        let compounded = 13_680.0 * 0.90 * 0.92 * 0.97;
        let summed = net_annual_rental_income(&scenario);
        assert_relative_eq!(summed, 13_680.0 * 0.79);
        assert!((summed - compounded).abs() > 1.0);
    }

    #[test]
    fn test_expense_sum_above_100_goes_negative() {
        let scenario = ScenarioInput::builder()
            .tax_rate_pct(60.0)
            .management_fee_pct(30.0)
            .repair_cost_pct(20.0)
            .build()
            .unwrap();
        assert!(net_annual_rental_income(&scenario) < 0.0);
    }

    #[test]
    fn test_full_vacancy_zeroes_income() {
        let scenario = ScenarioInput::builder()
            .vacancy_rate_pct(100.0)
            .build()
            .unwrap();
        assert_relative_eq!(annual_rental_income(&scenario), 0.0);
    }
}
