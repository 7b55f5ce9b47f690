//! Integration tests validated against hand-computed reference values.
//!
//! Each case runs the full evaluation pipeline (financing, income,
//! appreciation, ROI, series, benchmark) against expectations computed
//! independently from the formula definitions.

use approx::assert_relative_eq;

use propex_analytics::prelude::*;
use propex_core::types::{Currency, PropertyType};
use propex_core::ScenarioInput;

/// Expected metrics for one reference scenario.
struct Expected {
    down_payment_amount: f64,
    loan_amount: f64,
    monthly_mortgage_payment: f64,
    gross_monthly_rent: f64,
    net_annual_rental_income: f64,
    resale_price: f64,
    capital_gains: f64,
    total_annual_returns: f64,
    roi_pct: f64,
}

fn assert_matches(result: &ScenarioResult, expected: &Expected) {
    assert_relative_eq!(
        result.down_payment_amount,
        expected.down_payment_amount,
        epsilon = 1e-6
    );
    assert_relative_eq!(result.loan_amount, expected.loan_amount, epsilon = 1e-6);
    assert_relative_eq!(
        result.monthly_mortgage_payment,
        expected.monthly_mortgage_payment,
        epsilon = 1e-6
    );
    assert_relative_eq!(
        result.gross_monthly_rent,
        expected.gross_monthly_rent,
        epsilon = 1e-6
    );
    assert_relative_eq!(
        result.net_annual_rental_income,
        expected.net_annual_rental_income,
        epsilon = 1e-6
    );
    assert_relative_eq!(result.resale_price, expected.resale_price, epsilon = 1e-6);
    assert_relative_eq!(result.capital_gains, expected.capital_gains, epsilon = 1e-6);
    assert_relative_eq!(
        result.total_annual_returns,
        expected.total_annual_returns,
        epsilon = 1e-6
    );
    assert_relative_eq!(result.roi_pct, expected.roi_pct, epsilon = 1e-9);
}

#[test]
fn single_unit_apartment_reference_case() {
    // 300k apartment, 20% down, 20y at 4%, 1200/month, sold in year 10.
    let scenario = ScenarioInput::default();
    let result = compute_scenario(&scenario).unwrap();

    assert_matches(
        &result,
        &Expected {
            down_payment_amount: 60_000.0,
            loan_amount: 240_000.0,
            monthly_mortgage_payment: 1_454.352_790_318_582_7,
            gross_monthly_rent: 1_200.0,
            net_annual_rental_income: 10_807.2,
            resale_price: 403_174.913_803_236_7,
            capital_gains: 103_174.913_803_236_68,
            total_annual_returns: 21_124.691_380_323_668,
            roi_pct: 35.207_818_967_206_11,
        },
    );
}

#[test]
fn four_unit_commercial_case() {
    // 500k commercial fourplex, 30% down, 25y at 5.5%, sold in year 15.
    let scenario = ScenarioInput::builder()
        .property_type(PropertyType::Commercial)
        .currency(Currency::EUR)
        .property_price(500_000.0)
        .down_payment_pct(30.0)
        .loan_term_years(25)
        .interest_rate_pct(5.5)
        .num_units(4)
        .rent_per_unit(800.0)
        .vacancy_rate_pct(10.0)
        .tax_rate_pct(12.0)
        .management_fee_pct(6.0)
        .repair_cost_pct(2.0)
        .resale_growth_pct(2.0)
        .year_of_sale(15)
        .build()
        .unwrap();
    let result = compute_scenario(&scenario).unwrap();

    assert_matches(
        &result,
        &Expected {
            down_payment_amount: 150_000.0,
            loan_amount: 350_000.0,
            monthly_mortgage_payment: 2_149.306_222_985_135_3,
            gross_monthly_rent: 3_200.0,
            net_annual_rental_income: 27_648.0,
            resale_price: 672_934.169_162_064_9,
            capital_gains: 172_934.169_162_064_9,
            total_annual_returns: 39_176.944_610_804_33,
            roi_pct: 26.117_963_073_869_55,
        },
    );
}

#[test]
fn interest_free_depreciating_duplex_case() {
    // Edge mix: zero-rate loan, no operating expenses, negative growth.
    let scenario = ScenarioInput::builder()
        .property_type(PropertyType::House)
        .property_price(150_000.0)
        .down_payment_pct(50.0)
        .loan_term_years(30)
        .interest_rate_pct(0.0)
        .num_units(2)
        .rent_per_unit(600.0)
        .vacancy_rate_pct(0.0)
        .tax_rate_pct(0.0)
        .management_fee_pct(0.0)
        .repair_cost_pct(0.0)
        .resale_growth_pct(-2.0)
        .year_of_sale(5)
        .build()
        .unwrap();
    let result = compute_scenario(&scenario).unwrap();

    assert_matches(
        &result,
        &Expected {
            down_payment_amount: 75_000.0,
            loan_amount: 75_000.0,
            // Zero-rate loans amortize as straight principal: 75000 / 360.
            monthly_mortgage_payment: 208.333_333_333_333_34,
            gross_monthly_rent: 1_200.0,
            net_annual_rental_income: 14_400.0,
            resale_price: 135_588.119_519_999_98,
            capital_gains: -14_411.880_480_000_022,
            total_annual_returns: 11_517.623_903_999_996,
            roi_pct: 15.356_831_871_999_995,
        },
    );
}

#[test]
fn series_tracks_match_scenario_metrics() {
    let scenario = ScenarioInput::default();
    let result = compute_scenario(&scenario).unwrap();
    let series = project_year_series(&scenario).unwrap();

    assert_eq!(series.len() as u32, scenario.year_of_sale);

    let last = series.last().unwrap();
    assert_eq!(last.year, scenario.year_of_sale);
    assert_relative_eq!(last.resale_value, result.resale_price);
    assert_relative_eq!(
        last.cumulative_net_rental,
        result.net_annual_rental_income * f64::from(scenario.year_of_sale)
    );
}

#[test]
fn comparison_of_reference_scenarios() {
    let a = ScenarioInput::default();
    let b = ScenarioInput::builder()
        .property_price(500_000.0)
        .down_payment_pct(30.0)
        .loan_term_years(25)
        .interest_rate_pct(5.5)
        .num_units(4)
        .rent_per_unit(800.0)
        .vacancy_rate_pct(10.0)
        .tax_rate_pct(12.0)
        .management_fee_pct(6.0)
        .repair_cost_pct(2.0)
        .resale_growth_pct(2.0)
        .year_of_sale(15)
        .build()
        .unwrap();

    let (result_a, result_b) = compare_scenarios(&a, &b).unwrap();
    assert_relative_eq!(result_a.roi_pct, 35.207_818_967_206_11, epsilon = 1e-9);
    assert_relative_eq!(result_b.roi_pct, 26.117_963_073_869_55, epsilon = 1e-9);

    // Comparison is independent evaluation of the shared formula body.
    assert_eq!(result_a, compute_scenario(&a).unwrap());
    assert_eq!(result_b, compute_scenario(&b).unwrap());
}

#[test]
fn benchmark_growth_of_reference_down_payment() {
    // 60k down payment at the dashboard's 7% default over 10 years.
    let result = compute_scenario(&ScenarioInput::default()).unwrap();
    let growth = benchmark_growth(result.down_payment_amount, 7.0, 10);
    assert_relative_eq!(growth, 118_029.081_437_373_98, epsilon = 1e-6);
}
