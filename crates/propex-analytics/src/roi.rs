//! Single-scenario ROI evaluation.
//!
//! This module aggregates the financing, income, and appreciation
//! calculations into one result record per scenario.
//!
//! ## Formula
//!
//! ```text
//! total_annual_returns = net_annual_rental_income + capital_gains / year_of_sale
//! roi_pct              = total_annual_returns / down_payment × 100
//! ```
//!
//! The ROI amortizes the capital gain linearly over the holding period and
//! relates the resulting annual return to the cash actually invested (the
//! down payment), not the full purchase price.

use serde::{Deserialize, Serialize};

use propex_core::ScenarioInput;

use crate::appreciation::{capital_gains, resale_price};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::financing::{down_payment_amount, loan_amount, monthly_mortgage_payment};
use crate::income::{gross_monthly_rent, net_annual_rental_income};

/// Derived metrics for a single scenario.
///
/// Every field is recomputed from scratch on each evaluation; results carry
/// no identity beyond their values. All amounts are raw f64 in the scenario's
/// display currency; rounding is left to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Upfront cash invested.
    pub down_payment_amount: f64,
    /// Financed portion of the purchase price.
    pub loan_amount: f64,
    /// Amortized monthly loan payment. Informational only: it does not feed
    /// the ROI chain, so financing cost never reduces the headline figure.
    pub monthly_mortgage_payment: f64,
    /// Total monthly rent across all units at full occupancy.
    pub gross_monthly_rent: f64,
    /// Annual rental income net of vacancy and operating expenses.
    pub net_annual_rental_income: f64,
    /// Projected property value at the year of sale.
    pub resale_price: f64,
    /// Appreciation between purchase and the year of sale.
    pub capital_gains: f64,
    /// Net rental income plus the capital gain amortized per holding year.
    pub total_annual_returns: f64,
    /// Headline return on the down payment, as a percentage.
    pub roi_pct: f64,
}

/// Evaluates a scenario into its derived metrics.
///
/// # Errors
///
/// Returns [`AnalyticsError::Scenario`] if the input violates its range
/// constraints, and [`AnalyticsError::DivisionByZero`] if the down payment
/// is zero (the ROI divisor) or the year of sale is zero (the capital-gains
/// amortization divisor). The division guards surface typed failures rather
/// than letting NaN or infinity escape into the results.
pub fn compute_scenario(scenario: &ScenarioInput) -> AnalyticsResult<ScenarioResult> {
    scenario.validate()?;

    let down_payment = down_payment_amount(scenario);
    let loan = loan_amount(scenario);

    if down_payment == 0.0 {
        return Err(AnalyticsError::division_by_zero("down_payment_amount"));
    }
    if scenario.year_of_sale == 0 {
        return Err(AnalyticsError::division_by_zero("year_of_sale"));
    }

    let payment = monthly_mortgage_payment(
        loan,
        scenario.interest_rate_pct.as_percent(),
        scenario.loan_term_years,
    )?;

    let net_rental = net_annual_rental_income(scenario);
    let resale = resale_price(scenario, scenario.year_of_sale);
    let gains = capital_gains(scenario, scenario.year_of_sale);

    let total_annual_returns = net_rental + gains / f64::from(scenario.year_of_sale);
    let roi_pct = (total_annual_returns / down_payment) * 100.0;

    log::debug!(
        "scenario evaluated: down_payment={:.2} net_rental={:.2} resale={:.2} roi_pct={:.4}",
        down_payment,
        net_rental,
        resale,
        roi_pct
    );

    Ok(ScenarioResult {
        down_payment_amount: down_payment,
        loan_amount: loan,
        monthly_mortgage_payment: payment,
        gross_monthly_rent: gross_monthly_rent(scenario),
        net_annual_rental_income: net_rental,
        resale_price: resale,
        capital_gains: gains,
        total_annual_returns,
        roi_pct,
    })
}
