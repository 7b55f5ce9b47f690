//! Financing calculations: down payment, loan amount, mortgage payment.
//!
//! ## Formulas
//!
//! ```text
//! down_payment = price × down_payment_pct / 100
//! loan         = price − down_payment
//! payment      = (loan × r) / (1 − (1 + r)^(−n))     r = annual rate / 12
//!                                                    n = term years × 12
//! ```
//!
//! The closed-form amortizing payment is numerically unstable as the rate
//! approaches zero; a zero rate is computed as straight principal
//! repayment `loan / n` instead.

use propex_core::ScenarioInput;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Calculates the upfront cash portion of the purchase price.
#[must_use]
pub fn down_payment_amount(scenario: &ScenarioInput) -> f64 {
    scenario.property_price.as_f64() * scenario.down_payment_pct.as_fraction()
}

/// Calculates the financed portion of the purchase price.
#[must_use]
pub fn loan_amount(scenario: &ScenarioInput) -> f64 {
    scenario.property_price.as_f64() - down_payment_amount(scenario)
}

/// Calculates the fixed monthly payment that fully repays principal and
/// interest over the loan term.
///
/// # Arguments
///
/// * `loan` - Financed amount
/// * `annual_rate_pct` - Annual nominal interest rate as a percentage
/// * `term_years` - Loan term in years
///
/// # Errors
///
/// Returns [`AnalyticsError::DivisionByZero`] if the term is zero, since a
/// zero-length loan has no payment schedule.
pub fn monthly_mortgage_payment(
    loan: f64,
    annual_rate_pct: f64,
    term_years: u32,
) -> AnalyticsResult<f64> {
    if term_years == 0 {
        return Err(AnalyticsError::division_by_zero("num_payments"));
    }
    // The month count stays in f64 so no term can overflow an integer width.
    let num_payments = f64::from(term_years) * 12.0;

    let monthly_rate = (annual_rate_pct / 100.0) / 12.0;
    if monthly_rate == 0.0 {
        // Zero-rate loans amortize as straight principal repayment.
        return Ok(loan / num_payments);
    }

    let discount = 1.0 - (1.0 + monthly_rate).powf(-num_payments);
    Ok((loan * monthly_rate) / discount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_down_payment_and_loan_split() {
        let scenario = ScenarioInput::builder()
            .property_price(300_000.0)
            .down_payment_pct(20.0)
            .build()
            .unwrap();
        assert_relative_eq!(down_payment_amount(&scenario), 60_000.0);
        assert_relative_eq!(loan_amount(&scenario), 240_000.0);
    }

    #[test]
    fn test_monthly_payment_reference_value() {
        // 240k over 20 years at 4%: standard amortization tables give 1454.35.
        let payment = monthly_mortgage_payment(240_000.0, 4.0, 20).unwrap();
        assert_relative_eq!(payment, 1454.35, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_is_straight_principal() {
        let payment = monthly_mortgage_payment(240_000.0, 0.0, 20).unwrap();
        assert_relative_eq!(payment, 240_000.0 / 240.0);
    }

    #[test]
    fn test_zero_term_rejected() {
        let err = monthly_mortgage_payment(240_000.0, 4.0, 0).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::DivisionByZero {
                quantity: "num_payments"
            }
        ));
    }

    #[test]
    fn test_extreme_term_stays_finite() {
        // Far beyond any cap the validator allows, the discount factor
        // saturates and the payment degenerates to pure interest.
        let payment = monthly_mortgage_payment(240_000.0, 4.0, 400_000_000).unwrap();
        assert!(payment.is_finite());
        assert_relative_eq!(payment, 240_000.0 * (0.04 / 12.0), epsilon = 1e-6);
    }

    #[test]
    fn test_payment_increases_with_rate() {
        let low = monthly_mortgage_payment(240_000.0, 2.0, 20).unwrap();
        let high = monthly_mortgage_payment(240_000.0, 6.0, 20).unwrap();
        assert!(high > low);
    }
}
