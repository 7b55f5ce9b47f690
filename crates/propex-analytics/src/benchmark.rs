//! Benchmark growth of the down payment.
//!
//! ## Formula
//!
//! ```text
//! benchmark = down_payment × (1 + return/100)^years
//! ```
//!
//! Answers "what would the same cash be worth if parked in a reference index
//! instead of the property" over the holding period.

/// Projects the down payment compounded at a benchmark annual return.
///
/// # Arguments
///
/// * `down_payment` - Cash invested at purchase
/// * `annual_return_pct` - Expected annual index return as a percentage
/// * `years` - Holding period in years
#[must_use]
pub fn benchmark_growth(down_payment: f64, annual_return_pct: f64, years: u32) -> f64 {
    down_payment * (1.0 + annual_return_pct / 100.0).powf(f64::from(years))
}
