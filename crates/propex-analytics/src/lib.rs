//! # Propex Analytics
//!
//! Calculation engine for real estate investment ROI analysis.
//!
//! This crate maps a validated [`ScenarioInput`](propex_core::ScenarioInput)
//! to its derived metrics:
//!
//! - **Financing**: down payment, loan amount, amortized monthly payment
//! - **Income**: gross, effective, and net rental income
//! - **Appreciation**: projected resale price and capital gains
//! - **ROI**: the headline return-on-down-payment figure
//! - **Series**: per-year resale value and cumulative rental income for charting
//! - **Compare**: independent side-by-side evaluation of two scenarios
//! - **Benchmark**: hypothetical index growth of the down payment
//!
//! ## Architecture
//!
//! Every function here is pure and synchronous: each call recomputes its
//! outputs from the scenario alone, holds no shared state, and is therefore
//! trivially safe to invoke concurrently. `propex-analytics` depends on
//! `propex-core` for input types; `propex-core` does not depend on this
//! crate, so scenario definitions remain calculation-free.
//!
//! ## Usage
//!
//! ```rust
//! use propex_core::ScenarioInput;
//! use propex_analytics::prelude::*;
//!
//! let scenario = ScenarioInput::builder().build().unwrap();
//! let result = compute_scenario(&scenario).unwrap();
//! assert!(result.roi_pct > 0.0);
//!
//! let series = project_year_series(&scenario).unwrap();
//! assert_eq!(series.len() as u32, scenario.year_of_sale);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::uninlined_format_args)]

pub mod appreciation;
pub mod benchmark;
pub mod compare;
pub mod error;
pub mod financing;
pub mod income;
pub mod roi;
pub mod series;

// Re-export the error type
pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use propex_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::appreciation::{capital_gains, resale_price};
    pub use crate::benchmark::benchmark_growth;
    pub use crate::compare::compare_scenarios;
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::financing::{down_payment_amount, loan_amount, monthly_mortgage_payment};
    pub use crate::income::{
        annual_rental_income, effective_monthly_rent, gross_monthly_rent,
        net_annual_rental_income,
    };
    pub use crate::roi::{compute_scenario, ScenarioResult};
    pub use crate::series::{project_year_series, YearPoint, YearSeries};
}
