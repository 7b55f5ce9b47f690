//! # Propex Core
//!
//! Core types and validation for the Propex real estate ROI analytics library.
//!
//! This crate provides the foundational building blocks used throughout Propex:
//!
//! - **Types**: Domain-specific types like `Money`, `Rate`, `Currency`, `PropertyType`
//! - **Scenario**: The `ScenarioInput` value object describing a purchase,
//!   its financing, and the operating assumptions, built through a validating
//!   builder
//! - **Errors**: Structured error types for out-of-range and malformed inputs
//!
//! ## Design Philosophy
//!
//! - **Fail Fast**: range constraints are enforced when a scenario is
//!   constructed, not when it is evaluated, so the engine can be driven
//!   headlessly (tests, batch sweeps) without a UI guarding the inputs
//! - **Type Safety**: newtypes prevent mixing amounts and percentages
//! - **Explicit Over Implicit**: clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use propex_core::prelude::*;
//!
//! let scenario = ScenarioInput::builder()
//!     .property_price(300_000.0)
//!     .down_payment_pct(20.0)
//!     .loan_term_years(20)
//!     .interest_rate_pct(4.0)
//!     .num_units(1)
//!     .rent_per_unit(1_200.0)
//!     .vacancy_rate_pct(5.0)
//!     .tax_rate_pct(10.0)
//!     .management_fee_pct(8.0)
//!     .repair_cost_pct(3.0)
//!     .resale_growth_pct(3.0)
//!     .year_of_sale(10)
//!     .build()
//!     .unwrap();
//! assert_eq!(scenario.year_of_sale, 10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod scenario;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{PropexError, PropexResult};
    pub use crate::scenario::{ScenarioBuilder, ScenarioInput, MAX_LOAN_TERM_YEARS};
    pub use crate::types::{Currency, Money, PropertyType, Rate};
}

// Re-export commonly used types at crate root
pub use error::{PropexError, PropexResult};
pub use scenario::{ScenarioBuilder, ScenarioInput, MAX_LOAN_TERM_YEARS};
pub use types::{Currency, Money, PropertyType, Rate};
