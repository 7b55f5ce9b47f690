//! Domain types for real estate ROI analytics.
//!
//! This module provides type-safe representations of the quantities the
//! calculation engine works with:
//!
//! - [`Money`]: A currency amount (IEEE double, no internal rounding)
//! - [`Rate`]: A percentage value with explicit percent/fraction accessors
//! - [`Currency`]: Display currency for reports
//! - [`PropertyType`]: Kind of property being evaluated

mod currency;
mod money;
mod property;
mod rate;

pub use currency::Currency;
pub use money::Money;
pub use property::PropertyType;
pub use rate::Rate;
