//! Property type classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of property a scenario describes.
///
/// Classification metadata only: every property type is evaluated with the
/// same formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PropertyType {
    /// Residential apartment, possibly multi-unit.
    #[default]
    Apartment,
    /// Single-family house.
    House,
    /// Commercial property (office, retail).
    Commercial,
    /// Undeveloped land.
    Land,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Commercial => "Commercial",
            PropertyType::Land => "Land",
        };
        write!(f, "{s}")
    }
}
