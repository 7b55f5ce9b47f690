//! CLI command implementations.

pub mod analyze;
pub mod compare;
pub mod series;

// Re-export submodules for convenience
pub use analyze::AnalyzeArgs;
pub use compare::CompareArgs;
pub use series::SeriesArgs;

use std::path::Path;

use clap::Args;

use propex_core::ScenarioInput;

use crate::error::{CliError, CliResult};

/// Scenario inputs shared by the analyze and series commands.
///
/// A scenario file (TOML or JSON) supplies the base values; any flag set on
/// the command line overrides the corresponding field. Without a file the
/// base is the default scenario.
#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Scenario file (.toml or .json)
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Purchase price of the property
    #[arg(long)]
    pub property_price: Option<f64>,

    /// Down payment as a percentage of the price (0-100)
    #[arg(long)]
    pub down_payment_pct: Option<f64>,

    /// Loan term in years
    #[arg(long)]
    pub loan_term_years: Option<u32>,

    /// Annual nominal interest rate percentage
    #[arg(long)]
    pub interest_rate_pct: Option<f64>,

    /// Number of rentable units
    #[arg(long)]
    pub num_units: Option<u32>,

    /// Monthly rent per unit
    #[arg(long)]
    pub rent_per_unit: Option<f64>,

    /// Vacancy rate percentage (0-100)
    #[arg(long)]
    pub vacancy_rate_pct: Option<f64>,

    /// Property and other taxes, percent of gross rent
    #[arg(long)]
    pub tax_rate_pct: Option<f64>,

    /// Management fee, percent of gross rent
    #[arg(long)]
    pub management_fee_pct: Option<f64>,

    /// Repair cost, percent of gross rent
    #[arg(long)]
    pub repair_cost_pct: Option<f64>,

    /// Annual appreciation percentage (may be negative)
    #[arg(long, allow_hyphen_values = true)]
    pub resale_growth_pct: Option<f64>,

    /// Year of sale (1-based, within the loan term)
    #[arg(long)]
    pub year_of_sale: Option<u32>,
}

impl ScenarioArgs {
    /// Resolves the arguments into a validated scenario.
    pub fn resolve(&self) -> CliResult<ScenarioInput> {
        let mut scenario = match &self.scenario {
            Some(path) => load_scenario(path)?,
            None => ScenarioInput::default(),
        };

        if let Some(v) = self.property_price {
            scenario.property_price = v.into();
        }
        if let Some(v) = self.down_payment_pct {
            scenario.down_payment_pct = v.into();
        }
        if let Some(v) = self.loan_term_years {
            scenario.loan_term_years = v;
        }
        if let Some(v) = self.interest_rate_pct {
            scenario.interest_rate_pct = v.into();
        }
        if let Some(v) = self.num_units {
            scenario.num_units = v;
        }
        if let Some(v) = self.rent_per_unit {
            scenario.rent_per_unit = v.into();
        }
        if let Some(v) = self.vacancy_rate_pct {
            scenario.vacancy_rate_pct = v.into();
        }
        if let Some(v) = self.tax_rate_pct {
            scenario.tax_rate_pct = v.into();
        }
        if let Some(v) = self.management_fee_pct {
            scenario.management_fee_pct = v.into();
        }
        if let Some(v) = self.repair_cost_pct {
            scenario.repair_cost_pct = v.into();
        }
        if let Some(v) = self.resale_growth_pct {
            scenario.resale_growth_pct = v.into();
        }
        if let Some(v) = self.year_of_sale {
            scenario.year_of_sale = v;
        }

        scenario.validate()?;
        Ok(scenario)
    }
}

/// Loads a scenario from a TOML or JSON file and validates it.
pub fn load_scenario(path: &str) -> CliResult<ScenarioInput> {
    let contents = std::fs::read_to_string(path)?;

    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let scenario: ScenarioInput = match extension.as_str() {
        "toml" => toml::from_str(&contents).map_err(|e| CliError::ParseFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?,
        "json" => serde_json::from_str(&contents).map_err(|e| CliError::ParseFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })?,
        other => return Err(CliError::UnsupportedFormat(other.to_string())),
    };

    scenario.validate()?;
    Ok(scenario)
}
