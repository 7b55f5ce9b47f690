//! Scenario input: the immutable value object the engine evaluates.
//!
//! A [`ScenarioInput`] describes a single property purchase, its financing
//! terms, and the operating assumptions. Construction goes through
//! [`ScenarioBuilder`], which validates every range constraint up front.
//! Scenarios deserialized from a file bypass the builder and must be
//! re-validated with [`ScenarioInput::validate`] before evaluation.

use serde::{Deserialize, Serialize};

use crate::error::{PropexError, PropexResult};
use crate::types::{Currency, Money, PropertyType, Rate};

/// Longest accepted loan term, in years.
pub const MAX_LOAN_TERM_YEARS: u32 = 100;

/// Input parameters for a single investment scenario.
///
/// All percentage fields are quoted as percentages (20.0 = 20%). The engine
/// recomputes every derived value from scratch on each evaluation; a scenario
/// carries no state beyond its fields.
///
/// # Example
///
/// ```rust
/// use propex_core::scenario::ScenarioInput;
///
/// let scenario = ScenarioInput::builder()
///     .property_price(250_000.0)
///     .down_payment_pct(25.0)
///     .build()
///     .unwrap();
/// assert_eq!(scenario.property_price.as_f64(), 250_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInput {
    /// Kind of property (classification metadata, no effect on formulas).
    pub property_type: PropertyType,
    /// Display currency for formatted output (no conversion is performed).
    pub currency: Currency,
    /// Purchase price of the property.
    pub property_price: Money,
    /// Upfront cash portion of the purchase price, in percent of price.
    pub down_payment_pct: Rate,
    /// Loan term in years.
    pub loan_term_years: u32,
    /// Annual nominal interest rate on the loan.
    pub interest_rate_pct: Rate,
    /// Number of rentable units.
    pub num_units: u32,
    /// Monthly rent per unit.
    pub rent_per_unit: Money,
    /// Fraction of rental income lost to unoccupied periods, in percent.
    pub vacancy_rate_pct: Rate,
    /// Property and other taxes, in percent of gross rental income.
    pub tax_rate_pct: Rate,
    /// Management fee, in percent of gross rental income.
    pub management_fee_pct: Rate,
    /// Repair cost, in percent of gross rental income.
    pub repair_cost_pct: Rate,
    /// Annual appreciation of the property value; may be negative.
    pub resale_growth_pct: Rate,
    /// Year in which the property is sold (1-based, within the loan term).
    pub year_of_sale: u32,
}

impl ScenarioInput {
    /// Returns a builder seeded with the default scenario.
    #[must_use]
    pub fn builder() -> ScenarioBuilder {
        ScenarioBuilder::new()
    }

    /// Validates every range constraint.
    ///
    /// # Errors
    ///
    /// Returns [`PropexError::OutOfBounds`] for a field outside its declared
    /// range and [`PropexError::InvalidInput`] for non-finite values or
    /// violated cross-field constraints.
    pub fn validate(&self) -> PropexResult<()> {
        let finite_fields = [
            ("property_price", self.property_price.as_f64()),
            ("down_payment_pct", self.down_payment_pct.as_percent()),
            ("interest_rate_pct", self.interest_rate_pct.as_percent()),
            ("rent_per_unit", self.rent_per_unit.as_f64()),
            ("vacancy_rate_pct", self.vacancy_rate_pct.as_percent()),
            ("tax_rate_pct", self.tax_rate_pct.as_percent()),
            ("management_fee_pct", self.management_fee_pct.as_percent()),
            ("repair_cost_pct", self.repair_cost_pct.as_percent()),
            ("resale_growth_pct", self.resale_growth_pct.as_percent()),
        ];
        for (name, value) in finite_fields {
            if !value.is_finite() {
                return Err(PropexError::invalid_input(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        check_bounds(
            "property_price",
            self.property_price.as_f64(),
            0.0,
            f64::INFINITY,
        )?;
        check_bounds(
            "down_payment_pct",
            self.down_payment_pct.as_percent(),
            0.0,
            100.0,
        )?;
        // Capped so downstream month counts and compounding exponents stay
        // comfortably inside integer range.
        check_bounds(
            "loan_term_years",
            f64::from(self.loan_term_years),
            1.0,
            f64::from(MAX_LOAN_TERM_YEARS),
        )?;
        check_bounds(
            "interest_rate_pct",
            self.interest_rate_pct.as_percent(),
            0.0,
            f64::INFINITY,
        )?;
        check_bounds("num_units", f64::from(self.num_units), 1.0, f64::INFINITY)?;
        check_bounds(
            "rent_per_unit",
            self.rent_per_unit.as_f64(),
            0.0,
            f64::INFINITY,
        )?;
        check_bounds(
            "vacancy_rate_pct",
            self.vacancy_rate_pct.as_percent(),
            0.0,
            100.0,
        )?;
        check_bounds("tax_rate_pct", self.tax_rate_pct.as_percent(), 0.0, f64::INFINITY)?;
        check_bounds(
            "management_fee_pct",
            self.management_fee_pct.as_percent(),
            0.0,
            f64::INFINITY,
        )?;
        check_bounds(
            "repair_cost_pct",
            self.repair_cost_pct.as_percent(),
            0.0,
            f64::INFINITY,
        )?;

        // At -100% yearly growth the compounding base hits zero; below it the
        // projection alternates sign and is meaningless.
        if self.resale_growth_pct.as_percent() <= -100.0 {
            return Err(PropexError::invalid_input(format!(
                "resale_growth_pct must be greater than -100, got {}",
                self.resale_growth_pct.as_percent()
            )));
        }

        if self.year_of_sale < 1 || self.year_of_sale > self.loan_term_years {
            return Err(PropexError::out_of_bounds(
                "year_of_sale",
                f64::from(self.year_of_sale),
                1.0,
                f64::from(self.loan_term_years),
            ));
        }

        Ok(())
    }
}

impl Default for ScenarioInput {
    /// The default scenario: a single 300k apartment at 20% down over a
    /// 20-year 4% loan, renting at 1200/month, sold in year 10.
    fn default() -> Self {
        Self {
            property_type: PropertyType::Apartment,
            currency: Currency::USD,
            property_price: Money::new(300_000.0),
            down_payment_pct: Rate::from_percent(20.0),
            loan_term_years: 20,
            interest_rate_pct: Rate::from_percent(4.0),
            num_units: 1,
            rent_per_unit: Money::new(1_200.0),
            vacancy_rate_pct: Rate::from_percent(5.0),
            tax_rate_pct: Rate::from_percent(10.0),
            management_fee_pct: Rate::from_percent(8.0),
            repair_cost_pct: Rate::from_percent(3.0),
            resale_growth_pct: Rate::from_percent(3.0),
            year_of_sale: 10,
        }
    }
}

fn check_bounds(name: &'static str, value: f64, min: f64, max: f64) -> PropexResult<()> {
    if value < min || value > max {
        return Err(PropexError::out_of_bounds(name, value, min, max));
    }
    Ok(())
}

/// Builder for [`ScenarioInput`] with fail-fast validation.
///
/// Starts from the default scenario so callers only set the fields they care
/// about. [`ScenarioBuilder::build`] runs the full validation pass.
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuilder {
    scenario: ScenarioInput,
}

impl ScenarioBuilder {
    /// Creates a builder seeded with the default scenario.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the property type.
    #[must_use]
    pub fn property_type(mut self, property_type: PropertyType) -> Self {
        self.scenario.property_type = property_type;
        self
    }

    /// Sets the display currency.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.scenario.currency = currency;
        self
    }

    /// Sets the purchase price.
    #[must_use]
    pub fn property_price(mut self, price: f64) -> Self {
        self.scenario.property_price = Money::new(price);
        self
    }

    /// Sets the down payment percentage.
    #[must_use]
    pub fn down_payment_pct(mut self, pct: f64) -> Self {
        self.scenario.down_payment_pct = Rate::from_percent(pct);
        self
    }

    /// Sets the loan term in years.
    #[must_use]
    pub fn loan_term_years(mut self, years: u32) -> Self {
        self.scenario.loan_term_years = years;
        self
    }

    /// Sets the annual nominal interest rate percentage.
    #[must_use]
    pub fn interest_rate_pct(mut self, pct: f64) -> Self {
        self.scenario.interest_rate_pct = Rate::from_percent(pct);
        self
    }

    /// Sets the number of rentable units.
    #[must_use]
    pub fn num_units(mut self, units: u32) -> Self {
        self.scenario.num_units = units;
        self
    }

    /// Sets the monthly rent per unit.
    #[must_use]
    pub fn rent_per_unit(mut self, rent: f64) -> Self {
        self.scenario.rent_per_unit = Money::new(rent);
        self
    }

    /// Sets the vacancy rate percentage.
    #[must_use]
    pub fn vacancy_rate_pct(mut self, pct: f64) -> Self {
        self.scenario.vacancy_rate_pct = Rate::from_percent(pct);
        self
    }

    /// Sets the tax rate percentage.
    #[must_use]
    pub fn tax_rate_pct(mut self, pct: f64) -> Self {
        self.scenario.tax_rate_pct = Rate::from_percent(pct);
        self
    }

    /// Sets the management fee percentage.
    #[must_use]
    pub fn management_fee_pct(mut self, pct: f64) -> Self {
        self.scenario.management_fee_pct = Rate::from_percent(pct);
        self
    }

    /// Sets the repair cost percentage.
    #[must_use]
    pub fn repair_cost_pct(mut self, pct: f64) -> Self {
        self.scenario.repair_cost_pct = Rate::from_percent(pct);
        self
    }

    /// Sets the annual appreciation percentage (may be negative).
    #[must_use]
    pub fn resale_growth_pct(mut self, pct: f64) -> Self {
        self.scenario.resale_growth_pct = Rate::from_percent(pct);
        self
    }

    /// Sets the 1-based year of sale.
    #[must_use]
    pub fn year_of_sale(mut self, year: u32) -> Self {
        self.scenario.year_of_sale = year;
        self
    }

    /// Validates the assembled scenario and returns it.
    pub fn build(self) -> PropexResult<ScenarioInput> {
        self.scenario.validate()?;
        Ok(self.scenario)
    }
}
