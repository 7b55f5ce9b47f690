//! Analyze command implementation.
//!
//! Evaluates one scenario and prints its derived metrics.

use anyhow::Result;
use clap::Args;

use propex_analytics::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::ScenarioArgs;
use crate::output::{print_header, KeyValue};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Expected annual return of the benchmark index, as a percentage
    #[arg(long, default_value = "7.0")]
    pub benchmark_return: f64,
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, format: OutputFormat) -> Result<()> {
    let scenario = args.scenario.resolve()?;
    let result = compute_scenario(&scenario)?;
    let benchmark = benchmark_growth(
        result.down_payment_amount,
        args.benchmark_return,
        scenario.year_of_sale,
    );

    let currency = scenario.currency;
    let mut rows = Vec::new();

    // Scenario details
    rows.push(KeyValue::new("Property Type", scenario.property_type.to_string()));
    rows.push(KeyValue::from_money(
        "Property Price",
        scenario.property_price.as_f64(),
        currency,
    ));
    rows.push(KeyValue::new(
        "Year of Sale",
        scenario.year_of_sale.to_string(),
    ));
    rows.push(KeyValue::new("", "")); // Separator

    // Financing
    rows.push(KeyValue::from_money(
        "Down Payment",
        result.down_payment_amount,
        currency,
    ));
    rows.push(KeyValue::from_money("Loan Amount", result.loan_amount, currency));
    rows.push(KeyValue::from_money(
        "Monthly Mortgage Payment",
        result.monthly_mortgage_payment,
        currency,
    ));
    rows.push(KeyValue::new("", "")); // Separator

    // Income and returns
    rows.push(KeyValue::from_money(
        "Total Monthly Rent",
        result.gross_monthly_rent,
        currency,
    ));
    rows.push(KeyValue::from_money(
        "Net Annual Rental Income",
        result.net_annual_rental_income,
        currency,
    ));
    rows.push(KeyValue::from_money(
        format!("Resale Price at Year {}", scenario.year_of_sale),
        result.resale_price,
        currency,
    ));
    rows.push(KeyValue::from_percent("ROI on Down Payment", result.roi_pct));
    rows.push(KeyValue::from_money(
        "Benchmark Equivalent Growth",
        benchmark,
        currency,
    ));

    match format {
        OutputFormat::Table => {
            print_header("ROI Analysis");
            crate::output::print_output(&rows, format)?;
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Csv => {
            crate::output::print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            println!(
                "ROI: {:.2}%, Net Rental: {:.2}, Resale: {:.2}",
                result.roi_pct, result.net_annual_rental_income, result.resale_price
            );
        }
    }

    Ok(())
}
