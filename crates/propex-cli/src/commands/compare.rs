//! Compare command implementation.
//!
//! Evaluates two scenario files independently and prints them side by side,
//! optionally writing a plain-text report.

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use propex_analytics::prelude::*;
use propex_core::ScenarioInput;

use crate::cli::OutputFormat;
use crate::commands::load_scenario;
use crate::output::{format_money, format_percent, print_header, print_success};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First scenario file (.toml or .json)
    #[arg(long)]
    pub scenario_a: String,

    /// Second scenario file (.toml or .json)
    #[arg(long)]
    pub scenario_b: String,

    /// Write a plain-text comparison report to this file
    #[arg(long)]
    pub report: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Scenario A")]
    scenario_a: String,
    #[tabled(rename = "Scenario B")]
    scenario_b: String,
}

/// Execute the compare command.
pub fn execute(args: CompareArgs, format: OutputFormat) -> Result<()> {
    let a = load_scenario(&args.scenario_a)?;
    let b = load_scenario(&args.scenario_b)?;
    let (result_a, result_b) = compare_scenarios(&a, &b)?;

    let rows = comparison_rows(&a, &result_a, &b, &result_b);

    match format {
        OutputFormat::Table => {
            print_header("Scenario Comparison");
            crate::output::print_output(&rows, format)?;
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&[&result_a, &result_b])?
            );
        }
        OutputFormat::Csv => {
            crate::output::print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            println!(
                "A: ROI {:.2}%  B: ROI {:.2}%",
                result_a.roi_pct, result_b.roi_pct
            );
        }
    }

    if let Some(path) = &args.report {
        std::fs::write(path, render_report(&rows))?;
        print_success(&format!("Report written to {path}"));
    }

    Ok(())
}

fn comparison_rows(
    a: &ScenarioInput,
    result_a: &ScenarioResult,
    b: &ScenarioInput,
    result_b: &ScenarioResult,
) -> Vec<ComparisonRow> {
    vec![
        ComparisonRow {
            metric: "ROI on Down Payment".to_string(),
            scenario_a: format_percent(result_a.roi_pct),
            scenario_b: format_percent(result_b.roi_pct),
        },
        ComparisonRow {
            metric: "Resale Price".to_string(),
            scenario_a: format_money(result_a.resale_price, a.currency),
            scenario_b: format_money(result_b.resale_price, b.currency),
        },
        ComparisonRow {
            metric: "Net Annual Rental Income".to_string(),
            scenario_a: format_money(result_a.net_annual_rental_income, a.currency),
            scenario_b: format_money(result_b.net_annual_rental_income, b.currency),
        },
        ComparisonRow {
            metric: "Down Payment".to_string(),
            scenario_a: format_money(result_a.down_payment_amount, a.currency),
            scenario_b: format_money(result_b.down_payment_amount, b.currency),
        },
        ComparisonRow {
            metric: "Monthly Mortgage Payment".to_string(),
            scenario_a: format_money(result_a.monthly_mortgage_payment, a.currency),
            scenario_b: format_money(result_b.monthly_mortgage_payment, b.currency),
        },
    ]
}

/// Renders the comparison as a fixed-width plain-text report.
fn render_report(rows: &[ComparisonRow]) -> String {
    let mut report = String::new();
    let _ = writeln!(report, "Propex Scenario Comparison");
    let _ = writeln!(report, "==========================");
    let _ = writeln!(report);
    let _ = writeln!(
        report,
        "{:<28} {:>22} {:>22}",
        "Metric", "Scenario A", "Scenario B"
    );
    for row in rows {
        let _ = writeln!(
            report,
            "{:<28} {:>22} {:>22}",
            row.metric, row.scenario_a, row.scenario_b
        );
    }
    report
}
