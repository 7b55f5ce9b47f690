//! Series command implementation.
//!
//! Prints the per-year projection the dashboard chart would plot.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use propex_analytics::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::ScenarioArgs;
use crate::output::{format_money, print_header};

/// Arguments for the series command.
#[derive(Args, Debug)]
pub struct SeriesArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Resale Value")]
    resale_value: String,
    #[tabled(rename = "Cumulative Net Rental Income")]
    cumulative_net_rental: String,
}

/// Execute the series command.
pub fn execute(args: SeriesArgs, format: OutputFormat) -> Result<()> {
    let scenario = args.scenario.resolve()?;
    let series = project_year_series(&scenario)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(series.points())?);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for point in &series {
                wtr.serialize(point)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Table | OutputFormat::Minimal => {
            let currency = scenario.currency;
            let rows: Vec<YearRow> = series
                .iter()
                .map(|point| YearRow {
                    year: point.year,
                    resale_value: format_money(point.resale_value, currency),
                    cumulative_net_rental: format_money(point.cumulative_net_rental, currency),
                })
                .collect();

            if format == OutputFormat::Table {
                print_header("Resale Value & Cumulative Rental Income Over Time");
            }
            crate::output::print_output(&rows, format)?;
        }
    }

    Ok(())
}
