//! Propex CLI - Command-line interface for real estate ROI analytics.
//!
//! # Usage
//!
//! ```bash
//! # Analyze a scenario given as flags
//! propex analyze --property-price 300000 --down-payment-pct 20 --year-of-sale 10
//!
//! # Analyze a scenario file (TOML or JSON)
//! propex analyze --scenario rental.toml
//!
//! # Print the per-year projection series
//! propex series --scenario rental.toml --format csv
//!
//! # Compare two scenarios and write a text report
//! propex compare --scenario-a apartment.toml --scenario-b duplex.toml --report report.txt
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up output format
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, format)?,
        Commands::Series(args) => commands::series::execute(args, format)?,
        Commands::Compare(args) => commands::compare::execute(args, format)?,
    }

    Ok(())
}
