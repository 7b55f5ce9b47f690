//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AnalyzeArgs, CompareArgs, SeriesArgs};

/// Propex - Real estate investment ROI analytics CLI
#[derive(Parser)]
#[command(name = "propex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a scenario (ROI, income, financing, resale projection)
    Analyze(AnalyzeArgs),

    /// Print the per-year resale value and cumulative rental income series
    Series(SeriesArgs),

    /// Compare two scenarios side by side
    Compare(CompareArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline figures)
    Minimal,
}
