//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::{AnalyzeArgs, ChartArgs, FormatArgs};

/// Stockpulse - Stock sentiment formatting and aggregation CLI
#[derive(Parser)]
#[command(name = "stockpulse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Formatting defaults (TOML)
    #[arg(short, long, global = true, env = "STOCKPULSE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Format a single value for display
    Format(FormatArgs),

    /// Aggregate a JSON file of analysed posts into dashboard series
    Analyze(AnalyzeArgs),

    /// Build the dashboard's Plotly figures from a JSON file of posts
    Chart(ChartArgs),
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
    /// Minimal output (just the value)
    Minimal,
}
