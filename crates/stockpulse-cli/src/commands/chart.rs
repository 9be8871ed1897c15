//! Chart command implementation.
//!
//! Writes the dashboard's Plotly figures as JSON.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use stockpulse_charts::Dashboard;
use stockpulse_core::config::FormatConfig;

use crate::cli::OutputFormat;
use crate::commands::load_records;
use crate::error::CliError;
use crate::output::{print_header, print_success, print_table, KeyValue};

/// Arguments for the chart command.
#[derive(Args, Debug)]
pub struct ChartArgs {
    /// JSON array of analysed posts
    pub file: PathBuf,

    /// Write figures here instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep only posts whose text mentions this keyword (repeatable)
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,

    /// Number of keywords to chart (default from config, else 10)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Execute the chart command.
pub fn execute(
    args: ChartArgs,
    config: &FormatConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let records = load_records(&args.file, false, &args.keywords)?;
    let limit = args.limit.unwrap_or(config.top_keywords);
    let dashboard = Dashboard::from_records(&records, limit);
    let json = dashboard.to_json().map_err(CliError::from)?;

    let Some(path) = args.output else {
        println!("{json}");
        return Ok(());
    };

    std::fs::write(&path, json).map_err(CliError::from)?;
    tracing::info!(path = %path.display(), "wrote dashboard figures");

    if quiet {
        return Ok(());
    }
    if format == OutputFormat::Table {
        let summary: Vec<KeyValue> = dashboard
            .figures()
            .iter()
            .map(|(name, figure)| {
                KeyValue::new(*name, format!("{} ({} traces)", figure.layout.title, figure.data.len()))
            })
            .collect();
        print_header("Figures");
        print_table(&summary)?;
    }
    print_success(&format!("Wrote {}", path.display()));

    Ok(())
}
