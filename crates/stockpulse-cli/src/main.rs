//! Stockpulse CLI - Formatting and aggregation for stock sentiment dashboards.
//!
//! # Usage
//!
//! ```bash
//! # Format single values
//! stockpulse format currency -- -1234.56
//! stockpulse format date 2023-06-01T12:00:00Z --style long
//! stockpulse format ago 2023-06-01T11:55:00Z --now 2023-06-01T12:00:00Z
//!
//! # Aggregate a records file
//! stockpulse analyze posts.json --keyword apple --format json
//!
//! # Build dashboard figures
//! stockpulse chart posts.json --output figures.json
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

    // Initialize logging; stdout is reserved for command output
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config.as_deref())?;
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Format(args) => commands::format::execute(args, &config, format)?,
        Commands::Analyze(args) => commands::analyze::execute(args, &config, format, cli.quiet)?,
        Commands::Chart(args) => commands::chart::execute(args, &config, format, cli.quiet)?,
    }

    Ok(())
}
