//! Analyze command implementation.
//!
//! Aggregates a records file into the three dashboard series.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use stockpulse_core::aggregate::DashboardSeries;
use stockpulse_core::config::FormatConfig;
use stockpulse_core::format::Formatter;

use crate::cli::OutputFormat;
use crate::commands::load_records;
use crate::output::{print_csv, print_header, print_json, print_table, print_warning};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// JSON array of analysed posts
    pub file: PathBuf,

    /// Keep only posts whose text mentions this keyword (repeatable)
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,

    /// Number of keywords to rank (default from config, else 10)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Clean post text and drop posts with fewer than three words first
    #[arg(long)]
    pub clean: bool,
}

#[derive(Tabled)]
struct DistributionRow {
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Count")]
    count: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct TimelineRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Positive")]
    positive: u64,
    #[tabled(rename = "Negative")]
    negative: u64,
    #[tabled(rename = "Neutral")]
    neutral: u64,
}

#[derive(Tabled)]
struct KeywordRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Keyword")]
    keyword: String,
    #[tabled(rename = "Count")]
    count: String,
}

/// One cell of a series in long form, for CSV output.
#[derive(Debug, Serialize)]
struct SeriesRow {
    series: &'static str,
    key: String,
    label: &'static str,
    count: u64,
}

/// Execute the analyze command.
pub fn execute(
    args: AnalyzeArgs,
    config: &FormatConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let records = load_records(&args.file, args.clean, &args.keywords)?;
    if records.is_empty() && !quiet {
        print_warning("No records to analyze.");
    }

    let limit = args.limit.unwrap_or(config.top_keywords);
    let series = DashboardSeries::from_records(&records, limit);
    let formatter = Formatter::new(config.clone());

    match format {
        OutputFormat::Table => print_tables(&series, &formatter)?,
        OutputFormat::Json => print_json(&series)?,
        OutputFormat::Csv => print_csv(&series_rows(&series))?,
        OutputFormat::Minimal => {
            let counts = series.distribution;
            println!(
                "positive={} negative={} neutral={}",
                counts.positive, counts.negative, counts.neutral
            );
        }
    }

    Ok(())
}

fn print_tables(series: &DashboardSeries, formatter: &Formatter) -> Result<()> {
    let distribution: Vec<DistributionRow> = series
        .distribution
        .entries()
        .iter()
        .map(|(label, count)| DistributionRow {
            label: label.display_name(),
            count: formatter.number(*count as f64),
            share: series
                .distribution
                .share(*label)
                .map_or_else(|| "-".to_string(), |share| formatter.percentage(share)),
        })
        .collect();
    print_header("Sentiment Distribution");
    print_table(&distribution)?;

    let timeline: Vec<TimelineRow> = series
        .timeline
        .iter()
        .map(|day| TimelineRow {
            date: day.date_key(),
            positive: day.counts.positive,
            negative: day.counts.negative,
            neutral: day.counts.neutral,
        })
        .collect();
    print_header("Sentiment Over Time");
    print_table(&timeline)?;

    let keywords: Vec<KeywordRow> = series
        .keywords
        .iter()
        .enumerate()
        .map(|(i, k)| KeywordRow {
            rank: i + 1,
            keyword: k.keyword.clone(),
            count: formatter.number(k.count as f64),
        })
        .collect();
    print_header("Top Keywords");
    print_table(&keywords)?;

    Ok(())
}

fn series_rows(series: &DashboardSeries) -> Vec<SeriesRow> {
    let mut rows = Vec::new();
    for (label, count) in series.distribution.entries() {
        rows.push(SeriesRow {
            series: "distribution",
            key: String::new(),
            label: label.as_str(),
            count,
        });
    }
    for day in &series.timeline {
        for (label, count) in day.counts.entries() {
            rows.push(SeriesRow {
                series: "timeline",
                key: day.date_key(),
                label: label.as_str(),
                count,
            });
        }
    }
    for keyword in &series.keywords {
        rows.push(SeriesRow {
            series: "keywords",
            key: keyword.keyword.clone(),
            label: "",
            count: keyword.count,
        });
    }
    rows
}
