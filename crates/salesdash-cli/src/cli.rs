//! CLI argument definitions for the sales dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "salesdash",
    version,
    about = "Sales dashboard - Summarize tabular sales exports",
    long_about = "Ingest a sales export (CSV, TSV, XLS, XLSX), normalize its columns,\n\
                  and print summary statistics, per-product aggregates, and top-N\n\
                  rankings. The table can be filtered by SKU and re-exported as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize a sales export and print the dashboard tables.
    Report(ReportArgs),

    /// List the supported input formats.
    Formats,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the sales export file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Keep only these SKUs (repeatable). No flag means no filter.
    #[arg(long = "sku", value_name = "SKU")]
    pub skus: Vec<String>,

    /// Metric ordering the top-N ranking.
    #[arg(long = "metric", value_enum, default_value = "total-sales")]
    pub metric: MetricArg,

    /// Number of products in the ranking table.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Display language for labels (never affects the data).
    #[arg(long = "language", value_enum, default_value = "english")]
    pub language: LanguageArg,

    /// Currency for monetary display values.
    #[arg(long = "currency", value_enum, default_value = "dirham")]
    pub currency: CurrencyArg,

    /// Re-export the (filtered) table as UTF-8 CSV to this path.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Print per-column summary statistics.
    #[arg(long = "describe")]
    pub describe: bool,
}

/// CLI ranking metric choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum MetricArg {
    ItemsSold,
    Profit,
    TotalSales,
}

/// CLI display language choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    English,
    French,
    Arabic,
    Tamazight,
}

/// CLI currency choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum CurrencyArg {
    Dirham,
    Dollar,
    Euro,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
