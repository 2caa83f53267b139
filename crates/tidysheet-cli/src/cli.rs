//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use tidysheet_model::DEFAULT_FUZZY_THRESHOLD;

#[derive(Parser)]
#[command(
    name = "tidysheet",
    version,
    about = "Clean messy invoice ledgers and stock sheets",
    long_about = "Map loosely-named spreadsheet columns onto a canonical schema,\n\
                  coerce values into typed fields, flag data-quality issues per row,\n\
                  and emit a cleaned CSV plus an issue-frequency summary."
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
    /// Clean an invoice ledger CSV.
    Invoices(InvoicesArgs),

    /// Clean a stock sheet CSV.
    Stock(StockArgs),
}

#[derive(Parser)]
pub struct InvoicesArgs {
    /// Input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the cleaned CSV (default: <INPUT>.clean.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write the summary as JSON to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Minimum similarity (0-100) for a column to map onto a canonical field.
    #[arg(long = "fuzzy-threshold", default_value_t = DEFAULT_FUZZY_THRESHOLD)]
    pub fuzzy_threshold: u8,

    /// Keep duplicate invoice ids instead of deduplicating to the first row.
    #[arg(long = "keep-duplicates")]
    pub keep_duplicates: bool,

    /// Remove rows with a negative quantity (they are flagged either way).
    #[arg(long = "drop-negative-qty")]
    pub drop_negative_qty: bool,

    /// Do not flag rows whose due date precedes their issue date.
    #[arg(long = "no-flag-due-before-issue")]
    pub no_flag_due_before_issue: bool,
}

#[derive(Parser)]
pub struct StockArgs {
    /// Input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the cleaned CSV (default: <INPUT>.clean.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write the summary as JSON to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Window in days for the EXPIRING_SOON flag.
    #[arg(long = "days-expiring", default_value_t = 30)]
    pub days_expiring: i64,

    /// Remove rows with a negative quantity (they are flagged either way).
    #[arg(long = "drop-negative-qty")]
    pub drop_negative_qty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
