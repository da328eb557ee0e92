//! CLI argument definitions for the upload cleaner.

use std::path::PathBuf;

use aqua_map::ColumnOverride;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "aqua-clean",
    version,
    about = "Clean uploaded ocean and fish survey CSVs into standard records",
    long_about = "Clean an uploaded ocean or fish survey CSV.\n\n\
                  Columns are matched to the standard field names of the selected\n\
                  dataset kind, values are coerced and range-checked, and the\n\
                  surviving records are printed to stdout as one JSON array."
)]
pub struct Cli {
    /// Uploaded CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Dataset kind: ocean or fish.
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// Map an uploaded column to a standard field before automatic matching.
    #[arg(long = "map", value_name = "SOURCE=FIELD")]
    pub overrides: Vec<ColumnOverride>,

    /// Locality table to use instead of the built-in one (ocean only).
    #[arg(long = "regions", value_name = "PATH")]
    pub regions: Option<PathBuf>,

    /// Require PREFIX####_## event IDs and drop rows without one (ocean only).
    #[arg(long = "strict-event-ids")]
    pub strict_event_ids: bool,

    /// Custom event ID pattern for --strict-event-ids.
    #[arg(long = "event-id-pattern", value_name = "REGEX", requires = "strict_event_ids")]
    pub event_id_pattern: Option<String>,

    /// Also write the cleaned records as CSV.
    #[arg(long = "csv-out", value_name = "PATH")]
    pub csv_out: Option<PathBuf>,

    /// Print a cleaning summary to stderr.
    #[arg(long = "summary")]
    pub summary: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
