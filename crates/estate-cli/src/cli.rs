//! CLI argument definitions for the listing ETL tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "estate",
    version,
    about = "Real-estate listing ETL - clean, enrich and validate property data",
    long_about = "Clean, enrich and validate real-estate listing datasets.\n\n\
                  Reads CSV or Excel input, runs data-quality checks before and after\n\
                  transformation, and writes CSV (with BOM) or Parquet output."
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
    /// Run the full pipeline: extract, validate, transform, validate, load.
    Run(RunArgs),

    /// Run the data-quality checks on a file without transforming it.
    Validate(ValidateArgs),

    /// Generate a synthetic listings file for demos and testing.
    Sample(SampleArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Input CSV or Excel file.
    #[arg(long = "input", short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file; `.parquet` writes Parquet, anything else CSV.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// TOML file with default settings. Flags override its values.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Timestamp publication ages are measured against (default: now).
    #[arg(long = "reference-time", value_name = "DATETIME")]
    pub reference_time: Option<String>,

    /// Leave the numeric statistics out of the report.
    #[arg(long = "no-statistics")]
    pub no_statistics: bool,

    /// Print the full report, statistics included, as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// CSV or Excel file to check.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Destination file.
    #[arg(
        long = "output",
        short = 'o',
        value_name = "FILE",
        default_value = "data/raw/propiedades_raw.csv"
    )]
    pub output: PathBuf,

    /// Number of listings to generate.
    #[arg(long = "records", short = 'n', default_value_t = 150)]
    pub records: usize,

    /// Random seed.
    #[arg(long = "seed", default_value_t = 42)]
    pub seed: u64,

    /// Publication dates fall 1 to 365 days before this time (default: now).
    #[arg(long = "reference-time", value_name = "DATETIME")]
    pub reference_time: Option<String>,
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
