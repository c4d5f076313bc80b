//! CLI argument definitions for the abbreviation list tools.

use std::path::PathBuf;

use abbrv_report::{DEFAULT_CI_SUMMARY_ENV, DEFAULT_SUMMARY_PATH};
use abbrv_validate::config::{DEFAULT_MATCH_RATIO, DEFAULT_MIN_MATCHES};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "abbrv",
    version,
    about = "Journal abbreviation list quality checks",
    long_about = "Validate and combine CSV journal abbreviation lists.\n\n\
                  Without a subcommand, runs the quality check over ./journals and\n\
                  exits non-zero when any error-level finding is recorded.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub check: CheckArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Check every list in a directory and report findings (the default).
    Check(CheckArgs),

    /// Merge several lists into one de-duplicated, sorted list.
    Combine(CombineArgs),
}

#[derive(Args, Clone)]
pub struct CheckArgs {
    /// Directory holding the abbreviation lists.
    #[arg(long = "journals-dir", value_name = "DIR", default_value = "journals")]
    pub journals_dir: PathBuf,

    /// File the rendered summary is written to.
    #[arg(long = "summary-file", value_name = "PATH", default_value = DEFAULT_SUMMARY_PATH)]
    pub summary_file: PathBuf,

    /// Do not write the summary file.
    #[arg(long = "no-summary-file")]
    pub no_summary_file: bool,

    /// Environment variable holding the CI step-summary path.
    #[arg(long = "ci-summary-env", value_name = "VAR", default_value = DEFAULT_CI_SUMMARY_ENV)]
    pub ci_summary_env: String,

    /// Also write the findings as JSON.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Field delimiter of the lists.
    #[arg(long = "delimiter", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Extension of the files to check.
    #[arg(long = "extension", default_value = "csv")]
    pub extension: String,

    /// Share of abbreviation parts that must match a word of the full name.
    #[arg(long = "match-ratio", default_value_t = DEFAULT_MATCH_RATIO)]
    pub match_ratio: f64,

    /// Minimum number of matching abbreviation parts.
    #[arg(long = "min-matches", default_value_t = DEFAULT_MIN_MATCHES)]
    pub min_matches: usize,
}

#[derive(Args)]
pub struct CombineArgs {
    /// Output file for the combined list.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Input lists, lowest precedence first.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Which entry to keep when a full name repeats.
    #[arg(long = "keep", value_enum, default_value = "last")]
    pub keep: KeepArg,

    /// Field delimiter of inputs and output.
    #[arg(long = "delimiter", default_value = ";", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KeepArg {
    First,
    Last,
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

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ if value == "\\t" => Ok(b'\t'),
        _ => Err(format!("delimiter must be a single ASCII character, got '{value}'")),
    }
}
