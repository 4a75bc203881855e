//! CLI argument definitions for the audioqc runner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "audioqc",
    version,
    about = "QC for digitized-audio preservation packages",
    long_about = "Validate digitized-audio preservation packages against the\n\
                  institutional METS profile.\n\n\
                  Each subdirectory of PROJECT_DIR is one item; its METS document\n\
                  is checked for required sections, attribute values, and file\n\
                  identifiers matching the files on disk and the metadata export."
)]
pub struct Cli {
    /// Path to the project directory containing item subdirectories.
    #[arg(value_name = "PROJECT_DIR")]
    pub project_dir: PathBuf,

    /// Metadata export spreadsheet (CSV) to reconcile against.
    #[arg(long = "export", short = 'e', value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Write a JSON findings report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

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
