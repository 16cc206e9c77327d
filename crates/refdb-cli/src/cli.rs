//! CLI argument definitions for the reference database browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "refdb",
    version,
    about = "Browse and search reference database lists",
    long_about = "Browse reference data such as item upgrade costs by level.\n\n\
                  Records are filtered by a free-text query against their description\n\
                  and key, and expand into per-level tables with running totals."
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

    /// Dataset file (.json or .csv). Defaults to $REFDB_DATA, then the built-in dataset.
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

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
    /// Render the database lists, optionally filtered.
    List(ListArgs),

    /// Show one record, expanded, by its description.
    Show(ShowArgs),

    /// Filter interactively: each input line replaces the query.
    Interactive,

    /// Write the filtered records with running totals.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Free-text filter matched against description and key.
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Expand a section by 1-based position, slot or description (repeatable).
    #[arg(long = "expand", value_name = "SECTION")]
    pub expand: Vec<String>,

    /// Expand every displayed section.
    #[arg(long = "expand-all", conflicts_with = "expand")]
    pub expand_all: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Record description (case-insensitive).
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Free-text filter matched against description and key.
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Export format.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: ExportFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Json,
    Csv,
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
