//! CLI argument definitions for namemove.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "namemove",
    version,
    about = "Match roster names against folders and relocate the matches",
    long_about = "Match people records (surname, given name, preferred name) from a CSV \
                  roster against folder names under one or more source roots, relocate \
                  each matched folder into a destination root, and write a two-part \
                  audit log (actions taken, records not found)."
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
    /// Match the roster and relocate the matched folders.
    Run(RunArgs),

    /// Resolve the roster columns and scan the source roots without
    /// planning or moving anything.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Roster CSV with the name columns.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Source root to scan one level deep; repeat for multiple roots.
    #[arg(long = "source", value_name = "DIR", required = true)]
    pub sources: Vec<PathBuf>,

    /// Destination root for matched folders and the audit log.
    #[arg(long = "dest", value_name = "DIR")]
    pub destination: PathBuf,

    /// Simulate: record every move as planned, touch nothing.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Roster CSV with the name columns.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Source root to scan one level deep; repeat for multiple roots.
    #[arg(long = "source", value_name = "DIR", required = true)]
    pub sources: Vec<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
