//! CLI argument definitions for the DDF adaptor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ddf-adaptor",
    version,
    about = "Export OpenStudyBuilder studies as DDF study definitions",
    long_about = "Fetch study design entities (epochs, visits, arms, elements, \
                  objectives, endpoints, populations) from an OpenStudyBuilder \
                  instance or from exported JSON dumps, and map them to the \
                  CDISC DDF study-definition exchange format."
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
    /// Export one study as a DDF study definition (JSON).
    Export(ExportArgs),

    /// List the studies visible in the source.
    Studies(SourceArgs),
}

/// Where to retrieve source entities from.
#[derive(Parser)]
pub struct SourceArgs {
    /// Read exported JSON dumps from this directory instead of the API.
    #[arg(long = "input-dir", value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// API base URL (overrides OSB_BASE_URL; token still comes from
    /// OSB_AUTH_TOKEN).
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Study uid in the source system, e.g. Study_000002.
    #[arg(value_name = "STUDY_UID")]
    pub study_uid: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Write the study definition to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
