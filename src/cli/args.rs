//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. There are no subcommands:
//! every invocation runs the verification.

use clap::Parser;
use std::path::PathBuf;

use crate::checks::CheckKind;

/// envcheck - Verify a development environment is ready for the course.
#[derive(Debug, Default, Parser)]
#[command(name = "envcheck")]
#[command(author, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Show every item each check looked at
    #[arg(long)]
    pub verbose: bool,

    /// Only print summary counts and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Path to config file (overrides <project>/.envcheck.yml)
    #[arg(short, long, env = "ENVCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where to write the JSON report
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Do not write the JSON report
    #[arg(long, conflicts_with = "report")]
    pub no_report: bool,

    /// Skip checks by name (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "CHECK")]
    pub skip: Vec<CheckKind>,
}
