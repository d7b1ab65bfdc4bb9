//! Command-line argument definitions for the audiobook catalog
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::{ProgressCategory, SortColumn};
use crate::app::services::filter_engine::SameField;
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the audiobook catalog
///
/// Loads an Audible Library Extractor spreadsheet export and lets you filter,
/// sort and inspect it from the terminal.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "audiobook-catalog",
    version,
    about = "Browse, filter and sort an Audible library export",
    long_about = "Loads the ALE-spreadsheet-library-v1.csv export written by the Audible Library \
                  Extractor and replays select, filter and sort actions against it, printing the \
                  resulting view as a striped table or JSON."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to the platform config directory)
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_file: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors, in compact form
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the library view after replaying select, filter and sort actions
    List(ListArgs),
    /// Print the detail card of one book
    Show(ShowArgs),
    /// Report how many lines of the export could be parsed
    Check(CheckArgs),
}

/// Library file selection shared by every command
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct SourceArgs {
    /// Library export to load (overrides the config file)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Treat the first line as data instead of a header
    #[arg(long = "no-header")]
    pub no_header: bool,
}

/// Arguments for the list command
#[derive(Debug, Clone, ClapArgs)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Select the book with this ASIN before filtering
    #[arg(long = "select", value_name = "ASIN")]
    pub select: Option<String>,

    /// Show only books sharing this field with the selected book
    #[arg(long = "same", value_enum, value_name = "FIELD")]
    pub same: Option<SameArg>,

    /// Show only books with this progress (all, not-started, in-progress, finished)
    #[arg(long = "progress", value_name = "CATEGORY", value_parser = parse_progress)]
    pub progress: Option<ProgressCategory>,

    /// Show only books whose title or author contains this text
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Sort by a column; repeat a column to flip its direction
    #[arg(long = "sort", value_name = "COLUMN", value_parser = parse_sort_column)]
    pub sort: Vec<SortColumn>,

    /// Print at most this many rows
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the show command
#[derive(Debug, Clone, ClapArgs)]
pub struct ShowArgs {
    /// ASIN of the book to show
    #[arg(value_name = "ASIN")]
    pub asin: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the check command
#[derive(Debug, Clone, ClapArgs)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Number of skipped-line messages to print
    #[arg(long = "errors", value_name = "N", default_value_t = 10)]
    pub max_errors: usize,
}

/// Field for the same-X filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SameArg {
    Author,
    Series,
    Narrator,
}

impl From<SameArg> for SameField {
    fn from(arg: SameArg) -> Self {
        match arg {
            SameArg::Author => SameField::Author,
            SameArg::Series => SameField::Series,
            SameArg::Narrator => SameField::Narrator,
        }
    }
}

/// Output format for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Striped, human-readable table
    Table,
    /// JSON array of records for scripting
    Json,
}

fn parse_progress(value: &str) -> Result<ProgressCategory> {
    value.parse()
}

fn parse_sort_column(value: &str) -> Result<SortColumn> {
    value.parse()
}

impl Args {
    /// Determine the log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl ListArgs {
    /// Check argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if self.same.is_some() && self.select.is_none() {
            return Err(Error::configuration(
                "--same needs a selected book; pass --select ASIN",
            ));
        }

        if self.limit == Some(0) {
            return Err(Error::invalid_argument("limit", "0", "expected at least 1"));
        }

        Ok(())
    }
}
