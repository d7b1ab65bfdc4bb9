//! Command implementations for the audiobook catalog CLI
//!
//! Each command lives in its own module:
//! - `list`: replay actions and print the annotated view
//! - `show`: detail card for one record
//! - `check`: ingestion report

pub mod check;
pub mod list;
pub mod shared;
pub mod show;

use crate::cli::args::{Args, Commands};
use anyhow::{Result, bail};

/// Dispatch to the subcommand handler
pub fn run(args: Args) -> Result<()> {
    match &args.command {
        Some(Commands::List(list_args)) => list::run_list(&args, list_args),
        Some(Commands::Show(show_args)) => show::run_show(&args, show_args),
        Some(Commands::Check(check_args)) => check::run_check(&args, check_args),
        None => bail!("No command given"),
    }
}
