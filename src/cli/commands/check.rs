//! Check command implementation
//!
//! Loads the library and reports how many lines became records.

use super::shared::{load_catalog, load_configuration, setup_logging};
use crate::cli::args::{Args, CheckArgs};
use anyhow::Result;
use colored::*;
use tracing::info;

/// Check command runner
pub fn run_check(args: &Args, check: &CheckArgs) -> Result<()> {
    setup_logging(args)?;

    let config = load_configuration(args, &check.source)?;
    info!("Checking {}", config.library_path.display());

    let catalog = load_catalog(&config)?;
    let stats = catalog.ingest_stats();

    println!("{}", "Library Check".bright_green().bold());
    println!(
        "  {} {}",
        "File:".bright_cyan(),
        config.library_path.display().to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Data lines:".bright_cyan(),
        stats.total_lines.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Records parsed:".bright_cyan(),
        stats.records_parsed.to_string().bright_white().bold()
    );
    if stats.lines_skipped > 0 {
        println!(
            "  {} {}",
            "Lines skipped:".bright_red(),
            stats.lines_skipped.to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {:.1}%",
        "Success rate:".bright_cyan(),
        stats.success_rate()
    );

    if !stats.errors.is_empty() && check.max_errors > 0 {
        println!();
        println!("{}", "Skipped lines:".bright_yellow());
        for error in stats.errors.iter().take(check.max_errors) {
            println!("  {}", error);
        }
        if stats.errors.len() > check.max_errors {
            println!(
                "  {}",
                format!("... and {} more", stats.errors.len() - check.max_errors).dimmed()
            );
        }
    }

    Ok(())
}
