//! Shared utilities for CLI commands
//!
//! Logging setup, layered configuration loading and catalog construction used
//! by every command.

use crate::app::adapters::filesystem::FileLineSource;
use crate::app::services::catalog::Catalog;
use crate::app::services::library_parser::LibraryParser;
use crate::cli::args::{Args, SourceArgs};
use crate::config::CatalogConfig;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // RUST_LOG wins over the verbosity flags
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("audiobook_catalog={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration: defaults, then config file, then CLI overrides
pub fn load_configuration(args: &Args, source: &SourceArgs) -> Result<CatalogConfig> {
    let default_config_path = if args.config_file.is_none() {
        CatalogConfig::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }

    let mut config = CatalogConfig::load_layered(config_file)?;
    apply_cli_overrides(&mut config, source);
    config.validate()?;

    Ok(config)
}

/// Apply command-line overrides on top of the loaded configuration
pub fn apply_cli_overrides(config: &mut CatalogConfig, source: &SourceArgs) {
    if let Some(file) = &source.file {
        config.library_path = file.clone();
    }
    if source.no_header {
        config.skip_header = false;
    }
}

/// Build a catalog from the configured library file
pub fn load_catalog(config: &CatalogConfig) -> Result<Catalog> {
    let parser = LibraryParser::new()?;
    let source = FileLineSource::new(&config.library_path);
    let mut catalog = Catalog::new().with_skip_warning_threshold(config.skip_warning_threshold);

    catalog
        .load(&parser, &source, config.skip_header)
        .with_context(|| format!("Failed to load library {}", config.library_path.display()))?;

    Ok(catalog)
}
