//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! command-line overrides applied by the CLI.

use crate::app::models::SortColumn;
use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_LIBRARY_FILE, DEFAULT_PLACEHOLDER,
    DEFAULT_SERIES_PLACEHOLDER, DEFAULT_SKIP_WARNING_THRESHOLD,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings for loading and presenting a library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path of the ALE spreadsheet export
    pub library_path: PathBuf,

    /// Whether the first line of the export is a header
    pub skip_header: bool,

    /// Column applied once after loading, before any requested sort
    pub default_sort: Option<SortColumn>,

    /// Shown for blank display fields
    pub placeholder: String,

    /// Shown for a blank series
    pub series_placeholder: String,

    /// Percentage of skipped lines above which ingestion warns
    pub skip_warning_threshold: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from(DEFAULT_LIBRARY_FILE),
            skip_header: true,
            default_sort: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            series_placeholder: DEFAULT_SERIES_PLACEHOLDER.to_string(),
            skip_warning_threshold: DEFAULT_SKIP_WARNING_THRESHOLD,
        }
    }
}

impl CatalogConfig {
    /// Platform location of the config file, e.g. `~/.config/audiobook-catalog/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read a TOML config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: Self = toml::from_str(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Defaults, overlaid by the config file when one is given
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Check the values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.library_path.as_os_str().is_empty() {
            return Err(Error::configuration("Library path must not be empty"));
        }

        if !(0.0..=100.0).contains(&self.skip_warning_threshold) {
            return Err(Error::configuration(format!(
                "Skip warning threshold must be between 0 and 100, got {}",
                self.skip_warning_threshold
            )));
        }

        Ok(())
    }

    pub fn with_library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.library_path = path.into();
        self
    }

    /// Treat the first line as data
    pub fn without_header(mut self) -> Self {
        self.skip_header = false;
        self
    }

    pub fn with_default_sort(mut self, column: SortColumn) -> Self {
        self.default_sort = Some(column);
        self
    }

    pub fn with_skip_warning_threshold(mut self, threshold: f64) -> Self {
        self.skip_warning_threshold = threshold;
        self
    }

    /// Display value for a possibly blank field
    pub fn display_or_placeholder<'a>(&'a self, value: &'a str) -> &'a str {
        if value.trim().is_empty() {
            &self.placeholder
        } else {
            value
        }
    }

    /// Display value for a possibly blank series
    pub fn series_or_placeholder<'a>(&'a self, series: &'a str) -> &'a str {
        if series.trim().is_empty() {
            &self.series_placeholder
        } else {
            series
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.skip_header);
        assert_eq!(config.library_path, PathBuf::from(DEFAULT_LIBRARY_FILE));
        assert_eq!(config.placeholder, "(Not specified)");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "library_path = \"/books/library.csv\"").unwrap();
        writeln!(file, "default_sort = \"Author\"").unwrap();

        let config = CatalogConfig::load_layered(Some(file.path())).unwrap();

        assert_eq!(config.library_path, PathBuf::from("/books/library.csv"));
        assert_eq!(config.default_sort, Some(SortColumn::Author));
        assert!(config.skip_header);
        assert_eq!(config.series_placeholder, DEFAULT_SERIES_PLACEHOLDER);
    }

    #[test]
    fn test_invalid_file_is_configuration_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "skip_header = \"sometimes\"").unwrap();

        let error = CatalogConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(error, Error::Configuration { .. }));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(CatalogConfig::default()
            .with_library_path("")
            .validate()
            .is_err());
        assert!(CatalogConfig::default()
            .with_skip_warning_threshold(150.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_placeholders() {
        let config = CatalogConfig::default().without_header();
        assert!(!config.skip_header);
        assert_eq!(config.display_or_placeholder("  "), "(Not specified)");
        assert_eq!(config.display_or_placeholder("Tor"), "Tor");
        assert_eq!(config.series_or_placeholder(""), "(Not part of a series)");
    }
}
