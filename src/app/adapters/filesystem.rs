//! Raw line sources for library ingestion
//!
//! The engine never touches the file system itself; it asks a [`LineSource`]
//! for the lines of the export and parses whatever it is given.

use crate::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supplier of raw text lines, header included
pub trait LineSource {
    /// Read every line of the source
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// Reads a UTF-8 export file from disk
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileLineSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::source_missing(&self.path),
            _ => Error::source_unavailable(&self.path, e),
        })?;

        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        let lines: Vec<String> = content.lines().map(str::to_string).collect();

        debug!("Read {} lines from {}", lines.len(), self.path.display());
        Ok(lines)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory line source
#[derive(Debug, Clone, Default)]
pub struct StaticLines {
    lines: Vec<String>,
}

impl StaticLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for StaticLines {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory lines", self.lines.len())
    }
}
