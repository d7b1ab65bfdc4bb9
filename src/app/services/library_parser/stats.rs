//! Ingestion statistics and result structures for library parsing
//!
//! This module provides types for tracking how many lines became records and
//! why the rest were skipped.

use crate::app::models::Book;

/// Ingestion result with records and basic statistics
#[derive(Debug, Clone)]
pub struct IngestResult {
    /// Successfully parsed records, in source order
    pub books: Vec<Book>,

    /// Basic ingestion statistics
    pub stats: IngestStats,
}

/// Simple ingestion statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IngestStats {
    /// Number of data lines encountered (header excluded)
    pub total_lines: usize,

    /// Number of records successfully parsed
    pub records_parsed: usize,

    /// Number of lines skipped due to errors
    pub lines_skipped: usize,

    /// One message per skipped line for debugging
    pub errors: Vec<String>,
}

impl IngestStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            records_parsed: 0,
            lines_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// Calculate skip rate as a percentage
    pub fn skip_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.lines_skipped as f64 / self.total_lines as f64) * 100.0
        }
    }
}

impl Default for IngestStats {
    fn default() -> Self {
        Self::new()
    }
}
