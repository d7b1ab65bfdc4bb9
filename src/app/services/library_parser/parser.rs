//! Core library parser implementation
//!
//! This module provides the ingestion orchestration: header skipping, per-line
//! record parsing and the skip accounting that keeps one bad line from
//! aborting the load.

use tracing::{debug, info};

use super::record_parser::parse_book_record;
use super::series_info::SeriesInfoExtractor;
use super::stats::{IngestResult, IngestStats};
use crate::Result;
use crate::app::adapters::filesystem::LineSource;
use crate::app::models::BookId;

/// Parser for ALE spreadsheet library exports
#[derive(Debug, Clone)]
pub struct LibraryParser {
    series_extractor: SeriesInfoExtractor,
}

impl LibraryParser {
    /// Create a new parser
    pub fn new() -> Result<Self> {
        Ok(Self {
            series_extractor: SeriesInfoExtractor::new()?,
        })
    }

    /// Read every line from a source and ingest it
    ///
    /// Fails only when the source itself cannot be read; bad lines are counted
    /// in the returned statistics.
    pub fn ingest_source(
        &self,
        source: &dyn LineSource,
        skip_header: bool,
    ) -> Result<IngestResult> {
        info!("Loading library from {}", source.describe());
        let lines = source.read_lines()?;
        Ok(self.ingest(&lines, skip_header))
    }

    /// Parse raw lines into records
    ///
    /// Record ids are assigned consecutively in source order, counting only
    /// lines that parsed.
    pub fn ingest<S: AsRef<str>>(&self, lines: &[S], skip_header: bool) -> IngestResult {
        let mut stats = IngestStats::new();
        let mut books = Vec::new();

        let first_data_line = usize::from(skip_header);

        for (index, line) in lines.iter().enumerate().skip(first_data_line) {
            let line_number = index + 1;
            stats.total_lines += 1;

            match parse_book_record(
                line.as_ref(),
                line_number,
                BookId(books.len()),
                &self.series_extractor,
            ) {
                Ok(book) => {
                    books.push(book);
                    stats.records_parsed += 1;
                }
                Err(e) => {
                    stats.lines_skipped += 1;
                    stats.errors.push(e.to_string());
                    debug!("Skipped {}", e);
                }
            }
        }

        info!(
            "Parsed {} books from {} lines ({} skipped)",
            stats.records_parsed, stats.total_lines, stats.lines_skipped
        );

        IngestResult { books, stats }
    }
}
