//! Parser for ALE spreadsheet library exports
//!
//! This module turns the raw lines of an "ALE-spreadsheet-library-v1.csv"
//! export into [`Book`](crate::app::models::Book) records. Only the one fixed
//! 41+-column layout is understood; lines that do not fit it are skipped and
//! counted rather than aborting the load.
//!
//! ## Architecture
//!
//! - [`parser`] - Ingestion orchestration, header skipping and statistics
//! - [`line_splitter`] - Quote-aware splitting of one line into fields
//! - [`record_parser`] - Fixed column mapping from fields to a record
//! - [`series_info`] - Removal of "(Book N)" markers from series names
//! - [`stats`] - Ingestion statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use audiobook_catalog::app::services::library_parser::LibraryParser;
//!
//! # fn example(lines: Vec<String>) -> audiobook_catalog::Result<()> {
//! let parser = LibraryParser::new()?;
//! let result = parser.ingest(&lines, true);
//!
//! println!("Parsed {} books, skipped {} lines",
//!          result.stats.records_parsed,
//!          result.stats.lines_skipped);
//! # Ok(())
//! # }
//! ```

pub mod line_splitter;
pub mod parser;
pub mod record_parser;
pub mod series_info;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use line_splitter::split_line;
pub use parser::LibraryParser;
pub use series_info::SeriesInfoExtractor;
pub use stats::{IngestResult, IngestStats};
