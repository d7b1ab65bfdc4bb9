//! Series name normalization
//!
//! The export appends a display ordinal to series names ("Mistborn (Book 1)").
//! The ordinal is dropped here; ordering uses the separate book-number column.

use crate::constants::SERIES_MARKER_PATTERN;
use crate::{Error, Result};
use regex::Regex;

/// Strips embedded "(Book N)" markers from series text
#[derive(Debug, Clone)]
pub struct SeriesInfoExtractor {
    marker: Regex,
}

impl SeriesInfoExtractor {
    pub fn new() -> Result<Self> {
        let marker = Regex::new(SERIES_MARKER_PATTERN).map_err(|e| {
            Error::configuration(format!("Invalid series marker pattern: {}", e))
        })?;
        Ok(Self { marker })
    }

    /// Split raw series and book-number text into (series name, book number)
    ///
    /// The book number is always the trimmed book-number column; a number
    /// inside the marker is discarded.
    pub fn extract(&self, series_text: &str, book_number_text: &str) -> (String, String) {
        let book_number = book_number_text.trim().to_string();

        if series_text.trim().is_empty() {
            return (String::new(), book_number);
        }

        let series_name = if self.marker.is_match(series_text) {
            self.marker.replace_all(series_text, "").trim().to_string()
        } else {
            series_text.trim().to_string()
        };

        (series_name, book_number)
    }
}
