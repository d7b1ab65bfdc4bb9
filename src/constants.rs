//! Application constants for the audiobook catalog
//!
//! This module contains the fixed column layout of the ALE spreadsheet export,
//! the sentinel values used by the sort engine, and presentation defaults.

// =============================================================================
// Library File
// =============================================================================

/// File name written by the Audible Library Extractor spreadsheet export
pub const DEFAULT_LIBRARY_FILE: &str = "ALE-spreadsheet-library-v1.csv";

/// Application directory name under the platform config directory
pub const APP_DIR_NAME: &str = "audiobook-catalog";

/// Config file name inside the application directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Column Layout
// =============================================================================

/// Zero-based field indices consumed from each data line.
///
/// Fields 0, 22-28, 33, 35 and 36 are present in the export but unused.
pub mod columns {
    pub const TITLE: usize = 1;
    pub const TITLE_SHORT: usize = 2;
    pub const SERIES: usize = 3;
    pub const BOOK_NUMBER: usize = 4;
    pub const BLURB: usize = 5;
    pub const AUTHOR: usize = 6;
    pub const NARRATOR: usize = 7;
    pub const TAGS: usize = 8;
    pub const CATEGORIES: usize = 9;
    pub const PARENT_CATEGORY: usize = 10;
    pub const CHILD_CATEGORY: usize = 11;
    pub const LENGTH: usize = 12;
    pub const PROGRESS: usize = 13;
    pub const RELEASE_DATE: usize = 14;
    pub const PUBLISHERS: usize = 15;
    pub const MY_RATING: usize = 16;
    pub const RATING: usize = 17;
    pub const RATINGS: usize = 18;
    pub const FAVORITE: usize = 19;
    pub const FORMAT: usize = 20;
    pub const LANGUAGE: usize = 21;
    pub const ASIN: usize = 29;
    pub const ISBN10: usize = 30;
    pub const ISBN13: usize = 31;
    pub const SUMMARY: usize = 32;
    pub const STORE_PAGE_URL: usize = 34;
    pub const COVER: usize = 37;
    pub const SEARCH_URL: usize = 38;
    pub const SUBTITLE: usize = 39;
    pub const COLLECTION_IDS: usize = 40;

    /// Highest index referenced above
    pub const MAX_INDEX: usize = COLLECTION_IDS;
}

/// Minimum number of fields a data line must split into
pub const MIN_FIELD_COUNT: usize = columns::MAX_INDEX + 1;

/// Field separator outside quoted spans
pub const FIELD_SEPARATOR: char = ',';

/// Character that toggles quoted-span mode
pub const QUOTE_CHAR: char = '"';

/// Embedded ordinal marker in series names, e.g. "Mistborn (Book 1)"
pub const SERIES_MARKER_PATTERN: &str = r"(?i)\s*\(book\s+\d+\)";

// =============================================================================
// Sort Sentinels
// =============================================================================

/// Sort key for records without a series; `char::MAX` repeated, so it sorts
/// after any title, supplementary-plane characters included
pub const EMPTY_SERIES_SORT_KEY: &str = "\u{10ffff}\u{10ffff}\u{10ffff}";

/// Numeric sort value for blank or unparsable numbers
pub const NUMERIC_SENTINEL: f64 = f64::MAX;

// =============================================================================
// Progress
// =============================================================================

/// Progress text the export writes for unopened books
pub const PROGRESS_NOT_STARTED: &str = "Not started";

/// Progress text used by the in-progress filter category
///
/// Exports write partially read books as a time-left string ("4h 2m left"),
/// so on real data this label only matches records carrying it literally.
pub const PROGRESS_IN_PROGRESS: &str = "In progress";

/// Progress text the export writes for completed books
pub const PROGRESS_FINISHED: &str = "Finished";

/// Ordinal sort values derived from progress text
pub mod progress_values {
    pub const NOT_STARTED: u8 = 0;
    pub const IN_PROGRESS: u8 = 1;
    pub const FINISHED: u8 = 2;
    pub const UNKNOWN: u8 = 3;
}

// =============================================================================
// Presentation
// =============================================================================

/// Placeholder shown for blank detail fields
pub const DEFAULT_PLACEHOLDER: &str = "(Not specified)";

/// Placeholder shown for a blank series
pub const DEFAULT_SERIES_PLACEHOLDER: &str = "(Not part of a series)";

/// Background used when a record has no author
pub const AUTHOR_TINT_DEFAULT: (&str, [u8; 3]) = ("White", [255, 255, 255]);

/// Pastel palette for author tints
pub const AUTHOR_TINT_PALETTE: [(&str, [u8; 3]); 20] = [
    ("FloralWhite", [255, 250, 240]),
    ("AliceBlue", [240, 248, 255]),
    ("MintCream", [245, 255, 250]),
    ("Snow", [255, 250, 250]),
    ("Cornsilk", [255, 248, 220]),
    ("LightGoldenrodYellow", [250, 250, 210]),
    ("PapayaWhip", [255, 239, 213]),
    ("Seashell", [255, 245, 238]),
    ("Beige", [245, 245, 220]),
    ("Lavender", [230, 230, 250]),
    ("Honeydew", [240, 255, 240]),
    ("GhostWhite", [248, 248, 255]),
    ("Azure", [240, 255, 255]),
    ("LavenderBlush", [255, 240, 245]),
    ("WhiteSmoke", [245, 245, 245]),
    ("Ivory", [255, 255, 240]),
    ("Khaki", [240, 230, 140]),
    ("MistyRose", [255, 228, 225]),
    ("BlanchedAlmond", [255, 235, 205]),
    ("AntiqueWhite", [250, 235, 215]),
];

/// Percentage of skipped lines above which ingestion logs a warning
pub const DEFAULT_SKIP_WARNING_THRESHOLD: f64 = 10.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_field_count_covers_every_column() {
        assert_eq!(MIN_FIELD_COUNT, 41);
        assert!(columns::ASIN < MIN_FIELD_COUNT);
        assert!(columns::SUBTITLE < MIN_FIELD_COUNT);
    }

    #[test]
    fn test_empty_series_key_sorts_after_text() {
        assert!(EMPTY_SERIES_SORT_KEY > "Zzzz");
        assert!(EMPTY_SERIES_SORT_KEY > "\u{4e2d}\u{6587}");
        assert!(EMPTY_SERIES_SORT_KEY > "\u{1d54f} Files");
        assert!(EMPTY_SERIES_SORT_KEY > "\u{1f409}\u{1f409}\u{1f409}");
        assert!(EMPTY_SERIES_SORT_KEY.chars().all(|c| c == char::MAX));
        assert_eq!(EMPTY_SERIES_SORT_KEY.chars().count(), 3);
    }
}
