//! Data models for the audiobook catalog
//!
//! This module contains the book record with its derived sort keys, and the
//! small value types (progress categories, sort columns, stripes) shared by the
//! filter, sort and grouping services.

use crate::constants::{
    EMPTY_SERIES_SORT_KEY, NUMERIC_SENTINEL, PROGRESS_FINISHED, PROGRESS_IN_PROGRESS,
    PROGRESS_NOT_STARTED, progress_values,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Text Helpers
// =============================================================================

/// Ordinal, case-insensitive comparison (per-codepoint uppercase folding)
///
/// No locale collation is applied, so `EMPTY_SERIES_SORT_KEY` always compares
/// greater than real text.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_uppercase)
        .cmp(b.chars().flat_map(char::to_uppercase))
}

/// Trimmed, case-insensitive equality used by the same-X filters and grouping
pub fn eq_trimmed_ignore_case(a: &str, b: &str) -> bool {
    cmp_ignore_case(a.trim(), b.trim()) == Ordering::Equal
}

/// Whether a source string counts as blank
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parse a numeric sort value, falling back to the sentinel
pub fn parse_sort_number(text: &str) -> f64 {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => NUMERIC_SENTINEL,
    }
}

/// Ordinal progress value: not started, in progress, finished, unknown
pub fn progress_value(progress: &str) -> u8 {
    let trimmed = progress.trim();
    if trimmed.is_empty() {
        progress_values::UNKNOWN
    } else if trimmed.eq_ignore_ascii_case(PROGRESS_NOT_STARTED) {
        progress_values::NOT_STARTED
    } else if trimmed.eq_ignore_ascii_case(PROGRESS_FINISHED) {
        progress_values::FINISHED
    } else {
        progress_values::IN_PROGRESS
    }
}

// =============================================================================
// Book Record
// =============================================================================

/// Position of a record in ingestion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookId(pub usize);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Raw, trimmed field values of one export row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookFields {
    pub title: String,
    pub title_short: String,
    /// Series name with any "(Book N)" marker removed
    pub series: String,
    pub book_number: String,
    pub blurb: String,
    pub author: String,
    pub narrator: String,
    pub tags: String,
    pub categories: String,
    pub parent_category: String,
    pub child_category: String,
    pub length: String,
    pub progress: String,
    pub release_date: String,
    pub publishers: String,
    pub my_rating: String,
    pub rating: String,
    pub ratings: String,
    pub favorite: String,
    pub format: String,
    pub language: String,
    pub asin: String,
    pub isbn10: String,
    pub isbn13: String,
    /// HTML summary, rendered by the presentation layer
    pub summary: String,
    pub store_page_url: String,
    pub cover: String,
    pub search_url: String,
    pub subtitle: String,
    pub collection_ids: String,
}

/// One audiobook entry with its derived sort keys
///
/// Business fields are fixed at construction; the derived values are computed
/// once by [`Book::new`] and have no setters. Only the group stripe changes
/// afterwards, and only through the grouping annotator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    id: BookId,
    #[serde(flatten)]
    fields: BookFields,
    book_number_value: f64,
    rating_sort_value: f64,
    ratings_sort_value: f64,
    series_sort_key: String,
    progress_value: u8,
    group_stripe: GroupStripe,
}

impl Book {
    /// Build a record and compute every derived key from its source strings
    pub fn new(id: BookId, fields: BookFields) -> Self {
        let series_sort_key = if is_blank(&fields.series) {
            EMPTY_SERIES_SORT_KEY.to_string()
        } else {
            fields.series.clone()
        };

        Self {
            id,
            book_number_value: parse_sort_number(&fields.book_number),
            rating_sort_value: parse_sort_number(&fields.rating),
            ratings_sort_value: parse_sort_number(&fields.ratings),
            progress_value: progress_value(&fields.progress),
            series_sort_key,
            fields,
            group_stripe: GroupStripe::default(),
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    /// All display fields
    pub fn fields(&self) -> &BookFields {
        &self.fields
    }

    pub fn title(&self) -> &str {
        &self.fields.title
    }

    pub fn author(&self) -> &str {
        &self.fields.author
    }

    pub fn narrator(&self) -> &str {
        &self.fields.narrator
    }

    pub fn series(&self) -> &str {
        &self.fields.series
    }

    pub fn progress(&self) -> &str {
        &self.fields.progress
    }

    pub fn asin(&self) -> &str {
        &self.fields.asin
    }

    pub fn book_number_value(&self) -> f64 {
        self.book_number_value
    }

    pub fn rating_sort_value(&self) -> f64 {
        self.rating_sort_value
    }

    pub fn ratings_sort_value(&self) -> f64 {
        self.ratings_sort_value
    }

    /// Series name, or a sentinel that sorts after every real series
    pub fn series_sort_key(&self) -> &str {
        &self.series_sort_key
    }

    pub fn progress_value(&self) -> u8 {
        self.progress_value
    }

    pub fn group_stripe(&self) -> GroupStripe {
        self.group_stripe
    }

    pub(crate) fn set_group_stripe(&mut self, stripe: GroupStripe) {
        self.group_stripe = stripe;
    }
}

// =============================================================================
// Presentation Stripe
// =============================================================================

/// Two-valued row stripe assigned by the grouping annotator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStripe {
    #[default]
    Primary,
    Alternate,
}

impl GroupStripe {
    pub fn flip(self) -> Self {
        match self {
            GroupStripe::Primary => GroupStripe::Alternate,
            GroupStripe::Alternate => GroupStripe::Primary,
        }
    }

    /// 0 for primary, 1 for alternate
    pub fn index(self) -> u8 {
        match self {
            GroupStripe::Primary => 0,
            GroupStripe::Alternate => 1,
        }
    }
}

// =============================================================================
// Progress Category
// =============================================================================

/// Fixed progress filter categories; `All` means no progress filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressCategory {
    #[default]
    All,
    NotStarted,
    /// Matches the literal "In progress" label only, not time-left text
    InProgress,
    Finished,
}

impl ProgressCategory {
    /// Progress text this category matches, `None` for `All`
    pub fn label(self) -> Option<&'static str> {
        match self {
            ProgressCategory::All => None,
            ProgressCategory::NotStarted => Some(PROGRESS_NOT_STARTED),
            ProgressCategory::InProgress => Some(PROGRESS_IN_PROGRESS),
            ProgressCategory::Finished => Some(PROGRESS_FINISHED),
        }
    }

    /// Case-insensitive exact match against a record's progress field
    pub fn matches(self, progress: &str) -> bool {
        match self.label() {
            Some(label) => cmp_ignore_case(progress, label) == Ordering::Equal,
            None => true,
        }
    }
}

impl FromStr for ProgressCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "all" | "all progress" => Ok(ProgressCategory::All),
            "not started" => Ok(ProgressCategory::NotStarted),
            "in progress" => Ok(ProgressCategory::InProgress),
            "finished" => Ok(ProgressCategory::Finished),
            _ => Err(Error::invalid_argument(
                "progress category",
                s,
                "expected all, not-started, in-progress or finished",
            )),
        }
    }
}

impl fmt::Display for ProgressCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("All Progress"))
    }
}

// =============================================================================
// Sort Column and Direction
// =============================================================================

/// Columns the sort engine knows a key chain for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortColumn {
    Author,
    Series,
    BookNumber,
    Title,
    Narrator,
    Rating,
    Ratings,
    Progress,
}

impl SortColumn {
    pub fn name(self) -> &'static str {
        match self {
            SortColumn::Author => "Author",
            SortColumn::Series => "Series",
            SortColumn::BookNumber => "BookNumber",
            SortColumn::Title => "Title",
            SortColumn::Narrator => "Narrator",
            SortColumn::Rating => "Rating",
            SortColumn::Ratings => "Ratings",
            SortColumn::Progress => "Progress",
        }
    }
}

impl FromStr for SortColumn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "author" => Ok(SortColumn::Author),
            "series" => Ok(SortColumn::Series),
            "booknumber" | "book" => Ok(SortColumn::BookNumber),
            "title" => Ok(SortColumn::Title),
            "narrator" => Ok(SortColumn::Narrator),
            "rating" | "stars" => Ok(SortColumn::Rating),
            "ratings" => Ok(SortColumn::Ratings),
            "progress" => Ok(SortColumn::Progress),
            _ => Err(Error::invalid_argument(
                "sort column",
                s,
                "expected author, series, book-number, title, narrator, rating, ratings \
                 or progress",
            )),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Requested ordering for the primary key of a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply this direction to an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_with(series: &str, book_number: &str, rating: &str, ratings: &str) -> BookFields {
        BookFields {
            title: "The Final Empire".to_string(),
            series: series.to_string(),
            book_number: book_number.to_string(),
            rating: rating.to_string(),
            ratings: ratings.to_string(),
            ..BookFields::default()
        }
    }

    #[test]
    fn test_derived_values_follow_source_strings() {
        let book = Book::new(BookId(0), fields_with("Mistborn", "1", "4.5", "1,204"));

        assert_eq!(book.book_number_value(), 1.0);
        assert_eq!(book.rating_sort_value(), 4.5);
        assert_eq!(book.ratings_sort_value(), 1204.0);
        assert_eq!(book.series_sort_key(), "Mistborn");
        assert_eq!(book.group_stripe(), GroupStripe::Primary);
    }

    #[test]
    fn test_blank_and_unparsable_values_use_sentinels() {
        let book = Book::new(BookId(3), fields_with("   ", "", "n/a", "NaN"));

        assert_eq!(book.book_number_value(), NUMERIC_SENTINEL);
        assert_eq!(book.rating_sort_value(), NUMERIC_SENTINEL);
        assert_eq!(book.ratings_sort_value(), NUMERIC_SENTINEL);
        assert_eq!(book.series_sort_key(), EMPTY_SERIES_SORT_KEY);
    }

    #[test]
    fn test_fractional_book_numbers_parse() {
        assert_eq!(parse_sort_number(" 2.5 "), 2.5);
        assert_eq!(parse_sort_number("inf"), NUMERIC_SENTINEL);
    }

    #[test]
    fn test_progress_values() {
        assert_eq!(progress_value("Not started"), progress_values::NOT_STARTED);
        assert_eq!(progress_value("3h 12m left"), progress_values::IN_PROGRESS);
        assert_eq!(progress_value("FINISHED"), progress_values::FINISHED);
        assert_eq!(progress_value(""), progress_values::UNKNOWN);
    }

    #[test]
    fn test_cmp_ignore_case_is_ordinal() {
        assert_eq!(cmp_ignore_case("abc", "ABC"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("apple", "Banana"), Ordering::Less);
        assert_eq!(
            cmp_ignore_case(EMPTY_SERIES_SORT_KEY, "\u{00fc}ber"),
            Ordering::Greater
        );
        assert_eq!(
            cmp_ignore_case(EMPTY_SERIES_SORT_KEY, "\u{1f600} Smiles"),
            Ordering::Greater
        );
        assert!(eq_trimmed_ignore_case("  Brandon Sanderson ", "brandon sanderson"));
    }

    #[test]
    fn test_progress_category_parsing_and_matching() {
        assert_eq!(
            "not-started".parse::<ProgressCategory>().unwrap(),
            ProgressCategory::NotStarted
        );
        assert_eq!(
            "Finished".parse::<ProgressCategory>().unwrap(),
            ProgressCategory::Finished
        );
        assert!("halfway".parse::<ProgressCategory>().is_err());

        assert!(ProgressCategory::Finished.matches("finished"));
        assert!(!ProgressCategory::Finished.matches("Not started"));
        assert!(ProgressCategory::All.matches("anything"));
    }

    #[test]
    fn test_sort_column_parsing() {
        assert_eq!("book-number".parse::<SortColumn>().unwrap(), SortColumn::BookNumber);
        assert_eq!("AUTHOR".parse::<SortColumn>().unwrap(), SortColumn::Author);
        assert!("publisher".parse::<SortColumn>().is_err());
    }

    #[test]
    fn test_stripe_and_direction_flip() {
        assert_eq!(GroupStripe::Primary.flip(), GroupStripe::Alternate);
        assert_eq!(GroupStripe::Alternate.index(), 1);
        assert_eq!(SortDirection::Ascending.flip(), SortDirection::Descending);
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
    }
}
