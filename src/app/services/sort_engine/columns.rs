//! Key chains for each sortable column

use super::compound_key::{CompoundKey, SortKey, SortValue};
use crate::app::models::{Book, SortColumn, is_blank};

// =============================================================================
// Key Extractors
// =============================================================================

fn author(book: &Book) -> SortValue<'_> {
    SortValue::Text(book.author())
}

fn series(book: &Book) -> SortValue<'_> {
    SortValue::Text(book.series())
}

fn series_sort_key(book: &Book) -> SortValue<'_> {
    SortValue::Text(book.series_sort_key())
}

fn book_number(book: &Book) -> SortValue<'_> {
    SortValue::Number(book.book_number_value())
}

fn title(book: &Book) -> SortValue<'_> {
    SortValue::Text(book.title())
}

fn narrator(book: &Book) -> SortValue<'_> {
    SortValue::Text(book.narrator())
}

fn rating(book: &Book) -> SortValue<'_> {
    SortValue::Number(book.rating_sort_value())
}

fn ratings(book: &Book) -> SortValue<'_> {
    SortValue::Number(book.ratings_sort_value())
}

fn progress(book: &Book) -> SortValue<'_> {
    SortValue::Ordinal(book.progress_value())
}

// =============================================================================
// Empty Checks
// =============================================================================

fn blank_series(book: &Book) -> bool {
    is_blank(book.series())
}

fn blank_rating(book: &Book) -> bool {
    is_blank(&book.fields().rating)
}

fn blank_ratings(book: &Book) -> bool {
    is_blank(&book.fields().ratings)
}

// =============================================================================
// Chains
// =============================================================================

const AUTHOR_KEYS: [SortKey; 4] = [
    SortKey::requested("author", author),
    SortKey::ascending("series", series_sort_key),
    SortKey::requested("book number", book_number),
    SortKey::requested("title", title),
];

const SERIES_KEYS: [SortKey; 4] = [
    SortKey::requested("series", series),
    SortKey::requested("book number", book_number),
    SortKey::requested("author", author),
    SortKey::requested("title", title),
];

const BOOK_NUMBER_KEYS: [SortKey; 4] = [
    SortKey::requested("book number", book_number),
    SortKey::ascending("series", series_sort_key),
    SortKey::requested("author", author),
    SortKey::requested("title", title),
];

const TITLE_KEYS: [SortKey; 3] = [
    SortKey::requested("title", title),
    SortKey::requested("author", author),
    SortKey::ascending("series", series_sort_key),
];

const NARRATOR_KEYS: [SortKey; 3] = [
    SortKey::requested("narrator", narrator),
    SortKey::requested("author", author),
    SortKey::requested("title", title),
];

const RATING_KEYS: [SortKey; 3] = [
    SortKey::requested("rating", rating),
    SortKey::descending("ratings", ratings),
    SortKey::requested("title", title),
];

const RATINGS_KEYS: [SortKey; 3] = [
    SortKey::requested("ratings", ratings),
    SortKey::requested("rating", rating),
    SortKey::requested("title", title),
];

const PROGRESS_KEYS: [SortKey; 3] = [
    SortKey::requested("progress", progress),
    SortKey::requested("author", author),
    SortKey::requested("title", title),
];

/// Compound key configuration for a column
pub fn key_chain(column: SortColumn) -> CompoundKey {
    match column {
        SortColumn::Author => CompoundKey {
            empty_last: None,
            keys: &AUTHOR_KEYS,
        },
        SortColumn::Series => CompoundKey {
            empty_last: Some(blank_series),
            keys: &SERIES_KEYS,
        },
        SortColumn::BookNumber => CompoundKey {
            empty_last: None,
            keys: &BOOK_NUMBER_KEYS,
        },
        SortColumn::Title => CompoundKey {
            empty_last: None,
            keys: &TITLE_KEYS,
        },
        SortColumn::Narrator => CompoundKey {
            empty_last: None,
            keys: &NARRATOR_KEYS,
        },
        SortColumn::Rating => CompoundKey {
            empty_last: Some(blank_rating),
            keys: &RATING_KEYS,
        },
        SortColumn::Ratings => CompoundKey {
            empty_last: Some(blank_ratings),
            keys: &RATINGS_KEYS,
        },
        SortColumn::Progress => CompoundKey {
            empty_last: None,
            keys: &PROGRESS_KEYS,
        },
    }
}
