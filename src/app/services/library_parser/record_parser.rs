//! Individual record parsing for library export lines
//!
//! Maps the split fields of one line onto a [`Book`] using the fixed column
//! indices in [`crate::constants::columns`].

use super::line_splitter::split_line;
use super::series_info::SeriesInfoExtractor;
use crate::app::models::{Book, BookFields, BookId};
use crate::constants::{MIN_FIELD_COUNT, columns};
use crate::{Error, Result};

/// Parse a single data line into a record
///
/// `line_number` is the 1-based position in the source and is only used for
/// error reporting.
pub fn parse_book_record(
    line: &str,
    line_number: usize,
    id: BookId,
    series_extractor: &SeriesInfoExtractor,
) -> Result<Book> {
    let fields = split_line(line);

    if fields.len() < MIN_FIELD_COUNT {
        return Err(Error::line_parse(
            line_number,
            format!(
                "expected at least {} fields, found {}",
                MIN_FIELD_COUNT,
                fields.len()
            ),
        ));
    }

    let field = |index: usize| get_trimmed(&fields, index, line_number);

    let (series, book_number) =
        series_extractor.extract(field(columns::SERIES)?, field(columns::BOOK_NUMBER)?);

    let book_fields = BookFields {
        title: field(columns::TITLE)?.to_string(),
        title_short: field(columns::TITLE_SHORT)?.to_string(),
        series,
        book_number,
        blurb: field(columns::BLURB)?.to_string(),
        author: field(columns::AUTHOR)?.to_string(),
        narrator: field(columns::NARRATOR)?.to_string(),
        tags: field(columns::TAGS)?.to_string(),
        categories: field(columns::CATEGORIES)?.to_string(),
        parent_category: field(columns::PARENT_CATEGORY)?.to_string(),
        child_category: field(columns::CHILD_CATEGORY)?.to_string(),
        length: field(columns::LENGTH)?.to_string(),
        progress: field(columns::PROGRESS)?.to_string(),
        release_date: field(columns::RELEASE_DATE)?.to_string(),
        publishers: field(columns::PUBLISHERS)?.to_string(),
        my_rating: field(columns::MY_RATING)?.to_string(),
        rating: field(columns::RATING)?.to_string(),
        ratings: field(columns::RATINGS)?.to_string(),
        favorite: field(columns::FAVORITE)?.to_string(),
        format: field(columns::FORMAT)?.to_string(),
        language: field(columns::LANGUAGE)?.to_string(),
        asin: field(columns::ASIN)?.to_string(),
        isbn10: field(columns::ISBN10)?.to_string(),
        isbn13: field(columns::ISBN13)?.to_string(),
        summary: field(columns::SUMMARY)?.to_string(),
        store_page_url: field(columns::STORE_PAGE_URL)?.to_string(),
        cover: field(columns::COVER)?.to_string(),
        search_url: field(columns::SEARCH_URL)?.to_string(),
        subtitle: field(columns::SUBTITLE)?.to_string(),
        collection_ids: field(columns::COLLECTION_IDS)?.to_string(),
    };

    Ok(Book::new(id, book_fields))
}

/// Get a field by index, trimmed of surrounding whitespace
fn get_trimmed(fields: &[String], index: usize, line_number: usize) -> Result<&str> {
    fields
        .get(index)
        .map(|value| value.trim())
        .ok_or_else(|| Error::line_parse(line_number, format!("missing field {}", index)))
}
