//! Test utilities for library parser testing
//!
//! Helpers that assemble export lines with the fixed column layout.

use crate::constants::{MIN_FIELD_COUNT, columns};

mod parser_tests;
mod series_tests;

/// Header line of the export (only its presence matters)
pub const TEST_HEADER: &str = "Id,Title,Title Short,Series,Book Numbers,Blurb,Authors,Narrators";

/// Build a data line with `MIN_FIELD_COUNT` fields, overriding some columns
///
/// Values containing a comma are wrapped in quotes.
pub fn build_line(values: &[(usize, &str)]) -> String {
    let mut fields: Vec<String> = (0..MIN_FIELD_COUNT).map(|_| String::new()).collect();
    fields[0] = "row".to_string();

    for (index, value) in values {
        fields[*index] = if value.contains(',') {
            format!("\"{}\"", value)
        } else {
            value.to_string()
        };
    }

    fields.join(",")
}

/// A complete, realistic data line
pub fn create_mistborn_line() -> String {
    build_line(&[
        (columns::TITLE, "The Final Empire"),
        (columns::TITLE_SHORT, "Final Empire"),
        (columns::SERIES, "Mistborn (Book 1)"),
        (columns::BOOK_NUMBER, "1"),
        (columns::AUTHOR, "Sanderson, Brandon"),
        (columns::NARRATOR, "Michael Kramer"),
        (columns::PROGRESS, "Finished"),
        (columns::RATING, "4.5"),
        (columns::RATINGS, "1,204"),
        (columns::ASIN, "B002UZMLXM"),
        (columns::SUBTITLE, "Mistborn, Book 1"),
        (columns::COLLECTION_IDS, "fantasy"),
    ])
}
