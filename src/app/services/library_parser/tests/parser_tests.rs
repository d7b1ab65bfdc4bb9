//! Tests for the main library parser functionality

use super::*;
use crate::Error;
use crate::app::adapters::filesystem::{FileLineSource, LineSource, StaticLines};
use crate::app::models::BookId;
use crate::app::services::library_parser::LibraryParser;
use crate::app::services::library_parser::record_parser::parse_book_record;
use crate::app::services::library_parser::series_info::SeriesInfoExtractor;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_quoted_author_and_series_marker() {
    let line = build_line(&[
        (columns::TITLE, "The Final Empire"),
        (columns::SERIES, "Mistborn (book 1)"),
        (columns::BOOK_NUMBER, "1"),
        (columns::AUTHOR, "Sanderson, Brandon"),
    ]);
    let extractor = SeriesInfoExtractor::new().unwrap();

    let book = parse_book_record(&line, 2, BookId(0), &extractor).unwrap();

    assert_eq!(book.author(), "Sanderson, Brandon");
    assert_eq!(book.series(), "Mistborn");
    assert_eq!(book.fields().book_number, "1");
    assert_eq!(book.book_number_value(), 1.0);
}

#[test]
fn test_every_mapped_column_lands_in_its_field() {
    let values: Vec<(usize, String)> = [
        columns::TITLE,
        columns::TITLE_SHORT,
        columns::BLURB,
        columns::AUTHOR,
        columns::NARRATOR,
        columns::TAGS,
        columns::CATEGORIES,
        columns::PARENT_CATEGORY,
        columns::CHILD_CATEGORY,
        columns::LENGTH,
        columns::PROGRESS,
        columns::RELEASE_DATE,
        columns::PUBLISHERS,
        columns::MY_RATING,
        columns::RATING,
        columns::RATINGS,
        columns::FAVORITE,
        columns::FORMAT,
        columns::LANGUAGE,
        columns::ASIN,
        columns::ISBN10,
        columns::ISBN13,
        columns::SUMMARY,
        columns::STORE_PAGE_URL,
        columns::COVER,
        columns::SEARCH_URL,
        columns::SUBTITLE,
        columns::COLLECTION_IDS,
    ]
    .iter()
    .map(|&index| (index, format!("v{}", index)))
    .collect();
    let borrowed: Vec<(usize, &str)> = values.iter().map(|(i, v)| (*i, v.as_str())).collect();
    let line = build_line(&borrowed);
    let extractor = SeriesInfoExtractor::new().unwrap();

    let book = parse_book_record(&line, 2, BookId(0), &extractor).unwrap();
    let fields = book.fields();

    assert_eq!(fields.title, "v1");
    assert_eq!(fields.title_short, "v2");
    assert_eq!(fields.blurb, "v5");
    assert_eq!(fields.author, "v6");
    assert_eq!(fields.narrator, "v7");
    assert_eq!(fields.tags, "v8");
    assert_eq!(fields.categories, "v9");
    assert_eq!(fields.parent_category, "v10");
    assert_eq!(fields.child_category, "v11");
    assert_eq!(fields.length, "v12");
    assert_eq!(fields.progress, "v13");
    assert_eq!(fields.release_date, "v14");
    assert_eq!(fields.publishers, "v15");
    assert_eq!(fields.my_rating, "v16");
    assert_eq!(fields.rating, "v17");
    assert_eq!(fields.ratings, "v18");
    assert_eq!(fields.favorite, "v19");
    assert_eq!(fields.format, "v20");
    assert_eq!(fields.language, "v21");
    assert_eq!(fields.asin, "v29");
    assert_eq!(fields.isbn10, "v30");
    assert_eq!(fields.isbn13, "v31");
    assert_eq!(fields.summary, "v32");
    assert_eq!(fields.store_page_url, "v34");
    assert_eq!(fields.cover, "v37");
    assert_eq!(fields.search_url, "v38");
    assert_eq!(fields.subtitle, "v39");
    assert_eq!(fields.collection_ids, "v40");
}

#[test]
fn test_fields_are_trimmed() {
    let line = build_line(&[(columns::TITLE, "  Elantris  "), (columns::AUTHOR, " Brandon ")]);
    let extractor = SeriesInfoExtractor::new().unwrap();

    let book = parse_book_record(&line, 2, BookId(0), &extractor).unwrap();

    assert_eq!(book.title(), "Elantris");
    assert_eq!(book.author(), "Brandon");
}

#[test]
fn test_short_line_is_rejected() {
    let extractor = SeriesInfoExtractor::new().unwrap();
    let short_line = vec!["x"; 40].join(",");

    let error = parse_book_record(&short_line, 7, BookId(0), &extractor).unwrap_err();

    match error {
        Error::LineParse { line, reason } => {
            assert_eq!(line, 7);
            assert!(reason.contains("found 40"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_quoted_comma_does_not_inflate_field_count() {
    // 39 separators plus one quoted comma: only 40 real fields
    let mut fields: Vec<String> = vec![String::new(); 40];
    fields[6] = "\"Sanderson, Brandon\"".to_string();
    let line = fields.join(",");
    let extractor = SeriesInfoExtractor::new().unwrap();

    assert!(parse_book_record(&line, 2, BookId(0), &extractor).is_err());
}

#[test]
fn test_ingest_skips_header_and_counts_bad_lines() {
    let parser = LibraryParser::new().unwrap();
    let lines = vec![
        TEST_HEADER.to_string(),
        create_mistborn_line(),
        "too,short".to_string(),
        String::new(),
        build_line(&[(columns::TITLE, "Elantris"), (columns::AUTHOR, "Brandon Sanderson")]),
    ];

    let result = parser.ingest(&lines, true);

    assert_eq!(result.stats.total_lines, 4);
    assert_eq!(result.stats.records_parsed, 2);
    assert_eq!(result.stats.lines_skipped, 2);
    assert_eq!(result.stats.errors.len(), 2);
    assert!(result.stats.errors[0].starts_with("Line 3:"));

    assert_eq!(result.books.len(), 2);
    assert_eq!(result.books[0].id(), BookId(0));
    assert_eq!(result.books[1].id(), BookId(1));
    assert_eq!(result.books[1].title(), "Elantris");
}

#[test]
fn test_ingest_without_header_skip() {
    let parser = LibraryParser::new().unwrap();
    let lines = [create_mistborn_line()];

    let result = parser.ingest(&lines, false);

    assert_eq!(result.stats.total_lines, 1);
    assert_eq!(result.books.len(), 1);
}

#[test]
fn test_realistic_line_values() {
    let parser = LibraryParser::new().unwrap();
    let result = parser.ingest(&[create_mistborn_line()], false);
    let book = &result.books[0];

    assert_eq!(book.title(), "The Final Empire");
    assert_eq!(book.series(), "Mistborn");
    assert_eq!(book.rating_sort_value(), 4.5);
    assert_eq!(book.ratings_sort_value(), 1204.0);
    assert_eq!(book.fields().subtitle, "Mistborn, Book 1");
    assert_eq!(book.asin(), "B002UZMLXM");
}

#[test]
fn test_ingest_source_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", TEST_HEADER).unwrap();
    writeln!(temp_file, "{}", create_mistborn_line()).unwrap();

    let parser = LibraryParser::new().unwrap();
    let source = FileLineSource::new(temp_file.path());
    let result = parser.ingest_source(&source, true).unwrap();

    assert_eq!(result.stats.records_parsed, 1);
    assert_eq!(result.books[0].author(), "Sanderson, Brandon");
}

#[test]
fn test_ingest_source_missing_file() {
    let parser = LibraryParser::new().unwrap();
    let source = FileLineSource::new("/no/such/ALE-spreadsheet-library-v1.csv");

    let error = parser.ingest_source(&source, true).unwrap_err();

    assert!(matches!(error, Error::SourceUnavailable { .. }));
}

#[test]
fn test_ingest_static_source() {
    let parser = LibraryParser::new().unwrap();
    let source = StaticLines::new([TEST_HEADER.to_string(), create_mistborn_line()]);

    assert_eq!(source.read_lines().unwrap().len(), 2);
    let result = parser.ingest_source(&source, true).unwrap();
    assert_eq!(result.books.len(), 1);
}
