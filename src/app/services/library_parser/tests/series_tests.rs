//! Tests for series marker extraction

use crate::app::services::library_parser::series_info::SeriesInfoExtractor;

fn extract(series: &str, book_number: &str) -> (String, String) {
    SeriesInfoExtractor::new()
        .unwrap()
        .extract(series, book_number)
}

#[test]
fn test_marker_removed_case_insensitively() {
    assert_eq!(
        extract("Mistborn (book 1)", "1"),
        ("Mistborn".to_string(), "1".to_string())
    );
    assert_eq!(
        extract("The Expanse (BOOK 12)", " 9 "),
        ("The Expanse".to_string(), "9".to_string())
    );
}

#[test]
fn test_marker_number_never_becomes_book_number() {
    let (series, book_number) = extract("Discworld (Book 41)", "");
    assert_eq!(series, "Discworld");
    assert_eq!(book_number, "");
}

#[test]
fn test_marker_in_middle_of_text() {
    let (series, _) = extract("Cosmere (Book 3) Collection", "3");
    assert_eq!(series, "Cosmere Collection");
}

#[test]
fn test_text_without_marker_is_trimmed() {
    assert_eq!(
        extract("  Stormlight Archive  ", "2.5"),
        ("Stormlight Archive".to_string(), "2.5".to_string())
    );
    // Missing digits or whitespace: not a marker
    assert_eq!(extract("Dune (book)", "").0, "Dune (book)");
    assert_eq!(extract("Dune (book1)", "").0, "Dune (book1)");
}

#[test]
fn test_blank_series_passes_book_number_through() {
    assert_eq!(extract("   ", " 4 "), (String::new(), "4".to_string()));
    assert_eq!(extract("", ""), (String::new(), String::new()));
}
