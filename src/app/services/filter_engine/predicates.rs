//! Filter predicates over book records
//!
//! Applies the single active selector of a [`FilterState`] to the full record
//! set. The result keeps source order; it is a filter, not a sort.

use super::state::{ActiveFilter, FilterState, SameField};
use crate::app::models::{Book, BookId, eq_trimmed_ignore_case};
use tracing::debug;

/// Reduce the record set to the ids matching the active selector
pub fn apply_filter(books: &[Book], state: &FilterState) -> Vec<BookId> {
    let search_lower = state.search_text().to_lowercase();

    let filtered: Vec<BookId> = books
        .iter()
        .filter(|book| matches_active(book, state.active(), &search_lower))
        .map(Book::id)
        .collect();

    debug!(
        "Filter ({}): {} -> {} books",
        state.describe(),
        books.len(),
        filtered.len()
    );

    filtered
}

fn matches_active(book: &Book, active: &ActiveFilter, search_lower: &str) -> bool {
    match active {
        ActiveFilter::None => true,
        ActiveFilter::Same { field, anchor } => {
            let value = match field {
                SameField::Author => book.author(),
                SameField::Series => book.series(),
                SameField::Narrator => book.narrator(),
            };
            eq_trimmed_ignore_case(value, anchor)
        }
        ActiveFilter::Progress(category) => category.matches(book.progress()),
        ActiveFilter::Search(_) => {
            book.title().to_lowercase().contains(search_lower)
                || book.author().to_lowercase().contains(search_lower)
        }
    }
}
