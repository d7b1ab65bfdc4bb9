//! Column sorting for filtered views
//!
//! Each column is configured as a [`CompoundKey`]: an optional empty-last rule
//! plus a chain of keys with per-key direction policies. The engine itself is
//! one stable sort driven by that configuration.
//!
//! # Architecture
//!
//! - `compound_key`: generic key-chain comparison
//! - `columns`: the key chain for every [`SortColumn`]
//! - [`SortState`]: the sticky (column, direction) pair
//!
//! # Usage
//!
//! ```rust,no_run
//! use audiobook_catalog::app::models::{Book, BookId, SortColumn};
//! use audiobook_catalog::app::services::sort_engine::{SortState, sort_view};
//!
//! # fn example(books: &[Book], view: &[BookId]) {
//! let mut state = SortState::default();
//! let direction = state.request(SortColumn::Author);
//! let ordered = sort_view(books, view, SortColumn::Author, direction);
//! # }
//! ```

pub mod columns;
pub mod compound_key;

pub use columns::key_chain;
pub use compound_key::{CompoundKey, KeyOrder, SortKey, SortValue};

use crate::app::models::{Book, BookId, SortColumn, SortDirection};
use serde::Serialize;
use tracing::debug;

/// Last requested column and its direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortState {
    last: Option<(SortColumn, SortDirection)>,
}

impl SortState {
    /// Register a sort request and return the direction to apply
    ///
    /// Requesting the last-sorted column again flips its direction; any other
    /// column starts ascending.
    pub fn request(&mut self, column: SortColumn) -> SortDirection {
        let direction = match self.last {
            Some((last, direction)) if last == column => direction.flip(),
            _ => SortDirection::Ascending,
        };
        self.last = Some((column, direction));
        direction
    }

    /// The pair re-applied on every rebuild, if any sort was requested
    pub fn current(&self) -> Option<(SortColumn, SortDirection)> {
        self.last
    }

    pub fn active_column(&self) -> Option<SortColumn> {
        self.last.map(|(column, _)| column)
    }
}

/// Order a view by a column's compound key
///
/// The sort is stable, so records the chain considers equal keep their input
/// order. Ids not present in `books` are dropped.
pub fn sort_view(
    books: &[Book],
    view: &[BookId],
    column: SortColumn,
    direction: SortDirection,
) -> Vec<BookId> {
    let chain = key_chain(column);
    let mut records: Vec<&Book> = view.iter().filter_map(|id| books.get(id.0)).collect();

    records.sort_by(|a, b| chain.compare(a, b, direction));

    debug!(
        "Sorted {} books by {} {:?} ({})",
        records.len(),
        column,
        direction,
        chain.describe()
    );

    records.into_iter().map(Book::id).collect()
}
