//! Generic compound-key comparison
//!
//! A column's ordering is an optional empty-last rule followed by a chain of
//! keys, each with its own direction policy. Keys are evaluated left to right
//! and the first non-equal comparison wins.

use crate::app::models::{Book, SortDirection, cmp_ignore_case};
use std::cmp::Ordering;

/// One comparable value extracted from a record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    /// Compared ordinally with case folding
    Text(&'a str),
    Number(f64),
    Ordinal(u8),
}

impl SortValue<'_> {
    /// Ascending comparison between two values of the same kind
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => cmp_ignore_case(a, b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Ordinal(a), SortValue::Ordinal(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Direction policy of a key within a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrder {
    /// Follows the requested direction
    Requested,
    /// Always ascending, whatever was requested
    Ascending,
    /// Always descending, whatever was requested
    Descending,
}

impl KeyOrder {
    fn resolve(self, requested: SortDirection) -> SortDirection {
        match self {
            KeyOrder::Requested => requested,
            KeyOrder::Ascending => SortDirection::Ascending,
            KeyOrder::Descending => SortDirection::Descending,
        }
    }
}

/// Extractor for one key of a chain
pub type KeyExtractor = for<'a> fn(&'a Book) -> SortValue<'a>;

/// Predicate marking a record as blank for the empty-last rule
pub type EmptyCheck = fn(&Book) -> bool;

/// A named key with its extractor and direction policy
#[derive(Debug, Clone, Copy)]
pub struct SortKey {
    pub name: &'static str,
    pub extract: KeyExtractor,
    pub order: KeyOrder,
}

impl SortKey {
    pub const fn requested(name: &'static str, extract: KeyExtractor) -> Self {
        Self {
            name,
            extract,
            order: KeyOrder::Requested,
        }
    }

    pub const fn ascending(name: &'static str, extract: KeyExtractor) -> Self {
        Self {
            name,
            extract,
            order: KeyOrder::Ascending,
        }
    }

    pub const fn descending(name: &'static str, extract: KeyExtractor) -> Self {
        Self {
            name,
            extract,
            order: KeyOrder::Descending,
        }
    }

    fn compare(&self, a: &Book, b: &Book, direction: SortDirection) -> Ordering {
        let ordering = (self.extract)(a).compare(&(self.extract)(b));
        self.order.resolve(direction).apply(ordering)
    }
}

/// Ordered key chain with an optional empty-last rule
#[derive(Debug, Clone, Copy)]
pub struct CompoundKey {
    pub empty_last: Option<EmptyCheck>,
    pub keys: &'static [SortKey],
}

impl CompoundKey {
    /// Compare two records under the requested direction
    ///
    /// Blank records go after non-blank ones in either direction, and two
    /// blank records compare equal without consulting the chain.
    pub fn compare(&self, a: &Book, b: &Book, direction: SortDirection) -> Ordering {
        if let Some(is_empty) = self.empty_last {
            match (is_empty(a), is_empty(b)) {
                (true, true) => return Ordering::Equal,
                (true, false) => return Ordering::Greater,
                (false, true) => return Ordering::Less,
                (false, false) => {}
            }
        }

        self.keys
            .iter()
            .map(|key| key.compare(a, b, direction))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Key names in evaluation order, for logging
    pub fn describe(&self) -> String {
        let names: Vec<&str> = self.keys.iter().map(|key| key.name).collect();
        names.join(" -> ")
    }
}
