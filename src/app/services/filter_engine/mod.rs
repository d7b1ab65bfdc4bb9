//! Mutually exclusive record filtering
//!
//! This module validates filter requests against the current selection,
//! computes the resulting [`FilterState`], and reduces the record set to the
//! matching subsequence. At most one predicate is ever evaluated.

pub mod predicates;
pub mod state;

pub use predicates::apply_filter;
pub use state::{
    ActiveFilter, ControlReset, FilterAvailability, FilterRequest, FilterState, FilterTransition,
    SameField,
};

use crate::app::models::{Book, ProgressCategory, is_blank};
use crate::{Error, Result};
use tracing::debug;

/// Which same-X toggles may be switched on for this selection
pub fn availability(selection: Option<&Book>) -> FilterAvailability {
    match selection {
        Some(book) => FilterAvailability {
            same_author: true,
            same_series: !is_blank(book.series()),
            same_narrator: !is_blank(book.narrator()),
        },
        None => FilterAvailability::default(),
    }
}

/// Validate a request and compute the next filter state
///
/// On error the caller keeps its current state; nothing here mutates it.
pub fn transition(
    current: &FilterState,
    request: &FilterRequest,
    selection: Option<&Book>,
) -> Result<FilterTransition> {
    let (active, resets) = match request {
        FilterRequest::Clear => (ActiveFilter::None, Vec::new()),

        FilterRequest::Same(field) => {
            let anchor = same_anchor(*field, selection)?;
            (
                ActiveFilter::Same {
                    field: *field,
                    anchor,
                },
                resets_except(current, Some(*field), false, false),
            )
        }

        FilterRequest::Unset(field) => {
            if current.is_same(*field) {
                (ActiveFilter::None, Vec::new())
            } else {
                (current.active().clone(), Vec::new())
            }
        }

        FilterRequest::Progress(ProgressCategory::All) => match current.active() {
            ActiveFilter::Progress(_) => (ActiveFilter::None, Vec::new()),
            other => (other.clone(), Vec::new()),
        },

        FilterRequest::Progress(category) => {
            let mut resets = resets_except(current, None, true, false);
            if selection.is_some() {
                resets.push(ControlReset::SelectionCleared);
            }
            (ActiveFilter::Progress(*category), resets)
        }

        FilterRequest::Search(text) if is_blank(text) => match current.active() {
            ActiveFilter::Search(_) => (ActiveFilter::None, Vec::new()),
            other => (other.clone(), Vec::new()),
        },

        FilterRequest::Search(text) => {
            let mut resets = resets_except(current, None, false, true);
            if selection.is_some() {
                resets.push(ControlReset::SelectionCleared);
            }
            (ActiveFilter::Search(text.clone()), resets)
        }
    };

    debug!("Filter transition: {:?} -> {:?}", current.active(), active);

    Ok(FilterTransition {
        state: FilterState::new(active),
        resets,
    })
}

/// Anchor value for a same-X filter, or the precondition that failed
fn same_anchor(field: SameField, selection: Option<&Book>) -> Result<String> {
    let filter = match field {
        SameField::Author => "same-author",
        SameField::Series => "same-series",
        SameField::Narrator => "same-narrator",
    };

    let book = selection.ok_or_else(|| {
        Error::filter_precondition(
            filter,
            format!("Please select a book first to filter by {}.", field),
        )
    })?;

    match field {
        SameField::Author => Ok(book.author().trim().to_string()),
        SameField::Series if is_blank(book.series()) => Err(Error::filter_precondition(
            filter,
            "The selected book is not part of a series.",
        )),
        SameField::Series => Ok(book.series().trim().to_string()),
        SameField::Narrator if is_blank(book.narrator()) => Err(Error::filter_precondition(
            filter,
            "The selected book has no narrator.",
        )),
        SameField::Narrator => Ok(book.narrator().trim().to_string()),
    }
}

/// Resets needed to switch every other control off
///
/// `keep` is the same-X toggle being activated; `keep_progress` and
/// `keep_search` are set when that control is the one being changed.
fn resets_except(
    current: &FilterState,
    keep: Option<SameField>,
    keep_progress: bool,
    keep_search: bool,
) -> Vec<ControlReset> {
    let mut resets = Vec::new();

    for field in [SameField::Author, SameField::Series, SameField::Narrator] {
        if Some(field) != keep && current.is_same(field) {
            resets.push(ControlReset::ToggleOff(field));
        }
    }
    if !keep_progress && current.progress_category() != ProgressCategory::All {
        resets.push(ControlReset::ProgressToAll);
    }
    if !keep_search && !current.search_text().is_empty() {
        resets.push(ControlReset::SearchCleared);
    }

    resets
}
