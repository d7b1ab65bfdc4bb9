//! Filter state and requests
//!
//! The active selector is a single enum value, so two predicates can never be
//! active at once.

use crate::app::models::ProgressCategory;
use serde::Serialize;
use std::fmt;

/// Record field compared by the same-X filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SameField {
    Author,
    Series,
    Narrator,
}

impl SameField {
    pub fn name(self) -> &'static str {
        match self {
            SameField::Author => "author",
            SameField::Series => "series",
            SameField::Narrator => "narrator",
        }
    }
}

impl fmt::Display for SameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The one active selector, with the value it compares against
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub enum ActiveFilter {
    #[default]
    None,
    /// Anchor value copied from the selection when the filter was activated
    Same { field: SameField, anchor: String },
    Progress(ProgressCategory),
    Search(String),
}

/// Filter state owned by the catalog and passed to the engine explicitly
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterState {
    active: ActiveFilter,
}

impl FilterState {
    pub fn new(active: ActiveFilter) -> Self {
        Self { active }
    }

    pub fn active(&self) -> &ActiveFilter {
        &self.active
    }

    pub fn is_none(&self) -> bool {
        self.active == ActiveFilter::None
    }

    /// Whether the given same-X toggle is on
    pub fn is_same(&self, field: SameField) -> bool {
        matches!(&self.active, ActiveFilter::Same { field: f, .. } if *f == field)
    }

    /// Progress control value; `All` unless the progress filter is active
    pub fn progress_category(&self) -> ProgressCategory {
        match self.active {
            ActiveFilter::Progress(category) => category,
            _ => ProgressCategory::All,
        }
    }

    /// Search box contents; empty unless the search filter is active
    pub fn search_text(&self) -> &str {
        match &self.active {
            ActiveFilter::Search(text) => text,
            _ => "",
        }
    }

    /// Short description for logs and the CLI header
    pub fn describe(&self) -> String {
        match &self.active {
            ActiveFilter::None => "no filter".to_string(),
            ActiveFilter::Same { field, anchor } => format!("same {}: {}", field, anchor),
            ActiveFilter::Progress(category) => format!("progress: {}", category),
            ActiveFilter::Search(text) => format!("search: \"{}\"", text),
        }
    }
}

/// A user request against the filter controls
#[derive(Debug, Clone, PartialEq)]
pub enum FilterRequest {
    /// Turn every selector off
    Clear,
    /// Turn a same-X toggle on (anchored at the current selection)
    Same(SameField),
    /// Turn a same-X toggle off
    Unset(SameField),
    /// Pick a progress category; `All` turns the progress filter off
    Progress(ProgressCategory),
    /// Type into the search box; blank text turns the search filter off
    Search(String),
}

/// A control the engine resets programmatically while activating a selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlReset {
    ToggleOff(SameField),
    ProgressToAll,
    SearchCleared,
    SelectionCleared,
}

/// Outcome of a validated filter request
#[derive(Debug, Clone, PartialEq)]
pub struct FilterTransition {
    pub state: FilterState,
    /// Other controls reset as part of the activation
    pub resets: Vec<ControlReset>,
}

impl FilterTransition {
    pub fn clears_selection(&self) -> bool {
        self.resets.contains(&ControlReset::SelectionCleared)
    }
}

/// Which same-X toggles can be enabled for the current selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterAvailability {
    pub same_author: bool,
    pub same_series: bool,
    pub same_narrator: bool,
}
