//! Catalog orchestration
//!
//! The [`Catalog`] owns the record set, the selection, the filter and sort
//! state, and the current annotated view. Every user action runs exactly one
//! Filter -> Sort -> Annotate rebuild. Control resets performed while a filter
//! is being activated go through the same change handler, where a latch turns
//! them into no-ops.

use tracing::{debug, info, warn};

use crate::app::adapters::filesystem::LineSource;
use crate::app::models::{Book, BookId, SortColumn, SortDirection};
use crate::app::services::filter_engine::{
    self, ControlReset, FilterAvailability, FilterRequest, FilterState,
};
use crate::app::services::grouping;
use crate::app::services::library_parser::{IngestResult, IngestStats, LibraryParser};
use crate::app::services::sort_engine::{SortState, sort_view};
use crate::constants::DEFAULT_SKIP_WARNING_THRESHOLD;
use crate::{Error, Result};

/// What happened to the selection after a selection request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The record is selected and visible in the view
    Retained(BookId),
    /// Nothing is selected
    Cleared,
}

/// A control change routed through the catalog's change handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlEvent {
    FilterControl(ControlReset),
    Selection,
}

/// Browsable audiobook catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    selection: Option<BookId>,
    filter: FilterState,
    sort: SortState,
    view: Vec<BookId>,
    /// Set while a filter activation resets the other controls
    updating_filters: bool,
    rebuild_count: usize,
    ingest_stats: IngestStats,
    skip_warning_threshold: f64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            selection: None,
            filter: FilterState::default(),
            sort: SortState::default(),
            view: Vec::new(),
            updating_filters: false,
            rebuild_count: 0,
            ingest_stats: IngestStats::default(),
            skip_warning_threshold: DEFAULT_SKIP_WARNING_THRESHOLD,
        }
    }

    /// Skip percentage above which ingestion logs a warning
    pub fn with_skip_warning_threshold(mut self, threshold: f64) -> Self {
        self.skip_warning_threshold = threshold;
        self
    }

    // -------------------------------------------------------------------------
    // Ingestion
    // -------------------------------------------------------------------------

    /// Read a source and replace the record set
    ///
    /// If the source cannot be read the current records are kept and the
    /// error is returned.
    pub fn load(
        &mut self,
        parser: &LibraryParser,
        source: &dyn LineSource,
        skip_header: bool,
    ) -> Result<&IngestStats> {
        let result = parser.ingest_source(source, skip_header)?;
        Ok(self.replace_records(result))
    }

    /// Parse raw lines and replace the record set
    pub fn ingest<S: AsRef<str>>(
        &mut self,
        parser: &LibraryParser,
        lines: &[S],
        skip_header: bool,
    ) -> &IngestStats {
        let result = parser.ingest(lines, skip_header);
        self.replace_records(result)
    }

    /// Swap in a freshly ingested set; selection and filter reset, sort kept
    fn replace_records(&mut self, result: IngestResult) -> &IngestStats {
        let IngestResult { books, stats } = result;

        if stats.skip_rate() > self.skip_warning_threshold {
            warn!(
                "{:.1}% of lines were skipped ({} of {})",
                stats.skip_rate(),
                stats.lines_skipped,
                stats.total_lines
            );
        }

        self.books = books;
        self.ingest_stats = stats;
        self.selection = None;
        self.filter = FilterState::default();
        self.rebuild();

        &self.ingest_stats
    }

    // -------------------------------------------------------------------------
    // User Actions
    // -------------------------------------------------------------------------

    /// Select a record, or clear the selection with `None`
    pub fn set_selection(&mut self, id: Option<BookId>) -> Result<SelectionOutcome> {
        if let Some(id) = id {
            if self.book(id).is_none() {
                return Err(Error::unknown_record(id.0));
            }
        }

        self.selection = id;
        self.on_control_changed(ControlEvent::Selection);

        Ok(match self.selection {
            Some(id) => SelectionOutcome::Retained(id),
            None => SelectionOutcome::Cleared,
        })
    }

    /// Apply a filter request and return the resulting view
    ///
    /// A rejected request leaves filter, selection and view untouched.
    pub fn set_filter(&mut self, request: FilterRequest) -> Result<&[BookId]> {
        if self.updating_filters {
            debug!("Ignoring nested filter request {:?}", request);
            return Ok(&self.view);
        }

        let transition = match filter_engine::transition(&self.filter, &request, self.selected()) {
            Ok(transition) => transition,
            Err(e) => {
                warn!("Rejected filter request {:?}: {}", request, e);
                return Err(e);
            }
        };

        self.updating_filters = true;
        if transition.clears_selection() {
            self.selection = None;
        }
        self.filter = transition.state;
        for reset in transition.resets {
            let event = match reset {
                ControlReset::SelectionCleared => ControlEvent::Selection,
                other => ControlEvent::FilterControl(other),
            };
            self.on_control_changed(event);
        }
        self.updating_filters = false;

        self.rebuild();
        Ok(&self.view)
    }

    /// Sort by a column; repeating the last column flips its direction
    pub fn set_sort(&mut self, column: SortColumn) -> &[BookId] {
        let direction = self.sort.request(column);
        debug!("Sort requested: {} {:?}", column, direction);
        self.rebuild();
        &self.view
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Records of the annotated view, in view order
    pub fn current_view(&self) -> Vec<&Book> {
        self.view.iter().filter_map(|id| self.book(*id)).collect()
    }

    pub fn view_ids(&self) -> &[BookId] {
        &self.view
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(id.0)
    }

    /// First record with this ASIN (case-insensitive)
    pub fn find_by_asin(&self, asin: &str) -> Option<&Book> {
        let asin = asin.trim();
        self.books
            .iter()
            .find(|book| !asin.is_empty() && book.asin().eq_ignore_ascii_case(asin))
    }

    pub fn selection(&self) -> Option<BookId> {
        self.selection
    }

    /// The selected record
    pub fn selected(&self) -> Option<&Book> {
        self.selection.and_then(|id| self.book(id))
    }

    /// Which same-X toggles the current selection allows
    pub fn availability(&self) -> FilterAvailability {
        filter_engine::availability(self.selected())
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort_state(&self) -> Option<(SortColumn, SortDirection)> {
        self.sort.current()
    }

    /// Number of completed rebuild passes
    pub fn rebuild_count(&self) -> usize {
        self.rebuild_count
    }

    pub fn ingest_stats(&self) -> &IngestStats {
        &self.ingest_stats
    }

    // -------------------------------------------------------------------------
    // Rebuild
    // -------------------------------------------------------------------------

    fn on_control_changed(&mut self, event: ControlEvent) {
        if self.updating_filters {
            debug!("Suppressed rebuild for {:?}", event);
            return;
        }
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let filtered = filter_engine::apply_filter(&self.books, &self.filter);

        let ordered = match self.sort.current() {
            Some((column, direction)) => sort_view(&self.books, &filtered, column, direction),
            None => filtered,
        };

        grouping::annotate(&mut self.books, &ordered, self.sort.active_column());

        if let Some(id) = self.selection {
            if !ordered.contains(&id) {
                debug!("Selection {} left the view; clearing", id);
                self.selection = None;
            }
        }

        self.view = ordered;
        self.rebuild_count += 1;

        info!(
            "View rebuilt: {} of {} books ({})",
            self.view.len(),
            self.books.len(),
            self.filter.describe()
        );
    }
}
