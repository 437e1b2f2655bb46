//! Query engine over an in-memory record set.
//!
//! Holds the full record set and a derived view: the indices of the records
//! that match the search term, in sort order. The view is recomputed from
//! scratch by [`compute_view`] whenever the search term, sort column or sort
//! direction changes; paging only moves a window over it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut engine = QueryEngine::new(outcome.records);
//! engine.set_search_term("doe");
//! engine.set_sort(SortColumn::Email);
//! for record in engine.current_page_records() {
//!     println!("{}", record.email);
//! }
//! ```
//!
//! Invalid interactive input (a zero page size, a command that would not
//! change anything) is ignored: every mutation returns `false` and leaves the
//! state untouched.

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::types::{Record, SortColumn, SortDirection};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Initial view parameters for a new engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    pub page_size: usize,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort_column: SortColumn::default(),
            sort_direction: SortDirection::default(),
        }
    }
}

/// Current search, sort and paging parameters
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Substring filter; empty means no filter
    pub search_term: String,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
    /// Rows per page (always positive)
    pub page_size: usize,
    /// Current page (1-indexed)
    pub current_page: usize,
}

/// Filter and sort `records`, returning the matching indices in view order.
///
/// Matching is a case-insensitive substring test against all six attributes.
/// Ordering is ordinal on the selected column and stable, so records with
/// equal keys keep their input order in both directions.
pub fn compute_view(
    records: &[Record],
    search_term: &str,
    sort_column: SortColumn,
    sort_direction: SortDirection,
) -> Vec<usize> {
    let mut indices: Vec<usize> = if search_term.is_empty() {
        (0..records.len()).collect()
    } else {
        let needle = fold_case(search_term);
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| matches_term(record, &needle))
            .map(|(i, _)| i)
            .collect()
    };

    let key = sort_column.key();
    // stable: equal keys stay in input order in both directions
    indices.sort_by(|&a, &b| sort_direction.apply(key(&records[a]).cmp(key(&records[b]))));
    indices
}

/// Per-character lowercase with no context rules, so a literal substring
/// always folds to a substring of the folded field
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// `needle` must already be folded with [`fold_case`]
fn matches_term(record: &Record, needle: &str) -> bool {
    record
        .fields()
        .iter()
        .any(|value| fold_case(value).contains(needle))
}

/// Owns the record set and the current view over it.
pub struct QueryEngine {
    /// Full record set, fixed after construction
    records: Vec<Record>,
    /// Record indices after filtering and sorting
    view: Vec<usize>,
    state: ViewState,
    /// Number of view recomputations so far
    generation: u64,
}

impl QueryEngine {
    /// Create an engine with the default view (sorted by id, ascending, 10 per page)
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_options(records, ViewOptions::default())
    }

    /// Create an engine with initial view parameters.
    ///
    /// A zero page size falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn with_options(records: Vec<Record>, options: ViewOptions) -> Self {
        let page_size = if options.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            options.page_size
        };

        let mut engine = Self {
            records,
            view: Vec::new(),
            state: ViewState {
                search_term: String::new(),
                sort_column: options.sort_column,
                sort_direction: options.sort_direction,
                page_size,
                current_page: 1,
            },
            generation: 0,
        };
        engine.recompute();
        engine
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Replace the search term. Returns `false` if it is unchanged.
    pub fn set_search_term(&mut self, term: &str) -> bool {
        if self.state.search_term == term {
            tracing::trace!("Search term unchanged, ignoring");
            return false;
        }
        self.state.search_term = term.to_string();
        self.recompute();
        true
    }

    /// Sort by another column, keeping the direction.
    pub fn set_sort(&mut self, column: SortColumn) -> bool {
        if self.state.sort_column == column {
            return false;
        }
        self.state.sort_column = column;
        self.recompute();
        true
    }

    pub fn toggle_sort_direction(&mut self) -> bool {
        self.state.sort_direction = self.state.sort_direction.toggled();
        self.recompute();
        true
    }

    /// Change rows per page. Zero or the current size is ignored.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if size == 0 || size == self.state.page_size {
            tracing::trace!(size, "Ignoring page size");
            return false;
        }
        self.state.page_size = size;
        self.state.current_page = 1;
        true
    }

    /// Change rows per page from user-entered text.
    ///
    /// Anything that is not a positive integer is ignored.
    pub fn set_page_size_text(&mut self, text: &str) -> bool {
        match text.trim().parse::<usize>() {
            Ok(size) => self.set_page_size(size),
            Err(_) => {
                tracing::trace!(text, "Ignoring unparsable page size");
                false
            }
        }
    }

    pub fn next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.state.current_page += 1;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.state.current_page -= 1;
        true
    }

    pub fn first_page(&mut self) -> bool {
        if self.state.current_page == 1 {
            return false;
        }
        self.state.current_page = 1;
        true
    }

    pub fn last_page(&mut self) -> bool {
        let last = self.total_pages();
        if self.state.current_page == last {
            return false;
        }
        self.state.current_page = last;
        true
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Records on the current page, in view order
    pub fn current_page_records(&self) -> Vec<&Record> {
        self.view[self.visible_range()]
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    /// Range of view positions shown on the current page
    pub fn visible_range(&self) -> Range<usize> {
        let start = ((self.state.current_page - 1) * self.state.page_size).min(self.view.len());
        let end = (start + self.state.page_size).min(self.view.len());
        start..end
    }

    /// Number of pages in the view (at least 1, even when empty)
    pub fn total_pages(&self) -> usize {
        self.view.len().div_ceil(self.state.page_size).max(1)
    }

    pub fn can_go_prev(&self) -> bool {
        self.state.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.state.current_page < self.total_pages()
    }

    /// Records that pass the current filter
    pub fn filtered_count(&self) -> usize {
        self.view.len()
    }

    /// Records loaded, regardless of filter
    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn search_term(&self) -> &str {
        &self.state.search_term
    }

    pub fn sort_column(&self) -> SortColumn {
        self.state.sort_column
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.state.sort_direction
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    /// Incremented on every view recomputation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn recompute(&mut self) {
        let start = std::time::Instant::now();
        self.view = compute_view(
            &self.records,
            &self.state.search_term,
            self.state.sort_column,
            self.state.sort_direction,
        );
        self.state.current_page = 1;
        self.generation += 1;

        tracing::debug!(
            matched = self.view.len(),
            total = self.records.len(),
            column = ?self.state.sort_column,
            direction = ?self.state.sort_direction,
            "Recomputed view in {:?}",
            start.elapsed()
        );
    }
}
