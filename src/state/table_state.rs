//! TableState - Caller-Owned Table View State
//!
//! Holds the records plus the current filter, sort and page. Every change goes
//! through a method here; the visible rows are recomputed by [`TableState::view`].

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::domain::pipeline;
use crate::domain::query::{FilterSet, Page, PageRequest, SortDirection, SortSpec, TableQuery};
use crate::domain::record::Record;

/// State for one data table
#[derive(Debug, Clone)]
pub struct TableState {
    records: Vec<Record>,
    filters: FilterSet,
    sort: Option<SortSpec>,
    page: usize,
    page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    pub fn new(records: Vec<Record>, page_size: usize) -> Self {
        Self {
            records,
            filters: FilterSet::new(),
            sort: None,
            page: 1,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Set or clear a field query; any filter change returns to page 1
    pub fn set_filter(&mut self, field: impl Into<String>, query: impl Into<String>) {
        self.filters.set(field, query);
        self.page = 1;
    }

    /// Drop every field query and return to page 1
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 1;
    }

    /// Header click: flip the direction on the current field, otherwise sort
    /// the new field ascending
    pub fn toggle_sort(&mut self, field: &str) {
        let next = match &self.sort {
            Some(spec) if spec.field == field => SortSpec::new(field, spec.direction.reversed()),
            _ => SortSpec::new(field, SortDirection::Ascending),
        };
        tracing::debug!("Sorting by {} {:?}", next.field, next.direction);
        self.sort = Some(next);
    }

    /// Builder-style initial sort
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Number of records that pass the current filters
    pub fn filtered_count(&self) -> usize {
        pipeline::filter(&self.records, &self.filters).len()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(self.page_size)
    }

    /// Move to a page, clamped to `1..=max(total_pages, 1)`
    pub fn set_page(&mut self, page: usize) {
        let last = self.total_pages().max(1);
        self.page = page.clamp(1, last);
    }

    /// Change rows per page and return to page 1
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self.page = 1;
    }

    pub fn query(&self) -> TableQuery {
        TableQuery {
            filters: self.filters.clone(),
            sort: self.sort.clone(),
            page: PageRequest::new(self.page, self.page_size),
        }
    }

    /// Run the pipeline for the current state
    pub fn view(&self) -> Page<Record> {
        pipeline::run(&self.records, &self.query())
    }

    /// Filtered and sorted records across all pages
    pub fn visible_records(&self) -> Vec<Record> {
        let filtered = pipeline::filter(&self.records, &self.filters);
        match &self.sort {
            Some(spec) => pipeline::sort(&filtered, spec),
            None => filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Record> {
        [
            ("John Doe", 30),
            ("Jane Smith", 25),
            ("Bob Johnson", 35),
            ("Alice Brown", 28),
            ("Charlie Wilson", 42),
        ]
        .into_iter()
        .map(|(name, age)| Record::new().with("name", name).with("age", age))
        .collect()
    }

    fn names(view: &Page<Record>) -> Vec<String> {
        view.records
            .iter()
            .filter_map(|r| r.get("name"))
            .map(|v| v.to_string())
            .collect()
    }

    #[test]
    fn test_toggle_sort_flips_then_resets() {
        let mut state = TableState::new(people(), 5);
        state.toggle_sort("age");
        assert_eq!(state.sort(), Some(&SortSpec::ascending("age")));
        state.toggle_sort("age");
        assert_eq!(state.sort(), Some(&SortSpec::new("age", SortDirection::Descending)));
        state.toggle_sort("name");
        assert_eq!(state.sort(), Some(&SortSpec::ascending("name")));
    }

    #[test]
    fn test_set_filter_resets_page() {
        let mut state = TableState::new(people(), 2);
        state.set_page(3);
        assert_eq!(state.view().current_page, 3);
        state.set_filter("name", "jo");
        assert_eq!(state.view().current_page, 1);

        let view = state.view();
        assert_eq!(names(&view), vec!["John Doe", "Bob Johnson"]);
        assert_eq!(view.total_records, 2);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut state = TableState::new(people(), 2);
        state.set_page(0);
        assert_eq!(state.view().current_page, 1);
        state.set_page(99);
        assert_eq!(state.view().current_page, 3);
        assert!(!state.view().has_next());
        state.set_page(2);
        assert!(state.view().has_previous());

        let mut empty = TableState::new(Vec::new(), 2);
        empty.set_page(5);
        assert_eq!(empty.view().current_page, 1);
        assert_eq!(empty.view().total_pages, 0);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut state = TableState::new(people(), 2);
        state.set_page(2);
        state.set_page_size(0);
        assert_eq!(state.view().current_page, 1);
        assert_eq!(state.total_pages(), 5);
    }

    #[test]
    fn test_view_sorted_first_page() {
        let mut state = TableState::new(people(), 2);
        state.toggle_sort("age");
        let view = state.view();
        assert_eq!(names(&view), vec!["Jane Smith", "Alice Brown"]);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.total_pages, 3);
    }

    #[test]
    fn test_clear_filters_and_initial_sort() {
        let mut state = TableState::new(people(), 2).with_sort(SortSpec::ascending("age"));
        state.set_filter("name", "jo");
        state.set_page(2);
        state.clear_filters();
        assert_eq!(state.view().current_page, 1);
        assert_eq!(state.filtered_count(), 5);
        assert_eq!(names(&state.view()), vec!["Jane Smith", "Alice Brown"]);
    }

    #[test]
    fn test_visible_records_spans_pages() {
        let mut state = TableState::new(people(), 2);
        state.toggle_sort("age");
        state.toggle_sort("age");
        let all = state.visible_records();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].get("name").map(|v| v.to_string()), Some("Charlie Wilson".into()));
    }
}
