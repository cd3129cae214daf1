//! Query - Filter, Sort and Page Descriptors
//!
//! Plain caller-owned values describing what slice of a table to show.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Field and direction used to order records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }
}

/// Active per-field text queries.
///
/// An empty query string places no constraint on its field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    queries: BTreeMap<String, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: impl Into<String>, query: impl Into<String>) -> Self {
        self.set(field, query);
        self
    }

    /// Set the query for a field
    pub fn set(&mut self, field: impl Into<String>, query: impl Into<String>) {
        self.queries.insert(field.into(), query.into());
    }

    /// Pairs with a non-empty query
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.queries
            .iter()
            .filter(|(_, q)| !q.is_empty())
            .map(|(f, q)| (f.as_str(), q.as_str()))
    }

    pub fn clear(&mut self) {
        self.queries.clear();
    }
}

/// A 1-based page window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }
}

/// Everything the pipeline needs besides the records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub filters: FilterSet,
    pub sort: Option<SortSpec>,
    pub page: PageRequest,
}

/// One page of output plus pagination metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    pub records: Vec<R>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Number of records before slicing
    pub total_records: usize,
}

impl<R> Page<R> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_set_active_skips_empty() {
        let filters = FilterSet::new().with("name", "jo").with("status", "");
        let active: Vec<_> = filters.active().collect();
        assert_eq!(active, vec![("name", "jo")]);
        assert_eq!(FilterSet::new().with("name", "").active().count(), 0);
    }

    #[test]
    fn test_sort_direction_reversed() {
        assert_eq!(SortDirection::Ascending.reversed(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.reversed(), SortDirection::Ascending);
    }

    #[test]
    fn test_page_navigation_flags() {
        let page = |current_page, total_pages| Page::<u8> {
            records: vec![],
            current_page,
            total_pages,
            total_records: total_pages * 4,
        };
        assert!(!page(1, 3).has_previous());
        assert!(page(1, 3).has_next());
        assert!(page(3, 3).has_previous());
        assert!(!page(3, 3).has_next());
        assert!(!page(1, 0).has_previous());
        assert!(!page(1, 0).has_next());
    }
}
