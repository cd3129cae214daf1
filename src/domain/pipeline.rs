//! Table Pipeline - Filter, Sort, Paginate
//!
//! Pure functions over caller-owned records. None of them mutate their input
//! and none of them fail: bad pages yield empty slices, missing fields fail
//! filters and sort to the end.
//!
//! The canonical order is [`filter`] → [`sort`] → [`paginate`], which is what
//! [`run`] does. Pagination must always come last.

use std::cmp::Ordering;

use crate::domain::query::{FilterSet, Page, SortDirection, SortSpec, TableQuery};
use crate::domain::record::{Fields, Value};

/// Keep records whose fields contain every active query, case-insensitively.
///
/// A record without the queried field never matches a non-empty query.
pub fn filter<R: Fields + Clone>(records: &[R], filters: &FilterSet) -> Vec<R> {
    let active: Vec<(&str, String)> = filters
        .active()
        .map(|(field, query)| (field, query.to_lowercase()))
        .collect();

    if active.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            active.iter().all(|(field, query)| {
                record
                    .field(field)
                    .is_some_and(|value| value.to_string().to_lowercase().contains(query.as_str()))
            })
        })
        .cloned()
        .collect()
}

/// Normalized sort key.
///
/// Variant order is the cross-type order: numbers, then text, then missing.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Number(f64),
    Text(String),
    Missing,
}

impl SortKey {
    fn of(value: Option<&Value>) -> Self {
        match value {
            None => SortKey::Missing,
            Some(value) => match value.as_number() {
                Some(n) => SortKey::Number(n),
                None => SortKey::Text(value.to_string().to_lowercase()),
            },
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Text(_) => 1,
            SortKey::Missing => 2,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Finite by construction; -0.0 and 0.0 compare equal
            (SortKey::Number(a), SortKey::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Stable sort by one field.
///
/// Descending flips the comparator, so equal keys keep their input order in
/// both directions.
pub fn sort<R: Fields + Clone>(records: &[R], spec: &SortSpec) -> Vec<R> {
    let mut keyed: Vec<(SortKey, &R)> = records
        .iter()
        .map(|record| (SortKey::of(record.field(&spec.field)), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.compare(b);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}

/// Slice out one 1-based page.
///
/// Page 0 and pages past the end give an empty slice. A page size of 0 is
/// treated as 1.
pub fn paginate<R: Clone>(records: &[R], page: usize, page_size: usize) -> Page<R> {
    let page_size = page_size.max(1);
    let total_records = records.len();
    let total_pages = total_records.div_ceil(page_size);

    let slice = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(page_size);
            if start >= total_records {
                &records[0..0]
            } else {
                let end = start.saturating_add(page_size).min(total_records);
                &records[start..end]
            }
        }
        None => &records[0..0],
    };

    Page {
        records: slice.to_vec(),
        current_page: page,
        total_pages,
        total_records,
    }
}

/// Run the full pipeline: filter, then sort (if requested), then paginate.
///
/// `total_records` on the result counts the filtered set.
pub fn run<R: Fields + Clone>(records: &[R], query: &TableQuery) -> Page<R> {
    let filtered = filter(records, &query.filters);
    let ordered = match &query.sort {
        Some(spec) => sort(&filtered, spec),
        None => filtered,
    };

    tracing::debug!(
        "Table pipeline: {} records, {} after filter, page {}/{}",
        records.len(),
        ordered.len(),
        query.page.page,
        ordered.len().div_ceil(query.page.page_size.max(1))
    );

    paginate(&ordered, query.page.page, query.page.page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::PageRequest;
    use crate::domain::record::Record;

    fn people() -> Vec<Record> {
        vec![
            Record::new().with("name", "John Doe").with("age", 30),
            Record::new().with("name", "Jane Smith").with("age", 25),
            Record::new().with("name", "Bob Johnson").with("age", 35),
            Record::new().with("name", "alice Brown").with("age", 28),
            Record::new().with("name", "Carol White").with("age", 42),
        ]
    }

    fn names(records: &[Record]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.get("name").map(|v| v.to_string()).unwrap_or_default())
            .collect()
    }

    fn ages(records: &[Record]) -> Vec<f64> {
        records
            .iter()
            .filter_map(|r| r.get("age").and_then(Value::as_number))
            .collect()
    }

    #[test]
    fn test_filter_empty_set_returns_equal_copy() {
        let records = people();
        let filtered = filter(&records, &FilterSet::new());
        assert_eq!(filtered, records);

        let blank = FilterSet::new().with("name", "");
        assert_eq!(filter(&records, &blank), records);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let records = vec![
            Record::new().with("name", "John Doe"),
            Record::new().with("name", "Jane Smith"),
            Record::new().with("name", "Bob Johnson"),
        ];
        let filtered = filter(&records, &FilterSet::new().with("name", "jo"));
        assert_eq!(names(&filtered), vec!["John Doe", "Bob Johnson"]);

        let upper = filter(&records, &FilterSet::new().with("name", "JO"));
        assert_eq!(upper, filtered);
    }

    #[test]
    fn test_filter_partitions_matches_and_non_matches() {
        let records = people();
        let query = "o";
        let filtered = filter(&records, &FilterSet::new().with("name", query));
        for record in &records {
            let contains = record
                .get("name")
                .is_some_and(|v| v.to_string().to_lowercase().contains(query));
            assert_eq!(filtered.contains(record), contains);
        }
    }

    #[test]
    fn test_filter_missing_field_never_matches() {
        let records = vec![
            Record::new().with("name", "Project A").with("status", "Active"),
            Record::new().with("name", "Project B"),
        ];
        let filtered = filter(&records, &FilterSet::new().with("status", "act"));
        assert_eq!(names(&filtered), vec!["Project A"]);
    }

    #[test]
    fn test_filter_requires_every_field() {
        let records = vec![
            Record::new().with("name", "Project A").with("status", "Active"),
            Record::new().with("name", "Project B").with("status", "Pending"),
            Record::new().with("name", "Other").with("status", "Active"),
        ];
        let filters = FilterSet::new().with("name", "project").with("status", "active");
        assert_eq!(names(&filter(&records, &filters)), vec!["Project A"]);
    }

    #[test]
    fn test_filter_matches_numbers_as_text() {
        let records = people();
        let filtered = filter(&records, &FilterSet::new().with("age", "3"));
        assert_eq!(ages(&filtered), vec![30.0, 35.0]);
    }

    #[test]
    fn test_sort_numeric_ascending() {
        let sorted = sort(&people(), &SortSpec::ascending("age"));
        assert_eq!(ages(&sorted), vec![25.0, 28.0, 30.0, 35.0, 42.0]);
    }

    #[test]
    fn test_sort_numeric_looking_text_compares_numerically() {
        let records = vec![
            Record::new().with("n", "10"),
            Record::new().with("n", "9"),
            Record::new().with("n", "100"),
        ];
        let sorted = sort(&records, &SortSpec::ascending("n"));
        let values: Vec<String> = sorted.iter().filter_map(|r| r.get("n")).map(|v| v.to_string()).collect();
        assert_eq!(values, vec!["9", "10", "100"]);
    }

    #[test]
    fn test_sort_text_is_case_insensitive() {
        let sorted = sort(&people(), &SortSpec::ascending("name"));
        assert_eq!(
            names(&sorted),
            vec!["alice Brown", "Bob Johnson", "Carol White", "Jane Smith", "John Doe"]
        );
    }

    #[test]
    fn test_sort_descending_flips_order() {
        let sorted = sort(&people(), &SortSpec::new("age", SortDirection::Descending));
        assert_eq!(ages(&sorted), vec![42.0, 35.0, 30.0, 28.0, 25.0]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let records = vec![
            Record::new().with("id", 1).with("status", "Active"),
            Record::new().with("id", 2).with("status", "Pending"),
            Record::new().with("id", 3).with("status", "active"),
            Record::new().with("id", 4).with("status", "Pending"),
        ];
        let ids = |rs: &[Record]| -> Vec<String> {
            rs.iter().filter_map(|r| r.get("id")).map(|v| v.to_string()).collect()
        };

        let asc = sort(&records, &SortSpec::ascending("status"));
        assert_eq!(ids(&asc), vec!["1", "3", "2", "4"]);

        let desc = sort(&records, &SortSpec::new("status", SortDirection::Descending));
        assert_eq!(ids(&desc), vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_sort_signed_zero_ties_keep_order() {
        let records = vec![
            Record::new().with("id", 1).with("score", 0.0),
            Record::new().with("id", 2).with("score", -0.0),
            Record::new().with("id", 3).with("score", "0"),
        ];
        let ids = |rs: &[Record]| -> Vec<String> {
            rs.iter().filter_map(|r| r.get("id")).map(|v| v.to_string()).collect()
        };

        let asc = sort(&records, &SortSpec::ascending("score"));
        assert_eq!(ids(&asc), vec!["1", "2", "3"]);

        let desc = sort(&records, &SortSpec::new("score", SortDirection::Descending));
        assert_eq!(ids(&desc), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let spec = SortSpec::ascending("name");
        let once = sort(&people(), &spec);
        let twice = sort(&once, &spec);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let records = people();
        let before = records.clone();
        let _ = sort(&records, &SortSpec::new("age", SortDirection::Descending));
        assert_eq!(records, before);
    }

    #[test]
    fn test_sort_missing_and_mixed_types() {
        let records = vec![
            Record::new().with("k", "beta"),
            Record::new(),
            Record::new().with("k", 3),
            Record::new().with("k", "Alpha"),
            Record::new().with("k", 1),
        ];
        let render = |rs: &[Record]| -> Vec<String> {
            rs.iter()
                .map(|r| r.get("k").map(|v| v.to_string()).unwrap_or_else(|| "-".into()))
                .collect()
        };

        let asc = sort(&records, &SortSpec::ascending("k"));
        assert_eq!(render(&asc), vec!["1", "3", "Alpha", "beta", "-"]);

        let desc = sort(&records, &SortSpec::new("k", SortDirection::Descending));
        assert_eq!(render(&desc), vec!["-", "beta", "Alpha", "3", "1"]);
    }

    #[test]
    fn test_paginate_reconstructs_sequence() {
        let records: Vec<u32> = (0..23).collect();
        for page_size in 1..=25 {
            let first = paginate(&records, 1, page_size);
            let mut rebuilt = Vec::new();
            for page in 1..=first.total_pages {
                rebuilt.extend(paginate(&records, page, page_size).records);
            }
            assert_eq!(rebuilt, records, "page_size {page_size}");
            assert_eq!(first.total_pages, records.len().div_ceil(page_size));
        }
    }

    #[test]
    fn test_paginate_empty_input() {
        let records: Vec<u32> = Vec::new();
        let page = paginate(&records, 1, 10);
        assert_eq!(page.total_pages, 0);
        assert!(page.records.is_empty());
        assert_eq!(page.total_records, 0);
    }

    #[test]
    fn test_paginate_out_of_range_pages_are_empty() {
        let records: Vec<u32> = (0..5).collect();
        let beyond = paginate(&records, 4, 2);
        assert!(beyond.records.is_empty());
        assert_eq!(beyond.current_page, 4);
        assert_eq!(beyond.total_pages, 3);

        let zero = paginate(&records, 0, 2);
        assert!(zero.records.is_empty());

        let huge = paginate(&records, usize::MAX, 2);
        assert!(huge.records.is_empty());
    }

    #[test]
    fn test_paginate_last_page_is_partial() {
        let records: Vec<u32> = (0..5).collect();
        assert_eq!(paginate(&records, 3, 2).records, vec![4]);
    }

    #[test]
    fn test_paginate_zero_page_size_clamps_to_one() {
        let records: Vec<u32> = (0..3).collect();
        let page = paginate(&records, 2, 0);
        assert_eq!(page.records, vec![1]);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_run_sorts_then_paginates_ages() {
        let query = TableQuery {
            filters: FilterSet::new(),
            sort: Some(SortSpec::ascending("age")),
            page: PageRequest::new(1, 2),
        };
        let page = run(&people(), &query);
        assert_eq!(ages(&page.records), vec![25.0, 28.0]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_records, 5);
    }

    #[test]
    fn test_run_without_sort_keeps_input_order() {
        let query = TableQuery {
            filters: FilterSet::new().with("name", "jo"),
            sort: None,
            page: PageRequest::new(1, 10),
        };
        let page = run(&people(), &query);
        assert_eq!(names(&page.records), vec!["John Doe", "Bob Johnson"]);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_records, 2);
    }
}
