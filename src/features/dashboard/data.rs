//! Dashboard Sample Data
//!
//! Seed content for the dashboard; there is no backend to fetch it from.

use chrono::{Datelike, NaiveDate};

use crate::domain::activity::{Activity, ActivityKind, Stat};
use crate::domain::query::SortSpec;
use crate::domain::record::{Record, Value};
use crate::state::table_state::TableState;

/// Columns exported and shown for a project
pub const PROJECT_FIELDS: [&str; 4] = ["id", "name", "status", "date"];

const PROJECTS: [(i64, &str, &str, &str); 12] = [
    (1, "Project A", "Active", "2025-11-04"),
    (2, "Project B", "Pending", "2025-11-03"),
    (3, "Analytics Revamp", "Completed", "2025-10-28"),
    (4, "Mobile Checkout", "Active", "2025-10-22"),
    (5, "Search Indexer", "Pending", "2025-10-19"),
    (6, "Billing Migration", "Completed", "2025-10-12"),
    (7, "E-commerce Platform", "Active", "2025-11-04"),
    (8, "Design System", "Active", "2025-09-30"),
    (9, "Support Portal", "Pending", "2025-09-24"),
    (10, "Data Warehouse", "Completed", "2025-09-15"),
    (11, "Onboarding Flow", "Active", "2025-09-08"),
    (12, "Partner API", "Pending", "2025-08-29"),
];

pub fn sample_projects() -> Vec<Record> {
    PROJECTS
        .iter()
        .map(|(id, name, status, date)| {
            Record::new()
                .with("id", *id)
                .with("name", *name)
                .with("status", Value::Tag(status.to_string()))
                .with("date", *date)
        })
        .collect()
}

/// Projects table as first shown: sorted by id, ascending
pub fn projects_table(page_size: usize) -> TableState {
    TableState::new(sample_projects(), page_size).with_sort(SortSpec::ascending("id"))
}

/// Distinct project months, newest first, as (`YYYY-MM`, "Month YYYY").
///
/// The value is a prefix of the ISO date, so the substring filter matches
/// every project in that month.
pub fn project_months() -> Vec<(String, String)> {
    let mut months: Vec<NaiveDate> = PROJECTS
        .iter()
        .filter_map(|(_, _, _, date)| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .filter_map(|date| date.with_day(1))
        .collect();
    months.sort_unstable_by(|a, b| b.cmp(a));
    months.dedup();

    months
        .into_iter()
        .map(|month| {
            (
                month.format("%Y-%m").to_string(),
                month.format("%B %Y").to_string(),
            )
        })
        .collect()
}

pub fn sample_stats() -> Vec<Stat> {
    vec![
        Stat::new("Total Revenue", "$50,000", Some(12)),
        Stat::new("Active Users", "1,234", Some(8)),
        Stat::new("Pending Tasks", "45", Some(-5)),
        Stat::new("Projects", "89", Some(15)),
    ]
}

pub fn sample_activities() -> Vec<Activity> {
    let at = |day: u32, hour: u32, min: u32| {
        NaiveDate::from_ymd_opt(2025, 11, day).and_then(|d| d.and_hms_opt(hour, min, 0))
    };

    [
        (1, ActivityKind::Task, "New project created: E-commerce Platform", at(4, 13, 0)),
        (2, ActivityKind::Comment, "Sarah commented on Project Timeline", at(4, 10, 30)),
        (3, ActivityKind::Other, "Billing Migration marked as completed", at(3, 16, 45)),
    ]
    .into_iter()
    .filter_map(|(id, kind, content, datetime)| {
        Some(Activity {
            id,
            kind,
            content: content.to_string(),
            datetime: datetime?,
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Fields;

    #[test]
    fn test_sample_projects_have_all_fields() {
        let projects = sample_projects();
        assert_eq!(projects.len(), 12);
        for project in &projects {
            for field in PROJECT_FIELDS {
                assert!(project.field(field).is_some(), "missing {field}");
            }
        }
    }

    #[test]
    fn test_projects_table_starts_sorted_by_id() {
        let table = projects_table(5);
        assert_eq!(table.sort(), Some(&SortSpec::ascending("id")));

        let ids: Vec<f64> = table
            .visible_records()
            .iter()
            .filter_map(|r| r.get("id").and_then(|v| v.as_number()))
            .collect();
        assert_eq!(ids.len(), 12);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(table.view().records.len(), 5);
    }

    #[test]
    fn test_project_months_newest_first() {
        let months = project_months();
        assert_eq!(months.len(), 4);
        assert_eq!(months[0], ("2025-11".to_string(), "November 2025".to_string()));
        assert_eq!(months[3].0, "2025-08");
    }

    #[test]
    fn test_month_value_filters_projects() {
        let mut table = projects_table(20);
        table.set_filter("date", "2025-10");
        assert_eq!(table.filtered_count(), 4);
    }

    #[test]
    fn test_sample_activities_are_newest_first() {
        let activities = sample_activities();
        assert_eq!(activities.len(), 3);
        assert!(activities.windows(2).all(|w| w[0].datetime >= w[1].datetime));
    }
}
