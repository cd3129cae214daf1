//! Activity - Dashboard Display Types
//!
//! Statuses, headline stats and timeline entries shown by the data display
//! components.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Known record statuses; anything else renders with the neutral style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    Pending,
    Inactive,
    Completed,
    Other(String),
}

impl Status {
    /// Parse a status case-insensitively
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "active" => Status::Active,
            "pending" => Status::Pending,
            "inactive" => Status::Inactive,
            "completed" => Status::Completed,
            _ => Status::Other(raw.to_string()),
        }
    }

    /// Badge text: the raw status with its first letter upper-cased
    pub fn label(&self) -> String {
        match self {
            Status::Active => "Active".to_string(),
            Status::Pending => "Pending".to_string(),
            Status::Inactive => "Inactive".to_string(),
            Status::Completed => "Completed".to_string(),
            Status::Other(raw) => capitalize(raw),
        }
    }

    /// Filter value used by the status select ("" means all)
    pub fn filter_value(&self) -> &str {
        match self {
            Status::Active => "active",
            Status::Pending => "pending",
            Status::Inactive => "inactive",
            Status::Completed => "completed",
            Status::Other(raw) => raw,
        }
    }

    pub fn known() -> [Status; 4] {
        [
            Status::Active,
            Status::Pending,
            Status::Inactive,
            Status::Completed,
        ]
    }
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Direction of a stat trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
}

/// Headline number on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub title: String,
    pub value: String,
    /// Percentage change; zero or absent hides the trend line
    pub trend: Option<i32>,
}

impl Stat {
    pub fn new(title: impl Into<String>, value: impl Into<String>, trend: Option<i32>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            trend,
        }
    }

    pub fn trend_direction(&self) -> Option<TrendDirection> {
        match self.trend {
            Some(t) if t > 0 => Some(TrendDirection::Up),
            Some(t) if t < 0 => Some(TrendDirection::Down),
            _ => None,
        }
    }

    /// "↑ 12%" / "↓ 5%"
    pub fn trend_label(&self) -> Option<String> {
        let trend = self.trend?;
        let arrow = match self.trend_direction()? {
            TrendDirection::Up => "↑",
            TrendDirection::Down => "↓",
        };
        Some(format!("{arrow} {}%", trend.unsigned_abs()))
    }
}

/// Timeline marker kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Task,
    Comment,
    Other,
}

/// One entry of the activity timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub kind: ActivityKind,
    pub content: String,
    pub datetime: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_and_label() {
        assert_eq!(Status::parse("ACTIVE"), Status::Active);
        assert_eq!(Status::parse("pending").label(), "Pending");
        assert_eq!(Status::parse("archived"), Status::Other("archived".into()));
        assert_eq!(Status::parse("archived").label(), "Archived");
        assert_eq!(Status::parse("").label(), "");
    }

    #[test]
    fn test_capitalize_unicode() {
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn test_stat_trend_label() {
        assert_eq!(
            Stat::new("Revenue", "$45,678", Some(-5)).trend_label(),
            Some("↓ 5%".to_string())
        );
        assert_eq!(
            Stat::new("Users", "1,234", Some(12)).trend_label(),
            Some("↑ 12%".to_string())
        );
        assert_eq!(Stat::new("Orders", "89", Some(0)).trend_label(), None);
        assert_eq!(Stat::new("Orders", "89", None).trend_direction(), None);
    }
}
