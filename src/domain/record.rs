//! Record - One Row of Tabular Data
//!
//! A record is an ordered mapping from field name to a scalar display value.
//! Identity is positional; nothing here enforces a record ID.

use std::fmt;

/// A scalar cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free text
    Text(String),
    /// Numeric value
    Number(f64),
    /// Short categorical label (status, type, ...)
    Tag(String),
}

impl Value {
    /// Numeric interpretation of the value.
    ///
    /// Text and tags that parse as a finite number count as numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Some(*n),
            Value::Number(_) => None,
            Value::Text(s) | Value::Tag(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Text content for text and tag values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) | Value::Tag(s) => Some(s),
            Value::Number(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) | Value::Tag(s) => f.write_str(s),
            // Whole numbers print without a trailing ".0"
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Value::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

/// Field lookup used by the table pipeline.
///
/// Implement this for any row type that should be filterable and sortable.
pub trait Fields {
    /// Value of the named field, if present
    fn field(&self, name: &str) -> Option<&Value>;
}

/// A single row: field name to value, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field, replacing any previous value in place
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Get a field value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Field names in insertion order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Fields for Record {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from(42).to_string(), "42");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from("John Doe").to_string(), "John Doe");
        assert_eq!(Value::Tag("active".into()).to_string(), "active");
    }

    #[test]
    fn test_value_as_number() {
        assert_eq!(Value::from(7).as_number(), Some(7.0));
        assert_eq!(Value::from(" 12.5 ").as_number(), Some(12.5));
        assert_eq!(Value::from("Project A").as_number(), None);
        assert_eq!(Value::from("NaN").as_number(), None);
        assert_eq!(Value::Number(f64::INFINITY).as_number(), None);
    }

    #[test]
    fn test_record_set_replaces_in_place() {
        let mut record = Record::new().with("id", 1).with("name", "A");
        record.set("id", 2);
        assert_eq!(record.get("id"), Some(&Value::from(2)));
        assert_eq!(record.field_names().collect::<Vec<_>>(), vec!["id", "name"]);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_record_missing_field() {
        let record = Record::new().with("name", "A");
        assert!(record.get("age").is_none());
        assert!(Record::new().is_empty());
    }
}
