//! CSV Export - Serialize Table Records
//!
//! Columns come from the caller or, when absent, from the field names of the
//! first record. Missing values become empty cells.

use std::fs;
use std::path::Path;

use crate::domain::record::Record;
use crate::error::Result;

/// Header row for an export
fn headers(records: &[Record], columns: Option<&[&str]>) -> Vec<String> {
    match columns {
        Some(cols) => cols.iter().map(|c| c.to_string()).collect(),
        None => records
            .first()
            .map(|r| r.field_names().map(str::to_string).collect())
            .unwrap_or_default(),
    }
}

/// Render records as CSV text, `None` when there is nothing to export
pub fn records_to_csv(records: &[Record], columns: Option<&[&str]>) -> Result<Option<String>> {
    if records.is_empty() {
        return Ok(None);
    }

    let headers = headers(records, columns);
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(&headers)?;
    for record in records {
        let row = headers
            .iter()
            .map(|h| record.get(h).map(|v| v.to_string()).unwrap_or_default());
        writer.write_record(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Write records to a CSV file.
///
/// Returns false, without touching the filesystem, when there are no records.
pub fn export_csv(records: &[Record], columns: Option<&[&str]>, path: &Path) -> Result<bool> {
    let Some(content) = records_to_csv(records, columns)? else {
        tracing::info!("Nothing to export to {}", path.display());
        return Ok(false);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::info!("Exported {} records to {}", records.len(), path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects() -> Vec<Record> {
        vec![
            Record::new()
                .with("id", 1)
                .with("name", "Project A")
                .with("status", "Active"),
            Record::new()
                .with("id", 2)
                .with("name", "Smith, \"Jr\"")
                .with("status", "Pending"),
        ]
    }

    #[test]
    fn test_headers_from_first_record_and_quoting() {
        let csv = records_to_csv(&projects(), None).expect("csv").expect("non-empty");
        assert_eq!(
            csv,
            "id,name,status\n1,Project A,Active\n2,\"Smith, \"\"Jr\"\"\",Pending\n"
        );
    }

    #[test]
    fn test_explicit_columns_and_missing_cells() {
        let csv = records_to_csv(&projects(), Some(&["name", "owner"]))
            .expect("csv")
            .expect("non-empty");
        assert_eq!(csv, "name,owner\nProject A,\n\"Smith, \"\"Jr\"\"\",\n");
    }

    #[test]
    fn test_empty_input_is_none() {
        assert!(records_to_csv(&[], None).expect("csv").is_none());
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out").join("export.csv");
        assert!(export_csv(&projects(), None, &path).expect("export"));
        let written = fs::read_to_string(&path).expect("read");
        assert!(written.starts_with("id,name,status\n"));

        let empty_path = dir.path().join("empty.csv");
        assert!(!export_csv(&[], None, &empty_path).expect("export"));
        assert!(!empty_path.exists());
    }
}
