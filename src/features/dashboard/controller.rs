//! Dashboard Controller
//!
//! Applies search, field filters, sort and paging to the projects table and
//! exports the visible records.

use std::path::PathBuf;

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::config::ExportConfig;
use crate::error::Result;
use crate::features::dashboard::data::PROJECT_FIELDS;
use crate::state::log_state::LogLevel;
use crate::utils::config_store::app_data_dir;
use crate::utils::csv_export::export_csv;

/// Where an export is written: the configured directory, else the app data dir
pub fn export_path(config: &ExportConfig) -> Result<PathBuf> {
    let dir = match &config.directory {
        Some(dir) => PathBuf::from(dir),
        None => app_data_dir()?,
    };
    Ok(dir.join(&config.file_name))
}

/// Dashboard page controller
pub struct DashboardController {
    entities: AppEntities,
}

impl DashboardController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Filter project names by a case-insensitive substring
    pub fn set_search(&self, query: &str, cx: &mut App) {
        self.entities.projects.update(cx, |table, cx| {
            table.set_filter("name", query);
            cx.notify();
        });
    }

    /// Filter one field; an empty value removes that constraint
    pub fn set_filter(&self, field: &str, value: &str, cx: &mut App) {
        self.entities.projects.update(cx, |table, cx| {
            table.set_filter(field, value);
            cx.notify();
        });
    }

    pub fn clear_filters(&self, cx: &mut App) {
        self.entities.projects.update(cx, |table, cx| {
            table.clear_filters();
            cx.notify();
        });
    }

    /// Apply a page size to the table and remember it in the preferences
    pub fn set_page_size(&self, page_size: usize, cx: &mut App) {
        self.entities.projects.update(cx, |table, cx| {
            table.set_page_size(page_size);
            cx.notify();
        });
        self.entities.config.update(cx, |config, cx| {
            config.set_page_size(page_size);
            cx.notify();
        });
    }

    pub fn toggle_sort(&self, field: &str, cx: &mut App) {
        self.entities.projects.update(cx, |table, cx| {
            table.toggle_sort(field);
            cx.notify();
        });
    }

    pub fn set_page(&self, page: usize, cx: &mut App) {
        self.entities.projects.update(cx, |table, cx| {
            table.set_page(page);
            cx.notify();
        });
    }

    /// Write the filtered, sorted projects to CSV and log the outcome
    pub fn export(&self, cx: &mut App) {
        let records = self.entities.projects.read(cx).visible_records();
        let export = self.entities.config.read(cx).config.export.clone();

        let result = export_path(&export).and_then(|path| {
            export_csv(&records, Some(&PROJECT_FIELDS), &path).map(|written| (path, written))
        });

        match result {
            Ok((path, true)) => self.entities.log(
                LogLevel::Info,
                format!("Exported {} projects to {}", records.len(), path.display()),
                cx,
            ),
            Ok((_, false)) => self.entities.log(LogLevel::Warn, "No projects to export", cx),
            Err(e) => {
                tracing::error!("CSV export failed: {}", e);
                self.entities.log(LogLevel::Error, format!("Export failed: {e}"), cx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_path_prefers_configured_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = ExportConfig {
            directory: Some(dir.path().display().to_string()),
            file_name: "projects.csv".into(),
        };
        assert_eq!(
            export_path(&config).expect("path"),
            dir.path().join("projects.csv")
        );
    }
}
