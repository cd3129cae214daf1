//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Data table preferences
    pub table: TableConfig,
    /// Presentation preferences
    pub ui: UiConfig,
    /// CSV export preferences
    pub export: ExportConfig,
}

impl AppConfig {
    /// Clamp out-of-range values into their valid ranges.
    ///
    /// Returns true when anything was changed.
    pub fn validate(&mut self) -> bool {
        let clamped = self.table.page_size.clamp(1, MAX_PAGE_SIZE);
        if clamped != self.table.page_size {
            tracing::warn!(
                "Page size {} out of range, using {}",
                self.table.page_size,
                clamped
            );
            self.table.page_size = clamped;
            return true;
        }
        false
    }
}

/// Visual variant of a data table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableVariant {
    #[default]
    Default,
    Striped,
    Bordered,
    Compact,
    Modern,
}

impl TableVariant {
    pub fn all() -> &'static [TableVariant] {
        &[
            TableVariant::Default,
            TableVariant::Striped,
            TableVariant::Bordered,
            TableVariant::Compact,
            TableVariant::Modern,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TableVariant::Default => "Default",
            TableVariant::Striped => "Striped",
            TableVariant::Bordered => "Bordered",
            TableVariant::Compact => "Compact",
            TableVariant::Modern => "Modern",
        }
    }
}

/// Data table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page
    pub page_size: usize,
    /// Dashboard table style
    pub variant: TableVariant,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            variant: TableVariant::Striped,
        }
    }
}

/// Presentation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Locale code ("en-US" or "zh-CN")
    pub locale: String,
    /// Show the log panel under the content area
    pub show_log_panel: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            show_log_panel: true,
        }
    }
}

/// CSV export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Target directory; the app data dir when unset
    pub directory: Option<String>,
    /// Output file name
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: "export.csv".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.table.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.export.file_name, "export.csv");
        assert_eq!(config.ui.locale, "en-US");
    }

    #[test]
    fn test_validate_clamps_page_size() {
        let mut config = AppConfig::default();
        config.table.page_size = 0;
        assert!(config.validate());
        assert_eq!(config.table.page_size, 1);

        config.table.page_size = MAX_PAGE_SIZE + 50;
        assert!(config.validate());
        assert_eq!(config.table.page_size, MAX_PAGE_SIZE);

        assert!(!config.validate());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"table":{"variant":"bordered"}}"#).expect("parse");
        assert_eq!(config.table.variant, TableVariant::Bordered);
        assert_eq!(config.table.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = AppConfig::default();
        config.table.page_size = 10;
        config.export.directory = Some("/tmp/out".to_string());
        let text = toml::to_string(&config).expect("serialize");
        let back: AppConfig = toml::from_str(&text).expect("parse");
        assert_eq!(back, config);
    }
}
