//! ConfigStore - Local Configuration Storage
//!
//! JSON files in the per-user data directory, plus an optional TOML override
//! named by `UI_CATALOG_CONFIG`.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Serialize, de::DeserializeOwned};

use crate::constants::{CONFIG_ENV_VAR, PREFERENCES_FILE};
use crate::domain::config::AppConfig;
use crate::error::{Error, Result};

/// Get or create the application data directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/ui-catalog/`
/// - **macOS**: `~/Library/Application Support/com.ui-catalog.ui-catalog/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\ui-catalog\ui-catalog\data\`
pub fn app_data_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "ui-catalog", "ui-catalog") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let data_dir = project_dirs.data_dir();
    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}

/// Load a JSON file, falling back to `T::default()` when it doesn't exist
pub fn load_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a value as pretty JSON, creating parent directories
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}

/// Load a TOML file; a missing file is an error here
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Resolve the effective application config.
///
/// The TOML file named by the env var wins over stored preferences. Any
/// read or parse failure is logged and replaced by defaults.
pub fn load_app_config() -> AppConfig {
    let override_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let preferences = app_data_dir().map(|dir| dir.join(PREFERENCES_FILE));
    resolve_app_config(override_path.as_deref(), preferences.ok().as_deref())
}

fn resolve_app_config(override_path: Option<&Path>, preferences: Option<&Path>) -> AppConfig {
    let loaded = match (override_path, preferences) {
        (Some(path), _) => {
            tracing::info!("Loading config override from {}", path.display());
            load_toml::<AppConfig>(path)
        }
        (None, Some(path)) => load_json::<AppConfig>(path),
        (None, None) => Ok(AppConfig::default()),
    };

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });
    config.validate();
    config
}

/// Persist preferences to the app data dir
pub fn save_app_config(config: &AppConfig) -> Result<()> {
    save_json(&app_data_dir()?.join(PREFERENCES_FILE), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::TableVariant;

    #[test]
    fn test_load_json_missing_file_gives_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config: AppConfig = load_json(&dir.path().join("none.json")).expect("load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(PREFERENCES_FILE);

        let mut config = AppConfig::default();
        config.table.page_size = 20;
        config.table.variant = TableVariant::Modern;
        save_json(&path, &config).expect("save");

        let loaded: AppConfig = load_json(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_json_corrupt_file_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "{ not json").expect("write");
        let result: Result<AppConfig> = load_json(&path);
        assert!(matches!(result, Err(Error::Json { .. })));
    }

    #[test]
    fn test_resolve_prefers_toml_override() {
        let dir = tempfile::tempdir().expect("tempdir");
        let toml_path = dir.path().join("catalog.toml");
        fs::write(&toml_path, "[table]\npage_size = 500\nvariant = \"compact\"\n").expect("write");

        let json_path = dir.path().join(PREFERENCES_FILE);
        save_json(&json_path, &AppConfig::default()).expect("save");

        let config = resolve_app_config(Some(&toml_path), Some(&json_path));
        assert_eq!(config.table.variant, TableVariant::Compact);
        assert_eq!(config.table.page_size, crate::constants::MAX_PAGE_SIZE);
    }

    #[test]
    fn test_resolve_falls_back_on_bad_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let json_path = dir.path().join(PREFERENCES_FILE);
        fs::write(&json_path, "garbage").expect("write");
        assert_eq!(resolve_app_config(None, Some(&json_path)), AppConfig::default());
        assert_eq!(resolve_app_config(None, None), AppConfig::default());
    }
}
