//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 200.0;

/// Header bar height
pub const HEADER_HEIGHT: f32 = 48.0;

/// Auth form card width
pub const AUTH_CARD_WIDTH: f32 = 420.0;

/// Log panel height
pub const LOG_PANEL_HEIGHT: f32 = 140.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;

/// Table pagination limits
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const MAX_PAGE_SIZE: usize = 100;

/// Minimum password length accepted by the auth forms
pub const MIN_PASSWORD_LEN: usize = 6;

/// UI log ring buffer capacity
pub const LOG_CAPACITY: usize = 500;

/// Preferences file name in the app data dir
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Environment variable naming a TOML config file
pub const CONFIG_ENV_VAR: &str = "UI_CATALOG_CONFIG";

/// Quiet period before a search box applies its query
pub const SEARCH_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Rows-per-page choices offered by the dashboard
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];
