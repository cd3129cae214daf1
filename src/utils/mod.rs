//! Utils - Formatting, Storage and Export Helpers

pub mod config_store;
pub mod csv_export;
pub mod debounce;
pub mod format;
