//! ConfigState - Application Configuration State

use crate::domain::config::{AppConfig, TableVariant};

/// State for application configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration
    pub config: AppConfig,
    /// Whether config has been loaded
    pub loaded: bool,
    /// Unsaved changes
    pub dirty: bool,
}

impl ConfigState {
    /// Replace the configuration after a load
    pub fn update_config(&mut self, mut config: AppConfig) {
        config.validate();
        self.config = config;
        self.loaded = true;
        self.dirty = false;
    }

    pub fn set_table_variant(&mut self, variant: TableVariant) {
        if self.config.table.variant != variant {
            self.config.table.variant = variant;
            self.dirty = true;
        }
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.config.table.page_size = page_size;
        self.config.validate();
        self.dirty = true;
    }

    pub fn set_locale(&mut self, code: &str) {
        if self.config.ui.locale != code {
            self.config.ui.locale = code.to_string();
            self.dirty = true;
        }
    }

    pub fn toggle_log_panel(&mut self) {
        self.config.ui.show_log_panel = !self.config.ui.show_log_panel;
        self.dirty = true;
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_PAGE_SIZE;

    #[test]
    fn test_changes_mark_dirty() {
        let mut state = ConfigState::default();
        state.update_config(AppConfig::default());
        assert!(state.loaded);
        assert!(!state.dirty);

        state.set_table_variant(TableVariant::Striped);
        assert!(!state.dirty, "same variant is not a change");

        state.set_table_variant(TableVariant::Modern);
        assert!(state.dirty);
        state.mark_saved();
        assert!(!state.dirty);
    }

    #[test]
    fn test_page_size_is_clamped() {
        let mut state = ConfigState::default();
        state.set_page_size(10_000);
        assert_eq!(state.config.table.page_size, MAX_PAGE_SIZE);
    }
}
