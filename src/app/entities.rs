//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency so views only re-render for what they observe.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::config::AppConfig;
use crate::features::dashboard::data::projects_table;
use crate::i18n::Locale;
use crate::state::{
    config_state::ConfigState,
    i18n_state::I18nState,
    log_state::{LogLevel, LogState},
    nav_state::NavState,
    session_state::SessionState,
    table_state::TableState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Application preferences
    pub config: Entity<ConfigState>,
    /// UI log messages (ring buffer)
    pub logs: Entity<LogState>,
    /// Requested page
    pub nav: Entity<NavState>,
    /// Signed-in user
    pub session: Entity<SessionState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Dashboard projects table
    pub projects: Entity<TableState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(config: AppConfig, cx: &mut App) -> Self {
        let locale = Locale::from_code(&config.ui.locale);
        let page_size = config.table.page_size;

        Self {
            config: cx.new(|_| {
                let mut state = ConfigState::default();
                state.update_config(config);
                state
            }),
            logs: cx.new(|_| LogState::default()),
            nav: cx.new(|_| NavState::default()),
            session: cx.new(|_| SessionState::default()),
            i18n: cx.new(|_| I18nState::new(locale)),
            projects: cx.new(|_| projects_table(page_size)),
        }
    }

    /// Append a line to the UI log panel
    pub fn log(&self, level: LogLevel, message: impl Into<String>, cx: &mut App) {
        let message = message.into();
        self.logs.update(cx, |logs, cx| {
            logs.push_now(level, message);
            cx.notify();
        });
    }
}
