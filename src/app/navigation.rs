//! Navigation - Active Page
//!
//! Defines the screens available in the application and which of them need
//! a signed-in session.

use serde::{Deserialize, Serialize};

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivePage {
    /// Component gallery
    Catalog,
    /// Sign-in form
    #[default]
    Login,
    /// Account creation form
    Signup,
    /// Stats, projects table and activity timeline
    Dashboard,
}

impl ActivePage {
    /// Get the icon glyph for the page
    pub fn icon(&self) -> &'static str {
        match self {
            ActivePage::Catalog => "▦",
            ActivePage::Login => "→",
            ActivePage::Signup => "+",
            ActivePage::Dashboard => "◧",
        }
    }

    /// Get the translation key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            ActivePage::Catalog => "nav-catalog",
            ActivePage::Login => "nav-login",
            ActivePage::Signup => "nav-signup",
            ActivePage::Dashboard => "nav-dashboard",
        }
    }

    /// Pages that redirect to Login without a session
    pub fn requires_session(&self) -> bool {
        matches!(self, ActivePage::Dashboard)
    }

    /// Get all available pages for the sidebar
    pub fn all() -> &'static [ActivePage] {
        &[
            ActivePage::Catalog,
            ActivePage::Login,
            ActivePage::Signup,
            ActivePage::Dashboard,
        ]
    }
}
