//! NavState - Page Navigation State

use crate::app::navigation::ActivePage;

/// State for page navigation
#[derive(Debug, Default)]
pub struct NavState {
    /// Page the user asked for
    requested: ActivePage,
}

impl NavState {
    /// Request a page (from a sidebar or link click)
    pub fn navigate(&mut self, page: ActivePage) {
        tracing::debug!("Navigate to {:?}", page);
        self.requested = page;
    }

    pub fn requested(&self) -> ActivePage {
        self.requested
    }

    /// The page to actually render; protected pages fall back to Login
    pub fn resolve(&self, signed_in: bool) -> ActivePage {
        if self.requested.requires_session() && !signed_in {
            ActivePage::Login
        } else {
            self.requested
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_requires_session() {
        let mut nav = NavState::default();
        nav.navigate(ActivePage::Dashboard);
        assert_eq!(nav.resolve(false), ActivePage::Login);
        assert_eq!(nav.resolve(true), ActivePage::Dashboard);
        assert_eq!(nav.requested(), ActivePage::Dashboard);
    }

    #[test]
    fn test_public_pages_always_resolve() {
        let mut nav = NavState::default();
        for page in [ActivePage::Catalog, ActivePage::Login, ActivePage::Signup] {
            nav.navigate(page);
            assert_eq!(nav.resolve(false), page);
        }
    }
}
