//! Workspace - Main Shell with Layout
//!
//! Holds the header, sidebar, content area and log panel, and swaps the page
//! shown in the content area when navigation or the session changes.

use gpui::{
    AnyElement, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::*,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::components::layout::sidebar::Sidebar;
use crate::features::auth::login_page::LoginPage;
use crate::features::auth::signup_page::SignupPage;
use crate::features::catalog::page::CatalogPage;
use crate::features::dashboard::page::DashboardPage;
use crate::theme::colors::CatalogColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    log_panel: Entity<LogPanel>,
    // Page views, created on first visit
    catalog_page: Option<Entity<CatalogPage>>,
    login_page: Option<Entity<LoginPage>>,
    signup_page: Option<Entity<SignupPage>>,
    dashboard_page: Option<Entity<DashboardPage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        cx.observe(&entities.nav, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.session, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.config, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            sidebar,
            log_panel,
            catalog_page: None,
            login_page: None,
            signup_page: None,
            dashboard_page: None,
        }
    }

    /// Get or create the view for a page
    fn page_view(
        &mut self,
        page: ActivePage,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let entities = self.entities.clone();
        match page {
            ActivePage::Catalog => self
                .catalog_page
                .get_or_insert_with(|| cx.new(|cx| CatalogPage::new(entities, window, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Login => self
                .login_page
                .get_or_insert_with(|| cx.new(|cx| LoginPage::new(entities, window, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Signup => self
                .signup_page
                .get_or_insert_with(|| cx.new(|cx| SignupPage::new(entities, window, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Dashboard => self
                .dashboard_page
                .get_or_insert_with(|| cx.new(|cx| DashboardPage::new(entities, window, cx)))
                .clone()
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let signed_in = self.entities.session.read(cx).is_authenticated();
        let page = self.entities.nav.read(cx).resolve(signed_in);
        let show_logs = self.entities.config.read(cx).config.ui.show_log_panel;
        let content = self.page_view(page, window, cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(CatalogColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .child(content),
                    ),
            )
            .when(show_logs, |el| el.child(self.log_panel.clone()))
    }
}
