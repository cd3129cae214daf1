//! Header Component
//!
//! The application header: title, signed-in user, log panel toggle and
//! language switcher.

use gpui::{
    ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::constants::HEADER_HEIGHT;
use crate::features::auth::controller::AuthController;
use crate::i18n::{t, t_args};
use crate::theme::colors::CatalogColors;
use crate::theme::typography::Typography;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.session, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.config, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let title = t(locale, "app-title");
        let lang_label = locale.display_name();
        let user_name = self
            .entities
            .session
            .read(cx)
            .user()
            .map(|user| user.name.clone());

        let show_logs = self.entities.config.read(cx).config.ui.show_log_panel;
        let log_entities = self.entities.clone();
        let lang_entities = self.entities.clone();
        let session_entities = self.entities.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex_none()
            .bg(CatalogColors::surface())
            .border_b_1()
            .border_color(CatalogColors::border())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(CatalogColors::primary())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(CatalogColors::text_light())
                            .font_weight(FontWeight::BOLD)
                            .child("UI"),
                    )
                    .child(
                        div()
                            .text_color(CatalogColors::text_primary())
                            .text_size(px(Typography::TEXT_XL))
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(title),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .when_some(user_name, |el, name| {
                        el.child(
                            div()
                                .text_size(px(Typography::TEXT_SM))
                                .text_color(CatalogColors::text_secondary())
                                .child(t_args(locale, "dashboard-welcome", &[("name", &name)])),
                        )
                        .child(
                            div()
                                .id("sign-out")
                                .px_3()
                                .py_1()
                                .rounded_md()
                                .text_size(px(Typography::TEXT_SM))
                                .text_color(CatalogColors::danger())
                                .cursor_pointer()
                                .hover(|s| s.bg(CatalogColors::button_ghost_hover()))
                                .on_click(move |_event: &ClickEvent, _window, cx| {
                                    AuthController::new(session_entities.clone()).logout(cx);
                                })
                                .child(t(locale, "action-sign-out")),
                        )
                    })
                    .child(
                        div()
                            .id("log-toggle")
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(if show_logs {
                                CatalogColors::primary()
                            } else {
                                CatalogColors::text_secondary()
                            })
                            .cursor_pointer()
                            .hover(|s| s.bg(CatalogColors::button_ghost_hover()))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                log_entities.config.update(cx, |config, cx| {
                                    config.toggle_log_panel();
                                    cx.notify();
                                });
                            })
                            .child(t(locale, "action-logs")),
                    )
                    .child(
                        div()
                            .id("lang-switcher")
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .border_1()
                            .border_color(CatalogColors::border_strong())
                            .text_color(CatalogColors::text_primary())
                            .text_size(px(Typography::TEXT_SM))
                            .cursor_pointer()
                            .hover(|s| s.bg(CatalogColors::button_ghost_hover()))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                let locale = lang_entities.i18n.update(cx, |i18n, cx| {
                                    i18n.toggle_locale();
                                    cx.notify();
                                    i18n.locale
                                });
                                lang_entities.config.update(cx, |config, cx| {
                                    config.set_locale(locale.code());
                                    cx.notify();
                                });
                            })
                            .child(lang_label),
                    ),
            )
    }
}
