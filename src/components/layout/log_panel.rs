//! Log Panel Component
//!
//! Shows recent UI activity at the bottom of the window.

use gpui::{
    ClickEvent, Context, FontWeight, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::constants::LOG_PANEL_HEIGHT;
use crate::i18n::t;
use crate::state::log_state::LogEntry;
use crate::theme::colors::CatalogColors;
use crate::theme::typography::Typography;
use crate::utils::format::{format_time_ms, truncate};

/// Entries drawn at once
const VISIBLE_ENTRIES: usize = 50;
const MAX_MESSAGE_CHARS: usize = 160;

/// Log panel component
pub struct LogPanel {
    entities: AppEntities,
    expanded: bool,
}

impl LogPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.logs, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            expanded: true,
        }
    }

    fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        self.expanded = !self.expanded;
        cx.notify();
    }

    fn render_entry(entry: &LogEntry) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .text_size(px(Typography::TEXT_XS))
            .child(
                div()
                    .text_color(CatalogColors::text_muted())
                    .min_w(px(85.0))
                    .child(format_time_ms(&entry.timestamp)),
            )
            .child(
                div()
                    .text_color(entry.level.color())
                    .min_w(px(45.0))
                    .child(entry.level.label()),
            )
            .child(
                div()
                    .text_color(CatalogColors::text_light())
                    .flex_1()
                    .child(truncate(&entry.message, MAX_MESSAGE_CHARS)),
            )
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let logs = self.entities.logs.read(cx);
        let count = logs.len();
        let height = if self.expanded {
            px(LOG_PANEL_HEIGHT)
        } else {
            px(32.0)
        };
        let entities = self.entities.clone();

        let header = div()
            .h(px(32.0))
            .w_full()
            .flex_none()
            .px_4()
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(gpui::rgba(0xffffff22))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_color(CatalogColors::text_light())
                            .text_size(px(Typography::TEXT_SM))
                            .font_weight(FontWeight::MEDIUM)
                            .child(t(locale, "log-title")),
                    )
                    .child(
                        div()
                            .text_color(CatalogColors::text_muted())
                            .text_size(px(Typography::TEXT_XS))
                            .child(format!("({count})")),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(CatalogColors::text_muted())
                    .child(
                        div()
                            .id("clear-logs")
                            .px_2()
                            .py_1()
                            .rounded_sm()
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.logs.update(cx, |logs, cx| {
                                    logs.clear();
                                    cx.notify();
                                });
                            })
                            .child(t(locale, "action-clear")),
                    )
                    .child(
                        div()
                            .id("toggle-logs")
                            .px_2()
                            .py_1()
                            .rounded_sm()
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.toggle_expanded(cx);
                            }))
                            .child(if self.expanded { "▼" } else { "▲" }),
                    ),
            );

        let body = if count == 0 {
            div()
                .px_4()
                .py_2()
                .text_size(px(Typography::TEXT_XS))
                .text_color(CatalogColors::text_muted())
                .child(t(locale, "log-empty"))
                .into_any_element()
        } else {
            div()
                .id("log-entries")
                .flex_1()
                .overflow_y_scroll()
                .px_4()
                .py_1()
                .children(logs.latest(VISIBLE_ENTRIES).map(Self::render_entry))
                .into_any_element()
        };

        div()
            .h(height)
            .w_full()
            .flex_none()
            .bg(CatalogColors::log_panel_bg())
            .flex()
            .flex_col()
            .child(header)
            .when(self.expanded, |el| el.child(body))
    }
}
