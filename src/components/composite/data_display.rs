//! Data Display Components
//!
//! Status badges, stat cards and the activity timeline.

use gpui::{
    App, FontWeight, IntoElement, ParentElement, Rgba, RenderOnce, SharedString, Styled, Window,
    div, prelude::*, px,
};

use crate::domain::activity::{Activity, ActivityKind, Stat, Status, TrendDirection};
use crate::theme::colors::CatalogColors;
use crate::theme::typography::Typography;
use crate::utils::format::{DateStyle, format_date};

/// (background, text) colors for a status badge
pub fn badge_colors(status: &Status) -> (Rgba, Rgba) {
    match status {
        Status::Active => CatalogColors::badge_active(),
        Status::Pending => CatalogColors::badge_pending(),
        Status::Inactive => CatalogColors::badge_inactive(),
        Status::Completed => CatalogColors::badge_completed(),
        Status::Other(_) => CatalogColors::badge_default(),
    }
}

pub fn marker_color(kind: ActivityKind) -> Rgba {
    match kind {
        ActivityKind::Task => CatalogColors::marker_task(),
        ActivityKind::Comment => CatalogColors::marker_comment(),
        ActivityKind::Other => CatalogColors::marker_other(),
    }
}

/// Pill showing a record status
#[derive(IntoElement)]
pub struct StatusBadge {
    status: Status,
}

impl StatusBadge {
    pub fn new(status: Status) -> Self {
        Self { status }
    }

    /// Badge for a raw status string
    pub fn from_raw(raw: &str) -> Self {
        Self::new(Status::parse(raw))
    }
}

impl RenderOnce for StatusBadge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, text) = badge_colors(&self.status);
        div()
            .px_2()
            .py(px(2.0))
            .rounded_full()
            .bg(bg)
            .text_color(text)
            .text_size(px(Typography::TEXT_XS))
            .font_weight(FontWeight::MEDIUM)
            .child(self.status.label())
    }
}

/// Card with a headline number and an optional trend
#[derive(IntoElement)]
pub struct StatCard {
    stat: Stat,
}

impl StatCard {
    pub fn new(stat: Stat) -> Self {
        Self { stat }
    }
}

impl RenderOnce for StatCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let trend_color = match self.stat.trend_direction() {
            Some(TrendDirection::Up) => CatalogColors::success(),
            Some(TrendDirection::Down) => CatalogColors::danger(),
            None => CatalogColors::text_muted(),
        };
        let trend = self.stat.trend_label();

        div()
            .flex_1()
            .min_w(px(180.0))
            .p_5()
            .bg(CatalogColors::surface())
            .rounded_lg()
            .shadow_sm()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(CatalogColors::text_secondary())
                    .child(self.stat.title),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_3XL))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(CatalogColors::text_primary())
                    .child(self.stat.value),
            )
            .when_some(trend, |el, trend| {
                el.child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(trend_color)
                        .child(trend),
                )
            })
    }
}

/// Vertical list of activities with colored markers
#[derive(IntoElement)]
pub struct Timeline {
    items: Vec<Activity>,
    empty_message: SharedString,
}

impl Timeline {
    pub fn new(items: Vec<Activity>) -> Self {
        Self {
            items,
            empty_message: "No activity".into(),
        }
    }

    pub fn empty_message(mut self, message: impl Into<SharedString>) -> Self {
        self.empty_message = message.into();
        self
    }
}

impl RenderOnce for Timeline {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        if self.items.is_empty() {
            return div()
                .text_size(px(Typography::TEXT_SM))
                .text_color(CatalogColors::text_muted())
                .child(self.empty_message);
        }

        div().flex().flex_col().gap_4().children(self.items.into_iter().map(|item| {
            div()
                .flex()
                .gap_3()
                .child(
                    div()
                        .mt(px(6.0))
                        .size(px(10.0))
                        .flex_none()
                        .rounded_full()
                        .bg(marker_color(item.kind)),
                )
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .child(
                            div()
                                .text_size(px(Typography::TEXT_SM))
                                .text_color(CatalogColors::text_primary())
                                .child(item.content),
                        )
                        .child(
                            div()
                                .text_size(px(Typography::TEXT_XS))
                                .text_color(CatalogColors::text_muted())
                                .child(format_date(&item.datetime, DateStyle::Full)),
                        ),
                )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_uses_default_badge() {
        assert_eq!(
            badge_colors(&Status::parse("archived")),
            CatalogColors::badge_default()
        );
        assert_eq!(
            badge_colors(&Status::parse("Active")),
            CatalogColors::badge_active()
        );
    }

    #[test]
    fn test_marker_colors_differ_by_kind() {
        assert_ne!(
            marker_color(ActivityKind::Task),
            marker_color(ActivityKind::Comment)
        );
        assert_eq!(
            marker_color(ActivityKind::Other),
            CatalogColors::marker_other()
        );
    }
}
