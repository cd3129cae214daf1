//! Dashboard Page
//!
//! Stat cards, the searchable projects table and recent activity.

use std::rc::Rc;

use gpui::{
    AnyElement, ClickEvent, Context, ElementId, Entity, FontWeight, IntoElement, ParentElement,
    Render, Styled, Subscription, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_display::{StatCard, StatusBadge, Timeline};
use crate::components::composite::data_table::{Column, DataTable, Pagination};
use crate::components::composite::search_filter::{
    FilterDescriptor, SearchFilter, SearchFilterEvent,
};
use crate::components::layout::shell::Shell;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::select::{Select, SelectOption};
use crate::constants::PAGE_SIZE_OPTIONS;
use crate::domain::activity::{Activity, Stat, Status};
use crate::domain::config::TableVariant;
use crate::domain::record::Record;
use crate::features::dashboard::controller::DashboardController;
use crate::features::dashboard::data::{project_months, sample_activities, sample_stats};
use crate::i18n::{Locale, t, t_args};
use crate::state::log_state::LogLevel;
use crate::theme::colors::CatalogColors;
use crate::theme::typography::Typography;
use crate::utils::config_store::save_app_config;

/// Status and month dropdowns for the projects table
fn project_filters(locale: Locale) -> Vec<FilterDescriptor> {
    let any = || SelectOption::new("", t(locale, "filter-all"));

    let mut status = vec![any()];
    status.extend(
        Status::known()
            .iter()
            .filter(|s| **s != Status::Inactive)
            .map(|s| SelectOption::new(s.filter_value(), s.label())),
    );

    let mut months = vec![any()];
    months.extend(
        project_months()
            .into_iter()
            .map(|(value, label)| SelectOption::new(value, label)),
    );

    vec![
        FilterDescriptor::new("status", t(locale, "filter-status"), status),
        FilterDescriptor::new("date", t(locale, "filter-date"), months),
    ]
}

/// Dashboard page component
pub struct DashboardPage {
    entities: AppEntities,
    controller: Rc<DashboardController>,
    search_filter: Entity<SearchFilter>,
    stats: Vec<Stat>,
    activities: Vec<Activity>,
    variant_open: bool,
    page_size_open: bool,
    _subscriptions: Vec<Subscription>,
}

impl DashboardPage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let controller = Rc::new(DashboardController::new(entities.clone()));
        let locale = entities.i18n.read(cx).locale;
        let search_filter = cx.new(|cx| {
            let mut filter = SearchFilter::new(
                t(locale, "dashboard-search"),
                project_filters(locale),
                window,
                cx,
            );
            filter.set_clear_label(t(locale, "action-clear"));
            filter
        });

        let _subscriptions = vec![
            cx.subscribe(&search_filter, |this, _, event: &SearchFilterEvent, cx| {
                match event {
                    SearchFilterEvent::Search(query) => this.controller.set_search(query, cx),
                    SearchFilterEvent::Filter { field, value } => {
                        this.controller.set_filter(field, value, cx)
                    }
                    SearchFilterEvent::Clear => this.controller.clear_filters(cx),
                }
            }),
            cx.observe(&entities.projects, |_this, _, cx| cx.notify()),
            cx.observe(&entities.config, |_this, _, cx| cx.notify()),
            cx.observe_in(&entities.i18n, window, |this, i18n, window, cx| {
                let locale = i18n.read(cx).locale;
                this.search_filter.update(cx, |filter, cx| {
                    filter.set_placeholder(t(locale, "dashboard-search"), window, cx);
                    filter.set_clear_label(t(locale, "action-clear"));
                    filter.set_filters(project_filters(locale), cx);
                });
                cx.notify();
            }),
        ];

        Self {
            entities,
            controller,
            search_filter,
            stats: sample_stats(),
            activities: sample_activities(),
            variant_open: false,
            page_size_open: false,
            _subscriptions,
        }
    }

    fn columns(&self, locale: Locale) -> Vec<Column<Record>> {
        let entities = self.entities.clone();
        vec![
            Column::new("id", t(locale, "col-id")).fixed_width(70.0).sortable(),
            Column::new("name", t(locale, "col-name")).sortable(),
            Column::new("status", t(locale, "col-status"))
                .fixed_width(130.0)
                .sortable()
                .render(|row: &Record| {
                    let raw = row.get("status").map(|v| v.to_string()).unwrap_or_default();
                    div().child(StatusBadge::from_raw(&raw)).into_any_element()
                }),
            Column::new("date", t(locale, "col-date")).fixed_width(130.0).sortable(),
            Column::new("actions", t(locale, "col-actions"))
                .fixed_width(170.0)
                .render(move |row: &Record| row_actions(row, locale, &entities)),
        ]
    }

    fn render_toolbar(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let table_config = self.entities.config.read(cx).config.table.clone();

        let variant_options: Vec<SelectOption> = TableVariant::all()
            .iter()
            .map(|v| SelectOption::new(v.label(), v.label()))
            .collect();
        let page_size_options: Vec<SelectOption> = PAGE_SIZE_OPTIONS
            .iter()
            .map(|size| {
                let count = size.to_string();
                SelectOption::new(
                    count.clone(),
                    t_args(locale, "filter-page-size", &[("count", &count)]),
                )
            })
            .collect();

        let toggle_variant = cx.listener(|this, _: &(), _window, cx| {
            this.variant_open = !this.variant_open;
            this.page_size_open = false;
            cx.notify();
        });
        let toggle_page_size = cx.listener(|this, _: &(), _window, cx| {
            this.page_size_open = !this.page_size_open;
            this.variant_open = false;
            cx.notify();
        });
        let on_variant = cx.listener(|this, value: &String, _window, cx| {
            this.variant_open = false;
            if let Some(variant) = TableVariant::all().iter().find(|v| v.label() == value) {
                this.entities.config.update(cx, |config, cx| {
                    config.set_table_variant(*variant);
                    cx.notify();
                });
            }
            cx.notify();
        });
        let on_page_size = cx.listener(|this, value: &String, _window, cx| {
            this.page_size_open = false;
            match value.parse::<usize>() {
                Ok(size) => this.controller.set_page_size(size, cx),
                Err(e) => tracing::warn!("Ignoring page size {:?}: {}", value, e),
            }
            cx.notify();
        });
        let export = self.controller.clone();

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_3()
            .child(self.search_filter.clone())
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        Select::new("table-variant")
                            .selected(table_config.variant.label())
                            .options(variant_options)
                            .open(self.variant_open)
                            .on_toggle(move |window, cx| toggle_variant(&(), window, cx))
                            .on_change(move |value, window, cx| {
                                on_variant(&value.to_string(), window, cx)
                            }),
                    )
                    .child(
                        Select::new("page-size")
                            .selected(table_config.page_size.to_string())
                            .options(page_size_options)
                            .open(self.page_size_open)
                            .on_toggle(move |window, cx| toggle_page_size(&(), window, cx))
                            .on_change(move |value, window, cx| {
                                on_page_size(&value.to_string(), window, cx)
                            }),
                    )
                    .child(div().flex_1())
                    .child(
                        Button::secondary("export-csv", t(locale, "action-export"))
                            .on_click(move |_: &ClickEvent, _window, cx| export.export(cx)),
                    )
                    .child(
                        Button::ghost("save-preferences", t(locale, "action-save")).on_click(
                            cx.listener(|this, _: &ClickEvent, _window, cx| {
                                this.save_preferences(cx)
                            }),
                        ),
                    ),
            )
    }

    fn save_preferences(&mut self, cx: &mut Context<Self>) {
        let config = self.entities.config.read(cx).config.clone();
        match save_app_config(&config) {
            Ok(()) => {
                self.entities.config.update(cx, |state, cx| {
                    state.mark_saved();
                    cx.notify();
                });
                self.entities.log(LogLevel::Info, "Preferences saved", cx);
            }
            Err(e) => {
                tracing::error!("Failed to save preferences: {}", e);
                self.entities
                    .log(LogLevel::Error, format!("Failed to save preferences: {e}"), cx);
            }
        }
    }

    fn render_table(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let table = self.entities.projects.read(cx);
        let view = table.view();
        let sort = table.sort().cloned();
        let variant = self.entities.config.read(cx).config.table.variant;

        let sort_controller = self.controller.clone();
        let page_controller = self.controller.clone();
        let total = view.total_records.to_string();

        let pagination = Pagination::new("projects-pagination", &view)
            .page_label(t_args(
                locale,
                "table-page",
                &[
                    ("current", &view.current_page.to_string()),
                    ("total", &view.total_pages.max(1).to_string()),
                ],
            ))
            .summary(t_args(locale, "table-records", &[("count", &total)]))
            .button_labels(t(locale, "action-previous"), t(locale, "action-next"))
            .on_page_change(move |page, _window, cx| page_controller.set_page(page, cx));

        DataTable::new("projects-table", self.columns(locale), view.records)
            .variant(variant)
            .sort(sort)
            .empty_message(t(locale, "table-empty"))
            .on_sort(move |field, _window, cx| sort_controller.toggle_sort(field, cx))
            .pagination(pagination)
    }
}

/// Edit/Delete buttons for a project row
fn row_actions(row: &Record, locale: Locale, entities: &AppEntities) -> AnyElement {
    let id = row
        .get("id")
        .and_then(|v| v.as_number())
        .map(|n| n as u64)
        .unwrap_or_default();
    let name = row.get("name").map(|v| v.to_string()).unwrap_or_default();

    let edit_entities = entities.clone();
    let edit_name = name.clone();
    let delete_entities = entities.clone();

    div()
        .flex()
        .gap_2()
        .child(
            Button::ghost(ElementId::NamedInteger("edit".into(), id), t(locale, "action-edit"))
                .size(ButtonSize::Small)
                .on_click(move |_: &ClickEvent, _window, cx| {
                    edit_entities.log(LogLevel::Info, format!("Edit {edit_name}"), cx);
                }),
        )
        .child(
            Button::danger(
                ElementId::NamedInteger("delete".into(), id),
                t(locale, "action-delete"),
            )
            .size(ButtonSize::Small)
            .on_click(move |_: &ClickEvent, _window, cx| {
                delete_entities.log(LogLevel::Warn, format!("Delete {name}"), cx);
            }),
        )
        .into_any_element()
}

fn section(title: gpui::SharedString) -> gpui::Div {
    div()
        .w_full()
        .p_5()
        .bg(CatalogColors::surface())
        .rounded_lg()
        .shadow_sm()
        .flex()
        .flex_col()
        .gap_4()
        .child(
            div()
                .text_size(px(Typography::TEXT_LG))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(CatalogColors::text_primary())
                .child(title),
        )
}

impl Render for DashboardPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        Shell::new("dashboard-page")
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_4()
                    .children(self.stats.iter().cloned().map(StatCard::new)),
            )
            .child(
                section(t(locale, "dashboard-projects"))
                    .child(self.render_toolbar(locale, cx))
                    .child(self.render_table(locale, cx)),
            )
            .child(
                section(t(locale, "dashboard-activity")).child(
                    Timeline::new(self.activities.clone()).empty_message(t(locale, "log-empty")),
                ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_filters_start_with_any() {
        let filters = project_filters(Locale::EnUS);
        let fields: Vec<&str> = filters.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, ["status", "date"]);

        for filter in &filters {
            assert_eq!(filter.options[0].value, "");
            assert_eq!(filter.options[0].label.as_ref(), "All");
        }
        assert!(filters[0].options.iter().all(|o| o.value != "inactive"));
        assert_eq!(filters[1].options[1].value, "2025-11");
    }

    #[test]
    fn test_project_filters_follow_locale() {
        let filters = project_filters(Locale::ZhCN);
        assert_eq!(filters[0].label.as_ref(), "状态");
        assert_eq!(filters[1].label.as_ref(), "月份");
    }
}
