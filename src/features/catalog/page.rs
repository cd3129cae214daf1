//! Catalog Page
//!
//! Gallery of every component in each of its variants.

use std::rc::Rc;

use chrono::NaiveDate;
use gpui::{
    AnyElement, ClickEvent, Context, ElementId, Entity, FontWeight, IntoElement, ParentElement,
    Render, SharedString, Styled, Subscription, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::composite::data_display::{StatCard, StatusBadge, Timeline};
use crate::components::composite::data_table::{Column, DataTable, Pagination};
use crate::components::composite::modal::{Modal, ModalSize, ModalVariant};
use crate::components::composite::search_filter::{
    FilterDescriptor, SearchFilter, SearchFilterEvent,
};
use crate::components::layout::shell::Shell;
use crate::components::layout::sidebar::{MenuGroup, MenuItem, NavBar, NavVariant};
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::components::primitives::checkbox::{Checkbox, CheckboxVariant};
use crate::components::primitives::radio::{Radio, RadioVariant};
use crate::components::primitives::select::{Select, SelectOption};
use crate::components::primitives::switch::{Switch, SwitchVariant};
use crate::components::primitives::text_input::{
    InputRenderer, InputVariant, TextInput, TextInputEvent, text_input,
};
use crate::domain::activity::{Activity, ActivityKind, Stat, Status};
use crate::domain::config::TableVariant;
use crate::domain::record::Record;
use crate::domain::validation::validate_phone;
use crate::i18n::{Locale, t, t_args};
use crate::state::table_state::TableState;
use crate::theme::colors::CatalogColors;
use crate::theme::typography::Typography;
use crate::utils::format::{DateStyle, NumberFormat, format_count, format_date, format_number};

const PEOPLE: [(i64, &str, i64, &str, &str); 5] = [
    (1, "John Doe", 30, "john@example.com", "Admin"),
    (2, "Jane Smith", 25, "jane@example.com", "Editor"),
    (3, "Bob Johnson", 35, "bob@example.com", "Viewer"),
    (4, "Alice Brown", 28, "alice@example.com", "Editor"),
    (5, "Charlie Wilson", 42, "charlie@example.com", "Viewer"),
];

const ROLES: [&str; 3] = ["Admin", "Editor", "Viewer"];

/// Choices shown in each radio group
const RADIO_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];

fn people() -> Vec<Record> {
    PEOPLE
        .iter()
        .map(|(id, name, age, email, role)| {
            Record::new()
                .with("id", *id)
                .with("name", *name)
                .with("age", *age)
                .with("email", *email)
                .with("role", *role)
        })
        .collect()
}

fn role_filter(locale: Locale) -> Vec<FilterDescriptor> {
    let mut options = vec![SelectOption::new("", t(locale, "filter-all"))];
    options.extend(ROLES.iter().map(|role| SelectOption::new(*role, *role)));
    vec![FilterDescriptor::new("role", t(locale, "col-role"), options)]
}

fn mega_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup::new(
            "Products",
            vec![
                MenuItem::new("Analytics", "Get a better understanding of your traffic"),
                MenuItem::new("Engagement", "Speak directly to your customers"),
                MenuItem::new("Security", "Your customers' data will be safe and secure"),
            ],
        ),
        MenuGroup::new(
            "Solutions",
            vec![
                MenuItem::new("Marketing", "Campaigns that reach the right audience"),
                MenuItem::new("Sales", "Close deals with shared pipelines"),
                MenuItem::new("Service", "Answer customers where they are"),
            ],
        ),
    ]
}

/// Error text for the phone demo; an empty field is not an error
fn phone_error(value: &str, locale: Locale) -> Option<SharedString> {
    (!value.is_empty() && !validate_phone(value)).then(|| t(locale, "error-phone"))
}

fn demo_stats() -> Vec<Stat> {
    vec![
        Stat::new("Total Users", "1,234", Some(12)),
        Stat::new("Revenue", "$45,678", Some(-5)),
        Stat::new("Orders", "89", Some(8)),
    ]
}

fn demo_timeline() -> Vec<Activity> {
    [
        (1, ActivityKind::Other, "User registered", 1),
        (2, ActivityKind::Task, "Order placed", 2),
        (3, ActivityKind::Comment, "Payment processed", 3),
    ]
    .into_iter()
    .filter_map(|(id, kind, content, day)| {
        let datetime = NaiveDate::from_ymd_opt(2023, 1, day)?.and_hms_opt(9, 0, 0)?;
        Some(Activity {
            id,
            kind,
            content: content.to_string(),
            datetime,
        })
    })
    .collect()
}

/// Catalog page component
pub struct CatalogPage {
    entities: AppEntities,
    inputs: Vec<Entity<TextInput>>,
    toolkit_input: Entity<TextInput>,
    disabled_input: Entity<TextInput>,
    phone_input: Entity<TextInput>,
    checked: Vec<bool>,
    radio_choice: Vec<usize>,
    switches: Vec<bool>,
    people: TableState,
    people_filter: Entity<SearchFilter>,
    nav_active: ActivePage,
    nav_expanded: bool,
    mega_open: Option<usize>,
    modal: Option<ModalVariant>,
    size: Option<String>,
    size_open: bool,
    _subscriptions: Vec<Subscription>,
}

impl CatalogPage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let locale = entities.i18n.read(cx).locale;
        let inputs = InputVariant::all()
            .iter()
            .map(|variant| {
                let input = text_input("Enter text...", *variant, window, cx);
                input.update(cx, |input, _| input.set_label(variant.label()));
                input
            })
            .collect();

        let toolkit_input = text_input("Enter text...", InputVariant::Default, window, cx);
        toolkit_input.update(cx, |input, _| {
            input.set_label("Toolkit");
            input.set_renderer(InputRenderer::Toolkit);
        });
        let disabled_input = text_input("Read only", InputVariant::Default, window, cx);
        disabled_input.update(cx, |input, _| {
            input.set_label("Disabled");
            input.set_disabled(true);
        });
        let phone_input =
            text_input(t(locale, "placeholder-phone"), InputVariant::Default, window, cx);
        phone_input.update(cx, |input, _| input.set_label(t(locale, "field-phone")));

        let people_filter = cx.new(|cx| {
            let mut filter =
                SearchFilter::new(t(locale, "dashboard-search"), role_filter(locale), window, cx);
            filter.set_clear_label(t(locale, "action-clear"));
            filter
        });

        let _subscriptions = vec![
            cx.subscribe(&phone_input, |this, input, event: &TextInputEvent, cx| {
                if *event == TextInputEvent::Change {
                    let locale = this.entities.i18n.read(cx).locale;
                    let error = phone_error(&input.read(cx).value(cx), locale);
                    input.update(cx, |input, cx| input.set_error(error, cx));
                }
            }),
            cx.subscribe(&people_filter, |this, _, event: &SearchFilterEvent, cx| {
                match event {
                    SearchFilterEvent::Search(query) => {
                        this.people.set_filter("name", query.as_str())
                    }
                    SearchFilterEvent::Filter { field, value } => {
                        this.people.set_filter(field.as_str(), value.as_str())
                    }
                    SearchFilterEvent::Clear => this.people.clear_filters(),
                }
                cx.notify();
            }),
            cx.observe_in(&entities.i18n, window, |this, i18n, window, cx| {
                let locale = i18n.read(cx).locale;
                this.people_filter.update(cx, |filter, cx| {
                    filter.set_placeholder(t(locale, "dashboard-search"), window, cx);
                    filter.set_clear_label(t(locale, "action-clear"));
                    filter.set_filters(role_filter(locale), cx);
                });
                this.phone_input.update(cx, |input, cx| {
                    input.set_label(t(locale, "field-phone"));
                    input.set_placeholder(t(locale, "placeholder-phone"), window, cx);
                });
                cx.notify();
            }),
        ];

        Self {
            entities,
            inputs,
            toolkit_input,
            disabled_input,
            phone_input,
            checked: vec![false; CheckboxVariant::all().len()],
            radio_choice: vec![0; RadioVariant::all().len()],
            switches: vec![false; SwitchVariant::all().len()],
            people: TableState::new(people(), 3),
            people_filter,
            nav_active: ActivePage::Catalog,
            nav_expanded: false,
            mega_open: None,
            modal: None,
            size: None,
            size_open: false,
            _subscriptions,
        }
    }

    fn render_buttons(&self) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_2()
                    .children(ButtonVariant::all().iter().map(|variant| {
                        Button::new(
                            SharedString::from(format!("btn-{}", variant.label())),
                            variant.label(),
                        )
                        .variant(*variant)
                    })),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .children(ButtonSize::all().iter().map(|size| {
                        Button::primary(
                            SharedString::from(format!("btn-size-{}", size.label())),
                            size.label(),
                        )
                        .size(*size)
                    }))
                    .child(Button::secondary("btn-disabled", "Disabled").disabled(true))
                    .child(Button::primary("btn-loading", "Save").loading_with(true, "Saving...")),
            )
    }

    fn render_inputs(&self) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_3()
            .max_w(px(420.0))
            .children(self.inputs.iter().cloned())
            .child(self.toolkit_input.clone())
            .child(self.disabled_input.clone())
            .child(self.phone_input.clone())
    }

    fn render_navigation(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let on_select = Rc::new(cx.listener(|this, page: &ActivePage, _window, cx| {
            this.nav_active = *page;
            this.mega_open = None;
            cx.notify();
        }));
        let on_toggle = Rc::new(cx.listener(|this, _: &(), _window, cx| {
            this.nav_expanded = !this.nav_expanded;
            cx.notify();
        }));
        let on_open_group = Rc::new(cx.listener(|this, group: &Option<usize>, _window, cx| {
            this.mega_open = *group;
            cx.notify();
        }));

        div()
            .flex()
            .flex_col()
            .gap_4()
            .children(NavVariant::all().into_iter().map(|variant| {
                let on_select = on_select.clone();
                let on_toggle = on_toggle.clone();
                let on_open_group = on_open_group.clone();
                let id = variant.label().to_lowercase().replace(' ', "-");
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(caption(variant.label()))
                    .child(
                        NavBar::new(format!("catalog-nav-{id}"), self.nav_active)
                            .variant(variant)
                            .pages(ActivePage::all(), locale)
                            .brand(t(locale, "app-title"))
                            .expanded(self.nav_expanded)
                            .menu(mega_menu_groups(), self.mega_open)
                            .on_select(move |page, window, cx| on_select(&page, window, cx))
                            .on_toggle(move |window, cx| on_toggle(&(), window, cx))
                            .on_open_group(move |group, window, cx| {
                                on_open_group(&group, window, cx)
                            }),
                    )
            }))
    }

    fn render_modal_triggers(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let open = Rc::new(cx.listener(|this, variant: &ModalVariant, _window, cx| {
            this.modal = Some(*variant);
            cx.notify();
        }));

        div()
            .flex()
            .flex_wrap()
            .gap_2()
            .children(ModalVariant::all().into_iter().map(|variant| {
                let open = open.clone();
                Button::secondary(
                    SharedString::from(format!("open-modal-{}", variant.label())),
                    format!("{} ({})", t(locale, "action-open-modal"), variant.label()),
                )
                .on_click(move |_: &ClickEvent, window, cx| open(&variant, window, cx))
            }))
    }

    fn render_tables(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let view = self.people.view();
        let sort = self.people.sort().cloned();
        let on_sort = Rc::new(cx.listener(|this, field: &String, _window, cx| {
            this.people.toggle_sort(field);
            cx.notify();
        }));
        let on_page = Rc::new(cx.listener(|this, page: &usize, _window, cx| {
            this.people.set_page(*page);
            cx.notify();
        }));
        let page_label = t_args(
            locale,
            "table-page",
            &[
                ("current", &view.current_page.to_string()),
                ("total", &view.total_pages.max(1).to_string()),
            ],
        );

        div()
            .flex()
            .flex_col()
            .gap_6()
            .children(TableVariant::all().iter().map(|variant| {
                let on_sort = on_sort.clone();
                let on_page = on_page.clone();
                let columns = vec![
                    Column::new("id", t(locale, "col-id")).fixed_width(60.0),
                    Column::new("name", t(locale, "col-name")).sortable(),
                    Column::new("age", t(locale, "col-age")).fixed_width(90.0).sortable(),
                    Column::new("email", t(locale, "col-email")).sortable(),
                    Column::new("role", t(locale, "col-role")).fixed_width(100.0).sortable(),
                ];
                let id = variant.label().to_lowercase();

                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(caption(variant.label()))
                    .child(
                        DataTable::new(format!("people-{id}"), columns, view.records.clone())
                            .variant(*variant)
                            .sort(sort.clone())
                            .empty_message(t(locale, "table-empty"))
                            .on_sort(move |field, window, cx| {
                                on_sort(&field.to_string(), window, cx)
                            })
                            .pagination(
                                Pagination::new(format!("people-{id}-pages"), &view)
                                .page_label(page_label.clone())
                                .button_labels(
                                    t(locale, "action-previous"),
                                    t(locale, "action-next"),
                                )
                                .on_page_change(move |page, window, cx| on_page(&page, window, cx)),
                            ),
                    )
            }))
    }

    fn render_data_display(&self) -> impl IntoElement {
        let badges = ["active", "pending", "inactive", "completed", "archived"];
        let numbers = [
            format_number(1234567.891, NumberFormat::default()),
            format_number(45678.0, NumberFormat::default().currency()),
            format_number(1234567.0, NumberFormat::default().compact().decimals(1)),
            format_count(98765),
        ];
        let formatted_dates: Vec<String> = demo_timeline()
            .first()
            .map(|a| {
                [DateStyle::Default, DateStyle::Full, DateStyle::Time]
                    .into_iter()
                    .map(|style| format_date(&a.datetime, style))
                    .collect()
            })
            .unwrap_or_default();

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .flex()
                    .gap_2()
                    .children(badges.into_iter().map(StatusBadge::from_raw)),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_4()
                    .children(demo_stats().into_iter().map(StatCard::new)),
            )
            .child(Timeline::new(demo_timeline()))
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_4()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(CatalogColors::text_secondary())
                    .children(numbers.into_iter().chain(formatted_dates)),
            )
    }

    fn render_form_controls(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let on_check = Rc::new(cx.listener(|this, (ix, checked): &(usize, bool), _window, cx| {
            if let Some(slot) = this.checked.get_mut(*ix) {
                *slot = *checked;
            }
            cx.notify();
        }));
        let toggle_size = cx.listener(|this, _: &(), _window, cx| {
            this.size_open = !this.size_open;
            cx.notify();
        });
        let choose_size = cx.listener(|this, value: &String, _window, cx| {
            this.size = Some(value.clone());
            this.size_open = false;
            cx.notify();
        });

        let options: Vec<SelectOption> = ButtonSize::all()
            .iter()
            .map(|s| SelectOption::new(s.label(), s.label()))
            .collect();
        let mut select = Select::new("catalog-select")
            .options(options)
            .open(self.size_open)
            .on_toggle(move |window, cx| toggle_size(&(), window, cx))
            .on_change(move |value, window, cx| choose_size(&value.to_string(), window, cx));
        if let Some(size) = &self.size {
            select = select.selected(size.clone());
        }

        div()
            .flex()
            .flex_col()
            .gap_3()
            .children(CheckboxVariant::all().iter().enumerate().map(|(ix, variant)| {
                let on_check = on_check.clone();
                Checkbox::new(ElementId::NamedInteger("catalog-checkbox".into(), ix as u64))
                    .variant(*variant)
                    .label(variant.label())
                    .checked(self.checked.get(ix).copied().unwrap_or_default())
                    .on_change(move |checked, window, cx| on_check(&(ix, checked), window, cx))
            }))
            .child(
                Checkbox::new("catalog-checkbox-error")
                    .label("Required option")
                    .error(true),
            )
            .child(
                Checkbox::new("catalog-checkbox-disabled")
                    .label("Disabled")
                    .disabled(true),
            )
            .child(div().max_w(px(240.0)).child(select))
    }

    fn render_radios(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let on_pick = Rc::new(cx.listener(|this, (group, choice): &(usize, usize), _window, cx| {
            if let Some(slot) = this.radio_choice.get_mut(*group) {
                *slot = *choice;
            }
            cx.notify();
        }));

        div()
            .flex()
            .flex_col()
            .gap_3()
            .children(RadioVariant::all().iter().enumerate().map(|(group, variant)| {
                let chosen = self.radio_choice.get(group).copied().unwrap_or_default();
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(div().w(px(80.0)).child(caption(variant.label())))
                    .children(RADIO_OPTIONS.iter().enumerate().map(|(choice, label)| {
                        let on_pick = on_pick.clone();
                        Radio::new(ElementId::NamedInteger(
                            format!("catalog-radio-{group}").into(),
                            choice as u64,
                        ))
                        .variant(*variant)
                        .label(*label)
                        .selected(chosen == choice)
                        .on_select(move |window, cx| on_pick(&(group, choice), window, cx))
                    }))
            }))
            .child(
                Radio::new("catalog-radio-disabled")
                    .label("Disabled")
                    .disabled(true),
            )
    }

    fn render_switches(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let on_flip = Rc::new(cx.listener(|this, (ix, on): &(usize, bool), _window, cx| {
            if let Some(slot) = this.switches.get_mut(*ix) {
                *slot = *on;
            }
            cx.notify();
        }));

        div()
            .flex()
            .flex_col()
            .gap_3()
            .children(SwitchVariant::all().iter().enumerate().map(|(ix, variant)| {
                let on_flip = on_flip.clone();
                Switch::new(ElementId::NamedInteger("catalog-switch".into(), ix as u64))
                    .variant(*variant)
                    .label(variant.label())
                    .on(self.switches.get(ix).copied().unwrap_or_default())
                    .on_change(move |on, window, cx| on_flip(&(ix, on), window, cx))
            }))
            .child(
                Switch::new("catalog-switch-disabled")
                    .label("Disabled")
                    .on(true)
                    .disabled(true),
            )
    }

    fn render_modal(&self, variant: ModalVariant, locale: Locale, cx: &mut Context<Self>) -> AnyElement {
        let close = cx.listener(|this, _: &(), _window, cx| {
            this.modal = None;
            cx.notify();
        });
        let close = Rc::new(close);
        let close_button = close.clone();
        let size = match variant {
            ModalVariant::Minimal => ModalSize::Small,
            ModalVariant::Colorful => ModalSize::Large,
            _ => ModalSize::Medium,
        };

        let mut modal = Modal::new(format!("{} {}", variant.label(), t(locale, "catalog-modal")))
            .variant(variant)
            .size(size)
            .on_close(move |window, cx| close(&(), window, cx));
        // Minimal dialogs close from the body button only
        if variant == ModalVariant::Minimal {
            modal = modal.hide_close_button();
        }

        modal
            .child(t(locale, "catalog-modal-body"))
            .child(
                div().flex().justify_end().child(
                    Button::primary("modal-dismiss", t(locale, "action-close"))
                        .on_click(move |_: &ClickEvent, window, cx| close_button(&(), window, cx)),
                ),
            )
            .into_any_element()
    }
}

fn caption(text: &'static str) -> impl IntoElement {
    div()
        .text_size(px(Typography::TEXT_XS))
        .text_color(CatalogColors::text_muted())
        .child(text)
}

fn section(title: SharedString, body: impl IntoElement) -> impl IntoElement {
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
        .child(body)
}

impl Render for CatalogPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let modal = self.modal.map(|variant| self.render_modal(variant, locale, cx));

        div()
            .relative()
            .size_full()
            .child(
                Shell::new("catalog-page")
                    .child(section(t(locale, "catalog-buttons"), self.render_buttons()))
                    .child(section(t(locale, "catalog-inputs"), self.render_inputs()))
                    .child(section(
                        t(locale, "catalog-navigation"),
                        self.render_navigation(locale, cx),
                    ))
                    .child(section(
                        t(locale, "catalog-modal"),
                        self.render_modal_triggers(locale, cx),
                    ))
                    .child(section(
                        t(locale, "catalog-search-filter"),
                        self.people_filter.clone(),
                    ))
                    .child(section(t(locale, "catalog-tables"), self.render_tables(locale, cx)))
                    .child(section(t(locale, "catalog-data-display"), self.render_data_display()))
                    .child(section(
                        t(locale, "catalog-form-controls"),
                        self.render_form_controls(cx),
                    ))
                    .child(section(t(locale, "catalog-radios"), self.render_radios(cx)))
                    .child(section(t(locale, "catalog-switches"), self.render_switches(cx))),
            )
            .children(modal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_people_sort_by_age() {
        let mut table = TableState::new(people(), 5);
        table.toggle_sort("age");
        let names: Vec<String> = table
            .view()
            .records
            .iter()
            .filter_map(|r| r.get("name").map(|v| v.to_string()))
            .collect();
        assert_eq!(
            names,
            ["Jane Smith", "Alice Brown", "John Doe", "Bob Johnson", "Charlie Wilson"]
        );
    }

    #[test]
    fn test_role_filter_narrows_people() {
        let mut table = TableState::new(people(), 5);
        let filters = role_filter(Locale::EnUS);
        assert_eq!(filters[0].options.len(), ROLES.len() + 1);

        table.set_filter("role", "Editor");
        assert_eq!(table.filtered_count(), 2);
        table.set_filter("name", "jane");
        assert_eq!(table.filtered_count(), 1);
        table.clear_filters();
        assert_eq!(table.filtered_count(), PEOPLE.len());
    }

    #[test]
    fn test_phone_error_skips_empty_field() {
        assert_eq!(phone_error("", Locale::EnUS), None);
        assert_eq!(phone_error("+1 555 123 4567", Locale::EnUS), None);
        assert_eq!(
            phone_error("12ab", Locale::EnUS).as_ref().map(|s| s.as_ref()),
            Some("Please enter a valid phone number")
        );
    }

    #[test]
    fn test_mega_menu_groups_have_descriptions() {
        let groups = mega_menu_groups();
        assert_eq!(groups.len(), 2);
        for group in &groups {
            assert_eq!(group.items.len(), 3);
            assert!(group.items.iter().all(|item| !item.description.is_empty()));
        }
    }

    #[test]
    fn test_demo_timeline_dates() {
        let timeline = demo_timeline();
        assert_eq!(timeline.len(), 3);
        assert_eq!(format_date(&timeline[0].datetime, DateStyle::Default), "Jan 1, 2023");
    }

    #[test]
    fn test_unknown_badge_status() {
        assert_eq!(Status::parse("archived").label(), "Archived");
    }
}
