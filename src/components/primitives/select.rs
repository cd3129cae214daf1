//! Select Component
//!
//! Stateless dropdown: the parent owns the selected value and whether the
//! option list is open.

use std::rc::Rc;

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::CatalogColors;

/// A select option
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

type ChangeHandler = Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>;

/// A select/dropdown component
#[derive(IntoElement)]
pub struct Select {
    id: SharedString,
    selected: Option<String>,
    options: Vec<SelectOption>,
    placeholder: SharedString,
    open: bool,
    disabled: bool,
    on_toggle: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
    on_change: Option<ChangeHandler>,
}

impl Select {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            selected: None,
            options: Vec::new(),
            placeholder: "Select...".into(),
            open: false,
            disabled: false,
            on_toggle: None,
            on_change: None,
        }
    }

    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Whether the option list is showing
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called when the trigger is clicked
    pub fn on_toggle(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }

    /// Called with the chosen option value
    pub fn on_change(mut self, handler: impl Fn(&str, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    fn selected_label(&self) -> Option<SharedString> {
        let value = self.selected.as_ref()?;
        self.options
            .iter()
            .find(|opt| &opt.value == value)
            .map(|opt| opt.label.clone())
    }
}

impl RenderOnce for Select {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let label = self.selected_label();
        let text_color = if label.is_some() {
            CatalogColors::text_primary()
        } else {
            CatalogColors::text_muted()
        };
        let display_text = label.unwrap_or_else(|| self.placeholder.clone());
        let interactive = !self.disabled;

        let mut trigger = div()
            .id(ElementId::Name(self.id.clone()))
            .px_3()
            .py_2()
            .bg(CatalogColors::surface())
            .border_1()
            .border_color(CatalogColors::border_strong())
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(150.0))
            .flex()
            .items_center()
            .justify_between()
            .child(display_text)
            .child(
                div()
                    .text_color(CatalogColors::text_muted())
                    .text_size(px(10.0))
                    .child(if self.open { "▲" } else { "▼" }),
            );

        if interactive {
            trigger = trigger.cursor_pointer();
            if let Some(handler) = self.on_toggle {
                trigger = trigger.on_click(move |_, window, cx| handler(window, cx));
            }
        } else {
            trigger = trigger.opacity(0.5);
        }

        let selected = self.selected.clone();
        let on_change = self.on_change.clone();
        let id = self.id;

        div()
            .relative()
            .child(trigger)
            .when(self.open && interactive, |el| {
                el.child(
                    div()
                        .absolute()
                        .top(px(40.0))
                        .left_0()
                        .w_full()
                        .bg(CatalogColors::surface())
                        .border_1()
                        .border_color(CatalogColors::border())
                        .rounded_md()
                        .shadow_md()
                        .py_1()
                        .children(self.options.into_iter().enumerate().map(|(ix, option)| {
                            let is_selected = selected.as_deref() == Some(option.value.as_str());
                            let handler = on_change.clone();
                            let value = option.value.clone();
                            div()
                                .id(ElementId::NamedInteger(
                                    format!("{id}-option").into(),
                                    ix as u64,
                                ))
                                .px_3()
                                .py_1()
                                .text_sm()
                                .cursor_pointer()
                                .text_color(CatalogColors::text_primary())
                                .when(is_selected, |el| el.bg(CatalogColors::primary_soft()))
                                .hover(|s| s.bg(CatalogColors::table_row_hover()))
                                .when_some(handler, |el, handler| {
                                    el.on_click(move |_, window, cx| handler(&value, window, cx))
                                })
                                .child(option.label)
                        })),
                )
            })
    }
}
