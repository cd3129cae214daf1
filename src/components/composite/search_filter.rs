//! SearchFilter Component
//!
//! A debounced search box followed by one dropdown per [`FilterDescriptor`]
//! and a clear button. Parents subscribe to [`SearchFilterEvent`].

use gpui::{
    ClickEvent, Context, Entity, EventEmitter, IntoElement, ParentElement, Render, SharedString,
    Styled, Subscription, Task, Window, div, prelude::*, px,
};

use crate::components::primitives::button::Button;
use crate::components::primitives::select::{Select, SelectOption};
use crate::components::primitives::text_input::{
    InputVariant, TextInput, TextInputEvent, text_input,
};
use crate::constants::SEARCH_DEBOUNCE;
use crate::utils::debounce::Debounced;

/// One filter dropdown: the record field it constrains and its choices
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDescriptor {
    pub field: String,
    pub label: SharedString,
    pub options: Vec<SelectOption>,
}

impl FilterDescriptor {
    pub fn new(
        field: impl Into<String>,
        label: impl Into<SharedString>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            options,
        }
    }
}

/// Events emitted by [`SearchFilter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilterEvent {
    /// Search text settled (after the debounce or on Enter)
    Search(String),
    /// A dropdown changed; an empty value means "any"
    Filter { field: String, value: String },
    /// Search text and every dropdown were reset
    Clear,
}

/// Selected value per descriptor, keeping earlier choices for fields that
/// still exist when the descriptors are replaced
fn carry_selections(
    old: &[FilterDescriptor],
    selected: &[String],
    new: &[FilterDescriptor],
) -> Vec<String> {
    new.iter()
        .map(|descriptor| {
            old.iter()
                .zip(selected)
                .find(|(d, _)| d.field == descriptor.field)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        })
        .collect()
}

/// Search box plus filter dropdowns
pub struct SearchFilter {
    search: Entity<TextInput>,
    filters: Vec<FilterDescriptor>,
    selected: Vec<String>,
    open: Option<usize>,
    clear_label: SharedString,
    debounce: Debounced<String>,
    _debounce_task: Option<Task<()>>,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<SearchFilterEvent> for SearchFilter {}

impl SearchFilter {
    pub fn new(
        placeholder: impl Into<SharedString>,
        filters: Vec<FilterDescriptor>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let search = text_input(placeholder, InputVariant::Rounded, window, cx);
        let subscription = cx.subscribe(&search, |this, input, event: &TextInputEvent, cx| {
            match event {
                TextInputEvent::Change => {
                    let query = input.read(cx).value(cx).to_string();
                    this.schedule_search(query, cx);
                }
                TextInputEvent::Submit => {
                    // Enter applies now; a pending timer must not fire after it
                    this.debounce.flush();
                    let query = input.read(cx).value(cx).to_string();
                    cx.emit(SearchFilterEvent::Search(query));
                }
            }
        });

        let selected = vec![String::new(); filters.len()];
        Self {
            search,
            filters,
            selected,
            open: None,
            clear_label: "Clear".into(),
            debounce: Debounced::new(),
            _debounce_task: None,
            _subscriptions: vec![subscription],
        }
    }

    fn schedule_search(&mut self, query: String, cx: &mut Context<Self>) {
        let generation = self.debounce.push(query);
        // Replacing the task drops the previous timer
        self._debounce_task = Some(cx.spawn(async move |handle, cx| {
            cx.background_executor().timer(SEARCH_DEBOUNCE).await;
            let _ = handle.update(cx, |this, cx| {
                if let Some(query) = this.debounce.settle(generation) {
                    tracing::debug!("Search settled: {:?}", query);
                    cx.emit(SearchFilterEvent::Search(query));
                }
            });
        }));
    }

    /// Replace the descriptors (for example after a locale change)
    pub fn set_filters(&mut self, filters: Vec<FilterDescriptor>, cx: &mut Context<Self>) {
        self.selected = carry_selections(&self.filters, &self.selected, &filters);
        self.filters = filters;
        self.open = None;
        cx.notify();
    }

    pub fn set_placeholder(
        &mut self,
        placeholder: impl Into<SharedString>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let placeholder = placeholder.into();
        self.search.update(cx, |input, cx| {
            input.set_placeholder(placeholder, window, cx);
            cx.notify();
        });
    }

    pub fn set_clear_label(&mut self, label: impl Into<SharedString>) {
        self.clear_label = label.into();
    }

    fn select(&mut self, ix: usize, value: &str, cx: &mut Context<Self>) {
        self.open = None;
        let Some(field) = self.filters.get(ix).map(|d| d.field.clone()) else {
            return;
        };
        if let Some(slot) = self.selected.get_mut(ix) {
            *slot = value.to_string();
        }
        cx.emit(SearchFilterEvent::Filter {
            field,
            value: value.to_string(),
        });
        cx.notify();
    }

    fn clear(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.search
            .update(cx, |input, cx| input.set_value("", window, cx));
        self.debounce.flush();
        self._debounce_task = None;
        self.selected.iter_mut().for_each(String::clear);
        self.open = None;
        cx.emit(SearchFilterEvent::Clear);
        cx.notify();
    }
}

impl Render for SearchFilter {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let selects = self
            .filters
            .iter()
            .enumerate()
            .map(|(ix, descriptor)| {
                let toggle = cx.listener(move |this, _: &(), _window, cx| {
                    this.open = if this.open == Some(ix) { None } else { Some(ix) };
                    cx.notify();
                });
                let change = cx.listener(move |this, value: &String, _window, cx| {
                    this.select(ix, value, cx);
                });

                Select::new(SharedString::from(format!("filter-{}", descriptor.field)))
                    .placeholder(descriptor.label.clone())
                    .selected(self.selected.get(ix).cloned().unwrap_or_default())
                    .options(descriptor.options.clone())
                    .open(self.open == Some(ix))
                    .on_toggle(move |window, cx| toggle(&(), window, cx))
                    .on_change(move |value, window, cx| change(&value.to_string(), window, cx))
            })
            .collect::<Vec<_>>();

        div()
            .w_full()
            .flex()
            .flex_wrap()
            .items_center()
            .gap_3()
            .child(div().flex_1().min_w(px(240.0)).child(self.search.clone()))
            .children(selects)
            .child(
                Button::ghost("search-filter-clear", self.clear_label.clone()).on_click(
                    cx.listener(|this, _: &ClickEvent, window, cx| this.clear(window, cx)),
                ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(field: &str) -> FilterDescriptor {
        FilterDescriptor::new(field, field.to_uppercase(), vec![SelectOption::new("", "All")])
    }

    #[test]
    fn test_carry_selections_matches_by_field() {
        let old = vec![descriptor("status"), descriptor("date")];
        let selected = vec!["active".to_string(), "2025-11".to_string()];
        let new = vec![descriptor("date"), descriptor("owner"), descriptor("status")];

        assert_eq!(
            carry_selections(&old, &selected, &new),
            vec!["2025-11".to_string(), String::new(), "active".to_string()]
        );
    }

    #[test]
    fn test_carry_selections_empty_start() {
        let new = vec![descriptor("status")];
        assert_eq!(carry_selections(&[], &[], &new), vec![String::new()]);
    }
}
