//! Pagination Component
//!
//! "Page x of y" with Previous/Next buttons for the DataTable.

use std::rc::Rc;

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*,
};

use crate::domain::query::Page;
use crate::theme::colors::CatalogColors;

type PageHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    id: SharedString,
    current_page: usize,
    can_previous: bool,
    can_next: bool,
    summary: Option<SharedString>,
    page_label: SharedString,
    previous_label: SharedString,
    next_label: SharedString,
    on_page_change: Option<PageHandler>,
}

impl Pagination {
    /// Controls for one page of pipeline output
    pub fn new<R>(id: impl Into<SharedString>, page: &Page<R>) -> Self {
        Self {
            id: id.into(),
            current_page: page.current_page,
            can_previous: page.has_previous(),
            can_next: page.has_next(),
            summary: None,
            page_label: format!("Page {} of {}", page.current_page, page.total_pages.max(1)).into(),
            previous_label: "Previous".into(),
            next_label: "Next".into(),
            on_page_change: None,
        }
    }

    /// Replace the "Page x of y" text (for translations)
    pub fn page_label(mut self, label: impl Into<SharedString>) -> Self {
        self.page_label = label.into();
        self
    }

    /// Previous/Next button labels
    pub fn button_labels(
        mut self,
        previous: impl Into<SharedString>,
        next: impl Into<SharedString>,
    ) -> Self {
        self.previous_label = previous.into();
        self.next_label = next.into();
        self
    }

    /// Extra text on the left, e.g. the record count
    pub fn summary(mut self, summary: impl Into<SharedString>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Called with the requested page number
    pub fn on_page_change(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }
}

fn nav_button(
    id: ElementId,
    label: SharedString,
    enabled: bool,
    target: usize,
    handler: Option<PageHandler>,
) -> impl IntoElement {
    let mut btn = div()
        .id(id)
        .px_3()
        .py_1()
        .border_1()
        .border_color(CatalogColors::border_strong())
        .rounded_md()
        .text_sm()
        .text_color(CatalogColors::text_primary())
        .child(label);

    if enabled {
        btn = btn
            .cursor_pointer()
            .hover(|s| s.bg(CatalogColors::table_row_hover()));
        if let Some(handler) = handler {
            btn = btn.on_click(move |_, window, cx| handler(target, window, cx));
        }
    } else {
        btn = btn.opacity(0.5);
    }

    btn
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let current = self.current_page;
        let can_prev = self.can_previous;
        let can_next = self.can_next;
        let prev_id = ElementId::NamedInteger(format!("{}-prev", self.id).into(), 0);
        let next_id = ElementId::NamedInteger(format!("{}-next", self.id).into(), 0);

        div()
            .w_full()
            .px_6()
            .py_3()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(CatalogColors::border())
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .text_sm()
                    .text_color(CatalogColors::text_secondary())
                    .child(self.page_label)
                    .when_some(self.summary, |el, summary| {
                        el.child(div().text_color(CatalogColors::text_muted()).child(summary))
                    }),
            )
            .child(
                div()
                    .flex()
                    .gap_2()
                    .child(nav_button(
                        prev_id,
                        self.previous_label,
                        can_prev,
                        current.saturating_sub(1),
                        self.on_page_change.clone(),
                    ))
                    .child(nav_button(
                        next_id,
                        self.next_label,
                        can_next,
                        current.saturating_add(1),
                        self.on_page_change,
                    )),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(current_page: usize, total_pages: usize) -> Page<()> {
        Page {
            records: Vec::new(),
            current_page,
            total_pages,
            total_records: total_pages * 5,
        }
    }

    #[test]
    fn test_buttons_disabled_at_ends() {
        let first = Pagination::new("p", &page(1, 3));
        assert!(!first.can_previous);
        assert!(first.can_next);

        let last = Pagination::new("p", &page(3, 3));
        assert!(last.can_previous);
        assert!(!last.can_next);

        let empty = Pagination::new("p", &page(1, 0));
        assert!(!empty.can_previous);
        assert!(!empty.can_next);
    }

    #[test]
    fn test_default_page_label() {
        assert_eq!(Pagination::new("p", &page(2, 5)).page_label.as_ref(), "Page 2 of 5");
        assert_eq!(Pagination::new("p", &page(1, 0)).page_label.as_ref(), "Page 1 of 1");
    }
}
