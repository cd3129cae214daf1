//! Shell Component
//!
//! Centers a page's content in a scrollable column.

use gpui::{
    AnyElement, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::CatalogColors;

/// Page wrapper
#[derive(IntoElement)]
pub struct Shell {
    id: SharedString,
    max_width: Option<f32>,
    centered: bool,
    children: Vec<AnyElement>,
}

impl Shell {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            max_width: None,
            centered: false,
            children: Vec::new(),
        }
    }

    /// Limit the content column width
    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Center the content vertically as well, for auth cards
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl RenderOnce for Shell {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .id(ElementId::Name(self.id))
            .size_full()
            .overflow_y_scroll()
            .bg(CatalogColors::background())
            .flex()
            .flex_col()
            .items_center()
            .when(self.centered, |el| el.justify_center())
            .p_6()
            .child(
                div()
                    .w_full()
                    .when_some(self.max_width, |el, w| el.max_w(px(w)))
                    .flex()
                    .flex_col()
                    .gap_6()
                    .children(self.children),
            )
    }
}
