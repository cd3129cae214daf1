//! Modal Component
//!
//! A dialog drawn over a dimmed backdrop. The parent decides whether the
//! modal is shown and closes it from `on_close`.

use gpui::{
    AnyElement, App, ClickEvent, FontWeight, InteractiveElement, IntoElement, ParentElement, Rgba,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::CatalogColors;
use crate::theme::typography::Typography;

/// Modal width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ModalSize {
    pub fn width(&self) -> f32 {
        match self {
            ModalSize::Small => 384.0,
            ModalSize::Medium => 448.0,
            ModalSize::Large => 512.0,
        }
    }
}

/// Modal look
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalVariant {
    #[default]
    Default,
    Borderless,
    Dark,
    Colorful,
    Minimal,
}

impl ModalVariant {
    pub fn all() -> [ModalVariant; 5] {
        [
            ModalVariant::Default,
            ModalVariant::Borderless,
            ModalVariant::Dark,
            ModalVariant::Colorful,
            ModalVariant::Minimal,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModalVariant::Default => "Default",
            ModalVariant::Borderless => "Borderless",
            ModalVariant::Dark => "Dark",
            ModalVariant::Colorful => "Colorful",
            ModalVariant::Minimal => "Minimal",
        }
    }

    /// (background, text) colors
    fn palette(&self) -> (Rgba, Rgba) {
        match self {
            ModalVariant::Default | ModalVariant::Borderless | ModalVariant::Minimal => {
                (CatalogColors::surface(), CatalogColors::text_primary())
            }
            ModalVariant::Dark => (CatalogColors::table_header_dark(), CatalogColors::text_light()),
            ModalVariant::Colorful => (CatalogColors::primary(), CatalogColors::text_light()),
        }
    }

    fn has_border(&self) -> bool {
        matches!(self, ModalVariant::Minimal)
    }

    fn rounded(&self) -> bool {
        matches!(self, ModalVariant::Default)
    }
}

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    title: SharedString,
    size: ModalSize,
    variant: ModalVariant,
    children: Vec<AnyElement>,
    on_close: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
    show_close_button: bool,
}

impl Modal {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            size: ModalSize::default(),
            variant: ModalVariant::default(),
            children: Vec::new(),
            on_close: None,
            show_close_button: true,
        }
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: ModalVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    pub fn hide_close_button(mut self) -> Self {
        self.show_close_button = false;
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, text) = self.variant.palette();
        let divider = if matches!(self.variant, ModalVariant::Dark | ModalVariant::Colorful) {
            gpui::rgba(0xffffff33)
        } else {
            CatalogColors::border()
        };
        let on_close = self.on_close;

        div()
            .absolute()
            .inset_0()
            .bg(CatalogColors::overlay())
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .id("modal-dialog")
                    .occlude()
                    .w(px(self.size.width()))
                    .bg(bg)
                    .text_color(text)
                    .shadow_lg()
                    .when(self.variant.rounded(), |el| el.rounded_lg())
                    .when(self.variant.has_border(), |el| {
                        el.border_1().border_color(CatalogColors::border_strong())
                    })
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .border_b_1()
                            .border_color(divider)
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_LG))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .child(self.title),
                            )
                            .when(self.show_close_button, |el| {
                                el.child(
                                    div()
                                        .id("modal-close")
                                        .size(px(24.0))
                                        .rounded_sm()
                                        .flex()
                                        .items_center()
                                        .justify_center()
                                        .text_size(px(Typography::TEXT_BASE))
                                        .cursor_pointer()
                                        .opacity(0.7)
                                        .hover(|s| s.opacity(1.0))
                                        .when_some(on_close, |el, handler| {
                                            el.on_click(move |_event: &ClickEvent, window, cx| {
                                                handler(window, cx);
                                            })
                                        })
                                        .child("×"),
                                )
                            }),
                    )
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .text_size(px(Typography::TEXT_SM))
                            .children(self.children),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_grow() {
        assert!(ModalSize::Small.width() < ModalSize::Medium.width());
        assert!(ModalSize::Medium.width() < ModalSize::Large.width());
        assert_eq!(ModalSize::default(), ModalSize::Medium);
    }

    #[test]
    fn test_variant_palettes() {
        let (dark_bg, dark_text) = ModalVariant::Dark.palette();
        assert_eq!(dark_text, CatalogColors::text_light());
        assert_ne!(dark_bg, CatalogColors::surface());

        assert!(ModalVariant::Minimal.has_border());
        assert!(!ModalVariant::Borderless.has_border());
        assert!(!ModalVariant::Borderless.rounded());
        assert_eq!(ModalVariant::all().len(), 5);
    }
}
