//! Checkbox Component

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::CatalogColors;

/// Checkbox box shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckboxVariant {
    #[default]
    Default,
    Square,
    Circle,
    Outline,
    Minimal,
}

impl CheckboxVariant {
    pub fn all() -> &'static [CheckboxVariant] {
        &[
            CheckboxVariant::Default,
            CheckboxVariant::Square,
            CheckboxVariant::Circle,
            CheckboxVariant::Outline,
            CheckboxVariant::Minimal,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckboxVariant::Default => "Default",
            CheckboxVariant::Square => "Square",
            CheckboxVariant::Circle => "Circle",
            CheckboxVariant::Outline => "Outline",
            CheckboxVariant::Minimal => "Minimal",
        }
    }
}

/// A checkbox component
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    variant: CheckboxVariant,
    error: bool,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            variant: CheckboxVariant::Default,
            error: false,
            disabled: false,
            on_change: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn variant(mut self, variant: CheckboxVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Tint the box border red
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with the new checked state
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let checked = self.checked;

        // Outline keeps a white box and colors only the border and mark
        let filled = checked && self.variant != CheckboxVariant::Outline;
        let box_bg = if filled {
            CatalogColors::primary()
        } else {
            CatalogColors::surface()
        };
        let border_color = if self.error {
            CatalogColors::danger()
        } else if checked {
            CatalogColors::primary()
        } else {
            CatalogColors::border_strong()
        };
        let mark_color = if filled {
            CatalogColors::text_light()
        } else {
            CatalogColors::primary()
        };

        let size = match self.variant {
            CheckboxVariant::Square => px(20.0),
            CheckboxVariant::Minimal => px(14.0),
            _ => px(18.0),
        };

        let indicator = div()
            .size(size)
            .flex()
            .items_center()
            .justify_center()
            .bg(box_bg)
            .text_color(mark_color)
            .text_size(px(12.0))
            .child(if checked { "✓" } else { "" });

        let indicator = match self.variant {
            CheckboxVariant::Default => indicator.rounded_sm().border_1().border_color(border_color),
            CheckboxVariant::Square => indicator.border_2().border_color(border_color),
            CheckboxVariant::Circle => indicator.rounded_full().border_1().border_color(border_color),
            CheckboxVariant::Outline => indicator.rounded_sm().border_2().border_color(border_color),
            CheckboxVariant::Minimal => indicator.rounded_sm().border_b_1().border_color(border_color),
        };

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .child(indicator)
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(CatalogColors::text_primary())
                        .child(label),
                )
            });

        if self.disabled {
            checkbox = checkbox.opacity(0.5);
        } else {
            checkbox = checkbox.cursor_pointer();
            if let Some(handler) = self.on_change {
                checkbox = checkbox.on_click(move |_event, window, cx| {
                    handler(!checked, window, cx);
                });
            }
        }

        checkbox
    }
}
