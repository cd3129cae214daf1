//! Radio Component
//!
//! One option of a radio group. The parent owns which option is selected.

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, Rgba,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::CatalogColors;

/// Radio dot style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RadioVariant {
    #[default]
    Default,
    Large,
    Outline,
    Colored,
    Minimal,
}

impl RadioVariant {
    pub fn all() -> &'static [RadioVariant] {
        &[
            RadioVariant::Default,
            RadioVariant::Large,
            RadioVariant::Outline,
            RadioVariant::Colored,
            RadioVariant::Minimal,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RadioVariant::Default => "Default",
            RadioVariant::Large => "Large",
            RadioVariant::Outline => "Outline",
            RadioVariant::Colored => "Colored",
            RadioVariant::Minimal => "Minimal",
        }
    }

    /// Color of the ring and dot when selected
    pub fn accent(&self) -> Rgba {
        match self {
            RadioVariant::Default => CatalogColors::primary(),
            RadioVariant::Large => CatalogColors::accent_green(),
            RadioVariant::Outline => CatalogColors::accent_purple(),
            RadioVariant::Colored => CatalogColors::accent_pink(),
            RadioVariant::Minimal => CatalogColors::accent_gray(),
        }
    }

    /// Outer diameter in pixels
    pub fn diameter(&self) -> f32 {
        match self {
            RadioVariant::Large => 20.0,
            RadioVariant::Minimal => 12.0,
            _ => 16.0,
        }
    }
}

/// A radio button
#[derive(IntoElement)]
pub struct Radio {
    id: ElementId,
    selected: bool,
    label: Option<SharedString>,
    variant: RadioVariant,
    disabled: bool,
    on_select: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl Radio {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            selected: false,
            label: None,
            variant: RadioVariant::Default,
            disabled: false,
            on_select: None,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn variant(mut self, variant: RadioVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called when an unselected radio is clicked
    pub fn on_select(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Radio {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let accent = self.variant.accent();
        let diameter = self.variant.diameter();
        let ring = if self.selected {
            accent
        } else if self.variant == RadioVariant::Outline {
            accent
        } else {
            CatalogColors::border_strong()
        };

        let outer = div()
            .size(px(diameter))
            .rounded_full()
            .flex()
            .items_center()
            .justify_center()
            .border_color(ring)
            .when(self.variant == RadioVariant::Outline, |el| el.border_2())
            .when(self.variant != RadioVariant::Outline, |el| {
                el.border_1().bg(CatalogColors::surface_muted())
            })
            .when(self.selected, |el| {
                el.child(div().size(px(diameter / 2.0)).rounded_full().bg(accent))
            });

        let mut radio = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .child(outer)
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(CatalogColors::text_primary())
                        .child(label),
                )
            });

        if self.disabled {
            radio = radio.opacity(0.5);
        } else {
            radio = radio.cursor_pointer();
            if let Some(handler) = self.on_select
                && !self.selected
            {
                radio = radio.on_click(move |_event, window, cx| handler(window, cx));
            }
        }

        radio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_sizes() {
        assert_eq!(RadioVariant::Large.diameter(), 20.0);
        assert_eq!(RadioVariant::Minimal.diameter(), 12.0);
        assert_eq!(RadioVariant::default().diameter(), 16.0);
    }

    #[test]
    fn test_variant_labels_are_distinct() {
        let labels: std::collections::BTreeSet<_> =
            RadioVariant::all().iter().map(|v| v.label()).collect();
        assert_eq!(labels.len(), RadioVariant::all().len());
    }
}
