//! Button Component

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, Rgba, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::CatalogColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Main action (blue)
    #[default]
    Primary,
    /// Neutral action (gray)
    Secondary,
    /// Positive action (green)
    Success,
    /// Destructive action (red)
    Danger,
    /// Transparent with bordered text
    Ghost,
}

impl ButtonVariant {
    pub fn all() -> &'static [ButtonVariant] {
        &[
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Success,
            ButtonVariant::Danger,
            ButtonVariant::Ghost,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "Primary",
            ButtonVariant::Secondary => "Secondary",
            ButtonVariant::Success => "Success",
            ButtonVariant::Danger => "Danger",
            ButtonVariant::Ghost => "Ghost",
        }
    }

    /// (background, text, hover background)
    fn palette(&self) -> (Rgba, Rgba, Rgba) {
        match self {
            ButtonVariant::Primary => (
                CatalogColors::primary(),
                CatalogColors::text_light(),
                CatalogColors::primary_hover(),
            ),
            ButtonVariant::Secondary => (
                CatalogColors::button_secondary_bg(),
                CatalogColors::text_light(),
                CatalogColors::text_secondary(),
            ),
            ButtonVariant::Success => (
                CatalogColors::success(),
                CatalogColors::text_light(),
                gpui::rgb(0x15803d),
            ),
            ButtonVariant::Danger => (
                CatalogColors::danger(),
                CatalogColors::text_light(),
                gpui::rgb(0xb91c1c),
            ),
            ButtonVariant::Ghost => (
                gpui::rgba(0x00000000),
                CatalogColors::text_secondary(),
                CatalogColors::button_ghost_hover(),
            ),
        }
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub fn all() -> &'static [ButtonSize] {
        &[ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ButtonSize::Small => "Small",
            ButtonSize::Medium => "Medium",
            ButtonSize::Large => "Large",
        }
    }

    /// (horizontal padding, vertical padding, font size) in pixels
    fn metrics(&self) -> (f32, f32, f32) {
        match self {
            ButtonSize::Small => (12.0, 6.0, 12.0),
            ButtonSize::Medium => (16.0, 8.0, 14.0),
            ButtonSize::Large => (24.0, 12.0, 16.0),
        }
    }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    loading: Option<SharedString>,
    full_width: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            loading: None,
            full_width: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Show `label` instead of the normal text and ignore clicks
    pub fn loading_with(mut self, loading: bool, label: impl Into<SharedString>) -> Self {
        self.loading = loading.then(|| label.into());
        self
    }

    /// Stretch to the parent width
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    pub fn success(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Success)
    }

    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }

    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = self.variant.palette();
        let (padding_x, padding_y, font_size) = self.size.metrics();
        let inactive = self.disabled || self.loading.is_some();
        let label = self.loading.unwrap_or(self.label);

        let mut element = div()
            .id(self.id)
            .flex()
            .justify_center()
            .px(px(padding_x))
            .py(px(padding_y))
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(font_size))
            .rounded_md()
            .when(self.variant == ButtonVariant::Ghost, |el| {
                el.border_1().border_color(CatalogColors::border_strong())
            })
            .when(self.full_width, |el| el.w_full())
            .child(label);

        if inactive {
            element = element.opacity(0.5);
        } else {
            element = element.cursor_pointer().hover(|s| s.bg(hover_bg));
            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_grow() {
        let small = ButtonSize::Small.metrics();
        let medium = ButtonSize::Medium.metrics();
        let large = ButtonSize::Large.metrics();
        assert!(small.0 < medium.0 && medium.0 < large.0);
        assert!(small.2 < medium.2 && medium.2 < large.2);
    }

    #[test]
    fn test_every_variant_has_distinct_background() {
        let backgrounds: Vec<_> = ButtonVariant::all()
            .iter()
            .map(|v| v.palette().0)
            .collect();
        for (i, a) in backgrounds.iter().enumerate() {
            for b in &backgrounds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
