//! Switch Component
//!
//! On/off toggle drawn as a track with a sliding knob.

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, Rgba,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::CatalogColors;

/// Gap between the knob and the track edge
const KNOB_INSET: f32 = 2.0;

/// Track shape and color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SwitchVariant {
    #[default]
    Default,
    Large,
    Slim,
    Square,
    Colorful,
}

impl SwitchVariant {
    pub fn all() -> &'static [SwitchVariant] {
        &[
            SwitchVariant::Default,
            SwitchVariant::Large,
            SwitchVariant::Slim,
            SwitchVariant::Square,
            SwitchVariant::Colorful,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SwitchVariant::Default => "Default",
            SwitchVariant::Large => "Large",
            SwitchVariant::Slim => "Slim",
            SwitchVariant::Square => "Square",
            SwitchVariant::Colorful => "Colorful",
        }
    }

    /// Track (width, height) in pixels
    pub fn track_size(&self) -> (f32, f32) {
        match self {
            SwitchVariant::Large => (56.0, 28.0),
            SwitchVariant::Slim => (32.0, 16.0),
            _ => (44.0, 24.0),
        }
    }

    /// Track color for the given state
    pub fn track_color(&self, on: bool) -> Rgba {
        match (self, on) {
            (SwitchVariant::Colorful, false) => CatalogColors::track_off_pink(),
            (_, false) => CatalogColors::track_off(),
            (SwitchVariant::Default, true) => CatalogColors::primary(),
            (SwitchVariant::Large, true) => CatalogColors::accent_green(),
            (SwitchVariant::Slim, true) => CatalogColors::accent_purple(),
            (SwitchVariant::Square, true) => CatalogColors::accent_indigo(),
            (SwitchVariant::Colorful, true) => CatalogColors::accent_pink(),
        }
    }

    fn knob_size(&self) -> f32 {
        self.track_size().1 - KNOB_INSET * 2.0
    }

    /// Knob distance from the track's left edge
    pub fn knob_offset(&self, on: bool) -> f32 {
        if on {
            self.track_size().0 - self.knob_size() - KNOB_INSET
        } else {
            KNOB_INSET
        }
    }
}

/// A toggle switch
#[derive(IntoElement)]
pub struct Switch {
    id: ElementId,
    on: bool,
    label: Option<SharedString>,
    variant: SwitchVariant,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Switch {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            on: false,
            label: None,
            variant: SwitchVariant::Default,
            disabled: false,
            on_change: None,
        }
    }

    pub fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn variant(mut self, variant: SwitchVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Called with the new state
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Switch {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on = self.on;
        let (width, height) = self.variant.track_size();
        let knob = self.variant.knob_size();
        let square = self.variant == SwitchVariant::Square;

        let track = div()
            .relative()
            .w(px(width))
            .h(px(height))
            .bg(self.variant.track_color(on))
            .when(!square, |el| el.rounded_full())
            .child(
                div()
                    .absolute()
                    .top(px(KNOB_INSET))
                    .left(px(self.variant.knob_offset(on)))
                    .size(px(knob))
                    .bg(CatalogColors::surface())
                    .shadow_sm()
                    .when(!square, |el| el.rounded_full()),
            );

        let mut switch = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_3()
            .child(track)
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(CatalogColors::text_primary())
                        .child(label),
                )
            });

        if self.disabled {
            switch = switch.opacity(0.5);
        } else {
            switch = switch.cursor_pointer();
            if let Some(handler) = self.on_change {
                switch = switch.on_click(move |_event, window, cx| handler(!on, window, cx));
            }
        }

        switch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knob_stays_inside_track() {
        for variant in SwitchVariant::all() {
            let (width, _) = variant.track_size();
            let off = variant.knob_offset(false);
            let on = variant.knob_offset(true);
            assert_eq!(off, KNOB_INSET);
            assert!(on > off, "{}", variant.label());
            assert_eq!(on + variant.knob_size() + KNOB_INSET, width);
        }
    }

    #[test]
    fn test_track_color_changes_with_state() {
        for variant in SwitchVariant::all() {
            assert_ne!(variant.track_color(true), variant.track_color(false));
        }
        assert_eq!(
            SwitchVariant::Colorful.track_color(false),
            CatalogColors::track_off_pink()
        );
    }
}
