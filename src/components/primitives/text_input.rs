//! TextInput Component
//!
//! A labelled single-line input backed by the toolkit's `InputState`, which
//! owns the cursor, selection, clipboard and IME. This wrapper adds the
//! catalog's variant chrome, a label and an error line, and re-emits edits as
//! [`TextInputEvent`].

use gpui::{
    App, Context, Entity, EventEmitter, Focusable, IntoElement, ParentElement, Render,
    SharedString, Styled, Subscription, Window, div, prelude::*, px,
};
use gpui_component::{
    Disableable,
    input::{Input, InputEvent, InputState},
};

use crate::theme::colors::CatalogColors;

/// Visual style of an input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputVariant {
    /// White box with a full border
    #[default]
    Default,
    /// Gray fill with a bottom border
    Filled,
    /// Bottom border only
    Underlined,
    /// Pill-shaped border
    Rounded,
    /// No border until focused
    Minimal,
}

impl InputVariant {
    pub fn all() -> &'static [InputVariant] {
        &[
            InputVariant::Default,
            InputVariant::Filled,
            InputVariant::Underlined,
            InputVariant::Rounded,
            InputVariant::Minimal,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputVariant::Default => "Default",
            InputVariant::Filled => "Filled",
            InputVariant::Underlined => "Underlined",
            InputVariant::Rounded => "Rounded",
            InputVariant::Minimal => "Minimal",
        }
    }
}

/// Who draws the input box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputRenderer {
    /// Catalog chrome for the selected [`InputVariant`]
    #[default]
    Custom,
    /// The toolkit's own bordered input with a clear button
    Toolkit,
}

/// Events emitted by [`TextInput`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputEvent {
    /// The value changed
    Change,
    /// Enter was pressed
    Submit,
}

impl TextInputEvent {
    /// Map a toolkit input event; focus changes are not forwarded
    pub fn from_input(event: &InputEvent) -> Option<Self> {
        match event {
            InputEvent::Change => Some(TextInputEvent::Change),
            InputEvent::PressEnter { .. } => Some(TextInputEvent::Submit),
            _ => None,
        }
    }
}

/// A text input component
pub struct TextInput {
    state: Entity<InputState>,
    label: Option<SharedString>,
    variant: InputVariant,
    renderer: InputRenderer,
    error: Option<SharedString>,
    disabled: bool,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<TextInputEvent> for TextInput {}

impl TextInput {
    /// Wrap an existing input state
    pub fn new(state: Entity<InputState>, cx: &mut Context<Self>) -> Self {
        let subscription = cx.subscribe(&state, |_this, _state, event: &InputEvent, cx| {
            if let Some(event) = TextInputEvent::from_input(event) {
                cx.emit(event);
            }
        });

        Self {
            state,
            label: None,
            variant: InputVariant::Default,
            renderer: InputRenderer::Custom,
            error: None,
            disabled: false,
            _subscriptions: vec![subscription],
        }
    }

    pub fn value(&self, cx: &App) -> SharedString {
        self.state.read(cx).value()
    }

    pub fn set_value(
        &mut self,
        value: impl Into<SharedString>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let value = value.into();
        self.state
            .update(cx, |state, cx| state.set_value(value, window, cx));
        cx.notify();
    }

    pub fn set_label(&mut self, label: impl Into<SharedString>) {
        self.label = Some(label.into());
    }

    pub fn set_placeholder(
        &mut self,
        placeholder: impl Into<SharedString>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let placeholder = placeholder.into();
        self.state
            .update(cx, |state, cx| state.set_placeholder(placeholder, window, cx));
    }

    pub fn set_variant(&mut self, variant: InputVariant) {
        self.variant = variant;
    }

    pub fn set_renderer(&mut self, renderer: InputRenderer) {
        self.renderer = renderer;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn error(&self) -> Option<&SharedString> {
        self.error.as_ref()
    }

    /// Show an error message under the input and tint the border
    pub fn set_error(&mut self, error: Option<SharedString>, cx: &mut Context<Self>) {
        self.error = error;
        cx.notify();
    }

    fn render_custom(&self, window: &Window, cx: &App) -> gpui::Div {
        let is_focused = self.state.read(cx).focus_handle(cx).is_focused(window);
        let border_color = if self.error.is_some() {
            CatalogColors::danger()
        } else if is_focused {
            CatalogColors::border_focus()
        } else {
            CatalogColors::border_strong()
        };

        let field = div()
            .w_full()
            .min_w(px(180.0))
            .px_1()
            .text_sm()
            .text_color(CatalogColors::text_primary())
            .when(self.disabled, |el| el.opacity(0.5))
            .child(
                Input::new(&self.state)
                    .w_full()
                    .appearance(false)
                    .disabled(self.disabled),
            );

        match self.variant {
            InputVariant::Default => field
                .bg(CatalogColors::surface())
                .border_1()
                .border_color(border_color)
                .rounded_md(),
            InputVariant::Filled => field
                .bg(CatalogColors::background())
                .border_b_2()
                .border_color(border_color)
                .rounded_t_md(),
            InputVariant::Underlined => field.border_b_2().border_color(border_color),
            InputVariant::Rounded => field
                .bg(CatalogColors::surface())
                .border_1()
                .border_color(border_color)
                .rounded_full()
                .px_3(),
            InputVariant::Minimal => field
                .rounded_md()
                .when(is_focused, |el| el.bg(CatalogColors::surface_muted()))
                .when(self.error.is_some(), |el| {
                    el.border_b_1().border_color(border_color)
                }),
        }
    }

    fn render_toolkit(&self) -> gpui::Div {
        div().w_full().min_w(px(180.0)).child(
            Input::new(&self.state)
                .w_full()
                .cleanable(true)
                .disabled(self.disabled),
        )
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let field = match self.renderer {
            InputRenderer::Custom => self.render_custom(window, cx),
            InputRenderer::Toolkit => self.render_toolkit(),
        };

        div()
            .flex()
            .flex_col()
            .gap_1()
            .w_full()
            .when_some(self.label.clone(), |el, label| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(CatalogColors::text_secondary())
                        .child(label),
                )
            })
            .child(field)
            .when_some(self.error.clone(), |el, error| {
                el.child(
                    div()
                        .text_xs()
                        .text_color(CatalogColors::danger())
                        .child(error),
                )
            })
    }
}

fn build<V: 'static>(
    placeholder: SharedString,
    variant: InputVariant,
    masked: bool,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let state = cx.new(|cx| {
        InputState::new(window, cx)
            .clean_on_escape()
            .masked(masked)
            .placeholder(placeholder)
    });

    cx.new(|cx| {
        let mut input = TextInput::new(state, cx);
        input.set_variant(variant);
        input
    })
}

/// Create a text input entity
pub fn text_input<V: 'static>(
    placeholder: impl Into<SharedString>,
    variant: InputVariant,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    build(placeholder.into(), variant, false, window, cx)
}

/// Create a text input that shows bullets instead of characters
pub fn password_input<V: 'static>(
    placeholder: impl Into<SharedString>,
    variant: InputVariant,
    window: &mut Window,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    build(placeholder.into(), variant, true, window, cx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edits_and_enter_are_forwarded() {
        assert_eq!(
            TextInputEvent::from_input(&InputEvent::Change),
            Some(TextInputEvent::Change)
        );
        assert_eq!(
            TextInputEvent::from_input(&InputEvent::PressEnter { secondary: false }),
            Some(TextInputEvent::Submit)
        );
    }

    #[test]
    fn test_focus_events_are_dropped() {
        assert_eq!(TextInputEvent::from_input(&InputEvent::Focus), None);
        assert_eq!(TextInputEvent::from_input(&InputEvent::Blur), None);
    }

    #[test]
    fn test_defaults_use_custom_chrome() {
        assert_eq!(InputRenderer::default(), InputRenderer::Custom);
        assert_eq!(InputVariant::default(), InputVariant::Default);
        assert_eq!(InputVariant::all().len(), 5);
    }
}
