//! Login Page
//!
//! Email and password form; a valid form signs in and opens the dashboard.

use gpui::{
    ClickEvent, Context, Entity, FontWeight, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Subscription, Window, div,
    prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::shell::Shell;
use crate::components::primitives::button::Button;
use crate::components::primitives::text_input::{
    InputVariant, TextInput, TextInputEvent, password_input, text_input,
};
use crate::constants::AUTH_CARD_WIDTH;
use crate::domain::validation::{FormErrors, LoginForm};
use crate::features::auth::controller::AuthController;
use crate::i18n::{Locale, t};
use crate::theme::colors::CatalogColors;
use crate::theme::typography::Typography;

/// Login page component
pub struct LoginPage {
    entities: AppEntities,
    controller: AuthController,
    email: Entity<TextInput>,
    password: Entity<TextInput>,
    _subscriptions: Vec<Subscription>,
}

impl LoginPage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let controller = AuthController::new(entities.clone());
        let email = text_input("", InputVariant::Filled, window, cx);
        let password = password_input("", InputVariant::Filled, window, cx);

        let locale = entities.i18n.read(cx).locale;
        apply_locale(&email, &password, locale, window, cx);

        let _subscriptions = vec![
            cx.subscribe_in(&email, window, |this, _, event: &TextInputEvent, window, cx| {
                this.on_input_event("email", event, window, cx)
            }),
            cx.subscribe_in(&password, window, |this, _, event: &TextInputEvent, window, cx| {
                this.on_input_event("password", event, window, cx)
            }),
            cx.observe_in(&entities.i18n, window, |this, i18n, window, cx| {
                let locale = i18n.read(cx).locale;
                apply_locale(&this.email, &this.password, locale, window, cx);
                cx.notify();
            }),
            cx.observe(&entities.session, |_this, _, cx| cx.notify()),
        ];

        Self {
            entities,
            controller,
            email,
            password,
            _subscriptions,
        }
    }

    fn on_input_event(
        &mut self,
        field: &str,
        event: &TextInputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match event {
            TextInputEvent::Submit => self.submit(window, cx),
            TextInputEvent::Change => {
                let input = if field == "email" { &self.email } else { &self.password };
                if input.read(cx).error().is_some() {
                    input.update(cx, |input, cx| input.set_error(None, cx));
                }
            }
        }
    }

    fn submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let form = LoginForm {
            email: self.email.read(cx).value(cx).to_string(),
            password: self.password.read(cx).value(cx).to_string(),
        };

        match self.controller.login(&form, cx) {
            Ok(()) => {
                show_error(&self.email, None, cx);
                show_error(&self.password, None, cx);
                self.password
                    .update(cx, |input, cx| input.set_value("", window, cx));
            }
            Err(errors) => self.show_errors(&errors, cx),
        }
        cx.notify();
    }

    fn show_errors(&self, errors: &FormErrors, cx: &mut Context<Self>) {
        show_error(&self.email, errors.get("email"), cx);
        show_error(&self.password, errors.get("password"), cx);
    }
}

fn apply_locale<V: 'static>(
    email: &Entity<TextInput>,
    password: &Entity<TextInput>,
    locale: Locale,
    window: &mut Window,
    cx: &mut Context<V>,
) {
    email.update(cx, |input, cx| {
        input.set_label(t(locale, "field-email"));
        input.set_placeholder(t(locale, "placeholder-email"), window, cx);
        cx.notify();
    });
    password.update(cx, |input, cx| {
        input.set_label(t(locale, "field-password"));
        input.set_placeholder(t(locale, "placeholder-password"), window, cx);
        cx.notify();
    });
}

/// Put a field error (or clear it) on an input
pub(crate) fn show_error<V: 'static>(
    input: &Entity<TextInput>,
    message: Option<&str>,
    cx: &mut Context<V>,
) {
    let message = message.map(|m| SharedString::from(m.to_string()));
    input.update(cx, |input, cx| input.set_error(message, cx));
}

/// Card shared by the sign-in and sign-up pages
pub(crate) fn auth_card(title: SharedString) -> gpui::Div {
    div()
        .w_full()
        .p_8()
        .bg(CatalogColors::surface())
        .rounded_lg()
        .shadow_md()
        .flex()
        .flex_col()
        .gap_4()
        .child(
            div()
                .text_size(px(Typography::TEXT_3XL))
                .font_weight(FontWeight::BOLD)
                .text_color(CatalogColors::text_primary())
                .flex()
                .justify_center()
                .child(title),
        )
}

/// Text link to the other auth page
pub(crate) fn switch_link(
    id: &'static str,
    label: SharedString,
    target: ActivePage,
    entities: &AppEntities,
) -> impl IntoElement {
    let nav = entities.nav.clone();
    div().flex().justify_center().child(
        div()
            .id(id)
            .text_size(px(Typography::TEXT_SM))
            .text_color(CatalogColors::primary())
            .cursor_pointer()
            .hover(|s| s.text_color(CatalogColors::primary_hover()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                nav.update(cx, |nav, cx| {
                    nav.navigate(target);
                    cx.notify();
                });
            })
            .child(label),
    )
}

impl Render for LoginPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let loading = self.entities.session.read(cx).is_loading();

        Shell::new("login-page")
            .centered()
            .max_width(AUTH_CARD_WIDTH)
            .child(
                auth_card(t(locale, "login-title"))
                    .child(self.email.clone())
                    .child(self.password.clone())
                    .child(
                        Button::primary("login-submit", t(locale, "action-sign-in"))
                            .full_width()
                            .loading_with(loading, t(locale, "action-signing-in"))
                            .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                                this.submit(window, cx);
                            })),
                    )
                    .child(switch_link(
                        "login-to-signup",
                        t(locale, "login-to-signup"),
                        ActivePage::Signup,
                        &self.entities,
                    )),
            )
    }
}
