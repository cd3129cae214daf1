//! Signup Page

use gpui::{
    ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Subscription, Window, div, prelude::*,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::shell::Shell;
use crate::components::primitives::button::Button;
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::text_input::{
    InputVariant, TextInput, TextInputEvent, password_input, text_input,
};
use crate::constants::AUTH_CARD_WIDTH;
use crate::domain::validation::{FormErrors, SignupForm};
use crate::features::auth::controller::AuthController;
use crate::features::auth::login_page::{auth_card, show_error, switch_link};
use crate::i18n::{Locale, t};
use crate::theme::colors::CatalogColors;

/// Field name and label key of each text input, in display order
const FIELDS: [(&str, &str); 5] = [
    ("first_name", "field-first-name"),
    ("last_name", "field-last-name"),
    ("email", "field-email"),
    ("password", "field-password"),
    ("confirm_password", "field-confirm-password"),
];

/// Signup page component
pub struct SignupPage {
    entities: AppEntities,
    controller: AuthController,
    inputs: Vec<Entity<TextInput>>,
    accept_terms: bool,
    terms_error: Option<String>,
    _subscriptions: Vec<Subscription>,
}

impl SignupPage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let controller = AuthController::new(entities.clone());
        let inputs: Vec<_> = FIELDS
            .iter()
            .map(|(field, _)| {
                if field.contains("password") {
                    password_input("", InputVariant::Default, window, cx)
                } else {
                    text_input("", InputVariant::Default, window, cx)
                }
            })
            .collect();

        let locale = entities.i18n.read(cx).locale;
        apply_locale(&inputs, locale, cx);

        let mut _subscriptions: Vec<Subscription> = inputs
            .iter()
            .map(|input| {
                cx.subscribe(input, |this, input, event: &TextInputEvent, cx| match event {
                    TextInputEvent::Submit => this.submit(cx),
                    TextInputEvent::Change => {
                        if input.read(cx).error().is_some() {
                            input.update(cx, |input, cx| input.set_error(None, cx));
                        }
                    }
                })
            })
            .collect();
        _subscriptions.push(cx.observe(&entities.i18n, |this, i18n, cx| {
            let locale = i18n.read(cx).locale;
            apply_locale(&this.inputs, locale, cx);
            cx.notify();
        }));
        _subscriptions.push(cx.observe(&entities.session, |_this, _, cx| cx.notify()));

        Self {
            entities,
            controller,
            inputs,
            accept_terms: false,
            terms_error: None,
            _subscriptions,
        }
    }

    fn value(&self, ix: usize, cx: &Context<Self>) -> String {
        self.inputs
            .get(ix)
            .map(|input| input.read(cx).value(cx).to_string())
            .unwrap_or_default()
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let form = SignupForm {
            first_name: self.value(0, cx),
            last_name: self.value(1, cx),
            email: self.value(2, cx),
            password: self.value(3, cx),
            confirm_password: self.value(4, cx),
            accept_terms: self.accept_terms,
        };

        match self.controller.signup(&form, cx) {
            Ok(()) => self.show_errors(&FormErrors::new(), cx),
            Err(errors) => self.show_errors(&errors, cx),
        }
        cx.notify();
    }

    fn show_errors(&mut self, errors: &FormErrors, cx: &mut Context<Self>) {
        for ((field, _), input) in FIELDS.iter().zip(&self.inputs) {
            show_error(input, errors.get(field), cx);
        }
        self.terms_error = errors.get("accept_terms").map(str::to_string);
    }
}

fn apply_locale<V: 'static>(inputs: &[Entity<TextInput>], locale: Locale, cx: &mut Context<V>) {
    for ((_, key), input) in FIELDS.iter().zip(inputs) {
        input.update(cx, |input, cx| {
            input.set_label(t(locale, key));
            cx.notify();
        });
    }
}

impl Render for SignupPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let loading = self.entities.session.read(cx).is_loading();
        let on_terms = cx.listener(|this, checked: &bool, _window, cx| {
            this.accept_terms = *checked;
            if *checked {
                this.terms_error = None;
            }
            cx.notify();
        });

        let mut card = auth_card(t(locale, "signup-title")).child(
            div()
                .flex()
                .gap_4()
                .children(self.inputs.iter().take(2).cloned()),
        );
        for input in self.inputs.iter().skip(2) {
            card = card.child(input.clone());
        }

        Shell::new("signup-page")
            .centered()
            .max_width(AUTH_CARD_WIDTH)
            .child(
                card.child(
                    Checkbox::new("signup-terms")
                        .checked(self.accept_terms)
                        .label(t(locale, "signup-accept-terms"))
                        .error(self.terms_error.is_some())
                        .on_change(move |checked, window, cx| on_terms(&checked, window, cx)),
                )
                .when_some(self.terms_error.clone(), |el, message| {
                    el.child(
                        div()
                            .text_xs()
                            .text_color(CatalogColors::danger())
                            .child(message),
                    )
                })
                .child(
                    Button::primary("signup-submit", t(locale, "action-create-account"))
                        .full_width()
                        .loading_with(loading, t(locale, "action-creating-account"))
                        .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                            this.submit(cx);
                        })),
                )
                .child(switch_link(
                    "signup-to-login",
                    t(locale, "signup-to-login"),
                    ActivePage::Login,
                    &self.entities,
                )),
            )
    }
}
