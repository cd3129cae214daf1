//! Auth Controller
//!
//! Validates the sign-in and sign-up forms and drives the session state.
//! Accounts are local: a form that validates signs the user in.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::domain::activity::capitalize;
use crate::domain::validation::{FormErrors, LoginForm, SignupForm};
use crate::state::log_state::LogLevel;
use crate::state::session_state::User;

/// User for a valid sign-in form; the name is taken from the email's local part
pub fn login_user(form: &LoginForm) -> Result<User, FormErrors> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(errors);
    }
    let email = form.email.trim().to_string();
    let local = email.split('@').next().unwrap_or_default();
    Ok(User {
        name: capitalize(local),
        email,
    })
}

/// User for a valid sign-up form
pub fn signup_user(form: &SignupForm) -> Result<User, FormErrors> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(User {
        name: form.full_name(),
        email: form.email.trim().to_string(),
    })
}

/// Auth page controller
pub struct AuthController {
    entities: AppEntities,
}

impl AuthController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Sign in; field errors are returned for the form to show
    pub fn login(&self, form: &LoginForm, cx: &mut App) -> Result<(), FormErrors> {
        self.start(cx);
        let result = login_user(form);
        self.finish(result, cx)
    }

    /// Create an account and sign in
    pub fn signup(&self, form: &SignupForm, cx: &mut App) -> Result<(), FormErrors> {
        self.start(cx);
        let result = signup_user(form);
        if result.is_ok() {
            self.entities
                .log(LogLevel::Info, format!("Account created for {}", form.email.trim()), cx);
        }
        self.finish(result, cx)
    }

    pub fn logout(&self, cx: &mut App) {
        self.entities.session.update(cx, |session, cx| {
            session.logout();
            cx.notify();
        });
        self.navigate(ActivePage::Login, cx);
        self.entities.log(LogLevel::Info, "Signed out", cx);
    }

    fn start(&self, cx: &mut App) {
        self.entities.session.update(cx, |session, cx| {
            session.login_start();
            cx.notify();
        });
    }

    fn finish(&self, result: Result<User, FormErrors>, cx: &mut App) -> Result<(), FormErrors> {
        match result {
            Ok(user) => {
                let message = format!("Signed in as {}", user.email);
                self.entities.session.update(cx, |session, cx| {
                    session.login_success(user);
                    cx.notify();
                });
                self.navigate(ActivePage::Dashboard, cx);
                self.entities.log(LogLevel::Info, message, cx);
                Ok(())
            }
            Err(errors) => {
                if let Err(e) = errors.clone().into_result() {
                    tracing::warn!("Auth form rejected: {}", e);
                }
                let summary = errors
                    .iter()
                    .map(|(_, message)| message)
                    .collect::<Vec<_>>()
                    .join("; ");
                self.entities.session.update(cx, |session, cx| {
                    session.login_failure(summary.clone());
                    cx.notify();
                });
                self.entities.log(LogLevel::Warn, summary, cx);
                Err(errors)
            }
        }
    }

    fn navigate(&self, page: ActivePage, cx: &mut App) {
        self.entities.nav.update(cx, |nav, cx| {
            nav.navigate(page);
            cx.notify();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_user_from_valid_form() {
        let form = LoginForm {
            email: " jane@example.com ".into(),
            password: "secret1".into(),
        };
        let user = login_user(&form).expect("valid form");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.name, "Jane");
    }

    #[test]
    fn test_login_user_reports_field_errors() {
        let form = LoginForm {
            email: "not-an-email".into(),
            password: "123".into(),
        };
        let errors = login_user(&form).expect_err("invalid form");
        assert_eq!(errors.get("email"), Some("Invalid email address"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_signup_user_uses_full_name() {
        let form = SignupForm {
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            accept_terms: true,
        };
        assert_eq!(signup_user(&form).expect("valid form").name, "Jane Smith");

        let rejected = SignupForm {
            accept_terms: false,
            ..form
        };
        assert!(signup_user(&rejected).expect_err("invalid form").get("accept_terms").is_some());
    }
}
