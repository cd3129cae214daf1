//! Validation - Contact Field Checks and Auth Form Rules
//!
//! Forms are validated all at once; every failing field gets one message.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MIN_PASSWORD_LEN;
use crate::error::{Error, Result};

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

static PHONE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^\+?[\d\s-]{10,}$"));

fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .inspect_err(|e| tracing::error!("Invalid pattern {}: {}", pattern, e))
        .ok()
}

/// `local@domain.tld` with no whitespace
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(email))
}

/// Optional leading `+`, then at least ten digits, spaces or dashes
pub fn validate_phone(phone: &str) -> bool {
    PHONE_PATTERN.as_ref().is_some_and(|re| re.is_match(phone))
}

/// Per-field error messages, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error unless the field already has one
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Collapse into a single `Validation` error
    pub fn into_result(self) -> Result<()> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let message = self
            .errors
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect::<Vec<_>>()
            .join("; ");
        Err(Error::Validation { message })
    }
}

fn check_email(errors: &mut FormErrors, email: &str) {
    if email.trim().is_empty() {
        errors.add("email", "Email is required");
    } else if !validate_email(email.trim()) {
        errors.add("email", "Invalid email address");
    }
}

fn check_password(errors: &mut FormErrors, password: &str) {
    if password.is_empty() {
        errors.add("password", "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }
}

fn check_required(errors: &mut FormErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.add(field, message);
    }
}

/// Sign-in form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        errors
    }
}

/// Account creation form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl SignupForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        check_required(&mut errors, "first_name", &self.first_name, "First name is required");
        check_required(&mut errors, "last_name", &self.last_name, "Last name is required");
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);

        if self.confirm_password.is_empty() {
            errors.add("confirm_password", "Confirm password is required");
        } else if self.confirm_password != self.password {
            errors.add("confirm_password", "Passwords must match");
        }

        if !self.accept_terms {
            errors.add("accept_terms", "You must accept the terms and conditions");
        }
        errors
    }

    /// Display name for the signed-in user
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(EMAIL_PATTERN.is_some());
        assert!(PHONE_PATTERN.is_some());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("john@example.com"));
        assert!(validate_email("a.b+c@sub.domain.io"));
        assert!(!validate_email("john@example"));
        assert!(!validate_email("john doe@example.com"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+1 555-123-4567"));
        assert!(validate_phone("5551234567"));
        assert!(!validate_phone("555-1234"));
        assert!(!validate_phone("555123456a"));
    }

    #[test]
    fn test_login_form_errors() {
        let form = LoginForm {
            email: "not-an-email".into(),
            password: "123".into(),
        };
        let errors = form.validate();
        assert_eq!(errors.get("email"), Some("Invalid email address"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );

        let empty = LoginForm::default().validate();
        assert_eq!(empty.get("email"), Some("Email is required"));
        assert_eq!(empty.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_login_form_valid() {
        let form = LoginForm {
            email: "jane@example.com".into(),
            password: "secret1".into(),
        };
        assert!(form.validate().is_empty());
        assert!(form.validate().into_result().is_ok());
    }

    #[test]
    fn test_signup_password_mismatch_and_terms() {
        let form = SignupForm {
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret2".into(),
            accept_terms: false,
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("confirm_password"), Some("Passwords must match"));
        assert!(errors.get("accept_terms").is_some());
    }

    #[test]
    fn test_signup_valid_and_full_name() {
        let form = SignupForm {
            first_name: " Jane ".into(),
            last_name: "Smith".into(),
            email: "jane@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            accept_terms: true,
        };
        assert!(form.validate().is_empty());
        assert_eq!(form.full_name(), "Jane Smith");
    }

    #[test]
    fn test_into_result_joins_messages() {
        let err = LoginForm::default()
            .validate()
            .into_result()
            .expect_err("empty form is invalid");
        assert_eq!(
            err.to_string(),
            "Validation failed: email: Email is required; password: Password is required"
        );
    }
}
