//! SessionState - Sign-In Status
//!
//! Mirrors the start/success/failure/logout lifecycle of an auth request.
//! Sign-in is local; nothing here talks to a server.

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// State for the current session
#[derive(Debug, Default)]
pub struct SessionState {
    user: Option<User>,
    loading: bool,
    error: Option<String>,
}

impl SessionState {
    /// A sign-in attempt started
    pub fn login_start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Sign-in succeeded
    pub fn login_success(&mut self, user: User) {
        tracing::info!("Signed in as {}", user.email);
        self.user = Some(user);
        self.loading = false;
        self.error = None;
    }

    /// Sign-in failed with a user-facing message
    pub fn login_failure(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("Sign-in failed: {}", message);
        self.user = None;
        self.loading = false;
        self.error = Some(message);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!("Signed out {}", user.email);
        }
        self.loading = false;
        self.error = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> User {
        User {
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
        }
    }

    #[test]
    fn test_login_lifecycle() {
        let mut session = SessionState::default();
        session.login_start();
        assert!(session.is_loading());
        assert!(!session.is_authenticated());

        session.login_success(jane());
        assert!(!session.is_loading());
        assert_eq!(session.user(), Some(&jane()));

        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_failure_keeps_message_until_next_attempt() {
        let mut session = SessionState::default();
        session.login_start();
        session.login_failure("Invalid email address");
        assert_eq!(session.error(), Some("Invalid email address"));
        assert!(!session.is_loading());

        session.login_start();
        assert_eq!(session.error(), None);
    }
}
