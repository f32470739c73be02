//! Authentication state and the auth-provider capability for the UI.
//!
//! [`AuthSession`] is created once at the app root by [`use_auth_session`] and
//! passed explicitly to every component that needs the identity or the
//! sign-in/up/out operations.

use api::UserInfo;
use dioxus::prelude::*;
use thiserror::Error;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// True until the initial session probe has finished.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// The identity designs are scoped to: the user id, or None when anonymous.
    pub fn identity(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.id.clone())
    }
}

/// An auth operation failed. Carries the provider's message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ServerFnError> for AuthError {
    fn from(err: ServerFnError) -> Self {
        Self::new(server_message(err))
    }
}

/// The message a server function failed with, without the framework's wrapping.
pub(crate) fn server_message(err: ServerFnError) -> String {
    match err {
        ServerFnError::ServerError { message, .. } => message,
        other => other.to_string(),
    }
}

/// The auth-provider operations the dashboard and auth dialog call.
pub trait AuthClient {
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<(), AuthError>>;
    fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<(), AuthError>>;
    fn sign_out(&self) -> impl std::future::Future<Output = Result<(), AuthError>>;
}

/// Handle to the current session, backed by the auth server functions.
///
/// Successful operations update the shared [`AuthState`], which is what
/// re-triggers identity-dependent effects such as the design fetch.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthSession {
    state: Signal<AuthState>,
}

impl AuthSession {
    pub fn new(state: Signal<AuthState>) -> Self {
        Self { state }
    }

    /// Current state. Reading it inside an effect subscribes the effect.
    pub fn state(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.read().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    fn set_user(&self, user: Option<UserInfo>) {
        let mut state = self.state;
        state.set(AuthState {
            user,
            loading: false,
        });
    }
}

impl AuthClient for AuthSession {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let user = api::sign_in(email.to_string(), password.to_string()).await?;
        tracing::info!("Signed in as {}", user.id);
        self.set_user(Some(user));
        Ok(())
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if let Some(user) = api::sign_up(email.to_string(), password.to_string()).await? {
            tracing::info!("Signed up as {}", user.id);
            self.set_user(Some(user));
        }
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        api::sign_out().await?;
        self.set_user(None);
        Ok(())
    }
}

/// Create the session handle for an app root and probe the server for an
/// existing session on mount.
pub fn use_auth_session() -> AuthSession {
    let state = use_signal(AuthState::default);
    let session = AuthSession::new(state);

    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(user) => session.set_user(user),
            Err(e) => {
                tracing::warn!("Session probe failed: {}", e);
                session.set_user(None);
            }
        }
    });

    session
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_follows_user() {
        let mut state = AuthState::default();
        assert!(state.loading);
        assert_eq!(state.identity(), None);

        state.user = Some(UserInfo {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
        });
        assert_eq!(state.identity(), Some("u-1".to_string()));
    }

    #[test]
    fn test_auth_error_displays_message() {
        let err = AuthError::new("Invalid login credentials");
        assert_eq!(err.to_string(), "Invalid login credentials");
    }

    #[test]
    fn test_server_error_keeps_provider_message() {
        let err = AuthError::from(ServerFnError::new("Invalid login credentials"));
        assert_eq!(err.to_string(), "Invalid login credentials");

        let err = AuthError::from(ServerFnError::new("User already registered"));
        assert_eq!(err.message, "User already registered");
    }
}
