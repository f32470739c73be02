//! State machine behind the sign-in / sign-up dialog.
//!
//! States are `Closed`, `Open(SignIn)` and `Open(SignUp)`; `submitting` is an
//! orthogonal flag. While a submission is in flight nothing but
//! [`AuthModalState::finish_submit`] may change the state.

use api::auth::{validate_credentials, ValidationError};

use crate::auth::{AuthClient, AuthError};
use crate::toast::{Notifier, Toast};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create an Account",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Enter your credentials to access your account.",
            AuthMode::SignUp => "Enter your email and password to get started.",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Sign Up",
        }
    }

    pub fn switch_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Need an account? Sign Up",
            AuthMode::SignUp => "Already have an account? Sign In",
        }
    }

    fn success_toast(self) -> Toast {
        match self {
            AuthMode::SignIn => Toast::new("Successfully signed in!").with_description("Welcome back!"),
            AuthMode::SignUp => Toast::new("Successfully signed up!")
                .with_description("Please check your email to verify your account."),
        }
    }

    fn failure_title(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in failed",
            AuthMode::SignUp => "Sign up failed",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open(AuthMode),
}

/// What a submission sends to the auth provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    Closed,
    InFlight,
    Invalid(ValidationError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded(AuthMode),
    Failed(AuthError),
    Rejected(SubmitRejected),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthModalState {
    pub dialog: DialogState,
    pub email: String,
    pub password: String,
    pub submitting: bool,
}

impl AuthModalState {
    pub fn is_open(&self) -> bool {
        matches!(self.dialog, DialogState::Open(_))
    }

    pub fn mode(&self) -> Option<AuthMode> {
        match self.dialog {
            DialogState::Open(mode) => Some(mode),
            DialogState::Closed => None,
        }
    }

    pub fn open(&mut self, mode: AuthMode) {
        if !self.submitting {
            self.dialog = DialogState::Open(mode);
        }
    }

    /// External dismissal (overlay click, close button).
    pub fn dismiss(&mut self) {
        if !self.submitting {
            self.dialog = DialogState::Closed;
        }
    }

    /// Flip between sign-in and sign-up, clearing both fields.
    pub fn switch_mode(&mut self) {
        if self.submitting {
            return;
        }
        if let DialogState::Open(mode) = self.dialog {
            self.dialog = DialogState::Open(mode.toggled());
            self.clear_fields();
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_credentials(&self.email, &self.password)
    }

    /// Enter the submitting state and hand out the credentials to send.
    pub fn begin_submit(&mut self) -> Result<Credentials, SubmitRejected> {
        let DialogState::Open(mode) = self.dialog else {
            return Err(SubmitRejected::Closed);
        };
        if self.submitting {
            return Err(SubmitRejected::InFlight);
        }
        self.validate().map_err(SubmitRejected::Invalid)?;

        self.submitting = true;
        Ok(Credentials {
            mode,
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Leave the submitting state and react to the provider's answer.
    pub fn finish_submit<N: Notifier>(
        &mut self,
        mode: AuthMode,
        result: Result<(), AuthError>,
        notifier: &mut N,
    ) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(()) => {
                notifier.notify(mode.success_toast());
                self.dialog = DialogState::Closed;
                self.clear_fields();
                SubmitOutcome::Succeeded(mode)
            }
            Err(err) => {
                tracing::warn!("{}: {}", mode.failure_title(), err);
                notifier.notify(Toast::destructive(mode.failure_title()).with_description(err.to_string()));
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn clear_fields(&mut self) {
        self.email.clear();
        self.password.clear();
    }
}

/// Send `credentials` to the provider operation matching their mode.
pub async fn perform<A: AuthClient>(auth: &A, credentials: &Credentials) -> Result<(), AuthError> {
    match credentials.mode {
        AuthMode::SignIn => auth.sign_in(&credentials.email, &credentials.password).await,
        AuthMode::SignUp => auth.sign_up(&credentials.email, &credentials.password).await,
    }
}

/// Run a whole submission, for callers that can hold the state across the await.
pub async fn submit<A: AuthClient, N: Notifier>(
    state: &mut AuthModalState,
    auth: &A,
    notifier: &mut N,
) -> SubmitOutcome {
    let credentials = match state.begin_submit() {
        Ok(credentials) => credentials,
        Err(rejected) => return SubmitOutcome::Rejected(rejected),
    };
    let result = perform(auth, &credentials).await;
    state.finish_submit(credentials.mode, result, notifier)
}
