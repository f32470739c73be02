//! Test doubles for the collaborator traits.

use std::cell::RefCell;

use crate::auth::{AuthClient, AuthError};

/// Which auth operation was called, with the credentials it received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthCall {
    SignIn { email: String, password: String },
    SignUp { email: String, password: String },
    SignOut,
}

/// Records every call and answers with a configurable result.
#[derive(Debug, Default)]
pub struct FakeAuth {
    user: RefCell<Option<String>>,
    failure: RefCell<Option<String>>,
    calls: RefCell<Vec<AuthCall>>,
}

impl FakeAuth {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user_id: &str) -> Self {
        let auth = Self::default();
        *auth.user.borrow_mut() = Some(user_id.to_string());
        auth
    }

    /// Make every following call fail with `message`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.borrow_mut() = Some(message.to_string());
    }

    pub fn user(&self) -> Option<String> {
        self.user.borrow().clone()
    }

    pub fn calls(&self) -> Vec<AuthCall> {
        self.calls.borrow().clone()
    }

    pub fn sign_out_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| **call == AuthCall::SignOut)
            .count()
    }

    fn answer(&self, call: AuthCall, user: Option<String>) -> Result<(), AuthError> {
        self.calls.borrow_mut().push(call);
        if let Some(message) = self.failure.borrow().clone() {
            return Err(AuthError::new(message));
        }
        *self.user.borrow_mut() = user;
        Ok(())
    }
}

impl AuthClient for FakeAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let call = AuthCall::SignIn {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.answer(call, Some(email.to_string()))
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let call = AuthCall::SignUp {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.answer(call, Some(email.to_string()))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.answer(AuthCall::SignOut, None)
    }
}
