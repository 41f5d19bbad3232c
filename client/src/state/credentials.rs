//! Email/password form state for the signup and login pages.
//!
//! DESIGN
//! ======
//! The page component only wires inputs and spawns the request; everything
//! that decides what the user sees (feedback text, pending flag, where to go
//! next) lives on [`CredentialForm`] so it can be tested without a renderer.
//! Error and success feedback are never set at the same time.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::net::api::{Credentials, SubmitError};
use crate::util::navigation::{LOGIN_PATH, POST_LOGIN_PATH, Redirect};

/// Feedback shown after a successful signup.
pub const SIGNUP_SUCCESS_MESSAGE: &str = "User created successfully!";

/// Transient form state, created when the page mounts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub success: Option<String>,
    /// A request is in flight; further submits are ignored.
    pub pending: bool,
}

impl CredentialForm {
    /// Start a submission. Returns the payload to send, or `None` when a
    /// request is already in flight. Feedback from the previous attempt is
    /// cleared.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.pending {
            return None;
        }
        self.pending = true;
        self.error = None;
        self.success = None;
        Some(Credentials { email: self.email.clone(), password: self.password.clone() })
    }

    /// Apply a signup result. Success pushes the login view.
    pub fn finish_signup(&mut self, result: Result<(), SubmitError>) -> Option<Redirect> {
        self.pending = false;
        match result {
            Ok(()) => {
                self.success = Some(SIGNUP_SUCCESS_MESSAGE.to_owned());
                self.error = None;
                Some(Redirect::push(LOGIN_PATH))
            }
            Err(e) => {
                self.fail(&e);
                None
            }
        }
    }

    /// Apply a login result whose token has already been stored.
    pub fn finish_login(&mut self, result: Result<(), SubmitError>) -> Option<Redirect> {
        self.pending = false;
        match result {
            Ok(()) => {
                self.error = None;
                self.success = None;
                Some(Redirect::replace(POST_LOGIN_PATH))
            }
            Err(e) => {
                self.fail(&e);
                None
            }
        }
    }

    fn fail(&mut self, error: &SubmitError) {
        self.error = Some(error.to_string());
        self.success = None;
    }
}
