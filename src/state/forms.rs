//! Form state machines for the login and register pages.
//!
//! DESIGN
//! ======
//! Each form is `Idle -> Submitting -> (navigate away | back to Idle)`.
//! `begin_submit` is the single gate: it runs the local validation
//! guards, refuses re-entry while a call is pending, and only then
//! hands back a payload to send. Keeping the machine in plain structs
//! (wrapped in a signal by the owning page) makes the transitions
//! testable without a browser.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{Credentials, RegistrationRequest};
use crate::util::validate::{is_valid_email, passwords_match};

/// Local rejection message for a malformed email address.
pub const INVALID_EMAIL: &str = "Invalid Email Address";

/// Local rejection message when the two password fields differ.
pub const PASSWORD_MISMATCH: &str = "Password and Confirm Password do not match";

/// Lifecycle phase of a submitting form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    /// A call is in flight; further submissions are ignored until it
    /// resolves.
    Submitting,
}

/// Login form: field values plus submission lifecycle.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub phase: FormPhase,
    pub response_message: Option<String>,
}

impl LoginForm {
    /// Validate and enter `Submitting`.
    ///
    /// Returns the credentials to send, or `None` when a submission is
    /// already pending or a local guard rejected the input (in which
    /// case `response_message` is set and no network call happens).
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.phase == FormPhase::Submitting {
            return None;
        }
        if !is_valid_email(&self.email) {
            self.response_message = Some(INVALID_EMAIL.to_owned());
            return None;
        }
        self.phase = FormPhase::Submitting;
        self.response_message = None;
        Some(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Record a rejected or failed call: back to `Idle` with the
    /// message, field values retained for retry.
    pub fn fail(&mut self, message: String) {
        self.phase = FormPhase::Idle;
        self.response_message = Some(message);
    }
}

/// Register form: login fields plus name and password confirmation.
///
/// The confirmation is compared locally in `begin_submit` and never
/// leaves the struct.
#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phase: FormPhase,
    pub response_message: Option<String>,
}

impl RegisterForm {
    /// Validate and enter `Submitting`, mirroring [`LoginForm::begin_submit`].
    /// The mismatch guard runs before the email-shape guard.
    pub fn begin_submit(&mut self) -> Option<RegistrationRequest> {
        if self.phase == FormPhase::Submitting {
            return None;
        }
        if !passwords_match(&self.password, &self.confirm_password) {
            self.response_message = Some(PASSWORD_MISMATCH.to_owned());
            return None;
        }
        if !is_valid_email(&self.email) {
            self.response_message = Some(INVALID_EMAIL.to_owned());
            return None;
        }
        self.phase = FormPhase::Submitting;
        self.response_message = None;
        Some(RegistrationRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// See [`LoginForm::fail`].
    pub fn fail(&mut self, message: String) {
        self.phase = FormPhase::Idle;
        self.response_message = Some(message);
    }
}
