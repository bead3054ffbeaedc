//! Wire types for the identity service.
//!
//! Response bodies are decoded once, here and in `net::api`, into these
//! schemas; the rest of the client never inspects raw JSON shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user identity as confirmed by the server.
///
/// The whoami endpoint returns the full user record; only the display
/// name participates in client state, extra keys are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

/// Login payload. Built at submit time, consumed by the login call,
/// never retained. Deliberately has no `Debug` impl so the password
/// can't end up in diagnostic output.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload. The confirm-password field is checked locally
/// and never transmitted, so it does not appear here.
#[derive(Clone, Serialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Success body shared by the login and register endpoints.
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Error body of a non-2xx response.
///
/// The server answers under either key depending on the endpoint
/// (login failures use `message`, register failures use `error`), so
/// both are modeled and `message` wins when both are present.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// The server-provided error text, if any key was present.
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

/// Tagged outcome of a session call.
///
/// Exactly one variant is produced per call. The tag is decided by the
/// HTTP status and the transport outcome, never by which fields happen
/// to be present in a body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionResult<T> {
    /// 2xx with a decoded payload.
    Success(T),
    /// Non-2xx: the server rejected the request. Carries its message.
    Failure(String),
    /// Transport failure or an undecodable body. Says nothing about
    /// credential validity, so it must never be folded into `Failure`.
    NetworkError(String),
}

impl<T> SessionResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
