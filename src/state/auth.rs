#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state shared by every view.
///
/// Held in an `RwSignal` provided via context from the app root; pages
/// and the navbar subscribe through the signal, and only the
/// whoami/login/logout result handlers write to it. It holds the last
/// server-confirmed identity, never a value inferred from local form
/// input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// The authenticated user, or `None` when logged out.
    pub user: Option<User>,
    /// Whether the initial whoami probe has answered. Until it has,
    /// views render their "unknown" branch rather than "logged out".
    pub resolved: bool,
}

impl AuthState {
    /// Record a server-confirmed identity.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
        self.resolved = true;
    }

    /// Record a confirmed logged-out state (failed whoami or completed
    /// logout). Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.user = None;
        self.resolved = true;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
