//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the nav bar for identity-dependent rendering. The snapshot is taken from
//! [`crate::util::session`] and refreshed whenever the token changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::session::{self, SessionUser};

/// Authentication state tracking the current user and loading status.
///
/// `loading` stays `true` until the browser has read the token, so SSR and
/// the first hydrated render agree on markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Snapshot of the session as currently stored.
    pub fn from_session() -> Self {
        Self { user: session::current_user(), loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
