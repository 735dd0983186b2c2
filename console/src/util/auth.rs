//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every token write goes through here so the shell's auth snapshot stays
//! current. Nothing is gated on auth: anonymous requests simply go out
//! without a bearer token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::session;

/// Store a freshly issued token and refresh the auth snapshot.
pub fn sign_in(auth: RwSignal<AuthState>, token: &str) {
    session::set_token(token);
    auth.set(AuthState::from_session());
}

/// Drop the stored token and refresh the auth snapshot.
pub fn sign_out(auth: RwSignal<AuthState>) {
    session::clear_token();
    auth.set(AuthState::from_session());
}
