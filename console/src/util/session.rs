//! Bearer-token storage and session derivation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in a single `localStorage` slot. Everything else about the
//! session (display name, roles) is decoded from the token payload on every
//! read; nothing derived is cached here.
//!
//! TRADE-OFFS
//! ==========
//! No expiry check is performed: an expired but well-formed token still
//! yields a user, and the backend is left to reject it. Off-browser builds
//! keep the token in a per-thread slot so session logic behaves the same
//! under native tests and SSR.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeSet;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Map, Value};

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Fallback display name when the payload carries neither `sub` nor `username`.
const DEFAULT_USERNAME: &str = "user";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static MEMORY_SLOT: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

/// User identity derived from the stored token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub username: String,
    pub roles: BTreeSet<String>,
}

impl SessionUser {
    /// True iff any of `required` is in this user's role set.
    pub fn has_any_role<I, S>(&self, required: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        required.into_iter().any(|role| self.roles.contains(role.as_ref()))
    }

    /// Roles joined for display, e.g. `"ADMIN, USER"`.
    pub fn roles_label(&self) -> String {
        self.roles.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

/// Persist `token`, replacing any previous value.
pub fn set_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; token not persisted");
            return;
        };
        if storage.set_item(TOKEN_KEY, token).is_err() {
            log::warn!("failed to write session token");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY_SLOT.with(|slot| *slot.borrow_mut() = Some(token.to_owned()));
    }
}

/// Read the stored token, if any.
pub fn get_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY_SLOT.with(|slot| slot.borrow().clone())
    }
}

/// Remove the stored token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY_SLOT.with(|slot| *slot.borrow_mut() = None);
    }
}

/// Decode the stored token into a user. `None` without a token or when the
/// payload is malformed.
pub fn current_user() -> Option<SessionUser> {
    get_token().and_then(|token| decode_user(&token))
}

/// Role check against the current session. Always `false` without a user.
pub fn has_role<I, S>(required: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    user_has_role(current_user().as_ref(), required)
}

/// Role check against an explicit (possibly absent) user.
pub fn user_has_role<I, S>(user: Option<&SessionUser>, required: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    user.is_some_and(|u| u.has_any_role(required))
}

/// Decode a compact JWT's payload into a [`SessionUser`].
///
/// The signature is not verified. Any structural problem (missing segment,
/// bad base64, non-object JSON) yields `None`.
pub fn decode_user(token: &str) -> Option<SessionUser> {
    let payload = decode_payload(token)?;
    Some(SessionUser {
        username: username_claim(&payload),
        roles: role_claims(&payload),
    })
}

fn decode_payload(token: &str) -> Option<Map<String, Value>> {
    let segment = token.split('.').nth(1)?;
    // Tolerate padded and standard-alphabet encodings.
    let normalized: String = segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD.decode(normalized).ok()?;
    match serde_json::from_slice::<Value>(&bytes).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

fn username_claim(payload: &Map<String, Value>) -> String {
    ["sub", "username"]
        .iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_str))
        .unwrap_or(DEFAULT_USERNAME)
        .to_owned()
}

fn role_claims(payload: &Map<String, Value>) -> BTreeSet<String> {
    match payload.get("roles") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
        _ => payload
            .get("role")
            .and_then(Value::as_str)
            .filter(|role| !role.is_empty())
            .map(|role| BTreeSet::from([role.to_owned()]))
            .unwrap_or_default(),
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
