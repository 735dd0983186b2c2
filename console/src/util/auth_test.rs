#![cfg(not(feature = "hydrate"))]

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;

fn token_for(sub: &str) -> String {
    let body = URL_SAFE_NO_PAD.encode(serde_json::json!({ "sub": sub, "roles": ["USER"] }).to_string());
    format!("h.{body}.s")
}

#[test]
fn sign_in_stores_token_and_loads_user() {
    let auth = RwSignal::new(AuthState::default());
    sign_in(auth, &token_for("alice"));

    let state = auth.get_untracked();
    assert!(!state.loading);
    assert_eq!(state.user.map(|u| u.username).as_deref(), Some("alice"));
    session::clear_token();
}

#[test]
fn sign_out_clears_token_and_user() {
    let auth = RwSignal::new(AuthState::default());
    sign_in(auth, &token_for("bob"));
    sign_out(auth);

    let state = auth.get_untracked();
    assert!(!state.loading);
    assert_eq!(state.user, None);
    assert_eq!(session::get_token(), None);
}

#[test]
fn malformed_token_signs_in_as_anonymous() {
    let auth = RwSignal::new(AuthState::default());
    sign_in(auth, "not.a-valid-payload.sig");

    assert!(!auth.get_untracked().is_authenticated());
    session::clear_token();
}
