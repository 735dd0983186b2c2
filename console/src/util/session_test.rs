#![cfg(not(feature = "hydrate"))]

use super::*;
use base64::engine::general_purpose::STANDARD;

fn token_with(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

fn roles(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| (*n).to_owned()).collect()
}

// =============================================================
// decode_user
// =============================================================

#[test]
fn decode_reads_sub_and_roles_array() {
    let token = token_with(&serde_json::json!({ "sub": "alice", "roles": ["ADMIN", "USER"] }));
    let user = decode_user(&token).unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.roles, roles(&["ADMIN", "USER"]));
}

#[test]
fn decode_wraps_single_role_claim() {
    let token = token_with(&serde_json::json!({ "sub": "bob", "role": "USER" }));
    assert_eq!(decode_user(&token).unwrap().roles, roles(&["USER"]));
}

#[test]
fn decode_without_role_claims_yields_empty_set() {
    let token = token_with(&serde_json::json!({ "sub": "carol" }));
    assert!(decode_user(&token).unwrap().roles.is_empty());
}

#[test]
fn decode_ignores_empty_single_role() {
    let token = token_with(&serde_json::json!({ "sub": "dave", "role": "" }));
    assert!(decode_user(&token).unwrap().roles.is_empty());
}

#[test]
fn decode_prefers_roles_array_over_role() {
    let token = token_with(&serde_json::json!({ "roles": ["A"], "role": "B" }));
    assert_eq!(decode_user(&token).unwrap().roles, roles(&["A"]));
}

#[test]
fn decode_falls_back_to_username_then_literal() {
    let with_username = token_with(&serde_json::json!({ "username": "erin" }));
    assert_eq!(decode_user(&with_username).unwrap().username, "erin");

    let anonymous = token_with(&serde_json::json!({ "roles": [] }));
    assert_eq!(decode_user(&anonymous).unwrap().username, "user");
}

#[test]
fn decode_accepts_padded_standard_base64() {
    let payload = serde_json::json!({ "sub": "frank??>>", "roles": ["X"] }).to_string();
    let token = format!("h.{}.s", STANDARD.encode(payload));
    assert_eq!(decode_user(&token).unwrap().username, "frank??>>");
}

#[test]
fn decode_rejects_malformed_tokens() {
    assert_eq!(decode_user("not-a-jwt"), None);
    assert_eq!(decode_user("a.!!!.c"), None);
    let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("plain text"));
    assert_eq!(decode_user(&not_json), None);
    let not_object = format!("a.{}.c", URL_SAFE_NO_PAD.encode("[1,2]"));
    assert_eq!(decode_user(&not_object), None);
}

#[test]
fn decode_ignores_expiry() {
    let token = token_with(&serde_json::json!({ "sub": "old", "exp": 1 }));
    assert_eq!(decode_user(&token).unwrap().username, "old");
}

// =============================================================
// has_role
// =============================================================

#[test]
fn has_role_without_user_is_false() {
    assert!(!user_has_role(None, ["ADMIN"]));
    assert!(!user_has_role(None, Vec::<String>::new()));
}

#[test]
fn has_role_matches_any_of_required() {
    let user = SessionUser { username: "u".to_owned(), roles: roles(&["B", "C"]) };
    assert!(user_has_role(Some(&user), ["A", "B"]));
    assert!(user_has_role(Some(&user), ["C"]));
    assert!(!user_has_role(Some(&user), ["A", "D"]));
    assert!(!user_has_role(Some(&user), Vec::<&str>::new()));
}

#[test]
fn roles_label_joins_sorted_roles() {
    let user = SessionUser { username: "u".to_owned(), roles: roles(&["USER", "ADMIN"]) };
    assert_eq!(user.roles_label(), "ADMIN, USER");
}

// =============================================================
// storage slot
// =============================================================

#[test]
fn token_slot_overwrites_and_clears() {
    clear_token();
    assert_eq!(get_token(), None);
    assert_eq!(current_user(), None);
    assert!(!has_role(["USER"]));

    set_token("first");
    set_token(&token_with(&serde_json::json!({ "sub": "gina", "role": "USER" })));
    let user = current_user().unwrap();
    assert_eq!(user.username, "gina");
    assert!(has_role(["USER"]));

    clear_token();
    assert_eq!(get_token(), None);
}

#[test]
fn malformed_stored_token_reads_as_no_user() {
    set_token("garbage");
    assert_eq!(get_token().as_deref(), Some("garbage"));
    assert_eq!(current_user(), None);
    clear_token();
}
