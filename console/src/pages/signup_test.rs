use super::*;
use crate::net::error::ApiError;
use crate::pages::login::{MISSING_CREDENTIALS, resolve_auth};

#[test]
fn build_signup_request_carries_role() {
    let req = build_signup_request(" bob ", "pw", SignupRole::Admin).unwrap();
    assert_eq!(req.username, "bob");
    assert_eq!(req.role, SignupRole::Admin);
}

#[test]
fn build_signup_request_requires_credentials() {
    assert_eq!(build_signup_request("", "pw", SignupRole::User), Err(MISSING_CREDENTIALS));
}

#[test]
fn signup_failure_uses_signup_fallback() {
    let result = Err(ApiError::Status { status: 500, message: None });
    assert_eq!(resolve_auth(result, SIGNUP_FAILED), Err("Signup failed".to_owned()));
    let taken = Err(ApiError::from_status(409, r#"{"message":"Username already exists"}"#));
    assert_eq!(resolve_auth(taken, SIGNUP_FAILED), Err("Username already exists".to_owned()));
}

#[test]
fn signup_off_browser_shows_signup_fallback() {
    assert_eq!(resolve_auth(Err(ApiError::Unavailable), SIGNUP_FAILED), Err(SIGNUP_FAILED.to_owned()));
}
