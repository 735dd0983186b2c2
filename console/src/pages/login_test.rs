use super::*;

#[test]
fn validate_credentials_trims_username_and_requires_both() {
    assert_eq!(
        validate_credentials("  alice ", "secret"),
        Ok(Credentials { username: "alice".to_owned(), password: "secret".to_owned() })
    );
    assert_eq!(validate_credentials("   ", "secret"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_credentials("alice", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    assert_eq!(validate_credentials("a", " pw ").unwrap().password, " pw ");
}

#[test]
fn resolve_auth_returns_token() {
    let result = Ok(AuthResponse { token: Some("jwt".to_owned()) });
    assert_eq!(resolve_auth(result, LOGIN_FAILED), Ok("jwt".to_owned()));
}

#[test]
fn resolve_auth_without_token_is_invalid_response() {
    assert_eq!(resolve_auth(Ok(AuthResponse::default()), LOGIN_FAILED), Err(INVALID_RESPONSE.to_owned()));
    let empty = Ok(AuthResponse { token: Some(String::new()) });
    assert_eq!(resolve_auth(empty, LOGIN_FAILED), Err(INVALID_RESPONSE.to_owned()));
}

#[test]
fn resolve_auth_prefers_backend_message() {
    let rejected = Err(ApiError::from_status(401, r#"{"message":"Bad credentials"}"#));
    assert_eq!(resolve_auth(rejected, LOGIN_FAILED), Err("Bad credentials".to_owned()));
}

#[test]
fn resolve_auth_falls_back_on_transport_error() {
    let offline = Err(ApiError::Transport("Failed to fetch".to_owned()));
    assert_eq!(resolve_auth(offline, LOGIN_FAILED), Err("Login failed".to_owned()));
}

#[test]
fn resolve_auth_off_browser_shows_login_fallback() {
    assert_eq!(resolve_auth(Err(ApiError::Unavailable), LOGIN_FAILED), Err("Login failed".to_owned()));
}
