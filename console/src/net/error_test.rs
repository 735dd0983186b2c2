use super::*;

#[test]
fn from_status_extracts_backend_message() {
    let err = ApiError::from_status(401, r#"{"message":"Bad credentials"}"#);
    assert_eq!(err, ApiError::Status { status: 401, message: Some("Bad credentials".to_owned()) });
    assert_eq!(err.message_or("Login failed"), "Bad credentials");
}

#[test]
fn from_status_without_json_body_uses_fallback() {
    let err = ApiError::from_status(500, "<html>oops</html>");
    assert_eq!(err.message_or("Save failed"), "Save failed");
}

#[test]
fn blank_backend_message_is_ignored() {
    let err = ApiError::from_status(400, r#"{"message":"  "}"#);
    assert_eq!(err.message_or("Delete failed"), "Delete failed");
}

#[test]
fn transport_and_decode_errors_use_fallback() {
    assert_eq!(ApiError::Transport("offline".to_owned()).message_or("Login failed"), "Login failed");
    assert_eq!(ApiError::Decode("eof".to_owned()).message_or("Signup failed"), "Signup failed");
    assert_eq!(ApiError::Unavailable.message_or("x"), "x");
}

#[test]
fn display_includes_status_and_message() {
    let err = ApiError::Status { status: 404, message: Some("not found".to_owned()) };
    assert_eq!(err.to_string(), "backend returned 404: not found");
    let err = ApiError::Status { status: 502, message: None };
    assert_eq!(err.to_string(), "backend returned 502");
}
