use super::*;
use crate::net::error::ApiError;

#[test]
fn section_defaults_to_loading() {
    assert_eq!(SectionState::default(), SectionState::Loading);
    assert_eq!(SectionState::Loading.value(), None);
    assert_eq!(SectionState::Loading.error(), None);
}

#[test]
fn section_from_ok_holds_value() {
    let state = SectionState::from_result(Ok(serde_json::json!({ "status": "UP" })));
    assert_eq!(state.value(), Some(serde_json::json!({ "status": "UP" })));
    assert_eq!(state.error(), None);
}

#[test]
fn section_from_err_holds_message() {
    let state = SectionState::from_result(Err(ApiError::Status { status: 503, message: None }));
    assert_eq!(state.error().as_deref(), Some("backend returned 503"));
    assert_eq!(state.value(), None);
}
