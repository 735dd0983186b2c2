use super::*;

fn input(method: &str, headers: &str, body: &str) -> TesterInput {
    TesterInput {
        method: method.to_owned(),
        url: "http://host/path".to_owned(),
        headers_text: headers.to_owned(),
        body: body.to_owned(),
    }
}

// =============================================================
// parse_headers
// =============================================================

#[test]
fn empty_header_text_means_no_headers() {
    assert_eq!(parse_headers(""), Ok(Vec::new()));
    assert_eq!(parse_headers("   \n"), Ok(Vec::new()));
}

#[test]
fn header_object_becomes_pairs() {
    let headers = parse_headers(r#"{"X":"1","Retry":2,"Flag":true}"#).unwrap();
    assert!(headers.contains(&("X".to_owned(), "1".to_owned())));
    assert!(headers.contains(&("Retry".to_owned(), "2".to_owned())));
    assert!(headers.contains(&("Flag".to_owned(), "true".to_owned())));
}

#[test]
fn invalid_header_json_is_reported() {
    let err = parse_headers("{not json").unwrap_err();
    assert!(err.starts_with("Invalid headers JSON"), "{err}");
    assert_eq!(parse_headers("[1,2]"), Err("Headers must be a JSON object".to_owned()));
}

// =============================================================
// prepare
// =============================================================

#[test]
fn get_never_carries_body() {
    let req = prepare(&input("GET", "", "{\"a\":1}"), None).unwrap();
    assert_eq!(req.body, None);
    assert_eq!(req.header("content-type"), None);

    let req = prepare(&input("HEAD", "", "x"), None).unwrap();
    assert_eq!(req.body, None);
}

#[test]
fn body_methods_default_content_type_to_json() {
    for method in ["POST", "PUT", "PATCH", "DELETE", "OPTIONS"] {
        let req = prepare(&input(method, "", "{\"a\":1}"), None).unwrap();
        assert_eq!(req.body.as_deref(), Some("{\"a\":1}"), "{method}");
        assert_eq!(req.header("Content-Type"), Some("application/json"), "{method}");
    }
}

#[test]
fn existing_content_type_is_kept() {
    let req = prepare(&input("POST", r#"{"content-type":"text/plain"}"#, "hello"), None).unwrap();
    assert_eq!(req.header("Content-Type"), Some("text/plain"));
    assert_eq!(req.headers.len(), 1);
}

#[test]
fn empty_body_is_not_attached() {
    let req = prepare(&input("POST", "", ""), None).unwrap();
    assert_eq!(req.body, None);
    assert_eq!(req.header("Content-Type"), None);
}

#[test]
fn method_is_normalized() {
    let req = prepare(&input(" post ", "", "1"), None).unwrap();
    assert_eq!(req.method, "POST");
}

#[test]
fn token_overrides_user_authorization() {
    let req = prepare(&input("GET", r#"{"authorization":"Basic abc","X":"1"}"#, ""), Some("tok")).unwrap();
    assert_eq!(req.header("Authorization"), Some("Bearer tok"));
    assert_eq!(req.headers.iter().filter(|(k, _)| k.eq_ignore_ascii_case("authorization")).count(), 1);
    assert_eq!(req.header("X"), Some("1"));
}

#[test]
fn user_authorization_kept_without_token() {
    let req = prepare(&input("GET", r#"{"Authorization":"Basic abc"}"#, ""), None).unwrap();
    assert_eq!(req.header("Authorization"), Some("Basic abc"));
}

// =============================================================
// Results
// =============================================================

#[test]
fn non_json_response_renders_as_text() {
    let result = TesterResult::completed(200, 12.6, "<html>ok</html>");
    assert_eq!(result.status_label(), "200");
    assert_eq!(result.time_label(), "13");
    assert_eq!(result.body, ResponseBody::Text("<html>ok</html>".to_owned()));
    assert_eq!(result.body.render(), "<html>ok</html>");
}

#[test]
fn json_response_renders_pretty() {
    let result = TesterResult::completed(201, 3.0, r#"{"id":1}"#);
    assert_eq!(result.body, ResponseBody::Json(serde_json::json!({ "id": 1 })));
    assert_eq!(result.body.render(), "{\n  \"id\": 1\n}");
}

#[test]
fn failure_is_error_object_without_status() {
    let result = TesterResult::failure("Failed to fetch");
    assert_eq!(result.status, None);
    assert_eq!(result.status_label(), "-");
    assert_eq!(result.time_label(), "-");
    assert_eq!(result.body, ResponseBody::Json(serde_json::json!({ "error": "Failed to fetch" })));
}

#[test]
fn negative_or_nan_elapsed_clamps_to_zero() {
    assert_eq!(TesterResult::completed(200, -1.0, "").elapsed_ms, Some(0));
    assert_eq!(TesterResult::completed(200, f64::NAN, "").elapsed_ms, Some(0));
}

#[test]
fn default_input_targets_backend_with_get() {
    let input = TesterInput::default();
    assert_eq!(input.method, "GET");
    assert_eq!(input.url, crate::net::api::api_base_url());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn invalid_headers_short_circuit_send() {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(send(input("GET", "{bad", "")));
    let Poll::Ready(result) = fut.as_mut().poll(&mut Context::from_waker(Waker::noop())) else {
        panic!("send should resolve immediately off-browser");
    };
    assert_eq!(result.status, None);
    let ResponseBody::Json(body) = result.body else {
        panic!("expected error object");
    };
    assert!(body["error"].as_str().unwrap().starts_with("Invalid headers JSON"));
}
