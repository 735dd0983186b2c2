//! Free-form HTTP request runner behind the API tester page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The tester talks to arbitrary URLs, not just the backend, so it builds its
//! own requests instead of going through [`super::api`]. It still injects the
//! stored bearer token.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns `Err` to the page. Bad header JSON and transport
//! failures both become a [`TesterResult`] whose body is `{ "error": ... }`.

#[cfg(test)]
#[path = "tester_test.rs"]
mod tester_test;

/// Form inputs of the tester page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TesterInput {
    pub method: String,
    pub url: String,
    /// JSON object text; empty means no headers.
    pub headers_text: String,
    pub body: String,
}

impl Default for TesterInput {
    fn default() -> Self {
        Self {
            method: "GET".to_owned(),
            url: super::api::api_base_url().to_owned(),
            headers_text: String::new(),
            body: String::new(),
        }
    }
}

/// A fully resolved request, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Parse the header text area into name/value pairs.
///
/// Non-string values are sent as their JSON text.
///
/// # Errors
///
/// Returns a display message when the text is not a JSON object.
pub fn parse_headers(text: &str) -> Result<Vec<(String, String)>, String> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| format!("Invalid headers JSON: {e}"))?;
    let serde_json::Value::Object(map) = value else {
        return Err("Headers must be a JSON object".to_owned());
    };
    Ok(map
        .into_iter()
        .map(|(name, value)| {
            let value = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (name, value)
        })
        .collect())
}

fn sends_body(method: &str) -> bool {
    !matches!(method, "GET" | "HEAD")
}

/// Resolve form inputs and the stored token into a request.
///
/// The body is attached only for methods other than GET/HEAD and only when
/// non-empty; it then defaults `Content-Type` to JSON. A token replaces any
/// user-supplied `Authorization` header.
///
/// # Errors
///
/// Returns a display message when the header text is invalid.
pub fn prepare(input: &TesterInput, token: Option<&str>) -> Result<PreparedRequest, String> {
    let method = input.method.trim().to_ascii_uppercase();
    let mut headers = parse_headers(&input.headers_text)?;

    let body = (sends_body(&method) && !input.body.is_empty()).then(|| input.body.clone());
    if body.is_some() && !headers.iter().any(|(k, _)| k.eq_ignore_ascii_case("content-type")) {
        headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
    }

    if let Some(token) = token {
        headers.retain(|(k, _)| !k.eq_ignore_ascii_case("authorization"));
        headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
    }

    Ok(PreparedRequest { method, url: input.url.trim().to_owned(), headers, body })
}

/// Response body as displayed: JSON when it parses, text otherwise.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

impl ResponseBody {
    pub fn parse(text: &str) -> Self {
        serde_json::from_str(text).map_or_else(|_| Self::Text(text.to_owned()), Self::Json)
    }

    /// Text for the output pane; JSON is pretty-printed.
    pub fn render(&self) -> String {
        match self {
            Self::Json(value) => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
            Self::Text(text) => text.clone(),
        }
    }
}

/// What the tester shows after a send.
#[derive(Clone, Debug, PartialEq)]
pub struct TesterResult {
    pub status: Option<u16>,
    pub elapsed_ms: Option<u64>,
    pub body: ResponseBody,
}

impl TesterResult {
    /// In-band failure: `{ "error": message }` with no status or timing.
    pub fn failure(message: &str) -> Self {
        Self {
            status: None,
            elapsed_ms: None,
            body: ResponseBody::Json(serde_json::json!({ "error": message })),
        }
    }

    pub fn completed(status: u16, elapsed_ms: f64, text: &str) -> Self {
        Self {
            status: Some(status),
            elapsed_ms: Some(round_ms(elapsed_ms)),
            body: ResponseBody::parse(text),
        }
    }

    pub fn status_label(&self) -> String {
        self.status.map_or_else(|| "-".to_owned(), |s| s.to_string())
    }

    pub fn time_label(&self) -> String {
        self.elapsed_ms.map_or_else(|| "-".to_owned(), |ms| ms.to_string())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_ms(elapsed: f64) -> u64 {
    if elapsed.is_finite() && elapsed > 0.0 { elapsed.round() as u64 } else { 0 }
}

/// Send the tester request using the stored token.
pub async fn send(input: TesterInput) -> TesterResult {
    let token = crate::util::session::get_token();
    let request = match prepare(&input, token.as_deref()) {
        Ok(request) => request,
        Err(message) => return TesterResult::failure(&message),
    };
    match execute(request).await {
        Ok((status, elapsed, text)) => TesterResult::completed(status, elapsed, &text),
        Err(message) => TesterResult::failure(&message),
    }
}

#[cfg(feature = "hydrate")]
async fn execute(request: PreparedRequest) -> Result<(u16, f64, String), String> {
    use gloo_net::http::{Method, RequestBuilder};

    let method = Method::from_bytes(request.method.as_bytes()).map_err(|_| format!("Invalid method: {}", request.method))?;
    let mut builder = RequestBuilder::new(&request.url).method(method);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let built = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| e.to_string())?;

    let start = now_ms();
    let resp = built.send().await.map_err(|e| {
        log::warn!("tester request to {} failed: {e}", request.url);
        e.to_string()
    })?;
    let elapsed = now_ms() - start;
    let text = resp.text().await.map_err(|e| e.to_string())?;
    Ok((resp.status(), elapsed, text))
}

#[cfg(not(feature = "hydrate"))]
#[allow(clippy::unused_async)]
async fn execute(request: PreparedRequest) -> Result<(u16, f64, String), String> {
    let _ = request;
    Err("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}
