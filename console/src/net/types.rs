//! REST DTOs for the console/backend boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON. Deserialization is
//! lenient (defaults for absent fields, string-or-integer ids) because list
//! rows and editor loads share the same [`Mock`] type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// HTTP methods offered by the mock editor and the API tester.
pub const HTTP_METHODS: [&str; 7] = ["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"];

/// A backend-stored rule mapping method + path (+ matchers) to a canned response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mock {
    /// Backend identifier; absent until the mock is created.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
    /// Optional human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// HTTP method to match (e.g. `"GET"`).
    #[serde(default)]
    pub method: String,
    /// Request path to match (e.g. `"/api/users"`).
    #[serde(default)]
    pub path: String,
    /// Header name → pattern rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_headers: Option<BTreeMap<String, String>>,
    /// Query parameter → pattern rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_query: Option<BTreeMap<String, String>>,
    /// Body matcher, shape defined by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_body: Option<serde_json::Value>,
    /// Status code returned by the mock.
    #[serde(default = "default_status")]
    pub response_status: u16,
    /// JSON body returned by the mock.
    #[serde(default)]
    pub response_json: serde_json::Value,
    /// Artificial latency before responding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
    /// Disabled mocks are kept but never matched.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for Mock {
    /// Template used when the editor starts a new mock.
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            method: "GET".to_owned(),
            path: "/api/example".to_owned(),
            match_headers: None,
            match_query: None,
            match_body: None,
            response_status: 200,
            response_json: serde_json::json!({}),
            delay_ms: None,
            enabled: true,
        }
    }
}

fn default_status() -> u16 {
    200
}

fn default_enabled() -> bool {
    true
}

/// One page of a backend listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    /// Zero-based page index.
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { content: Vec::new(), total_elements: 0, number: 0, size: 0 }
    }
}

/// Login request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Role requested at signup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignupRole {
    #[default]
    User,
    Admin,
}

impl SignupRole {
    /// Wire value, also used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Parse an `<option>` value; anything unknown maps to `User`.
    pub fn from_option(value: &str) -> Self {
        if value.eq_ignore_ascii_case("ADMIN") { Self::Admin } else { Self::User }
    }
}

/// Signup request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub role: SignupRole,
}

/// Login/signup response. `token` is optional so a malformed success body
/// can be reported instead of failing to decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Error body shape used by the backend for non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(Some(n.to_string())),
        Some(_) => Err(D::Error::custom("expected string or integer id")),
    }
}
