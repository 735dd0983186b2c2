//! Error type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages never propagate these further: each call site renders
//! [`ApiError::message_or`] inline with its own fallback text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, bad URL).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("{}", status_error_text(*status, message.as_deref()))]
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, pulling `message` out of a JSON error body.
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: backend_message(body) }
    }

    /// Backend-provided message when there is one, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

fn status_error_text(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("backend returned {status}: {message}"),
        None => format!("backend returned {status}"),
    }
}

/// Extract a non-empty `message` string from a JSON error body.
pub(crate) fn backend_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}
