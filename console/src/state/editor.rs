//! Mock editor form state.
//!
//! DESIGN
//! ======
//! The editor holds a transient copy of one mock. The response body is edited
//! as text and parsed on every change; only text that parses replaces the
//! in-memory value, so a bad keystroke never loses the last valid body.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::net::types::Mock;

/// Message shown while the response text does not parse.
pub const INVALID_JSON: &str = "Invalid JSON";

/// Which mock the editor route is bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorTarget {
    New,
    Existing(String),
}

impl EditorTarget {
    /// Map the `:id` route param; missing, blank, or `"new"` means create.
    pub fn from_param(id: Option<&str>) -> Self {
        match id.map(str::trim) {
            None | Some("" | "new") => Self::New,
            Some(id) => Self::Existing(id.to_owned()),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Self::New)
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::New => None,
            Self::Existing(id) => Some(id),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::New => "New Mock".to_owned(),
            Self::Existing(id) => format!("Edit Mock {id}"),
        }
    }
}

/// Two-space pretty JSON for the response text area.
pub fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_owned())
}

/// Parse response text into `mock.response_json`. Empty text means `null`.
/// On error `mock` is left untouched.
///
/// # Errors
///
/// Returns [`INVALID_JSON`] when `text` is not valid JSON.
pub fn apply_response_json(mock: &mut Mock, text: &str) -> Result<(), &'static str> {
    let source = if text.trim().is_empty() { "null" } else { text };
    let value = serde_json::from_str(source).map_err(|_| INVALID_JSON)?;
    mock.response_json = value;
    Ok(())
}

/// Editable copy of a mock plus form-level status.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    pub mock: Mock,
    /// Raw text of the response body field.
    pub response_text: String,
    pub json_error: Option<&'static str>,
    /// Load/save/delete failure message.
    pub error: Option<String>,
    pub loading: bool,
    pub busy: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::with_mock(Mock::default())
    }
}

impl EditorState {
    pub fn with_mock(mock: Mock) -> Self {
        let response_text = pretty_json(&mock.response_json);
        Self { mock, response_text, json_error: None, error: None, loading: false, busy: false }
    }

    /// Initial state for a route target; existing mocks start loading.
    pub fn for_target(target: &EditorTarget) -> Self {
        Self { loading: !target.is_new(), ..Self::default() }
    }

    /// Replace the form contents with a freshly loaded mock.
    pub fn loaded(&mut self, mock: Mock) {
        *self = Self::with_mock(mock);
    }

    /// Record new response text and apply it when it parses.
    pub fn edit_response_text(&mut self, text: String) {
        self.json_error = apply_response_json(&mut self.mock, &text).err();
        self.response_text = text;
    }

    pub fn set_status_text(&mut self, text: &str) {
        if let Ok(status) = text.trim().parse::<u16>() {
            self.mock.response_status = status;
        }
    }

    pub fn set_delay_text(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            self.mock.delay_ms = None;
        } else if let Ok(delay) = text.parse::<u64>() {
            self.mock.delay_ms = Some(delay);
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.mock.name = if name.trim().is_empty() { None } else { Some(name) };
    }

    /// Saving is blocked while the response text is invalid or a call is in flight.
    pub fn can_save(&self) -> bool {
        self.json_error.is_none() && !self.busy && !self.loading
    }

    /// Message to show under the title, JSON errors first.
    pub fn message(&self) -> Option<String> {
        self.json_error.map(str::to_owned).or_else(|| self.error.clone())
    }
}
