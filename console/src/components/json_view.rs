//! Pretty-printed JSON output block.

#[cfg(test)]
#[path = "json_view_test.rs"]
mod json_view_test;

use leptos::prelude::*;

/// Two-space JSON text for display; `None` renders as empty.
pub fn render_json(value: Option<&serde_json::Value>) -> String {
    value
        .map(|v| serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()))
        .unwrap_or_default()
}

#[component]
pub fn JsonView(#[prop(into)] value: Signal<Option<serde_json::Value>>) -> impl IntoView {
    view! { <pre class="json-view">{move || render_json(value.get().as_ref())}</pre> }
}
