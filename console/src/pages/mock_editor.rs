//! Mock editor page: create, update, or delete one mock.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bound to `/mocks/:id`. `new` (or a missing id) starts from the empty
//! template; any other id loads that mock. Save and delete both return to the
//! list on success.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::HTTP_METHODS;
use crate::state::editor::{EditorState, EditorTarget};

#[cfg(feature = "hydrate")]
const LOAD_FAILED: &str = "Failed to load mock";
#[cfg(feature = "hydrate")]
const SAVE_FAILED: &str = "Save failed";
#[cfg(feature = "hydrate")]
const DELETE_FAILED: &str = "Delete failed";

#[component]
pub fn MockEditorPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let target = Memo::new(move |_| EditorTarget::from_param(params.read().get("id").as_deref()));
    let editor = RwSignal::new(EditorState::default());

    // Reset or load whenever the route id changes.
    Effect::new(move || {
        let target = target.get();
        editor.set(EditorState::for_target(&target));
        #[cfg(feature = "hydrate")]
        {
            if let EditorTarget::Existing(id) = target {
                leptos::task::spawn_local(async move {
                    match crate::net::api::get_mock(&id).await {
                        Ok(mock) => editor.update(|e| e.loaded(mock)),
                        Err(err) => editor.update(|e| {
                            e.loading = false;
                            e.error = Some(err.message_or(LOAD_FAILED));
                        }),
                    }
                });
            }
        }
    });

    let navigate_save = navigate.clone();
    let on_save = move |_| {
        if !editor.with_untracked(EditorState::can_save) {
            return;
        }
        editor.update(|e| {
            e.busy = true;
            e.error = None;
        });
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_save.clone();
            let target = target.get_untracked();
            let mock = editor.with_untracked(|e| e.mock.clone());
            leptos::task::spawn_local(async move {
                match crate::net::api::save_mock(&target, &mock).await {
                    Ok(()) => navigate("/mocks", NavigateOptions::default()),
                    Err(err) => editor.update(|e| {
                        e.busy = false;
                        e.error = Some(err.message_or(SAVE_FAILED));
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate_save;
        }
    };

    let on_delete = move |_| {
        let Some(id) = target.get_untracked().id().map(str::to_owned) else {
            return;
        };
        editor.update(|e| {
            e.busy = true;
            e.error = None;
        });
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_mock(&id).await {
                    Ok(()) => navigate("/mocks", NavigateOptions::default()),
                    Err(err) => editor.update(|e| {
                        e.busy = false;
                        e.error = Some(err.message_or(DELETE_FAILED));
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, &navigate);
        }
    };

    view! {
        <div class="page editor-page">
            <h2>{move || target.get().title()}</h2>
            <Show when=move || editor.get().message().is_some()>
                <p class="form-error">{move || editor.get().message().unwrap_or_default()}</p>
            </Show>
            <Show when=move || editor.get().loading>
                <p>"Loading..."</p>
            </Show>
            <div class="editor-page__field">
                <label for="method">"Method"</label>
                <select
                    id="method"
                    prop:value=move || editor.get().mock.method
                    on:change=move |ev| editor.update(|e| e.mock.method = event_target_value(&ev))
                >
                    {HTTP_METHODS
                        .iter()
                        .map(|m| view! { <option value=*m>{*m}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <div class="editor-page__field">
                <label for="path">"Path"</label>
                <input
                    id="path"
                    placeholder="/api/example"
                    prop:value=move || editor.get().mock.path
                    on:input=move |ev| editor.update(|e| e.mock.path = event_target_value(&ev))
                />
            </div>
            <div class="editor-page__field">
                <label for="name">"Name"</label>
                <input
                    id="name"
                    placeholder="Optional"
                    prop:value=move || editor.get().mock.name.unwrap_or_default()
                    on:input=move |ev| editor.update(|e| e.set_name(event_target_value(&ev)))
                />
            </div>
            <div class="editor-page__field">
                <label for="status">"Status"</label>
                <input
                    id="status"
                    type="number"
                    placeholder="200"
                    prop:value=move || editor.get().mock.response_status.to_string()
                    on:input=move |ev| editor.update(|e| e.set_status_text(&event_target_value(&ev)))
                />
            </div>
            <div class="editor-page__field">
                <label for="delay">"Delay (ms)"</label>
                <input
                    id="delay"
                    type="number"
                    placeholder="0"
                    prop:value=move || editor.get().mock.delay_ms.unwrap_or(0).to_string()
                    on:input=move |ev| editor.update(|e| e.set_delay_text(&event_target_value(&ev)))
                />
            </div>
            <div class="editor-page__field">
                <label for="enabled">"Enabled"</label>
                <input
                    id="enabled"
                    type="checkbox"
                    prop:checked=move || editor.get().mock.enabled
                    on:change=move |ev| editor.update(|e| e.mock.enabled = event_target_checked(&ev))
                />
            </div>
            <div class="editor-page__field">
                <label for="resp">"Response JSON"</label>
                <textarea
                    id="resp"
                    rows="12"
                    prop:value=move || editor.get().response_text
                    on:input=move |ev| editor.update(|e| e.edit_response_text(event_target_value(&ev)))
                ></textarea>
            </div>
            <div class="editor-page__actions">
                <button class="btn btn--primary" disabled=move || !editor.get().can_save() on:click=on_save>
                    "Save"
                </button>
                <button
                    class="btn btn--danger"
                    hidden=move || target.get().is_new()
                    disabled=move || editor.get().busy
                    on:click=on_delete
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
