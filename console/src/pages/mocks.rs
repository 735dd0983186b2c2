//! Mocks list page: search, paginate, export, import.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every query change refetches from the backend. Rows from the previous
//! page stay on screen until the new page arrives.

#[cfg(test)]
#[path = "mocks_test.rs"]
mod mocks_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Mock;
use crate::state::mocks::{MocksQuery, MocksState, PAGE_SIZES};

const LOAD_FAILED: &str = "Failed to load mocks";
#[cfg(feature = "hydrate")]
const EXPORT_FAILED: &str = "Export failed";
#[cfg(feature = "hydrate")]
const IMPORT_FAILED: &str = "Import failed";

#[component]
pub fn MocksPage() -> impl IntoView {
    let query = RwSignal::new(MocksQuery::default());
    let state = RwSignal::new(MocksState::default());

    Effect::new(move || {
        load_page(state, query.get());
    });

    let on_export = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match crate::net::api::export_mocks().await {
                Ok(bytes) => crate::util::download::save_bytes(
                    crate::net::api::EXPORT_FILE_NAME,
                    "application/json",
                    &bytes,
                ),
                Err(e) => Err(e.message_or(EXPORT_FAILED)),
            };
            if let Err(e) = outcome {
                state.update(|s| s.error = Some(e));
            }
        });
    };

    let on_import = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");
            leptos::task::spawn_local(async move {
                match crate::net::api::import_mocks(&file).await {
                    Ok(result) => {
                        let notice = crate::state::mocks::import_summary(&result);
                        log::info!("{notice}");
                        state.update(|s| s.notice = Some(notice));
                        load_page(state, query.get_untracked());
                    }
                    Err(e) => state.update(|s| s.error = Some(e.message_or(IMPORT_FAILED))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="page mocks-page">
            <h2>"Mocks"</h2>
            <div class="mocks-page__toolbar">
                <input
                    class="mocks-page__search"
                    aria-label="Search mocks"
                    placeholder="Search"
                    prop:value=move || query.get().q
                    on:input=move |ev| query.update(|q| q.set_search(event_target_value(&ev)))
                />
                <A href="/mocks/new">"New Mock"</A>
                <button class="btn" on:click=on_export>"Export"</button>
                <label class="mocks-page__import">
                    "Import"
                    <input aria-label="Import mocks" type="file" accept="application/json" on:change=on_import/>
                </label>
            </div>
            <Show when=move || state.get().notice.is_some()>
                <p class="notice">{move || state.get().notice.unwrap_or_default()}</p>
            </Show>
            <Show when=move || state.get().error.is_some()>
                <p class="form-error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || state.get().loading && state.get().page.is_none()>
                <p>"Loading..."</p>
            </Show>
            <table class="mocks-table">
                <thead>
                    <tr>
                        <th>"Method"</th>
                        <th>"Path"</th>
                        <th>"Status"</th>
                        <th>"Enabled"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || state.get().rows().into_iter().map(|mock| view! { <MockRow mock/> }).collect::<Vec<_>>()}
                </tbody>
            </table>
            <div class="mocks-page__pager">
                <button
                    class="btn"
                    disabled=move || !query.get().has_prev()
                    on:click=move |_| query.update(MocksQuery::prev)
                >
                    "Prev"
                </button>
                <span class="mocks-page__page">{move || query.get().page_label()}</span>
                <button
                    class="btn"
                    disabled=move || !query.get().has_next(state.get().row_count())
                    on:click=move |_| query.update(MocksQuery::next)
                >
                    "Next"
                </button>
                <label for="page-size">"Page size"</label>
                <select
                    id="page-size"
                    aria-label="Page size"
                    prop:value=move || query.get().size.to_string()
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            query.update(|q| q.set_size(size));
                        }
                    }
                >
                    {PAGE_SIZES
                        .iter()
                        .map(|size| view! { <option value=size.to_string()>{size.to_string()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
        </div>
    }
}

/// Editor link for a row; rows without an id get none.
pub(crate) fn edit_href(mock: &Mock) -> Option<String> {
    mock.id.as_deref().filter(|id| !id.is_empty()).map(|id| format!("/mocks/{id}"))
}

#[component]
fn MockRow(mock: Mock) -> impl IntoView {
    let link = edit_href(&mock).map(|href| view! { <A href=href>"Edit"</A> });
    view! {
        <tr>
            <td>{mock.method}</td>
            <td>{mock.path}</td>
            <td>{mock.response_status}</td>
            <td>{mock.enabled.to_string()}</td>
            <td>{link}</td>
        </tr>
    }
}

fn load_page(state: RwSignal<MocksState>, query: MocksQuery) {
    let mut seq = 0;
    state.update(|s| seq = s.begin_request());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::list_mocks(&query).await.map_err(|e| e.message_or(LOAD_FAILED));
        state.update(|s| {
            s.finish_request(seq, result);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (seq, query, LOAD_FAILED);
    }
}
