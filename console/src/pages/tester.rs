//! API tester page: send an arbitrary HTTP request and inspect the response.

use leptos::prelude::*;

use crate::net::tester::{TesterInput, TesterResult};
use crate::net::types::HTTP_METHODS;

#[component]
pub fn TesterPage() -> impl IntoView {
    let input = RwSignal::new(TesterInput::default());
    let result = RwSignal::new(None::<TesterResult>);
    let busy = RwSignal::new(false);

    let on_send = move |_| {
        if busy.get() {
            return;
        }
        result.set(None);
        busy.set(true);
        let request = input.get_untracked();
        leptos::task::spawn_local(async move {
            let outcome = crate::net::tester::send(request).await;
            result.set(Some(outcome));
            busy.set(false);
        });
    };

    let status_label = move || result.get().map_or_else(|| "-".to_owned(), |r| r.status_label());
    let time_label = move || result.get().map_or_else(|| "-".to_owned(), |r| r.time_label());
    let output = move || result.get().map(|r| r.body.render()).unwrap_or_default();

    view! {
        <div class="page tester-page">
            <h2>"API Tester"</h2>
            <div class="tester-page__request-line">
                <label for="methodSel">"Method"</label>
                <select
                    id="methodSel"
                    aria-label="HTTP method"
                    prop:value=move || input.get().method
                    on:change=move |ev| input.update(|i| i.method = event_target_value(&ev))
                >
                    {HTTP_METHODS
                        .iter()
                        .map(|m| view! { <option value=*m>{*m}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <label for="url">"URL"</label>
                <input
                    id="url"
                    class="tester-page__url"
                    aria-label="Request URL"
                    placeholder="http://localhost:8088/api/..."
                    prop:value=move || input.get().url
                    on:input=move |ev| input.update(|i| i.url = event_target_value(&ev))
                />
                <button class="btn btn--primary" disabled=move || busy.get() on:click=on_send>
                    "Send"
                </button>
            </div>
            <div class="tester-page__field">
                <label for="headers">"Headers (JSON)"</label>
                <textarea
                    id="headers"
                    aria-label="Request headers JSON"
                    rows="6"
                    prop:value=move || input.get().headers_text
                    on:input=move |ev| input.update(|i| i.headers_text = event_target_value(&ev))
                ></textarea>
            </div>
            <div class="tester-page__field">
                <label for="body">"Body"</label>
                <textarea
                    id="body"
                    aria-label="Request body"
                    rows="8"
                    prop:value=move || input.get().body
                    on:input=move |ev| input.update(|i| i.body = event_target_value(&ev))
                ></textarea>
            </div>
            <div class="tester-page__response">
                <div>"Status: " {status_label}</div>
                <div>"Time: " {time_label} " ms"</div>
                <pre class="tester-page__output">{output}</pre>
            </div>
        </div>
    }
}
