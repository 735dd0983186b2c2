//! Login page: username + password exchanged for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, Credentials};
use crate::state::auth::AuthState;

pub(crate) const LOGIN_FAILED: &str = "Login failed";
pub(crate) const INVALID_RESPONSE: &str = "Invalid response from server";
pub(crate) const MISSING_CREDENTIALS: &str = "Enter a username and password.";

/// Trim the username and require both fields.
pub(crate) fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// Reduce a login/signup call to the token to store or the message to show.
pub(crate) fn resolve_auth(result: Result<AuthResponse, ApiError>, fallback: &str) -> Result<String, String> {
    match result {
        Ok(AuthResponse { token: Some(token) }) if !token.is_empty() => Ok(token),
        Ok(_) => Err(INVALID_RESPONSE.to_owned()),
        Err(e) => Err(e.message_or(fallback)),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&credentials).await;
                match resolve_auth(result, LOGIN_FAILED) {
                    Ok(token) => {
                        crate::util::auth::sign_in(auth, &token);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(msg) => error.set(Some(msg)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, auth, &navigate);
            if let Err(msg) = resolve_auth(Err(ApiError::Unavailable), LOGIN_FAILED) {
                error.set(Some(msg));
            }
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Login"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        class="auth-input"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <p>"No account? " <A href="/signup">"Sign up"</A></p>
            </div>
        </div>
    }
}
