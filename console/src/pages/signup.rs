//! Signup page: create an account with a chosen role and sign in.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{SignupRequest, SignupRole};
use crate::pages::login::validate_credentials;
use crate::state::auth::AuthState;

pub(crate) const SIGNUP_FAILED: &str = "Signup failed";

pub(crate) fn build_signup_request(username: &str, password: &str, role: SignupRole) -> Result<SignupRequest, &'static str> {
    let credentials = validate_credentials(username, password)?;
    Ok(SignupRequest { username: credentials.username, password: credentials.password, role })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(SignupRole::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match build_signup_request(&username.get(), &password.get(), role.get()) {
            Ok(request) => request,
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
                let result = crate::net::api::signup(&request).await;
                match crate::pages::login::resolve_auth(result, SIGNUP_FAILED) {
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
            let _ = (request, auth, &navigate);
            let outcome = crate::pages::login::resolve_auth(Err(crate::net::error::ApiError::Unavailable), SIGNUP_FAILED);
            if let Err(msg) = outcome {
                error.set(Some(msg));
            }
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Sign up"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label for="s-username">"Username"</label>
                    <input
                        id="s-username"
                        class="auth-input"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label for="s-password">"Password"</label>
                    <input
                        id="s-password"
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label for="s-role">"Role"</label>
                    <select
                        id="s-role"
                        class="auth-input"
                        prop:value=move || role.get().as_str()
                        on:change=move |ev| role.set(SignupRole::from_option(&event_target_value(&ev)))
                    >
                        <option value=SignupRole::User.as_str()>"User"</option>
                        <option value=SignupRole::Admin.as_str()>"Admin"</option>
                    </select>
                    <Show when=move || error.get().is_some()>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <p>"Already have an account? " <A href="/login">"Login"</A></p>
            </div>
        </div>
    }
}
