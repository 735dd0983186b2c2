//! Top navigation bar with section links and the signed-in user badge.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::session::SessionUser;

/// Badge text, e.g. `"alice [ADMIN, USER]"`.
pub fn user_badge(user: &SessionUser) -> String {
    format!("{} [{}]", user.username, user.roles_label())
}

/// What the right-hand side of the bar shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavMode {
    /// Login · Signup links.
    Guest,
    /// User badge plus Logout.
    SignedIn(String),
}

/// Guest until a user is present, including while auth is still loading.
pub fn nav_mode(state: &AuthState) -> NavMode {
    state.user.as_ref().map_or(NavMode::Guest, |user| NavMode::SignedIn(user_badge(user)))
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        crate::util::auth::sign_out(auth);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="nav-bar">
            <strong class="nav-bar__title">"Dynamic Mock UI"</strong>
            <A href="/">"Dashboard"</A>
            <A href="/mocks">"Mocks"</A>
            <A href="/tester">"API Tester"</A>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || nav_mode(&auth.get()) != NavMode::Guest
                fallback=|| {
                    view! {
                        <span class="nav-bar__guest">
                            <A href="/login">"Login"</A>
                            " · "
                            <A href="/signup">"Signup"</A>
                        </span>
                    }
                }
            >
                <span class="nav-bar__user">
                    {move || match nav_mode(&auth.get()) {
                        NavMode::SignedIn(badge) => badge,
                        NavMode::Guest => String::new(),
                    }}
                </span>
            </Show>
            <button
                class="btn nav-bar__logout"
                hidden=move || nav_mode(&auth.get()) == NavMode::Guest
                on:click=on_logout
            >
                "Logout"
            </button>
        </header>
    }
}
