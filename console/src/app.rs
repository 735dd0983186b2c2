//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, mock_editor::MockEditorPage, mocks::MocksPage,
    signup::SignupPage, tester::TesterPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing. The token is
/// only readable in the browser, so auth stays `loading` until the first
/// client-side effect runs.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    Effect::new(move || auth.set(AuthState::from_session()));

    view! {
        <Stylesheet id="leptos" href="/pkg/mock-console.css"/>
        <Title text="Dynamic Mock UI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <ParentRoute path=StaticSegment("") view=ConsoleLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("mocks") view=MocksPage/>
                    <Route path=(StaticSegment("mocks"), ParamSegment("id")) view=MockEditorPage/>
                    <Route path=StaticSegment("tester") view=TesterPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Console shell: nav bar over the routed page. Anonymous users see it too.
#[component]
fn ConsoleLayout() -> impl IntoView {
    view! {
        <div class="console">
            <NavBar/>
            <main class="console__main">
                <Outlet/>
            </main>
        </div>
    }
}
