//! Dashboard page showing backend health and metrics.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Both actuator endpoints are
//! fetched independently on mount; one failing does not hide the other.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::json_view::JsonView;

/// Load status of one dashboard section.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SectionState {
    #[default]
    Loading,
    Loaded(serde_json::Value),
    Failed(String),
}

impl SectionState {
    pub fn from_result(result: Result<serde_json::Value, crate::net::error::ApiError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn value(&self) -> Option<serde_json::Value> {
        match self {
            Self::Loaded(value) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<String> {
        match self {
            Self::Failed(e) => Some(e.clone()),
            _ => None,
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let health = RwSignal::new(SectionState::Loading);
    let metrics = RwSignal::new(SectionState::Loading);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            health.set(SectionState::from_result(crate::net::api::fetch_health().await));
        });
        leptos::task::spawn_local(async move {
            metrics.set(SectionState::from_result(crate::net::api::fetch_metrics().await));
        });
    }

    view! {
        <div class="page dashboard-page">
            <h2>"Dashboard"</h2>
            <DashboardSection title="Health" state=health/>
            <DashboardSection title="Metrics" state=metrics/>
        </div>
    }
}

#[component]
fn DashboardSection(title: &'static str, state: RwSignal<SectionState>) -> impl IntoView {
    view! {
        <section class="dashboard-page__section">
            <h3>{title}</h3>
            <Show when=move || matches!(state.get(), SectionState::Loading)>
                <p>"Loading..."</p>
            </Show>
            <Show when=move || state.get().error().is_some()>
                <p class="form-error">{move || state.get().error().unwrap_or_default()}</p>
            </Show>
            <JsonView value=Signal::derive(move || state.get().value())/>
        </section>
    }
}
