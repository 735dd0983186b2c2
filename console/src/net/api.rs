//! REST API helpers for communicating with the mock server backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying the
//! stored bearer token when one exists.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! No retry, timeout, or backoff. Every failure comes back as an
//! [`ApiError`] for the calling page to render inline.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthResponse, Credentials, Mock, Page, SignupRequest};
use crate::state::editor::EditorTarget;
use crate::state::mocks::MocksQuery;

/// Backend origin used when `MOCK_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8088";

/// File name offered for exported mock sets.
pub const EXPORT_FILE_NAME: &str = "mocks.json";

/// Backend origin the console talks to.
pub fn api_base_url() -> &'static str {
    option_env!("MOCK_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Absolute URL for a backend path.
pub fn endpoint(path: &str) -> String {
    join_url(api_base_url(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// `Authorization` header value for `token`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn mock_path(id: &str) -> String {
    format!("/api/mocks/{id}")
}

/// Method and path used to persist a mock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SaveRoute {
    pub method: &'static str,
    pub path: String,
}

/// Create-or-update by id presence.
pub(crate) fn save_route(target: &EditorTarget) -> SaveRoute {
    match target {
        EditorTarget::New => SaveRoute { method: "POST", path: "/api/mocks".to_owned() },
        EditorTarget::Existing(id) => SaveRoute { method: "PUT", path: mock_path(id) },
    }
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::ApiError;
    use crate::util::session;

    /// Attach the stored bearer token, if any.
    pub(super) fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match session::get_token() {
            Some(token) => builder.header("Authorization", &super::bearer_header(&token)),
            None => builder,
        }
    }

    pub(super) fn transport(err: gloo_net::Error) -> ApiError {
        log::warn!("backend request failed: {err}");
        ApiError::Transport(err.to_string())
    }

    /// Turn non-2xx responses into [`ApiError::Status`].
    pub(super) async fn check(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        log::warn!("backend returned {status} for {}", resp.url());
        Err(ApiError::from_status(status, &body))
    }

    pub(super) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let resp = check(resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Exchange credentials for a token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn login(credentials: &Credentials) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = http::authorized(gloo_net::http::Request::post(&endpoint("/api/auth/login")))
            .json(credentials)
            .map_err(http::transport)?;
        let resp = req.send().await.map_err(http::transport)?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Register an account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn signup(request: &SignupRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = http::authorized(gloo_net::http::Request::post(&endpoint("/api/auth/signup")))
            .json(request)
            .map_err(http::transport)?;
        let resp = req.send().await.map_err(http::transport)?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page of mocks via `GET /api/mocks?page&size&q`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not a page.
pub async fn list_mocks(query: &MocksQuery) -> Result<Page<Mock>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::authorized(gloo_net::http::Request::get(&endpoint("/api/mocks")))
            .query(query.params())
            .send()
            .await
            .map_err(http::transport)?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single mock via `GET /api/mocks/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the mock does not exist.
pub async fn get_mock(id: &str) -> Result<Mock, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::authorized(gloo_net::http::Request::get(&endpoint(&mock_path(id))))
            .send()
            .await
            .map_err(http::transport)?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Create a mock via `POST /api/mocks`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn create_mock(mock: &Mock) -> Result<(), ApiError> {
    send_mock(save_route(&EditorTarget::New), mock).await
}

/// Replace mock `id` via `PUT /api/mocks/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn update_mock(id: &str, mock: &Mock) -> Result<(), ApiError> {
    send_mock(save_route(&EditorTarget::Existing(id.to_owned())), mock).await
}

/// Create or update depending on whether the editor is bound to an id.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn save_mock(target: &EditorTarget, mock: &Mock) -> Result<(), ApiError> {
    match target {
        EditorTarget::New => create_mock(mock).await,
        EditorTarget::Existing(id) => update_mock(id, mock).await,
    }
}

async fn send_mock(route: SaveRoute, mock: &Mock) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(&route.path);
        let builder = if route.method == "PUT" {
            gloo_net::http::Request::put(&url)
        } else {
            gloo_net::http::Request::post(&url)
        };
        let req = http::authorized(builder).json(mock).map_err(http::transport)?;
        let resp = req.send().await.map_err(http::transport)?;
        http::check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (route, mock);
        Err(ApiError::Unavailable)
    }
}

/// Delete a mock via `DELETE /api/mocks/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn delete_mock(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::authorized(gloo_net::http::Request::delete(&endpoint(&mock_path(id))))
            .send()
            .await
            .map_err(http::transport)?;
        http::check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Download the full mock set via `GET /api/mocks/export`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body cannot be read.
pub async fn export_mocks() -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::authorized(gloo_net::http::Request::get(&endpoint("/api/mocks/export")))
            .send()
            .await
            .map_err(http::transport)?;
        let resp = http::check(resp).await?;
        resp.binary().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Upload a mock set file as multipart field `file` via `POST /api/mocks/import`.
///
/// Returns the backend's import summary (shape defined by the backend).
///
/// # Errors
///
/// Returns an [`ApiError`] if the form cannot be built, the request fails, or
/// the backend rejects the file.
#[cfg(feature = "hydrate")]
pub async fn import_mocks(file: &web_sys::File) -> Result<serde_json::Value, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Transport("form data unavailable".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Transport("could not attach file".to_owned()))?;
    // The browser supplies the multipart boundary header.
    let req = http::authorized(gloo_net::http::Request::post(&endpoint("/api/mocks/import")))
        .body(form)
        .map_err(http::transport)?;
    let resp = req.send().await.map_err(http::transport)?;
    let resp = http::check(resp).await?;
    let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text)))
}

/// Fetch backend health from `GET /actuator/health`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not JSON.
pub async fn fetch_health() -> Result<serde_json::Value, ApiError> {
    fetch_actuator("/actuator/health").await
}

/// Fetch backend metrics from `GET /actuator/metrics`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not JSON.
pub async fn fetch_metrics() -> Result<serde_json::Value, ApiError> {
    fetch_actuator("/actuator/metrics").await
}

async fn fetch_actuator(path: &str) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = http::authorized(gloo_net::http::Request::get(&endpoint(path)))
            .send()
            .await
            .map_err(http::transport)?;
        http::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}
