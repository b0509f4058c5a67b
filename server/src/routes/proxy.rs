//! Reverse proxy to the queue backend.
//!
//! DESIGN
//! ======
//! The browser only ever talks to this host. Requests under `/api` are
//! replayed against `QUEUE_API_URL` with the same method, query, content type
//! and body. Whatever the backend answers (including 4xx/5xx with an
//! `error` body) is passed back unchanged so the client can surface the
//! backend's own message. Only a failure to reach the backend is turned into
//! a local error.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Largest request body forwarded upstream (import batches are the big ones).
pub const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body unreadable: {0}")]
    BadRequest(String),
    #[error("queue backend unreachable: {0}")]
    Upstream(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Join the configured backend base with the incoming path and query.
pub(crate) fn upstream_url(base: &str, path_and_query: &str) -> String {
    let base = base.trim_end_matches('/');
    if path_and_query.starts_with('/') {
        format!("{base}{path_and_query}")
    } else {
        format!("{base}/{path_and_query}")
    }
}

/// `ANY /api/{*path}`: forward to the queue backend.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let method = req.method().clone();
    let path_and_query = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_owned(), |pq| pq.as_str().to_owned());
    let target = upstream_url(&state.config.queue_api_url, &path_and_query);
    let content_type = req.headers().get(CONTENT_TYPE).cloned();

    let body = axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::BadRequest(e.to_string()))?;

    let mut upstream = state.http.request(method.clone(), &target);
    if let Some(content_type) = content_type {
        upstream = upstream.header(CONTENT_TYPE, content_type);
    }
    if !body.is_empty() {
        upstream = upstream.body(body);
    }

    let resp = upstream.send().await.map_err(|e| {
        tracing::warn!(%method, %target, error = %e, "queue backend request failed");
        ProxyError::Upstream(e.to_string())
    })?;

    let status = resp.status();
    let content_type = resp.headers().get(CONTENT_TYPE).cloned();
    let bytes = resp.bytes().await.map_err(|e| {
        tracing::warn!(%method, %target, error = %e, "queue backend response unreadable");
        ProxyError::Upstream(e.to_string())
    })?;

    if !status.is_success() {
        tracing::debug!(%method, %target, status = status.as_u16(), "queue backend returned non-success");
    }

    let mut response = (status, Body::from(bytes)).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}
