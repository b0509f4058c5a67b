//! REST API helpers for communicating with the queue backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and unit tests: stubs returning
//! [`ApiError::Unavailable`], since polling only makes sense in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. Non-2xx replies are turned into
//! [`ApiError::Status`] carrying the backend's `error` text when the body has
//! one, so views can surface business failures verbatim. No request is retried
//! or cancelled here; the caller's poll loop decides what happens next.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    DashboardStatus, ImportBatchResponse, ImportRow, QueueEntry, QueueSnapshot, RoomConfig, RoomTypes, Rooms,
};
use crate::state::config::ConfigState;

pub const ROOM_TYPES_ENDPOINT: &str = "/api/config/room-types";
pub const ROOMS_ENDPOINT: &str = "/api/config/rooms";
pub const DASHBOARD_STATUS_ENDPOINT: &str = "/api/dashboard-status";
pub const REGISTER_ENDPOINT: &str = "/api/register";
pub const CALL_ENDPOINT: &str = "/api/call";
pub const COMPLETE_ENDPOINT: &str = "/api/complete";
pub const IMPORT_BATCH_ENDPOINT: &str = "/api/import-batch";

/// Failure of a backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, etc.).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("{}", status_display(*.status, .message.as_deref()))]
    Status { status: u16, message: Option<String> },

    /// The backend answered 2xx but flagged the operation as unsuccessful.
    #[error("{0}")]
    Rejected(String),

    /// The response body did not match the expected schema.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// The backend-supplied error text, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Rejected(message) => Some(message),
            _ => None,
        }
    }
}

fn status_display(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) => message.to_owned(),
        None => format!("request failed: {status}"),
    }
}

/// Build a [`ApiError::Status`] from a non-2xx status and its raw body.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(|e| e.as_str()).map(str::to_owned));
    ApiError::Status { status, message }
}

#[cfg(any(test, feature = "hydrate"))]
fn room_config_endpoint(room_id: &str) -> String {
    format!("/api/config/room/{room_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn queue_endpoint(room_id: &str) -> String {
    format!("/api/queue/{room_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn recent_calls_endpoint(room_id: &str) -> String {
    format!("/api/recent-calls/{room_id}")
}

/// Interpret a register reply: success yields the assigned queue number.
#[cfg(any(test, feature = "hydrate"))]
fn register_outcome(resp: super::types::RegisterResponse) -> Result<String, ApiError> {
    if !resp.success {
        return Err(ApiError::Rejected(resp.error.unwrap_or_else(|| "Registration failed".to_owned())));
    }
    resp.queue_number
        .ok_or_else(|| ApiError::Decode("missing queueNumber".to_owned()))
}

/// Interpret a write acknowledgement.
#[cfg(any(test, feature = "hydrate"))]
fn ack_outcome(ack: super::types::Ack) -> Result<(), ApiError> {
    match ack.success {
        Some(false) => Err(ApiError::Rejected(ack.error.unwrap_or_else(|| "request rejected".to_owned()))),
        _ => Ok(()),
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

/// Fetch room-type metadata from `/api/config/room-types`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_room_types() -> Result<RoomTypes, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(ROOM_TYPES_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch room metadata from `/api/config/rooms`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_rooms() -> Result<Rooms, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(ROOMS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch room types and rooms in parallel.
///
/// # Errors
///
/// Fails if either request fails; the first error wins.
pub async fn fetch_config() -> Result<ConfigState, ApiError> {
    let (room_types, rooms) = futures::join!(fetch_room_types(), fetch_rooms());
    Ok(ConfigState::new(room_types?, rooms?))
}

/// Fetch the resolved config of one room.
///
/// # Errors
///
/// Returns an [`ApiError`]; an unknown room comes back as a 404 status.
pub async fn fetch_room_config(room_id: &str) -> Result<RoomConfig, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&room_config_endpoint(room_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = room_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the aggregate dashboard status.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_dashboard_status() -> Result<DashboardStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(DASHBOARD_STATUS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the current/next snapshot of one room.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_queue(room_id: &str) -> Result<QueueSnapshot, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&queue_endpoint(room_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = room_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the recent call history of one room, newest first.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_recent_calls(room_id: &str) -> Result<Vec<QueueEntry>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&recent_calls_endpoint(room_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = room_id;
        Err(ApiError::Unavailable)
    }
}

/// Register a patient and return the assigned queue number.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] when the backend reports `success: false`.
pub async fn register(name: &str, room_type: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::RegisterRequest { name: name.to_owned(), room_type: room_type.to_owned() };
        let resp: super::types::RegisterResponse = post_json(REGISTER_ENDPOINT, &body).await?;
        register_outcome(resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, room_type);
        Err(ApiError::Unavailable)
    }
}

/// Call a queue number into a room.
///
/// # Errors
///
/// Returns an [`ApiError`]; a mismatched room type comes back as a 400 status
/// with the backend's explanation.
pub async fn call_number(queue_number: &str, room_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::CallRequest { queue_number: queue_number.to_owned(), room_id: room_id.to_owned() };
        let ack: super::types::Ack = post_json(CALL_ENDPOINT, &body).await?;
        ack_outcome(ack)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (queue_number, room_id);
        Err(ApiError::Unavailable)
    }
}

/// Mark a called queue number as complete.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn complete_number(queue_number: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::CompleteRequest { queue_number: queue_number.to_owned() };
        let ack: super::types::Ack = post_json(COMPLETE_ENDPOINT, &body).await?;
        ack_outcome(ack)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = queue_number;
        Err(ApiError::Unavailable)
    }
}

/// Submit a batch of validated import rows as one request.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure. Per-row
/// failures are not errors; they come back in [`ImportBatchResponse::errors`].
pub async fn import_batch(rows: &[ImportRow]) -> Result<ImportBatchResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::ImportBatchRequest { data: rows.to_vec() };
        post_json(IMPORT_BATCH_ENDPOINT, &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = rows;
        Err(ApiError::Unavailable)
    }
}
