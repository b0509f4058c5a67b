//! Wire DTOs for the queue backend REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly (including the capitalized
//! `Number`/`Name`/`Status` keys on queue entries), so these types stay thin
//! and view models in `state` do the reshaping. Keyed maps use `BTreeMap`
//! so every render iterates room types and rooms in a stable order.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::util::i18n::Lang;

/// Service category metadata from `/api/config/room-types`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    /// English display name.
    pub en: String,
    /// Tagalog display name.
    pub tl: String,
    /// CSS color used for headings, borders and numbers.
    pub color: String,
    #[serde(default)]
    pub color_name: Option<String>,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_tl: String,
}

impl RoomType {
    pub fn label(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Tl => &self.tl,
        }
    }

    pub fn description(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.description_en,
            Lang::Tl => &self.description_tl,
        }
    }
}

/// Room-type code -> metadata.
pub type RoomTypes = BTreeMap<String, RoomType>;

/// Room metadata from `/api/config/rooms`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    #[serde(rename = "type")]
    pub room_type: String,
    #[serde(default)]
    pub name: String,
}

/// Room id -> metadata.
pub type Rooms = BTreeMap<String, RoomInfo>;

/// Resolved single-room config from `/api/config/room/{roomId}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfig {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub type_name: String,
    pub color: String,
}

/// Lifecycle status of a queue entry as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallStatus {
    #[default]
    Waiting,
    Called,
    Complete,
    #[serde(other)]
    Unknown,
}

impl CallStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Called => "Called",
            Self::Complete => "Complete",
            Self::Unknown => "Unknown",
        }
    }
}

/// One registration in a room-type queue.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Queue number, `<RoomTypeCode><zero-padded sequence>`.
    #[serde(rename = "Number")]
    pub number: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Status", default)]
    pub status: CallStatus,
    /// Server-formatted call timestamp; `null` until called.
    #[serde(rename = "CallTime", default)]
    pub call_time: Option<String>,
    #[serde(rename = "RoomType", default)]
    pub room_type: Option<String>,
    #[serde(rename = "CallRoom", default)]
    pub call_room: Option<String>,
}

/// Per-room queue view from `/api/queue/{roomId}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    #[serde(default)]
    pub current: Option<QueueEntry>,
    #[serde(default)]
    pub next: Vec<QueueEntry>,
}

impl QueueSnapshot {
    pub fn current_number(&self) -> Option<&str> {
        self.current.as_ref().map(|entry| entry.number.as_str())
    }
}

/// One room row inside a dashboard room-type group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStatus {
    #[serde(default)]
    pub room_id: Option<String>,
    pub room_name: String,
    #[serde(default)]
    pub current: Option<String>,
    #[serde(default)]
    pub waiting_count: u32,
    #[serde(default)]
    pub next: Vec<String>,
}

/// Dashboard group for one room type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTypeStatus {
    #[serde(default)]
    pub rooms: Vec<RoomStatus>,
    #[serde(default)]
    pub total_waiting: u32,
}

/// Room-type code -> dashboard group, from `/api/dashboard-status`.
pub type DashboardStatus = BTreeMap<String, RoomTypeStatus>;

/// `POST /api/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    #[serde(rename = "roomType")]
    pub room_type: String,
}

/// `POST /api/register` reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "queueNumber", default)]
    pub queue_number: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /api/call` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    #[serde(rename = "queueNumber")]
    pub queue_number: String,
    #[serde(rename = "roomId")]
    pub room_id: String,
}

/// `POST /api/complete` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompleteRequest {
    #[serde(rename = "queueNumber")]
    pub queue_number: String,
}

/// Generic write acknowledgement; `success: false` carries an `error`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One bulk-import row, keyed by the field names the backend expects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Room Type")]
    pub room_type: String,
    #[serde(rename = "Room")]
    pub room: String,
}

/// `POST /api/import-batch` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImportBatchRequest {
    pub data: Vec<ImportRow>,
}

/// `POST /api/import-batch` reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ImportBatchResponse {
    #[serde(default)]
    pub success: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}
