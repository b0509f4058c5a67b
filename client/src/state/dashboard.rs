//! Dashboard view state and its panel view model.
//!
//! DESIGN
//! ======
//! Panels come from the room-type config (one per key) and are filled from
//! the latest dashboard status. Each refresh replaces `status` wholesale and
//! the panel list is rebuilt from scratch, so nothing from an older response
//! survives a newer one.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{DashboardStatus, RoomStatus};
use crate::state::config::ConfigState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub config: ConfigState,
    pub status: DashboardStatus,
}

/// One room row inside a panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomSummary {
    pub room_name: String,
    pub current: Option<String>,
    pub waiting_count: u32,
    pub next: Vec<String>,
}

impl From<&RoomStatus> for RoomSummary {
    fn from(room: &RoomStatus) -> Self {
        Self {
            room_name: room.room_name.clone(),
            current: room.current.clone(),
            waiting_count: room.waiting_count,
            next: room.next.clone(),
        }
    }
}

/// One room-type panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardPanel {
    pub code: String,
    pub title: String,
    pub subtitle: String,
    pub color: String,
    pub rooms: Vec<RoomSummary>,
}

impl DashboardState {
    /// Build exactly one panel per configured room type, in code order.
    ///
    /// Status groups for codes missing from the config are ignored.
    pub fn panels(&self) -> Vec<DashboardPanel> {
        self.config
            .room_types
            .iter()
            .map(|(code, info)| DashboardPanel {
                code: code.clone(),
                title: info.en.clone(),
                subtitle: info.tl.clone(),
                color: info.color.clone(),
                rooms: self
                    .status
                    .get(code)
                    .map(|group| group.rooms.iter().map(RoomSummary::from).collect())
                    .unwrap_or_default(),
            })
            .collect()
    }
}
