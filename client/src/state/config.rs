//! Room-type and room metadata loaded once per page view.
//!
//! The backend is authoritative; this is a read-only copy fetched fresh on
//! every page load. An empty state is the degraded mode after a failed load.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::types::{RoomInfo, RoomType, RoomTypes, Rooms};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigState {
    pub room_types: RoomTypes,
    pub rooms: Rooms,
}

impl ConfigState {
    pub fn new(room_types: RoomTypes, rooms: Rooms) -> Self {
        Self { room_types, rooms }
    }

    pub fn is_empty(&self) -> bool {
        self.room_types.is_empty() && self.rooms.is_empty()
    }

    pub fn room_type(&self, code: &str) -> Option<&RoomType> {
        self.room_types.get(code)
    }

    pub fn room_type_codes(&self) -> impl Iterator<Item = &str> {
        self.room_types.keys().map(String::as_str)
    }

    pub fn room_ids(&self) -> impl Iterator<Item = &str> {
        self.rooms.keys().map(String::as_str)
    }

    /// Rooms serving `code`, ordered by room id.
    pub fn rooms_of_type<'a>(&'a self, code: &'a str) -> impl Iterator<Item = (&'a str, &'a RoomInfo)> + 'a {
        self.rooms
            .iter()
            .filter(move |(_, info)| info.room_type == code)
            .map(|(id, info)| (id.as_str(), info))
    }
}
