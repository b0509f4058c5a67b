//! Shared sample data for state tests.

use crate::net::types::{QueueEntry, RoomInfo, RoomType};
use crate::state::config::ConfigState;

fn room_type(en: &str, tl: &str, color: &str) -> RoomType {
    RoomType {
        en: en.to_owned(),
        tl: tl.to_owned(),
        color: color.to_owned(),
        color_name: None,
        description_en: format!("{en} service"),
        description_tl: format!("Serbisyo: {tl}"),
    }
}

fn room(room_type: &str, name: &str) -> RoomInfo {
    RoomInfo { room_type: room_type.to_owned(), name: name.to_owned() }
}

pub fn sample_config() -> ConfigState {
    let room_types = [
        ("MC", room_type("Medical Clearance", "Medikal na Clearance", "#4299E1")),
        ("SP", room_type("Scheduled Patient", "Nakaiskedyul na Pasyente", "#48BB78")),
        ("WA", room_type("Walk-in Appointment", "Walk-in na Pasyente", "#F56565")),
    ]
    .into_iter()
    .map(|(code, t)| (code.to_owned(), t))
    .collect();
    let rooms = [
        ("R01", room("MC", "Room 1 / Kwarto 1")),
        ("R02", room("MC", "Room 2 / Kwarto 2")),
        ("R03", room("SP", "Room 3 / Kwarto 3")),
        ("R09", room("WA", "Room 9 / Kwarto 9")),
    ]
    .into_iter()
    .map(|(id, r)| (id.to_owned(), r))
    .collect();
    ConfigState::new(room_types, rooms)
}

pub fn entry(number: &str, name: &str) -> QueueEntry {
    QueueEntry { number: number.to_owned(), name: name.to_owned(), ..QueueEntry::default() }
}
