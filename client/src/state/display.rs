//! Public room display state.
//!
//! DESIGN
//! ======
//! The display polls the room queue and must alert (sound plus a timed
//! highlight) exactly once per distinct "now serving" change. The tracker
//! compares each snapshot against the last number it saw; identical polls
//! are no-ops. Highlights carry a sequence number so a timer started for an
//! older change cannot clear a newer highlight.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::net::types::{QueueEntry, QueueSnapshot, RoomConfig};

/// Placeholder rendered when the room has no current patient.
pub const NO_CURRENT: &str = "---";
pub const LOAD_ERROR_TITLE: &str = "Error Loading Room Display";

/// Remembers the last displayed current number.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentNumberTracker {
    last: Option<String>,
}

impl CurrentNumberTracker {
    /// Feed the latest current number; returns `true` when it differs from
    /// the previous one and should trigger an alert.
    ///
    /// An absent number resets the tracker without firing, so the same
    /// patient called again after an empty gap alerts again.
    pub fn observe(&mut self, current: Option<&str>) -> bool {
        match current {
            None => {
                self.last = None;
                false
            }
            Some(number) if self.last.as_deref() == Some(number) => false,
            Some(number) => {
                self.last = Some(number.to_owned());
                true
            }
        }
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

/// One "next" card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NextCard {
    pub number: String,
    pub name: String,
}

impl From<&QueueEntry> for NextCard {
    fn from(entry: &QueueEntry) -> Self {
        Self { number: entry.number.clone(), name: entry.name.clone() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub room: Option<RoomConfig>,
    pub load_failed: bool,
    pub snapshot: QueueSnapshot,
    tracker: CurrentNumberTracker,
    highlight_seq: u64,
    highlighted: bool,
    hidden: bool,
}

impl DisplayState {
    /// Record the room config. Returns whether polling should start now: a
    /// display opened in a background tab waits until it becomes visible.
    pub fn room_loaded(&mut self, room: RoomConfig, hidden: bool) -> bool {
        self.room = Some(room);
        self.load_failed = false;
        self.hidden = hidden;
        !hidden
    }

    /// Record a page visibility change. Returns `Some(true)` to resume
    /// polling, `Some(false)` to pause it, and `None` while the room is not
    /// loaded yet (nothing to poll).
    pub fn visibility_changed(&mut self, hidden: bool) -> Option<bool> {
        self.hidden = hidden;
        self.room.as_ref().map(|_| !hidden)
    }

    pub fn room_failed(&mut self) {
        self.room = None;
        self.load_failed = true;
    }

    /// Heading text: room name, the load error, or empty while loading.
    pub fn title(&self) -> &str {
        match (&self.room, self.load_failed) {
            (Some(room), _) => &room.name,
            (None, true) => LOAD_ERROR_TITLE,
            (None, false) => "",
        }
    }

    pub fn type_name(&self) -> &str {
        self.room.as_ref().map_or("", |room| room.type_name.as_str())
    }

    /// Theme color for the room; `None` keeps the stylesheet default.
    pub fn theme_color(&self) -> Option<&str> {
        self.room.as_ref().map(|room| room.color.as_str()).filter(|c| !c.is_empty())
    }

    /// Replace the snapshot. Returns the highlight token when the current
    /// number changed; the caller plays the alert sound and schedules
    /// [`DisplayState::clear_highlight`] with that token.
    pub fn apply_snapshot(&mut self, snapshot: QueueSnapshot) -> Option<u64> {
        let changed = self.tracker.observe(snapshot.current_number());
        self.snapshot = snapshot;
        if !changed {
            return None;
        }
        self.highlight_seq += 1;
        self.highlighted = true;
        Some(self.highlight_seq)
    }

    /// Clear the highlight if `token` is still the latest one.
    pub fn clear_highlight(&mut self, token: u64) {
        if token == self.highlight_seq {
            self.highlighted = false;
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn current_number(&self) -> &str {
        self.snapshot.current_number().unwrap_or(NO_CURRENT)
    }

    pub fn current_name(&self) -> &str {
        self.snapshot.current.as_ref().map_or("", |entry| entry.name.as_str())
    }

    pub fn next_cards(&self) -> Vec<NextCard> {
        self.snapshot.next.iter().map(NextCard::from).collect()
    }
}
