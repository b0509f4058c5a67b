//! Operator console state for one room.
//!
//! DESIGN
//! ======
//! Every action is "write, then full refresh, then notify". The state here
//! decides what to write (which number to call or complete) and what to
//! tell the operator; the page performs the requests. Nothing is updated
//! optimistically: the snapshot and history only change when a refresh
//! lands.

#[cfg(test)]
#[path = "operation_test.rs"]
mod operation_test;

use crate::net::api::ApiError;
use crate::net::types::{CallStatus, QueueEntry, QueueSnapshot, RoomConfig, RoomTypes};
use crate::util::queue_number::{QueueNumberError, format_queue_number};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// Message shown in the non-blocking notification modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Info }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Error }
    }

    pub fn called(number: &str) -> Self {
        Self::info(format!("Called number {number}"))
    }

    pub fn call_failed(err: &ApiError) -> Self {
        Self::error(format!("Error calling patient: {err}"))
    }

    pub fn call_next_failed(err: &ApiError) -> Self {
        Self::error(format!("Error calling next patient: {err}"))
    }

    pub fn completed(number: &str) -> Self {
        Self::info(format!("Completed service for {number}"))
    }

    pub fn complete_failed(err: &ApiError) -> Self {
        Self::error(format!("Error completing service: {err}"))
    }

    pub fn init_failed(err: &ApiError) -> Self {
        Self::error(format!("Error initializing room operations: {err}"))
    }

    pub fn queue_empty() -> Self {
        Self::info("No patients in queue")
    }

    pub fn no_current() -> Self {
        Self::info("No current patient")
    }
}

impl From<QueueNumberError> for Notification {
    fn from(err: QueueNumberError) -> Self {
        Self::error(err.to_string())
    }
}

/// Entry in the manual-call type selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeOption {
    pub code: String,
    pub label: String,
    pub selected: bool,
}

/// One row of the recent-calls table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    pub number: String,
    pub call_time: String,
    pub status: CallStatus,
    /// Recall/Complete buttons are offered only while the entry is `Called`.
    pub actionable: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperationState {
    pub room_id: String,
    pub room: Option<RoomConfig>,
    pub room_types: RoomTypes,
    pub snapshot: QueueSnapshot,
    pub history: Vec<QueueEntry>,
    /// Type code chosen in the manual-call selector.
    pub manual_type: String,
    /// Raw sequence typed by the operator.
    pub manual_input: String,
    pub notification: Option<Notification>,
}

impl OperationState {
    pub fn new(room_id: impl Into<String>) -> Self {
        Self { room_id: room_id.into(), ..Self::default() }
    }

    /// Store the initial config and preselect the room's own type.
    pub fn initialized(&mut self, room: RoomConfig, room_types: RoomTypes) {
        self.manual_type = room.room_type.clone();
        self.room = Some(room);
        self.room_types = room_types;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn dismiss(&mut self) {
        self.notification = None;
    }

    pub fn title(&self) -> String {
        format!("Room {} Operations", self.room_id)
    }

    pub fn type_name(&self) -> &str {
        self.room.as_ref().map_or("", |room| room.type_name.as_str())
    }

    pub fn theme_color(&self) -> &str {
        self.room.as_ref().map_or("", |room| room.color.as_str())
    }

    /// Manual-call options as `code: English label`, ordered by code.
    pub fn type_options(&self) -> Vec<TypeOption> {
        self.room_types
            .iter()
            .map(|(code, info)| TypeOption {
                code: code.clone(),
                label: format!("{code}: {}", info.en),
                selected: *code == self.manual_type,
            })
            .collect()
    }

    /// Number to call for "call next" given a freshly fetched snapshot.
    ///
    /// # Errors
    ///
    /// Returns the "No patients in queue" notification when the queue is
    /// empty.
    pub fn next_to_call(fresh: &QueueSnapshot) -> Result<String, Notification> {
        fresh
            .next
            .first()
            .map(|entry| entry.number.clone())
            .ok_or_else(Notification::queue_empty)
    }

    /// Number to complete for "complete current".
    ///
    /// # Errors
    ///
    /// Returns the "No current patient" notification when nobody is being
    /// served.
    pub fn current_to_complete(&self) -> Result<String, Notification> {
        self.snapshot
            .current_number()
            .map(str::to_owned)
            .ok_or_else(Notification::no_current)
    }

    /// Build the manual-call queue number from the selector and input.
    ///
    /// # Errors
    ///
    /// Returns a notification for empty or non-numeric input.
    pub fn manual_number(&self) -> Result<String, Notification> {
        format_queue_number(&self.manual_type, &self.manual_input).map_err(Notification::from)
    }

    /// Clear the manual input after a successful manual call.
    pub fn manual_call_succeeded(&mut self) {
        self.manual_input.clear();
    }

    /// Apply one poll round. Each half is applied on its own, so a failed
    /// queue fetch keeps the last snapshot while fresh history still lands
    /// (and vice versa). Returns the console warnings for the failed halves.
    pub fn refreshed(
        &mut self,
        snapshot: Result<QueueSnapshot, ApiError>,
        history: Result<Vec<QueueEntry>, ApiError>,
    ) -> Vec<String> {
        let mut warnings = Vec::new();
        match snapshot {
            Ok(snapshot) => self.snapshot = snapshot,
            Err(e) => warnings.push(format!("Error updating display: {e}")),
        }
        match history {
            Ok(history) => self.history = history,
            Err(e) => warnings.push(format!("Error updating history: {e}")),
        }
        warnings
    }

    /// History table rows with call times rendered by `format_time`.
    pub fn history_rows(&self, format_time: impl Fn(&str) -> String) -> Vec<HistoryRow> {
        self.history
            .iter()
            .map(|entry| HistoryRow {
                number: entry.number.clone(),
                call_time: entry.call_time.as_deref().map(&format_time).unwrap_or_default(),
                status: entry.status,
                actionable: entry.status == CallStatus::Called,
            })
            .collect()
    }
}
