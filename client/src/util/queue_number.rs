//! Canonical queue-number formatting for operator manual calls.

#[cfg(test)]
#[path = "queue_number_test.rs"]
mod queue_number_test;

/// Minimum digit count of the sequence part.
pub const SEQUENCE_WIDTH: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueueNumberError {
    #[error("Please enter a queue number")]
    Empty,
    #[error("Queue number must contain digits only")]
    NotNumeric,
}

/// Build `<code><sequence>` with the sequence left-padded with zeros to at
/// least [`SEQUENCE_WIDTH`] digits. Longer sequences are kept intact.
///
/// # Errors
///
/// Rejects an empty sequence or one containing anything but ASCII digits.
pub fn format_queue_number(room_type: &str, sequence: &str) -> Result<String, QueueNumberError> {
    let sequence = sequence.trim();
    if sequence.is_empty() {
        return Err(QueueNumberError::Empty);
    }
    if !sequence.chars().all(|c| c.is_ascii_digit()) {
        return Err(QueueNumberError::NotNumeric);
    }
    Ok(format!("{room_type}{sequence:0>width$}", width = SEQUENCE_WIDTH))
}
