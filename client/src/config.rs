//! Client-side tuning constants.

use std::time::Duration;

/// Refresh cadence of every polling view.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// How long the room display highlights a newly called number.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_secs(5);

/// Alert sound played on the room display when the current number changes.
pub const ALERT_SOUND_SRC: &str = "/assets/alert.mp3";

/// Rows shown in the import preview before the "more rows" notice.
pub const IMPORT_PREVIEW_LIMIT: usize = 10;

/// Download name for the generated import template workbook.
pub const TEMPLATE_FILE_NAME: &str = "queue_import_template.xlsx";
