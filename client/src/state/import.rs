//! Bulk import: template generation, sheet parsing, validation and preview.
//!
//! DESIGN
//! ======
//! The template and the validation rules are both derived from the config
//! fetched from the backend, so the allowed codes always match it.
//! Validation is all-or-nothing: any violation blocks the whole batch and
//! every violation is reported. Room/type consistency per row is left to the
//! backend, which reports it in the batch response.

#[cfg(test)]
#[path = "import_test.rs"]
mod import_test;

use std::collections::BTreeSet;

use crate::config::IMPORT_PREVIEW_LIMIT;
use crate::net::types::{ImportBatchResponse, ImportRow};
use crate::state::config::ConfigState;
use crate::util::sheet::{Record, Sheet, SheetError, Workbook, decode_records};

pub const TEMPLATE_SHEET: &str = "Template";
pub const VALIDATION_SHEET: &str = "Validation";

pub const NAME_HEADER: &str = "Patient Name";
pub const ROOM_TYPE_HEADER: &str = "Room Type";
pub const ROOM_HEADER: &str = "Room Number";
pub const NOTES_HEADER: &str = "Notes";

const EXAMPLE_NAMES: [&str; 2] = ["EXAMPLE: John Santos", "EXAMPLE: Maria Cruz"];
const EXAMPLE_NOTE: &str = "Example data - please delete";

pub const READ_ERROR_ALERT: &str =
    "Error reading file. Please make sure you are using the correct template format.";
pub const NO_FILE_ALERT: &str = "Please select a file to import";
pub const IMPORT_FAILED: &str = "Import failed";
pub const CONFIG_UNAVAILABLE: &str =
    "Room configuration could not be loaded, so rows cannot be checked. Please reload the page and try again.";

const NAME_NOTE: &str = "Enter patient's full name";
const ROOM_TYPE_NOTE: &str = "Must be one of the valid room types from Validation sheet";
const ROOM_NOTE: &str = "Must be one of the valid rooms from Validation sheet";

/// Build the downloadable template workbook.
///
/// The `Template` sheet holds the headers (with notes explaining each
/// column) plus up to two example rows, each pointing at the first room of a
/// distinct room type. The `Validation` sheet lists the accepted room-type
/// codes and room ids.
pub fn build_template(config: &ConfigState) -> Workbook {
    let mut template = Sheet::new(TEMPLATE_SHEET);
    template.push_row([NAME_HEADER, ROOM_TYPE_HEADER, ROOM_HEADER, NOTES_HEADER]);
    template.column_widths = vec![30, 15, 15, 40];
    template.add_note(0, 0, NAME_NOTE);
    template.add_note(0, 1, ROOM_TYPE_NOTE);
    template.add_note(0, 2, ROOM_NOTE);
    let examples = config
        .room_type_codes()
        .filter_map(|code| config.rooms_of_type(code).next().map(|(room_id, _)| (code, room_id)));
    for (name, (code, room_id)) in EXAMPLE_NAMES.iter().zip(examples) {
        template.push_row([*name, code, room_id, EXAMPLE_NOTE]);
    }

    let mut validation = Sheet::new(VALIDATION_SHEET);
    validation.column_widths = vec![15, 30, 15, 15];
    validation.push_row(["Valid Room Types:", "", "Valid Rooms:", ""]);
    validation.push_row(["Code", "Description", "Room", "Type"]);
    for (code, info) in &config.room_types {
        validation.push_row([code.as_str(), info.en.as_str()]);
    }
    validation.push_row(["", ""]);
    for (room_id, info) in &config.rooms {
        validation.push_row(["", "", room_id.as_str(), info.room_type.as_str()]);
    }

    Workbook { sheets: vec![template, validation] }
}

/// Remap header-keyed records to backend import rows. Missing cells become
/// empty strings and fail validation.
pub fn rows_from_records(records: Vec<Record>) -> Vec<ImportRow> {
    records
        .into_iter()
        .map(|mut record| ImportRow {
            name: record.remove(NAME_HEADER).unwrap_or_default(),
            room_type: record.remove(ROOM_TYPE_HEADER).unwrap_or_default(),
            room: record.remove(ROOM_HEADER).unwrap_or_default(),
        })
        .collect()
}

/// Parse an uploaded workbook (first sheet) or CSV file into import rows.
///
/// # Errors
///
/// Returns the codec error for empty or malformed input.
pub fn parse_upload(bytes: &[u8]) -> Result<Vec<ImportRow>, SheetError> {
    decode_records(bytes).map(rows_from_records)
}

/// Allowed room-type codes and room ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportRules {
    pub room_types: BTreeSet<String>,
    pub rooms: BTreeSet<String>,
}

impl ImportRules {
    pub fn from_config(config: &ConfigState) -> Self {
        Self {
            room_types: config.room_type_codes().map(str::to_owned).collect(),
            rooms: config.room_ids().map(str::to_owned).collect(),
        }
    }

    /// Check every row, collecting one message per violated rule. Row numbers
    /// are sheet line numbers (index + 2, after the header).
    pub fn validate(&self, rows: &[ImportRow]) -> Vec<String> {
        let type_list = join(&self.room_types);
        let room_list = join(&self.rooms);
        let mut errors = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            let line = index + 2;
            if row.name.trim().is_empty() {
                errors.push(format!("Row {line}: Invalid or missing patient name"));
            }
            if !self.room_types.contains(&row.room_type) {
                errors.push(format!("Row {line}: Invalid room type. Must be one of: {type_list}"));
            }
            if !self.rooms.contains(&row.room) {
                errors.push(format!("Row {line}: Invalid room number. Must be one of: {room_list}"));
            }
        }
        errors
    }
}

fn join(set: &BTreeSet<String>) -> String {
    set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Preview table content: the first rows plus a count of the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preview {
    pub rows: Vec<ImportRow>,
    pub more: Option<usize>,
}

impl Preview {
    pub fn of(rows: &[ImportRow]) -> Self {
        let shown = rows.iter().take(IMPORT_PREVIEW_LIMIT).cloned().collect();
        let more = rows.len().checked_sub(IMPORT_PREVIEW_LIMIT).filter(|n| *n > 0);
        Self { rows: shown, more }
    }

    pub fn more_label(&self) -> Option<String> {
        self.more.map(|n| format!("... and {n} more rows"))
    }
}

/// Outcome shown in the results panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportResults {
    pub success: u32,
    pub errors: Vec<String>,
}

impl ImportResults {
    pub fn rejected(errors: Vec<String>) -> Self {
        Self { success: 0, errors }
    }

    /// Results for a request that never produced a batch response.
    pub fn failed(server_message: Option<&str>) -> Self {
        Self::rejected(vec![server_message.unwrap_or(IMPORT_FAILED).to_owned()])
    }

    pub fn summary(&self) -> String {
        format!("Successfully imported: {} records", self.success)
    }
}

impl From<ImportBatchResponse> for ImportResults {
    fn from(resp: ImportBatchResponse) -> Self {
        Self { success: resp.success, errors: resp.errors }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportState {
    pub config: ConfigState,
    pub preview: Option<Preview>,
    pub results: Option<ImportResults>,
    pub importing: bool,
}

impl ImportState {
    pub fn rules(&self) -> ImportRules {
        ImportRules::from_config(&self.config)
    }

    /// Whether the allow-sets are known. Without them every row would be
    /// reported invalid.
    pub fn has_config(&self) -> bool {
        !self.config.is_empty()
    }

    /// Validate parsed rows for import.
    ///
    /// # Errors
    ///
    /// Returns the [`ImportResults`] to display when the room config is
    /// missing or any row is invalid; no request should be sent in that case.
    pub fn prepare(&mut self, rows: &[ImportRow]) -> Result<(), ImportResults> {
        if !self.has_config() {
            return Err(ImportResults::rejected(vec![CONFIG_UNAVAILABLE.to_owned()]));
        }
        let errors = self.rules().validate(rows);
        if !errors.is_empty() {
            return Err(ImportResults::rejected(errors));
        }
        self.preview = Some(Preview::of(rows));
        Ok(())
    }
}
