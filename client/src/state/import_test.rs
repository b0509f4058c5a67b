use super::*;
use crate::state::test_fixtures::sample_config;

fn row(name: &str, room_type: &str, room: &str) -> ImportRow {
    ImportRow { name: name.to_owned(), room_type: room_type.to_owned(), room: room.to_owned() }
}

fn template_xlsx(config: &ConfigState) -> Vec<u8> {
    build_template(config).to_xlsx().unwrap()
}

// =============================================================
// Template
// =============================================================

#[test]
fn template_has_both_sheets() {
    let wb = build_template(&sample_config());
    let names = wb.sheets.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec![TEMPLATE_SHEET, VALIDATION_SHEET]);
}

#[test]
fn template_examples_come_from_config() {
    let wb = build_template(&sample_config());
    let template = wb.sheet(TEMPLATE_SHEET).unwrap();
    assert_eq!(template.rows[0], vec![NAME_HEADER, ROOM_TYPE_HEADER, ROOM_HEADER, NOTES_HEADER]);
    assert_eq!(template.rows.len(), 3);
    assert_eq!(template.rows[1][1..3], ["MC".to_owned(), "R01".to_owned()]);
    assert_eq!(template.rows[2][1..3], ["SP".to_owned(), "R03".to_owned()]);
}

#[test]
fn template_headers_carry_notes() {
    let wb = build_template(&sample_config());
    let template = wb.sheet(TEMPLATE_SHEET).unwrap();
    assert_eq!(template.note_at(0, 0), Some("Enter patient's full name"));
    assert!(template.note_at(0, 1).unwrap().contains("valid room types"));
    assert!(template.note_at(0, 2).unwrap().contains("valid rooms"));
    assert_eq!(template.note_at(0, 3), None);
}

#[test]
fn validation_sheet_lists_codes_and_rooms() {
    let wb = build_template(&sample_config());
    let rows = &wb.sheet(VALIDATION_SHEET).unwrap().rows;
    assert!(rows.contains(&vec!["MC".to_owned(), "Medical Clearance".to_owned()]));
    assert!(rows.contains(&vec![String::new(), String::new(), "R09".to_owned(), "WA".to_owned()]));
}

#[test]
fn template_round_trip_maps_headers() {
    let config = sample_config();
    let rows = parse_upload(&template_xlsx(&config)).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], row("EXAMPLE: John Santos", "MC", "R01"));
    assert_eq!(rows[1], row("EXAMPLE: Maria Cruz", "SP", "R03"));
    assert!(ImportRules::from_config(&config).validate(&rows).is_empty());
}

#[test]
fn template_without_examples_yields_no_rows() {
    let mut wb = build_template(&sample_config());
    wb.sheets[0].rows.truncate(1);
    assert!(parse_upload(&wb.to_xlsx().unwrap()).unwrap().is_empty());
}

#[test]
fn csv_upload_is_still_accepted() {
    let rows = parse_upload(b"Patient Name,Room Type,Room Number\nAna,SP,R03\n").unwrap();
    assert_eq!(rows, vec![row("Ana", "SP", "R03")]);
}

#[test]
fn empty_config_template_has_header_only() {
    let wb = build_template(&ConfigState::default());
    assert_eq!(wb.sheet(TEMPLATE_SHEET).unwrap().rows.len(), 1);
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn missing_columns_become_empty_fields() {
    let rows = parse_upload(b"Patient Name,Notes\nAna,hi\n").unwrap();
    assert_eq!(rows, vec![row("Ana", "", "")]);
}

#[test]
fn empty_upload_is_an_error() {
    assert!(parse_upload(b"").is_err());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_rows_produce_no_errors() {
    let rules = ImportRules::from_config(&sample_config());
    assert!(rules.validate(&[row("Ana", "MC", "R01"), row("Ben", "WA", "R09")]).is_empty());
}

#[test]
fn each_violated_rule_is_reported_with_sheet_row() {
    let rules = ImportRules::from_config(&sample_config());
    let errors = rules.validate(&[row("Ana", "MC", "R01"), row("  ", "XX", "R99")]);
    assert_eq!(
        errors,
        vec![
            "Row 3: Invalid or missing patient name".to_owned(),
            "Row 3: Invalid room type. Must be one of: MC, SP, WA".to_owned(),
            "Row 3: Invalid room number. Must be one of: R01, R02, R03, R09".to_owned(),
        ]
    );
}

#[test]
fn errors_are_collected_across_rows() {
    let rules = ImportRules::from_config(&sample_config());
    let errors = rules.validate(&[row("", "MC", "R01"), row("Ben", "MC", "R01"), row("Cy", "MC", "")]);
    assert_eq!(errors.len(), 2);
    assert!(errors[0].starts_with("Row 2:"));
    assert!(errors[1].starts_with("Row 4:"));
}

#[test]
fn prepare_blocks_invalid_batch() {
    let mut state = ImportState { config: sample_config(), ..ImportState::default() };
    let results = state.prepare(&[row("", "MC", "R01")]).unwrap_err();
    assert_eq!(results.success, 0);
    assert_eq!(results.errors.len(), 1);
    assert!(state.preview.is_none());
}

#[test]
fn prepare_without_config_reports_it_instead_of_row_errors() {
    let mut state = ImportState::default();
    assert!(!state.has_config());
    let results = state.prepare(&[row("Ana", "MC", "R01")]).unwrap_err();
    assert_eq!(results.errors, vec![CONFIG_UNAVAILABLE.to_owned()]);
    assert!(state.preview.is_none());
}

#[test]
fn prepare_sets_preview_for_valid_batch() {
    let mut state = ImportState { config: sample_config(), ..ImportState::default() };
    state.prepare(&[row("Ana", "SP", "R03")]).unwrap();
    assert_eq!(state.preview.unwrap().rows.len(), 1);
}

// =============================================================
// Preview / results
// =============================================================

#[test]
fn preview_caps_rows_and_counts_rest() {
    let rows = (0..13).map(|i| row(&format!("P{i}"), "MC", "R01")).collect::<Vec<_>>();
    let preview = Preview::of(&rows);
    assert_eq!(preview.rows.len(), 10);
    assert_eq!(preview.more, Some(3));
    assert_eq!(preview.more_label().as_deref(), Some("... and 3 more rows"));
}

#[test]
fn preview_at_limit_has_no_more_label() {
    let rows = (0..10).map(|i| row(&format!("P{i}"), "MC", "R01")).collect::<Vec<_>>();
    let preview = Preview::of(&rows);
    assert_eq!(preview.rows.len(), 10);
    assert!(preview.more.is_none());
}

#[test]
fn failed_results_prefer_server_text() {
    assert_eq!(ImportResults::failed(None).errors, vec![IMPORT_FAILED.to_owned()]);
    assert_eq!(ImportResults::failed(Some("bad batch")).errors, vec!["bad batch".to_owned()]);
}

#[test]
fn batch_response_becomes_results() {
    let results = ImportResults::from(ImportBatchResponse { success: 4, errors: vec!["Row 3: dup".to_owned()] });
    assert_eq!(results.summary(), "Successfully imported: 4 records");
    assert_eq!(results.errors.len(), 1);
}
