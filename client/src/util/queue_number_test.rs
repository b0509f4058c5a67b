use super::*;

#[test]
fn pads_single_digit_to_three() {
    assert_eq!(format_queue_number("MC", "7"), Ok("MC007".to_owned()));
}

#[test]
fn keeps_three_digit_sequence() {
    assert_eq!(format_queue_number("SP", "123"), Ok("SP123".to_owned()));
}

#[test]
fn never_truncates_long_sequences() {
    assert_eq!(format_queue_number("WA", "1234"), Ok("WA1234".to_owned()));
}

#[test]
fn already_padded_input_is_stable() {
    assert_eq!(format_queue_number("OP", "007"), Ok("OP007".to_owned()));
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(format_queue_number("RQ", " 42 "), Ok("RQ042".to_owned()));
}

#[test]
fn rejects_empty_sequence() {
    assert_eq!(format_queue_number("MC", "  "), Err(QueueNumberError::Empty));
    assert_eq!(QueueNumberError::Empty.to_string(), "Please enter a queue number");
}

#[test]
fn rejects_non_digit_sequence() {
    assert_eq!(format_queue_number("MC", "7a"), Err(QueueNumberError::NotNumeric));
    assert_eq!(format_queue_number("MC", "-7"), Err(QueueNumberError::NotNumeric));
}
