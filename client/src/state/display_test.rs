use super::*;
use crate::state::test_fixtures::entry;

fn snapshot(current: Option<&str>, next: &[&str]) -> QueueSnapshot {
    QueueSnapshot {
        current: current.map(|n| entry(n, "Juan")),
        next: next.iter().map(|n| entry(n, "Ana")).collect(),
    }
}

// =============================================================
// CurrentNumberTracker
// =============================================================

#[test]
fn tracker_fires_on_first_number() {
    let mut t = CurrentNumberTracker::default();
    assert!(t.observe(Some("MC001")));
    assert_eq!(t.last(), Some("MC001"));
}

#[test]
fn tracker_ignores_repeats() {
    let mut t = CurrentNumberTracker::default();
    assert!(t.observe(Some("MC001")));
    assert!(!t.observe(Some("MC001")));
    assert!(!t.observe(Some("MC001")));
}

#[test]
fn tracker_fires_once_per_distinct_change() {
    let mut t = CurrentNumberTracker::default();
    let fired = ["MC001", "MC001", "MC002", "MC002", "MC003"]
        .into_iter()
        .filter(|n| t.observe(Some(n)))
        .count();
    assert_eq!(fired, 3);
}

#[test]
fn tracker_absent_in_both_never_fires() {
    let mut t = CurrentNumberTracker::default();
    assert!(!t.observe(None));
    assert!(!t.observe(None));
}

#[test]
fn tracker_absent_resets_without_firing() {
    let mut t = CurrentNumberTracker::default();
    assert!(t.observe(Some("MC001")));
    assert!(!t.observe(None));
    assert_eq!(t.last(), None);
    assert!(t.observe(Some("MC001")));
}

// =============================================================
// DisplayState
// =============================================================

#[test]
fn identical_polls_do_not_rehighlight() {
    let mut s = DisplayState::default();
    assert_eq!(s.apply_snapshot(snapshot(Some("MC001"), &[])), Some(1));
    assert_eq!(s.apply_snapshot(snapshot(Some("MC001"), &[])), None);
    assert_eq!(s.apply_snapshot(snapshot(Some("MC001"), &["MC002"])), None);
    assert!(s.is_highlighted());
}

#[test]
fn stale_timer_does_not_cut_newer_highlight() {
    let mut s = DisplayState::default();
    let first = s.apply_snapshot(snapshot(Some("MC001"), &[])).unwrap();
    let second = s.apply_snapshot(snapshot(Some("MC002"), &[])).unwrap();
    s.clear_highlight(first);
    assert!(s.is_highlighted());
    s.clear_highlight(second);
    assert!(!s.is_highlighted());
}

#[test]
fn absent_current_renders_placeholder() {
    let mut s = DisplayState::default();
    s.apply_snapshot(snapshot(None, &[]));
    assert_eq!(s.current_number(), NO_CURRENT);
    assert_eq!(s.current_name(), "");
    assert!(s.next_cards().is_empty());
}

#[test]
fn next_cards_keep_queue_order() {
    let mut s = DisplayState::default();
    s.apply_snapshot(snapshot(Some("SP004"), &["SP005", "SP006"]));
    let cards = s.next_cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0], NextCard { number: "SP005".to_owned(), name: "Ana".to_owned() });
    assert_eq!(cards[1].number, "SP006");
    assert_eq!(s.current_number(), "SP004");
    assert_eq!(s.current_name(), "Juan");
}

#[test]
fn title_reflects_load_outcome() {
    let mut s = DisplayState::default();
    assert_eq!(s.title(), "");
    s.room_failed();
    assert_eq!(s.title(), LOAD_ERROR_TITLE);
    assert!(s.theme_color().is_none());

    assert!(s.room_loaded(room_one(), false));
    assert_eq!(s.title(), "Room 1 / Kwarto 1");
    assert_eq!(s.type_name(), "Medical Clearance");
    assert_eq!(s.theme_color(), Some("#4299E1"));
}

fn room_one() -> RoomConfig {
    RoomConfig {
        id: "R01".to_owned(),
        name: "Room 1 / Kwarto 1".to_owned(),
        room_type: "MC".to_owned(),
        type_name: "Medical Clearance".to_owned(),
        color: "#4299E1".to_owned(),
    }
}

// =============================================================================
// Visibility
// =============================================================================

#[test]
fn loading_in_a_hidden_tab_defers_polling() {
    let mut s = DisplayState::default();
    assert!(!s.room_loaded(room_one(), true));
    assert_eq!(s.visibility_changed(false), Some(true));
    assert_eq!(s.visibility_changed(true), Some(false));
}

#[test]
fn visibility_before_load_does_not_start_polling() {
    let mut s = DisplayState::default();
    assert_eq!(s.visibility_changed(false), None);
    assert_eq!(s.visibility_changed(true), None);
    assert!(!s.room_loaded(room_one(), true));
}
