use super::*;
use crate::state::test_fixtures::sample_config;

fn state() -> RegistrationState {
    RegistrationState { room_types: sample_config().room_types, ..RegistrationState::default() }
}

#[test]
fn starts_idle_in_english() {
    let s = state();
    assert_eq!(s.phase, RegistrationPhase::Idle);
    assert_eq!(s.lang, Lang::En);
    assert!(s.selected().is_none());
}

#[test]
fn submit_without_service_is_blocked_first() {
    let mut s = state();
    s.name = "   ".to_owned();
    assert_eq!(s.begin_submit(), Err(RegistrationError::NoService));
    assert_eq!(s.phase, RegistrationPhase::Idle);
}

#[test]
fn submit_with_blank_name_is_blocked() {
    let mut s = state();
    s.select("MC");
    s.name = "  \t".to_owned();
    assert_eq!(s.begin_submit(), Err(RegistrationError::EmptyName));
    assert_eq!(s.phase, RegistrationPhase::ServiceSelected { code: "MC".to_owned() });
}

#[test]
fn valid_submit_trims_name_and_enters_submitting() {
    let mut s = state();
    s.select("SP");
    s.name = "  Maria Cruz ".to_owned();
    let req = s.begin_submit().unwrap();
    assert_eq!(req, RegisterRequest { name: "Maria Cruz".to_owned(), room_type: "SP".to_owned() });
    assert!(s.is_submitting());
    assert_eq!(s.begin_submit(), Err(RegistrationError::Busy));
}

#[test]
fn selection_is_frozen_while_submitting() {
    let mut s = state();
    s.select("SP");
    s.name = "Ana".to_owned();
    s.begin_submit().unwrap();
    s.select("MC");
    assert_eq!(s.selected(), Some("SP"));
}

#[test]
fn failure_returns_to_service_selected() {
    let mut s = state();
    s.select("WA");
    s.name = "Ben".to_owned();
    s.begin_submit().unwrap();
    s.submit_failed();
    assert_eq!(s.phase, RegistrationPhase::ServiceSelected { code: "WA".to_owned() });
    assert_eq!(s.name, "Ben");
}

#[test]
fn success_uses_refetched_style_then_close_resets() {
    let mut s = state();
    s.select("MC");
    s.name = "Juan".to_owned();
    s.begin_submit().unwrap();

    let mut fresh = sample_config().room_types;
    if let Some(mc) = fresh.get_mut("MC") {
        mc.color = "#000000".to_owned();
    }
    s.submit_succeeded("MC012".to_owned(), Some(fresh));

    match &s.phase {
        RegistrationPhase::Success { queue_number, service, .. } => {
            assert_eq!(queue_number, "MC012");
            assert_eq!(service.as_ref().map(|t| t.color.as_str()), Some("#000000"));
        }
        other => panic!("unexpected phase {other:?}"),
    }

    s.close_modal();
    assert_eq!(s.phase, RegistrationPhase::Idle);
    assert!(s.name.is_empty());
    assert!(s.selected().is_none());
}

#[test]
fn success_without_refetch_falls_back_to_loaded_config() {
    let mut s = state();
    s.select("SP");
    s.name = "Ana".to_owned();
    s.begin_submit().unwrap();
    s.submit_succeeded("SP001".to_owned(), None);
    match &s.phase {
        RegistrationPhase::Success { service, .. } => {
            assert_eq!(service.as_ref().map(|t| t.en.as_str()), Some("Scheduled Patient"));
        }
        other => panic!("unexpected phase {other:?}"),
    }
}

#[test]
fn language_switch_does_not_change_request() {
    let mut s = state();
    s.lang = Lang::Tl;
    s.select("MC");
    s.name = "Juan".to_owned();
    let req = s.begin_submit().unwrap();
    assert_eq!(req.room_type, "MC");
    assert_eq!(RegistrationError::EmptyName.message(Lang::Tl), "Mangyaring ilagay ang iyong pangalan");
}
