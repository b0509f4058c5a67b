//! Public "now serving" screen for one room.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs unattended on a room monitor. Polling pauses while the tab is hidden
//! and resumes with an immediate refresh when it becomes visible again. A
//! change of the current number plays the alert sound and highlights the
//! number for a few seconds.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::config::{ALERT_SOUND_SRC, POLL_INTERVAL};
use crate::net::api;
use crate::state::display::DisplayState;
use crate::util::browser;
use crate::util::poll::PollSession;

#[component]
pub fn RoomDisplayPage() -> impl IntoView {
    let params = use_params_map();
    let room_id = params.with_untracked(|p| p.get("room_id")).unwrap_or_default();
    let state = RwSignal::new(DisplayState::default());

    let tick_room = room_id.clone();
    let session = PollSession::start(POLL_INTERVAL, move || refresh(state, tick_room.clone()));
    let poll = session.handle();
    poll.pause();
    on_cleanup(move || drop(session));

    #[cfg(feature = "hydrate")]
    {
        let visibility_poll = poll.clone();
        let listener = window_event_listener(leptos::ev::visibilitychange, move |_| {
            match state.try_update(|s| s.visibility_changed(browser::document_hidden())).flatten() {
                Some(true) => visibility_poll.resume(),
                Some(false) => visibility_poll.pause(),
                None => {}
            }
        });
        on_cleanup(move || listener.remove());

        leptos::task::spawn_local(async move {
            match api::fetch_room_config(&room_id).await {
                Ok(room) => {
                    let hidden = browser::document_hidden();
                    if state.try_update(|s| s.room_loaded(room, hidden)).unwrap_or(false) {
                        poll.resume();
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("Error initializing display: {e}");
                    crate::util::signal::update_live(state, DisplayState::room_failed);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    drop((poll, room_id));

    let theme = move || {
        state.with(|s| s.theme_color().map(|c| format!("--theme-color: {c}")).unwrap_or_default())
    };
    let number_style = move || {
        state.with(|s| match (s.snapshot.current.is_some(), s.theme_color()) {
            (true, Some(color)) => format!("color: {color}"),
            _ => String::new(),
        })
    };

    view! {
        <div class="display-page" style=theme>
            <header class="display-page__header">
                <h1 class="display-page__room">{move || state.with(|s| s.title().to_owned())}</h1>
                <p class="display-page__type">{move || state.with(|s| s.type_name().to_owned())}</p>
            </header>

            <section class="now-serving">
                <p class="now-serving__label">"Now Serving"</p>
                <p
                    class="now-serving__number"
                    class:blink=move || state.with(DisplayState::is_highlighted)
                    style=number_style
                >
                    {move || state.with(|s| s.current_number().to_owned())}
                </p>
                <p class="now-serving__name">{move || state.with(|s| s.current_name().to_owned())}</p>
            </section>

            <section class="up-next">
                <h2 class="up-next__label">"Next"</h2>
                <div class="up-next__cards">
                    {move || {
                        let cards = state.with(DisplayState::next_cards);
                        if cards.is_empty() {
                            view! { <p class="up-next__empty">"No patients waiting"</p> }.into_any()
                        } else {
                            cards
                                .into_iter()
                                .map(|card| {
                                    view! {
                                        <div class="next-card">
                                            <span class="next-card__number">{card.number}</span>
                                            <span class="next-card__name">{card.name}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>
            </section>
        </div>
    }
}

async fn refresh(state: RwSignal<DisplayState>, room_id: String) {
    if state.try_with_untracked(|s| s.room.is_none()).unwrap_or(true) {
        return;
    }
    match api::fetch_queue(&room_id).await {
        Ok(snapshot) => {
            if let Some(Some(token)) = state.try_update(|s| s.apply_snapshot(snapshot)) {
                browser::play_sound(ALERT_SOUND_SRC);
                clear_highlight_later(state, token);
            }
        }
        Err(e) => leptos::logging::warn!("Error updating display: {e}"),
    }
}

fn clear_highlight_later(state: RwSignal<DisplayState>, token: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(crate::config::HIGHLIGHT_DURATION).await;
        crate::util::signal::update_live(state, |s| s.clear_highlight(token));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, token);
    }
}
