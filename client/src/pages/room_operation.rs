//! Operator console for one room.
//!
//! SYSTEM CONTEXT
//! ==============
//! Staff call patients into the room and mark them complete. Each action
//! writes to the backend, re-polls the queue and history, then reports the
//! outcome in a notification modal. Concurrent operators are not
//! coordinated; the next poll shows whatever the backend decided.

use std::future::Future;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::history_table::HistoryTable;
use crate::components::notification_modal::NotificationModal;
use crate::config::POLL_INTERVAL;
use crate::net::api;
use crate::state::operation::{Notification, OperationState};
use crate::util::browser;
use crate::util::poll::PollSession;
use crate::util::signal::update_live;

#[component]
pub fn RoomOperationPage() -> impl IntoView {
    let params = use_params_map();
    let room_id = params.with_untracked(|p| p.get("room_id")).unwrap_or_default();
    let state = RwSignal::new(OperationState::new(room_id));

    let session = PollSession::start(POLL_INTERVAL, move || refresh(state));
    let poll = session.handle();
    poll.pause();
    on_cleanup(move || drop(session));

    spawn_action(async move {
        if initialize(state).await {
            poll.resume();
        }
    });

    let notification = Signal::derive(move || state.with(|s| s.notification.clone()));
    let on_dismiss = Callback::new(move |()| state.update(OperationState::dismiss));
    let on_recall = Callback::new(move |number: String| {
        spawn_action(async move {
            call_specific(state, number).await;
        });
    });
    let on_complete = Callback::new(move |number: String| spawn_action(complete_specific(state, number)));
    let history = Signal::derive(move || state.with(|s| s.history_rows(browser::format_call_time)));

    let on_complete_current = move |_| match state.with_untracked(OperationState::current_to_complete) {
        Ok(number) => spawn_action(complete_specific(state, number)),
        Err(notice) => state.update(|s| s.notify(notice)),
    };

    let on_manual = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match state.with_untracked(OperationState::manual_number) {
            Ok(number) => spawn_action(async move {
                if call_specific(state, number).await {
                    update_live(state, OperationState::manual_call_succeeded);
                }
            }),
            Err(notice) => state.update(|s| s.notify(notice)),
        }
    };

    view! {
        <div class="operation-page">
            <header class="page-header">
                <h1>{move || state.with(OperationState::title)}</h1>
                <p
                    class="operation-page__type"
                    style=move || state.with(|s| format!("color: {}", s.theme_color()))
                >
                    {move || state.with(|s| s.type_name().to_owned())}
                </p>
            </header>

            <section class="current-patient">
                <h2>"Current Patient"</h2>
                <p
                    class="current-patient__number"
                    style=move || {
                        state.with(|s| {
                            if s.snapshot.current.is_some() { format!("color: {}", s.theme_color()) } else { String::new() }
                        })
                    }
                >
                    {move || state.with(|s| s.snapshot.current_number().unwrap_or("---").to_owned())}
                </p>
                <p class="current-patient__name">
                    {move || {
                        state.with(|s| {
                            s.snapshot.current.as_ref().map_or_else(|| "No patient".to_owned(), |c| c.name.clone())
                        })
                    }}
                </p>
                <div class="current-patient__actions">
                    <button class="btn btn--primary" on:click=move |_| spawn_action(call_next(state))>
                        "Call Next"
                    </button>
                    <button class="btn btn--success" on:click=on_complete_current>
                        "Complete"
                    </button>
                </div>
            </section>

            <section class="manual-call">
                <h2>"Manual Call"</h2>
                <form class="manual-call__form" on:submit=on_manual>
                    <select
                        class="manual-call__type"
                        on:change=move |ev| state.update(|s| s.manual_type = event_target_value(&ev))
                    >
                        {move || {
                            state
                                .with(OperationState::type_options)
                                .into_iter()
                                .map(|opt| view! { <option value=opt.code selected=opt.selected>{opt.label}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <input
                        class="manual-call__number"
                        type="text"
                        inputmode="numeric"
                        placeholder="Number"
                        prop:value=move || state.with(|s| s.manual_input.clone())
                        on:input=move |ev| state.update(|s| s.manual_input = event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Call"</button>
                </form>
            </section>

            <section class="next-queue">
                <h2>"Next in Queue"</h2>
                <div class="next-queue__list">
                    {move || {
                        let next = state.with(|s| s.snapshot.next.clone());
                        if next.is_empty() {
                            view! { <p class="next-queue__empty">"No patients in queue"</p> }.into_any()
                        } else {
                            next.into_iter()
                                .map(|entry| {
                                    let number = entry.number.clone();
                                    view! {
                                        <button
                                            class="next-card next-card--button"
                                            on:click=move |_| {
                                                let number = number.clone();
                                                spawn_action(async move {
                                                    call_specific(state, number).await;
                                                });
                                            }
                                        >
                                            <span class="next-card__number">{entry.number}</span>
                                            <span class="next-card__name">{entry.name}</span>
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>
            </section>

            <section class="history">
                <h2>"Recent Calls"</h2>
                <HistoryTable rows=history on_recall=on_recall on_complete=on_complete/>
            </section>

            <NotificationModal notification=notification on_close=on_dismiss/>
        </div>
    }
}

/// Run a page action on the browser event loop. Server renders never
/// trigger actions, so the future is discarded there.
fn spawn_action<F>(action: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(action);
    #[cfg(not(feature = "hydrate"))]
    drop(action);
}

fn room_id(state: RwSignal<OperationState>) -> Option<String> {
    state.try_with_untracked(|s| s.room_id.clone())
}

fn notify(state: RwSignal<OperationState>, notification: Notification) {
    update_live(state, |s| s.notify(notification));
}

/// Load the room and the room types. Returns whether polling may start.
async fn initialize(state: RwSignal<OperationState>) -> bool {
    let Some(room_id) = room_id(state) else {
        return false;
    };
    let (room, room_types) = futures::join!(api::fetch_room_config(&room_id), api::fetch_room_types());
    match room.and_then(|room| room_types.map(|types| (room, types))) {
        Ok((room, room_types)) => state.try_update(|s| s.initialized(room, room_types)).is_some(),
        Err(e) => {
            leptos::logging::warn!("Error initializing room operations: {e}");
            notify(state, Notification::init_failed(&e));
            false
        }
    }
}

async fn refresh(state: RwSignal<OperationState>) {
    if state.try_with_untracked(|s| s.room.is_none()).unwrap_or(true) {
        return;
    }
    let Some(room_id) = room_id(state) else {
        return;
    };
    let (snapshot, history) = futures::join!(api::fetch_queue(&room_id), api::fetch_recent_calls(&room_id));
    for warning in state.try_update(|s| s.refreshed(snapshot, history)).unwrap_or_default() {
        leptos::logging::warn!("{warning}");
    }
}

async fn call_next(state: RwSignal<OperationState>) {
    let Some(room_id) = room_id(state) else {
        return;
    };
    match api::fetch_queue(&room_id).await {
        Ok(fresh) => match OperationState::next_to_call(&fresh) {
            Ok(number) => {
                call_specific(state, number).await;
            }
            Err(notice) => notify(state, notice),
        },
        Err(e) => notify(state, Notification::call_next_failed(&e)),
    }
}

/// Call `number` into this room. Returns whether the backend accepted it.
async fn call_specific(state: RwSignal<OperationState>, number: String) -> bool {
    let Some(room_id) = room_id(state) else {
        return false;
    };
    match api::call_number(&number, &room_id).await {
        Ok(()) => {
            refresh(state).await;
            notify(state, Notification::called(&number));
            true
        }
        Err(e) => {
            leptos::logging::warn!("Error calling {number}: {e}");
            notify(state, Notification::call_failed(&e));
            false
        }
    }
}

async fn complete_specific(state: RwSignal<OperationState>, number: String) {
    match api::complete_number(&number).await {
        Ok(()) => {
            refresh(state).await;
            notify(state, Notification::completed(&number));
        }
        Err(e) => {
            leptos::logging::warn!("Error completing {number}: {e}");
            notify(state, Notification::complete_failed(&e));
        }
    }
}
