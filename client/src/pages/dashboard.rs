//! Dashboard page with one live panel per room type.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wall-mounted overview of every room. Config is loaded once; the poll
//! session then replaces the dashboard status every cycle. Failures are only
//! logged: the panels keep showing the last good data.

use leptos::prelude::*;

use crate::components::room_type_panel::RoomTypePanel;
use crate::config::POLL_INTERVAL;
use crate::net::api;
use crate::state::dashboard::DashboardState;
use crate::util::poll::PollSession;
use crate::util::signal::update_live;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());

    // Held paused until config is in; resume triggers the first refresh.
    let session = PollSession::start(POLL_INTERVAL, move || refresh(state));
    let poll = session.handle();
    poll.pause();
    on_cleanup(move || drop(session));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::fetch_config().await {
            Ok(config) => {
                if state.try_update(|s| s.config = config).is_some() {
                    poll.resume();
                }
            }
            Err(e) => leptos::logging::warn!("Failed to load configurations: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    drop(poll);

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1>"Queue Dashboard"</h1>
            </header>
            <div class="dashboard-page__grid">
                {move || {
                    state
                        .with(DashboardState::panels)
                        .into_iter()
                        .map(|panel| view! { <RoomTypePanel panel=panel/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

async fn refresh(state: RwSignal<DashboardState>) {
    if state.try_with_untracked(|s| s.config.room_types.is_empty()).unwrap_or(true) {
        return;
    }
    match api::fetch_dashboard_status().await {
        Ok(status) => {
            update_live(state, |s| s.status = status);
        }
        Err(e) => leptos::logging::warn!("Failed to update dashboard: {e}"),
    }
}
