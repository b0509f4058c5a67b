//! Landing page linking every view and every configured room.

use leptos::prelude::*;

use crate::state::config::ConfigState;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = RwSignal::new(ConfigState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_config().await {
            Ok(loaded) => {
                crate::util::signal::update_live(config, |c| *c = loaded);
            }
            Err(e) => leptos::logging::warn!("Failed to load configurations: {e}"),
        }
    });

    let rooms = move || {
        config.with(|c| {
            c.rooms
                .iter()
                .map(|(id, info)| {
                    let color = c.room_type(&info.room_type).map(|t| t.color.clone()).unwrap_or_default();
                    (id.clone(), info.name.clone(), info.room_type.clone(), color)
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="home-page">
            <header class="page-header">
                <h1>"Clinic Queue"</h1>
            </header>
            <nav class="home-page__links">
                <a class="btn" href="/register">"Registration"</a>
                <a class="btn" href="/dashboard">"Dashboard"</a>
                <a class="btn" href="/import">"Import"</a>
            </nav>
            <ul class="home-page__rooms">
                {move || {
                    rooms()
                        .into_iter()
                        .map(|(id, name, room_type, color)| {
                            view! {
                                <li class="room-link" style=format!("border-color: {color}")>
                                    <span class="room-link__name">{name}</span>
                                    <span class="room-link__type">{room_type}</span>
                                    <a href=format!("/room/{id}")>"Display"</a>
                                    <a href=format!("/room-op/{id}")>"Operate"</a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
