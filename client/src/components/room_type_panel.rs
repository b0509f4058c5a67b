//! Dashboard panel for one room type.

use leptos::prelude::*;

use crate::state::dashboard::{DashboardPanel, RoomSummary};

#[component]
pub fn RoomTypePanel(panel: DashboardPanel) -> impl IntoView {
    let DashboardPanel { code, title, subtitle, color, rooms } = panel;
    let heading_style = format!("color: {color}");
    let border_style = format!("border-color: {color}");

    view! {
        <section class="type-panel" data-room-type=code style=border_style>
            <header class="type-panel__header">
                <h2 class="type-panel__title" style=heading_style>{title}</h2>
                <p class="type-panel__subtitle">{subtitle}</p>
            </header>
            <div class="type-panel__rooms">
                {rooms
                    .into_iter()
                    .map(|room| view! { <RoomRow room=room color=color.clone()/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn RoomRow(room: RoomSummary, color: String) -> impl IntoView {
    let RoomSummary { room_name, current, waiting_count, next } = room;
    let has_current = current.is_some();

    view! {
        <div class="room-row">
            <div class="room-row__name">{room_name}</div>
            <div class="room-row__current" class:room-row__current--idle=!has_current style=format!("color: {color}")>
                {current.unwrap_or_else(|| "No active patient".to_owned())}
            </div>
            <div class="room-row__waiting">{format!("Waiting: {waiting_count}")}</div>
            {(!next.is_empty())
                .then(|| {
                    view! {
                        <div class="room-row__next">
                            <span class="room-row__next-label">"Next:"</span>
                            {next
                                .into_iter()
                                .map(|number| view! { <span class="chip">{number}</span> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })}
        </div>
    }
}
