//! Registration confirmation showing the assigned queue number.

use leptos::prelude::*;

use crate::net::types::RoomType;
use crate::util::i18n::{Lang, Msg, text};

#[component]
pub fn QueueNumberModal(
    queue_number: String,
    service: Option<RoomType>,
    #[prop(into)] lang: Signal<Lang>,
    on_close: Callback<()>,
) -> impl IntoView {
    let color = service.as_ref().map(|s| s.color.clone()).unwrap_or_default();
    let number_style = format!("color: {color}");
    let border_style = format!("border-color: {color}");
    let label = move || service.as_ref().map(|s| s.label(lang.get()).to_owned()).unwrap_or_default();

    view! {
        <div class="modal-backdrop">
            <div class="modal modal--ticket" style=border_style>
                <p class="modal__heading">{move || text(lang.get(), Msg::YourNumber)}</p>
                <p class="ticket__number" style=number_style>{queue_number}</p>
                <p class="ticket__service">{label}</p>
                <p class="modal__message">{move || text(lang.get(), Msg::PleaseWait)}</p>
                <button class="btn modal__close" on:click=move |_| on_close.run(())>
                    {move || text(lang.get(), Msg::Close)}
                </button>
            </div>
        </div>
    }
}
