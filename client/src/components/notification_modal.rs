//! Non-blocking notification modal used by the operator console.

use leptos::prelude::*;

use crate::state::operation::{Notification, NotificationKind};

/// Shows `notification` until the operator closes it.
#[component]
pub fn NotificationModal(notification: Signal<Option<Notification>>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || notification.get().is_some()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="modal"
                    class:modal--error=move || {
                        notification.get().is_some_and(|n| n.kind == NotificationKind::Error)
                    }
                    on:click=move |ev: leptos::ev::MouseEvent| ev.stop_propagation()
                >
                    <p class="modal__message">
                        {move || notification.get().map(|n| n.message).unwrap_or_default()}
                    </p>
                    <button class="btn modal__close" on:click=move |_| on_close.run(())>
                        "OK"
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// Full-screen spinner shown while a long request is in flight.
#[component]
pub fn LoadingModal(#[prop(into)] visible: Signal<bool>, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="modal-backdrop">
                <div class="modal modal--loading">
                    <span class="spinner" aria-hidden="true"></span>
                    <p class="modal__message">{message.clone()}</p>
                </div>
            </div>
        </Show>
    }
}
