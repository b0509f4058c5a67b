//! Patient self-registration page (English/Tagalog).
//!
//! SYSTEM CONTEXT
//! ==============
//! Kiosk-facing form: pick a service, type a name, get a queue number. The
//! language toggle only changes copy; the submitted request is identical in
//! both languages. Validation and backend failures use blocking alerts so a
//! patient cannot miss them.

use leptos::prelude::*;

use crate::components::queue_number_modal::QueueNumberModal;
use crate::net::types::RegisterRequest;
use crate::state::registration::{RegistrationPhase, RegistrationState};
use crate::util::browser;
use crate::util::i18n::{Lang, Msg, text};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let state = RwSignal::new(RegistrationState::default());
    let lang = Signal::derive(move || state.with(|s| s.lang));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_room_types().await {
            Ok(room_types) => {
                crate::util::signal::update_live(state, |s| s.room_types = room_types);
            }
            Err(e) => {
                leptos::logging::warn!("Error loading service types: {e}");
                let lang = state.try_with_untracked(|s| s.lang).unwrap_or_default();
                browser::alert(text(lang, Msg::LoadServicesFailed));
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut outcome = None;
        state.update(|s| outcome = Some(s.begin_submit()));
        match outcome {
            Some(Ok(request)) => submit(state, request),
            Some(Err(err)) => browser::alert(err.message(lang.get_untracked())),
            None => {}
        }
    };

    let on_close = Callback::new(move |()| state.update(RegistrationState::close_modal));

    let services = move || {
        state.with(|s| {
            let selected = s.selected().map(str::to_owned);
            s.room_types
                .iter()
                .map(|(code, info)| {
                    (
                        code.clone(),
                        info.label(s.lang).to_owned(),
                        info.description(s.lang).to_owned(),
                        info.color.clone(),
                        selected.as_deref() == Some(code.as_str()),
                    )
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="register-page">
            <header class="page-header">
                <h1>{move || text(lang.get(), Msg::Title)}</h1>
                <div class="lang-toggle">
                    <LangButton lang=Lang::En label="English" state=state/>
                    <LangButton lang=Lang::Tl label="Tagalog" state=state/>
                </div>
            </header>

            <form class="register-form" on:submit=on_submit>
                <label class="register-form__label" for="patient-name">
                    {move || text(lang.get(), Msg::NameLabel)}
                </label>
                <input
                    id="patient-name"
                    class="register-form__input"
                    type="text"
                    placeholder=move || text(lang.get(), Msg::NamePlaceholder)
                    prop:value=move || state.with(|s| s.name.clone())
                    on:input=move |ev| state.update(|s| s.name = event_target_value(&ev))
                />

                <p class="register-form__label">{move || text(lang.get(), Msg::ServiceLabel)}</p>
                <div class="service-list">
                    {move || {
                        services()
                            .into_iter()
                            .map(|(code, label, description, color, selected)| {
                                view! {
                                    <button
                                        type="button"
                                        class="service-btn"
                                        class:service-btn--selected=selected
                                        style=format!("border-color: {color}")
                                        on:click=move |_| state.update(|s| s.select(&code))
                                    >
                                        <span class="service-btn__label" style=format!("color: {color}")>
                                            {label}
                                        </span>
                                        <span class="service-btn__description">{description}</span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <button
                    class="btn btn--primary register-form__submit"
                    type="submit"
                    disabled=move || state.with(RegistrationState::is_submitting)
                >
                    {move || {
                        let msg = if state.with(RegistrationState::is_submitting) { Msg::Submitting } else { Msg::Submit };
                        text(lang.get(), msg)
                    }}
                </button>
            </form>

            {move || match state.get().phase {
                RegistrationPhase::Success { queue_number, service, .. } => Some(view! {
                    <QueueNumberModal queue_number=queue_number service=service lang=lang on_close=on_close/>
                }),
                _ => None,
            }}
        </div>
    }
}

#[component]
fn LangButton(lang: Lang, label: &'static str, state: RwSignal<RegistrationState>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn lang-toggle__btn"
            class:lang-toggle__btn--active=move || state.with(|s| s.lang == lang)
            data-lang=lang.code()
            on:click=move |_| state.update(|s| s.lang = lang)
        >
            {label}
        </button>
    }
}

/// Send the registration; on success re-fetch room types to style the
/// confirmation.
fn submit(state: RwSignal<RegistrationState>, request: RegisterRequest) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::register(&request.name, &request.room_type).await {
            Ok(queue_number) => {
                let fresh = match crate::net::api::fetch_room_types().await {
                    Ok(room_types) => Some(room_types),
                    Err(e) => {
                        leptos::logging::warn!("Could not refresh room types: {e}");
                        None
                    }
                };
                crate::util::signal::update_live(state, |s| s.submit_succeeded(queue_number, fresh));
            }
            Err(e) => {
                leptos::logging::warn!("Registration error: {e}");
                if let Some(lang) = state.try_update(|s| {
                    s.submit_failed();
                    s.lang
                }) {
                    browser::alert(text(lang, Msg::RegisterFailed));
                }
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, request);
    }
}
