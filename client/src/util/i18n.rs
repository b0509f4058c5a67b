//! English/Tagalog display strings for the patient-facing registration view.
//!
//! Only presentation copy lives here; submitted data never depends on the
//! selected language.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

/// Display language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    Tl,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tl => "tl",
        }
    }
}

/// Translatable message keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Msg {
    Title,
    NameLabel,
    NamePlaceholder,
    ServiceLabel,
    Submit,
    Submitting,
    YourNumber,
    PleaseWait,
    Close,
    SelectService,
    EnterName,
    RegisterFailed,
    LoadServicesFailed,
}

/// Resolve a message in the given language.
pub fn text(lang: Lang, msg: Msg) -> &'static str {
    match (lang, msg) {
        (Lang::En, Msg::Title) => "Patient Registration",
        (Lang::Tl, Msg::Title) => "Pagpaparehistro ng Pasyente",
        (Lang::En, Msg::NameLabel) => "Full Name",
        (Lang::Tl, Msg::NameLabel) => "Buong Pangalan",
        (Lang::En, Msg::NamePlaceholder) => "Enter your full name",
        (Lang::Tl, Msg::NamePlaceholder) => "Ilagay ang iyong buong pangalan",
        (Lang::En, Msg::ServiceLabel) => "Select Service",
        (Lang::Tl, Msg::ServiceLabel) => "Pumili ng Serbisyo",
        (Lang::En, Msg::Submit) => "Get Queue Number",
        (Lang::Tl, Msg::Submit) => "Kumuha ng Numero",
        (Lang::En, Msg::Submitting) => "Registering...",
        (Lang::Tl, Msg::Submitting) => "Nagpaparehistro...",
        (Lang::En, Msg::YourNumber) => "Your Queue Number",
        (Lang::Tl, Msg::YourNumber) => "Ang Iyong Numero",
        (Lang::En, Msg::PleaseWait) => "Please wait for your number to be called.",
        (Lang::Tl, Msg::PleaseWait) => "Mangyaring hintayin na tawagin ang iyong numero.",
        (Lang::En, Msg::Close) => "Close",
        (Lang::Tl, Msg::Close) => "Isara",
        (Lang::En, Msg::SelectService) => "Please select a service type",
        (Lang::Tl, Msg::SelectService) => "Mangyaring pumili ng uri ng serbisyo",
        (Lang::En, Msg::EnterName) => "Please enter your name",
        (Lang::Tl, Msg::EnterName) => "Mangyaring ilagay ang iyong pangalan",
        (Lang::En, Msg::RegisterFailed) => "Failed to register. Please try again.",
        (Lang::Tl, Msg::RegisterFailed) => "Hindi maiparehistro. Pakisubukang muli.",
        (Lang::En, Msg::LoadServicesFailed) => "Failed to load service types. Please try again.",
        (Lang::Tl, Msg::LoadServicesFailed) => "Hindi ma-load ang mga serbisyo. Pakisubukang muli.",
    }
}
