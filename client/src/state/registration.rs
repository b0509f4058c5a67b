//! Registration form state machine.
//!
//! `Idle -> ServiceSelected -> Submitting -> Success -> Idle`. A failed
//! submission returns to `ServiceSelected` with the form intact; closing the
//! success modal clears both the selection and the name.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::net::types::{RegisterRequest, RoomType, RoomTypes};
use crate::util::i18n::{Lang, Msg, text};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RegistrationPhase {
    #[default]
    Idle,
    ServiceSelected {
        code: String,
    },
    Submitting {
        code: String,
    },
    Success {
        code: String,
        queue_number: String,
        /// Style of the chosen service, re-fetched after registering.
        service: Option<RoomType>,
    },
}

/// Reason a submission was blocked before reaching the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationError {
    NoService,
    EmptyName,
    Busy,
}

impl RegistrationError {
    pub fn message(self, lang: Lang) -> &'static str {
        match self {
            Self::NoService => text(lang, Msg::SelectService),
            Self::EmptyName => text(lang, Msg::EnterName),
            Self::Busy => text(lang, Msg::Submitting),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationState {
    pub lang: Lang,
    pub room_types: RoomTypes,
    pub name: String,
    pub phase: RegistrationPhase,
}

impl RegistrationState {
    /// Currently selected service code, if any.
    pub fn selected(&self) -> Option<&str> {
        match &self.phase {
            RegistrationPhase::Idle => None,
            RegistrationPhase::ServiceSelected { code }
            | RegistrationPhase::Submitting { code }
            | RegistrationPhase::Success { code, .. } => Some(code),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, RegistrationPhase::Submitting { .. })
    }

    /// Select a service. Ignored while a submission is in flight or the
    /// success modal is open.
    pub fn select(&mut self, code: &str) {
        if matches!(self.phase, RegistrationPhase::Idle | RegistrationPhase::ServiceSelected { .. }) {
            self.phase = RegistrationPhase::ServiceSelected { code: code.to_owned() };
        }
    }

    /// Validate and move to `Submitting`, returning the request to send.
    ///
    /// The service check runs before the name check.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule; the phase is left unchanged.
    pub fn begin_submit(&mut self) -> Result<RegisterRequest, RegistrationError> {
        let code = match &self.phase {
            RegistrationPhase::ServiceSelected { code } => code.clone(),
            RegistrationPhase::Submitting { .. } | RegistrationPhase::Success { .. } => {
                return Err(RegistrationError::Busy);
            }
            RegistrationPhase::Idle => return Err(RegistrationError::NoService),
        };
        let name = self.name.trim();
        if name.is_empty() {
            return Err(RegistrationError::EmptyName);
        }
        let request = RegisterRequest { name: name.to_owned(), room_type: code.clone() };
        self.phase = RegistrationPhase::Submitting { code };
        Ok(request)
    }

    /// Record an assigned number. `room_types` is the freshly fetched config
    /// used to style the confirmation; a failed re-fetch passes `None` and
    /// falls back to the copy loaded with the page.
    pub fn submit_succeeded(&mut self, queue_number: String, room_types: Option<RoomTypes>) {
        let RegistrationPhase::Submitting { code } = &self.phase else {
            return;
        };
        let code = code.clone();
        if let Some(fresh) = room_types {
            self.room_types = fresh;
        }
        let service = self.room_types.get(&code).cloned();
        self.phase = RegistrationPhase::Success { code, queue_number, service };
    }

    pub fn submit_failed(&mut self) {
        if let RegistrationPhase::Submitting { code } = &self.phase {
            self.phase = RegistrationPhase::ServiceSelected { code: code.clone() };
        }
    }

    /// Close the success modal and reset the form.
    pub fn close_modal(&mut self) {
        if matches!(self.phase, RegistrationPhase::Success { .. }) {
            self.phase = RegistrationPhase::Idle;
            self.name.clear();
        }
    }
}
