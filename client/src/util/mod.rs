//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (`browser`, `poll`)
//! and pure formatting/codec logic (`i18n`, `queue_number`, `sheet`) from
//! page and component code so both stay testable without a browser.

pub mod browser;
pub mod i18n;
pub mod poll;
pub mod queue_number;
pub mod sheet;
pub mod signal;
