//! Per-view state and pure view-model builders.
//!
//! DESIGN
//! ======
//! Each page owns one of these structs inside an `RwSignal`; nothing here is
//! shared across pages. The builders are browser-free so the rendering rules
//! are unit tested without a DOM.

pub mod config;
pub mod dashboard;
pub mod display;
pub mod import;
pub mod operation;
pub mod registration;

#[cfg(test)]
pub(crate) mod test_fixtures;
