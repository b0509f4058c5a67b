//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components map view models from `state` to DOM. They hold no queue state
//! of their own; pages pass data and callbacks in as props.

pub mod history_table;
pub mod import_results;
pub mod notification_modal;
pub mod queue_number_modal;
pub mod room_type_panel;
