//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (config load, poll session,
//! write actions) and delegates rendering details to `components`.

pub mod dashboard;
pub mod home;
pub mod import;
pub mod register;
pub mod room_display;
pub mod room_operation;
