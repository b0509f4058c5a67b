//! Networking modules for the queue backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `types` defines the wire schema. Every
//! view talks to the backend only through these two modules.

pub mod api;
pub mod types;
