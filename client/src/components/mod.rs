//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome and route guards while reading session
//! state from Leptos context providers.

pub mod auth_gate;
pub mod credential_fields;
pub mod navbar;
