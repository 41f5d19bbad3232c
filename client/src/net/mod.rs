//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the account REST calls and the mapping from responses to
//! user-facing feedback.

pub mod api;
