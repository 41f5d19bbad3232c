//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; guarded pages are wrapped in
//! `AuthGate` by the route outlet rather than guarding themselves.

pub mod backend_notice;
pub mod demo;
pub mod home;
pub mod login;
pub mod not_found;
pub mod protected;
pub mod signup;
pub mod single;
