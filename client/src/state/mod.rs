//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session` storage access, reactive `auth`
//! bookkeeping, `credentials` form state) so components depend on small
//! focused models.

pub mod auth;
pub mod credentials;
pub mod session;
