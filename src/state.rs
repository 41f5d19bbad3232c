//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Clone is required by Axum; every field is cheap to clone and shares its
//! backing storage.

use crate::services::accounts::AccountStore;

#[derive(Clone, Default)]
pub struct AppState {
    pub accounts: AccountStore,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self { accounts: AccountStore::new() }
    }
}
