//! Reactive auth-session signal shared by the navbar and route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token itself lives in browser storage (see `state::session`), which
//! Leptos cannot observe. This state is the reactive half: views track it and
//! re-read storage whenever it changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication bookkeeping provided as `RwSignal<AuthState>` context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    /// True until the client has hydrated. Server render and first paint
    /// cannot see browser storage and are treated as anonymous.
    pub loading: bool,
    /// Bumped after every token write or clear.
    pub revision: u64,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { loading: true, revision: 0 }
    }
}

impl AuthState {
    /// Record that the stored token changed.
    pub fn token_changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Record that browser storage is now readable.
    pub fn hydrated(&mut self) {
        self.loading = false;
    }

    /// Gate a storage read on hydration.
    pub fn authenticated(&self, has_token: impl FnOnce() -> bool) -> bool {
        !self.loading && has_token()
    }
}
