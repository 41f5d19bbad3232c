//! Session token accessor backed by browser `sessionStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar and the auth gate both consult the token; login writes it and
//! logout removes it. Components never touch storage directly: they receive a
//! [`Session`] through Leptos context so tests can swap in
//! [`MemorySessionStore`].
//!
//! ERROR HANDLING
//! ==============
//! Storage can be missing (SSR, privacy modes, sandboxed iframes). Reads fail
//! closed: any storage error is logged and reported as "no token".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

/// Storage key holding the session token.
pub const TOKEN_KEY: &str = "token";

/// Failure talking to the underlying key-value storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("session storage rejected the operation: {0}")]
    Rejected(String),
}

/// Raw token storage. Implementations hold at most one token.
pub trait SessionStore: Send + Sync {
    /// Read the stored token, if any.
    fn read(&self) -> Result<Option<String>, StorageError>;
    /// Store `token`, replacing any previous value.
    fn write(&self, token: &str) -> Result<(), StorageError>;
    /// Remove the token. Removing an absent token succeeds.
    fn remove(&self) -> Result<(), StorageError>;
}

/// `window.sessionStorage` under [`TOKEN_KEY`].
///
/// Holds no handle: the storage object is looked up per call, which keeps the
/// type `Send + Sync` for Leptos context.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .session_storage()
        .map_err(|e| StorageError::Rejected(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl SessionStore for BrowserSessionStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .get_item(TOKEN_KEY)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    fn write(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .set_item(TOKEN_KEY, token)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .remove_item(TOKEN_KEY)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process token slot.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`.
    pub fn with_token(token: &str) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(token.to_owned()))) }
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let slot = self.slot.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(slot.clone())
    }

    fn write(&self, token: &str) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().map_err(|_| StorageError::Unavailable)?;
        *slot = Some(token.to_owned());
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().map_err(|_| StorageError::Unavailable)?;
        *slot = None;
        Ok(())
    }
}

/// Session capability injected into views.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Session over `window.sessionStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserSessionStore)
    }

    /// Current token. Storage failures read as absent.
    pub fn get_token(&self) -> Option<String> {
        match self.store.read() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                leptos::logging::warn!("session read failed, treating as anonymous: {e}");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    /// Store `token`, overwriting any previous one.
    ///
    /// # Errors
    ///
    /// Returns the storage error when the token could not be persisted.
    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.store.write(token)
    }

    /// Remove the token. Failures are logged; an unreadable store already
    /// reads as anonymous.
    pub fn clear_token(&self) {
        if let Err(e) = self.store.remove() {
            leptos::logging::warn!("session clear failed: {e}");
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
