use super::*;

/// Store whose every operation fails, standing in for blocked storage.
struct BrokenStore;

impl SessionStore for BrokenStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Err(StorageError::Rejected("SecurityError".to_owned()))
    }

    fn write(&self, _token: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected("QuotaExceededError".to_owned()))
    }

    fn remove(&self) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================
// Session over MemorySessionStore
// =============================================================

#[test]
fn get_token_without_prior_write_is_absent() {
    let session = Session::new(MemorySessionStore::new());
    assert_eq!(session.get_token(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn set_then_get_returns_same_token() {
    let session = Session::new(MemorySessionStore::new());
    for token in ["abc", "eyJhbGciOiJIUzI1NiJ9.e30.sig", "токен"] {
        session.set_token(token).unwrap();
        assert_eq!(session.get_token().as_deref(), Some(token));
    }
}

#[test]
fn set_token_overwrites_previous_value() {
    let session = Session::new(MemorySessionStore::with_token("old"));
    session.set_token("new").unwrap();
    assert_eq!(session.get_token().as_deref(), Some("new"));
}

#[test]
fn clear_token_is_idempotent() {
    let session = Session::new(MemorySessionStore::with_token("t"));
    session.clear_token();
    assert_eq!(session.get_token(), None);
    session.clear_token();
    assert_eq!(session.get_token(), None);
}

#[test]
fn empty_stored_token_reads_as_absent() {
    let session = Session::new(MemorySessionStore::with_token(""));
    assert_eq!(session.get_token(), None);
}

#[test]
fn clones_share_one_slot() {
    let store = MemorySessionStore::new();
    let a = Session::new(store.clone());
    let b = Session::new(store);
    a.set_token("shared").unwrap();
    assert_eq!(b.get_token().as_deref(), Some("shared"));
}

// =============================================================
// Fail closed
// =============================================================

#[test]
fn read_failure_reads_as_anonymous() {
    let session = Session::new(BrokenStore);
    assert_eq!(session.get_token(), None);
}

#[test]
fn write_failure_is_reported() {
    let session = Session::new(BrokenStore);
    assert_eq!(session.set_token("t"), Err(StorageError::Rejected("QuotaExceededError".to_owned())));
}

#[test]
fn clear_failure_does_not_fault() {
    let session = Session::new(BrokenStore);
    session.clear_token();
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_outside_browser_is_unavailable() {
    assert_eq!(BrowserSessionStore.read(), Err(StorageError::Unavailable));
    assert!(!Session::browser().is_authenticated());
}
