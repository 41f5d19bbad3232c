use super::*;
use crate::state::session::{MemorySessionStore, SessionStore, StorageError};

struct ReadOnlyStore;

impl SessionStore for ReadOnlyStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn write(&self, _token: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected("QuotaExceededError".to_owned()))
    }

    fn remove(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

#[test]
fn store_token_persists_into_session() {
    let session = Session::new(MemorySessionStore::new());
    assert_eq!(store_token(&session, "abc"), Ok(()));
    assert_eq!(session.get_token().as_deref(), Some("abc"));
}

#[test]
fn store_token_failure_is_generic() {
    let session = Session::new(ReadOnlyStore);
    assert_eq!(store_token(&session, "abc"), Err(SubmitError::Generic));
    assert!(!session.is_authenticated());
}
