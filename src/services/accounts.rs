//! In-memory account registry backing `/api/signup` and `/api/login`.
//!
//! ARCHITECTURE
//! ============
//! Accounts live in a `RwLock<HashMap>` keyed by normalized email. Passwords
//! are stored as `sha256(salt || password)` with a per-account random salt.
//! Login hands back an opaque random token; nothing on the server consumes
//! it afterwards.
//!
//! TRADE-OFFS
//! ==========
//! The registry is process-local and lost on restart. It exists so the shell
//! can run end to end, not as durable storage.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use rand::Rng;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("User already exists")]
    AlreadyExists,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

pub(crate) fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Lowercase and trim an email. Returns `None` for blank input.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return None;
    }
    Some(normalized)
}

#[derive(Debug, Clone)]
struct Account {
    id: Uuid,
    salt: String,
    password_hash: String,
}

/// Shared account registry. Clones share the same map.
#[derive(Clone, Default)]
pub struct AccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl AccountStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `email` with `password`, returning the new account id.
    ///
    /// # Errors
    ///
    /// `MissingCredentials` for a blank email or empty password,
    /// `AlreadyExists` when the normalized email is taken.
    pub async fn signup(&self, email: &str, password: &str) -> Result<Uuid, AccountError> {
        let email = normalize_email(email).ok_or(AccountError::MissingCredentials)?;
        if password.is_empty() {
            return Err(AccountError::MissingCredentials);
        }

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&email) {
            return Err(AccountError::AlreadyExists);
        }

        let salt = generate_salt();
        let account = Account { id: Uuid::new_v4(), password_hash: hash_password(&salt, password), salt };
        let id = account.id;
        accounts.insert(email, account);
        Ok(id)
    }

    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    ///
    /// `MissingCredentials` for blank input; `InvalidCredentials` for an
    /// unknown email or wrong password.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AccountError> {
        let email = normalize_email(email).ok_or(AccountError::MissingCredentials)?;
        if password.is_empty() {
            return Err(AccountError::MissingCredentials);
        }

        let accounts = self.accounts.read().await;
        let account = accounts.get(&email).ok_or(AccountError::InvalidCredentials)?;
        if hash_password(&account.salt, password) != account.password_hash {
            return Err(AccountError::InvalidCredentials);
        }

        tracing::debug!(account_id = %account.id, "login succeeded");
        Ok(generate_token())
    }

    /// Number of registered accounts.
    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }
}
