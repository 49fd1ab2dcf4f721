//! In-memory identity store
//!
//! Usernames map to records, and ids come from a counter that only moves
//! forward. Both live behind one lock so a registration checks the username,
//! assigns the id and inserts the record as a single step. Nothing is written
//! to disk: a restart starts from an empty store.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::crypto::{hash_password, verify_password};
use crate::error::{ApiError, ApiResult};
use crate::types::IdentityRecord;

/// Fields supplied by a caller registering a new identity
#[derive(Clone, Copy)]
pub struct NewIdentity<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub name: &'a str,
    pub email: &'a str,
}

struct Inner {
    records: HashMap<String, IdentityRecord>,
    next_id: u64,
}

pub struct IdentityStore {
    inner: RwLock<Inner>,
}

impl IdentityStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Register a new identity.
    ///
    /// Username, name and email are trimmed. The password is hashed exactly
    /// as given, but a password of only whitespace is rejected.
    pub fn create(&self, new: NewIdentity<'_>) -> ApiResult<IdentityRecord> {
        let username = new.username.trim();
        if username.is_empty() || new.password.trim().is_empty() {
            return Err(ApiError::invalid_input("username and password required"));
        }

        let password_hash = hash_password(new.password);

        let mut inner = self.inner.write();
        if inner.records.contains_key(username) {
            return Err(ApiError::DuplicateUsername);
        }

        let record = IdentityRecord {
            id: inner.next_id.to_string(),
            username: username.to_string(),
            name: new.name.trim().to_string(),
            email: new.email.trim().to_string(),
            password_hash,
        };
        inner.next_id += 1;
        inner.records.insert(record.username.clone(), record.clone());

        Ok(record)
    }

    /// Check a username/password pair.
    ///
    /// An unknown username and a wrong password both yield
    /// [`ApiError::InvalidCredentials`].
    pub fn authenticate(&self, username: &str, password: &str) -> ApiResult<IdentityRecord> {
        let inner = self.inner.read();
        inner
            .records
            .get(username.trim())
            .filter(|r| verify_password(password, &r.password_hash))
            .cloned()
            .ok_or(ApiError::InvalidCredentials)
    }

    pub fn get(&self, username: &str) -> ApiResult<IdentityRecord> {
        self.inner
            .read()
            .records
            .get(username)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("identity not found".into()))
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new()
    }
}
