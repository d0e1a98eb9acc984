//! Storage backends for preference records.
//!
//! # Design
//! - Backends deal in raw strings; token validation stays in the session so
//!   every reader applies the same allow-list.
//! - Writes are whole-value overwrites. Failures surface as typed errors and
//!   are absorbed (and logged) by the session, never by callers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Failures raised by preference storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store is missing or disabled for this origin.
    #[error("preference storage unavailable")]
    Unavailable,
    /// The store refused the write (commonly quota exhaustion).
    #[error("preference write rejected: {reason}")]
    WriteRejected {
        /// Backend-reported reason for the refusal.
        reason: String,
    },
}

/// Raw key-value access to wherever preference records live.
///
/// Production backends are durable and origin-scoped; tests substitute
/// [`MemoryStorage`]. Implementations accept arbitrary strings; the session
/// re-validates every read, so a backend never has to.
pub trait PrefStorage {
    /// Read the stored string for `key`. Absent and unreadable entries are
    /// both `None`.
    fn read(&self, key: &str) -> Option<String>;

    /// Overwrite the stored string for `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backend for tests and native builds.
///
/// Clones share the same underlying map, mirroring how every session in a
/// browser tab sees the one origin-scoped store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStorage, PrefStorage};

    #[test]
    fn read_missing_is_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("layout-preference"), None);
    }

    #[test]
    fn write_overwrites_whole_value() {
        let storage = MemoryStorage::new();
        storage.write("layout-preference", "grid").expect("write");
        storage.write("layout-preference", "table").expect("write");
        assert_eq!(storage.read("layout-preference").as_deref(), Some("table"));
    }

    #[test]
    fn clones_share_entries() {
        let storage = MemoryStorage::new();
        let alias = storage.clone();
        storage.write("layout-preference", "grid").expect("write");
        assert_eq!(alias.read("layout-preference").as_deref(), Some("grid"));
    }
}
