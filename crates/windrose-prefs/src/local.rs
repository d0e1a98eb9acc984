//! Browser `localStorage` backend.
//!
//! Uses raw item access so the persisted bytes are exactly the mode tokens:
//! entries written by earlier front ends stay readable, and hand-edited or
//! corrupted values degrade through the session's allow-list instead of
//! surfacing as parse errors.

use crate::storage::{PrefStorage, StorageError};

/// Origin-scoped durable storage backed by `window.localStorage`.
///
/// Stateless: every call resolves the storage object fresh, so a browser
/// with storage disabled yields `None` reads and [`StorageError::Unavailable`]
/// writes rather than panicking.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// Create the backend. The browser owns all state.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl PrefStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let Some(storage) = local_storage() else {
            return Err(StorageError::Unavailable);
        };
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::WriteRejected {
                reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
            })
    }
}
