//! Read-on-open, write-on-change session over a preference record.

use std::cell::Cell;

use crate::mode::LayoutMode;
use crate::storage::{PrefStorage, StorageError};

/// Storage key for the operator console layout preference.
pub const LAYOUT_KEY: &str = "layout-preference";

/// One view session's handle on the layout preference.
///
/// The persisted value is read exactly once when the session opens; the
/// resolved mode is cached in memory and only this session's own [`set`]
/// calls update it. Concurrent sessions (other tabs, other mounted views)
/// are not notified; each picks up outside changes when it next opens.
///
/// [`set`]: PrefSession::set
pub struct PrefSession<S> {
    key: &'static str,
    storage: S,
    current: Cell<LayoutMode>,
}

impl<S: PrefStorage> PrefSession<S> {
    /// Open a session for `key`, resolving the persisted value immediately.
    ///
    /// Missing, unreadable, and unrecognized entries all resolve to the
    /// default mode; no failure escapes this constructor.
    #[must_use]
    pub fn open(key: &'static str, storage: S) -> Self {
        let current = storage
            .read(key)
            .and_then(|raw| LayoutMode::parse(&raw))
            .unwrap_or_default();
        Self {
            key,
            storage,
            current: Cell::new(current),
        }
    }

    /// Session for the shipped layout preference record.
    #[must_use]
    pub fn layout(storage: S) -> Self {
        Self::open(LAYOUT_KEY, storage)
    }

    /// The mode this session currently holds. Always a valid member of the
    /// enumeration; pure read.
    #[must_use]
    pub fn current(&self) -> LayoutMode {
        self.current.get()
    }

    /// Adopt `mode` for this session and persist it.
    ///
    /// The in-memory copy updates first so the calling view re-renders
    /// immediately; the durable write follows. A failed write is logged and
    /// otherwise absorbed; the session keeps the new mode for the rest of
    /// the view's lifetime.
    pub fn set(&self, mode: LayoutMode) {
        self.current.set(mode);
        if let Err(err) = self.storage.write(self.key, mode.as_str()) {
            log_write_failure(self.key, &err);
        }
    }

    /// Key of the record this session mediates.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }
}

#[cfg(target_arch = "wasm32")]
fn log_write_failure(key: &str, err: &StorageError) {
    gloo::console::error!("preference write failed", key, err.to_string());
}

#[cfg(not(target_arch = "wasm32"))]
fn log_write_failure(key: &str, err: &StorageError) {
    // No console off-browser; the session keeps its in-memory value either way.
    let _ = (key, err);
}

#[cfg(test)]
mod tests {
    use super::{LAYOUT_KEY, PrefSession};
    use crate::mode::LayoutMode;
    use crate::storage::{MemoryStorage, PrefStorage, StorageError};

    struct RejectingStorage;

    impl PrefStorage for RejectingStorage {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteRejected {
                reason: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn empty_store_resolves_default() {
        let session = PrefSession::layout(MemoryStorage::new());
        assert_eq!(session.current(), LayoutMode::Table);
    }

    #[test]
    fn stored_grid_resolves_grid() {
        let storage = MemoryStorage::new();
        storage.write(LAYOUT_KEY, "grid").expect("seed");
        assert_eq!(PrefSession::layout(storage).current(), LayoutMode::Grid);
    }

    #[test]
    fn corrupted_entry_resolves_default() {
        let storage = MemoryStorage::new();
        storage.write(LAYOUT_KEY, "gridX").expect("seed");
        assert_eq!(PrefSession::layout(storage).current(), LayoutMode::Table);
    }

    #[test]
    fn set_round_trips_through_reopen() {
        for mode in LayoutMode::all() {
            let storage = MemoryStorage::new();
            PrefSession::layout(storage.clone()).set(mode);
            assert_eq!(PrefSession::layout(storage).current(), mode);
        }
    }

    #[test]
    fn set_is_idempotent() {
        let storage = MemoryStorage::new();
        let session = PrefSession::layout(storage.clone());
        session.set(LayoutMode::Grid);
        session.set(LayoutMode::Grid);
        assert_eq!(storage.read(LAYOUT_KEY).as_deref(), Some("grid"));
        assert_eq!(PrefSession::layout(storage).current(), LayoutMode::Grid);
    }

    #[test]
    fn last_write_wins() {
        let storage = MemoryStorage::new();
        let session = PrefSession::layout(storage.clone());
        session.set(LayoutMode::Grid);
        session.set(LayoutMode::Table);
        assert_eq!(PrefSession::layout(storage).current(), LayoutMode::Table);
    }

    #[test]
    fn writes_are_canonical_tokens() {
        let storage = MemoryStorage::new();
        let session = PrefSession::layout(storage.clone());
        session.set(LayoutMode::Grid);
        assert_eq!(storage.read(LAYOUT_KEY).as_deref(), Some("grid"));
        session.set(LayoutMode::Table);
        assert_eq!(storage.read(LAYOUT_KEY).as_deref(), Some("table"));
    }

    #[test]
    fn out_of_band_garbage_never_echoes() {
        let storage = MemoryStorage::new();
        let session = PrefSession::layout(storage.clone());
        session.set(LayoutMode::Grid);
        storage.write(LAYOUT_KEY, "spiral").expect("inject");
        // The live session keeps its own copy; a fresh one falls back.
        assert_eq!(session.current(), LayoutMode::Grid);
        assert_eq!(PrefSession::layout(storage).current(), LayoutMode::Table);
    }

    #[test]
    fn sessions_do_not_observe_each_other() {
        let storage = MemoryStorage::new();
        let first = PrefSession::layout(storage.clone());
        let second = PrefSession::layout(storage.clone());
        first.set(LayoutMode::Grid);
        assert_eq!(second.current(), LayoutMode::Table);
        assert_eq!(PrefSession::layout(storage).current(), LayoutMode::Grid);
    }

    #[test]
    fn rejected_write_keeps_session_value() {
        let session = PrefSession::layout(RejectingStorage);
        session.set(LayoutMode::Grid);
        assert_eq!(session.current(), LayoutMode::Grid);
    }

    #[test]
    fn custom_keys_stay_isolated() {
        let storage = MemoryStorage::new();
        let layout = PrefSession::layout(storage.clone());
        let draft = PrefSession::open("draft-layout", storage.clone());
        draft.set(LayoutMode::Grid);
        assert_eq!(layout.key(), LAYOUT_KEY);
        assert_eq!(storage.read(LAYOUT_KEY), None);
        assert_eq!(storage.read("draft-layout").as_deref(), Some("grid"));
        assert_eq!(layout.current(), LayoutMode::Table);
    }
}
