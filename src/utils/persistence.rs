//! Persistence gateway and the JSON blob format shared by every backend.
//!
//! The engine only ever sees an opaque string; backends decide where it
//! lives (memory for tests and the simulator, a checksummed file for play).

use crate::core::game_state::GameState;
use std::cell::{Cell, RefCell};
use std::io;

/// Where serialized game state is loaded from and saved to.
pub trait PersistenceGateway {
    /// The last saved blob, or `None` when nothing has been saved yet.
    fn load(&self) -> io::Result<Option<String>>;

    /// Replace the stored blob.
    fn save(&self, blob: &str) -> io::Result<()>;
}

impl<T: PersistenceGateway + ?Sized> PersistenceGateway for &T {
    fn load(&self) -> io::Result<Option<String>> {
        (**self).load()
    }

    fn save(&self, blob: &str) -> io::Result<()> {
        (**self).save(blob)
    }
}

impl<T: PersistenceGateway + ?Sized> PersistenceGateway for Box<T> {
    fn load(&self) -> io::Result<Option<String>> {
        (**self).load()
    }

    fn save(&self, blob: &str) -> io::Result<()> {
        (**self).save(blob)
    }
}

/// Serialize a state into the blob format (camelCase JSON).
pub fn encode_state(state: &GameState) -> io::Result<String> {
    serde_json::to_string(state).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Parse a blob, returning `None` when it is not a readable state.
///
/// Missing optional sections fall back to serde defaults; the caller is
/// expected to run [`GameState::repair`] on the result.
pub fn decode_state(blob: &str) -> Option<GameState> {
    match serde_json::from_str(blob) {
        Ok(state) => Some(state),
        Err(e) => {
            log::warn!("discarding malformed save blob: {}", e);
            None
        }
    }
}

/// In-process gateway. Reads and writes can each be switched into a
/// failing mode to exercise persistence-failure handling.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: RefCell<Option<String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    saves: Cell<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `blob`.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        let store = Self::new();
        store.blob.replace(Some(blob.into()));
        store
    }

    /// Make subsequent loads fail (`true`) or succeed again (`false`).
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Make subsequent saves fail (`true`) or succeed again (`false`).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Current stored blob.
    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> u32 {
        self.saves.get()
    }
}

impl PersistenceGateway for MemoryStore {
    fn load(&self) -> io::Result<Option<String>> {
        if self.fail_reads.get() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "memory store is rejecting reads",
            ));
        }
        Ok(self.blob.borrow().clone())
    }

    fn save(&self, blob: &str) -> io::Result<()> {
        if self.fail_writes.get() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "memory store is rejecting writes",
            ));
        }
        self.blob.replace(Some(blob.to_string()));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upgrades::UpgradeId;

    #[test]
    fn test_encode_decode_keeps_progress() {
        let mut state = GameState::new(1_000);
        state.resource = 1234.5;
        state.total_clicks = 77;
        state.upgrade_mut(UpgradeId::Mine).level = 3;

        let blob = encode_state(&state).unwrap();
        let loaded = decode_state(&blob).unwrap();
        assert_eq!(loaded.resource, 1234.5);
        assert_eq!(loaded.total_clicks, 77);
        assert_eq!(loaded.upgrade_level(UpgradeId::Mine), 3);
        assert_eq!(loaded.special_events, state.special_events);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_state("not json").is_none());
        assert!(decode_state("{\"resource\": \"lots\"}").is_none());
    }

    #[test]
    fn test_memory_store_save_and_load() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save("{}").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("{}"));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_memory_store_failing_writes_keep_old_blob() {
        let store = MemoryStore::with_blob("old");
        store.set_fail_writes(true);
        assert!(store.save("new").is_err());
        assert_eq!(store.blob().as_deref(), Some("old"));
        assert_eq!(store.save_count(), 0);

        store.set_fail_writes(false);
        store.save("new").unwrap();
        assert_eq!(store.blob().as_deref(), Some("new"));
    }
}
