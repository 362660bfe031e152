//! Key-value persistence
//!
//! [`KeyValueStore`] is the raw string store a platform provides. [`Storage`]
//! layers the game's keys on top of it. Its writes are fire-and-forget: a
//! failure is logged and the in-memory game carries on.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::{Result, StorageError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Seed used when none is persisted or the stored value is unusable
pub const DEFAULT_SEED: u64 = 12345;

pub const MODE_KEY: &str = "current_mode";
pub const SEED_KEY: &str = "random_seed";
pub const HISTORY_KEY: &str = "history_entries_json";

#[must_use]
pub fn answer_index_key(mode_id: &str) -> String {
    format!("answer_index_{mode_id}")
}

#[must_use]
pub fn current_game_key(mode_id: &str) -> String {
    format!("current_game_{mode_id}")
}

/// String key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the value could not be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the removal could not be persisted.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Typed access to the game's persisted keys
pub struct Storage {
    store: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

impl Storage {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Storage backed by a fresh [`MemoryStore`]
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    pub fn set_raw(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            tracing::warn!(key, error = %err, "Failed to persist value");
        } else {
            tracing::debug!(key, "Persisted value");
        }
    }

    pub fn remove(&mut self, key: &str) {
        if let Err(err) = self.store.remove(key) {
            tracing::warn!(key, error = %err, "Failed to remove value");
        }
    }

    /// Decode the JSON stored at `key`
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Json`] if the stored text is not valid JSON
    /// for `T`. A missing key is `Ok(None)`.
    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.store.get(key) else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Json {
                context: key.to_string(),
                source,
            })
    }

    /// Encode `value` as JSON and store it at `key`
    pub fn save_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.set_raw(key, &json),
            Err(err) => tracing::warn!(key, error = %err, "Failed to encode value"),
        }
    }

    #[must_use]
    pub fn current_mode(&self) -> Option<String> {
        self.store.get(MODE_KEY)
    }

    pub fn set_current_mode(&mut self, mode_id: &str) {
        self.set_raw(MODE_KEY, mode_id);
    }

    /// Persisted seed, or [`DEFAULT_SEED`] when absent, zero or unparsable
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.store
            .get(SEED_KEY)
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|&seed| seed != 0)
            .unwrap_or(DEFAULT_SEED)
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.set_raw(SEED_KEY, &seed.to_string());
    }

    /// Persisted sequencer cursor for `mode_id`, 0 when unusable
    #[must_use]
    pub fn answer_index(&self, mode_id: &str) -> usize {
        self.store
            .get(&answer_index_key(mode_id))
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn set_answer_index(&mut self, mode_id: &str, cursor: usize) {
        self.set_raw(&answer_index_key(mode_id), &cursor.to_string());
    }
}
