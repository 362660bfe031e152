//! Finished-game history, newest first

use super::entry::HistoryEntry;
use crate::storage::{HISTORY_KEY, Storage};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// In-memory history mirrored to [`HISTORY_KEY`]
///
/// Entries are kept sorted by descending timestamp. Every mutation rewrites
/// the whole persisted collection.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Load persisted history
    ///
    /// A blob that is not a JSON array loads as empty. Individual entries that
    /// do not parse are skipped.
    #[must_use]
    pub fn load(storage: &Storage) -> Self {
        let raw: Vec<serde_json::Value> = match storage.load_json(HISTORY_KEY) {
            Ok(Some(values)) => values,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "Discarding unreadable history");
                Vec::new()
            }
        };

        let total = raw.len();
        let entries: Vec<HistoryEntry> = raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value(value) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!(error = %err, "Skipping malformed history entry");
                    None
                }
            })
            .collect();

        tracing::debug!(loaded = entries.len(), skipped = total - entries.len(), "History loaded");
        Self::from_entries(entries)
    }

    /// Build a store from entries in any order
    #[must_use]
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self { entries }
    }

    /// Add a finished game and persist the collection
    ///
    /// The entry goes in front of every entry that is not newer than it, so
    /// the usual case is a plain prepend.
    pub fn append(&mut self, entry: HistoryEntry, storage: &mut Storage) {
        let index = self
            .entries
            .partition_point(|existing| existing.timestamp > entry.timestamp);
        self.entries.insert(index, entry);
        self.persist(storage);
    }

    /// Every entry, newest first
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry and persist the empty collection
    pub fn clear(&mut self, storage: &mut Storage) {
        self.entries.clear();
        self.persist(storage);
    }

    /// Entries for one mode, newest first
    pub fn entries_for<'a>(&'a self, mode_id: &'a str) -> impl Iterator<Item = &'a HistoryEntry> + 'a {
        self.entries.iter().filter(move |entry| entry.mode == mode_id)
    }

    /// Entries for one mode grouped by local calendar date
    #[must_use]
    pub fn by_date(&self, mode_id: &str) -> BTreeMap<NaiveDate, Vec<&HistoryEntry>> {
        let mut days: BTreeMap<NaiveDate, Vec<&HistoryEntry>> = BTreeMap::new();
        for entry in self.entries.iter().filter(|entry| entry.mode == mode_id) {
            if let Some(date) = entry.local_date() {
                days.entry(date).or_default().push(entry);
            }
        }
        days
    }

    fn persist(&self, storage: &mut Storage) {
        storage.save_json(HISTORY_KEY, &self.entries);
    }
}
