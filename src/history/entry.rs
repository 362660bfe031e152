//! A finished game

use crate::modes::LEGACY_HISTORY_MODE;
use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

/// Record of one won or lost game
///
/// Persisted as `{timestamp, answer, won, guesses, mode}`. The calendar date
/// is derived from `timestamp` rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub answer: String,
    pub won: bool,
    pub guesses: Vec<String>,
    #[serde(default = "legacy_mode", deserialize_with = "mode_or_legacy")]
    pub mode: String,
}

fn legacy_mode() -> String {
    LEGACY_HISTORY_MODE.to_string()
}

// Entries written before modes existed have no `mode`, or a null one.
fn mode_or_legacy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(legacy_mode))
}

impl HistoryEntry {
    #[must_use]
    pub fn new(
        timestamp: i64,
        answer: impl Into<String>,
        won: bool,
        guesses: Vec<String>,
        mode: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            answer: answer.into(),
            won,
            guesses,
            mode: mode.into(),
        }
    }

    /// Number of guesses played
    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    /// Calendar date of the game in `tz`
    #[must_use]
    pub fn date_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<NaiveDate> {
        tz.timestamp_millis_opt(self.timestamp)
            .single()
            .map(|dt| dt.date_naive())
    }

    /// Local calendar date
    #[must_use]
    pub fn local_date(&self) -> Option<NaiveDate> {
        self.date_in(&Local)
    }

    /// Local date as `YYYY-MM-DD`, empty if the timestamp is out of range
    #[must_use]
    pub fn date_string(&self) -> String {
        self.local_date()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}
