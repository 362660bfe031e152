//! History command

use super::select_modes;
use crate::history::{HistoryEntry, HistoryStore};
use crate::modes::GameMode;
use chrono::NaiveDate;

/// A mode's recent games grouped by day, newest day first
#[derive(Debug, Clone)]
pub struct ModeHistory<'a> {
    pub mode: &'static GameMode,
    pub days: Vec<(NaiveDate, Vec<&'a HistoryEntry>)>,
}

impl ModeHistory<'_> {
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.days.iter().map(|(_, games)| games.len()).sum()
    }
}

/// Recent games for the selected mode, or every mode that has games
///
/// At most `limit` games are kept per mode, newest first.
///
/// # Errors
///
/// Returns an error if `mode_id` is not a known mode.
pub fn collect_history<'a>(
    history: &'a HistoryStore,
    mode_id: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<ModeHistory<'a>>, String> {
    let explicit = mode_id.is_some();
    let mut report = Vec::new();

    for mode in select_modes(mode_id)? {
        let mut remaining = limit.unwrap_or(usize::MAX);
        let mut days = Vec::new();

        for (date, mut games) in history.by_date(mode.id).into_iter().rev() {
            if remaining == 0 {
                break;
            }
            games.truncate(remaining);
            remaining -= games.len();
            days.push((date, games));
        }

        if explicit || !days.is_empty() {
            report.push(ModeHistory { mode, days });
        }
    }

    Ok(report)
}
