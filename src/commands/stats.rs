//! Statistics command

use super::select_modes;
use crate::history::HistoryStore;
use crate::modes::GameMode;
use crate::stats::GameStats;

/// Statistics for one mode
#[derive(Debug, Clone)]
pub struct ModeStats {
    pub mode: &'static GameMode,
    pub stats: GameStats,
}

/// Aggregate history for the selected mode, or for every mode
///
/// # Errors
///
/// Returns an error if `mode_id` is not a known mode.
pub fn collect_stats(history: &HistoryStore, mode_id: Option<&str>) -> Result<Vec<ModeStats>, String> {
    Ok(select_modes(mode_id)?
        .into_iter()
        .map(|mode| ModeStats {
            mode,
            stats: GameStats::compute(history.all(), mode),
        })
        .collect())
}
