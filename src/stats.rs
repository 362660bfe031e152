//! Per-mode statistics over history

use crate::history::HistoryEntry;
use crate::modes::GameMode;

/// Result of aggregating a mode's history
#[derive(Debug, Clone, PartialEq)]
pub enum GameStats {
    /// No games recorded for the mode
    NoGames,
    Summary(StatsSummary),
}

/// Totals and guess distribution for a mode
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total: usize,
    pub wins: usize,
    /// Percentage in `0.0..=100.0`
    pub win_rate: f64,
    /// `distribution[i]` is the number of games won in exactly `i + 1` guesses
    pub distribution: Vec<usize>,
    pub min_count: usize,
    pub max_count: usize,
}

impl GameStats {
    /// Aggregate `history` for `mode`
    ///
    /// Only won games appear in the distribution. Lost games count towards
    /// `total` and the win rate.
    pub fn compute<'a>(history: impl IntoIterator<Item = &'a HistoryEntry>, mode: &GameMode) -> Self {
        let mut total = 0;
        let mut wins = 0;
        let mut distribution = vec![0; mode.max_guesses];

        for entry in history.into_iter().filter(|e| e.mode == mode.id) {
            total += 1;
            if !entry.won {
                continue;
            }
            wins += 1;
            if let Some(slot) = entry
                .guess_count()
                .checked_sub(1)
                .and_then(|index| distribution.get_mut(index))
            {
                *slot += 1;
            }
        }

        if total == 0 {
            return Self::NoGames;
        }

        let win_rate = (wins as f64 / total as f64 * 100.0).clamp(0.0, 100.0);
        let min_count = distribution.iter().copied().min().unwrap_or(0);
        let max_count = distribution.iter().copied().max().unwrap_or(0);

        Self::Summary(StatsSummary {
            total,
            wins,
            win_rate,
            distribution,
            min_count,
            max_count,
        })
    }

    #[must_use]
    pub fn summary(&self) -> Option<&StatsSummary> {
        match self {
            Self::NoGames => None,
            Self::Summary(summary) => Some(summary),
        }
    }
}

impl StatsSummary {
    #[must_use]
    pub const fn losses(&self) -> usize {
        self.total - self.wins
    }

    /// Win rate rounded to a whole percent
    #[must_use]
    pub fn win_percent(&self) -> u32 {
        self.win_rate.round() as u32
    }

    /// Position of `count` between the smallest and largest bucket, in `0.0..=1.0`
    ///
    /// When every bucket holds the same count the result is `1.0`.
    #[must_use]
    pub fn scale(&self, count: usize) -> f64 {
        if self.max_count == self.min_count {
            return 1.0;
        }
        let span = (self.max_count - self.min_count) as f64;
        (count.saturating_sub(self.min_count) as f64 / span).clamp(0.0, 1.0)
    }
}
