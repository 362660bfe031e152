//! Per-letter verdicts and game status
//!
//! A verdict is ordered by how much it tells the player:
//! `Unused < Absent < Present < Correct`. The numeric encoding (0-3) is the
//! one used in persisted snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for a single tile or keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum LetterVerdict {
    /// Letter has not been tried yet
    #[default]
    Unused,
    /// Letter is not in the answer (or all its occurrences are accounted for)
    Absent,
    /// Letter is in the answer at another position
    Present,
    /// Letter is in the correct position
    Correct,
}

impl LetterVerdict {
    /// Numeric code used in persisted data
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Unused => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Decode a persisted numeric code
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Unused),
            1 => Some(Self::Absent),
            2 => Some(Self::Present),
            3 => Some(Self::Correct),
            _ => None,
        }
    }

    /// Emoji tile for share strings and plain terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Unused => '⬜',
        }
    }
}

impl From<LetterVerdict> for u8 {
    fn from(verdict: LetterVerdict) -> Self {
        verdict.code()
    }
}

impl TryFrom<u8> for LetterVerdict {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("Invalid letter verdict code: {code}"))
    }
}

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Parse the persisted spelling (`inProgress`, `won`, `lost`)
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "inProgress" => Some(Self::InProgress),
            "won" => Some(Self::Won),
            "lost" => Some(Self::Lost),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdicts_ordered_by_informativeness() {
        assert!(LetterVerdict::Unused < LetterVerdict::Absent);
        assert!(LetterVerdict::Absent < LetterVerdict::Present);
        assert!(LetterVerdict::Present < LetterVerdict::Correct);
    }

    #[test]
    fn verdict_codes() {
        for verdict in [
            LetterVerdict::Unused,
            LetterVerdict::Absent,
            LetterVerdict::Present,
            LetterVerdict::Correct,
        ] {
            assert_eq!(LetterVerdict::from_code(verdict.code()), Some(verdict));
        }
        assert_eq!(LetterVerdict::from_code(4), None);
    }

    #[test]
    fn verdict_serializes_as_number() {
        let json = serde_json::to_string(&vec![LetterVerdict::Correct, LetterVerdict::Absent]).unwrap();
        assert_eq!(json, "[3,1]");

        let parsed: Vec<LetterVerdict> = serde_json::from_str("[0,2]").unwrap();
        assert_eq!(parsed, vec![LetterVerdict::Unused, LetterVerdict::Present]);

        assert!(serde_json::from_str::<LetterVerdict>("7").is_err());
    }

    #[test]
    fn status_persisted_spelling() {
        assert_eq!(serde_json::to_string(&GameStatus::InProgress).unwrap(), "\"inProgress\"");
        assert_eq!(GameStatus::parse("won"), Some(GameStatus::Won));
        assert_eq!(GameStatus::parse("lost"), Some(GameStatus::Lost));
        assert_eq!(GameStatus::parse("finished"), None);
    }

    #[test]
    fn terminal_states() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
    }
}
