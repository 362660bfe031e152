//! Resumable in-progress games
//!
//! One snapshot per mode, stored at `current_game_<mode>`. Persisted data may
//! be stale, hand-edited or written by an older build, so it is parsed
//! leniently and validated against the mode before being trusted.

use crate::core::{GameStatus, Guess, LetterVerdict};
use crate::modes::{GameMode, ModeCatalog};
use crate::storage::{Storage, current_game_key};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// State needed to resume a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub answer: String,
    pub guesses: Vec<Guess>,
    pub current_input: String,
    pub status: GameStatus,
    pub message: Option<String>,
    pub max_guesses: usize,
    pub word_length: usize,
    pub is_active: bool,
    pub updated_at: i64,
}

/// Snapshot as found in storage, before validation
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawSnapshot {
    answer: Option<String>,
    guesses: Option<serde_json::Value>,
    current_input: Option<String>,
    status: Option<String>,
    message: Option<String>,
    max_guesses: Option<usize>,
    word_length: Option<usize>,
    is_active: Option<bool>,
    updated_at: Option<i64>,
}

/// Why a persisted snapshot was not restored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("snapshot is not valid JSON")]
    Malformed,
    #[error("game is no longer active")]
    Inactive,
    #[error("snapshot has no answer")]
    MissingAnswer,
    #[error("answer {0:?} is not a word of the mode's length")]
    BadAnswer(String),
    #[error("word length {found:?} does not match mode length {expected}")]
    WordLength { expected: usize, found: Option<usize> },
    #[error("unknown status {0:?}")]
    UnknownStatus(String),
    #[error("guesses are not well-formed")]
    BadGuesses,
    #[error("{count} guesses exceed the limit of {max}")]
    TooManyGuesses { count: usize, max: usize },
}

impl RawSnapshot {
    fn has_guesses(&self) -> bool {
        self.guesses
            .as_ref()
            .and_then(serde_json::Value::as_array)
            .is_some_and(|guesses| !guesses.is_empty())
    }

    /// Explicit `isActive`, otherwise inferred from status and progress
    fn is_active(&self) -> bool {
        self.is_active.unwrap_or_else(|| {
            self.status.as_deref() == Some("inProgress")
                || self.has_guesses()
                || self.current_input.as_deref().is_some_and(|input| !input.is_empty())
        })
    }

    fn validate(self, mode: &GameMode) -> Result<GameSnapshot, Rejection> {
        if !self.is_active() {
            return Err(Rejection::Inactive);
        }

        let answer = self
            .answer
            .filter(|answer| !answer.is_empty())
            .ok_or(Rejection::MissingAnswer)?;

        if self.word_length != Some(mode.word_length) {
            return Err(Rejection::WordLength {
                expected: mode.word_length,
                found: self.word_length,
            });
        }

        if answer.len() != mode.word_length || !answer.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(Rejection::BadAnswer(answer));
        }

        let status = match self.status.as_deref() {
            None => GameStatus::InProgress,
            Some(raw) => GameStatus::parse(raw).ok_or_else(|| Rejection::UnknownStatus(raw.to_string()))?,
        };

        let guesses: Vec<Guess> = match self.guesses {
            None => Vec::new(),
            Some(value) => serde_json::from_value(value).map_err(|_| Rejection::BadGuesses)?,
        };
        if guesses
            .iter()
            .any(|guess| !is_well_formed(guess, mode.word_length))
        {
            return Err(Rejection::BadGuesses);
        }

        let over_limit = if status.is_terminal() {
            guesses.len() > mode.max_guesses
        } else {
            guesses.len() >= mode.max_guesses
        };
        if over_limit {
            return Err(Rejection::TooManyGuesses {
                count: guesses.len(),
                max: mode.max_guesses,
            });
        }

        let current_input = if status.is_terminal() {
            String::new()
        } else {
            self.current_input
                .unwrap_or_default()
                .chars()
                .filter(char::is_ascii_lowercase)
                .take(mode.word_length)
                .collect()
        };

        Ok(GameSnapshot {
            answer,
            guesses,
            current_input,
            status,
            message: self.message,
            max_guesses: mode.max_guesses,
            word_length: mode.word_length,
            is_active: true,
            updated_at: self.updated_at.unwrap_or(0),
        })
    }
}

fn is_well_formed(guess: &Guess, word_length: usize) -> bool {
    guess.word.len() == word_length
        && guess.word.bytes().all(|b| b.is_ascii_lowercase())
        && guess.verdicts.len() == word_length
        && !guess.verdicts.contains(&LetterVerdict::Unused)
}

/// Parse and validate snapshot JSON for `mode`
///
/// # Errors
///
/// Returns the [`Rejection`] that disqualified the snapshot.
pub fn parse_snapshot(raw: &str, mode: &GameMode) -> Result<GameSnapshot, Rejection> {
    let parsed: RawSnapshot = serde_json::from_str(raw).map_err(|_| Rejection::Malformed)?;
    parsed.validate(mode)
}

/// Persist `snapshot` as the resumable game for `mode_id`
pub fn save_snapshot(storage: &mut Storage, mode_id: &str, snapshot: &GameSnapshot) {
    storage.save_json(&current_game_key(mode_id), snapshot);
}

/// Restore the resumable game for `mode`, if a valid one exists
#[must_use]
pub fn load_snapshot(storage: &Storage, mode: &GameMode) -> Option<GameSnapshot> {
    let raw = storage.raw(&current_game_key(mode.id))?;
    match parse_snapshot(&raw, mode) {
        Ok(snapshot) => Some(snapshot),
        Err(Rejection::Inactive) => None,
        Err(reason) => {
            tracing::warn!(mode = mode.id, %reason, "Ignoring persisted game");
            None
        }
    }
}

pub fn clear_snapshot(storage: &mut Storage, mode_id: &str) {
    storage.remove(&current_game_key(mode_id));
}

/// Modes with an active persisted game, most recently updated first
///
/// Inactive snapshots found along the way are removed. Snapshots that cannot
/// be parsed at all are left for [`load_snapshot`] to reject.
pub fn resumable_modes(storage: &mut Storage) -> Vec<&'static GameMode> {
    let mut active: Vec<(&'static GameMode, i64)> = Vec::new();

    for mode in ModeCatalog::all() {
        let Some(raw) = storage.raw(&current_game_key(mode.id)) else {
            continue;
        };
        let Ok(parsed) = serde_json::from_str::<RawSnapshot>(&raw) else {
            continue;
        };
        if parsed.is_active() {
            active.push((mode, parsed.updated_at.unwrap_or(0)));
        } else {
            clear_snapshot(storage, mode.id);
        }
    }

    active.sort_by(|a, b| b.1.cmp(&a.1));
    active.into_iter().map(|(mode, _)| mode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict::{Absent, Correct, Present};
    use serde_json::json;

    fn classic() -> &'static GameMode {
        ModeCatalog::resolve(Some("classic"))
    }

    fn sample() -> GameSnapshot {
        GameSnapshot {
            answer: "crane".into(),
            guesses: vec![
                Guess::scored("crane", "slate"),
                Guess::scored("crane", "brine"),
            ],
            current_input: "cr".into(),
            status: GameStatus::InProgress,
            message: None,
            max_guesses: 6,
            word_length: 5,
            is_active: true,
            updated_at: 42,
        }
    }

    #[test]
    fn json_shape() {
        let snapshot = GameSnapshot {
            guesses: vec![Guess {
                word: "slate".into(),
                verdicts: vec![Absent, Absent, Correct, Absent, Correct],
            }],
            ..sample()
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            value,
            json!({
                "answer": "crane",
                "guesses": [{"word": "slate", "results": [1, 1, 3, 1, 3]}],
                "currentInput": "cr",
                "status": "inProgress",
                "message": null,
                "maxGuesses": 6,
                "wordLength": 5,
                "isActive": true,
                "updatedAt": 42
            })
        );
    }

    #[test]
    fn round_trip_through_storage() {
        let mut storage = Storage::in_memory();
        save_snapshot(&mut storage, "classic", &sample());
        assert_eq!(load_snapshot(&storage, classic()), Some(sample()));

        clear_snapshot(&mut storage, "classic");
        assert_eq!(load_snapshot(&storage, classic()), None);
    }

    #[test]
    fn other_word_length_is_rejected() {
        let raw = serde_json::to_string(&sample()).unwrap();
        let epic = ModeCatalog::resolve(Some("epic"));
        assert_eq!(
            parse_snapshot(&raw, epic),
            Err(Rejection::WordLength {
                expected: 6,
                found: Some(5)
            })
        );
    }

    #[test]
    fn rejections() {
        let mode = classic();
        let base = serde_json::to_value(sample()).unwrap();
        let with = |key: &str, value: serde_json::Value| {
            let mut snapshot = base.clone();
            snapshot[key] = value;
            snapshot.to_string()
        };

        assert_eq!(parse_snapshot("not json", mode), Err(Rejection::Malformed));
        assert_eq!(parse_snapshot(&with("isActive", json!(false)), mode), Err(Rejection::Inactive));
        assert_eq!(parse_snapshot(&with("answer", json!("")), mode), Err(Rejection::MissingAnswer));
        assert_eq!(
            parse_snapshot(&with("answer", json!("cat")), mode),
            Err(Rejection::BadAnswer("cat".into()))
        );
        assert_eq!(
            parse_snapshot(&with("answer", json!("CRANE")), mode),
            Err(Rejection::BadAnswer("CRANE".into()))
        );
        assert_eq!(
            parse_snapshot(&with("status", json!("paused")), mode),
            Err(Rejection::UnknownStatus("paused".into()))
        );
        assert_eq!(parse_snapshot(&with("guesses", json!("slate")), mode), Err(Rejection::BadGuesses));
        assert_eq!(
            parse_snapshot(&with("guesses", json!([{"word": "slat", "results": [1, 1, 3, 1]}])), mode),
            Err(Rejection::BadGuesses)
        );
        assert_eq!(
            parse_snapshot(&with("guesses", json!([{"word": "slate", "results": [1, 1, 9, 1, 3]}])), mode),
            Err(Rejection::BadGuesses)
        );

        let six: Vec<Guess> = (0..6).map(|_| Guess::scored("crane", "slate")).collect();
        assert_eq!(
            parse_snapshot(&with("guesses", serde_json::to_value(six).unwrap()), mode),
            Err(Rejection::TooManyGuesses { count: 6, max: 6 })
        );
    }

    #[test]
    fn missing_is_active_is_inferred() {
        let mode = classic();
        let mut value = serde_json::to_value(sample()).unwrap();
        value.as_object_mut().unwrap().remove("isActive");
        assert!(parse_snapshot(&value.to_string(), mode).is_ok());

        value["status"] = json!("won");
        value["guesses"] = json!([]);
        value["currentInput"] = json!("");
        assert_eq!(parse_snapshot(&value.to_string(), mode), Err(Rejection::Inactive));
    }

    #[test]
    fn input_is_truncated_to_word_length() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["currentInput"] = json!("cranes");
        let snapshot = parse_snapshot(&value.to_string(), classic()).unwrap();
        assert_eq!(snapshot.current_input, "crane");
    }

    #[test]
    fn resumable_modes_newest_first_and_purges_inactive() {
        let mut storage = Storage::in_memory();
        let mini = GameSnapshot {
            answer: "cat".into(),
            guesses: vec![],
            current_input: "c".into(),
            max_guesses: 5,
            word_length: 3,
            updated_at: 10,
            ..sample()
        };
        let finished = GameSnapshot {
            status: GameStatus::Won,
            is_active: false,
            guesses: vec![Guess::scored("crane", "crane")],
            current_input: String::new(),
            ..sample()
        };
        let epic = GameSnapshot {
            answer: "planet".into(),
            guesses: vec![Guess {
                word: "forest".into(),
                verdicts: vec![Absent, Absent, Absent, Present, Absent, Correct],
            }],
            current_input: String::new(),
            max_guesses: 7,
            word_length: 6,
            updated_at: 99,
            ..sample()
        };

        save_snapshot(&mut storage, "mini", &mini);
        save_snapshot(&mut storage, "classic", &finished);
        save_snapshot(&mut storage, "epic", &epic);

        let ids: Vec<&str> = resumable_modes(&mut storage).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["epic", "mini"]);
        assert_eq!(storage.raw(&current_game_key("classic")), None);
    }
}
