//! Observable session state

use crate::core::{GameStatus, Guess};
use crate::modes::GameMode;

pub const MSG_NOT_IN_LIST: &str = "Not in the word list.";
pub const MSG_START_NEW_GAME: &str = "Start a new game.";
pub const MSG_NEW_GAME: &str = "New game started.";
pub const MSG_FULL_RESET: &str = "Fully reset!";

#[must_use]
pub fn wrong_length_message(word_length: usize) -> String {
    format!("Enter a {word_length}-letter word.")
}

#[must_use]
pub fn won_message(answer: &str) -> String {
    format!("You solved it! The word was {}.", answer.to_uppercase())
}

#[must_use]
pub fn lost_message(answer: &str) -> String {
    format!("Out of guesses. The word was {}.", answer.to_uppercase())
}

/// What a front-end renders
///
/// Invariants: `guesses.len() <= max_guesses`,
/// `current_input.len() <= word_length`, and `current_input` is empty once
/// the game is over.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Word lists for `mode` are still being loaded
    pub is_loading: bool,
    pub message: Option<String>,
    pub guesses: Vec<Guess>,
    pub current_input: String,
    pub status: GameStatus,
    pub max_guesses: usize,
    pub word_length: usize,
    pub mode: &'static GameMode,
}

impl SessionState {
    pub(crate) fn loading(mode: &'static GameMode) -> Self {
        Self {
            is_loading: true,
            message: None,
            guesses: Vec::new(),
            current_input: String::new(),
            status: GameStatus::InProgress,
            max_guesses: mode.max_guesses,
            word_length: mode.word_length,
            mode,
        }
    }

    /// Guesses still available
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}
