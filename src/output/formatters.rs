//! Formatting utilities for terminal output

use crate::core::{GameStatus, Guess, LetterVerdict};
use crate::modes::GameMode;

/// Format verdicts as an emoji row
#[must_use]
pub fn verdicts_to_emoji(verdicts: &[LetterVerdict]) -> String {
    verdicts.iter().map(|v| v.emoji()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Spoiler-free summary of a finished game, e.g. "Pupil 3/5" plus emoji rows
#[must_use]
pub fn share_text(mode: &GameMode, guesses: &[Guess], status: GameStatus) -> String {
    let score = match status {
        GameStatus::Won => guesses.len().to_string(),
        GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
    };
    let mut text = format!("{} {}/{}", mode.label, score, mode.max_guesses);
    for guess in guesses {
        text.push('\n');
        text.push_str(&guess.to_emoji());
    }
    text
}
