//! Core domain types for the game
//!
//! This module contains the fundamental rule types with no IO.
//! Everything here is pure and deterministic.

mod score;
mod verdict;
mod word;

pub use score::{Guess, letter_states, score};
pub use verdict::{GameStatus, LetterVerdict};
pub use word::{Word, WordError};
