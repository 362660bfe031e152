//! Guess scoring
//!
//! Implements Wordle's feedback rules for words of any length, including
//! proper handling of duplicate letters.

use super::verdict::LetterVerdict;
use super::word::char_counts;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A scored guess: the word and one verdict per letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub word: String,
    #[serde(rename = "results")]
    pub verdicts: Vec<LetterVerdict>,
}

impl Guess {
    /// Score `word` against `answer`
    #[must_use]
    pub fn scored(answer: &str, word: &str) -> Self {
        Self {
            word: word.to_string(),
            verdicts: score(answer, word, answer.len()),
        }
    }

    /// All letters in the correct position
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.verdicts.is_empty() && self.verdicts.iter().all(|&v| v == LetterVerdict::Correct)
    }

    /// Emoji row like "🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().map(|v| v.emoji()).collect()
    }
}

/// Calculate the verdicts when `guess` is played against `answer`
///
/// Both strings must be `word_length` lowercase ASCII letters; the caller
/// guarantees this.
///
/// # Algorithm
/// 1. Start every position as `Absent` and count the answer's letters
/// 2. First pass: mark exact matches `Correct` and remove them from the pool
/// 3. Second pass: mark remaining letters `Present` while the pool still has them
///
/// # Examples
/// ```
/// use wordle_ranks::core::{LetterVerdict::*, score};
///
/// assert_eq!(
///     score("abcde", "aabbb", 5),
///     vec![Correct, Absent, Present, Absent, Absent]
/// );
/// ```
#[must_use]
pub fn score(answer: &str, guess: &str, word_length: usize) -> Vec<LetterVerdict> {
    debug_assert_eq!(answer.len(), word_length, "answer length mismatch");
    debug_assert_eq!(guess.len(), word_length, "guess length mismatch");

    let answer = answer.as_bytes();
    let guess = guess.as_bytes();
    let len = word_length.min(answer.len()).min(guess.len());

    let mut result = vec![LetterVerdict::Absent; word_length];
    let mut answer_available = char_counts(answer);

    // First pass: exact position matches
    // Allow: index needed to access guess[i], answer[i] and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..len {
        if guess[i] == answer[i] {
            result[i] = LetterVerdict::Correct;
            if let Some(count) = answer_available.get_mut(&guess[i]) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: right letter, wrong position
    #[allow(clippy::needless_range_loop)]
    for i in 0..len {
        if result[i] == LetterVerdict::Correct {
            continue;
        }
        if let Some(count) = answer_available.get_mut(&guess[i])
            && *count > 0
        {
            result[i] = LetterVerdict::Present;
            *count -= 1;
        }
    }

    result
}

/// Best verdict seen for each letter across `guesses` (keyboard colouring)
#[must_use]
pub fn letter_states(guesses: &[Guess]) -> BTreeMap<char, LetterVerdict> {
    let mut states: FxHashMap<char, LetterVerdict> = FxHashMap::default();
    for guess in guesses {
        for (ch, &verdict) in guess.word.chars().zip(&guess.verdicts) {
            let entry = states.entry(ch).or_default();
            if verdict > *entry {
                *entry = verdict;
            }
        }
    }
    states.into_iter().collect()
}
