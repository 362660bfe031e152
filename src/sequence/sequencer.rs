//! Answer sequencing
//!
//! Answers are served by walking a seeded shuffle of the answer pool. Every
//! word is used once per cycle before any repeats, and only `(seed, cursor)`
//! needs persisting to resume the walk.

use super::random::SeededRandom;
use crate::modes::GameMode;

/// Shuffled answer pool plus the position of the next answer
#[derive(Debug, Clone)]
pub struct AnswerSequencer {
    seed: u64,
    pool: Vec<String>,
    cursor: usize,
}

impl AnswerSequencer {
    /// Empty sequencer; call [`reshuffle`](Self::reshuffle) before drawing
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            pool: Vec::new(),
            cursor: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The current shuffled order
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// Index of the next answer to serve
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Restore a persisted cursor
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = if self.pool.is_empty() {
            cursor
        } else {
            cursor % self.pool.len()
        };
    }

    /// Rebuild the pool as `SeededRandom(seed).shuffle(answers)`
    ///
    /// Empty `answers` shuffle the mode's fallback words instead. The cursor
    /// is kept (wrapped to the new length) so that a restored cursor keeps
    /// its place when the same seed and list are reloaded.
    pub fn reshuffle(&mut self, mode: &GameMode, answers: &[String], seed: u64) {
        let source: Vec<String> = if answers.is_empty() {
            mode.fallback_words.iter().map(|&w| w.to_string()).collect()
        } else {
            answers.to_vec()
        };

        self.seed = seed;
        self.pool = SeededRandom::new(seed).shuffled(&source);
        self.set_cursor(self.cursor);

        tracing::debug!(
            mode = mode.id,
            seed,
            pool = self.pool.len(),
            cursor = self.cursor,
            "Answer pool shuffled"
        );
    }

    /// Serve the answer at the cursor and advance, wrapping at the end
    ///
    /// An empty pool serves the mode's fallback words in catalog order.
    pub fn next_answer(&mut self, mode: &GameMode) -> String {
        let answer = if self.pool.is_empty() {
            let fallback = mode.fallback_words;
            if fallback.is_empty() {
                return String::new();
            }
            let index = self.cursor % fallback.len();
            self.cursor = (index + 1) % fallback.len();
            fallback[index].to_string()
        } else {
            let index = self.cursor % self.pool.len();
            self.cursor = (index + 1) % self.pool.len();
            self.pool[index].clone()
        };

        tracing::debug!(mode = mode.id, cursor = self.cursor, "Drew next answer");
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::ModeCatalog;
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn full_cycle_then_repeat() {
        let mode = ModeCatalog::default_mode();
        let answers = words(&["cat", "dog", "owl", "yak", "ant"]);
        let mut sequencer = AnswerSequencer::new(99);
        sequencer.reshuffle(mode, &answers, 99);

        let cycle: Vec<String> = (0..answers.len()).map(|_| sequencer.next_answer(mode)).collect();
        let mut sorted = cycle.clone();
        sorted.sort();
        let mut expected = answers.clone();
        expected.sort();
        assert_eq!(sorted, expected);

        assert_eq!(sequencer.next_answer(mode), cycle[0]);
    }

    #[test]
    fn order_matches_seeded_shuffle() {
        let mode = ModeCatalog::default_mode();
        let answers = words(&["cat", "dog", "owl", "yak"]);
        let mut sequencer = AnswerSequencer::new(0);
        sequencer.reshuffle(mode, &answers, 4242);

        assert_eq!(sequencer.pool(), SeededRandom::new(4242).shuffled(&answers).as_slice());
        assert_eq!(sequencer.next_answer(mode), sequencer.pool()[0]);
    }

    #[test]
    fn restored_cursor_resumes_walk() {
        let mode = ModeCatalog::default_mode();
        let answers = words(&["cat", "dog", "owl", "yak"]);

        let mut first = AnswerSequencer::new(7);
        first.reshuffle(mode, &answers, 7);
        first.next_answer(mode);
        let persisted_cursor = first.cursor();
        let expected = first.next_answer(mode);

        let mut restored = AnswerSequencer::new(7);
        restored.set_cursor(persisted_cursor);
        restored.reshuffle(mode, &answers, 7);
        assert_eq!(restored.next_answer(mode), expected);
    }

    #[test]
    fn cursor_wraps_when_pool_shrinks() {
        let mode = ModeCatalog::default_mode();
        let mut sequencer = AnswerSequencer::new(1);
        sequencer.set_cursor(10);
        sequencer.reshuffle(mode, &words(&["cat", "dog", "owl"]), 1);
        assert_eq!(sequencer.cursor(), 1);
    }

    #[test]
    fn empty_answers_shuffle_fallback() {
        let mode = ModeCatalog::resolve(Some("epic"));
        let mut sequencer = AnswerSequencer::new(3);
        sequencer.reshuffle(mode, &[], 3);

        assert_eq!(sequencer.pool().len(), mode.fallback_words.len());
        let answer = sequencer.next_answer(mode);
        assert!(mode.fallback_words.contains(&answer.as_str()));
    }

    #[test]
    fn draw_without_reshuffle_uses_fallback() {
        let mode = ModeCatalog::resolve(Some("junior"));
        let mut sequencer = AnswerSequencer::new(3);
        assert_eq!(sequencer.next_answer(mode), mode.fallback_words[0]);
        assert_eq!(sequencer.next_answer(mode), mode.fallback_words[1]);
    }

    proptest! {
        #[test]
        fn every_answer_once_per_cycle(seed in any::<u64>(), count in 1usize..40, start in 0usize..100) {
            let mode = ModeCatalog::default_mode();
            let answers: Vec<String> = (0..count).map(|i| format!("w{i:02}")).collect();
            let mut sequencer = AnswerSequencer::new(seed);
            sequencer.set_cursor(start);
            sequencer.reshuffle(mode, &answers, seed);

            let mut cycle: Vec<String> = (0..count).map(|_| sequencer.next_answer(mode)).collect();
            let first = cycle[0].clone();
            prop_assert_eq!(sequencer.next_answer(mode), first);

            cycle.sort();
            prop_assert_eq!(cycle, answers);
        }
    }
}
