//! Word lists for each game mode
//!
//! A [`WordSource`] turns a mode into a pair of lists: words accepted as
//! guesses and words that may be drawn as answers. Sources never fail: a
//! list that cannot be read comes back empty and [`WordLists::prepare`]
//! substitutes the mode's built-in fallback words.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED_LISTS, embedded_list};
pub use loader::{EmbeddedWordSource, FileWordSource, StaticWordSource};

use crate::modes::GameMode;
use rustc_hash::FxHashSet;

/// Words that are never served as answers nor accepted from a list
pub const BLOCKED_ANSWERS: &[&str] = &[
    "abuse", "abort", "adult", "arson", "bigot", "blood", "bosom", "booze", "boozy", "bribe",
    "butch", "crime", "death", "detox", "drink", "drunk", "dummy", "felon", "fraud", "gipsy",
    "heist", "idiot", "kinky", "knife", "loser", "lynch", "moron", "rifle", "smoke", "smoky",
    "thief", "toxic", "toxin", "venom", "vomit",
];

/// Whether `word` is on the blocklist
#[must_use]
pub fn is_blocked(word: &str) -> bool {
    BLOCKED_ANSWERS.contains(&word)
}

/// Raw output of a word source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordLists {
    pub word_list: Vec<String>,
    pub answer_list: Vec<String>,
}

impl WordLists {
    #[must_use]
    pub fn new(word_list: Vec<String>, answer_list: Vec<String>) -> Self {
        Self {
            word_list,
            answer_list,
        }
    }

    /// Apply fallback words and the blocklist, and build the lookup set
    #[must_use]
    pub fn prepare(self, mode: &GameMode) -> PreparedWords {
        let fallback = || -> Vec<String> {
            mode.fallback_words
                .iter()
                .map(|&w| w.to_string())
                .collect()
        };

        let word_list = if self.word_list.is_empty() {
            fallback()
        } else {
            self.word_list
        };
        let answer_list = if self.answer_list.is_empty() {
            fallback()
        } else {
            self.answer_list
        };

        let word_list: Vec<String> = word_list.into_iter().filter(|w| !is_blocked(w)).collect();
        let answer_list: Vec<String> = answer_list
            .into_iter()
            .filter(|w| !is_blocked(w))
            .collect();

        let word_set = word_list
            .iter()
            .chain(answer_list.iter())
            .cloned()
            .collect();

        PreparedWords {
            word_list,
            answer_list,
            word_set,
        }
    }
}

/// Lists ready for play: filtered, with a combined lookup set
#[derive(Debug, Clone, Default)]
pub struct PreparedWords {
    pub word_list: Vec<String>,
    pub answer_list: Vec<String>,
    pub word_set: FxHashSet<String>,
}

impl PreparedWords {
    /// Whether `word` is accepted as a guess
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }
}

/// Provider of word lists for a mode
///
/// Implementations must return empty lists on any failure; the caller
/// treats empty as "use built-in fallback".
pub trait WordSource {
    fn load_word_lists(&self, mode: &GameMode) -> WordLists;
}

impl<T: WordSource + ?Sized> WordSource for &T {
    fn load_word_lists(&self, mode: &GameMode) -> WordLists {
        (**self).load_word_lists(mode)
    }
}

impl<T: WordSource + ?Sized> WordSource for Box<T> {
    fn load_word_lists(&self, mode: &GameMode) -> WordLists {
        (**self).load_word_lists(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::ModeCatalog;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn embedded_lists_present_for_every_mode() {
        for mode in ModeCatalog::all() {
            let answers = embedded_list(mode.answer_file).unwrap_or_default();
            let guesses = embedded_list(mode.guess_file).unwrap_or_default();
            assert!(!answers.is_empty(), "no embedded answers for {}", mode.id);
            assert!(!guesses.is_empty(), "no embedded guesses for {}", mode.id);
        }
    }

    #[test]
    fn embedded_lists_have_mode_length() {
        for mode in ModeCatalog::all() {
            for file in [mode.answer_file, mode.guess_file] {
                for word in embedded_list(file).unwrap_or_default() {
                    assert_eq!(word.len(), mode.word_length, "'{word}' in {file}");
                    assert!(
                        word.chars().all(|c| c.is_ascii_lowercase()),
                        "'{word}' contains non-lowercase chars"
                    );
                }
            }
        }
    }

    #[test]
    fn embedded_answers_not_blocked() {
        for (name, words) in EMBEDDED_LISTS {
            for word in *words {
                assert!(!is_blocked(word), "blocked word '{word}' in {name}");
            }
        }
    }

    #[test]
    fn prepare_filters_blocked_words() {
        let classic = ModeCatalog::resolve(Some("classic"));
        let prepared = WordLists::new(
            strings(&["crane", "knife"]),
            strings(&["slate", "crime", "toast"]),
        )
        .prepare(classic);

        assert_eq!(prepared.word_list, strings(&["crane"]));
        assert_eq!(prepared.answer_list, strings(&["slate", "toast"]));
        assert!(prepared.contains("crane"));
        assert!(prepared.contains("toast"));
        assert!(!prepared.contains("crime"));
    }

    #[test]
    fn prepare_empty_lists_use_fallback() {
        let mini = ModeCatalog::default_mode();
        let prepared = WordLists::default().prepare(mini);

        assert_eq!(prepared.answer_list.len(), mini.fallback_words.len());
        assert_eq!(prepared.word_list.len(), mini.fallback_words.len());
        assert!(prepared.contains("cat"));
    }

    #[test]
    fn prepare_word_set_is_union() {
        let mini = ModeCatalog::default_mode();
        let prepared =
            WordLists::new(strings(&["add", "ape"]), strings(&["cat", "add"])).prepare(mini);
        assert_eq!(prepared.word_set.len(), 3);
    }
}
