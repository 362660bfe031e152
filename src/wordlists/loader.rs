//! Word list loading
//!
//! Parses word list text and provides the three stock [`WordSource`]s:
//! embedded lists, a directory of `.txt` files, and fixed in-memory lists.

use super::{WordLists, WordSource, embedded_list};
use crate::core::Word;
use crate::modes::GameMode;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Parse newline-separated words, keeping only valid words of `length`
///
/// Entries are trimmed and lowercased; duplicates are dropped keeping the
/// first occurrence.
///
/// # Examples
/// ```
/// use wordle_ranks::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("Cat\r\ndog\n\nmouse\nc4t\ncat\n", 3);
/// assert_eq!(words, vec!["cat", "dog"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str, length: usize) -> Vec<String> {
    let mut seen = rustc_hash::FxHashSet::default();
    content
        .lines()
        .filter_map(|line| Word::new(line, length).ok())
        .map(Word::into_string)
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Load words of `length` from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content, length))
}

/// Convert an embedded string slice to owned words of `length`
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<String> {
    slice
        .iter()
        .filter_map(|&s| Word::new(s, length).ok())
        .map(Word::into_string)
        .collect()
}

/// Lists compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordSource;

impl WordSource for EmbeddedWordSource {
    fn load_word_lists(&self, mode: &GameMode) -> WordLists {
        let load = |name: &str| {
            embedded_list(name)
                .map(|words| words_from_slice(words, mode.word_length))
                .unwrap_or_default()
        };
        WordLists::new(load(mode.guess_file), load(mode.answer_file))
    }
}

/// Lists read from `<dir>/<list name>.txt`
#[derive(Debug, Clone)]
pub struct FileWordSource {
    dir: PathBuf,
}

impl FileWordSource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load(&self, name: &str, length: usize) -> Vec<String> {
        let path = self.dir.join(format!("{name}.txt"));
        match load_from_file(&path, length) {
            Ok(words) => {
                tracing::debug!(path = %path.display(), count = words.len(), "Loaded word list");
                words
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Word list unavailable, using fallback");
                Vec::new()
            }
        }
    }
}

impl WordSource for FileWordSource {
    fn load_word_lists(&self, mode: &GameMode) -> WordLists {
        WordLists::new(
            self.load(mode.guess_file, mode.word_length),
            self.load(mode.answer_file, mode.word_length),
        )
    }
}

/// Fixed lists, keyed by mode id
///
/// Modes without an entry load empty lists (and so play with fallback words).
#[derive(Debug, Clone, Default)]
pub struct StaticWordSource {
    lists: Vec<(String, WordLists)>,
}

impl StaticWordSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add lists for `mode_id`
    #[must_use]
    pub fn with_mode(mut self, mode_id: &str, guesses: &[&str], answers: &[&str]) -> Self {
        let owned = |words: &[&str]| -> Vec<String> { words.iter().map(|&w| w.to_string()).collect() };
        self.lists.retain(|(id, _)| id != mode_id);
        self.lists
            .push((mode_id.to_string(), WordLists::new(owned(guesses), owned(answers))));
        self
    }
}

impl WordSource for StaticWordSource {
    fn load_word_lists(&self, mode: &GameMode) -> WordLists {
        self.lists
            .iter()
            .find(|(id, _)| id == mode.id)
            .map(|(_, lists)| lists.clone())
            .unwrap_or_default()
    }
}
