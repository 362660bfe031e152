//! Game mode catalog
//!
//! Each mode ("rank") fixes the word length, the number of guesses and the
//! word list files it draws from. The catalog is static; unknown ids resolve
//! to the first entry so that ids persisted by an older build never fail.

use std::fmt;

/// A game configuration
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct GameMode {
    pub id: &'static str,
    pub label: &'static str,
    pub word_length: usize,
    pub max_guesses: usize,
    pub answer_file: &'static str,
    pub guess_file: &'static str,
    /// Built-in words used when no list can be loaded
    pub fallback_words: &'static [&'static str],
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} letters)", self.label, self.word_length)
    }
}

/// All supported modes, default first
pub static MODES: [GameMode; 4] = [
    GameMode {
        id: "mini",
        label: "Pupil",
        word_length: 3,
        max_guesses: 5,
        answer_file: "allowed-answers-3",
        guess_file: "allowed-guesses-3",
        fallback_words: &["cat", "dog", "sun", "hat", "bag", "cup", "toy", "pig", "ice", "jam"],
    },
    GameMode {
        id: "junior",
        label: "Scribe",
        word_length: 4,
        max_guesses: 6,
        answer_file: "allowed-answers-4",
        guess_file: "allowed-guesses-4",
        fallback_words: &[
            "play", "rain", "cake", "book", "kite", "fish", "snow", "milk", "gold", "star",
        ],
    },
    GameMode {
        id: "classic",
        label: "Author",
        word_length: 5,
        max_guesses: 6,
        answer_file: "allowed-answers",
        guess_file: "allowed-guesses",
        fallback_words: &[
            "apple", "baker", "cabin", "delta", "eagle", "fancy", "giant", "habit", "ideal",
            "joker", "lemon", "magic",
        ],
    },
    GameMode {
        id: "epic",
        label: "Wordsmith",
        word_length: 6,
        max_guesses: 7,
        answer_file: "allowed-answers-6",
        guess_file: "allowed-guesses-6",
        fallback_words: &[
            "planet", "bright", "forest", "castle", "silver", "charge", "stream", "wander",
            "rocket", "little",
        ],
    },
];

/// Mode assigned to history entries persisted before modes existed
pub const LEGACY_HISTORY_MODE: &str = "classic";

/// Lookup over [`MODES`]
pub struct ModeCatalog;

impl ModeCatalog {
    /// All modes in display order
    #[must_use]
    pub fn all() -> &'static [GameMode] {
        &MODES
    }

    /// The default mode (first catalog entry)
    #[must_use]
    pub fn default_mode() -> &'static GameMode {
        &MODES[0]
    }

    /// Exact lookup
    #[must_use]
    pub fn get(id: &str) -> Option<&'static GameMode> {
        MODES.iter().find(|mode| mode.id == id)
    }

    /// Lookup that never fails: unknown or absent ids give the default mode
    ///
    /// # Examples
    /// ```
    /// use wordle_ranks::modes::ModeCatalog;
    ///
    /// assert_eq!(ModeCatalog::resolve(Some("epic")).word_length, 6);
    /// assert_eq!(ModeCatalog::resolve(Some("legacy")).id, "mini");
    /// assert_eq!(ModeCatalog::resolve(None).id, "mini");
    /// ```
    #[must_use]
    pub fn resolve(id: Option<&str>) -> &'static GameMode {
        id.and_then(Self::get).unwrap_or_else(Self::default_mode)
    }

    /// The mode after `current`, wrapping around
    #[must_use]
    pub fn next_after(current: &GameMode) -> &'static GameMode {
        let index = MODES.iter().position(|m| m.id == current.id).unwrap_or(0);
        &MODES[(index + 1) % MODES.len()]
    }
}
