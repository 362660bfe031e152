//! The game session state machine
//!
//! [`GameSession`] owns one player's game: the active mode, its word lists and
//! answer order, the current board, and the history. Every operation is
//! synchronous and a no-op when its preconditions do not hold. Listeners
//! registered with [`GameSession::subscribe`] run after each change.
//!
//! Word-list loading is split into [`GameSession::begin_mode_switch`] and
//! [`GameSession::finish_load`] so a front-end can load lists off the main
//! path. Only the most recent switch is applied.

mod clock;
mod observer;
mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use observer::ListenerId;
pub use state::{
    MSG_FULL_RESET, MSG_NEW_GAME, MSG_NOT_IN_LIST, MSG_START_NEW_GAME, SessionState, lost_message,
    won_message, wrong_length_message,
};

use crate::core::{GameStatus, Guess, LetterVerdict, letter_states};
use crate::history::{self, GameSnapshot, HistoryEntry, HistoryStore};
use crate::modes::{GameMode, ModeCatalog};
use crate::sequence::AnswerSequencer;
use crate::stats::GameStats;
use crate::storage::{DEFAULT_SEED, Storage, answer_index_key};
use crate::wordlists::{PreparedWords, WordLists, WordSource};
use observer::Observers;
use std::collections::BTreeMap;

/// A pending word-list load for a mode switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a mode switch only completes when its ticket is passed to finish_load"]
pub struct LoadTicket {
    generation: u64,
    mode: &'static GameMode,
    start_game: bool,
}

impl LoadTicket {
    /// Mode whose lists should be loaded
    #[must_use]
    pub const fn mode(&self) -> &'static GameMode {
        self.mode
    }
}

/// One player's game
pub struct GameSession<W: WordSource> {
    source: W,
    storage: Storage,
    clock: Box<dyn Clock>,
    history: HistoryStore,
    words: PreparedWords,
    sequencer: AnswerSequencer,
    seed: u64,
    answer: String,
    state: SessionState,
    observers: Observers,
    load_generation: u64,
}

impl<W: WordSource> std::fmt::Debug for GameSession<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("mode", &self.state.mode.id)
            .field("seed", &self.seed)
            .field("state", &self.state)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

impl<W: WordSource> GameSession<W> {
    /// Restore persisted mode, seed and history, then load the active mode
    ///
    /// An in-progress game saved for that mode is resumed, otherwise a new
    /// game starts.
    pub fn open(source: W, storage: Storage, clock: impl Clock + 'static) -> Self {
        let mode = ModeCatalog::resolve(storage.current_mode().as_deref());
        let seed = storage.seed();
        let history = HistoryStore::load(&storage);

        tracing::info!(mode = mode.id, seed, games = history.len(), "Opening game session");

        let mut session = Self {
            source,
            storage,
            clock: Box::new(clock),
            history,
            words: PreparedWords::default(),
            sequencer: AnswerSequencer::new(seed),
            seed,
            answer: String::new(),
            state: SessionState::loading(mode),
            observers: Observers::default(),
            load_generation: 0,
        };
        session.set_mode(mode.id, false);
        session
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> &'static GameMode {
        self.state.mode
    }

    /// The secret word for the current game
    #[inline]
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    #[must_use]
    pub const fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Whether `word` would be accepted as a guess in the current mode
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SessionState) + 'static) -> ListenerId {
        self.observers.subscribe(listener)
    }

    /// Returns `false` if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn accepts_input(&self) -> bool {
        !self.state.is_loading && self.state.status == GameStatus::InProgress
    }

    /// Type a letter
    ///
    /// Ignored for non-letters, when the row is full, or when no game is in
    /// progress.
    pub fn on_key_input(&mut self, letter: char) {
        if !self.accepts_input()
            || !letter.is_ascii_alphabetic()
            || self.state.current_input.len() >= self.state.word_length
        {
            return;
        }

        self.state.current_input.push(letter.to_ascii_lowercase());
        self.persist_snapshot();
        self.notify();
    }

    /// Remove the last typed letter
    ///
    /// Also clears a "not in the word list" message, which refers to the
    /// input being edited.
    pub fn on_delete_input(&mut self) {
        if !self.accepts_input() || self.state.current_input.is_empty() {
            return;
        }

        if self.state.message.as_deref() == Some(MSG_NOT_IN_LIST) {
            self.state.message = None;
        }
        self.state.current_input.pop();
        self.persist_snapshot();
        self.notify();
    }

    /// Play the current input as a guess
    pub fn submit_guess(&mut self) {
        if self.state.is_loading {
            return;
        }
        if self.state.status.is_terminal() {
            self.set_message(MSG_START_NEW_GAME);
            return;
        }

        let word_length = self.state.word_length;
        let guess = self.state.current_input.to_ascii_lowercase();
        if guess.len() != word_length {
            self.set_message(&wrong_length_message(word_length));
            return;
        }
        if !self.words.contains(&guess) {
            self.set_message(MSG_NOT_IN_LIST);
            return;
        }

        self.state.guesses.push(Guess::scored(&self.answer, &guess));
        self.state.current_input.clear();

        self.state.status = if guess == self.answer {
            GameStatus::Won
        } else if self.state.guesses.len() >= self.state.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        self.state.message = match self.state.status {
            GameStatus::Won => Some(won_message(&self.answer)),
            GameStatus::Lost => Some(lost_message(&self.answer)),
            GameStatus::InProgress => None,
        };

        if self.state.status.is_terminal() {
            self.record_finished_game();
        } else {
            self.persist_snapshot();
        }
        self.notify();
    }

    fn record_finished_game(&mut self) {
        let mode = self.state.mode;
        let won = self.state.status == GameStatus::Won;
        let entry = HistoryEntry::new(
            self.clock.now_millis(),
            self.answer.clone(),
            won,
            self.state.guesses.iter().map(|g| g.word.clone()).collect(),
            mode.id,
        );

        tracing::info!(mode = mode.id, won, guesses = self.state.guesses.len(), "Game finished");

        self.history.append(entry, &mut self.storage);
        history::clear_snapshot(&mut self.storage, mode.id);
    }

    /// Draw the next answer and reset the board
    ///
    /// The message becomes "New game started." unless `clear_message` is set.
    pub fn start_new_game(&mut self, clear_message: bool) {
        if self.state.is_loading {
            return;
        }
        self.begin_game(clear_message);
        self.notify();
    }

    fn begin_game(&mut self, clear_message: bool) {
        let mode = self.state.mode;
        self.answer = self.sequencer.next_answer(mode);
        self.storage.set_answer_index(mode.id, self.sequencer.cursor());

        self.state.guesses.clear();
        self.state.current_input.clear();
        self.state.status = GameStatus::InProgress;
        self.state.message = (!clear_message).then(|| MSG_NEW_GAME.to_string());

        tracing::info!(mode = mode.id, cursor = self.sequencer.cursor(), "New game");
        self.persist_snapshot();
    }

    /// Switch to `mode_id` (unknown ids fall back to the default mode)
    ///
    /// The game in the current mode is saved first. A saved game for the new
    /// mode is resumed when valid, otherwise a new one starts. With
    /// `start_game == false` any message is cleared.
    pub fn set_mode(&mut self, mode_id: &str, start_game: bool) {
        let ticket = self.begin_mode_switch(mode_id, start_game);
        let lists = self.source.load_word_lists(ticket.mode);
        self.finish_load(ticket, lists);
    }

    /// First half of [`set_mode`](Self::set_mode)
    ///
    /// Saves the current game, switches mode and marks the session loading.
    /// Load the lists for [`LoadTicket::mode`] and hand them to
    /// [`finish_load`](Self::finish_load).
    pub fn begin_mode_switch(&mut self, mode_id: &str, start_game: bool) -> LoadTicket {
        if !self.state.is_loading {
            self.persist_snapshot();
        }

        let mode = ModeCatalog::resolve(Some(mode_id));
        let previous = self.state.mode.id;
        self.storage.set_current_mode(mode.id);
        self.state.mode = mode;
        self.state.word_length = mode.word_length;
        self.state.max_guesses = mode.max_guesses;
        self.state.is_loading = true;
        self.load_generation += 1;

        tracing::info!(from = previous, to = mode.id, "Switching mode");
        self.notify();

        LoadTicket {
            generation: self.load_generation,
            mode,
            start_game,
        }
    }

    /// Second half of [`set_mode`](Self::set_mode)
    ///
    /// Returns `false` and changes nothing if a later switch has started
    /// since `ticket` was issued.
    pub fn finish_load(&mut self, ticket: LoadTicket, lists: WordLists) -> bool {
        if ticket.generation != self.load_generation {
            tracing::debug!(mode = ticket.mode.id, "Discarding superseded word lists");
            return false;
        }

        let mode = ticket.mode;
        self.words = lists.prepare(mode);
        self.sequencer = AnswerSequencer::new(self.seed);
        self.sequencer.set_cursor(self.storage.answer_index(mode.id));
        self.sequencer
            .reshuffle(mode, &self.words.answer_list, self.seed);

        tracing::debug!(
            mode = mode.id,
            words = self.words.word_set.len(),
            answers = self.words.answer_list.len(),
            "Word lists ready"
        );

        self.state.is_loading = false;
        if let Some(snapshot) = history::load_snapshot(&self.storage, mode) {
            tracing::info!(mode = mode.id, guesses = snapshot.guesses.len(), "Resuming saved game");
            self.restore(snapshot);
        } else {
            self.begin_game(true);
        }

        if !ticket.start_game {
            self.state.message = None;
        }
        self.notify();
        true
    }

    fn restore(&mut self, snapshot: GameSnapshot) {
        self.answer = snapshot.answer;
        self.state.guesses = snapshot.guesses;
        self.state.current_input = snapshot.current_input;
        self.state.status = snapshot.status;
        self.state.message = snapshot.message;
    }

    /// Forget everything: history, answer order and saved games
    ///
    /// A new seed is taken from the clock and a new game starts in the
    /// current mode.
    pub fn full_reset(&mut self) {
        if self.state.is_loading {
            return;
        }

        self.history.clear(&mut self.storage);

        self.seed = match u64::try_from(self.clock.now_millis()) {
            Ok(0) | Err(_) => DEFAULT_SEED,
            Ok(millis) => millis,
        };
        self.storage.set_seed(self.seed);

        for mode in ModeCatalog::all() {
            self.storage.remove(&answer_index_key(mode.id));
            history::clear_snapshot(&mut self.storage, mode.id);
        }

        let mode = self.state.mode;
        self.sequencer = AnswerSequencer::new(self.seed);
        self.sequencer
            .reshuffle(mode, &self.words.answer_list, self.seed);

        self.begin_game(true);
        self.state.message = Some(MSG_FULL_RESET.to_string());

        tracing::info!(mode = mode.id, seed = self.seed, "Full reset");
        self.notify();
    }

    /// Best verdict seen so far for each guessed letter
    #[must_use]
    pub fn letter_states(&self) -> BTreeMap<char, LetterVerdict> {
        letter_states(&self.state.guesses)
    }

    /// Modes with a saved in-progress game, most recently played first
    pub fn resumable_modes(&mut self) -> Vec<&'static GameMode> {
        history::resumable_modes(&mut self.storage)
    }

    /// Statistics for `mode_id`, or the current mode when `None`
    #[must_use]
    pub fn stats(&self, mode_id: Option<&str>) -> GameStats {
        let mode = mode_id.map_or(self.state.mode, |id| ModeCatalog::resolve(Some(id)));
        GameStats::compute(self.history.all(), mode)
    }

    fn set_message(&mut self, message: &str) {
        self.state.message = Some(message.to_string());
        self.notify();
    }

    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            answer: self.answer.clone(),
            guesses: self.state.guesses.clone(),
            current_input: self.state.current_input.clone(),
            status: self.state.status,
            message: self.state.message.clone(),
            max_guesses: self.state.max_guesses,
            word_length: self.state.word_length,
            is_active: self.state.status == GameStatus::InProgress,
            updated_at: self.clock.now_millis(),
        }
    }

    /// Save the in-progress game for the current mode
    ///
    /// Finished games are not resumable, so their snapshot is removed.
    fn persist_snapshot(&mut self) {
        if self.answer.is_empty() {
            return;
        }
        let mode_id = self.state.mode.id;
        if self.state.status.is_terminal() {
            history::clear_snapshot(&mut self.storage, mode_id);
        } else {
            let snapshot = self.snapshot();
            history::save_snapshot(&mut self.storage, mode_id, &snapshot);
        }
    }

    fn notify(&mut self) {
        self.observers.notify(&self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::wordlists::StaticWordSource;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn source() -> StaticWordSource {
        StaticWordSource::new()
            .with_mode("mini", &["cat", "cot", "cut", "act", "tac"], &["cat", "cot", "cut"])
            .with_mode("junior", &["play", "pray", "tray"], &["play", "pray"])
    }

    fn open(store: &MemoryStore) -> GameSession<StaticWordSource> {
        GameSession::open(source(), Storage::new(store.clone()), ManualClock::starting_at(1_000))
    }

    fn type_word(session: &mut GameSession<StaticWordSource>, word: &str) {
        for letter in word.chars() {
            session.on_key_input(letter);
        }
    }

    fn wrong_word(session: &GameSession<StaticWordSource>) -> &'static str {
        ["cat", "cot", "cut"]
            .into_iter()
            .find(|w| *w != session.answer())
            .unwrap()
    }

    #[test]
    fn opens_in_default_mode_with_answer_from_list() {
        let session = open(&MemoryStore::new());
        assert_eq!(session.mode().id, "mini");
        assert!(!session.state().is_loading);
        assert_eq!(session.state().message, None);
        assert!(["cat", "cot", "cut"].contains(&session.answer()));
    }

    #[test]
    fn input_is_bounded_and_lowercased() {
        let mut session = open(&MemoryStore::new());
        type_word(&mut session, "C1a-TS");
        assert_eq!(session.state().current_input, "cat");

        session.on_delete_input();
        assert_eq!(session.state().current_input, "ca");
    }

    #[test]
    fn validation_messages() {
        let mut session = open(&MemoryStore::new());
        type_word(&mut session, "ca");
        session.submit_guess();
        assert_eq!(session.state().message.as_deref(), Some("Enter a 3-letter word."));

        session.on_key_input('x');
        session.submit_guess();
        assert_eq!(session.state().message.as_deref(), Some(MSG_NOT_IN_LIST));
        assert!(session.state().guesses.is_empty());

        session.on_delete_input();
        assert_eq!(session.state().message, None);
        assert_eq!(session.state().current_input, "ca");
    }

    #[test]
    fn delete_keeps_other_messages() {
        let mut session = open(&MemoryStore::new());
        type_word(&mut session, "ca");
        session.submit_guess();
        session.on_delete_input();
        assert_eq!(session.state().message.as_deref(), Some("Enter a 3-letter word."));
    }

    #[test]
    fn winning_records_history_and_clears_snapshot() {
        let store = MemoryStore::new();
        let mut session = open(&store);
        let answer = session.answer().to_string();

        let wrong = wrong_word(&session);
        type_word(&mut session, wrong);
        session.submit_guess();
        assert_eq!(session.state().status, GameStatus::InProgress);
        assert_eq!(session.state().message, None);

        type_word(&mut session, &answer);
        session.submit_guess();
        assert_eq!(session.state().status, GameStatus::Won);
        assert_eq!(session.state().message, Some(won_message(&answer)));
        assert_eq!(session.history().len(), 1);
        assert!(session.history().all()[0].won);
        assert_eq!(session.history().all()[0].guesses.len(), 2);
        assert!(store.get(&crate::storage::current_game_key("mini")).is_none());
    }

    #[test]
    fn after_game_over_only_new_game_helps() {
        let mut session = open(&MemoryStore::new());
        let answer = session.answer().to_string();
        type_word(&mut session, &answer);
        session.submit_guess();

        session.on_key_input('c');
        assert_eq!(session.state().current_input, "");
        session.submit_guess();
        assert_eq!(session.state().message.as_deref(), Some(MSG_START_NEW_GAME));
        assert_eq!(session.state().guesses.len(), 1);
        assert_eq!(session.history().len(), 1);

        session.start_new_game(false);
        assert_eq!(session.state().status, GameStatus::InProgress);
        assert!(session.state().guesses.is_empty());
        assert_eq!(session.state().message.as_deref(), Some(MSG_NEW_GAME));
    }

    #[test]
    fn running_out_of_guesses_loses() {
        let mut session = open(&MemoryStore::new());
        let wrong = wrong_word(&session);
        for _ in 0..session.state().max_guesses {
            type_word(&mut session, wrong);
            session.submit_guess();
        }
        assert_eq!(session.state().status, GameStatus::Lost);
        assert_eq!(session.state().guesses.len(), 5);
        assert_eq!(session.state().message, Some(lost_message(session.answer())));
        assert!(!session.history().all()[0].won);
    }

    #[test]
    fn consecutive_games_walk_the_pool() {
        let mut session = open(&MemoryStore::new());
        let mut seen = vec![session.answer().to_string()];
        for _ in 0..2 {
            session.start_new_game(true);
            seen.push(session.answer().to_string());
        }
        seen.sort();
        assert_eq!(seen, vec!["cat", "cot", "cut"]);
    }

    #[test]
    fn listeners_see_each_change() {
        let mut session = open(&MemoryStore::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = session.subscribe(move |state| sink.borrow_mut().push(state.current_input.clone()));

        session.on_key_input('c');
        session.on_key_input('a');
        assert_eq!(*seen.borrow(), vec!["c".to_string(), "ca".to_string()]);

        assert!(session.unsubscribe(id));
        assert!(!session.unsubscribe(id));
        session.on_delete_input();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn superseded_load_is_ignored() {
        let mut session = open(&MemoryStore::new());
        let first = session.begin_mode_switch("junior", true);
        let second = session.begin_mode_switch("mini", true);
        assert!(session.state().is_loading);

        assert!(session.finish_load(second, source().load_word_lists(second.mode())));
        assert!(!session.finish_load(first, source().load_word_lists(first.mode())));
        assert_eq!(session.mode().id, "mini");
        assert_eq!(session.state().word_length, 3);
        assert!(!session.state().is_loading);
    }

    #[test]
    fn input_ignored_while_loading() {
        let mut session = open(&MemoryStore::new());
        let ticket = session.begin_mode_switch("junior", true);
        session.on_key_input('p');
        session.submit_guess();
        assert_eq!(session.state().current_input, "");
        assert_eq!(session.state().message, None);

        assert!(session.finish_load(ticket, WordLists::default()));
        assert!(session.mode().fallback_words.contains(&session.answer()));
    }

    #[test]
    fn letter_states_track_best_verdict() {
        let mut session = open(&MemoryStore::new());
        let answer = session.answer().to_string();
        type_word(&mut session, &answer);
        session.submit_guess();

        let states = session.letter_states();
        for letter in answer.chars() {
            assert_eq!(states.get(&letter), Some(&LetterVerdict::Correct));
        }
    }
}
