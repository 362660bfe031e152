//! Wordle Ranks
//!
//! Game rules and persistence for a multi-length Wordle: two-pass guess
//! scoring, seeded answer sequencing that resumes across restarts, per-mode
//! resumable games, history and statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_ranks::core::GameStatus;
//! use wordle_ranks::session::{GameSession, ManualClock};
//! use wordle_ranks::storage::{MemoryStore, Storage};
//! use wordle_ranks::wordlists::StaticWordSource;
//!
//! let words = StaticWordSource::new().with_mode("mini", &["cat", "cot"], &["cat"]);
//! let mut session = GameSession::open(words, Storage::new(MemoryStore::new()), ManualClock::default());
//!
//! for letter in "cat".chars() {
//!     session.on_key_input(letter);
//! }
//! session.submit_guess();
//!
//! assert_eq!(session.state().status, GameStatus::Won);
//! assert_eq!(session.history().len(), 1);
//! ```

// Core domain types
pub mod core;

// Errors
pub mod error;

// Mode catalog
pub mod modes;

// Word lists
pub mod wordlists;

// Answer ordering
pub mod sequence;

// Key-value persistence
pub mod storage;

// History and resumable games
pub mod history;

// Statistics
pub mod stats;

// Game state machine
pub mod session;

// Application configuration and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
