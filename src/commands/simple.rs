//! Simple interactive CLI mode
//!
//! Line-based play without the TUI

use crate::modes::ModeCatalog;
use crate::output::{print_board, print_keyboard, print_share, print_stats};
use crate::session::GameSession;
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, Write};

use super::collect_stats;

/// A line typed at the prompt
///
/// Commands start with ':' so that every plain word stays playable.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Mode(Option<String>),
    Keys,
    Stats,
    Reset,
    Unknown(String),
    Guess(String),
    Empty,
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim().to_lowercase();
        let Some(rest) = line.strip_prefix(':') else {
            return match line.split_whitespace().next() {
                Some(word) => Self::Guess(word.to_string()),
                None => Self::Empty,
            };
        };

        let mut words = rest.split_whitespace();
        match words.next() {
            Some("quit" | "q" | "exit") => Self::Quit,
            Some("new" | "n") => Self::New,
            Some("mode" | "m") => Self::Mode(words.next().map(str::to_string)),
            Some("keys" | "k") => Self::Keys,
            Some("stats" | "s") => Self::Stats,
            Some("reset") => Self::Reset,
            Some(other) => Self::Unknown(other.to_string()),
            None => Self::Empty,
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<W: WordSource>(session: &mut GameSession<W>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle Ranks - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type a word and press Enter to guess.");
    println!("Commands: ':new', ':mode [id]', ':keys', ':stats', ':reset', ':quit'\n");

    loop {
        let state = session.state();
        println!(
            "{} {}",
            state.mode.label.bright_cyan().bold(),
            format!(
                "({} letters, {} guesses left)",
                state.word_length,
                state.remaining_guesses()
            )
            .bright_black()
        );
        print_board(state);
        if !state.message_text().is_empty() {
            println!("\n  {}", state.message_text().bright_yellow());
        }
        println!();

        match Command::parse(&get_user_input("Guess")?) {
            Command::Empty => {}
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::New => session.start_new_game(false),
            Command::Mode(target) => {
                let target = target.unwrap_or_else(|| ModeCatalog::next_after(session.mode()).id.to_string());
                if ModeCatalog::get(&target).is_none() {
                    println!("❌ Unknown mode '{target}'\n");
                    continue;
                }
                session.set_mode(&target, true);
            }
            Command::Keys => print_keyboard(&session.letter_states()),
            Command::Stats => {
                let report = collect_stats(session.history(), Some(session.mode().id))?;
                print_stats(&report);
            }
            Command::Reset => {
                let confirm = get_user_input("Erase all history and saved games? (yes/no)")?;
                if matches!(confirm.to_lowercase().as_str(), "yes" | "y") {
                    session.full_reset();
                }
            }
            Command::Unknown(name) => println!("❌ Unknown command ':{name}'\n"),
            Command::Guess(word) => {
                play_word(session, &word);
                let state = session.state();
                if state.status.is_terminal() {
                    print_board(state);
                    println!("\n  {}\n", state.message_text().bright_green().bold());
                    print_share(state);
                    println!("\nType ':new' for another game.\n");
                }
            }
        }
    }
}

/// Replace the current input with `word` and submit it
fn play_word<W: WordSource>(session: &mut GameSession<W>, word: &str) {
    while !session.state().current_input.is_empty() {
        session.on_delete_input();
    }
    for letter in word.chars() {
        session.on_key_input(letter);
    }
    session.submit_guess();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameStatus;
    use crate::session::ManualClock;
    use crate::storage::Storage;
    use crate::wordlists::StaticWordSource;

    #[test]
    fn play_word_replaces_pending_input() {
        let source = StaticWordSource::new().with_mode("mini", &["cat", "cot"], &["cat"]);
        let mut session = GameSession::open(source, Storage::in_memory(), ManualClock::default());
        session.on_key_input('z');

        play_word(&mut session, "cat");
        assert_eq!(session.state().status, GameStatus::Won);
        assert_eq!(session.state().guesses[0].word, "cat");
    }

    #[test]
    fn plain_words_are_guesses() {
        for word in ["quit", "keys", "mode", "exit", "new", "s"] {
            assert_eq!(Command::parse(word), Command::Guess(word.to_string()));
        }
        assert_eq!(Command::parse("  Crane  "), Command::Guess("crane".into()));
        assert_eq!(Command::parse("   "), Command::Empty);
    }

    #[test]
    fn colon_prefix_selects_commands() {
        assert_eq!(Command::parse(":quit"), Command::Quit);
        assert_eq!(Command::parse(":Q"), Command::Quit);
        assert_eq!(Command::parse(":new"), Command::New);
        assert_eq!(Command::parse(":mode epic"), Command::Mode(Some("epic".into())));
        assert_eq!(Command::parse(":m"), Command::Mode(None));
        assert_eq!(Command::parse(":keys"), Command::Keys);
        assert_eq!(Command::parse(":stats"), Command::Stats);
        assert_eq!(Command::parse(":reset"), Command::Reset);
        assert_eq!(Command::parse(":undo"), Command::Unknown("undo".into()));
        assert_eq!(Command::parse(":"), Command::Empty);
    }

    #[test]
    fn command_word_in_the_list_is_played() {
        let source = StaticWordSource::new().with_mode("mini", &["cat", "new"], &["cat"]);
        let mut session = GameSession::open(source, Storage::in_memory(), ManualClock::default());

        let Command::Guess(word) = Command::parse("new") else {
            panic!("plain word parsed as a command");
        };
        play_word(&mut session, &word);
        assert_eq!(session.state().guesses.len(), 1);
        assert_eq!(session.state().guesses[0].word, "new");
    }
}
