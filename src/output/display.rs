//! Display functions for the plain-terminal commands

use super::formatters::{create_progress_bar, share_text};
use crate::commands::{ModeHistory, ModeStats};
use crate::core::LetterVerdict;
use crate::session::SessionState;
use crate::stats::GameStats;
use colored::{ColoredString, Colorize};
use std::collections::BTreeMap;

/// Keyboard rows shown under the board
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A letter coloured by its verdict
#[must_use]
pub fn colored_tile(letter: char, verdict: LetterVerdict) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        LetterVerdict::Correct => text.black().on_green().bold(),
        LetterVerdict::Present => text.black().on_yellow().bold(),
        LetterVerdict::Absent => text.white().on_bright_black(),
        LetterVerdict::Unused => text.normal(),
    }
}

/// Print played rows, the row being typed, then empty rows
pub fn print_board(state: &SessionState) {
    for guess in &state.guesses {
        let row: Vec<String> = guess
            .word
            .chars()
            .zip(&guess.verdicts)
            .map(|(letter, &verdict)| colored_tile(letter, verdict).to_string())
            .collect();
        println!("  {}", row.join(""));
    }

    let mut rows_left = state.remaining_guesses();
    if !state.status.is_terminal() && rows_left > 0 {
        let typed: String = state
            .current_input
            .chars()
            .map(|c| format!(" {} ", c.to_ascii_uppercase()))
            .collect();
        let blanks = " _ ".repeat(state.word_length - state.current_input.len());
        println!("  {}{}", typed.bright_white().bold(), blanks.bright_black());
        rows_left -= 1;
    }

    for _ in 0..rows_left {
        println!("  {}", " · ".repeat(state.word_length).bright_black());
    }
}

/// Print the keyboard with each letter's best verdict
pub fn print_keyboard(states: &BTreeMap<char, LetterVerdict>) {
    println!();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|letter| {
                let verdict = states.get(&letter).copied().unwrap_or_default();
                colored_tile(letter, verdict).to_string()
            })
            .collect();
        println!("  {}{}", " ".repeat(indent * 2), keys.join(""));
    }
    println!();
}

/// Print the emoji summary of a finished game
pub fn print_share(state: &SessionState) {
    println!("{}", share_text(state.mode, &state.guesses, state.status));
}

/// Print per-mode statistics
pub fn print_stats(report: &[ModeStats]) {
    for ModeStats { mode, stats } in report {
        println!("\n{}", "═".repeat(60).cyan());
        println!(
            " {} {}",
            mode.label.to_uppercase().bright_cyan().bold(),
            format!("({} letters, {} guesses)", mode.word_length, mode.max_guesses).bright_black()
        );
        println!("{}", "═".repeat(60).cyan());

        let summary = match stats {
            GameStats::NoGames => {
                println!("\n   No games played yet.");
                continue;
            }
            GameStats::Summary(summary) => summary,
        };

        println!("\n📊 {}", "Performance:".bright_cyan().bold());
        println!("   Played:    {}", summary.total);
        println!("   Won:       {}", summary.wins.to_string().green());
        println!("   Lost:      {}", summary.losses().to_string().red());
        println!(
            "   Win rate:  {}",
            format!("{}%", summary.win_percent()).bright_yellow().bold()
        );

        println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
        for (index, &count) in summary.distribution.iter().enumerate() {
            let bar = create_progress_bar(count as f64, summary.max_count.max(1) as f64, 30);
            let bar = if summary.scale(count) >= 1.0 && count > 0 {
                bar.green()
            } else {
                bar.bright_black()
            };
            println!("   {}: {bar} {count:4}", index + 1);
        }
    }
    println!();
}

/// Print recent games grouped by day
pub fn print_history(report: &[ModeHistory]) {
    if report.is_empty() {
        println!("\nNo games played yet.\n");
        return;
    }

    for mode_history in report {
        let mode = mode_history.mode;
        println!("\n{}", "─".repeat(60).cyan());
        println!(
            " {} {}",
            mode.label.to_uppercase().bright_cyan().bold(),
            format!("{} games", mode_history.game_count()).bright_black()
        );
        println!("{}", "─".repeat(60).cyan());

        for (date, games) in &mode_history.days {
            println!("\n  {}", date.format("%Y-%m-%d").to_string().bright_white().bold());
            for game in games {
                let outcome = if game.won {
                    format!("won in {}", game.guess_count()).green()
                } else {
                    "lost".red()
                };
                println!(
                    "    {:<8} {outcome}  {}",
                    game.answer.to_uppercase(),
                    game.guesses.join(" ").bright_black()
                );
            }
        }
    }
    println!();
}
