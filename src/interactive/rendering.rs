//! TUI rendering with ratatui

use super::app::{App, View};
use crate::core::{GameStatus, LetterVerdict};
use crate::output::display::KEYBOARD_ROWS;
use crate::stats::GameStats;
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<W: WordSource>(f: &mut Frame, app: &App<W>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Message
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.view {
        View::Board => {
            let main_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[1]);
            render_board(f, app, main_chunks[0]);
            render_keyboard(f, app, main_chunks[1]);
        }
        View::Stats => render_stats(f, app, chunks[1]),
    }

    render_message(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn verdict_style(verdict: LetterVerdict) -> Style {
    match verdict {
        LetterVerdict::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterVerdict::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterVerdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterVerdict::Unused => Style::default().fg(Color::White),
    }
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn render_header<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let mode = app.session.mode();
    let header = Paragraph::new(format!(
        "WORDLE RANKS - {} ({} letters, {} guesses)",
        mode.label, mode.word_length, mode.max_guesses
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_board<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let state = app.session.state();
    let mut lines: Vec<Line> = Vec::with_capacity(state.max_guesses * 2);

    for guess in &state.guesses {
        let spans: Vec<Span> = guess
            .word
            .chars()
            .zip(&guess.verdicts)
            .flat_map(|(letter, &verdict)| [tile(letter, verdict_style(verdict)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let mut rows_left = state.remaining_guesses();
    if state.status == GameStatus::InProgress && rows_left > 0 {
        let typed = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let spans: Vec<Span> = (0..state.word_length)
            .flat_map(|index| {
                let letter = state.current_input.chars().nth(index).unwrap_or('_');
                [tile(letter, typed), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
        rows_left -= 1;
    }

    for _ in 0..rows_left {
        let blank = Style::default().fg(Color::DarkGray);
        let spans: Vec<Span> = (0..state.word_length)
            .flat_map(|_| [tile('·', blank), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = if state.is_loading {
        " Board (loading...) "
    } else {
        " Board "
    };
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let states = app.session.letter_states();
    let mut lines = vec![Line::from("")];

    for row in KEYBOARD_ROWS {
        let spans: Vec<Span> = row
            .chars()
            .map(|letter| {
                let verdict = states.get(&letter).copied().unwrap_or_default();
                tile(letter, verdict_style(verdict))
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if !app.resumable.is_empty() {
        let labels: Vec<&str> = app.resumable.iter().map(|m| m.label).collect();
        lines.push(Line::from(Span::styled(
            format!("Games in progress: {}", labels.join(", ")),
            Style::default().fg(Color::Cyan),
        )));
    }

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, area);
}

fn render_stats<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let mode = app.session.mode();
    let block = Block::default()
        .title(format!(" Statistics - {} ", mode.label))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let GameStats::Summary(summary) = app.session.stats(None) else {
        let empty = Paragraph::new("No games played yet.")
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    };

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(summary.distribution.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let totals = Paragraph::new(format!(
        "Played: {}   Won: {}   Win rate: {}%",
        summary.total,
        summary.wins,
        summary.win_percent()
    ))
    .alignment(Alignment::Center);
    f.render_widget(totals, rows[0]);

    for (index, &count) in summary.distribution.iter().enumerate() {
        let intensity = summary.scale(count);
        let color = if count == 0 {
            Color::DarkGray
        } else if intensity >= 0.5 {
            Color::Green
        } else {
            Color::Yellow
        };
        let percent = if summary.max_count == 0 {
            0
        } else {
            (count * 100 / summary.max_count) as u16
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .percent(percent)
            .label(format!("{}: {count}", index + 1));
        f.render_widget(gauge, rows[index + 1]);
    }
}

fn render_message<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let state = app.session.state();
    let (text, color) = if app.confirm_reset {
        (
            "Erase all history and saved games? Press 'y' to confirm".to_string(),
            Color::Red,
        )
    } else {
        let color = match state.status {
            GameStatus::Won => Color::Green,
            GameStatus::Lost => Color::Red,
            GameStatus::InProgress => Color::Yellow,
        };
        (state.message_text().to_string(), color)
    };

    let message = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(message, area);
}

fn render_status<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let state = app.session.state();
    let progress = format!(
        "Guess {}/{}",
        (state.guesses.len() + 1).min(state.max_guesses),
        state.max_guesses
    );
    f.render_widget(Paragraph::new(progress).alignment(Alignment::Center), chunks[0]);

    let stats_text = match app.session.stats(None) {
        GameStats::NoGames => "Games: 0".to_string(),
        GameStats::Summary(summary) => {
            format!("Games: {} | Win Rate: {}%", summary.total, summary.win_percent())
        }
    };
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let help_text = if state.status.is_terminal() {
        "Ctrl-N: New | Tab: Mode | Ctrl-S: Stats | Esc: Quit"
    } else {
        "Enter: Guess | Tab: Mode | Ctrl-S: Stats | Ctrl-R: Reset | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
