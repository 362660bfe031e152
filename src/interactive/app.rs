//! TUI application state and logic

use crate::modes::{GameMode, ModeCatalog};
use crate::session::GameSession;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which panel fills the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Board,
    Stats,
}

/// Application state
pub struct App<W: WordSource> {
    pub session: GameSession<W>,
    pub view: View,
    pub should_quit: bool,
    /// Waiting for the player to confirm a full reset
    pub confirm_reset: bool,
    /// Modes with a saved in-progress game, newest first
    pub resumable: Vec<&'static GameMode>,
}

impl<W: WordSource> App<W> {
    pub fn new(mut session: GameSession<W>) -> Self {
        let resumable = session.resumable_modes();
        Self {
            session,
            view: View::Board,
            should_quit: false,
            confirm_reset: false,
            resumable,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if self.confirm_reset {
            self.confirm_reset = false;
            if matches!(key.code, KeyCode::Char('y' | 'Y')) && !ctrl {
                self.session.full_reset();
            }
            self.refresh();
            return;
        }

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc if self.view == View::Stats => self.view = View::Board,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.session.start_new_game(false),
            KeyCode::Char('r') if ctrl => self.confirm_reset = true,
            KeyCode::Char('s') if ctrl => self.toggle_stats(),
            KeyCode::Tab => self.cycle_mode(),
            _ if self.view == View::Stats => {}
            KeyCode::Char(letter) if !ctrl => self.session.on_key_input(letter),
            KeyCode::Backspace => self.session.on_delete_input(),
            KeyCode::Enter => self.session.submit_guess(),
            _ => {}
        }
        self.refresh();
    }

    fn toggle_stats(&mut self) {
        self.view = match self.view {
            View::Board => View::Stats,
            View::Stats => View::Board,
        };
    }

    fn cycle_mode(&mut self) {
        let next = ModeCatalog::next_after(self.session.mode());
        self.session.set_mode(next.id, true);
    }

    fn refresh(&mut self) {
        self.resumable = self.session.resumable_modes();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource>(app: App<W>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, W: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<W>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
