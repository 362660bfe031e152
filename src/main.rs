//! Wordle Ranks - CLI
//!
//! Multi-length Wordle with a TUI, a line-based mode, and history/stats
//! reports.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_ranks::{
    commands::{collect_history, collect_stats, run_simple},
    config::{AppConfig, default_data_dir},
    history::HistoryStore,
    logging::setup_logging,
    output::{print_history, print_stats},
    session::{GameSession, SystemClock},
    storage::{FileStore, Storage},
    wordlists::{EmbeddedWordSource, FileWordSource, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_ranks",
    about = "Wordle in four ranks: 3, 4, 5 and 6 letter words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for saved games, history, config and logs
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Directory of word list files (<name>.txt); built-in lists by default
    #[arg(short = 'w', long, global = true)]
    words_dir: Option<PathBuf>,

    /// Mode to play: mini, junior, classic or epic
    #[arg(short, long, global = true)]
    mode: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show win rate and guess distribution
    Stats {
        /// Only this mode
        #[arg(long = "for")]
        for_mode: Option<String>,
    },

    /// List finished games by day
    History {
        /// Only this mode
        #[arg(long = "for")]
        for_mode: Option<String>,

        /// Games to show per mode
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Erase history and saved games and start over
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let mut config = AppConfig::load(&data_dir)?;

    if let Some(words_dir) = &cli.words_dir {
        config.words_dir = Some(words_dir.clone());
    }
    if let Some(mode) = &cli.mode {
        config.default_mode = Some(mode.clone());
    }
    if cli.verbose {
        config.log_level = "debug".to_string();
    }
    Ok(config)
}

fn open_storage(config: &AppConfig) -> Result<Storage> {
    let store = FileStore::open(config.state_path())
        .with_context(|| format!("opening {}", config.state_path().display()))?;
    Ok(Storage::new(store))
}

fn word_source(config: &AppConfig) -> Box<dyn WordSource> {
    match &config.words_dir {
        Some(dir) => Box::new(FileWordSource::new(dir)),
        None => Box::new(EmbeddedWordSource),
    }
}

fn open_session(config: &AppConfig) -> Result<GameSession<Box<dyn WordSource>>> {
    let storage = open_storage(config)?;
    let mut session = GameSession::open(word_source(config), storage, SystemClock);
    if let Some(mode) = &config.default_mode
        && mode != session.mode().id
    {
        session.set_mode(mode, false);
    }
    Ok(session)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let _guard = setup_logging(&config.log_dir(), &config.log_level)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => {
            let mut session = open_session(&config)?;
            run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Stats { for_mode } => run_stats_command(&config, for_mode.as_deref()),
        Commands::History { for_mode, limit } => {
            run_history_command(&config, for_mode.as_deref(), limit)
        }
        Commands::Reset { yes } => run_reset_command(&config, yes),
    }
}

fn run_play_command(config: &AppConfig) -> Result<()> {
    use wordle_ranks::interactive::{App, run_tui};

    let app = App::new(open_session(config)?);
    run_tui(app)
}

fn run_stats_command(config: &AppConfig, mode: Option<&str>) -> Result<()> {
    let history = HistoryStore::load(&open_storage(config)?);
    let report = collect_stats(&history, mode).map_err(|e| anyhow::anyhow!(e))?;
    print_stats(&report);
    Ok(())
}

fn run_history_command(config: &AppConfig, mode: Option<&str>, limit: Option<usize>) -> Result<()> {
    let history = HistoryStore::load(&open_storage(config)?);
    let report = collect_history(&history, mode, limit).map_err(|e| anyhow::anyhow!(e))?;
    print_history(&report);
    Ok(())
}

fn run_reset_command(config: &AppConfig, yes: bool) -> Result<()> {
    if !yes {
        use std::io::Write;

        print!("Erase all history and saved games? (yes/no): ");
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let mut session = open_session(config)?;
    session.full_reset();
    println!("{}", session.state().message_text());
    Ok(())
}
