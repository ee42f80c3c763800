use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::ai::Difficulty;
use connect_four::config::AppConfig;
use connect_four::scores::ScoreStore;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four against a human or the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Play against the computer
    #[arg(long)]
    vs_computer: bool,

    /// Computer difficulty
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Seconds per turn
    #[arg(long)]
    turn_limit: Option<u64>,

    /// Write game events to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Include search diagnostics in the log file
    #[arg(long)]
    verbose: bool,

    /// Zero the stored scores before starting
    #[arg(long)]
    reset_scores: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        init_tracing(path, cli.verbose)?;
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if cli.vs_computer {
        config.computer.enabled = true;
    }
    if let Some(difficulty) = cli.difficulty {
        config.computer.difficulty = difficulty;
    }
    if let Some(secs) = cli.turn_limit {
        config.timer.turn_limit_secs = secs;
    }
    config.validate().context("validating configuration")?;

    let session = config.new_session().context("creating game session")?;
    let store = ScoreStore::new(&config.scores.path);
    let mut scores = store.load().context("loading scores")?;
    if cli.reset_scores {
        scores.reset();
        store.save(&scores).context("resetting scores")?;
    }

    let mut app = App::new(session, &config, store, scores);
    run(&mut app)
}

fn init_tracing(path: &Path, verbose: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

fn run(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the game loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running game")
}
