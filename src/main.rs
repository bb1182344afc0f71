use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use connect_four::config::{AppConfig, GameMode};
use connect_four::console::Console;
use connect_four::random::RandomPicker;
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override the game mode
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Override the seed used for random play
    #[arg(long)]
    seed: Option<u64>,

    /// Play line by line on stdin/stdout instead of the full-screen UI
    #[arg(long)]
    headless: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    // Load configuration
    let config_found = cli.config.exists();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(mode) = cli.mode {
        config.play.mode = mode;
    }
    if let Some(seed) = cli.seed {
        config.play.seed = Some(seed);
    }

    init_logging(&config, cli.headless)?;
    if !config_found {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let picker = match config.play.seed {
        Some(seed) => RandomPicker::seeded(seed),
        None => RandomPicker::new(),
    };

    if cli.headless {
        let state = Console::new(io::stdin().lock(), io::stdout().lock(), config.play.mode, picker)
            .play()
            .context("console game failed")?;
        info!(status = ?state.status(), moves = state.move_count(), "game finished");
        Ok(())
    } else {
        run_tui(config.play.mode, picker).context("terminal UI failed")
    }
}

/// Headless play logs to stderr. The full-screen UI owns the terminal, so it
/// only logs when a log file is configured.
fn init_logging(config: &AppConfig, headless: bool) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log.filter).context("parsing log filter")?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if headless {
        builder.with_writer(io::stderr).try_init()
    } else if let Some(path) = &config.log.file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
    } else {
        return Ok(());
    };

    installed
        .map_err(|e| anyhow!(e))
        .context("installing log subscriber")
}

fn run_tui(mode: GameMode, picker: RandomPicker) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(mode, picker);
    let res = app.run(&mut terminal);

    // Restore terminal even if the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
