use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    cursor, execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    error::Error,
    io::{self, stdin, Write},
    path::PathBuf,
    process,
};
use tracing::{info, warn};
use typer::{
    app::{check_terminal_size, App},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    passage::{self, FALLBACK_PASSAGE},
    runtime::{CrosstermEventSource, Runner},
    session::SessionConfig,
};

/// minimal terminal typing-speed test
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type the passage shown on screen. Characters turn green when they match and red when they don't; words-per-minute and mistakes are reported once the passage is complete."
)]
pub struct Cli {
    /// custom passage to type
    #[clap(short = 'p', long)]
    prompt: Option<String>,

    /// run without stats: no progress bar and no end condition
    #[clap(long)]
    minimal: bool,

    /// path to the config file
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// seconds to show the results before exiting
    #[clap(long)]
    pause: Option<u64>,

    /// write the effective settings back to the config file
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Overlay command line flags on the loaded config
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(ref prompt) = self.prompt {
            cfg.passage = Some(prompt.clone());
        }
        if self.minimal {
            cfg.track_stats = false;
        }
        if let Some(pause) = self.pause {
            cfg.results_pause_secs = pause;
        }
        cfg
    }
}

/// Raw mode and the alternate screen, undone on drop
struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            raw_mode: true,
            alternate_screen: false,
        };
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        guard.alternate_screen = true;
        Ok(guard)
    }

    fn restore(&mut self, out: &mut impl Write) {
        if self.alternate_screen {
            let _ = execute!(out, cursor::Show, LeaveAlternateScreen);
            self.alternate_screen = false;
        }
        if self.raw_mode {
            let _ = disable_raw_mode();
            self.raw_mode = false;
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore(&mut io::stdout());
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = cli
        .config
        .as_ref()
        .map(FileConfigStore::with_path)
        .unwrap_or_default();
    let config = cli.apply(store.load());
    if cli.save_config {
        if let Err(err) = store.save(&config) {
            eprintln!("typer: could not save {}: {err}", store.path().display());
        }
    }

    if let Some(path) = AppDirs::log_path() {
        if let Err(err) = logging::init(&path, &config.log_level) {
            eprintln!("typer: logging disabled: {err}");
        }
    }

    if config.passage.as_ref().is_some_and(|p| p.trim().is_empty()) {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::InvalidValue, "passage must not be blank")
            .exit();
    }

    let (columns, rows) = terminal::size()?;
    if let Err(err) = check_terminal_size(columns, rows) {
        println!("{err}");
        process::exit(1);
    }

    let passage = match config.passage.clone() {
        Some(p) => p,
        None => passage::random().unwrap_or_else(|err| {
            warn!(%err, "falling back to default passage");
            FALLBACK_PASSAGE.to_string()
        }),
    };

    let session_config = SessionConfig::from(&config);
    let mut app = App::new(passage, session_config.clone(), columns, rows)?;
    info!(
        columns,
        rows,
        track_stats = session_config.track_stats,
        config = %store.path().display(),
        "starting"
    );

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut runner = Runner::new(CrosstermEventSource, session_config.results_pause);
    let result = runner.run(&mut terminal, &mut app);
    drop(guard);

    let exit = result?;
    info!(?exit, "exited");

    Ok(())
}
