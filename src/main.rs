use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hanoi_tower::config::{AppConfig, LoggingConfig};
use hanoi_tower::session::Session;
use hanoi_tower::solver::HttpSolver;
use hanoi_tower::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play Tower of Hanoi in the terminal.
#[derive(Parser)]
#[command(name = "hanoi", about = "Interactive Tower of Hanoi with solver playback")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "hanoi.toml")]
    config: PathBuf,

    /// Override the starting number of disks
    #[arg(long)]
    disks: Option<usize>,

    /// Override the solver base URL
    #[arg(long)]
    solver_url: Option<String>,

    /// Override the log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(disks) = cli.disks {
        config.puzzle.disk_count = disks;
        config.puzzle.max_disks = config.puzzle.max_disks.max(disks);
    }
    if let Some(url) = cli.solver_url {
        config.solver.base_url = url;
    }
    if let Some(path) = cli.log_file {
        config.logging.file = path;
    }
    config.validate().context("validating configuration")?;

    init_logging(&config.logging)?;
    info!(config = %cli.config.display(), found = cli.config.exists(), "starting");

    let solver = HttpSolver::new(
        &config.solver.base_url,
        Duration::from_secs(config.solver.timeout_secs),
    )
    .context("creating solver client")?;
    let session = Session::new(config.puzzle.disk_count()?);

    let mut app = App::new(session, solver, &config);
    app.start();

    run_terminal(&mut app).context("running terminal UI")
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let file = create_log_file(&logging.file)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .with_context(|| format!("invalid log level '{}'", logging.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn create_log_file(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("creating log file {}", path.display()))
}

fn run_terminal<S: hanoi_tower::solver::Solver + 'static>(app: &mut App<S>) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    res
}
