use clap::Parser;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::app::{self, CrosstermEvents, RunStats};
use flappy::assets::SpriteSet;
use flappy::core::config::GameConfig;
use flappy::error::AppError;
use flappy::game::Session;
use flappy::logging;
use flappy::ui::TerminalRenderer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Flappy bird in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON game configuration; built-in values when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding back.txt, bird.txt and pipe.txt
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Seed for pipe placement
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log file path (default: flappy.log in the temp directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_path = match logging::init(args.log_file.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("cannot open log file: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(stats) => {
            println!(
                "Best score: {} ({} runs)",
                stats.best_score, stats.runs
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            eprintln!("{e} (log: {})", log_path.display());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<RunStats, AppError> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::new(),
    };

    // Sprites load before a session exists; a failure never reaches Ready.
    let sprites = match &args.assets {
        Some(dir) => SpriteSet::load(dir)?,
        None => SpriteSet::builtin(),
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(seed = ?args.seed, "session ready");
    let mut session = Session::new(config, rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = stdout.execute(EnterAlternateScreen) {
        let _ = leave_terminal();
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = leave_terminal();
            return Err(e.into());
        }
    };

    let mut renderer = TerminalRenderer::new(terminal, sprites);
    let mut events = CrosstermEvents::new();
    let result = app::run(&mut session, &mut events, &mut renderer);

    // Cleanup terminal
    let mut terminal = renderer.into_terminal();
    let cleanup = leave_terminal().and(terminal.show_cursor());

    finish(result, cleanup)
}

/// Leave raw mode and the alternate screen. Both steps always run; the first
/// failure is returned.
fn leave_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = io::stdout().execute(LeaveAlternateScreen).map(|_| ());
    raw.and(screen)
}

/// Combine the game result with the terminal cleanup. A game error wins over
/// a cleanup error.
fn finish<T>(result: Result<T, AppError>, cleanup: io::Result<()>) -> Result<T, AppError> {
    match (result, cleanup) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e.into()),
        (Err(e), cleanup) => {
            if let Err(cleanup_err) = cleanup {
                tracing::warn!(error = %cleanup_err, "terminal restore failed");
            }
            Err(e)
        }
    }
}
