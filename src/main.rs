use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{DEFAULT_GRID_SIZE, GameConfig};
use grid_snake::error::AppError;
use grid_snake::game::{GameSession, GameStatus, TickOutcome};
use grid_snake::input::{self, GameInput};
use grid_snake::renderer::{self, Screen};
use grid_snake::scheduler::TickScheduler;
use grid_snake::score::{HighScoreStore, scores_path};
use grid_snake::terminal_runtime::{TerminalGuard, install_panic_hook};
use log::{debug, info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Upper bound on one input wait, so the frame keeps redrawing.
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(about = "Grid snake in the terminal")]
struct Cli {
    /// Cells per side of the square board.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: u16,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// High-score file; defaults to the platform data directory.
    #[arg(long)]
    scores_file: Option<PathBuf>,

    /// Log file; the terminal itself is busy drawing the board.
    #[arg(long, default_value = "grid-snake.log")]
    log_file: PathBuf,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    WriteLogger::init(cli.log_level, Config::default(), File::create(&cli.log_file)?)?;
    info!("starting grid-snake: {cli:?}");

    let config = GameConfig::with_grid_size(cli.grid_size);
    config.validate()?;

    let path = cli.scores_file.clone().unwrap_or_else(scores_path);
    let store = match HighScoreStore::open(path.clone()) {
        Ok(store) => store,
        Err(error) => {
            warn!("ignoring unreadable high score: {error}");
            HighScoreStore::empty(path)
        }
    };

    let session = match cli.seed {
        Some(seed) => GameSession::new_with_seed(config, store.stored(), seed),
        None => GameSession::new(config, store.stored()),
    };

    install_panic_hook();
    let result = run(session, store);
    if let Err(error) = &result {
        warn!("exiting with error: {error}");
    }
    result
}

fn run(mut session: GameSession, mut store: HighScoreStore) -> Result<(), AppError> {
    let mut guard = TerminalGuard::enter()?;
    let mut scheduler = TickScheduler::new();
    let mut baseline_high_score = store.stored();

    loop {
        let screen = Screen::capture(&session, baseline_high_score);
        guard.terminal_mut().draw(|frame| renderer::render(frame, &screen))?;

        let timeout = scheduler
            .time_until_due(Instant::now())
            .map_or(MAX_POLL_INTERVAL, |left| left.min(MAX_POLL_INTERVAL));

        if let Some(game_input) = input::poll_input(timeout)? {
            if game_input == GameInput::Quit {
                break;
            }

            let before = session.status();
            session.apply_input(game_input);
            if before == GameStatus::Idle && session.status() == GameStatus::Running {
                baseline_high_score = store.stored();
            }
            sync_scheduler(before, &session, &mut scheduler);
        }

        let now = Instant::now();
        if scheduler.take_due(now) {
            let outcome = session.tick();
            if matches!(outcome, TickOutcome::Ate { .. } | TickOutcome::BoardFilled) {
                persist_high_score(&mut store, session.score());
            }

            if session.status() == GameStatus::Running {
                scheduler.schedule(now, session.tick_interval());
            } else {
                scheduler.cancel();
            }
        }
    }

    info!("quit with score {}", session.score());
    Ok(())
}

/// Arms the scheduler when a game (re)enters Running and disarms it otherwise.
fn sync_scheduler(before: GameStatus, session: &GameSession, scheduler: &mut TickScheduler) {
    match (before, session.status()) {
        (GameStatus::Running, GameStatus::Running) => {}
        (_, GameStatus::Running) => scheduler.schedule(Instant::now(), session.tick_interval()),
        _ => scheduler.cancel(),
    }
}

fn persist_high_score(store: &mut HighScoreStore, score: u32) {
    match store.record(score) {
        Ok(true) => debug!("new high score {score} saved to {}", store.path().display()),
        Ok(false) => {}
        Err(error) => warn!("failed to save high score: {error}"),
    }
}
