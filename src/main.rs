//! Terminal runner for the hybrid snake/tetris game
//!
//! Arrow keys steer the snake, `a`/`d`/`s`/`h`/`g` drive the falling
//! piece, space pauses, enter restarts, `q` quits. Finished runs land on
//! a JSON leaderboard under the user's home directory.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use snaketris::core::Game;
use snaketris::highscores::{FileStore, HighScore, HighScores};
use snaketris::input::{handle_key_event, should_quit};
use snaketris::term::{GameView, Screen};
use snaketris::types::GameEvent;

/// Input poll interval; game speed is governed by the simulation's own
/// timers, not by this.
const POLL_MS: u64 = 16;

struct Args {
    seed: u32,
    name: String,
}

fn parse_args() -> Result<Args> {
    let mut seed = None;
    let mut name = "YOU".to_string();

    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--seed" => {
                let value = argv.next().context("--seed requires a value")?;
                seed = Some(value.parse::<u32>().context("--seed must be a u32")?);
            }
            "--name" => {
                name = argv.next().context("--name requires a value")?;
            }
            other => bail!("unknown argument: {other} (expected --seed N or --name AAA)"),
        }
    }

    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(1)
            .max(1)
    });

    Ok(Args { seed, name })
}

fn score_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".snaketris")
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;
    log::info!("starting with seed {}", args.seed);

    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen, &args);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut Screen, args: &Args) -> Result<()> {
    let start = Instant::now();
    let mut game = Game::new(args.seed, 0);
    let view = GameView::new();

    let mut store = FileStore::new(score_dir());
    let mut table = HighScores::load(&store);
    let mut recorded = false;

    loop {
        let frame = view.render(&game.snapshot());
        screen.draw(&frame)?;

        if event::poll(Duration::from_millis(POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        let now_ms = start.elapsed().as_millis() as u64;
                        game.apply(command, now_ms);
                        if !game.game_over() {
                            recorded = false;
                        }
                    }
                }
            }
        }

        let now_ms = start.elapsed().as_millis() as u64;
        game.update(now_ms);

        for event in game.take_events() {
            match event {
                GameEvent::AppleEaten => log::debug!("apple eaten"),
                GameEvent::StarCollected => log::debug!("star collected"),
                GameEvent::PieceDestroyed => log::debug!("block destroyed"),
                GameEvent::PiecePlaced => log::trace!("piece locked"),
                GameEvent::LinesCleared(n) => log::debug!("{n} line(s) cleared"),
                GameEvent::GameOver { final_score } => {
                    log::info!("game over, final score {final_score}");
                    if !recorded {
                        recorded = true;
                        record_run(&mut table, &mut store, &game, args, final_score);
                    }
                }
            }
        }
    }
}

fn record_run(
    table: &mut HighScores,
    store: &mut FileStore,
    game: &Game,
    args: &Args,
    final_score: u32,
) {
    let entry = HighScore {
        name: args.name.clone(),
        score: final_score,
        lines_cleared: game.lines_cleared(),
        apples_eaten: game.apples_eaten(),
        date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
    };
    if let Some(rank) = table.record(entry) {
        log::info!("new high score, rank {rank}");
        table.save(store);
    }
}
