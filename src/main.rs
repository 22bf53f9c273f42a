//! Grid Snake entry point
//!
//! Headless driver for the simulation core. It owns the wall clock: every
//! tick interval it calls `Engine::tick` and logs the snapshot. Steering comes
//! from stdin (`w`/`a`/`s`/`d` or `up`/`down`/`left`/`right`, `r` to restart)
//! on a separate thread, or from a built-in autopilot.
//!
//! Usage: `grid-snake [CONFIG.json] [--ticks N] [--autopilot]` (see `--help`)

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use clap::Parser;
use grid_snake::sim::{Command, DirectionHandle, Engine, Snapshot};
use grid_snake::{GameConfig, Result};

#[derive(Parser, Debug)]
#[command(
    name = "grid-snake",
    about = "Headless driver for the grid snake simulation core",
    long_about = None
)]
struct Args {
    /// JSON configuration file; built-in defaults when omitted
    config: Option<PathBuf>,

    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Steer toward the food automatically
    #[arg(long)]
    autopilot: bool,
}

/// Keyboard collaborator: map key lines to commands, `r` to a restart request
fn spawn_keyboard(handle: DirectionHandle) -> Receiver<()> {
    let (restart_tx, restart_rx) = mpsc::channel();
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines().map_while(|l| l.ok()) {
            match line.trim() {
                "" => {}
                "w" => handle.submit(Command::Up),
                "s" => handle.submit(Command::Down),
                "a" => handle.submit(Command::Left),
                "d" => handle.submit(Command::Right),
                "r" => {
                    if restart_tx.send(()).is_err() {
                        break;
                    }
                }
                other => {
                    if let Err(e) = handle.submit_str(other) {
                        log::warn!("{}", e);
                    }
                }
            }
        }
    });
    restart_rx
}

/// Head straight for the food, horizontal axis first
fn autopilot(snapshot: &Snapshot) -> Option<Command> {
    let delta = snapshot.food.pos - snapshot.head.pos;
    if delta.x > 0 {
        Some(Command::Right)
    } else if delta.x < 0 {
        Some(Command::Left)
    } else if delta.y > 0 {
        Some(Command::Down)
    } else if delta.y < 0 {
        Some(Command::Up)
    } else {
        None
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let interval = config.tick_interval();
    let mut engine = Engine::new(config)?;
    let handle = engine.direction_handle();
    let restarts = spawn_keyboard(handle.clone());

    let mut ticks = 0u64;
    while args.ticks.is_none_or(|limit| ticks < limit) {
        thread::sleep(interval);

        if restarts.try_iter().count() > 0 && engine.restart() {
            log::info!("Restart requested");
        }

        if args.autopilot {
            if engine.is_game_over() {
                engine.restart();
            } else if let Some(command) = autopilot(&engine.snapshot()) {
                handle.submit(command);
            }
        }

        let report = engine.tick();
        ticks += 1;
        if report.skipped {
            continue;
        }
        if report.ate_food {
            log::info!("Tail length {}", engine.snake.tail.len());
        }
        if report.game_over {
            log::warn!("Game over after {} ticks - send `r` to restart", ticks);
        }

        let snapshot = engine.snapshot();
        match serde_json::to_string(&snapshot) {
            Ok(json) => log::debug!("{}", json),
            Err(e) => log::warn!("Snapshot encode error: {:?}", e),
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Grid Snake (headless) starting...");

    if let Err(e) = run(Args::parse()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
