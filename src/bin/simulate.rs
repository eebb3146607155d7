//! Headless Flappy simulator
//!
//! Plays seeded runs with a simple autopilot through the same `advance()`
//! the terminal game uses, and reports how far each run got. Handy for
//! checking difficulty tuning without sitting at the keyboard.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --runs N       Number of runs with incrementing seeds (default: 20)
//!   --seed N       First RNG seed (default: 42)
//!   --max-ms N     Game time cap per run in ms (default: 600000)
//!   --config FILE  Load tuning from a JSON file
//!   --quiet        Only the final summary line

use flappy::config::GameConfig;
use flappy::constants::{FLOOR_Y, TICK_MS};
use flappy::game::{advance, jump, start, DeathCause, Game, GameEvent};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

// ── CLI Configuration ────────────────────────────────────────────────

struct SimConfig {
    runs: u32,
    seed: u64,
    max_ms: u64,
    config_path: Option<PathBuf>,
    quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 20,
            seed: 42,
            max_ms: 600_000,
            config_path: None,
            quiet: false,
        }
    }
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                config.runs = parse_number(args.get(i), "--runs");
            }
            "--seed" => {
                i += 1;
                config.seed = parse_number(args.get(i), "--seed");
            }
            "--max-ms" => {
                i += 1;
                config.max_ms = parse_number(args.get(i), "--max-ms");
            }
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config.config_path = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("--config requires a path");
                        std::process::exit(1);
                    }
                }
            }
            "--quiet" => config.quiet = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn parse_number<T: std::str::FromStr>(arg: Option<&String>, flag: &str) -> T {
    match arg.and_then(|s| s.parse().ok()) {
        Some(n) => n,
        None => {
            eprintln!("{flag} requires a number");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Flappy Headless Simulator\n\
         \n\
         Usage: simulate [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N       Number of runs with incrementing seeds (default: 20)\n\
         \x20 --seed N       First RNG seed (default: 42)\n\
         \x20 --max-ms N     Game time cap per run in ms (default: 600000)\n\
         \x20 --config FILE  Load tuning from a JSON file\n\
         \x20 --quiet        Only final summary line\n\
         \x20 --help, -h     Show this help"
    );
}

// ── Autopilot ────────────────────────────────────────────────────────

/// Flap when the bird is falling and its bottom would pass the line it is
/// aiming for: just above the next pipe's bottom segment, or a little
/// above the ground when no pipe is ahead.
fn autopilot(game: &mut Game) {
    let bird = &game.bird;
    let target = game
        .pipes
        .iter()
        .find(|p| p.right_edge() >= bird.left())
        .map(|p| p.bottom_y - 12.0)
        .unwrap_or(FLOOR_Y - 150.0);

    if bird.velocity >= 0.0 && bird.bottom() + bird.velocity + game.world.gravity > target {
        jump(game);
    }
}

// ── Run Results ──────────────────────────────────────────────────────

struct RunResult {
    score: u32,
    level: u32,
    game_ms: u64,
    cause: Option<DeathCause>,
}

/// Seed for the `run`-th run; wraps past `u64::MAX`.
fn run_seed(first: u64, run: u32) -> u64 {
    first.wrapping_add(run as u64)
}

fn simulate_run(config: &GameConfig, seed: u64, max_ms: u64) -> RunResult {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = Game::new(config.clone());
    start(&mut game, &mut rng);

    let mut game_ms = 0;
    let mut cause = None;

    while game_ms < max_ms {
        autopilot(&mut game);
        let events = advance(&mut game, TICK_MS, &mut rng);
        game_ms += TICK_MS;

        if let Some(GameEvent::GameOver { cause: c, .. }) = events
            .iter()
            .find(|e| matches!(e, GameEvent::GameOver { .. }))
        {
            cause = Some(*c);
            break;
        }
    }

    RunResult {
        score: game.world.score,
        level: game.world.level,
        game_ms,
        cause,
    }
}

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let sim = parse_args();
    let config = match &sim.config_path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let mut results = Vec::with_capacity(sim.runs as usize);
    for run in 0..sim.runs {
        let seed = run_seed(sim.seed, run);
        let result = simulate_run(&config, seed, sim.max_ms);
        if !sim.quiet {
            let outcome = match result.cause {
                Some(DeathCause::Floor) => "floor",
                Some(DeathCause::Pipe) => "pipe",
                None => "timeout",
            };
            println!(
                "run {:>3} seed {:>6}: score {:>4} level {:>3} time {:>7.1}s ({})",
                run + 1,
                seed,
                result.score,
                result.level,
                result.game_ms as f64 / 1000.0,
                outcome
            );
        }
        results.push(result);
    }

    if results.is_empty() {
        println!("no runs");
        return Ok(());
    }

    let total: u64 = results.iter().map(|r| r.score as u64).sum();
    let max_score = results.iter().map(|r| r.score).max().unwrap_or(0);
    let max_level = results.iter().map(|r| r.level).max().unwrap_or(1);
    let floor_deaths = results
        .iter()
        .filter(|r| r.cause == Some(DeathCause::Floor))
        .count();
    let pipe_deaths = results
        .iter()
        .filter(|r| r.cause == Some(DeathCause::Pipe))
        .count();

    println!(
        "{} runs: mean score {:.1}, max score {}, max level {}, deaths floor/pipe {}/{}",
        results.len(),
        total as f64 / results.len() as f64,
        max_score,
        max_level,
        floor_deaths,
        pipe_deaths
    );
    Ok(())
}
