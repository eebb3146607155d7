mod frame_clock;
mod input;
mod ui;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::audio::{AudioSink, LogAudio, TerminalBell};
use flappy::config::{project_dirs, GameConfig};
use flappy::game::{advance, process_input, Game};
use flappy::hud::Hud;
use frame_clock::FrameClock;
use input::{map_event, InputAction};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const LOG_FILE_NAME: &str = "flappy.log";

struct Args {
    seed: Option<u64>,
    config_path: Option<PathBuf>,
    mute: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        seed: None,
        config_path: None,
        mute: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                parsed.seed = Some(
                    args.get(i)
                        .and_then(|s| s.parse().ok())
                        .unwrap_or_else(|| usage_error("--seed requires a number")),
                );
            }
            "--config" => {
                i += 1;
                parsed.config_path = Some(PathBuf::from(
                    args.get(i)
                        .unwrap_or_else(|| usage_error("--config requires a path")),
                ));
            }
            "--mute" => parsed.mute = true,
            "--version" | "-v" => {
                println!("flappy {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => usage_error(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }
    parsed
}

fn print_usage() {
    println!("Flappy - terminal arcade game\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --seed N       Seed the pipe generator");
    println!("  --config FILE  Load tuning from a JSON file");
    println!("  --mute         Don't ring the terminal bell");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
}

fn usage_error(msg: &str) -> ! {
    eprintln!("{}", msg);
    eprintln!("Run 'flappy --help' for usage.");
    std::process::exit(1);
}

/// Send log output to a file in the data directory; stderr would tear the UI.
fn init_logging() -> io::Result<Option<PathBuf>> {
    let Some(dirs) = project_dirs() else {
        return Ok(None);
    };
    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir)?;
    let path = data_dir.join(LOG_FILE_NAME);
    let file = File::create(&path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(Some(path))
}

fn main() -> io::Result<()> {
    let args = parse_args();

    let log_path = init_logging()?;

    let config = match &args.config_path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::load_or_default(),
    };
    let rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let audio: Box<dyn AudioSink> = if args.mute {
        Box::new(LogAudio)
    } else {
        Box::new(TerminalBell)
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, config, rng, audio);

    // Cleanup terminal, even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("game loop failed: {}", e);
    }
    if let Some(path) = log_path {
        println!("Log written to {}", path.display());
    }
    result
}

/// Frame loop: gather input until the frame budget is spent, apply it, then
/// advance the simulation by the real elapsed time and draw.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: GameConfig,
    mut rng: ChaCha8Rng,
    mut audio: Box<dyn AudioSink>,
) -> io::Result<()> {
    let frame_budget = Duration::from_millis(config.frame_ms);
    let mut hud = Hud::new(config.level_up_banner_ms);
    let mut game = Game::new(config);
    let mut clock = FrameClock::new(Instant::now());

    loop {
        terminal.draw(|f| ui::draw_ui(f, &game, &hud))?;

        let deadline = clock.deadline(frame_budget);
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match map_event(&event::read()?, game.phase) {
                InputAction::Quit => return Ok(()),
                InputAction::Game(input) => {
                    let events = process_input(&mut game, input, &mut rng);
                    hud.apply_events(&events, audio.as_mut());
                }
                InputAction::Ignore => {}
            }
        }

        let dt_ms = clock.tick(Instant::now());

        let events = advance(&mut game, dt_ms, &mut rng);
        hud.apply_events(&events, audio.as_mut());
        hud.tick(dt_ms);
    }
}
