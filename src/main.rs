use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use greedy_snake::config::FRAME_INTERVAL;
use greedy_snake::game::TickOutcome;
use greedy_snake::input::{ControlMode, GameInput};
use greedy_snake::session::Session;
use greedy_snake::settings::{
    default_log_path, open_log_file, Overrides, SessionConfig, Settings,
};
use greedy_snake::terminal_runtime::{install_panic_hook, poll_input, TerminalSession};
use greedy_snake::ui;
use log::{error, info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Side length of the square grid.
    #[arg(long)]
    size: Option<u16>,

    /// Delay between simulation ticks in milliseconds.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Start with the autopilot steering.
    #[arg(long)]
    autopilot: bool,

    /// Settings file to read instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file path.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long)]
    debug: bool,

    /// Run the autopilot without a terminal for at most this many ticks.
    #[arg(long, value_name = "TICKS")]
    headless: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = load_config(&cli)?;
    info!(
        "starting on {}x{} grid, tick {:?}, seed {:?}, mode {:?}",
        config.grid.width(),
        config.grid.height(),
        config.tick_interval,
        config.seed,
        config.start_mode
    );

    if let Some(max_ticks) = cli.headless {
        run_headless(config, max_ticks);
        return Ok(());
    }

    install_panic_hook();
    let result = run(config);
    if let Err(error) = &result {
        error!("terminal loop failed: {error}");
    }
    result
}

fn init_logging(cli: &Cli) {
    let path = cli.log_file.clone().unwrap_or_else(default_log_path);
    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("Logging disabled, cannot open {}: {error}", path.display());
            return;
        }
    };

    if let Err(error) = WriteLogger::init(level, Config::default(), file) {
        eprintln!("Logging disabled: {error}");
    }
}

fn load_config(cli: &Cli) -> io::Result<SessionConfig> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path),
        None => Settings::load_default(),
    }
    .inspect_err(|error| warn!("{error}"))?;

    let overrides = Overrides {
        grid_size: cli.size,
        tick_interval_ms: cli.tick_ms,
        seed: cli.seed,
        autopilot: cli.autopilot,
    };

    Ok(settings
        .resolve(&overrides)
        .inspect_err(|error| warn!("{error}"))?)
}

fn run(config: SessionConfig) -> io::Result<()> {
    let mut terminal = TerminalSession::enter()?;
    let mut session = Session::start(config.grid, config.seed, config.start_mode);
    let mut last_tick = Instant::now();

    loop {
        terminal
            .terminal_mut()
            .draw(|frame| ui::draw(frame, &session))?;

        let wait = config
            .tick_interval
            .saturating_sub(last_tick.elapsed())
            .min(FRAME_INTERVAL);
        if let Some(input) = poll_input(wait)? {
            if input == GameInput::Quit {
                break;
            }
            session.apply_input(input);
        }

        if last_tick.elapsed() >= config.tick_interval {
            session.step();
            last_tick = Instant::now();
        }
    }

    info!("quit with best score {}", session.best_score());
    Ok(())
}

fn run_headless(config: SessionConfig, max_ticks: u64) {
    let mut session = Session::start(config.grid, config.seed, ControlMode::AutoPilot);

    for _ in 0..max_ticks {
        if matches!(
            session.step(),
            TickOutcome::Collided(_) | TickOutcome::Halted
        ) {
            break;
        }
    }

    let state = session.state();
    let status = match state.death_reason() {
        Some(reason) => format!("game over ({})", reason.describe()),
        None => "running".to_owned(),
    };
    info!("headless run finished after {} ticks: {status}", state.tick_count());

    println!("ticks:  {}", state.tick_count());
    println!("score:  {}", state.score());
    println!("length: {}", state.snake().len());
    println!("status: {status}");
}
