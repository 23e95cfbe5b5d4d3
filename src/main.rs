//! Ledgehop headless entry point
//!
//! Drives the simulation at a fixed cadence with the demo autopilot as the
//! input provider, logging every level clear and death. Rendering frontends
//! link the library and replace this loop with their own.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use ledgehop::Settings;
use ledgehop::sim::{RunState, Snapshot, TickEvent, autopilot, tick};

/// Command line options
#[derive(Debug, Parser)]
#[command(name = "ledgehop")]
#[command(about = "Run the Ledgehop simulation headless with the demo autopilot")]
#[command(version)]
struct Args {
    /// Settings file (defaults to ledgehop.json in the working directory)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Run seed; overrides the settings file
    #[arg(long)]
    seed: Option<u64>,
    /// Tick budget; overrides the settings file
    #[arg(long)]
    ticks: Option<u64>,
    /// Pace ticks in real time instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(Settings::FILE_NAME));
    let mut settings = Settings::load_from(&config_path);
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if let Some(ticks) = args.ticks {
        settings.max_ticks = ticks;
    }

    let seed = settings.resolve_seed();
    log::info!("Ledgehop (headless) starting, seed {}", seed);

    let mut state = RunState::new(seed, settings.field(), settings.tuning.clone());
    run(&mut state, &settings, args.realtime);

    let snapshot = Snapshot::capture(&state);
    if args.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("failed to encode snapshot: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for line in snapshot.hud_lines() {
            println!("{line}");
        }
        if let Some(text) = snapshot.game_over_text() {
            println!("{text}");
        }
    }

    ExitCode::SUCCESS
}

/// Tick driver: one autopilot input per tick until the run ends or the tick
/// budget is spent
fn run(state: &mut RunState, settings: &Settings, realtime: bool) {
    let period = Duration::from_secs_f64(1.0 / f64::from(settings.tick_hz.max(1)));
    let mut next_tick = Instant::now();

    while !state.is_terminal() && state.time_ticks < settings.max_ticks {
        let input = autopilot(state);
        match tick(state, &input) {
            TickEvent::None => {}
            TickEvent::ReachedGoal => {
                log::info!("Tick {}: reached goal", state.time_ticks)
            }
            TickEvent::HitHazard => log::info!("Tick {}: hit spike", state.time_ticks),
            TickEvent::GameOver => log::info!("Tick {}: out of lives", state.time_ticks),
        }

        if realtime {
            next_tick += period;
            if let Some(wait) = next_tick.checked_duration_since(Instant::now()) {
                std::thread::sleep(wait);
            }
        }
    }

    log::info!(
        "Stopped after {} ticks: {} levels, {} deaths",
        state.time_ticks,
        state.levels_completed,
        state.deaths
    );
}
