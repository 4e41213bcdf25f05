//! Zombie Drift headless runner
//!
//! Plays a session with the built-in autopilot and prints a JSON summary.
//! Useful for balance checks on tuning files and for reproducing a seed.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde::Serialize;

use zombie_drift::renderer::build_scene;
use zombie_drift::sim::{GameEvent, SimulationState, Viewport, autopilot, tick};
use zombie_drift::{QualityPreset, Settings, Tuning};

#[derive(Debug, Parser)]
#[command(name = "zombie-drift", about = "Run a headless Zombie Drift session")]
struct Args {
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Maximum frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    #[arg(long, default_value_t = 800.0)]
    width: f32,
    #[arg(long, default_value_t = 600.0)]
    height: f32,
    /// JSON file overriding gameplay constants
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Particle quality: low, medium or high
    #[arg(long, default_value_t = QualityPreset::Medium)]
    quality: QualityPreset,
    /// Also print the final render snapshot
    #[arg(long)]
    snapshot: bool,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u64,
    score: u64,
    game_over: bool,
    abilities: Vec<&'static str>,
    final_vertices: usize,
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading tuning file {}", path.display()))?;
    let tuning = Tuning::from_json(&json)
        .with_context(|| format!("loading tuning file {}", path.display()))?;
    log::info!("Loaded tuning from {}", path.display());
    Ok(tuning)
}

fn run(args: &Args) -> Result<(RunSummary, SimulationState)> {
    if args.frames == 0 {
        return Err(anyhow!("--frames must be > 0"));
    }
    if args.width <= 0.0 || args.height <= 0.0 {
        return Err(anyhow!("viewport must be positive, got {}x{}", args.width, args.height));
    }

    let tuning = load_tuning(args.tuning.as_ref())?;
    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });

    let mut state = SimulationState::new(seed, Viewport::new(args.width, args.height))
        .with_tuning(tuning)
        .with_settings(&Settings::from_preset(args.quality));
    log::info!("Game initialized with seed: {}", seed);

    let mut abilities = Vec::new();
    while state.frame < args.frames && !state.is_game_over() {
        let input = autopilot::drive(&state);
        for event in tick(&mut state, &input) {
            match event {
                GameEvent::AbilityChanged(Some(banner)) => abilities.push(banner.kind.id()),
                GameEvent::GameOver { final_score } => {
                    log::info!("Crashed at frame {} with {} points", state.frame, final_score)
                }
                _ => {}
            }
        }
    }

    let summary = RunSummary {
        seed,
        frames: state.frame,
        score: state.score,
        game_over: state.is_game_over(),
        abilities,
        final_vertices: build_scene(&state.snapshot()).len(),
    };
    Ok((summary, state))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (summary, state) = run(&args)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    if args.snapshot {
        println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    }
    Ok(())
}
