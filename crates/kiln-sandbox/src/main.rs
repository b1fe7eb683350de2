mod app;
mod scene;

use anyhow::Result;
use clap::Parser;
use rand::Rng;
use winit::dpi::LogicalSize;

use kiln_engine::window::{Runtime, RuntimeConfig};
use kiln_life::{Camera, Life, Simulation};

use app::SandboxApp;

/// Real-time Game of Life sandbox.
///
/// WASD pans, the scroll wheel zooms toward the cursor, P pauses, Space
/// steps one generation while paused, holding R re-randomizes, C clears,
/// Escape quits.
#[derive(Parser, Debug)]
#[command(name = "kiln-sandbox", version)]
struct Args {
    /// Grid side length in cells.
    #[arg(long, default_value_t = 1000)]
    side: usize,

    /// Simulation seed; drawn from OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed frame-rate target.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Start running instead of paused.
    #[arg(long)]
    running: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    anyhow::ensure!(args.side >= 3, "--side must be at least 3");
    kiln_engine::logging::init("info");

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!(
        "grid {side}x{side}, seed {seed}, {fps} fps target",
        side = args.side,
        fps = args.fps
    );

    let sim = Simulation::new(
        Life::new(args.side, seed),
        Camera::framing(args.side),
        !args.running,
    );

    let config = RuntimeConfig {
        title: "kiln sandbox".to_string(),
        initial_size: LogicalSize::new(960.0, 600.0),
        target_fps: Some(args.fps),
    };
    Runtime::run(config, SandboxApp::new(sim))
}
