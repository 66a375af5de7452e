//! Brickfall headless driver
//!
//! Runs the simulation without a window: an autopilot plays the pointer,
//! frames arrive with slightly uneven timing, and the fixed-step clock turns
//! them into ticks.
//!
//! Usage: `brickfall [SETTINGS.json] [--frames N] [--seed N] [--json]`

use std::path::PathBuf;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use brickfall::Settings;
use brickfall::consts::*;
use brickfall::platform::{FixedTimestep, PointerInput};
use brickfall::renderer::draw_list;
use brickfall::sim::{Arena, GameEvent};

#[derive(Parser)]
#[command(name = "brickfall")]
#[command(about = "Run the Breakout simulation headless with an autopilot paddle", long_about = None)]
struct Cli {
    /// Settings JSON file (defaults are used when omitted or unreadable)
    settings: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 60 * 60)]
    frames: u32,

    /// Seed for autopilot jitter and frame pacing
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Print the final draw list as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn load_settings(path: Option<&PathBuf>) -> Settings {
    let Some(path) = path else {
        log::info!("Using default settings");
        return Settings::default();
    };
    match Settings::load_from(path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("{e}; using default settings");
            Settings::default()
        }
    }
}

/// Pointer position the autopilot reports this frame
///
/// Follows the ball with a wandering offset so rallies don't lock into a loop.
fn autopilot_x(arena: &Arena, rng: &mut Pcg32, frame: u32) -> f32 {
    let t = frame as f32 * 0.01;
    let drift = (t.sin() * 0.3 + (t * 0.7).sin() * 0.15) * arena.paddle().rect.width();
    let jitter: f32 = rng.random_range(-4.0..4.0);
    arena.ball().rect.center_x() + drift + jitter
}

#[derive(Default)]
struct Tally {
    wall: u32,
    ceiling: u32,
    lost: u32,
    paddle: u32,
    bricks: u32,
    cleared_at: Option<u64>,
}

impl Tally {
    fn record(&mut self, event: GameEvent, tick: u64) {
        match event {
            GameEvent::WallBounce => self.wall += 1,
            GameEvent::CeilingBounce => self.ceiling += 1,
            GameEvent::BallLost => self.lost += 1,
            GameEvent::PaddleHit => self.paddle += 1,
            GameEvent::BrickDestroyed { .. } => self.bricks += 1,
            GameEvent::BricksCleared => self.cleared_at = Some(tick),
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Brickfall (headless) starting...");

    let options = Cli::parse();
    let settings = load_settings(options.settings.as_ref());

    let mut arena = Arena::new(settings);
    arena.on_resize(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT);

    let mut clock = FixedTimestep::default();
    let mut input = PointerInput::default();
    let mut rng = Pcg32::seed_from_u64(options.seed);
    let mut tally = Tally::default();

    for frame in 0..options.frames {
        let x = autopilot_x(&arena, &mut rng, frame);
        input.pointer_moved(&mut arena, x);

        // Uneven frame pacing around the nominal tick rate
        let frame_dt = SIM_DT * rng.random_range(0.5f32..1.5);
        for (at, event) in clock.run(&mut arena, frame_dt) {
            tally.record(event, at);
        }
    }

    log::info!(
        "Ran {} frames / {} ticks with seed {}",
        options.frames,
        clock.total_steps(),
        options.seed
    );

    if options.json {
        match serde_json::to_string_pretty(&draw_list(&arena)) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize draw list: {e}"),
        }
        return;
    }

    println!("ticks:          {}", arena.time_ticks());
    println!("bricks left:    {}/{}", arena.bricks().len(), arena.settings().grid.brick_count());
    println!("bricks broken:  {}", tally.bricks);
    println!("paddle hits:    {}", tally.paddle);
    println!("wall bounces:   {}", tally.wall);
    println!("ceiling hits:   {}", tally.ceiling);
    println!("balls lost:     {}", tally.lost);
    match tally.cleared_at {
        Some(tick) => println!("cleared at tick {tick}"),
        None => println!("grid not cleared"),
    }
}
