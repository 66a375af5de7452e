//! Brickfall - a single-screen Breakout simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, AABB collisions, brick lifecycle)
//! - `platform`: Fixed-step driver and pointer input adapter
//! - `renderer`: Pull-model draw list read after each tick
//! - `settings`: Data-driven layout and physics tuning

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{Arena, GameEvent, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, motion is per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the driver will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    /// Velocity assigned at start and whenever the ball falls out (pixels/tick)
    pub const BALL_RELAUNCH_VX: f32 = 12.0;
    pub const BALL_RELAUNCH_VY: f32 = 12.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance of the paddle's bottom edge from the arena floor
    pub const PADDLE_Y: f32 = 50.0;

    /// Brick grid defaults
    pub const GRID_ROWS: u32 = 5;
    pub const GRID_COLS: u32 = 6;
    pub const GRID_PADDING: f32 = 10.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Distance from the arena top to the bottom edge of the first row
    pub const GRID_TOP_OFFSET: f32 = 100.0;
    /// Largest rows x cols a configured grid may hold
    pub const MAX_BRICKS: u64 = 10_000;

    /// Reference window size for the headless driver
    pub const DEFAULT_ARENA_WIDTH: f32 = 400.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;
}

/// RGB color, components in [0, 1]
pub type Rgb = [f32; 3];

/// Row colors for the brick grid (cycled by row index)
pub const ROW_PALETTE: [Rgb; 5] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 1.0],
];
