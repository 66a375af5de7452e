//! Game state and core simulation types
//!
//! The arena owns every entity and is the only thing that mutates them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::build_brick_grid;
use super::rect::Rect;
use crate::Rgb;
use crate::settings::Settings;

/// Something observable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball crossed the left or right wall, vx flipped
    WallBounce,
    /// Ball crossed the ceiling, vy flipped
    CeilingBounce,
    /// Ball dropped below the floor and was relaunched from the center
    BallLost,
    /// Ball overlapped the paddle, vy flipped
    PaddleHit,
    /// Brick with the given id was hit and removed
    BrickDestroyed { id: u32 },
    /// The last live brick was removed (play continues)
    BricksCleared,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Pixels per tick
    pub vel: Vec2,
}

impl Ball {
    pub fn new(size: f32, vel: Vec2) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, size, size),
            vel,
        }
    }

    /// Advance by one full velocity step
    pub fn step(&mut self) {
        self.rect.translate(self.vel);
    }

    /// Put the ball back at `center` with a fresh velocity
    pub fn relaunch(&mut self, center: Vec2, vel: Vec2) {
        self.rect.set_center(center);
        self.vel = vel;
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, width, height),
        }
    }

    /// Slide so the paddle's center sits at `x` (not clamped to the arena)
    pub fn set_center_x(&mut self, x: f32) {
        self.rect.set_center_x(x);
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Insertion-order id, unique for the arena's lifetime
    pub id: u32,
    pub rect: Rect,
    /// Display color, no gameplay effect
    pub color: Rgb,
}

/// The playfield and everything in it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    width: f32,
    height: f32,
    pub(crate) ball: Ball,
    pub(crate) paddle: Paddle,
    /// Live bricks in insertion order (row-major, top row first)
    pub(crate) bricks: Vec<Brick>,
    /// Latched after the first resize builds the grid
    grid_initialized: bool,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
    settings: Settings,
}

impl Arena {
    /// Create an unsized arena; nothing is laid out until the first resize
    pub fn new(settings: Settings) -> Self {
        let ball = Ball::new(settings.ball.size, settings.ball.relaunch_velocity);
        let paddle = Paddle::new(settings.paddle.width, settings.paddle.height);
        Self {
            width: 0.0,
            height: 0.0,
            ball,
            paddle,
            bricks: Vec::new(),
            grid_initialized: false,
            time_ticks: 0,
            settings,
        }
    }

    /// Create an arena and immediately give it a size
    pub fn with_size(settings: Settings, width: f32, height: f32) -> Self {
        let mut arena = Self::new(settings);
        arena.on_resize(width, height);
        arena
    }

    /// Playfield size changed (or was established for the first time)
    ///
    /// Re-centers the ball and paddle every time. The brick grid is built
    /// once, on the first call with a usable size; later calls never touch it.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;

        self.ball.rect.set_center(self.center());
        self.paddle.set_center_x(width / 2.0);
        self.paddle.rect.pos.y = self.settings.paddle.y;

        if !self.grid_initialized {
            if let Some(bricks) = build_brick_grid(width, height, &self.settings.grid) {
                self.bricks = bricks;
                self.grid_initialized = true;
                log::info!(
                    "Built brick grid: {} bricks in {:.0}x{:.0} arena",
                    self.bricks.len(),
                    width,
                    height
                );
            }
        } else {
            log::debug!("Arena resized to {:.0}x{:.0}", width, height);
        }
    }

    /// Pointer moved to arena-local `x`
    pub fn on_pointer_move(&mut self, x: f32) {
        self.paddle.set_center_x(x);
    }

    /// Advance one fixed step, see [`super::tick::tick`]
    pub fn tick(&mut self, dt: f32) -> Vec<GameEvent> {
        super::tick::tick(self, dt)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Center of the playfield
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn grid_initialized(&self) -> bool {
        self.grid_initialized
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Override the ball's position and velocity (for scripted setups)
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        self.ball.rect.pos = pos;
        self.ball.vel = vel;
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
