//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, motion measured in pixels per tick
//! - Stable iteration order (bricks in insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::overlaps;
pub use layout::{brick_width, build_brick_grid};
pub use rect::Rect;
pub use state::{Arena, Ball, Brick, GameEvent, Paddle};
pub use tick::tick;
