//! Layout and physics settings
//!
//! Defaults reproduce the reference game exactly. A JSON file may override
//! any subset of fields; missing fields keep their defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::{ROW_PALETTE, Rgb};

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Ball tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    /// Side length of the (square) ball
    pub size: f32,
    /// Velocity given on relaunch after falling out (pixels per tick)
    pub relaunch_velocity: Vec2,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            size: BALL_SIZE,
            relaunch_velocity: Vec2::new(BALL_RELAUNCH_VX, BALL_RELAUNCH_VY),
        }
    }
}

/// Paddle tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub width: f32,
    pub height: f32,
    /// Fixed y of the paddle's bottom edge
    pub y: f32,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            y: PADDLE_Y,
        }
    }
}

/// Brick grid layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub rows: u32,
    pub cols: u32,
    /// Gap between bricks and between the outer bricks and the side walls
    pub padding: f32,
    pub brick_height: f32,
    /// Offset from the arena top to the first row's bottom edge
    pub top_offset: f32,
    /// Row colors, cycled when there are more rows than colors
    pub palette: Vec<Rgb>,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            padding: GRID_PADDING,
            brick_height: BRICK_HEIGHT,
            top_offset: GRID_TOP_OFFSET,
            palette: ROW_PALETTE.to_vec(),
        }
    }
}

impl GridSettings {
    /// Total number of bricks a full grid holds
    pub fn brick_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

/// Complete simulation settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ball: BallSettings,
    pub paddle: PaddleSettings,
    pub grid: GridSettings,
}

impl Settings {
    /// Parse settings from a JSON string and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every entity ends up with a positive size and the grid is non-empty
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("ball.size", self.ball.size),
            ("paddle.width", self.paddle.width),
            ("paddle.height", self.paddle.height),
            ("grid.brick_height", self.grid.brick_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !self.ball.relaunch_velocity.is_finite() {
            return Err(SettingsError::Invalid(
                "ball.relaunch_velocity must be finite".to_string(),
            ));
        }
        if !(self.grid.padding.is_finite() && self.grid.padding >= 0.0) {
            return Err(SettingsError::Invalid(format!(
                "grid.padding must be non-negative, got {}",
                self.grid.padding
            )));
        }
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(SettingsError::Invalid(format!(
                "grid must have at least one row and column, got {}x{}",
                self.grid.rows, self.grid.cols
            )));
        }
        let bricks = u64::from(self.grid.rows).saturating_mul(u64::from(self.grid.cols));
        if bricks > MAX_BRICKS {
            return Err(SettingsError::Invalid(format!(
                "grid of {}x{} exceeds {} bricks",
                self.grid.rows, self.grid.cols, MAX_BRICKS
            )));
        }
        if self.grid.palette.is_empty() {
            return Err(SettingsError::Invalid(
                "grid.palette must hold at least one color".to_string(),
            ));
        }
        Ok(())
    }
}
