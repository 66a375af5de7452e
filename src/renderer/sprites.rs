//! Draw list generation for 2D primitives

use serde::{Deserialize, Serialize};

use crate::Rgb;
use crate::sim::{Arena, Rect};

/// Colors for game elements
pub mod colors {
    use crate::Rgb;

    pub const PADDLE: Rgb = [0.0, 1.0, 0.0];
    pub const BALL: Rgb = [1.0, 0.0, 0.0];
}

/// How a sprite's rect should be filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Rect,
    /// Ellipse inscribed in the rect
    Ellipse,
}

/// One colored shape to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub shape: Shape,
    pub rect: Rect,
    pub color: Rgb,
}

/// Snapshot the arena as back-to-front sprites: bricks, paddle, ball
pub fn draw_list(arena: &Arena) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(arena.bricks().len() + 2);

    sprites.extend(arena.bricks().iter().map(|brick| Sprite {
        shape: Shape::Rect,
        rect: brick.rect,
        color: brick.color,
    }));

    sprites.push(Sprite {
        shape: Shape::Rect,
        rect: arena.paddle().rect,
        color: colors::PADDLE,
    });

    sprites.push(Sprite {
        shape: Shape::Ellipse,
        rect: arena.ball().rect,
        color: colors::BALL,
    });

    sprites
}
