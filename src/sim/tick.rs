//! Fixed timestep simulation tick
//!
//! Advances the arena by one step. Motion is per tick, not per second, so the
//! elapsed time is accepted but never used for scaling.

use super::collision::{above_ceiling, below_floor, outside_side_walls, overlaps};
use super::state::{Arena, GameEvent};

/// Advance the arena by one fixed step and report what happened
///
/// Order is fixed: move, side walls, ceiling, floor reset, paddle, bricks.
/// Collisions only flip velocity; the ball is never pushed back out.
pub fn tick(arena: &mut Arena, _dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    arena.time_ticks += 1;

    let width = arena.width();
    let height = arena.height();
    let center = arena.center();
    let relaunch_vel = arena.settings().ball.relaunch_velocity;

    let ball = &mut arena.ball;
    ball.step();

    if outside_side_walls(&ball.rect, width) {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallBounce);
    }

    // Only the ceiling reflects; the floor is handled as a loss below
    if above_ceiling(&ball.rect, height) {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::CeilingBounce);
    }

    if below_floor(&ball.rect) {
        ball.relaunch(center, relaunch_vel);
        events.push(GameEvent::BallLost);
        log::info!("Ball lost at tick {}, relaunching", arena.time_ticks);
    }

    if overlaps(&ball.rect, &arena.paddle.rect) {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::PaddleHit);
    }

    // Every overlapping brick is removed and flips vy, in insertion order
    let had_bricks = !arena.bricks.is_empty();
    let ball_rect = ball.rect;
    arena.bricks.retain(|brick| {
        if overlaps(&ball_rect, &brick.rect) {
            ball.vel.y = -ball.vel.y;
            events.push(GameEvent::BrickDestroyed { id: brick.id });
            false
        } else {
            true
        }
    });

    if had_bricks && arena.bricks.is_empty() {
        events.push(GameEvent::BricksCleared);
        log::info!("All bricks cleared at tick {}", arena.time_ticks);
    }

    for event in &events {
        log::debug!("tick {}: {:?}", arena.time_ticks, event);
    }

    events
}
