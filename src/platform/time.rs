//! Fixed timestep driver
//!
//! Converts variable frame deltas into whole simulation ticks using an
//! accumulator. Leftover time carries into the next frame.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{Arena, GameEvent, tick};

/// Accumulator-based fixed-step clock
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
    total_steps: u64,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedTimestep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
            total_steps: 0,
        }
    }

    /// Seconds per tick
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Unconsumed time waiting for the next tick
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Feed one frame's elapsed time; returns the number of ticks to run
    ///
    /// Long frames are clamped and the substep count is capped, so a stall
    /// never triggers a burst of catch-up ticks. The clamp never drops below
    /// one step, so a slow clock still ticks on every full-length frame.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = frame_dt.clamp(0.0, MAX_FRAME_DT.max(self.step));
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        self.total_steps += substeps as u64;
        substeps
    }

    /// Advance the clock and tick the arena as many times as it allows
    ///
    /// Each event is paired with the arena tick that produced it.
    pub fn run(&mut self, arena: &mut Arena, frame_dt: f32) -> Vec<(u64, GameEvent)> {
        let steps = self.advance(frame_dt);
        let mut events = Vec::new();
        for _ in 0..steps {
            let produced = tick(arena, self.step);
            let at = arena.time_ticks();
            events.extend(produced.into_iter().map(|event| (at, event)));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_one_frame_one_tick() {
        let mut clock = FixedTimestep::new(0.25, 8);
        assert_eq!(clock.advance(0.25), 1);
        assert_eq!(clock.accumulator(), 0.0);
    }

    #[test]
    fn test_step_longer_than_frame_clamp() {
        // A 0.5s step exceeds the 0.1s clamp but must still tick
        let mut clock = FixedTimestep::new(0.5, 8);
        assert_eq!(clock.advance(0.5), 1);
        assert_eq!(clock.advance(3.0), 1);
        assert_eq!(clock.accumulator(), 0.0);
        assert_eq!(clock.total_steps(), 2);
    }

    #[test]
    fn test_default_clock_clamps_to_max_frame() {
        let mut clock = FixedTimestep::default();
        // 0.1s of 1/60 steps, not the full 2s stall
        let steps = clock.advance(2.0);
        assert!(steps <= 6);
        assert!(clock.accumulator() < clock.step());
    }

    #[test]
    fn test_remainder_carries_over() {
        // Power-of-two step keeps the arithmetic exact
        let mut clock = FixedTimestep::new(0.03125, 8);
        assert_eq!(clock.advance(0.046875), 1);
        assert_eq!(clock.accumulator(), 0.015625);
        assert_eq!(clock.advance(0.015625), 1);
        assert_eq!(clock.accumulator(), 0.0);
        assert_eq!(clock.total_steps(), 2);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut clock = FixedTimestep::new(0.0078125, 4);
        // 0.1s clamp would allow 12 steps, the cap allows 4
        assert_eq!(clock.advance(5.0), 4);
    }

    #[test]
    fn test_run_tags_events_with_their_tick() {
        let mut arena = Arena::with_size(Settings::default(), 400.0, 600.0);
        // First step lands at x 382 (right edge 402), second comes back inside
        arena.place_ball(glam::Vec2::new(370.0, 300.0), glam::Vec2::new(12.0, 12.0));
        let mut clock = FixedTimestep::new(0.03125, 8);
        let events = clock.run(&mut arena, 0.0625);
        assert_eq!(events, vec![(1, GameEvent::WallBounce)]);
        assert_eq!(arena.time_ticks(), 2);
    }

    #[test]
    fn test_negative_frame_is_ignored() {
        let mut clock = FixedTimestep::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.accumulator(), 0.0);
    }

    #[test]
    fn test_run_ticks_arena() {
        let mut arena = Arena::with_size(Settings::default(), 400.0, 600.0);
        let mut clock = FixedTimestep::new(0.03125, 8);
        let events = clock.run(&mut arena, 0.0625);
        assert!(events.is_empty());
        assert_eq!(arena.time_ticks(), 2);
        // Two steps of (12, 12) from (190, 290)
        assert_eq!(arena.ball().rect.pos, glam::Vec2::new(214.0, 314.0));
    }
}
