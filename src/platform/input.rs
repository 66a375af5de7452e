//! Pointer input adapter
//!
//! Hosts report a cursor/touch x in window coordinates. The adapter shifts it
//! into arena space and applies it to the paddle right away. There is no
//! buffering: the latest report wins.

use crate::sim::Arena;

/// Maps window-space pointer positions onto the paddle
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    /// Window x of the arena's left edge
    origin_x: f32,
    /// Last arena-local x applied to the paddle
    last_x: Option<f32>,
}

impl PointerInput {
    /// Adapter for an arena whose left edge sits at `origin_x` in the window
    pub fn new(origin_x: f32) -> Self {
        Self {
            origin_x,
            last_x: None,
        }
    }

    /// The arena moved inside the window
    pub fn set_origin_x(&mut self, origin_x: f32) {
        self.origin_x = origin_x;
    }

    /// Convert a window x into arena-local x
    #[inline]
    pub fn to_arena_x(&self, window_x: f32) -> f32 {
        window_x - self.origin_x
    }

    /// Pointer moved: recenter the paddle under it
    pub fn pointer_moved(&mut self, arena: &mut Arena, window_x: f32) {
        let x = self.to_arena_x(window_x);
        self.last_x = Some(x);
        arena.on_pointer_move(x);
    }

    /// Last arena-local x that was applied, if any
    pub fn last_x(&self) -> Option<f32> {
        self.last_x
    }
}
