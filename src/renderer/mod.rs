//! Rendering handoff
//!
//! The core draws nothing itself. After each tick the host pulls a flat list
//! of colored shapes and renders it however it likes.

pub mod sprites;

pub use sprites::{Shape, Sprite, colors, draw_list};
