//! Platform abstraction layer
//!
//! The glue a windowing host needs to drive the simulation:
//! - Fixed-step timing from variable frame deltas
//! - Pointer input mapped into arena space

pub mod input;
pub mod time;

pub use input::PointerInput;
pub use time::FixedTimestep;
