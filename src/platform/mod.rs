//! Platform abstraction layer
//!
//! The host feeds the game through these:
//! - Input events (keys, pointer)
//! - Frame scheduling (request/cancel the next tick)

pub mod input;
pub mod scheduler;

pub use input::{InputEvent, InputState};
pub use scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
