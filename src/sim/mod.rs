//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one unit of motion per tick)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod geometry;
pub mod physics;
pub mod state;
pub mod tick;

pub use ai::AiController;
pub use geometry::{Collider, Rect, intersects};
pub use physics::{EdgeExit, edge_exit};
pub use state::{Ball, GameEvent, GameState, Paddle, RunState, Score, Side};
pub use tick::{TickInput, tick};
