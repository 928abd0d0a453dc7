//! Paddle Duel - classic two-paddle Pong against a reactive AI
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, physics, AI, game state)
//! - `game`: Game loop and run-state machine
//! - `renderer`: Draw-call description of a frame
//! - `platform`: Input events and frame scheduling
//! - `persistence`: Key-value storage for the high score
//! - `settings`: Tunable rules and dimensions

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, GameAction, NullUi, TransitionResult, UiSink};
pub use highscores::HighScore;
pub use settings::{BallShape, Difficulty, ScoringMode, Settings, SpinMode};

/// Default game dimensions and tuning (units are pixels and pixels per tick)
pub mod consts {
    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 18.0;
    pub const SERVE_SPEED: f32 = 5.0;
    pub const SERVE_MIN_VY: f32 = 3.0;
    pub const SERVE_MAX_VY: f32 = 5.0;
    /// Smallest vertical serve speed, whatever the settings say
    pub const SERVE_VY_FLOOR: f32 = 0.5;
    /// Stays below paddle width + ball size so a hit can't be skipped
    pub const MAX_BALL_SPEED: f32 = 16.0;

    /// Vertical velocity added by a hit on the very tip of a paddle
    pub const SPIN: f32 = 2.0;

    /// AI defaults (a little slower than the player)
    pub const AI_SPEED: f32 = PADDLE_SPEED - 2.0;
    pub const AI_DEAD_ZONE: f32 = 16.0;
}
