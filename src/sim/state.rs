//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`], owned by the
//! game loop and handed to each step by reference.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::{SERVE_SPEED, SERVE_VY_FLOOR};
use crate::settings::Settings;

/// Run state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    /// Constructed, never started
    #[default]
    Idle,
    /// Ticking
    Running,
    /// Frozen until resumed
    Paused,
    /// Run ended, waiting for start/restart
    GameOver,
}

/// Which end of the field a paddle (and its score) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by input
    Player,
    /// Right paddle, driven by the AI
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball was returned by a paddle
    PaddleHit(Side),
    /// A side earned a point
    Scored(Side),
    /// A new ball was put in play from the centre
    Served,
    /// Ball got past the defended edge; the run is over
    DefendedEdgeBreached,
    /// Versus target score reached
    MatchWon(Side),
}

/// A paddle. `x` is fixed per side, `y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity applied on the last tick
    pub vy: f32,
}

impl Paddle {
    /// A paddle at column `x`, vertically centred in the field
    pub fn new(x: f32, settings: &Settings) -> Self {
        Self {
            x,
            y: (settings.field_height - settings.paddle_height) / 2.0,
            width: settings.paddle_width,
            height: settings.paddle_height,
            vy: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Largest legal `y` in a field of the given height
    #[inline]
    pub fn max_y(&self, field_height: f32) -> f32 {
        (field_height - self.height).max(0.0)
    }

    /// Keep the paddle fully inside the field
    pub fn clamp_to_field(&mut self, field_height: f32) {
        self.y = self.y.clamp(0.0, self.max_y(field_height));
    }

    /// Move vertically by `dy` and clamp
    pub fn move_by(&mut self, dy: f32, field_height: f32) {
        let before = self.y;
        self.y += dy;
        self.clamp_to_field(field_height);
        self.vy = self.y - before;
    }

    /// Centre the paddle on `center_y` and clamp
    pub fn center_on(&mut self, center_y: f32, field_height: f32) {
        let before = self.y;
        self.y = center_y - self.height / 2.0;
        self.clamp_to_field(field_height);
        self.vy = self.y - before;
    }
}

/// The ball. `pos` is the top-left corner of its bounding square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(size: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Put the ball in the centre of the field with a fresh random velocity
    ///
    /// Horizontal direction is a coin flip at the serve speed; vertical speed
    /// is drawn from `[serve_min_vy, serve_max_vy)` with a random sign. The
    /// lower bound is raised to `SERVE_VY_FLOOR`, so it is never zero.
    pub fn serve<R: Rng + ?Sized>(&mut self, settings: &Settings, rng: &mut R) {
        self.pos = Vec2::new(
            (settings.field_width - self.size) / 2.0,
            (settings.field_height - self.size) / 2.0,
        );

        let dir_x = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let dir_y = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

        // A zero lower bound would allow a perfectly flat serve
        let lo = match settings.serve_min_vy.abs() {
            v if v.is_finite() && v >= SERVE_VY_FLOOR => v,
            _ => SERVE_VY_FLOOR,
        };
        let hi = match settings.serve_max_vy.abs() {
            v if v.is_finite() => v.max(lo),
            _ => lo,
        };
        let vy = if hi > lo { rng.random_range(lo..hi) } else { lo };

        // Guard against a zero serve speed leaving the ball stalled
        let vx = if settings.serve_speed.abs() > f32::EPSILON {
            settings.serve_speed.abs()
        } else {
            SERVE_SPEED
        };

        self.vel = Vec2::new(dir_x * vx, dir_y * vy);
    }
}

/// Points for each side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Serve RNG
    pub rng: Pcg32,
    pub phase: RunState,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    /// Paddle hits in the current rally
    pub rally: u32,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    /// Create a fresh state with the given serve seed
    pub fn new(settings: &Settings, seed: u64) -> Self {
        Self::with_rng(settings, Pcg32::seed_from_u64(seed))
    }

    /// Create a fresh state with an explicit RNG
    pub fn with_rng(settings: &Settings, rng: Pcg32) -> Self {
        let mut state = Self {
            rng,
            phase: RunState::Idle,
            time_ticks: 0,
            rally: 0,
            player: Paddle::new(settings.player_x(), settings),
            opponent: Paddle::new(settings.opponent_x(), settings),
            ball: Ball::new(settings.ball_size),
            score: Score::default(),
        };
        state.ball.serve(settings, &mut state.rng);
        state
    }

    /// Reinitialize paddles, ball and score in place (phase is left alone)
    pub fn reset(&mut self, settings: &Settings) {
        self.player = Paddle::new(settings.player_x(), settings);
        self.opponent = Paddle::new(settings.opponent_x(), settings);
        self.ball = Ball::new(settings.ball_size);
        self.score = Score::default();
        self.time_ticks = 0;
        self.rally = 0;
        self.serve(settings);
    }

    /// Serve a new ball from the centre
    pub fn serve(&mut self, settings: &Settings) {
        self.ball.serve(settings, &mut self.rng);
        self.rally = 0;
        log::debug!(
            "Serve at tick {}: vel=({:.2}, {:.2})",
            self.time_ticks,
            self.ball.vel.x,
            self.ball.vel.y
        );
    }
}
