//! Reactive paddle AI
//!
//! Tracks the ball's vertical centre at a bounded speed. No prediction: the
//! controller only looks at where the ball is now. A dead zone around the
//! target keeps the paddle from jittering when it is already close.

use super::state::{Ball, Paddle};
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiController {
    /// Maximum paddle movement per tick
    pub speed: f32,
    /// No movement while the paddle centre is within this distance of the target
    pub dead_zone: f32,
}

impl AiController {
    pub fn new(speed: f32, dead_zone: f32) -> Self {
        Self {
            speed: speed.abs(),
            dead_zone: dead_zone.abs(),
        }
    }

    /// Opponent controller with the difficulty preset applied
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.effective_ai_speed(), settings.effective_ai_dead_zone())
    }

    /// Vertical position the paddle centre should move toward
    #[inline]
    pub fn target(ball: &Ball) -> f32 {
        ball.center().y
    }

    /// Vertical velocity for this tick
    ///
    /// Zero inside the dead zone, otherwise toward the target at no more than
    /// `speed` and never past it.
    pub fn desired_velocity(&self, paddle: &Paddle, ball: &Ball) -> f32 {
        let diff = Self::target(ball) - paddle.center_y();
        if !diff.is_finite() || diff.abs() <= self.dead_zone {
            return 0.0;
        }
        diff.signum() * self.speed.min(diff.abs())
    }

    /// Move the paddle one tick toward the ball and clamp it to the field
    pub fn drive(&self, paddle: &mut Paddle, ball: &Ball, field_height: f32) {
        let dy = self.desired_velocity(paddle, ball);
        paddle.move_by(dy, field_height);
    }
}
