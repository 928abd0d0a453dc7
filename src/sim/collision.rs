//! Collision detection and response between the ball, the walls and the paddles
//!
//! Contact is tested on the ball's bounding square. Responses always leave
//! the ball outside whatever it hit, so the same contact cannot fire twice.

use super::geometry::Rect;
use super::state::{Ball, Paddle, Side};
use crate::settings::{Settings, SpinMode};

/// Bounce the ball off the top and bottom walls
///
/// Velocity is pointed back into the field (not blindly toggled) and the ball
/// is clamped inside, so a ball that overshot the wall this tick is back in
/// bounds before anything else looks at it. Returns true when `vel.y` flipped.
pub fn resolve_walls(ball: &mut Ball, field_height: f32) -> bool {
    let max_y = (field_height - ball.size).max(0.0);
    let before = ball.vel.y;

    if ball.pos.y <= 0.0 {
        ball.vel.y = ball.vel.y.abs();
    } else if ball.pos.y >= max_y {
        ball.vel.y = -ball.vel.y.abs();
    } else {
        return false;
    }

    ball.pos.y = ball.pos.y.clamp(0.0, max_y);
    ball.vel.y.signum() != before.signum() && before != 0.0
}

/// Check whether the ball touches a paddle while heading toward its face
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let approaching = match side {
        Side::Player => ball.vel.x < 0.0,
        Side::Opponent => ball.vel.x > 0.0,
    };
    approaching && paddle.rect().intersects(&ball.rect())
}

/// Contact offset from the paddle centre, normalized to [-1, 1]
///
/// -1 is the top tip, 1 the bottom tip.
pub fn contact_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    let half = paddle.height / 2.0;
    if half <= 0.0 {
        return 0.0;
    }
    ((ball.center().y - paddle.center_y()) / half).clamp(-1.0, 1.0)
}

/// Return the ball off a paddle
///
/// Flips horizontal velocity (with the configured speed-up and cap), places
/// the ball flush against the paddle face and applies spin from the contact
/// offset.
pub fn reflect_off_paddle(ball: &mut Ball, paddle: &Paddle, side: Side, settings: &Settings) {
    let cap = settings.max_ball_speed.abs().max(settings.serve_speed.abs());
    let speed = (ball.vel.x.abs() * settings.effective_speed_multiplier()).min(cap);

    let face: Rect = paddle.rect();
    match side {
        Side::Player => {
            ball.vel.x = speed;
            ball.pos.x = face.right();
        }
        Side::Opponent => {
            ball.vel.x = -speed;
            ball.pos.x = face.left() - ball.size;
        }
    }

    let spin = contact_offset(ball, paddle) * settings.spin;
    ball.vel.y = match settings.spin_mode {
        SpinMode::Add => ball.vel.y + spin,
        SpinMode::Replace => spin,
    }
    .clamp(-cap, cap);
}

/// Resolve at most one paddle hit
///
/// Only the paddle the ball is moving toward can qualify, so at most one does.
pub fn resolve_paddles(
    ball: &mut Ball,
    player: &Paddle,
    opponent: &Paddle,
    settings: &Settings,
) -> Option<Side> {
    for (paddle, side) in [(player, Side::Player), (opponent, Side::Opponent)] {
        if paddle_contact(ball, paddle, side) {
            reflect_off_paddle(ball, paddle, side, settings);
            return Some(side);
        }
    }
    None
}
