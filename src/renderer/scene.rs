//! Frame composition
//!
//! Turns a [`GameState`] into draw calls: background, net, paddles, ball,
//! scores and the game-over overlay.

use super::surface::{Color, DrawSurface, TextStyle, rgb};
use crate::settings::{BallShape, ScoringMode, Settings};
use crate::sim::{GameState, RunState};

pub const BACKGROUND: Color = rgb(0x111111);
pub const NET: Color = rgb(0x6dfde4);
pub const PLAYER: Color = rgb(0x6dfde4);
pub const OPPONENT: Color = rgb(0xe063fd);
pub const BALL: Color = rgb(0xffffff);
pub const TEXT: Color = rgb(0xffffff);
pub const ALERT: Color = rgb(0xe063fd);

/// Net dash length and gap
const NET_DASH: f32 = 8.0;
const NET_GAP: f32 = 12.0;
const NET_WIDTH: f32 = 2.0;

/// Draw one full frame
pub fn draw_frame(state: &GameState, settings: &Settings, surface: &mut dyn DrawSurface) {
    let w = settings.field_width;
    let h = settings.field_height;

    surface.fill_rect(0.0, 0.0, w, h, BACKGROUND);
    draw_net(settings, surface);

    for (paddle, color) in [(&state.player, PLAYER), (&state.opponent, OPPONENT)] {
        surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, color);
    }

    let ball = &state.ball;
    match settings.ball_shape {
        BallShape::Circle => {
            let c = ball.center();
            surface.fill_circle(c.x, c.y, ball.radius(), BALL);
        }
        BallShape::Square => surface.fill_square(ball.pos.x, ball.pos.y, ball.size, BALL),
    }

    draw_scores(state, settings, surface);

    if state.phase == RunState::GameOver {
        draw_game_over(settings, surface);
    }
}

fn draw_net(settings: &Settings, surface: &mut dyn DrawSurface) {
    let x = settings.field_width / 2.0 - NET_WIDTH / 2.0;
    let mut y = 0.0;
    while y < settings.field_height {
        let dash = NET_DASH.min(settings.field_height - y);
        surface.fill_rect(x, y, NET_WIDTH, dash, NET);
        y += NET_DASH + NET_GAP;
    }
}

fn draw_scores(state: &GameState, settings: &Settings, surface: &mut dyn DrawSurface) {
    let style = TextStyle {
        size: 32.0,
        color: TEXT,
    };
    let w = settings.field_width;

    surface.text(&state.score.player.to_string(), w / 4.0, 40.0, style);
    if settings.scoring == ScoringMode::Versus {
        surface.text(&state.score.opponent.to_string(), w * 3.0 / 4.0, 40.0, style);
    }
}

fn draw_game_over(settings: &Settings, surface: &mut dyn DrawSurface) {
    let cx = settings.field_width / 2.0;
    let cy = settings.field_height / 2.0;

    surface.text(
        "Game Over!",
        cx,
        cy - 20.0,
        TextStyle {
            size: 32.0,
            color: ALERT,
        },
    );
    surface.text(
        "Click 'Restart' to try again",
        cx,
        cy + 16.0,
        TextStyle {
            size: 20.0,
            color: TEXT,
        },
    );
}
