//! Fixed timestep simulation tick
//!
//! Ordering within a tick: player paddle, AI paddle, ball step (walls,
//! paddles, edges, serve). Paddles move before the ball so a hit is detected
//! against this tick's paddle position, not last tick's.

use super::ai::AiController;
use super::physics;
use super::state::{GameEvent, GameState, RunState};
use crate::settings::Settings;

/// Player input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Held vertical velocity intent (units per tick, +y is down)
    pub player_velocity: f32,
    /// Absolute pointer target for the paddle centre; wins over velocity
    pub player_target: Option<f32>,
}

/// Advance the game state by one fixed step
///
/// Does nothing unless the game is running. Returns the events of the tick
/// in the order they happened.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    ai: &AiController,
    settings: &Settings,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != RunState::Running {
        return events;
    }

    state.time_ticks += 1;

    // Player paddle
    match input.player_target.filter(|y| y.is_finite()) {
        Some(target) => state.player.center_on(target, settings.field_height),
        None => {
            let max = settings.paddle_speed.abs();
            let dy = if input.player_velocity.is_finite() {
                input.player_velocity.clamp(-max, max)
            } else {
                0.0
            };
            state.player.move_by(dy, settings.field_height);
        }
    }

    // Opponent paddle
    ai.drive(&mut state.opponent, &state.ball, settings.field_height);

    physics::step(state, settings, &mut events);
    events
}
