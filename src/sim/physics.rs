//! Ball physics step
//!
//! One fixed step per tick, no delta-time scaling: integrate, bounce off the
//! walls, resolve paddle contact, then check the scoring edges and serve.

use super::collision::{resolve_paddles, resolve_walls};
use super::state::{GameEvent, GameState, RunState, Side};
use crate::settings::{ScoringMode, Settings};

/// Where the ball left the field this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeExit {
    /// Past the player's (left) edge
    Left,
    /// Past the opponent's (right) edge
    Right,
}

/// Check the scoring edges: the ball's left side below 0 or its right side
/// beyond the field width
pub fn edge_exit(state: &GameState, settings: &Settings) -> Option<EdgeExit> {
    let rect = state.ball.rect();
    if rect.left() < 0.0 {
        Some(EdgeExit::Left)
    } else if rect.right() > settings.field_width {
        Some(EdgeExit::Right)
    } else {
        None
    }
}

/// Advance the ball by one tick, pushing what happened onto `events`
///
/// Paddles must already be in their positions for this tick.
pub fn step(state: &mut GameState, settings: &Settings, events: &mut Vec<GameEvent>) {
    state.ball.pos += state.ball.vel;

    if resolve_walls(&mut state.ball, settings.field_height) {
        events.push(GameEvent::WallBounce);
    }

    if let Some(side) = resolve_paddles(&mut state.ball, &state.player, &state.opponent, settings)
    {
        state.rally += 1;
        events.push(GameEvent::PaddleHit(side));
        log::debug!("{:?} paddle hit (rally {})", side, state.rally);

        if settings.scoring == ScoringMode::Rally && side == Side::Player {
            award(state, Side::Player, events);
        }
        // A paddle hit moved the ball back inside; no edge can be crossed
        return;
    }

    let Some(exit) = edge_exit(state, settings) else {
        return;
    };

    match (settings.scoring, exit) {
        (ScoringMode::Rally, EdgeExit::Left) => {
            events.push(GameEvent::DefendedEdgeBreached);
            state.phase = RunState::GameOver;
            log::info!("Ball lost after a rally of {}: game over", state.rally);
        }
        (ScoringMode::Rally, EdgeExit::Right) => {
            award(state, Side::Player, events);
            state.serve(settings);
            events.push(GameEvent::Served);
        }
        (ScoringMode::Versus, exit) => {
            let scorer = match exit {
                EdgeExit::Left => Side::Opponent,
                EdgeExit::Right => Side::Player,
            };
            award(state, scorer, events);

            if let Some(target) = settings.win_score
                && state.score.get(scorer) >= target
            {
                events.push(GameEvent::MatchWon(scorer));
                state.phase = RunState::GameOver;
                log::info!("{:?} wins {}-{}", scorer, state.score.player, state.score.opponent);
                return;
            }

            state.serve(settings);
            events.push(GameEvent::Served);
        }
    }
}

fn award(state: &mut GameState, side: Side, events: &mut Vec<GameEvent>) {
    state.score.award(side);
    events.push(GameEvent::Scored(side));
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup(settings: &Settings) -> GameState {
        let mut state = GameState::new(settings, 12345);
        state.phase = RunState::Running;
        state
    }

    #[test]
    fn test_free_flight() {
        let settings = Settings::default();
        let mut state = setup(&settings);
        let center = Vec2::new(settings.field_width / 2.0, settings.field_height / 2.0);
        state.ball.pos = center;
        state.ball.vel = Vec2::new(5.0, 4.0);

        let mut events = Vec::new();
        step(&mut state, &settings, &mut events);

        assert_eq!(state.ball.pos, center + Vec2::new(5.0, 4.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, 4.0));
        assert!(events.is_empty());
        assert_eq!(state.score, Default::default());
    }

    #[test]
    fn test_player_paddle_return() {
        let settings = Settings::versus();
        let mut state = setup(&settings);
        let face = state.player.rect().right();
        state.ball.pos = Vec2::new(face - 1.0, state.player.center_y());
        state.ball.vel = Vec2::new(-5.0, 0.0);

        let mut events = Vec::new();
        step(&mut state, &settings, &mut events);

        assert_eq!(state.ball.vel.x, 5.0);
        assert_eq!(state.ball.pos.x, face);
        assert_eq!(events, vec![GameEvent::PaddleHit(Side::Player)]);
        assert_eq!(state.score, Default::default());
    }

    #[test]
    fn test_rally_scores_own_hit() {
        let settings = Settings::default();
        let mut state = setup(&settings);
        let face = state.player.rect().right();
        state.ball.pos = Vec2::new(face - 1.0, state.player.center_y());
        state.ball.vel = Vec2::new(-5.0, 0.0);

        let mut events = Vec::new();
        step(&mut state, &settings, &mut events);

        assert_eq!(state.score.player, 1);
        assert_eq!(state.score.opponent, 0);
        assert_eq!(
            events,
            vec![GameEvent::PaddleHit(Side::Player), GameEvent::Scored(Side::Player)]
        );
    }

    #[test]
    fn test_rally_opponent_hit_does_not_score() {
        let settings = Settings::default();
        let mut state = setup(&settings);
        state.ball.pos = Vec2::new(state.opponent.x - 16.0, state.opponent.y + 10.0);
        state.ball.vel = Vec2::new(5.0, 0.0);

        let mut events = Vec::new();
        step(&mut state, &settings, &mut events);

        assert_eq!(events, vec![GameEvent::PaddleHit(Side::Opponent)]);
        assert_eq!(state.score, Default::default());
        assert!(state.ball.vel.x < 0.0);
    }

    #[test]
    fn test_rally_left_edge_ends_game() {
        let settings = Settings::default();
        let mut state = setup(&settings);
        // Well away from the player paddle vertically
        state.player.y = 0.0;
        state.ball.pos = Vec2::new(2.0, 300.0);
        state.ball.vel = Vec2::new(-5.0, 1.0);

        let mut events = Vec::new();
        step(&mut state, &settings, &mut events);

        assert_eq!(state.phase, RunState::GameOver);
        assert_eq!(events, vec![GameEvent::DefendedEdgeBreached]);
        assert_eq!(state.score, Default::default());
    }

    #[test]
    fn test_rally_right_edge_scores_and_serves() {
        let settings = Settings::default();
        let mut state = setup(&settings);
        state.opponent.y = 0.0;
        state.ball.pos = Vec2::new(settings.field_width - settings.ball_size - 2.0, 300.0);
        state.ball.vel = Vec2::new(5.0, 1.0);

        let mut events = Vec::new();
        step(&mut state, &settings, &mut events);

        assert_eq!(state.phase, RunState::Running);
        assert_eq!(state.score.player, 1);
        assert_eq!(
            events,
            vec![GameEvent::Scored(Side::Player), GameEvent::Served]
        );
        assert_eq!(
            state.ball.center(),
            Vec2::new(settings.field_width / 2.0, settings.field_height / 2.0)
        );
    }

    #[test]
    fn test_versus_left_edge_scores_opponent() {
        let settings = Settings::versus();
        let mut state = setup(&settings);
        state.player.y = 0.0;
        state.ball.pos = Vec2::new(2.0, 300.0);
        state.ball.vel = Vec2::new(-5.0, 1.0);

        let mut events = Vec::new();
        step(&mut state, &settings, &mut events);

        assert_eq!(state.phase, RunState::Running);
        assert_eq!(state.score.opponent, 1);
        assert_eq!(state.score.player, 0);
        assert_eq!(
            events,
            vec![GameEvent::Scored(Side::Opponent), GameEvent::Served]
        );
    }

    #[test]
    fn test_versus_win_score_ends_game() {
        let mut settings = Settings::versus();
        settings.win_score = Some(3);
        let mut state = setup(&settings);
        state.score.player = 2;
        state.opponent.y = 0.0;
        state.ball.pos = Vec2::new(settings.field_width - settings.ball_size - 2.0, 300.0);
        state.ball.vel = Vec2::new(5.0, 1.0);

        let mut events = Vec::new();
        step(&mut state, &settings, &mut events);

        assert_eq!(state.phase, RunState::GameOver);
        assert_eq!(state.score.player, 3);
        assert_eq!(
            events,
            vec![GameEvent::Scored(Side::Player), GameEvent::MatchWon(Side::Player)]
        );
    }

    #[test]
    fn test_wall_then_flight() {
        let settings = Settings::default();
        let mut state = setup(&settings);
        state.ball.pos = Vec2::new(400.0, 2.0);
        state.ball.vel = Vec2::new(5.0, -4.0);

        let mut events = Vec::new();
        step(&mut state, &settings, &mut events);

        assert_eq!(events, vec![GameEvent::WallBounce]);
        assert_eq!(state.ball.pos.y, 0.0);
        assert_eq!(state.ball.vel.y, 4.0);
    }
}
