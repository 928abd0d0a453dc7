//! Paddle Duel entry point
//!
//! Native builds run a headless match: the player paddle is steered by a
//! second AI through ordinary input events, frames come from a manual
//! scheduler, and the result is logged.
//!
//! Usage: `paddle-duel [settings.json] [frames]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use paddle_duel::persistence::JsonFileStore;
    use paddle_duel::platform::{InputEvent, ManualScheduler};
    use paddle_duel::renderer::RecordingSurface;
    use paddle_duel::sim::{AiController, GameEvent, RunState};
    use paddle_duel::{Game, Settings};

    const DEFAULT_FRAMES: u64 = 60 * 60;

    env_logger::init();
    log::info!("Paddle Duel (native) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args.next().map(PathBuf::from);
    let frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Invalid frame count ({}), using {}", e, DEFAULT_FRAMES);
            DEFAULT_FRAMES
        }
        None => DEFAULT_FRAMES,
    };

    let settings = settings_path
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();
    let store_path = settings_path
        .as_deref()
        .and_then(|p| p.parent())
        .map(|dir| dir.join("highscore.json"))
        .unwrap_or_else(|| PathBuf::from("highscore.json"));

    let autopilot = AiController::new(settings.paddle_speed, settings.ai_dead_zone);
    let mut game = Game::new(settings, ManualScheduler::new(), JsonFileStore::open(store_path));
    let mut surface = RecordingSurface::new();

    game.start();

    let mut hits = 0u64;
    let mut frame_count = 0u64;
    while frame_count < frames {
        let Some(handle) = game.scheduler_mut().next_frame() else {
            break;
        };

        let state = game.state();
        let intent = match autopilot.desired_velocity(&state.player, &state.ball) {
            v if v < 0.0 => InputEvent::MoveUp,
            v if v > 0.0 => InputEvent::MoveDown,
            _ => InputEvent::Stop,
        };
        game.handle_input(intent);

        surface.clear();
        let events = game.frame(handle, &mut surface);
        hits += events
            .iter()
            .filter(|e| matches!(e, GameEvent::PaddleHit(_)))
            .count() as u64;
        frame_count += 1;
    }

    let state = game.state();
    let outcome = match game.run_state() {
        RunState::GameOver => "game over",
        _ => "time up",
    };
    log::info!(
        "Finished after {} frames ({}): score {}-{}, {} paddle hits, high score {}",
        frame_count,
        outcome,
        state.score.player,
        state.score.opponent,
        hits,
        game.high_score()
    );
    println!(
        "{} after {} frames: {} - {} (high score {})",
        outcome,
        frame_count,
        state.score.player,
        state.score.opponent,
        game.high_score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `paddle_duel::Game` directly
}
