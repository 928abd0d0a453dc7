//! Game loop and run-state machine
//!
//! [`Game`] owns the simulation state and its collaborators. The host drives
//! it with actions (start, pause, ...), input events and frame callbacks.
//!
//! Frame handling: while running there is exactly one outstanding frame
//! request. Any pending request is cancelled before a new one is armed, and
//! stopping (pause, game over, restart) cancels synchronously, so a frame
//! requested before a reset can never advance the fresh state.

use crate::highscores::HighScore;
use crate::persistence::KeyValueStore;
use crate::platform::{FrameHandle, FrameScheduler, InputEvent, InputState};
use crate::renderer::{DrawSurface, draw_frame};
use crate::settings::Settings;
use crate::sim::{AiController, GameEvent, GameState, RunState, Side, tick};

/// Actions that trigger run-state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Pause,
    Resume,
    /// Pause when running, resume when paused
    TogglePause,
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: RunState,
    pub to_state: RunState,
    pub action: GameAction,
}

/// Receives values for display outside the playfield (score labels, buttons)
pub trait UiSink {
    fn scores(&mut self, _player: u32, _opponent: u32, _high_score: u32) {}
    fn run_state_changed(&mut self, _state: RunState) {}
}

/// UI sink that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullUi;

impl UiSink for NullUi {}

/// A game session
pub struct Game<S: FrameScheduler, K: KeyValueStore> {
    settings: Settings,
    state: GameState,
    ai: AiController,
    input: InputState,
    high_score: HighScore,
    store: K,
    scheduler: S,
    ui: Box<dyn UiSink>,
    pending_frame: Option<FrameHandle>,
}

impl<S: FrameScheduler, K: KeyValueStore> Game<S, K> {
    /// Create an idle game
    ///
    /// The serve seed comes from `settings.seed` or, if unset, from entropy.
    pub fn new(settings: Settings, scheduler: S, store: K) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let state = GameState::new(&settings, seed);
        let high_score = HighScore::load(&store);
        log::info!("Game created with seed: {}", seed);

        Self {
            ai: AiController::from_settings(&settings),
            settings,
            state,
            input: InputState::new(),
            high_score,
            store,
            scheduler,
            ui: Box::new(NullUi),
            pending_frame: None,
        }
    }

    /// Attach a UI sink
    pub fn with_ui(mut self, ui: Box<dyn UiSink>) -> Self {
        self.ui = ui;
        self.notify_scores();
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for hosts that stage positions (demos, tests)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn run_state(&self) -> RunState {
        self.state.phase
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// The frame this game is waiting for, if any
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// Record an input event for the next frame
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        self.input.apply(event)
    }

    pub fn start(&mut self) -> TransitionResult {
        self.dispatch(GameAction::Start)
    }

    pub fn pause(&mut self) -> TransitionResult {
        self.dispatch(GameAction::Pause)
    }

    pub fn resume(&mut self) -> TransitionResult {
        self.dispatch(GameAction::Resume)
    }

    pub fn restart(&mut self) -> TransitionResult {
        self.dispatch(GameAction::Restart)
    }

    /// Apply an action to the run-state machine
    pub fn dispatch(&mut self, action: GameAction) -> TransitionResult {
        use RunState::*;

        let from = self.state.phase;
        let action = match (action, from) {
            (GameAction::TogglePause, Running) => GameAction::Pause,
            (GameAction::TogglePause, Paused) => GameAction::Resume,
            _ => action,
        };

        let to = match (action, from) {
            (GameAction::Start, Idle | GameOver) => {
                self.reset();
                Some(Running)
            }
            (GameAction::Pause, Running) => Some(Paused),
            (GameAction::Resume, Paused) => Some(Running),
            (GameAction::Restart, Running | Paused | GameOver) => {
                self.reset();
                Some(Running)
            }
            _ => None,
        };

        let Some(to) = to else {
            log::debug!("Ignoring {:?} while {:?}", action, from);
            return TransitionResult {
                success: false,
                from_state: from,
                to_state: from,
                action,
            };
        };

        self.state.phase = to;
        if to == Running {
            self.arm();
        } else {
            self.disarm();
        }

        log::info!("{:?}: {:?} -> {:?}", action, from, to);
        self.ui.run_state_changed(to);

        TransitionResult {
            success: true,
            from_state: from,
            to_state: to,
            action,
        }
    }

    /// Run one frame
    ///
    /// `handle` must be the frame this game requested; anything else is
    /// stale and ignored. While running: apply input, move the AI, step the
    /// ball, commit scores, draw, then request the next frame.
    pub fn frame(&mut self, handle: FrameHandle, surface: &mut dyn DrawSurface) -> Vec<GameEvent> {
        if self.pending_frame != Some(handle) {
            log::debug!("Ignoring stale frame {:?}", handle);
            return Vec::new();
        }
        self.pending_frame = None;

        if self.state.phase != RunState::Running {
            return Vec::new();
        }

        let input = self.input.sample(self.settings.paddle_speed);
        let events = tick(&mut self.state, &input, &self.ai, &self.settings);
        self.commit(&events);

        draw_frame(&self.state, &self.settings, surface);

        if self.state.phase == RunState::Running {
            self.arm();
        } else {
            self.disarm();
            self.ui.run_state_changed(self.state.phase);
        }
        events
    }

    /// Draw the current frame without advancing (paused and game-over screens)
    pub fn redraw(&self, surface: &mut dyn DrawSurface) {
        draw_frame(&self.state, &self.settings, surface);
    }

    fn commit(&mut self, events: &[GameEvent]) {
        if !events.iter().any(|e| matches!(e, GameEvent::Scored(_))) {
            return;
        }
        if events.contains(&GameEvent::Scored(Side::Player)) {
            self.high_score
                .record(self.state.score.player, &mut self.store);
        }
        self.notify_scores();
    }

    fn reset(&mut self) {
        self.disarm();
        self.state.reset(&self.settings);
        self.input.discard_pointer();
        self.notify_scores();
    }

    fn notify_scores(&mut self) {
        self.ui.scores(
            self.state.score.player,
            self.state.score.opponent,
            self.high_score.best(),
        );
    }

    /// Request the next frame, cancelling any outstanding request first
    fn arm(&mut self) {
        self.disarm();
        self.pending_frame = Some(self.scheduler.request_frame());
    }

    fn disarm(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}
