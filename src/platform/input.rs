//! Player input
//!
//! Hosts translate keys and pointer motion into [`InputEvent`]s as they
//! arrive. The game loop samples [`InputState`] once per frame.

use crate::sim::TickInput;

/// A paddle intent from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Move up at full speed until stopped
    MoveUp,
    /// Move down at full speed until stopped
    MoveDown,
    /// Stop moving
    Stop,
    /// Pointer at this y (field coordinates); the paddle centres on it
    PointerY(f32),
}

/// Latest input intents
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// -1, 0 or 1
    direction: i8,
    /// Pointer target not yet consumed by a frame
    pointer: Option<f32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event. Returns false if it was dropped as malformed.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::MoveUp => self.direction = -1,
            InputEvent::MoveDown => self.direction = 1,
            InputEvent::Stop => self.direction = 0,
            InputEvent::PointerY(y) => {
                if !y.is_finite() {
                    log::debug!("Dropping pointer event with y={}", y);
                    return false;
                }
                self.pointer = Some(y);
            }
        }
        true
    }

    /// Produce this frame's tick input
    ///
    /// The held direction persists; a pointer target is used once.
    pub fn sample(&mut self, paddle_speed: f32) -> TickInput {
        TickInput {
            player_velocity: f32::from(self.direction) * paddle_speed,
            player_target: self.pointer.take(),
        }
    }

    /// Drop a pointer target nobody has consumed yet
    ///
    /// The held direction stays: the key that set it is still down.
    pub fn discard_pointer(&mut self) {
        self.pointer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_direction_persists() {
        let mut input = InputState::new();
        input.apply(InputEvent::MoveDown);
        assert_eq!(input.sample(7.0).player_velocity, 7.0);
        assert_eq!(input.sample(7.0).player_velocity, 7.0);

        input.apply(InputEvent::MoveUp);
        assert_eq!(input.sample(7.0).player_velocity, -7.0);

        input.apply(InputEvent::Stop);
        assert_eq!(input.sample(7.0).player_velocity, 0.0);
    }

    #[test]
    fn test_latest_pointer_wins_and_is_consumed() {
        let mut input = InputState::new();
        input.apply(InputEvent::PointerY(50.0));
        input.apply(InputEvent::PointerY(80.0));

        assert_eq!(input.sample(7.0).player_target, Some(80.0));
        assert_eq!(input.sample(7.0).player_target, None);
    }

    #[test]
    fn test_malformed_pointer_dropped() {
        let mut input = InputState::new();
        input.apply(InputEvent::PointerY(50.0));
        assert!(!input.apply(InputEvent::PointerY(f32::NAN)));
        assert!(!input.apply(InputEvent::PointerY(f32::NEG_INFINITY)));
        assert_eq!(input.sample(7.0).player_target, Some(50.0));
    }

    #[test]
    fn test_discard_pointer_keeps_direction() {
        let mut input = InputState::new();
        input.apply(InputEvent::MoveUp);
        input.apply(InputEvent::PointerY(10.0));
        input.discard_pointer();
        assert_eq!(
            input.sample(7.0),
            TickInput {
                player_velocity: -7.0,
                player_target: None,
            }
        );
    }
}
