//! Game settings and rules
//!
//! Loaded from a JSON file on native builds. Every field has a default, so a
//! partial document only overrides what it names.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// AI difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "medium" | "med" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Multiplier applied to the AI paddle speed
    pub fn speed_scale(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.3,
        }
    }

    /// Multiplier applied to the AI dead zone
    pub fn dead_zone_scale(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.5,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 0.5,
        }
    }
}

/// How points are awarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScoringMode {
    /// Only the player's (left) edge is defended. The player scores on every
    /// paddle hit and whenever the ball gets past the opponent. Losing the
    /// ball on the left edge ends the game.
    #[default]
    Rally,
    /// Both edges are goals. A ball past one side scores for the other side
    /// and a new ball is served.
    Versus,
}

/// How paddle contact offset turns into vertical ball velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpinMode {
    /// dy += offset * spin
    #[default]
    Add,
    /// dy = offset * spin
    Replace,
}

/// Ball appearance (collision always uses the bounding square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BallShape {
    #[default]
    Circle,
    Square,
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between a field edge and the paddle on that side
    pub paddle_margin: f32,
    /// Player paddle speed (units per tick)
    pub paddle_speed: f32,

    // === Ball ===
    /// Edge of the ball's bounding square
    pub ball_size: f32,
    pub ball_shape: BallShape,
    /// Horizontal speed of a freshly served ball
    pub serve_speed: f32,
    /// Bounds of the vertical serve speed magnitude
    pub serve_min_vy: f32,
    pub serve_max_vy: f32,
    /// Cap on horizontal speed after paddle speed-ups
    pub max_ball_speed: f32,

    // === Paddle contact ===
    /// Horizontal speed multiplier per paddle hit (>= 1)
    pub speed_multiplier: f32,
    /// Vertical velocity change for a hit at the very tip of a paddle
    pub spin: f32,
    pub spin_mode: SpinMode,

    // === AI ===
    pub ai_speed: f32,
    /// Distance between paddle centre and ball centre below which the AI holds still
    pub ai_dead_zone: f32,
    pub difficulty: Difficulty,

    // === Rules ===
    pub scoring: ScoringMode,
    /// Versus only: first side to reach this many points ends the game
    pub win_score: Option<u32>,
    /// Serve RNG seed; `None` picks one from entropy
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_speed: PADDLE_SPEED,

            ball_size: BALL_SIZE,
            ball_shape: BallShape::Circle,
            serve_speed: SERVE_SPEED,
            serve_min_vy: SERVE_MIN_VY,
            serve_max_vy: SERVE_MAX_VY,
            max_ball_speed: MAX_BALL_SPEED,

            speed_multiplier: 1.0,
            spin: SPIN,
            spin_mode: SpinMode::Add,

            ai_speed: AI_SPEED,
            ai_dead_zone: AI_DEAD_ZONE,
            difficulty: Difficulty::Normal,

            scoring: ScoringMode::Rally,
            win_score: None,
            seed: None,
        }
    }
}

impl Settings {
    /// Settings for the classic two-sided game
    pub fn versus() -> Self {
        Self {
            scoring: ScoringMode::Versus,
            spin_mode: SpinMode::Replace,
            ..Self::default()
        }
    }

    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Paddle hit speed-up, never below 1
    pub fn effective_speed_multiplier(&self) -> f32 {
        if self.speed_multiplier.is_finite() {
            self.speed_multiplier.max(1.0)
        } else {
            1.0
        }
    }

    /// AI speed after the difficulty preset
    pub fn effective_ai_speed(&self) -> f32 {
        self.ai_speed * self.difficulty.speed_scale()
    }

    /// AI dead zone after the difficulty preset
    pub fn effective_ai_dead_zone(&self) -> f32 {
        self.ai_dead_zone * self.difficulty.dead_zone_scale()
    }

    /// x of the player (left) paddle
    pub fn player_x(&self) -> f32 {
        self.paddle_margin
    }

    /// x of the opponent (right) paddle
    pub fn opponent_x(&self) -> f32 {
        self.field_width - self.paddle_width - self.paddle_margin
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = self.to_json().map_err(io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "paddle_speed": 9.0, "scoring": "Versus" }"#)
            .expect("valid json");
        assert_eq!(settings.paddle_speed, 9.0);
        assert_eq!(settings.scoring, ScoringMode::Versus);
        assert_eq!(settings.field_width, FIELD_WIDTH);
        assert_eq!(settings.ai_dead_zone, AI_DEAD_ZONE);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ paddle_speed: }").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::versus();
        settings.win_score = Some(11);
        settings.seed = Some(7);
        let json = settings.to_json().expect("serializable");
        assert_eq!(Settings::from_json(&json).expect("valid json"), settings);
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!(
            "paddle-duel-settings-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("settings.json");

        let mut settings = Settings::versus();
        settings.difficulty = Difficulty::Hard;
        settings.seed = Some(42);
        settings.save(&path).expect("writable");

        assert_eq!(Settings::load(&path), settings);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join(format!(
            "paddle-duel-bad-settings-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("settings.json");

        let _ = std::fs::remove_file(&path);
        assert_eq!(Settings::load(&path), Settings::default());

        std::fs::write(&path, "{ not json").expect("writable");
        assert_eq!(Settings::load(&path), Settings::default());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_speed_multiplier_floor() {
        let mut settings = Settings::default();
        settings.speed_multiplier = 0.5;
        assert_eq!(settings.effective_speed_multiplier(), 1.0);
        settings.speed_multiplier = 1.04;
        assert_eq!(settings.effective_speed_multiplier(), 1.04);
        settings.speed_multiplier = f32::NAN;
        assert_eq!(settings.effective_speed_multiplier(), 1.0);
    }

    #[test]
    fn test_difficulty_scaling() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_ai_speed(), AI_SPEED);

        settings.difficulty = Difficulty::Hard;
        assert!(settings.effective_ai_speed() > AI_SPEED);
        assert!(settings.effective_ai_dead_zone() < AI_DEAD_ZONE);

        settings.difficulty = Difficulty::Easy;
        assert!(settings.effective_ai_speed() < AI_SPEED);
        assert!(settings.effective_ai_dead_zone() > AI_DEAD_ZONE);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("med"), Some(Difficulty::Normal));
        assert_eq!(Difficulty::from_str("insane"), None);
        assert_eq!(Difficulty::Easy.as_str(), "Easy");
    }

    #[test]
    fn test_paddle_columns() {
        let settings = Settings::default();
        assert_eq!(settings.player_x(), PADDLE_MARGIN);
        assert_eq!(
            settings.opponent_x() + settings.paddle_width + settings.paddle_margin,
            settings.field_width
        );
    }
}
