//! Runtime configuration for a game session.
//!
//! Every field defaults to the value in `constants.rs`, so a config file only
//! needs to name what it changes. The difficulty ramp is not part of the
//! config; its interval and increment are fixed.

use super::constants::*;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Immutable starting state of the bird. Every reset builds a fresh bird
/// from this record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirdTemplate {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Downward acceleration in units/s².
    pub gravity: f64,
    /// Velocity the bird snaps to on a flap (negative = upward).
    pub lift: f64,
    pub velocity: f64,
}

impl Default for BirdTemplate {
    fn default() -> Self {
        Self {
            x: BIRD_X,
            y: BIRD_Y,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
            gravity: BIRD_GRAVITY,
            lift: BIRD_LIFT,
            velocity: 0.0,
        }
    }
}

/// Full game configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f64,
    pub field_height: f64,
    pub bird: BirdTemplate,
    pub pipe_width: f64,
    pub pipe_gap: f64,
    pub pipe_spacing: f64,
    pub pipe_min_clearance: f64,
    pub base_pipe_speed: f64,
    /// Milliseconds between scheduled frames.
    pub frame_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            bird: BirdTemplate::default(),
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_spacing: PIPE_SPACING,
            pipe_min_clearance: PIPE_MIN_CLEARANCE,
            base_pipe_speed: BASE_PIPE_SPEED,
            frame_interval_ms: REALTIME_FRAME_MS,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Background scroll speed that pairs with a pipe speed.
    pub fn background_speed_for(pipe_speed: f64) -> f64 {
        pipe_speed / 2.0
    }

    /// Highest allowed value for a pipe's top edge.
    pub fn max_pipe_top(&self) -> f64 {
        self.field_height - self.pipe_gap - self.pipe_min_clearance
    }

    /// Reject configurations the game rules cannot satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("bird.width", self.bird.width),
            ("bird.height", self.bird.height),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_spacing", self.pipe_spacing),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !(self.pipe_min_clearance.is_finite() && self.pipe_min_clearance >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "pipe_min_clearance must not be negative, got {}",
                self.pipe_min_clearance
            )));
        }

        if self.max_pipe_top() < self.pipe_min_clearance {
            return Err(ConfigError::Invalid(format!(
                "pipe_gap {} plus twice the clearance {} does not fit in field_height {}",
                self.pipe_gap, self.pipe_min_clearance, self.field_height
            )));
        }

        if !(self.base_pipe_speed.is_finite() && self.base_pipe_speed >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "base_pipe_speed must not be negative, got {}",
                self.base_pipe_speed
            )));
        }

        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "frame_interval_ms must be at least 1".to_string(),
            ));
        }

        let bird_bottom = self.bird.y + self.bird.height;
        if self.bird.y <= 0.0 || bird_bottom >= self.field_height {
            return Err(ConfigError::Invalid(format!(
                "bird must start inside the field, spans {} to {}",
                self.bird.y, bird_bottom
            )));
        }

        Ok(())
    }
}
