//! Score-triggered speed ramp.
//!
//! Every `RAMP_SCORE_INTERVAL` points the pipes speed up by
//! `RAMP_SPEED_INCREMENT` and the background follows at half the pipe speed.
//! Speeds only go back down when the world is rebuilt on restart.

use super::types::World;
use crate::core::config::GameConfig;
use crate::core::constants::{RAMP_SCORE_INTERVAL, RAMP_SPEED_INCREMENT};

/// Apply the ramp after a score increment. Returns true on a speed-up.
pub fn on_score(world: &mut World) -> bool {
    if world.score == 0 || world.score % RAMP_SCORE_INTERVAL != 0 {
        return false;
    }
    world.pipe_speed += RAMP_SPEED_INCREMENT;
    world.background_speed = GameConfig::background_speed_for(world.pipe_speed);
    tracing::info!(
        score = world.score,
        pipe_speed = world.pipe_speed,
        background_speed = world.background_speed,
        "speed up"
    );
    true
}
