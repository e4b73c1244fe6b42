//! Pipe movement, collision detection and scoring.

use super::ramp;
use super::types::{Bird, Pipe, World};
use crate::core::config::GameConfig;

/// What happened during one frame's collision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Pipes that left the field and scored this frame.
    pub pipes_passed: u32,
    /// The bird hit a pipe.
    pub collided: bool,
    /// The bird touched the top or bottom of the field.
    pub out_of_bounds: bool,
    /// Ramp steps triggered this frame.
    pub speed_ups: u32,
}

impl FrameOutcome {
    pub fn ended_run(&self) -> bool {
        self.collided || self.out_of_bounds
    }
}

/// True when the bird overlaps the pipe horizontally and is outside its gap.
pub fn hits_pipe(bird: &Bird, pipe: &Pipe, pipe_width: f64) -> bool {
    let overlaps_x = bird.right() >= pipe.x && bird.x <= pipe.x + pipe_width;
    let outside_gap = bird.y <= pipe.top || bird.bottom() >= pipe.bottom;
    overlaps_x && outside_gap
}

/// True when the bird touches the floor or the ceiling.
pub fn out_of_bounds(bird: &Bird, field_height: f64) -> bool {
    bird.bottom() >= field_height || bird.y <= 0.0
}

/// Move every pipe left, then check it for a hit or a pass.
///
/// Pipes are visited in creation order. The first hit ends the pass: pipes
/// after it are neither moved, removed nor scored this frame.
pub fn advance_pipes(world: &mut World, config: &GameConfig, scale: f64) -> FrameOutcome {
    let mut outcome = FrameOutcome::default();
    let mut i = 0;

    while i < world.pipes.len() {
        world.pipes[i].x -= world.pipe_speed * scale;
        let pipe = world.pipes[i];

        if hits_pipe(&world.bird, &pipe, config.pipe_width) {
            world.game_over = true;
            outcome.collided = true;
            break;
        }

        if pipe.x + config.pipe_width < 0.0 {
            world.pipes.remove(i);
            world.score += 1;
            outcome.pipes_passed += 1;
            if ramp::on_score(world) {
                outcome.speed_ups += 1;
            }
            // The next pipe slid into index i.
            continue;
        }

        i += 1;
    }

    outcome
}

/// Floor/ceiling check, run once per frame after the pipe pass.
pub fn check_bounds(world: &mut World, config: &GameConfig) -> bool {
    if out_of_bounds(&world.bird, config.field_height) {
        world.game_over = true;
        return true;
    }
    false
}
