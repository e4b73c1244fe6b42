//! Pipe generation at fixed horizontal spacing.

use super::types::Pipe;
use crate::core::config::GameConfig;
use rand::Rng;

/// True when the field needs a new pipe: none exist, or the newest one has
/// scrolled far enough from the right edge.
pub fn needs_pipe(pipes: &[Pipe], config: &GameConfig) -> bool {
    match pipes.last() {
        None => true,
        Some(last) => last.x < config.field_width - config.pipe_spacing,
    }
}

/// Gap tops are snapped to multiples of `1 / GAP_TOP_STEPS` units.
const GAP_TOP_STEPS: f64 = 1024.0;

/// Sample a gap top in `[min_clearance, field_height - gap - min_clearance)`.
///
/// The sample is snapped down to a 1/1024 grid so `top + gap - top` is
/// exactly `gap` for any gap on the same grid.
pub fn sample_gap_top<R: Rng>(config: &GameConfig, rng: &mut R) -> f64 {
    let min_top = config.pipe_min_clearance;
    let max_top = config.max_pipe_top();
    if max_top > min_top {
        let top = rng.gen_range(min_top..max_top);
        ((top * GAP_TOP_STEPS).floor() / GAP_TOP_STEPS).max(min_top)
    } else {
        min_top
    }
}

/// Append a new pipe at the right edge of the field.
pub fn spawn_pipe<R: Rng>(pipes: &mut Vec<Pipe>, config: &GameConfig, rng: &mut R) -> Pipe {
    let top = sample_gap_top(config, rng);
    let pipe = Pipe {
        x: config.field_width,
        top,
        bottom: top + config.pipe_gap,
    };
    pipes.push(pipe);
    pipe
}
