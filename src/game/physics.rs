//! Bird motion: constant gravity and the flap velocity override.

use super::types::Bird;

/// Advance the bird by one frame. Velocity is updated before position.
pub fn integrate(bird: &mut Bird, scale: f64) {
    bird.velocity += bird.gravity * scale;
    bird.y += bird.velocity * scale;
}

/// Snap the velocity to the lift value. Not additive: prior velocity is lost.
pub fn flap(bird: &mut Bird) {
    bird.velocity = bird.lift;
}
