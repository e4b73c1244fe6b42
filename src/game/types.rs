//! Flappy world data structures.
//!
//! All positions are logical units in a field of `field_width` ×
//! `field_height`, origin at the top-left, y growing downward.

use crate::core::config::{BirdTemplate, GameConfig};

/// The player-controlled bird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Left edge. Never changes during a run.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity in units/s (positive = downward).
    pub velocity: f64,
    pub gravity: f64,
    pub lift: f64,
}

impl Bird {
    /// Build a fresh bird from the frozen template.
    pub fn from_template(template: &BirdTemplate) -> Self {
        Self {
            x: template.x,
            y: template.y,
            width: template.width,
            height: template.height,
            velocity: template.velocity,
            gravity: template.gravity,
            lift: template.lift,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A single pipe obstacle: a top and a bottom column with a gap between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    /// Distance from the top of the field to the start of the gap.
    pub top: f64,
    /// Distance from the top of the field to the end of the gap.
    pub bottom: f64,
}

impl Pipe {
    pub fn gap(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Coarse game phase, derived from the world flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Bird shown static, waiting for the start input.
    Ready,
    /// Frames are being stepped.
    Running,
    /// Frozen after a collision, waiting for the restart input.
    GameOver,
}

/// Authoritative mutable state of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub bird: Bird,
    /// Pipes in creation order (left to right).
    pub pipes: Vec<Pipe>,
    /// Pipes passed this run.
    pub score: u32,
    pub game_over: bool,
    pub game_started: bool,
    /// Current pipe speed in units/s.
    pub pipe_speed: f64,
    /// Current background scroll speed in units/s.
    pub background_speed: f64,
}

impl World {
    /// Fresh world in the Ready phase.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bird: Bird::from_template(&config.bird),
            pipes: Vec::new(),
            score: 0,
            game_over: false,
            game_started: false,
            pipe_speed: config.base_pipe_speed,
            background_speed: GameConfig::background_speed_for(config.base_pipe_speed),
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.game_started {
            GamePhase::Running
        } else {
            GamePhase::Ready
        }
    }
}
