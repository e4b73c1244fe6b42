// Play field (logical units, origin top-left, y grows downward)
pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;

// Bird template
pub const BIRD_X: f64 = 100.0;
pub const BIRD_Y: f64 = 300.0;
pub const BIRD_WIDTH: f64 = 40.0;
pub const BIRD_HEIGHT: f64 = 30.0;
pub const BIRD_GRAVITY: f64 = 1000.0; // units/s²
pub const BIRD_LIFT: f64 = -300.0; // units/s, replaces velocity on flap

// Pipes
pub const PIPE_WIDTH: f64 = 100.0;
pub const PIPE_GAP: f64 = 250.0;
pub const PIPE_SPACING: f64 = 300.0;
pub const PIPE_MIN_CLEARANCE: f64 = 50.0;
pub const BASE_PIPE_SPEED: f64 = 400.0; // units/s

// Difficulty ramp
pub const RAMP_SCORE_INTERVAL: u32 = 5;
pub const RAMP_SPEED_INCREMENT: f64 = 50.0;

// Frame scheduling
pub const MS_PER_SECOND: f64 = 1000.0;
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS
pub const IDLE_POLL_MS: u64 = 250;

// Overlay text
pub const READY_TITLE: &str = "Ready?";
pub const READY_PROMPT: &str = "Press Space to Start";
pub const GAME_OVER_TEXT: &str = "Game Over. Press Enter to Restart";
