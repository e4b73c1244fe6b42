//! Interface between the game core and whatever draws it.

use crate::core::config::GameConfig;
use crate::core::constants::{GAME_OVER_TEXT, READY_PROMPT, READY_TITLE};
use crate::game::types::{GamePhase, World};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub config: &'a GameConfig,
    pub world: &'a World,
    pub phase: GamePhase,
    /// Left edges of the two background tiles.
    pub background_offsets: [f64; 2],
}

impl FrameView<'_> {
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.world.score)
    }

    /// Centered overlay lines for the current phase.
    pub fn overlay_lines(&self) -> &'static [&'static str] {
        match self.phase {
            GamePhase::Ready => &[READY_TITLE, READY_PROMPT],
            GamePhase::Running => &[],
            GamePhase::GameOver => &[GAME_OVER_TEXT],
        }
    }
}

/// A drawing surface for frames.
pub trait Renderer {
    type Error;

    /// Draw background, pipes, bird, score and the phase overlay.
    fn render_frame(&mut self, frame: &FrameView<'_>) -> Result<(), Self::Error>;
}
