//! [`Renderer`] backed by a ratatui terminal.

use super::scene::render_flappy;
use crate::assets::SpriteSet;
use crate::render::{FrameView, Renderer};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    sprites: SpriteSet,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, sprites: SpriteSet) -> Self {
        Self { terminal, sprites }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    type Error = io::Error;

    fn render_frame(&mut self, view: &FrameView<'_>) -> io::Result<()> {
        let sprites = &self.sprites;
        self.terminal.draw(|frame| {
            let area = frame.size();
            render_flappy(frame, area, view, sprites);
        })?;
        Ok(())
    }
}
