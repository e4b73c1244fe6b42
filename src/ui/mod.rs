//! Terminal drawing with ratatui.

pub mod renderer;
pub mod scene;

pub use renderer::TerminalRenderer;
