//! Keyboard mapping for the game screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Start a run from the ready screen, or flap while running (Space / Up).
    Jump,
    /// Back to the ready screen after a game over (Enter).
    Restart,
    /// Leave the program (Esc / q / Ctrl-C).
    Quit,
    /// Any other key.
    Other,
}

/// Map a terminal key event to a game input. Key releases map to `Other`.
pub fn map_key(event: &KeyEvent) -> GameInput {
    if event.kind == KeyEventKind::Release {
        return GameInput::Other;
    }
    match event.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if event.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            GameInput::Quit
        }
        KeyCode::Char(' ') | KeyCode::Up => GameInput::Jump,
        KeyCode::Enter => GameInput::Restart,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        _ => GameInput::Other,
    }
}
