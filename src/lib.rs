//! Flappy - terminal flappy-bird arcade game.
//!
//! The game core in [`game`] is pure and clock-driven; [`app`] schedules
//! frames against real time and [`ui`] draws them with ratatui.

pub mod app;
pub mod assets;
pub mod core;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
pub mod ui;
