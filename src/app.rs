//! Frame scheduler: drives a [`Session`] from timed input events.
//!
//! One frame is stepped per frame interval while the session asks for more;
//! between frames the loop waits for input no longer than the next deadline.
//! When `step` returns false no further frame is scheduled, and the loop just
//! waits for the restart or quit key.

use crate::core::constants::IDLE_POLL_MS;
use crate::error::AppError;
use crate::game::{GamePhase, JumpOutcome, Session};
use crate::input::{map_key, GameInput};
use crate::render::Renderer;
use crossterm::event::{self, Event};
use rand::Rng;
use std::io;
use std::time::{Duration, Instant};

/// Source of input events and monotonic time.
pub trait EventSource {
    /// Milliseconds on a monotonic clock.
    fn now_ms(&self) -> f64;

    /// Wait at most `timeout` for the next input. `None` on timeout.
    fn next_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>>;
}

/// Terminal keyboard input through crossterm.
pub struct CrosstermEvents {
    epoch: Instant,
}

impl CrosstermEvents {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for CrosstermEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEvents {
    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    fn next_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key_event) => Ok(Some(map_key(&key_event))),
            // Redraw on resize.
            Event::Resize(_, _) => Ok(Some(GameInput::Other)),
            _ => Ok(None),
        }
    }
}

/// Totals for one program run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames stepped across all runs.
    pub frames: u64,
    /// Runs started.
    pub runs: u32,
    /// Best final score.
    pub best_score: u32,
}

/// Run the game until the quit input.
pub fn run<R, E, D>(
    session: &mut Session<R>,
    events: &mut E,
    renderer: &mut D,
) -> Result<RunStats, AppError>
where
    R: Rng,
    E: EventSource,
    D: Renderer,
    AppError: From<D::Error>,
{
    let interval_ms = session.config().frame_interval_ms as f64;
    let mut stats = RunStats::default();
    let mut next_frame_at: Option<f64> = None;

    renderer.render_frame(&session.view())?;

    loop {
        let now = events.now_ms();
        let wait_ms = match next_frame_at {
            Some(due) => (due - now).max(0.0),
            None => IDLE_POLL_MS as f64,
        };

        // Rounded up so a wait never collapses to zero short of the deadline.
        let timeout = Duration::from_micros((wait_ms * 1000.0).ceil() as u64);
        if let Some(input) = events.next_input(timeout)? {
            let now = events.now_ms();
            match input {
                GameInput::Quit => break,
                GameInput::Jump => {
                    if session.jump(now) == JumpOutcome::Started {
                        stats.runs += 1;
                        next_frame_at = Some(now + interval_ms);
                    }
                }
                GameInput::Restart => {
                    if session.restart() {
                        next_frame_at = None;
                        renderer.render_frame(&session.view())?;
                    }
                }
                GameInput::Other => {
                    if next_frame_at.is_none() {
                        renderer.render_frame(&session.view())?;
                    }
                }
            }
        }

        if let Some(due) = next_frame_at {
            let now = events.now_ms();
            if now >= due {
                let keep_going = session.step(now);
                stats.frames += 1;
                renderer.render_frame(&session.view())?;

                if keep_going {
                    next_frame_at = Some(now + interval_ms);
                } else {
                    next_frame_at = None;
                    if session.phase() == GamePhase::GameOver {
                        stats.best_score = stats.best_score.max(session.world().score);
                    }
                }
            }
        }
    }

    tracing::info!(
        frames = stats.frames,
        runs = stats.runs,
        best_score = stats.best_score,
        "quit"
    );
    Ok(stats)
}
