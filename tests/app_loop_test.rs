//! Integration test: the frame scheduler against a virtual clock.

use flappy::app::{self, EventSource};
use flappy::core::config::GameConfig;
use flappy::error::AppError;
use flappy::game::{GamePhase, Session};
use flappy::input::GameInput;
use flappy::render::{FrameView, Renderer};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Inputs delivered at fixed virtual times. Waiting advances the clock.
struct ScriptedEvents {
    now_ms: f64,
    script: VecDeque<(f64, GameInput)>,
}

impl ScriptedEvents {
    fn new(script: &[(f64, GameInput)]) -> Self {
        Self {
            now_ms: 0.0,
            script: script.iter().copied().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn next_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        assert!(self.now_ms < 600_000.0, "script never quit");
        let deadline = self.now_ms + timeout.as_secs_f64() * 1000.0;
        match self.script.front() {
            Some(&(at, input)) if at <= deadline => {
                self.script.pop_front();
                self.now_ms = self.now_ms.max(at);
                Ok(Some(input))
            }
            _ => {
                self.now_ms = deadline;
                Ok(None)
            }
        }
    }
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<(GamePhase, u32)>,
    fail: bool,
}

impl Renderer for RecordingRenderer {
    type Error = io::Error;

    fn render_frame(&mut self, view: &FrameView<'_>) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        }
        self.frames.push((view.phase, view.world.score));
        Ok(())
    }
}

fn new_session(config: GameConfig) -> Session<ChaCha8Rng> {
    Session::new(config, ChaCha8Rng::seed_from_u64(3))
}

#[test]
fn test_frames_scheduled_at_interval() {
    let mut session = new_session(GameConfig::new());
    let mut events = ScriptedEvents::new(&[(100.0, GameInput::Jump), (600.0, GameInput::Quit)]);
    let mut renderer = RecordingRenderer::default();

    let stats = app::run(&mut session, &mut events, &mut renderer).unwrap();

    assert_eq!(stats.runs, 1);
    // One frame every 16 ms between 116 and 600.
    assert!((30..=31).contains(&stats.frames), "frames {}", stats.frames);
    assert_eq!(renderer.frames.first(), Some(&(GamePhase::Ready, 0)));
    assert_eq!(renderer.frames.last().map(|f| f.0), Some(GamePhase::Running));
    assert_eq!(session.phase(), GamePhase::Running);
}

#[test]
fn test_no_frames_without_start() {
    let mut session = new_session(GameConfig::new());
    let mut events = ScriptedEvents::new(&[
        (50.0, GameInput::Other),
        (100.0, GameInput::Restart),
        (2000.0, GameInput::Quit),
    ]);
    let mut renderer = RecordingRenderer::default();

    let stats = app::run(&mut session, &mut events, &mut renderer).unwrap();

    assert_eq!(stats.frames, 0);
    assert_eq!(stats.runs, 0);
    assert_eq!(session.phase(), GamePhase::Ready);
    assert!(renderer.frames.iter().all(|f| f.0 == GamePhase::Ready));
}

#[test]
fn test_game_over_stops_frames_until_restart() {
    let mut session = new_session(GameConfig::new());
    let mut events = ScriptedEvents::new(&[
        (0.0, GameInput::Jump),
        // Falls to the floor well before this.
        (3000.0, GameInput::Jump),
        (3100.0, GameInput::Restart),
        (3200.0, GameInput::Jump),
        (3300.0, GameInput::Quit),
    ]);
    let mut renderer = RecordingRenderer::default();

    let stats = app::run(&mut session, &mut events, &mut renderer).unwrap();

    assert_eq!(stats.runs, 2);
    let phases: Vec<GamePhase> = renderer.frames.iter().map(|f| f.0).collect();
    let over = phases
        .iter()
        .position(|p| *p == GamePhase::GameOver)
        .unwrap();
    // Exactly one game-over frame, then the restart redraw.
    assert_eq!(phases[over + 1], GamePhase::Ready);
    assert_eq!(phases[over + 2..].iter().filter(|p| **p == GamePhase::GameOver).count(), 0);
    // About 0.7 s of falling plus 100 ms of the second run.
    assert!(stats.frames > 40 && stats.frames < 60, "frames {}", stats.frames);
}

#[test]
fn test_best_score_recorded_on_game_over() {
    let mut config = GameConfig::new();
    config.pipe_gap = 500.0;
    config.bird.gravity = 5.0;
    config.bird.lift = 0.0;
    let mut session = new_session(config);
    let mut events = ScriptedEvents::new(&[(0.0, GameInput::Jump), (20_000.0, GameInput::Quit)]);
    let mut renderer = RecordingRenderer::default();

    let stats = app::run(&mut session, &mut events, &mut renderer).unwrap();

    assert_eq!(session.phase(), GamePhase::GameOver);
    assert_eq!(stats.best_score, session.world().score);
    assert!(stats.best_score >= 5);
}

#[test]
fn test_render_error_propagates() {
    let mut session = new_session(GameConfig::new());
    let mut events = ScriptedEvents::new(&[(0.0, GameInput::Quit)]);
    let mut renderer = RecordingRenderer {
        fail: true,
        ..Default::default()
    };

    let err = app::run(&mut session, &mut events, &mut renderer).unwrap_err();
    assert!(matches!(err, AppError::Terminal(_)));
}
