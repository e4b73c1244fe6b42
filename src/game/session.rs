//! Game state machine: Ready → Running → GameOver → Ready.
//!
//! A `Session` owns the frozen configuration and the mutable world. The
//! frame scheduler calls [`Session::step`] once per frame and keeps
//! scheduling only while it returns true. Input arrives through
//! [`Session::jump`] and [`Session::restart`].

use super::backdrop::Backdrop;
use super::clock::FrameClock;
use super::collision::{self, FrameOutcome};
use super::physics;
use super::spawner;
use super::types::{GamePhase, World};
use crate::core::config::GameConfig;
use crate::render::FrameView;
use rand::Rng;

/// Result of a jump input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Ready → Running. The caller must start scheduling frames.
    Started,
    /// Velocity snapped to lift while running.
    Flapped,
    /// Game over: the input has no effect.
    Ignored,
}

pub struct Session<R: Rng> {
    config: GameConfig,
    world: World,
    clock: FrameClock,
    backdrop: Backdrop,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Create a session in the Ready phase.
    pub fn new(config: GameConfig, rng: R) -> Self {
        let world = World::new(&config);
        let backdrop = Backdrop::new(config.field_width);
        Self {
            config,
            world,
            clock: FrameClock::new(),
            backdrop,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn phase(&self) -> GamePhase {
        self.world.phase()
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Handle the jump/start input at time `now_ms`.
    pub fn jump(&mut self, now_ms: f64) -> JumpOutcome {
        match self.phase() {
            GamePhase::Ready => {
                self.world.game_started = true;
                self.clock.start(now_ms);
                tracing::info!(now_ms, "run started");
                JumpOutcome::Started
            }
            GamePhase::Running => {
                physics::flap(&mut self.world.bird);
                JumpOutcome::Flapped
            }
            GamePhase::GameOver => JumpOutcome::Ignored,
        }
    }

    /// Handle the restart input. Only valid after a game over; returns
    /// whether the world was rebuilt.
    pub fn restart(&mut self) -> bool {
        if !self.world.game_over {
            return false;
        }
        let final_score = self.world.score;
        self.world = World::new(&self.config);
        self.clock = FrameClock::new();
        tracing::info!(final_score, "restarted");
        true
    }

    /// Run the frame scheduled at `now_ms`. Returns true while the next
    /// frame should be scheduled.
    pub fn step(&mut self, now_ms: f64) -> bool {
        if self.phase() != GamePhase::Running {
            return false;
        }
        let scale = self.clock.tick(now_ms);
        self.update(scale);
        !self.world.game_over
    }

    /// Advance the world by `scale` seconds.
    pub fn update(&mut self, scale: f64) -> FrameOutcome {
        if self.phase() != GamePhase::Running {
            return FrameOutcome::default();
        }

        self.backdrop.scroll(self.world.background_speed, scale);
        physics::integrate(&mut self.world.bird, scale);

        if spawner::needs_pipe(&self.world.pipes, &self.config) {
            let pipe = spawner::spawn_pipe(&mut self.world.pipes, &self.config, &mut self.rng);
            tracing::debug!(top = pipe.top, bottom = pipe.bottom, "pipe spawned");
        }

        let mut outcome = collision::advance_pipes(&mut self.world, &self.config, scale);
        outcome.out_of_bounds = collision::check_bounds(&mut self.world, &self.config);

        if outcome.ended_run() {
            tracing::info!(
                score = self.world.score,
                collided = outcome.collided,
                out_of_bounds = outcome.out_of_bounds,
                "game over"
            );
        }
        outcome
    }

    /// Snapshot for the renderer.
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            config: &self.config,
            world: &self.world,
            phase: self.phase(),
            background_offsets: self.backdrop.offsets(),
        }
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Bird, Pipe};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_session() -> Session<ChaCha8Rng> {
        Session::new(GameConfig::new(), ChaCha8Rng::seed_from_u64(7))
    }

    #[test]
    fn test_starts_ready() {
        let session = new_session();
        assert_eq!(session.phase(), GamePhase::Ready);
        assert!(!session.clock().is_started());
    }

    #[test]
    fn test_step_in_ready_does_nothing() {
        let mut session = new_session();
        let before = session.world().clone();
        assert!(!session.step(1000.0));
        assert_eq!(session.world(), &before);
    }

    #[test]
    fn test_jump_starts_and_seeds_clock() {
        let mut session = new_session();
        assert_eq!(session.jump(5000.0), JumpOutcome::Started);
        assert_eq!(session.phase(), GamePhase::Running);
        assert_eq!(session.clock().last_frame_ms(), Some(5000.0));
        // Starting does not flap.
        assert_eq!(session.world().bird.velocity, 0.0);
    }

    #[test]
    fn test_first_step_uses_seeded_time() {
        let mut session = new_session();
        session.jump(5000.0);
        assert!(session.step(5016.0));
        // 16ms of gravity, not 5 seconds.
        assert!((session.world().bird.velocity - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_jump_while_running_flaps() {
        let mut session = new_session();
        session.jump(0.0);
        session.step(100.0);
        assert_eq!(session.jump(110.0), JumpOutcome::Flapped);
        assert_eq!(session.world().bird.velocity, -300.0);
    }

    #[test]
    fn test_concrete_jump_scenario() {
        let mut session = new_session();
        session.jump(0.0);
        session.jump(0.0);
        session.step(16.6);
        let bird = session.world().bird;
        assert!((bird.velocity - (-283.4)).abs() < 1e-6);
        assert!((bird.y - 295.29556).abs() < 1e-4);
    }

    #[test]
    fn test_first_frame_spawns_pipe_at_edge() {
        let mut session = new_session();
        session.jump(0.0);
        session.step(16.0);
        let pipes = &session.world().pipes;
        assert_eq!(pipes.len(), 1);
        // Spawned at 800 then moved by the same frame.
        assert!((pipes[0].x - (800.0 - 400.0 * 0.016)).abs() < 1e-9);
    }

    #[test]
    fn test_game_over_freezes_world() {
        let mut session = new_session();
        session.jump(0.0);
        session.world_mut().bird.y = -5.0;
        assert!(!session.step(16.0));
        assert_eq!(session.phase(), GamePhase::GameOver);

        let frozen = session.world().clone();
        assert!(!session.step(32.0));
        assert_eq!(session.jump(40.0), JumpOutcome::Ignored);
        assert_eq!(session.world(), &frozen);
    }

    #[test]
    fn test_update_reports_hit_and_bounds_together() {
        let mut session = new_session();
        session.jump(0.0);
        {
            let world = session.world_mut();
            world.bird.y = -1.0;
            world.pipes.push(Pipe {
                x: 100.0,
                top: 100.0,
                bottom: 350.0,
            });
        }

        let outcome = session.update(0.0);

        assert!(outcome.collided);
        assert!(outcome.out_of_bounds);
        assert!(outcome.ended_run());
        assert_eq!(session.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_restart_ignored_unless_game_over() {
        let mut session = new_session();
        assert!(!session.restart());
        session.jump(0.0);
        session.step(16.0);
        assert!(!session.restart());
        assert_eq!(session.phase(), GamePhase::Running);
    }

    #[test]
    fn test_restart_restores_template() {
        let mut session = new_session();
        session.jump(0.0);
        {
            let world = session.world_mut();
            world.score = 12;
            world.pipe_speed = 500.0;
            world.background_speed = 250.0;
            world.pipes.push(Pipe {
                x: 50.0,
                top: 60.0,
                bottom: 310.0,
            });
            world.bird.velocity = 123.0;
            world.bird.y = 599.0;
        }
        session.step(16.0);
        assert_eq!(session.phase(), GamePhase::GameOver);

        assert!(session.restart());

        let world = session.world();
        assert_eq!(session.phase(), GamePhase::Ready);
        assert_eq!(world.bird, Bird::from_template(&session.config().bird));
        assert!(world.pipes.is_empty());
        assert_eq!(world.score, 0);
        assert_eq!(world.pipe_speed, 400.0);
        assert_eq!(world.background_speed, 200.0);
        assert!(!session.clock().is_started());
    }

    #[test]
    fn test_backdrop_scrolls_only_while_running() {
        let mut session = new_session();
        session.update(1.0);
        assert_eq!(session.backdrop().x1, 0.0);

        session.jump(0.0);
        session.step(100.0);
        assert!((session.backdrop().x1 - (-20.0)).abs() < 1e-9);
    }

    #[test]
    fn test_view_reflects_world() {
        let mut session = new_session();
        session.jump(0.0);
        session.step(16.0);
        let view = session.view();
        assert_eq!(view.phase, GamePhase::Running);
        assert_eq!(view.world.pipes.len(), 1);
        assert_eq!(view.config.field_width, 800.0);
    }
}
