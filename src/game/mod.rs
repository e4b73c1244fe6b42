//! Flappy game core.
//!
//! A bird falls under constant gravity and snaps upward on each flap while
//! pipes scroll in from the right. Passing a pipe scores a point; every fifth
//! point speeds the pipes up. Touching a pipe, the floor or the ceiling ends
//! the run. Nothing in here knows about terminals or wall-clock time.

pub mod backdrop;
pub mod clock;
pub mod collision;
pub mod physics;
pub mod ramp;
pub mod session;
pub mod spawner;
pub mod types;

pub use backdrop::Backdrop;
pub use clock::FrameClock;
pub use collision::FrameOutcome;
pub use session::{JumpOutcome, Session};
pub use types::*;
