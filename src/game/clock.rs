//! Frame-time normalization.
//!
//! Converts monotonic millisecond timestamps into a per-frame `scale`: the
//! elapsed time in seconds. Every per-second rate is multiplied by it.

use crate::core::constants::MS_PER_SECOND;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    last_frame_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the clock at the moment the run loop begins.
    pub fn start(&mut self, now_ms: f64) {
        self.last_frame_ms = Some(now_ms);
    }

    pub fn is_started(&self) -> bool {
        self.last_frame_ms.is_some()
    }

    pub fn last_frame_ms(&self) -> Option<f64> {
        self.last_frame_ms
    }

    /// Scale for the frame at `now_ms`, in seconds since the previous one.
    ///
    /// An unseeded clock is seeded here and yields 0; a timestamp older than
    /// the previous one also yields 0.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let scale = match self.last_frame_ms {
            Some(last) => ((now_ms - last) / MS_PER_SECOND).max(0.0),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);
        scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_is_elapsed_seconds() {
        let mut clock = FrameClock::new();
        clock.start(1000.0);
        assert!((clock.tick(1016.6) - 0.0166).abs() < 1e-9);
        assert!((clock.tick(1050.0) - 0.0334).abs() < 1e-9);
    }

    #[test]
    fn test_unseeded_first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert!(!clock.is_started());
        assert_eq!(clock.tick(123_456.0), 0.0);
        assert!(clock.is_started());
        assert!((clock.tick(123_556.0) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_seeded_at_start_not_zero() {
        // A clock seeded at 5000 must not report 5 seconds on the first frame.
        let mut clock = FrameClock::new();
        clock.start(5000.0);
        assert!((clock.tick(5016.0) - 0.016).abs() < 1e-9);
    }

    #[test]
    fn test_backwards_timestamp_clamped() {
        let mut clock = FrameClock::new();
        clock.start(100.0);
        assert_eq!(clock.tick(90.0), 0.0);
        assert_eq!(clock.last_frame_ms(), Some(90.0));
    }
}
