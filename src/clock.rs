//! Frame clock
//!
//! Caps the render loop at a target frame rate by sleeping out the rest of
//! each frame, and reports the elapsed time used for animation.

use std::time::{Duration, Instant};

/// Weight of the newest sample in the FPS moving average
const FPS_SMOOTHING: f32 = 0.1;

pub struct FrameClock {
    frame_duration: Duration,
    last_frame: Instant,
    fps: f32,
}

impl FrameClock {
    /// Creates a clock targeting `target_fps` frames per second
    pub fn new(target_fps: u32) -> Self {
        let target_fps = target_fps.max(1);
        FrameClock {
            frame_duration: Duration::new(0, 1_000_000_000u32 / target_fps),
            last_frame: Instant::now(),
            fps: target_fps as f32,
        }
    }

    /// Sleep until the current frame has lasted at least one frame duration
    ///
    /// Returns the seconds elapsed since the previous call.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last_frame.elapsed();
        if elapsed < self.frame_duration {
            std::thread::sleep(self.frame_duration - elapsed);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if dt > 0.0 {
            self.fps += (1.0 / dt - self.fps) * FPS_SMOOTHING;
        }

        dt
    }

    /// Smoothed frames per second
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_waits_at_least_one_frame() {
        let mut clock = FrameClock::new(200);
        let dt = clock.tick();
        assert!(dt >= 0.005, "dt was {}", dt);
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.fps(), 1.0);
    }

    #[test]
    fn test_fps_starts_at_target() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.fps(), 60.0);
    }
}
