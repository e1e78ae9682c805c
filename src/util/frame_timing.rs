//! Per-frame timing: FPS limiting and a smoothed FPS readout.

use web_time::{Duration, Instant};

/// Paces the render loop against an FPS cap and tracks a smoothed rate.
pub struct FrameTiming {
    /// Cap in frames per second; 0 disables pacing.
    target_fps: u32,
    /// Shortest allowed gap between rendered frames.
    min_frame_duration: Duration,
    /// When the previous frame finished.
    last_frame: Instant,
    /// Exponential moving average of the frame rate.
    smoothed_fps: f32,
    /// EMA weight given to each new frame, in (0, 1].
    smoothing: f32,
}

impl FrameTiming {
    /// A timer pacing to `target_fps`; 0 renders as fast as possible.
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05, // 5% new value per frame for a stable readout
        }
    }

    /// Whether enough time has passed since the last frame to render again.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Record that a frame just finished and fold it into the FPS average.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current FPS (smoothed with an exponential moving average).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// The configured FPS cap (0 = unlimited).
    #[must_use]
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
        assert_eq!(timing.target_fps(), 0);
    }

    #[test]
    fn test_capped_timer_waits_out_min_duration() {
        // A 1 FPS cap means a frame created "now" must not render again
        // immediately.
        let timing = FrameTiming::new(1);
        assert!(!timing.should_render());
    }

    #[test]
    fn test_fps_smoothing_moves_toward_instant_rate() {
        let mut timing = FrameTiming::new(0);
        let before = timing.fps();
        std::thread::sleep(Duration::from_millis(30));
        timing.end_frame();
        // ~33 FPS instantaneous pulls the 60 FPS seed downward.
        assert!(timing.fps() < before);
    }
}
