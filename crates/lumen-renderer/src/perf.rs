//! Frame pacing: per-frame delta, time since startup and rolling FPS.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_SAMPLES: usize = 120;

/// Deltas longer than this are clamped so a stalled frame (window drag,
/// debugger) does not teleport the camera.
const MAX_DELTA: Duration = Duration::from_millis(250);

pub struct FrameTimer {
    started: Instant,
    last_frame: Instant,
    samples: VecDeque<Duration>,
    frames: u64,
}

impl FrameTimer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            samples: VecDeque::with_capacity(MAX_SAMPLES),
            frames: 0,
        }
    }

    /// Mark the start of a frame and return the clamped delta in seconds.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.record(dt)
    }

    fn record(&mut self, dt: Duration) -> f32 {
        let dt = dt.min(MAX_DELTA);
        self.samples.push_back(dt);
        if self.samples.len() > MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.frames += 1;
        dt.as_secs_f32()
    }

    /// Seconds since the timer was created. Feeds `CurrentTime`.
    pub fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Average frames per second over the rolling window.
    pub fn fps(&self) -> f64 {
        let total: f64 = self.samples.iter().map(Duration::as_secs_f64).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.samples.len() as f64 / total
    }

    pub fn frame_time_ms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let total: f64 = self.samples.iter().map(Duration::as_secs_f64).sum();
        total / self.samples.len() as f64 * 1000.0
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_fps_is_zero() {
        let timer = FrameTimer::new();
        assert_eq!(timer.fps(), 0.0);
        assert_eq!(timer.frame_time_ms(), 0.0);
        assert_eq!(timer.frame_count(), 0);
    }

    #[test]
    fn sixty_hz_frames() {
        let mut timer = FrameTimer::new();
        for _ in 0..60 {
            let dt = timer.record(Duration::from_micros(16_667));
            assert!((dt - 0.016_667).abs() < 1e-5);
        }
        assert!((timer.fps() - 60.0).abs() < 0.1);
        assert!((timer.frame_time_ms() - 16.667).abs() < 0.01);
        assert_eq!(timer.frame_count(), 60);
    }

    #[test]
    fn long_frames_are_clamped() {
        let mut timer = FrameTimer::new();
        let dt = timer.record(Duration::from_secs(3));
        assert_eq!(dt, MAX_DELTA.as_secs_f32());
    }

    #[test]
    fn window_is_bounded() {
        let mut timer = FrameTimer::new();
        for _ in 0..200 {
            timer.record(Duration::from_millis(10));
        }
        assert_eq!(timer.samples.len(), MAX_SAMPLES);
        assert_eq!(timer.frame_count(), 200);
    }

    #[test]
    fn begin_frame_returns_nonnegative_delta() {
        let mut timer = FrameTimer::new();
        std::thread::sleep(Duration::from_millis(1));
        let dt = timer.begin_frame();
        assert!(dt > 0.0);
        assert!(timer.elapsed() >= dt);
    }
}
