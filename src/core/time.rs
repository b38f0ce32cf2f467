//! Frame timing utilities

use std::time::{Duration, Instant};

/// Snapshot of the clock state, suitable for logging or export
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct FrameStats {
    pub fps: f32,
    pub frame_count: u64,
    pub elapsed_secs: f32,
}

/// Tracks per-frame timing and the monotonically increasing elapsed time
/// handed to the particle engine each frame.
pub struct FrameClock {
    started: Instant,
    last_frame: Instant,
    delta: Duration,
    frame_count: u64,
    fps_timer: Instant,
    fps: f32,
    fps_frame_count: u32,
}

impl FrameClock {
    /// Create a new frame clock
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            delta: Duration::ZERO,
            frame_count: 0,
            fps_timer: now,
            fps: 0.0,
            fps_frame_count: 0,
        }
    }

    /// Call once per frame to update timing
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_frame;
        self.last_frame = now;
        self.frame_count += 1;
        self.fps_frame_count += 1;

        // Update FPS every second
        let fps_elapsed = now - self.fps_timer;
        if fps_elapsed >= Duration::from_secs(1) {
            self.fps = self.fps_frame_count as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = 0;
            self.fps_timer = now;
        }
    }

    /// Get delta time in seconds
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Seconds since the clock was created; never decreases
    pub fn elapsed_secs(&self) -> f32 {
        (self.last_frame - self.started).as_secs_f32()
    }

    /// Get current FPS (updated every second)
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Get total frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats {
            fps: self.fps,
            frame_count: self.frame_count,
            elapsed_secs: self.elapsed_secs(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_monotonic() {
        let mut clock = FrameClock::new();
        let mut last = clock.elapsed_secs();
        for _ in 0..10 {
            clock.tick();
            let now = clock.elapsed_secs();
            assert!(now >= last);
            last = now;
        }
        assert_eq!(clock.frame_count(), 10);
    }

    #[test]
    fn test_delta_non_negative() {
        let mut clock = FrameClock::new();
        clock.tick();
        assert!(clock.delta_secs() >= 0.0);
    }
}
