//! Variable-timestep frame loop.
//!
//! The globe is a pure function of wall-clock time, so there is no fixed
//! simulation step to accumulate: each frame measures the elapsed monotonic
//! time and hands it to the schedule. Long stalls are clamped so a flight
//! does not jump straight to its end after a hitch.

use std::time::Instant;

use tracing::warn;

/// Maximum frame time, seconds.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Timing for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame, clamped to [`MAX_FRAME_TIME`].
    pub delta: f64,
    /// Sum of clamped deltas since the loop started.
    pub elapsed: f64,
    /// Zero-based index of this frame.
    pub frame: u64,
}

/// Measures frame-to-frame time on the monotonic clock.
pub struct FrameLoop {
    previous_time: Instant,
    elapsed: f64,
    frame_count: u64,
}

impl FrameLoop {
    /// Creates a new `FrameLoop` starting from the current instant.
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Measure the time since the previous call and advance.
    pub fn tick(&mut self) -> FrameTime {
        let current_time = Instant::now();
        let frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;
        self.advance(frame_time)
    }

    /// Advance by an explicit frame time in seconds.
    pub fn advance(&mut self, frame_time: f64) -> FrameTime {
        let mut delta = frame_time.max(0.0);
        if delta > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                delta * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            delta = MAX_FRAME_TIME;
        }

        self.elapsed += delta;
        let frame = self.frame_count;
        self.frame_count += 1;
        FrameTime {
            delta,
            elapsed: self.elapsed,
            frame,
        }
    }

    /// Returns the total number of frames run.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Returns the clamped monotonic time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
