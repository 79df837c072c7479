//! Startup fade: eases the globe into view once textures have loaded.

use tracing::debug;

/// Ease-out cubic, `1 - (1 - t)^3` for `t` clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Monotonic 0 → 1 gain ramp that starts when loading first finishes.
///
/// The gain never decreases and the ramp never restarts.
#[derive(Clone, Debug)]
pub struct StartupFade {
    duration: f64,
    started_at: Option<f64>,
    gain: f32,
}

impl StartupFade {
    /// Create a fade lasting `duration` seconds. Non-positive durations snap to full gain.
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            started_at: None,
            gain: 0.0,
        }
    }

    /// Current gain in `[0, 1]`.
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// `true` once the gain has reached 1.
    pub fn is_complete(&self) -> bool {
        self.gain >= 1.0
    }

    /// Advance the fade. `now` is a monotonic time in seconds and `loading`
    /// is the collaborator's "still loading" flag.
    pub fn update(&mut self, now: f64, loading: bool) -> f32 {
        let started_at = match self.started_at {
            Some(t) => t,
            None if loading => return self.gain,
            None => {
                debug!(now, "assets loaded, starting fade-in");
                self.started_at = Some(now);
                now
            }
        };

        let target = if self.duration > 0.0 {
            ease_out_cubic((now - started_at) / self.duration) as f32
        } else {
            1.0
        };
        self.gain = self.gain.max(target);
        self.gain
    }
}
