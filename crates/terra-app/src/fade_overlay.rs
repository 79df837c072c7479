//! Fade-to-black overlay shown when the camera arrives at the marker.
//!
//! Arrival starts a fade to full opacity. The next flight fades it back out,
//! so the overlay is a reversible curtain rather than a one-way handoff.

use tracing::debug;

/// Seconds the overlay takes to fade fully in or out.
pub const OVERLAY_FADE_SECONDS: f64 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Ramp {
    Idle,
    In { from: f32, started_at: f64 },
    Out { from: f32, started_at: f64 },
}

/// Opacity of the arrival curtain, `0` hidden to `1` fully black.
#[derive(Clone, Debug)]
pub struct FadeOverlay {
    duration: f64,
    ramp: Ramp,
    opacity: f32,
}

impl Default for FadeOverlay {
    fn default() -> Self {
        Self::new(OVERLAY_FADE_SECONDS)
    }
}

impl FadeOverlay {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            ramp: Ramp::Idle,
            opacity: 0.0,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// `true` while the overlay covers any of the view.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 || matches!(self.ramp, Ramp::In { .. })
    }

    /// Start fading toward black from the current opacity.
    pub fn fade_in(&mut self, now: f64) {
        debug!(now, "arrival overlay fading in");
        self.ramp = Ramp::In {
            from: self.opacity,
            started_at: now,
        };
    }

    /// Start fading back to clear. No-op if already hidden.
    pub fn fade_out(&mut self, now: f64) {
        if !self.is_visible() {
            return;
        }
        debug!(now, "arrival overlay fading out");
        self.ramp = Ramp::Out {
            from: self.opacity,
            started_at: now,
        };
    }

    /// Advance to monotonic time `now` and return the opacity.
    pub fn update(&mut self, now: f64) -> f32 {
        let duration = self.duration;
        let progress = |started_at: f64| {
            if duration > 0.0 {
                ((now - started_at) / duration).clamp(0.0, 1.0) as f32
            } else {
                1.0
            }
        };
        match self.ramp {
            Ramp::Idle => {}
            Ramp::In { from, started_at } => {
                let t = progress(started_at);
                self.opacity = from + (1.0 - from) * t;
                if t >= 1.0 {
                    self.ramp = Ramp::Idle;
                }
            }
            Ramp::Out { from, started_at } => {
                let t = progress(started_at);
                self.opacity = from * (1.0 - t);
                if t >= 1.0 {
                    self.ramp = Ramp::Idle;
                }
            }
        }
        self.opacity
    }
}
