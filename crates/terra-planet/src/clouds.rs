//! Cloud shell spin, independent of the solar rotation.

use std::f64::consts::TAU;

use glam::DQuat;
use tracing::warn;

/// Spins the cloud shell about its local vertical axis at a constant rate.
#[derive(Clone, Debug)]
pub struct CloudSpin {
    /// Radians per second of real time.
    angular_rate: f64,
    /// Accumulated angle, `[0, 2π)`.
    angle: f64,
}

impl CloudSpin {
    /// One revolution every `period_hours / speed_multiplier` hours.
    ///
    /// A non-positive period leaves the clouds still.
    pub fn new(period_hours: f64, speed_multiplier: f64) -> Self {
        let angular_rate = if period_hours > 0.0 {
            TAU / (period_hours * 3600.0) * speed_multiplier
        } else {
            warn!(period_hours, "cloud period must be positive, clouds will not spin");
            0.0
        };
        Self {
            angular_rate,
            angle: 0.0,
        }
    }

    /// Angular rate in radians per second.
    pub fn angular_rate(&self) -> f64 {
        self.angular_rate
    }

    /// Advance by `dt` seconds of real time.
    pub fn advance(&mut self, dt: f64) {
        self.angle = terra_solar::normalize_radians(self.angle + self.angular_rate * dt);
    }

    /// Current spin angle in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Rotation of the cloud shell relative to the planet body.
    pub fn rotation(&self) -> DQuat {
        DQuat::from_rotation_y(self.angle)
    }
}
