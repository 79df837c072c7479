//! Simulated clock: wall-clock time scaled by a constant factor.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

/// Maps wall-clock instants onto simulated instants.
///
/// `now = sim_base + (wall_now - wall_base) * time_scale`. A scale of 1.0 is
/// real time, 0.0 freezes the sun, larger values fast-forward the day.
#[derive(Clone, Debug)]
pub struct SimClock {
    sim_base: DateTime<Utc>,
    wall_base: DateTime<Utc>,
    time_scale: f64,
}

impl SimClock {
    /// Start a clock whose simulated time equals `wall_now` right now.
    pub fn new(wall_now: DateTime<Utc>, time_scale: f64) -> Self {
        Self::starting_at(wall_now, wall_now, time_scale)
    }

    /// Start a clock that reads `sim_base` at wall time `wall_base`.
    pub fn starting_at(
        sim_base: DateTime<Utc>,
        wall_base: DateTime<Utc>,
        time_scale: f64,
    ) -> Self {
        Self {
            sim_base,
            wall_base,
            time_scale,
        }
    }

    /// Current multiplier on elapsed real time.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Simulated instant corresponding to `wall_now`, at millisecond resolution.
    ///
    /// A scaled offset outside chrono's representable range leaves the clock
    /// at its base instant.
    pub fn now(&self, wall_now: DateTime<Utc>) -> DateTime<Utc> {
        let elapsed_ms = (wall_now - self.wall_base).num_milliseconds() as f64;
        let scaled_ms = (elapsed_ms * self.time_scale).round();
        Duration::try_milliseconds(scaled_ms as i64)
            .and_then(|scaled| self.sim_base.checked_add_signed(scaled))
            .unwrap_or_else(|| {
                warn!(
                    time_scale = self.time_scale,
                    scaled_ms, "simulated time out of range, holding base instant"
                );
                self.sim_base
            })
    }

    /// Change the speed without jumping the simulated instant.
    pub fn set_time_scale(&mut self, time_scale: f64, wall_now: DateTime<Utc>) {
        self.sim_base = self.now(wall_now);
        self.wall_base = wall_now;
        self.time_scale = time_scale;
        debug!(time_scale, sim = %self.sim_base, "time scale changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn wall(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, h, m, s).unwrap()
    }

    #[test]
    fn test_real_time_tracks_wall_clock() {
        let clock = SimClock::new(wall(12, 0, 0), 1.0);
        assert_eq!(clock.now(wall(12, 0, 30)), wall(12, 0, 30));
    }

    #[test]
    fn test_time_scale_accelerates() {
        let clock = SimClock::new(wall(12, 0, 0), 60.0);
        assert_eq!(clock.now(wall(12, 0, 10)), wall(12, 10, 0));
    }

    #[test]
    fn test_zero_scale_freezes() {
        let clock = SimClock::new(wall(12, 0, 0), 0.0);
        assert_eq!(clock.now(wall(18, 0, 0)), wall(12, 0, 0));
    }

    #[test]
    fn test_custom_sim_base() {
        let sim_base = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
        let clock = SimClock::starting_at(sim_base, wall(12, 0, 0), 1.0);
        assert_eq!(
            clock.now(wall(12, 1, 0)),
            Utc.with_ymd_and_hms(2024, 6, 21, 0, 1, 0).unwrap()
        );
    }

    #[test]
    fn test_millisecond_resolution() {
        let clock = SimClock::new(wall(12, 0, 0), 1.0);
        let later = wall(12, 0, 0) + Duration::milliseconds(1);
        assert_eq!((clock.now(later) - wall(12, 0, 0)).num_milliseconds(), 1);
    }

    #[test]
    fn test_out_of_range_scale_holds_base_instant() {
        for scale in [-1e20, 1e20, f64::MIN, f64::MAX] {
            let clock = SimClock::new(wall(12, 0, 0), scale);
            assert_eq!(clock.now(wall(12, 0, 1)), wall(12, 0, 0), "scale {scale}");
        }
    }

    #[test]
    fn test_large_negative_scale_within_range() {
        let clock = SimClock::new(wall(12, 0, 0), -3600.0);
        assert_eq!(
            clock.now(wall(12, 0, 1)),
            Utc.with_ymd_and_hms(2024, 3, 20, 11, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_set_time_scale_does_not_jump() {
        let mut clock = SimClock::new(wall(12, 0, 0), 10.0);
        let before = clock.now(wall(12, 1, 0));
        clock.set_time_scale(0.5, wall(12, 1, 0));
        assert_eq!(clock.now(wall(12, 1, 0)), before);
        assert_eq!(clock.now(wall(12, 1, 2)), before + Duration::seconds(1));
        assert_eq!(clock.time_scale(), 0.5);
    }
}
